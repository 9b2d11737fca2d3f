use async_trait::async_trait;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

/// Errors raised while running an external command
#[derive(Debug, Error)]
pub enum CommandRunnerError {
    #[error("Executable not found: {program}")]
    ExecutableNotFound { program: String },

    #[error("Command `{command}` failed with exit code {exit_code}{}", dir_suffix(.working_dir))]
    CommandFailed {
        command: String,
        exit_code: i32,
        working_dir: Option<PathBuf>,
    },

    #[error("Failed to run `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
}

fn dir_suffix(dir: &Option<PathBuf>) -> String {
    dir.as_ref()
        .map(|dir| format!(" (in {})", dir.display()))
        .unwrap_or_default()
}

/// One external command invocation: program, exact argument vector and
/// optional working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub silent: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            silent: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Program followed by its arguments
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv().join(" "))
    }
}

/// Executes external commands on behalf of the VCS backends
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command to completion, failing on a non-zero exit
    async fn run(&self, spec: &CommandSpec) -> Result<(), CommandRunnerError>;

    /// Run the command and return its trimmed standard output
    async fn capture(&self, spec: &CommandSpec) -> Result<String, CommandRunnerError>;
}

/// Runs commands as child processes with `tokio::process`
#[derive(Debug, Default, Clone)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn build(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args).stdin(Stdio::null());
        if let Some(dir) = &spec.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn spawn_error(spec: &CommandSpec, error: io::Error) -> CommandRunnerError {
        match error.kind() {
            io::ErrorKind::NotFound => CommandRunnerError::ExecutableNotFound {
                program: spec.program.clone(),
            },
            _ => CommandRunnerError::Io {
                command: spec.to_string(),
                source: error,
            },
        }
    }

    fn failed(spec: &CommandSpec, status: std::process::ExitStatus) -> CommandRunnerError {
        CommandRunnerError::CommandFailed {
            command: spec.to_string(),
            exit_code: status.code().unwrap_or(-1),
            working_dir: spec.working_dir.clone(),
        }
    }
}

#[async_trait]
impl CommandRunner for ProcessCommandRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<(), CommandRunnerError> {
        tracing::debug!(command = %spec, dir = ?spec.working_dir, "running");

        let mut cmd = Self::build(spec);
        if spec.silent {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let status = cmd
            .status()
            .await
            .map_err(|e| Self::spawn_error(spec, e))?;

        if !status.success() {
            return Err(Self::failed(spec, status));
        }
        Ok(())
    }

    async fn capture(&self, spec: &CommandSpec) -> Result<String, CommandRunnerError> {
        tracing::debug!(command = %spec, dir = ?spec.working_dir, "capturing");

        let output = Self::build(spec)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| Self::spawn_error(spec, e))?;

        if !output.status.success() {
            return Err(Self::failed(spec, output.status));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
