//! Mock services for testing
//!
//! A [`CommandRunner`] that records commands instead of running them, so
//! tests can assert the exact argument vector and working directory.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use vcs_get::infrastructure::process::{CommandRunner, CommandRunnerError, CommandSpec};

/// Records every command; optionally fails a given program
#[derive(Debug, Default, Clone)]
pub struct MockCommandRunner {
    commands: Arc<Mutex<Vec<CommandSpec>>>,
    failing_program: Arc<Mutex<Option<String>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` exit with status 1
    pub fn fail(&self, program: &str) {
        *self.failing_program.lock().unwrap() = Some(program.to_string());
    }

    pub fn commands(&self) -> Vec<CommandSpec> {
        self.commands.lock().unwrap().clone()
    }

    /// Rendered command lines, in call order
    pub fn command_lines(&self) -> Vec<String> {
        self.commands().iter().map(ToString::to_string).collect()
    }
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<(), CommandRunnerError> {
        self.commands.lock().unwrap().push(spec.clone());
        if self.failing_program.lock().unwrap().as_deref() == Some(spec.program.as_str()) {
            return Err(CommandRunnerError::CommandFailed {
                command: spec.to_string(),
                exit_code: 1,
                working_dir: spec.working_dir.clone(),
            });
        }
        Ok(())
    }

    async fn capture(&self, spec: &CommandSpec) -> Result<String, CommandRunnerError> {
        self.run(spec).await.map(|_| String::new())
    }
}
