use super::command_runner::{CommandRunner, CommandRunnerError, CommandSpec};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Runner that records every command instead of executing it
#[derive(Debug, Default, Clone)]
pub(crate) struct RecordingRunner {
    commands: Arc<Mutex<Vec<CommandSpec>>>,
    failing_programs: Arc<Mutex<Vec<String>>>,
    captured_output: Arc<Mutex<HashMap<String, String>>>,
}

impl RecordingRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Make every command of `program` exit with status 1
    pub(crate) fn fail_program(&self, program: &str) {
        self.failing_programs.lock().unwrap().push(program.to_string());
    }

    /// Output returned by `capture` for the given rendered command line
    pub(crate) fn set_output(&self, command_line: &str, output: &str) {
        self.captured_output
            .lock()
            .unwrap()
            .insert(command_line.to_string(), output.to_string());
    }

    pub(crate) fn commands(&self) -> Vec<CommandSpec> {
        self.commands.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> CommandSpec {
        self.commands()
            .last()
            .cloned()
            .expect("no command was recorded")
    }

    fn record(&self, spec: &CommandSpec) -> Result<(), CommandRunnerError> {
        self.commands.lock().unwrap().push(spec.clone());
        if self.failing_programs.lock().unwrap().contains(&spec.program) {
            return Err(CommandRunnerError::CommandFailed {
                command: spec.to_string(),
                exit_code: 1,
                working_dir: spec.working_dir.clone(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<(), CommandRunnerError> {
        self.record(spec)
    }

    async fn capture(&self, spec: &CommandSpec) -> Result<String, CommandRunnerError> {
        self.record(spec)?;
        Ok(self
            .captured_output
            .lock()
            .unwrap()
            .get(&spec.to_string())
            .cloned()
            .unwrap_or_default())
    }
}
