/// Process execution for the external VCS tools
pub mod command_runner;

#[cfg(test)]
pub(crate) mod recording;

pub use command_runner::{CommandRunner, CommandRunnerError, CommandSpec, ProcessCommandRunner};
