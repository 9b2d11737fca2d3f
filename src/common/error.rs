use crate::application::services::ResolveError;
use crate::domain::value_objects::{remote_url::RemoteUrlError, vcs_type::VcsTypeError};
use crate::infrastructure::filesystem::ConfigStoreError;
use crate::infrastructure::process::CommandRunnerError;
use crate::infrastructure::vcs::VcsError;
use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide error returned by the get and list use cases
#[derive(Error, Debug)]
pub enum GetError {
    #[error("Unsupported VCS operation for {vcs}: {operation}")]
    UnsupportedVcs { vcs: String, operation: String },

    #[error("Cannot resolve reference '{reference}': {reason}")]
    UnresolvedReference { reference: String, reason: String },

    #[error(
        "External command `{command}` failed{}{}",
        exit_suffix(.exit_code),
        dir_suffix(.working_dir)
    )]
    ExternalCommandFailed {
        command: String,
        exit_code: Option<i32>,
        working_dir: Option<PathBuf>,
    },

    #[error("Ambiguous local path {}: found under {}", .path.display(), join_paths(.candidates))]
    AmbiguousLocalPath {
        path: PathBuf,
        candidates: Vec<PathBuf>,
    },

    #[error(transparent)]
    Config(#[from] ConfigStoreError),

    #[error("Invalid remote URL: {0}")]
    InvalidUrl(#[from] RemoteUrlError),

    #[error("File system operation failed on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Vcs(VcsError),
}

fn exit_suffix(code: &Option<i32>) -> String {
    code.map(|code| format!(" with exit code {code}"))
        .unwrap_or_default()
}

fn dir_suffix(dir: &Option<PathBuf>) -> String {
    dir.as_ref()
        .map(|dir| format!(" (in {})", dir.display()))
        .unwrap_or_default()
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl GetError {
    pub fn unresolved(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            reference: reference.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<VcsError> for GetError {
    fn from(error: VcsError) -> Self {
        match error {
            VcsError::Unsupported { vcs, operation } => Self::UnsupportedVcs {
                vcs: vcs.to_string(),
                operation,
            },
            VcsError::Command {
                source:
                    CommandRunnerError::CommandFailed {
                        command,
                        exit_code,
                        working_dir,
                    },
                ..
            } => Self::ExternalCommandFailed {
                command,
                exit_code: Some(exit_code),
                working_dir,
            },
            VcsError::Io { path, source } => Self::Io { path, source },
            other => Self::Vcs(other),
        }
    }
}

impl From<VcsTypeError> for GetError {
    fn from(error: VcsTypeError) -> Self {
        match error {
            VcsTypeError::UnsupportedVcsType(name) => Self::UnsupportedVcs {
                vcs: name,
                operation: "select backend".to_string(),
            },
        }
    }
}

impl From<ResolveError> for GetError {
    fn from(error: ResolveError) -> Self {
        match error {
            ResolveError::Unresolved { reference, reason } => {
                Self::UnresolvedReference { reference, reason }
            }
            ResolveError::Ambiguous { path, candidates } => {
                Self::AmbiguousLocalPath { path, candidates }
            }
            ResolveError::InvalidUrl(source) => Self::InvalidUrl(source),
            ResolveError::Metadata { reference, source } => Self::UnresolvedReference {
                reference,
                reason: source.to_string(),
            },
        }
    }
}
