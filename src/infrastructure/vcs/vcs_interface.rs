use crate::domain::entities::local_roots::normalize_path;
use crate::domain::value_objects::{remote_url::RemoteUrl, vcs_type::VcsType};
use crate::infrastructure::process::{CommandRunner, CommandRunnerError, CommandSpec};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Clone and update operations of one version control system.
///
/// Implementations hold no per-operation state: everything an operation
/// needs comes from the [`CloneOptions`] argument, so one instance can serve
/// independent directories concurrently. Two operations on the same
/// directory are not coordinated.
#[async_trait]
pub trait VcsOperations: Send + Sync {
    /// The VCS this implementation handles
    fn vcs_type(&self) -> VcsType;

    /// Create a new working copy of `options.url` at `options.dir`
    async fn clone_repository(&self, options: &CloneOptions) -> Result<(), VcsError>;

    /// Bring the working copy at `options.dir` up to date with its remote
    async fn update_repository(&self, options: &CloneOptions) -> Result<(), VcsError>;
}

/// Options passed to every backend operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneOptions {
    /// Remote to clone from; ignored by updates
    pub url: Option<RemoteUrl>,
    /// Absolute working copy root, without trailing separator
    pub dir: PathBuf,
    /// Request the cheapest history depth the backend supports
    pub shallow: bool,
    /// Branch or tag to check out; `None` or empty means the default branch
    pub branch: Option<String>,
    /// Suppress the tool's own output
    pub silent: bool,
}

impl CloneOptions {
    /// Options for cloning `url` into `dir`
    pub fn for_clone(url: RemoteUrl, dir: impl AsRef<Path>) -> Self {
        Self {
            url: Some(url),
            dir: normalize_path(dir.as_ref()),
            ..Self::default()
        }
    }

    /// Options for updating the working copy at `dir`
    pub fn for_update(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: normalize_path(dir.as_ref()),
            ..Self::default()
        }
    }

    pub fn with_shallow(mut self, shallow: bool) -> Self {
        self.shallow = shallow;
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Requested branch, treating an empty name as no request
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref().filter(|branch| !branch.is_empty())
    }

    /// Refuse a clone `vcs` cannot perform as requested. Touches nothing on
    /// disk, so callers may run it before preparing directories.
    pub fn check_supported(&self, vcs: VcsType) -> Result<(), VcsError> {
        if !vcs.is_supported() {
            return Err(VcsError::unsupported(vcs, "clone"));
        }
        if let Some(branch) = self.branch() {
            if !vcs.supports_branch() {
                return Err(VcsError::branch_unsupported(vcs, branch));
            }
        }
        if self.shallow && !vcs.honors_shallow() {
            tracing::debug!(%vcs, dir = %self.dir.display(), "shallow clone request ignored");
        }
        Ok(())
    }

    /// Whether `vcs` should limit history for this request
    pub(crate) fn shallow_for(&self, vcs: VcsType) -> bool {
        self.shallow && vcs.honors_shallow()
    }

    /// Remote URL, required for clones
    pub(crate) fn require_url(&self, vcs: VcsType) -> Result<&RemoteUrl, VcsError> {
        self.url.as_ref().ok_or(VcsError::MissingUrl { vcs })
    }

    /// Working copy directory as a command argument
    pub(crate) fn dir_arg(&self) -> Result<&str, VcsError> {
        self.dir.to_str().ok_or_else(|| VcsError::InvalidPath {
            path: self.dir.clone(),
        })
    }
}

/// Errors that can occur during VCS operations
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    #[error("Unsupported operation for {vcs}: {operation}")]
    Unsupported { vcs: VcsType, operation: String },

    #[error("{vcs} clone requires a remote URL")]
    MissingUrl { vcs: VcsType },

    #[error("Working copy path is not valid UTF-8: {}", .path.display())]
    InvalidPath { path: PathBuf },

    #[error("{vcs}: {source}")]
    Command {
        vcs: VcsType,
        #[source]
        source: CommandRunnerError,
    },

    #[error("Failed to prepare {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VcsError {
    /// Create an unsupported operation error
    pub fn unsupported(vcs: VcsType, operation: impl Into<String>) -> Self {
        Self::Unsupported {
            vcs,
            operation: operation.into(),
        }
    }

    /// Refuse a branch request on a backend that cannot honor it
    pub(crate) fn branch_unsupported(vcs: VcsType, branch: &str) -> Self {
        Self::unsupported(vcs, format!("cloning specific branch '{branch}'"))
    }
}

/// A command line for the executable of `vcs`
pub(crate) fn command(vcs: VcsType) -> CommandSpec {
    CommandSpec::new(vcs.executable_name())
}

/// Run one command through the runner, tagging failures with the backend
pub(crate) async fn run_command(
    runner: &dyn CommandRunner,
    vcs: VcsType,
    spec: CommandSpec,
) -> Result<(), VcsError> {
    tracing::debug!(%vcs, command = %spec, dir = ?spec.working_dir, "vcs command");
    runner
        .run(&spec)
        .await
        .map_err(|source| VcsError::Command { vcs, source })
}
