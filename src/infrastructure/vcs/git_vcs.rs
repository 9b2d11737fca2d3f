use super::vcs_interface::{command, run_command, CloneOptions, VcsError, VcsOperations};
use crate::domain::value_objects::vcs_type::VcsType;
use crate::infrastructure::process::CommandRunner;
use async_trait::async_trait;
use std::sync::Arc;

/// Git implementation of VCS operations
pub struct GitVcs {
    runner: Arc<dyn CommandRunner>,
}

impl GitVcs {
    /// Create a new Git backend running commands through `runner`
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl VcsOperations for GitVcs {
    fn vcs_type(&self) -> VcsType {
        VcsType::Git
    }

    async fn clone_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        options.check_supported(VcsType::Git)?;
        let url = options.require_url(VcsType::Git)?;
        let mut spec = command(VcsType::Git).arg("clone");

        // --branch takes precedence over --depth
        if let Some(branch) = options.branch() {
            spec = spec.args(["--branch", branch, "--single-branch"]);
        } else if options.shallow_for(VcsType::Git) {
            spec = spec.args(["--depth", "1"]);
        }

        let spec = spec
            .arg(url.as_str())
            .arg(options.dir_arg()?)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::Git, spec).await
    }

    async fn update_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        let spec = command(VcsType::Git)
            .args(["pull", "--ff-only"])
            .in_dir(&options.dir)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::Git, spec).await
    }
}
