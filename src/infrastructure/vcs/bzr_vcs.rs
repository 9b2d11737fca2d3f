use super::vcs_interface::{command, run_command, CloneOptions, VcsError, VcsOperations};
use crate::domain::value_objects::vcs_type::VcsType;
use crate::infrastructure::process::CommandRunner;
use async_trait::async_trait;
use std::sync::Arc;

/// Bazaar implementation of VCS operations
pub struct BzrVcs {
    runner: Arc<dyn CommandRunner>,
}

impl BzrVcs {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl VcsOperations for BzrVcs {
    fn vcs_type(&self) -> VcsType {
        VcsType::Bazaar
    }

    async fn clone_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        options.check_supported(VcsType::Bazaar)?;
        let url = options.require_url(VcsType::Bazaar)?;

        let spec = command(VcsType::Bazaar)
            .arg("branch")
            .arg(url.as_str())
            .arg(options.dir_arg()?)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::Bazaar, spec).await
    }

    /// Overwrites local history to match the parent branch
    async fn update_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        let spec = command(VcsType::Bazaar)
            .args(["pull", "--overwrite"])
            .in_dir(&options.dir)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::Bazaar, spec).await
    }
}
