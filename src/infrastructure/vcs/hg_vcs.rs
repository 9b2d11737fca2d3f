use super::vcs_interface::{command, run_command, CloneOptions, VcsError, VcsOperations};
use crate::domain::value_objects::vcs_type::VcsType;
use crate::infrastructure::process::CommandRunner;
use async_trait::async_trait;
use std::sync::Arc;

/// Mercurial implementation of VCS operations
pub struct HgVcs {
    runner: Arc<dyn CommandRunner>,
}

impl HgVcs {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl VcsOperations for HgVcs {
    fn vcs_type(&self) -> VcsType {
        VcsType::Mercurial
    }

    async fn clone_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        options.check_supported(VcsType::Mercurial)?;
        let url = options.require_url(VcsType::Mercurial)?;

        let mut spec = command(VcsType::Mercurial).arg("clone");
        if let Some(branch) = options.branch() {
            spec = spec.args(["--branch", branch]);
        }

        let spec = spec
            .arg(url.as_str())
            .arg(options.dir_arg()?)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::Mercurial, spec).await
    }

    async fn update_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        let spec = command(VcsType::Mercurial)
            .args(["pull", "--update"])
            .in_dir(&options.dir)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::Mercurial, spec).await
    }
}
