use super::vcs_interface::{command, run_command, CloneOptions, VcsError, VcsOperations};
use crate::domain::value_objects::vcs_type::VcsType;
use crate::infrastructure::process::CommandRunner;
use async_trait::async_trait;
use std::sync::Arc;

/// Darcs implementation of VCS operations
pub struct DarcsVcs {
    runner: Arc<dyn CommandRunner>,
}

impl DarcsVcs {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl VcsOperations for DarcsVcs {
    fn vcs_type(&self) -> VcsType {
        VcsType::Darcs
    }

    async fn clone_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        options.check_supported(VcsType::Darcs)?;
        let url = options.require_url(VcsType::Darcs)?;

        let mut spec = command(VcsType::Darcs).arg("get");
        if options.shallow_for(VcsType::Darcs) {
            spec = spec.arg("--lazy");
        }

        let spec = spec
            .arg(url.as_str())
            .arg(options.dir_arg()?)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::Darcs, spec).await
    }

    async fn update_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        let spec = command(VcsType::Darcs)
            .arg("pull")
            .in_dir(&options.dir)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::Darcs, spec).await
    }
}
