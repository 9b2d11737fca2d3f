use super::vcs_interface::{command, run_command, CloneOptions, VcsError, VcsOperations};
use crate::domain::value_objects::vcs_type::VcsType;
use crate::infrastructure::process::CommandRunner;
use async_trait::async_trait;
use std::sync::Arc;

/// SVN (Subversion) implementation of VCS operations
pub struct SvnVcs {
    runner: Arc<dyn CommandRunner>,
}

impl SvnVcs {
    /// Create a new Subversion backend running commands through `runner`
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl VcsOperations for SvnVcs {
    fn vcs_type(&self) -> VcsType {
        VcsType::Subversion
    }

    async fn clone_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        options.check_supported(VcsType::Subversion)?;
        let url = options.require_url(VcsType::Subversion)?;
        let checkout_url = match options.branch() {
            Some(branch) => url.branch_url(branch),
            None => url.to_string(),
        };

        let mut spec = command(VcsType::Subversion).arg("checkout");
        if options.shallow_for(VcsType::Subversion) {
            spec = spec.args(["--depth", "1"]);
        }

        let spec = spec
            .arg(checkout_url)
            .arg(options.dir_arg()?)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::Subversion, spec).await
    }

    async fn update_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        let spec = command(VcsType::Subversion)
            .arg("update")
            .in_dir(&options.dir)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::Subversion, spec).await
    }
}
