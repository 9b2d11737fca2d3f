use super::vcs_interface::{command, run_command, CloneOptions, VcsError, VcsOperations};
use crate::domain::value_objects::vcs_type::VcsType;
use crate::infrastructure::process::CommandRunner;
use async_trait::async_trait;
use std::sync::Arc;

/// git-svn bridge: a git working copy tracking a Subversion remote
pub struct GitSvnVcs {
    runner: Arc<dyn CommandRunner>,
}

impl GitSvnVcs {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl VcsOperations for GitSvnVcs {
    fn vcs_type(&self) -> VcsType {
        VcsType::GitSubversion
    }

    async fn clone_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        options.check_supported(VcsType::GitSubversion)?;
        let url = options.require_url(VcsType::GitSubversion)?;

        let clone_url = match options.branch() {
            Some(branch) => url.branch_url(branch),
            None => url.to_string(),
        };

        let spec = command(VcsType::GitSubversion)
            .args(["svn", "clone"])
            .arg(clone_url)
            .arg(options.dir_arg()?)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::GitSubversion, spec).await
    }

    async fn update_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        let spec = command(VcsType::GitSubversion)
            .args(["svn", "rebase"])
            .in_dir(&options.dir)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::GitSubversion, spec).await
    }
}
