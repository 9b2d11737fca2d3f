use super::vcs_interface::{command, run_command, CloneOptions, VcsError, VcsOperations};
use crate::domain::value_objects::vcs_type::VcsType;
use crate::infrastructure::process::CommandRunner;
use async_trait::async_trait;
use std::sync::Arc;

/// Name of the repository database created inside the checkout
pub const FOSSIL_REPO_NAME: &str = ".fossil";

/// Fossil implementation of VCS operations.
///
/// A clone fetches the repository database into `<dir>/.fossil` and then
/// opens a checkout of it from inside `<dir>`.
pub struct FossilVcs {
    runner: Arc<dyn CommandRunner>,
}

impl FossilVcs {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl VcsOperations for FossilVcs {
    fn vcs_type(&self) -> VcsType {
        VcsType::Fossil
    }

    async fn clone_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        options.check_supported(VcsType::Fossil)?;
        let url = options.require_url(VcsType::Fossil)?;

        tokio::fs::create_dir_all(&options.dir)
            .await
            .map_err(|source| VcsError::Io {
                path: options.dir.clone(),
                source,
            })?;

        let repo_file = options.dir.join(FOSSIL_REPO_NAME);
        let repo_file = repo_file.to_str().ok_or_else(|| VcsError::InvalidPath {
            path: repo_file.clone(),
        })?;

        let clone = command(VcsType::Fossil)
            .arg("clone")
            .arg(url.as_str())
            .arg(repo_file)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::Fossil, clone).await?;

        let open = command(VcsType::Fossil)
            .args(["open", FOSSIL_REPO_NAME])
            .in_dir(&options.dir)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::Fossil, open).await
    }

    async fn update_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        // `fossil update` syncs from the remote the checkout was opened
        // against when autosync is on, which is Fossil's default.
        let spec = command(VcsType::Fossil)
            .arg("update")
            .in_dir(&options.dir)
            .silent(options.silent);
        run_command(self.runner.as_ref(), VcsType::Fossil, spec).await
    }
}
