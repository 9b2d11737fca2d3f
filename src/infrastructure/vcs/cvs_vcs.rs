use super::vcs_interface::{CloneOptions, VcsError, VcsOperations};
use crate::domain::value_objects::vcs_type::VcsType;
use async_trait::async_trait;

/// Placeholder for CVS working copies.
///
/// CVS checkouts are recognized so they are not mistaken for empty
/// directories, but both operations always fail.
#[derive(Debug, Default)]
pub struct CvsVcs;

impl CvsVcs {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl VcsOperations for CvsVcs {
    fn vcs_type(&self) -> VcsType {
        VcsType::Cvs
    }

    async fn clone_repository(&self, options: &CloneOptions) -> Result<(), VcsError> {
        options.check_supported(VcsType::Cvs)
    }

    async fn update_repository(&self, _options: &CloneOptions) -> Result<(), VcsError> {
        Err(VcsError::unsupported(VcsType::Cvs, "update"))
    }
}
