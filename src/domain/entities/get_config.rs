use super::local_roots::LocalRoots;
use serde::{Deserialize, Serialize};

/// Host used to expand `owner/repo` shorthands when none is configured
pub const DEFAULT_HOST: &str = "github.com";

/// Settings shared by reference resolution, path mapping and the get
/// use case. Built once and passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetConfig {
    /// Where working copies live; the first root receives new clones
    pub roots: LocalRoots,

    /// Host for `owner/repo` shorthands
    pub default_host: String,

    /// Owner for bare `repo` shorthands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
}

impl GetConfig {
    pub fn new(roots: LocalRoots) -> Self {
        Self {
            roots,
            default_host: DEFAULT_HOST.to_string(),
            default_user: None,
        }
    }

    pub fn with_default_host(mut self, host: impl Into<String>) -> Self {
        self.default_host = host.into();
        self
    }

    pub fn with_default_user(mut self, user: impl Into<String>) -> Self {
        self.default_user = Some(user.into());
        self
    }
}
