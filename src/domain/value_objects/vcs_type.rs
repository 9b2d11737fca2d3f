use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Version control system handled by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VcsType {
    /// Git
    #[serde(rename = "git")]
    Git,
    /// Subversion (SVN)
    #[serde(rename = "svn")]
    Subversion,
    /// Git working copy bridged to a Subversion remote (git-svn)
    #[serde(rename = "git-svn")]
    GitSubversion,
    /// Mercurial
    #[serde(rename = "hg")]
    Mercurial,
    /// Darcs
    #[serde(rename = "darcs")]
    Darcs,
    /// Bazaar
    #[serde(rename = "bzr")]
    Bazaar,
    /// Fossil
    #[serde(rename = "fossil")]
    Fossil,
    /// CVS, recognized but never cloned or updated
    #[serde(rename = "cvs")]
    Cvs,
}

impl Default for VcsType {
    fn default() -> Self {
        Self::Git
    }
}

impl fmt::Display for VcsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VcsType {
    type Err = VcsTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "git" | "github" => Ok(VcsType::Git),
            "svn" | "subversion" => Ok(VcsType::Subversion),
            "git-svn" | "gitsvn" => Ok(VcsType::GitSubversion),
            "hg" | "mercurial" => Ok(VcsType::Mercurial),
            "darcs" => Ok(VcsType::Darcs),
            "bzr" | "bazaar" => Ok(VcsType::Bazaar),
            "fossil" => Ok(VcsType::Fossil),
            "cvs" => Ok(VcsType::Cvs),
            _ => Err(VcsTypeError::UnsupportedVcsType(s.to_string())),
        }
    }
}

impl VcsType {
    /// Every variant, in marker-table priority order
    pub const ALL: [VcsType; 8] = [
        VcsType::GitSubversion,
        VcsType::Git,
        VcsType::Subversion,
        VcsType::Mercurial,
        VcsType::Darcs,
        VcsType::Fossil,
        VcsType::Bazaar,
        VcsType::Cvs,
    ];

    /// Short name used on the command line and in output
    pub fn name(&self) -> &'static str {
        match self {
            VcsType::Git => "git",
            VcsType::Subversion => "svn",
            VcsType::GitSubversion => "git-svn",
            VcsType::Mercurial => "hg",
            VcsType::Darcs => "darcs",
            VcsType::Bazaar => "bzr",
            VcsType::Fossil => "fossil",
            VcsType::Cvs => "cvs",
        }
    }

    /// Get the standard executable name for this VCS
    pub fn executable_name(&self) -> &'static str {
        match self {
            VcsType::Git | VcsType::GitSubversion => "git",
            VcsType::Subversion => "svn",
            VcsType::Mercurial => "hg",
            VcsType::Darcs => "darcs",
            VcsType::Bazaar => "bzr",
            VcsType::Fossil => "fossil",
            VcsType::Cvs => "cvs",
        }
    }

    /// Marker entries whose presence in a directory identifies a working copy
    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            VcsType::GitSubversion => &[".git/svn"],
            VcsType::Git => &[".git"],
            VcsType::Subversion => &[".svn"],
            VcsType::Mercurial => &[".hg"],
            VcsType::Darcs => &["_darcs"],
            VcsType::Fossil => &[".fslckout", "_FOSSIL_", ".fossil"],
            VcsType::Bazaar => &[".bzr"],
            VcsType::Cvs => &["CVS"],
        }
    }

    /// Whether a shallow request changes the clone command.
    /// Backends without support ignore the request.
    pub fn honors_shallow(&self) -> bool {
        matches!(
            self,
            VcsType::Git | VcsType::Subversion | VcsType::Darcs
        )
    }

    /// Whether a branch can be requested at clone time.
    /// Backends without support refuse the request.
    pub fn supports_branch(&self) -> bool {
        matches!(
            self,
            VcsType::Git | VcsType::Subversion | VcsType::GitSubversion | VcsType::Mercurial
        )
    }

    /// Whether this VCS can be cloned and updated at all
    pub fn is_supported(&self) -> bool {
        !matches!(self, VcsType::Cvs)
    }
}

/// Errors that can occur when working with VCS types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VcsTypeError {
    /// The specified VCS name is not known
    #[error("Unsupported VCS type: '{0}'. Supported types are: git, svn, git-svn, hg, darcs, bzr, fossil")]
    UnsupportedVcsType(String),
}
