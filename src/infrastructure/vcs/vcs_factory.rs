use super::bzr_vcs::BzrVcs;
use super::cvs_vcs::CvsVcs;
use super::darcs_vcs::DarcsVcs;
use super::fossil_vcs::FossilVcs;
use super::git_svn_vcs::GitSvnVcs;
use super::git_vcs::GitVcs;
use super::hg_vcs::HgVcs;
use super::svn_vcs::SvnVcs;
use super::vcs_interface::VcsOperations;
use crate::domain::value_objects::{
    remote_url::{RemoteUrl, RemoteUrlError},
    vcs_type::VcsType,
};
use crate::infrastructure::process::CommandRunner;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Hosts whose repositories are served by a specific VCS
const HOST_TABLE: &[(&str, VcsType)] = &[
    ("svn.code.sf.net", VcsType::Subversion),
    ("hub.darcs.net", VcsType::Darcs),
    ("chiselapp.com", VcsType::Fossil),
    ("launchpad.net", VcsType::Bazaar),
    ("bazaar.launchpad.net", VcsType::Bazaar),
];

/// Backend picked for a remote that has no working copy yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSelection {
    pub vcs: VcsType,
    /// URL to hand to the backend, with any VCS scheme prefix removed
    pub url: RemoteUrl,
}

/// Registry of VCS backends.
///
/// Maps marker entries of an existing directory, or the shape of a remote
/// URL, to a [`VcsType`], and builds the matching backend.
pub struct VcsFactory {
    runner: Arc<dyn CommandRunner>,
    overrides: HashMap<VcsType, Arc<dyn VcsOperations>>,
}

impl VcsFactory {
    /// Create a factory whose backends run commands through `runner`
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            overrides: HashMap::new(),
        }
    }

    /// Serve `vcs` with the given implementation instead of the built-in one
    pub fn with_backend(mut self, vcs: VcsType, backend: Arc<dyn VcsOperations>) -> Self {
        self.overrides.insert(vcs, backend);
        self
    }

    /// Runner shared by the built-in backends
    pub fn runner(&self) -> Arc<dyn CommandRunner> {
        Arc::clone(&self.runner)
    }

    /// Create the backend for the given VCS type
    pub fn create_vcs(&self, vcs: VcsType) -> Arc<dyn VcsOperations> {
        if let Some(backend) = self.overrides.get(&vcs) {
            return Arc::clone(backend);
        }

        let runner = Arc::clone(&self.runner);
        match vcs {
            VcsType::Git => Arc::new(GitVcs::new(runner)),
            VcsType::Subversion => Arc::new(SvnVcs::new(runner)),
            VcsType::GitSubversion => Arc::new(GitSvnVcs::new(runner)),
            VcsType::Mercurial => Arc::new(HgVcs::new(runner)),
            VcsType::Darcs => Arc::new(DarcsVcs::new(runner)),
            VcsType::Bazaar => Arc::new(BzrVcs::new(runner)),
            VcsType::Fossil => Arc::new(FossilVcs::new(runner)),
            VcsType::Cvs => Arc::new(CvsVcs::new()),
        }
    }

    /// Detect which VCS owns the working copy at `path`.
    ///
    /// Markers are checked in table order, so a git-svn checkout is
    /// reported as such rather than as plain git. Returns `None` for a
    /// missing directory or one without any marker.
    pub fn detect_vcs_type(path: &Path) -> Option<VcsType> {
        VcsType::ALL.into_iter().find(|vcs| {
            vcs.markers()
                .iter()
                .any(|marker| path.join(marker).exists())
        })
    }

    /// Choose a backend for a fresh clone from the URL alone
    pub fn select_for_url(url: &RemoteUrl) -> Result<UrlSelection, RemoteUrlError> {
        let scheme = url.scheme();
        if scheme == "git+svn" || scheme.starts_with("git+svn+") {
            return Ok(UrlSelection {
                vcs: VcsType::GitSubversion,
                url: url.without_git_svn_prefix()?,
            });
        }

        let vcs = Self::vcs_for_scheme(scheme)
            .or_else(|| Self::vcs_for_host(url))
            .unwrap_or(VcsType::Git);

        Ok(UrlSelection {
            vcs,
            url: url.clone(),
        })
    }

    fn vcs_for_scheme(scheme: &str) -> Option<VcsType> {
        match scheme {
            "svn" | "svn+ssh" => Some(VcsType::Subversion),
            _ => None,
        }
    }

    fn vcs_for_host(url: &RemoteUrl) -> Option<VcsType> {
        let host = url.host().to_lowercase();

        if host.ends_with(".googlecode.com") && url.path().starts_with("/svn") {
            return Some(VcsType::Subversion);
        }
        if host.starts_with("svn.") {
            return Some(VcsType::Subversion);
        }

        HOST_TABLE
            .iter()
            .find(|(known, _)| *known == host)
            .map(|(_, vcs)| *vcs)
    }
}
