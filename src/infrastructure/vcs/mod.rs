//! VCS (version control system) operations infrastructure
//!
//! This module provides a unified clone/update interface over git,
//! Subversion, git-svn, Mercurial, Darcs, Bazaar and Fossil, plus a
//! placeholder for CVS.

pub mod bzr_vcs;
pub mod cvs_vcs;
pub mod darcs_vcs;
pub mod fossil_vcs;
pub mod git_svn_vcs;
pub mod git_vcs;
pub mod hg_vcs;
pub mod svn_vcs;
pub mod vcs_factory;
pub mod vcs_interface;

pub use vcs_factory::{UrlSelection, VcsFactory};
pub use vcs_interface::{CloneOptions, VcsError, VcsOperations};
