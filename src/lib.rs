//! # vcs-get - multi-VCS repository fetcher
//!
//! `vcs-get` clones remote repositories into a predictable directory layout,
//! `<root>/<host>/<path>`, and updates them once they are there. Git,
//! Subversion, git-svn, Mercurial, Darcs, Bazaar and Fossil are driven
//! through their command line tools.
//!
//! ## Quick Start
//!
//! ```bash
//! vcs-get get motemen/ghq            # https://github.com/motemen/ghq
//! vcs-get get -u motemen/ghq         # pull if already cloned
//! vcs-get get -p motemen/ghq         # ssh://git@github.com/motemen/ghq
//! vcs-get get --shallow -b v1 https://example.com/owner/repo
//! vcs-get list ghq
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: VCS kinds, remote URLs, local roots and working copies
//! - [`application`]: reference resolution, path mapping and the get/list use cases
//! - [`infrastructure`]: configuration loading, process execution and VCS backends
//! - [`presentation`]: CLI interface
//! - [`common`]: crate-wide error type
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vcs_get::application::use_cases::get_repository::{GetOptions, GetRepositoryUseCase};
//! use vcs_get::infrastructure::filesystem::ConfigStore;
//! use vcs_get::infrastructure::process::ProcessCommandRunner;
//! use vcs_get::infrastructure::vcs::VcsFactory;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ConfigStore::from_env()?.load()?;
//! let factory = VcsFactory::new(Arc::new(ProcessCommandRunner::new()));
//! let use_case = GetRepositoryUseCase::new(Arc::new(config), Arc::new(factory));
//!
//! let options = GetOptions::new().with_shallow(true);
//! let outcome = use_case
//!     .execute("motemen/ghq", &options, &std::env::current_dir()?)
//!     .await?;
//! println!("{}", outcome.path().display());
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use crate::common::error::GetError;
pub use crate::common::result::GetResult as Result;
