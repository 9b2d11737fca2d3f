use crate::domain::value_objects::vcs_type::VcsType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A working copy found under one of the local roots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalRepository {
    /// Root the working copy lives under
    pub root: PathBuf,

    /// Absolute path of the working copy
    pub path: PathBuf,

    /// Path relative to the root, `/`-separated (`host/owner/repo`)
    pub relative: String,

    /// Backend that owns the working copy
    pub vcs: VcsType,
}

impl LocalRepository {
    /// Build from a root and a path under it. Returns `None` when `path`
    /// is not inside `root`.
    pub fn new(root: &Path, path: &Path, vcs: VcsType) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?;
        let relative = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        if relative.is_empty() {
            return None;
        }

        Some(Self {
            root: root.to_path_buf(),
            path: path.to_path_buf(),
            relative,
            vcs,
        })
    }

    /// Last segment of the relative path
    pub fn name(&self) -> &str {
        self.relative.rsplit('/').next().unwrap_or_default()
    }

    /// Whether the repository matches a user query.
    ///
    /// An exact query must equal the name, `owner/name` or the whole
    /// relative path; otherwise a substring match on the relative path is
    /// enough.
    pub fn matches(&self, query: &str, exact: bool) -> bool {
        if exact {
            let owner_and_name = self
                .relative
                .splitn(2, '/')
                .nth(1)
                .unwrap_or(&self.relative);
            self.name() == query || owner_and_name == query || self.relative == query
        } else {
            self.relative.contains(query)
        }
    }
}
