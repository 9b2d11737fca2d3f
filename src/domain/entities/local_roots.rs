use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors raised while building a root list
#[derive(Debug, Error, PartialEq)]
pub enum LocalRootsError {
    #[error("At least one local repository root must be configured")]
    Empty,

    #[error("Local repository root must be an absolute path: {0}")]
    NotAbsolute(PathBuf),
}

/// Ordered list of directories under which working copies live.
///
/// The first root receives new clones; existing clones are recognized
/// under any of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PathBuf>", into = "Vec<PathBuf>")]
pub struct LocalRoots {
    roots: Vec<PathBuf>,
}

impl LocalRoots {
    /// Build a root list. Paths are lexically normalized and duplicates
    /// are dropped, keeping the first occurrence.
    pub fn new<I, P>(roots: I) -> Result<Self, LocalRootsError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut normalized: Vec<PathBuf> = Vec::new();
        for root in roots {
            let root = root.into();
            if !root.is_absolute() {
                return Err(LocalRootsError::NotAbsolute(root));
            }
            let root = normalize_path(&root);
            if !normalized.contains(&root) {
                normalized.push(root);
            }
        }

        if normalized.is_empty() {
            return Err(LocalRootsError::Empty);
        }

        Ok(Self { roots: normalized })
    }

    /// Default target for new clones
    pub fn primary(&self) -> &Path {
        &self.roots[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// The most specific root that contains `path`, if any
    pub fn root_containing(&self, path: &Path) -> Option<&Path> {
        self.iter()
            .filter(|root| path.starts_with(root) && path != *root)
            .max_by_key(|root| root.components().count())
    }
}

impl TryFrom<Vec<PathBuf>> for LocalRoots {
    type Error = LocalRootsError;

    fn try_from(roots: Vec<PathBuf>) -> Result<Self, Self::Error> {
        LocalRoots::new(roots)
    }
}

impl From<LocalRoots> for Vec<PathBuf> {
    fn from(roots: LocalRoots) -> Self {
        roots.roots
    }
}

/// Lexically resolve `.` and `..` components without touching the filesystem
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
