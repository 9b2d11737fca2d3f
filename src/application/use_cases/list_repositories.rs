use crate::domain::entities::{local_repository::LocalRepository, local_roots::LocalRoots};
use crate::domain::value_objects::vcs_type::VcsType;
use crate::infrastructure::vcs::VcsFactory;
use walkdir::WalkDir;

/// Filters applied by [`ListRepositoriesUseCase`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub query: Option<String>,
    /// Match the query against the name, `owner/name` or the whole path
    /// instead of a substring
    pub exact: bool,
    pub vcs: Option<VcsType>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    pub fn with_vcs(mut self, vcs: VcsType) -> Self {
        self.vcs = Some(vcs);
        self
    }

    fn accepts(&self, repository: &LocalRepository) -> bool {
        if self.vcs.is_some_and(|vcs| vcs != repository.vcs) {
            return false;
        }
        match self.query.as_deref() {
            Some(query) if !query.is_empty() => repository.matches(query, self.exact),
            _ => true,
        }
    }
}

/// Lists working copies found under the configured roots
pub struct ListRepositoriesUseCase {
    roots: LocalRoots,
}

impl ListRepositoriesUseCase {
    pub fn new(roots: LocalRoots) -> Self {
        Self { roots }
    }

    /// Working copies sorted by relative path. Nothing below a working copy
    /// is visited; unreadable directories are skipped with a warning.
    pub fn execute(&self, options: &ListOptions) -> Vec<LocalRepository> {
        let mut repositories = Vec::new();

        for root in self.roots.iter() {
            if !root.is_dir() {
                tracing::debug!(root = %root.display(), "root does not exist");
                continue;
            }

            let mut walker = WalkDir::new(root).min_depth(1).into_iter();
            while let Some(entry) = walker.next() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(error) => {
                        tracing::warn!(%error, "skipping unreadable entry");
                        continue;
                    }
                };
                if !entry.file_type().is_dir() {
                    continue;
                }

                let Some(vcs) = VcsFactory::detect_vcs_type(entry.path()) else {
                    continue;
                };
                walker.skip_current_dir();

                // A nested root owns its own working copies
                if self.roots.root_containing(entry.path()) != Some(root) {
                    continue;
                }

                if let Some(repository) = LocalRepository::new(root, entry.path(), vcs) {
                    if options.accepts(&repository) {
                        repositories.push(repository);
                    }
                }
            }
        }

        repositories.sort_by(|a, b| a.relative.cmp(&b.relative).then(a.root.cmp(&b.root)));
        repositories
    }
}
