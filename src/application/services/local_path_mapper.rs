use super::reference_resolver::ResolveError;
use crate::domain::entities::local_roots::LocalRoots;
use crate::domain::value_objects::remote_url::RemoteUrl;
use crate::infrastructure::vcs::VcsFactory;
use std::path::PathBuf;

/// Computes where a remote lives on disk: `<root>/<host>/<path...>`
#[derive(Debug, Clone)]
pub struct LocalPathMapper {
    roots: LocalRoots,
}

impl LocalPathMapper {
    pub fn new(roots: LocalRoots) -> Self {
        Self { roots }
    }

    /// `host/seg1/.../segN` for the URL, relative to any root.
    ///
    /// Host and segments are used as written, case included, with path
    /// segments percent-decoded. The port, query and fragment are dropped,
    /// as is a trailing `.git` on the last segment. Segments that decode to
    /// `.`, `..` or contain a separator are rejected since they would leave
    /// the host directory.
    pub fn relative_path(url: &RemoteUrl) -> Result<PathBuf, ResolveError> {
        let mut relative = PathBuf::from(url.host());
        let segments = url.path_segments();
        let last = segments.len().saturating_sub(1);

        for (index, segment) in segments.iter().enumerate() {
            let segment: &str = segment;
            let escapes = segment.contains(|c: char| c == '/' || c == '\\');
            if segment == "." || segment == ".." || escapes {
                return Err(ResolveError::Ambiguous {
                    path: PathBuf::from(url.host()).join(url.path().trim_start_matches('/')),
                    candidates: Vec::new(),
                });
            }

            let segment = if index == last {
                segment.strip_suffix(".git").filter(|s| !s.is_empty()).unwrap_or(segment)
            } else {
                segment
            };
            relative.push(segment);
        }

        Ok(relative)
    }

    /// Absolute working copy directory for `url`.
    ///
    /// An existing working copy under any configured root wins over the
    /// primary root; one found under several roots is ambiguous.
    pub fn map_to_local(&self, url: &RemoteUrl) -> Result<PathBuf, ResolveError> {
        let relative = Self::relative_path(url)?;

        let mut candidates: Vec<PathBuf> = self
            .roots
            .iter()
            .map(|root| root.join(&relative))
            .filter(|path| VcsFactory::detect_vcs_type(path).is_some())
            .collect();

        match candidates.len() {
            0 => Ok(self.roots.primary().join(&relative)),
            1 => Ok(candidates.remove(0)),
            _ => Err(ResolveError::Ambiguous {
                path: relative,
                candidates,
            }),
        }
    }
}
