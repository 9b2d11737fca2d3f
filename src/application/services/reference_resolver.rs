use crate::domain::entities::get_config::GetConfig;
use crate::domain::entities::local_roots::normalize_path;
use crate::domain::value_objects::{
    remote_url::{RemoteUrl, RemoteUrlError},
    vcs_type::VcsType,
};
use crate::infrastructure::process::{CommandRunner, CommandSpec};
use crate::infrastructure::vcs::VcsFactory;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while turning a user reference into a remote and a
/// local directory
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Cannot resolve reference '{reference}': {reason}")]
    Unresolved { reference: String, reason: String },

    #[error("Ambiguous local path {}", .path.display())]
    Ambiguous {
        path: PathBuf,
        candidates: Vec<PathBuf>,
    },

    #[error(transparent)]
    InvalidUrl(#[from] RemoteUrlError),

    #[error("Cannot read remote of '{reference}': {source}")]
    Metadata {
        reference: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ResolveError {
    fn unresolved(reference: &str, reason: impl Into<String>) -> Self {
        Self::Unresolved {
            reference: reference.to_string(),
            reason: reason.into(),
        }
    }
}

/// Outcome of resolving a user reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReference {
    /// Remote to clone from
    pub url: RemoteUrl,

    /// Local directory fixed by the reference itself. Set for relative
    /// references; `None` means the path mapper decides.
    pub local_dir: Option<PathBuf>,
}

/// Turns what the user typed (URL, shorthand or relative path) into a
/// [`ResolvedReference`]. Never touches the network.
pub struct ReferenceResolver {
    config: Arc<GetConfig>,
    runner: Arc<dyn CommandRunner>,
}

impl ReferenceResolver {
    /// The runner is only used to read remotes out of existing hg and svn
    /// working copies.
    pub fn new(config: Arc<GetConfig>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { config, runner }
    }

    pub async fn resolve(&self, raw: &str, cwd: &Path) -> Result<ResolvedReference, ResolveError> {
        let reference = raw.trim();
        if reference.is_empty() {
            return Err(ResolveError::unresolved(raw, "empty reference"));
        }

        if is_relative_reference(reference) {
            return self.resolve_relative(reference, cwd).await;
        }

        let url = if RemoteUrl::looks_absolute(reference) {
            RemoteUrl::new(reference)?
        } else {
            self.expand_shorthand(reference)?
        };
        tracing::debug!(reference, url = %url, "resolved reference");

        Ok(ResolvedReference {
            url,
            local_dir: None,
        })
    }

    /// Expand `owner/repo`, `host.tld/owner/repo` or a bare `repo`
    fn expand_shorthand(&self, reference: &str) -> Result<RemoteUrl, ResolveError> {
        if reference.chars().any(char::is_whitespace) || reference.contains('\\') {
            return Err(ResolveError::unresolved(reference, "not a repository reference"));
        }

        let segments: Vec<&str> = reference
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let url = match segments.as_slice() {
            [] => return Err(ResolveError::unresolved(reference, "empty reference")),
            [repo] => match &self.config.default_user {
                Some(user) => format!("https://{}/{}/{}", self.config.default_host, user, repo),
                None => {
                    return Err(ResolveError::unresolved(
                        reference,
                        "a bare repository name needs a default user",
                    ))
                }
            },
            [host, rest @ ..] if host.contains('.') => {
                format!("https://{}/{}", host, rest.join("/"))
            }
            _ => format!(
                "https://{}/{}",
                self.config.default_host,
                segments.join("/")
            ),
        };

        Ok(RemoteUrl::new(&url)?)
    }

    async fn resolve_relative(
        &self,
        reference: &str,
        cwd: &Path,
    ) -> Result<ResolvedReference, ResolveError> {
        let path = normalize_path(&cwd.join(reference));

        if let Some(root) = self.config.roots.root_containing(&path) {
            let relative: Vec<String> = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .components()
                .map(|component| component.as_os_str().to_string_lossy().into_owned())
                .collect();
            if relative.len() < 2 {
                return Err(ResolveError::unresolved(
                    reference,
                    format!("{} names a host, not a repository", path.display()),
                ));
            }

            let url = RemoteUrl::new(&format!("https://{}", relative.join("/")))?;
            tracing::debug!(reference, url = %url, root = %root.display(), "relative reference under root");
            return Ok(ResolvedReference {
                url,
                local_dir: Some(path),
            });
        }

        let Some(vcs) = VcsFactory::detect_vcs_type(&path) else {
            return Err(ResolveError::unresolved(
                reference,
                format!(
                    "{} is outside every root and not a working copy",
                    path.display()
                ),
            ));
        };

        let remote = self.read_remote(reference, &path, vcs).await?;
        let url = RemoteUrl::new(&remote)?;
        tracing::debug!(reference, url = %url, %vcs, "remote read from working copy");

        Ok(ResolvedReference {
            url,
            local_dir: Some(path),
        })
    }

    /// Remote recorded in the metadata of the working copy at `dir`
    async fn read_remote(
        &self,
        reference: &str,
        dir: &Path,
        vcs: VcsType,
    ) -> Result<String, ResolveError> {
        let metadata_error = |source: Box<dyn std::error::Error + Send + Sync>| {
            ResolveError::Metadata {
                reference: reference.to_string(),
                source,
            }
        };

        let remote = match vcs {
            VcsType::Git => read_git_origin(dir).map_err(|e| metadata_error(e.into()))?,
            VcsType::GitSubversion => self
                .capture(dir, CommandSpec::new("git").args(["svn", "info", "--url"]))
                .await
                .map_err(metadata_error)?,
            VcsType::Mercurial => self
                .capture(dir, CommandSpec::new("hg").args(["paths", "default"]))
                .await
                .map_err(metadata_error)?,
            VcsType::Subversion => self
                .capture(
                    dir,
                    CommandSpec::new("svn").args(["info", "--show-item", "url"]),
                )
                .await
                .map_err(metadata_error)?,
            other => {
                return Err(ResolveError::unresolved(
                    reference,
                    format!("cannot read the remote of a {other} working copy"),
                ))
            }
        };

        if remote.is_empty() {
            return Err(ResolveError::unresolved(
                reference,
                format!("{} has no remote configured", dir.display()),
            ));
        }
        Ok(remote)
    }

    async fn capture(
        &self,
        dir: &Path,
        spec: CommandSpec,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let spec = spec.in_dir(dir).silent(true);
        Ok(self.runner.capture(&spec).await?)
    }
}

/// `.` or `..` alone, or followed by a path separator
pub fn is_relative_reference(reference: &str) -> bool {
    [".", ".."].iter().any(|prefix| {
        reference
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\'))
    })
}

fn read_git_origin(dir: &Path) -> Result<String, git2::Error> {
    let repo = git2::Repository::open(dir)?;
    let remote = repo.find_remote("origin")?;
    Ok(remote.url().unwrap_or_default().to_string())
}
