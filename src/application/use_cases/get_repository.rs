use crate::application::services::{LocalPathMapper, ReferenceResolver};
use crate::common::{error::GetError, result::GetResult};
use crate::domain::entities::get_config::GetConfig;
use crate::domain::value_objects::{remote_url::RemoteUrl, vcs_type::VcsType};
use crate::infrastructure::vcs::{CloneOptions, UrlSelection, VcsFactory};
use futures::future::join_all;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Options of one get invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptions {
    /// Update an existing working copy instead of leaving it alone
    pub update: bool,
    pub shallow: bool,
    pub branch: Option<String>,
    /// Rewrite the remote to `ssh://git@host/path`
    pub private: bool,
    pub silent: bool,
    /// Backend for new clones, bypassing URL based selection
    pub vcs: Option<VcsType>,
}

impl GetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    pub fn with_shallow(mut self, shallow: bool) -> Self {
        self.shallow = shallow;
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn with_vcs(mut self, vcs: VcsType) -> Self {
        self.vcs = Some(vcs);
        self
    }
}

/// What happened to the target directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GetOutcome {
    Cloned { path: PathBuf, vcs: VcsType },
    Updated { path: PathBuf, vcs: VcsType },
    /// Already cloned and no update requested
    Skipped { path: PathBuf, vcs: VcsType },
}

impl GetOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Cloned { path, .. } | Self::Updated { path, .. } | Self::Skipped { path, .. } => {
                path
            }
        }
    }

    pub fn vcs(&self) -> VcsType {
        match self {
            Self::Cloned { vcs, .. } | Self::Updated { vcs, .. } | Self::Skipped { vcs, .. } => {
                *vcs
            }
        }
    }
}

/// Result for one reference of [`GetRepositoryUseCase::execute_many`]
#[derive(Debug)]
pub struct GetReport {
    pub reference: String,
    pub result: GetResult<GetOutcome>,
}

/// Target of a get: where to put the working copy and what to clone
#[derive(Debug, Clone)]
struct GetTarget {
    url: RemoteUrl,
    dir: PathBuf,
}

/// Fetches a repository into the local roots or updates the existing copy
pub struct GetRepositoryUseCase {
    factory: Arc<VcsFactory>,
    resolver: ReferenceResolver,
    mapper: LocalPathMapper,
}

impl GetRepositoryUseCase {
    pub fn new(config: Arc<GetConfig>, factory: Arc<VcsFactory>) -> Self {
        let resolver = ReferenceResolver::new(Arc::clone(&config), factory.runner());
        let mapper = LocalPathMapper::new(config.roots.clone());
        Self {
            factory,
            resolver,
            mapper,
        }
    }

    /// Get a single reference. `cwd` anchors relative references.
    pub async fn execute(
        &self,
        reference: &str,
        options: &GetOptions,
        cwd: &Path,
    ) -> GetResult<GetOutcome> {
        let target = self.prepare(reference, options, cwd).await?;
        self.get(target, options).await
    }

    /// Get several references with at most `jobs` backend operations in
    /// flight. References mapping to the same directory run one after the
    /// other; a failure never cancels the rest. Reports follow input order.
    pub async fn execute_many(
        &self,
        references: &[String],
        options: &GetOptions,
        cwd: &Path,
        jobs: usize,
    ) -> Vec<GetReport> {
        let mut slots: Vec<Option<GetResult<GetOutcome>>> =
            references.iter().map(|_| None).collect();
        let mut groups: Vec<(PathBuf, Vec<(usize, GetTarget)>)> = Vec::new();

        for (index, reference) in references.iter().enumerate() {
            match self.prepare(reference, options, cwd).await {
                Ok(target) => match groups.iter_mut().find(|(dir, _)| *dir == target.dir) {
                    Some((_, members)) => members.push((index, target)),
                    None => groups.push((target.dir.clone(), vec![(index, target)])),
                },
                Err(error) => slots[index] = Some(Err(error)),
            }
        }

        let semaphore = Arc::new(Semaphore::new(jobs.max(1)));
        let tasks = groups.into_iter().map(|(dir, members)| {
            let semaphore = Arc::clone(&semaphore);
            async move {
                let _permit = semaphore.acquire_owned().await;
                tracing::debug!(dir = %dir.display(), count = members.len(), "processing directory");

                let mut results = Vec::with_capacity(members.len());
                for (index, target) in members {
                    results.push((index, self.get(target, options).await));
                }
                results
            }
        });

        for (index, result) in join_all(tasks).await.into_iter().flatten() {
            slots[index] = Some(result);
        }

        references
            .iter()
            .zip(slots)
            .map(|(reference, result)| GetReport {
                reference: reference.clone(),
                result: result.unwrap_or_else(|| {
                    Err(GetError::unresolved(reference.as_str(), "not processed"))
                }),
            })
            .collect()
    }

    /// Resolve the reference and compute the target directory
    async fn prepare(
        &self,
        reference: &str,
        options: &GetOptions,
        cwd: &Path,
    ) -> GetResult<GetTarget> {
        let resolved = self.resolver.resolve(reference, cwd).await?;

        let dir = match resolved.local_dir {
            Some(dir) => dir,
            None => self.mapper.map_to_local(&resolved.url)?,
        };
        let url = if options.private {
            resolved.url.to_private()?
        } else {
            resolved.url
        };

        Ok(GetTarget { url, dir })
    }

    async fn get(&self, target: GetTarget, options: &GetOptions) -> GetResult<GetOutcome> {
        let GetTarget { url, dir } = target;

        if let Some(vcs) = VcsFactory::detect_vcs_type(&dir) {
            if !options.update {
                tracing::info!(path = %dir.display(), %vcs, "already cloned");
                return Ok(GetOutcome::Skipped { path: dir, vcs });
            }

            let backend = self.factory.create_vcs(vcs);
            let clone_options = CloneOptions::for_update(&dir).with_silent(options.silent);
            backend.update_repository(&clone_options).await?;

            tracing::info!(path = %dir.display(), %vcs, "updated");
            return Ok(GetOutcome::Updated {
                path: clone_options.dir,
                vcs,
            });
        }

        let selection = VcsFactory::select_for_url(&url)?;
        let UrlSelection { vcs, url } = match options.vcs {
            Some(vcs) => UrlSelection {
                vcs,
                url: selection.url,
            },
            None => selection,
        };

        let mut clone_options = CloneOptions::for_clone(url, &dir)
            .with_shallow(options.shallow)
            .with_silent(options.silent);
        if let Some(branch) = &options.branch {
            clone_options = clone_options.with_branch(branch.clone());
        }

        clone_options.check_supported(vcs)?;
        if let Some(parent) = clone_options.dir.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| GetError::io(parent, e))?;
        }

        let backend = self.factory.create_vcs(vcs);
        backend.clone_repository(&clone_options).await?;

        tracing::info!(path = %clone_options.dir.display(), %vcs, "cloned");
        Ok(GetOutcome::Cloned {
            path: clone_options.dir,
            vcs,
        })
    }
}
