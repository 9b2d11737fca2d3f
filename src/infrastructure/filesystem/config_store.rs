use crate::domain::entities::{
    get_config::{GetConfig, DEFAULT_HOST},
    local_roots::{LocalRoots, LocalRootsError},
};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding an OS path list of roots
pub const ENV_ROOT: &str = "VCS_GET_ROOT";
/// Environment variable overriding the shorthand host
pub const ENV_HOST: &str = "VCS_GET_HOST";
/// Environment variable overriding the shorthand owner
pub const ENV_USER: &str = "VCS_GET_USER";
/// Environment variable pointing at an alternative configuration file
pub const ENV_CONFIG: &str = "VCS_GET_CONFIG";

/// Configuration store related errors
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("Configuration file read failed: {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing failed: {}: {source}", .path.display())]
    YamlParsingFailed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("No home directory found; set {ENV_ROOT} or configure roots explicitly")]
    NoHomeDirectory,

    #[error("Invalid root configuration: {0}")]
    InvalidRoots(#[from] LocalRootsError),

    #[error("Default host must not be empty")]
    EmptyHost,
}

/// On-disk shape of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
}

/// Assembles a [`GetConfig`] from built-in defaults, the YAML
/// configuration file and environment overrides, in increasing precedence.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    cwd: PathBuf,
    home: Option<PathBuf>,
    config_path: Option<PathBuf>,
    env_roots: Option<OsString>,
    env_host: Option<String>,
    env_user: Option<String>,
}

impl ConfigStore {
    /// A store with no file and no environment overrides. Relative roots
    /// are resolved against `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            ..Self::default()
        }
    }

    /// A store reading the process environment and home directory
    pub fn from_env() -> std::io::Result<Self> {
        let non_empty = |value: String| if value.is_empty() { None } else { Some(value) };

        Ok(Self {
            cwd: std::env::current_dir()?,
            home: home::home_dir(),
            config_path: std::env::var_os(ENV_CONFIG).map(PathBuf::from),
            env_roots: std::env::var_os(ENV_ROOT).filter(|roots| !roots.is_empty()),
            env_host: std::env::var(ENV_HOST).ok().and_then(non_empty),
            env_user: std::env::var(ENV_USER).ok().and_then(non_empty),
        })
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_env_roots(mut self, roots: impl Into<OsString>) -> Self {
        self.env_roots = Some(roots.into());
        self
    }

    pub fn with_env_host(mut self, host: impl Into<String>) -> Self {
        self.env_host = Some(host.into());
        self
    }

    pub fn with_env_user(mut self, user: impl Into<String>) -> Self {
        self.env_user = Some(user.into());
        self
    }

    /// Path of the configuration file consulted by [`ConfigStore::load`]
    pub fn config_file_path(&self) -> Option<PathBuf> {
        self.config_path.clone().or_else(|| {
            self.home
                .as_ref()
                .map(|home| home.join(".config").join("vcs-get").join("config.yaml"))
        })
    }

    /// Read the configuration file; a missing file yields the defaults
    pub fn read_config_file(&self) -> Result<ConfigFile, ConfigStoreError> {
        let Some(path) = self.config_file_path() else {
            return Ok(ConfigFile::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file");
            return Ok(ConfigFile::default());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|source| ConfigStoreError::ReadFailed {
                path: path.clone(),
                source,
            })?;
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|source| ConfigStoreError::YamlParsingFailed { path, source })
    }

    /// Build the effective configuration
    pub fn load(&self) -> Result<GetConfig, ConfigStoreError> {
        let file = self.read_config_file()?;

        let roots: Vec<PathBuf> = if let Some(env_roots) = &self.env_roots {
            std::env::split_paths(env_roots)
                .filter(|root| !root.as_os_str().is_empty())
                .map(|root| self.absolutize(&root))
                .collect()
        } else if !file.roots.is_empty() {
            file.roots
                .iter()
                .map(|root| self.expand_home(root))
                .map(|root| self.absolutize(&root))
                .collect()
        } else {
            let home = self.home.as_ref().ok_or(ConfigStoreError::NoHomeDirectory)?;
            vec![home.join("vcs-get")]
        };

        let default_host = self
            .env_host
            .clone()
            .or(file.default_host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        if default_host.trim().is_empty() {
            return Err(ConfigStoreError::EmptyHost);
        }

        let mut config = GetConfig::new(LocalRoots::new(roots)?).with_default_host(default_host);
        if let Some(user) = self.env_user.clone().or(file.default_user) {
            config = config.with_default_user(user);
        }

        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    fn expand_home(&self, raw: &str) -> PathBuf {
        match (raw.strip_prefix("~/"), &self.home) {
            (Some(rest), Some(home)) => home.join(rest),
            _ if raw == "~" => self.home.clone().unwrap_or_else(|| PathBuf::from(raw)),
            _ => PathBuf::from(raw),
        }
    }

    fn absolutize(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
