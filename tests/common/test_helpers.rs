//! Test helper functions and utilities

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use vcs_get::application::use_cases::get_repository::GetRepositoryUseCase;
use vcs_get::domain::entities::{get_config::GetConfig, local_roots::LocalRoots};
use vcs_get::infrastructure::vcs::VcsFactory;

use super::mock_services::MockCommandRunner;

/// A temporary root directory with a get use case wired to a mock runner
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub runner: MockCommandRunner,
    pub use_case: GetRepositoryUseCase,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("root");
        std::fs::create_dir_all(&root).expect("Failed to create root");

        let runner = MockCommandRunner::new();
        let config = GetConfig::new(LocalRoots::new([&root]).expect("valid root"));
        let factory = VcsFactory::new(Arc::new(runner.clone()));
        let use_case = GetRepositoryUseCase::new(Arc::new(config), Arc::new(factory));

        Self {
            temp_dir,
            root,
            runner,
            use_case,
        }
    }

    /// Absolute path of `relative` under the root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Create a working copy recognized through `marker`
    pub fn create_working_copy(&self, relative: &str, marker: &str) -> PathBuf {
        let dir = self.path(relative);
        create_marker(&dir, marker);
        dir
    }
}

/// Create `marker` inside `dir`. `.fslckout` and `_FOSSIL_` are files,
/// every other marker a directory
pub fn create_marker(dir: &Path, marker: &str) {
    let marker_path = dir.join(marker);
    if marker == ".fslckout" || marker == "_FOSSIL_" {
        std::fs::create_dir_all(dir).expect("Failed to create dir");
        std::fs::write(marker_path, b"").expect("Failed to write marker");
    } else {
        std::fs::create_dir_all(marker_path).expect("Failed to create marker");
    }
}
