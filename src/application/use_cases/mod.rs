pub mod get_repository;
pub mod list_repositories;

pub use get_repository::{GetOptions, GetOutcome, GetReport, GetRepositoryUseCase};
pub use list_repositories::{ListOptions, ListRepositoriesUseCase};
