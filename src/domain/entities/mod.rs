pub mod get_config;
pub mod local_repository;
pub mod local_roots;
