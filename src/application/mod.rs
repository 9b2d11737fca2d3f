//! Application layer: reference resolution, path mapping and the get and
//! list use cases built on top of the VCS backends.

pub mod services;
pub mod use_cases;
