pub mod local_path_mapper;
pub mod reference_resolver;

pub use local_path_mapper::LocalPathMapper;
pub use reference_resolver::{ReferenceResolver, ResolveError, ResolvedReference};
