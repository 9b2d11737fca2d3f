pub mod get;
pub mod list;
pub mod root;

pub use get::GetCommand;
pub use list::ListCommand;
pub use root::RootCommand;
