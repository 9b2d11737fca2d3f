pub mod config_store;

pub use config_store::{ConfigFile, ConfigStore, ConfigStoreError};
