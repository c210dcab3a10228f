//! Configuration loading and store path resolution.

pub mod loader;

pub use loader::{load_config, resolve_store_path, StrsConfig, STORE_ENV_VAR};
