//! Filesystem path resolution for application data.
//!
//! Adapters use these helpers to locate the default database file; no
//! other part of the core touches the filesystem.

pub mod database;
pub mod error;
pub mod platform;

pub use database::database_path;
pub use error::PathError;
pub use platform::data_root;
