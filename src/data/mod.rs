//! Data ingestion for the presence dataset.

pub mod loader;

pub use loader::{get_data, LoadError, LoadResult};
