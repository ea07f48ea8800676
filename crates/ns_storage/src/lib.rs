use std::path::PathBuf;
use std::sync::Arc;
use ns_core::{Error, ReportStorage, Result};

pub mod backends;

pub use backends::*;

/// Builds a report storage backend by name: `file` (default) or `memory`.
pub fn create_storage(kind: &str, dir: Option<PathBuf>) -> Result<Arc<dyn ReportStorage>> {
    match kind {
        "file" => Ok(Arc::new(FileStorage::new(dir.unwrap_or_else(|| PathBuf::from("."))))),
        "memory" => Ok(Arc::new(MemoryStorage::new())),
        other => Err(Error::Config(format!("Unknown storage backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::create_storage;
}
