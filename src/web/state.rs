//! Application state for the web layer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::StationCatalog;

/// Shared application state.
///
/// The catalog is loaded once at startup and never mutated afterwards.
/// Requests share nothing else: each lookup opens and parses its own
/// readings file from `data_dir`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<StationCatalog>,
    data_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(catalog: StationCatalog, data_dir: PathBuf) -> Self {
        Self {
            catalog: Arc::new(catalog),
            data_dir: Arc::new(data_dir),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
