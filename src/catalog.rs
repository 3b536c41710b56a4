use std::path::Path;

use crate::error::{ApiError, Result};
use crate::models::StationMetadata;
use crate::readers::StationReader;

/// The station catalog: every station known to the dataset, in listing
/// order. Loaded once at startup and read-only afterwards; a missing or
/// unusable listing is fatal because the landing view cannot be rendered
/// without it.
#[derive(Debug)]
pub struct StationCatalog {
    stations: Vec<StationMetadata>,
}

impl StationCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let stations = StationReader::new().read_stations(path).map_err(|e| {
            ApiError::Config(format!(
                "Cannot load station catalog from {}: {}",
                path.display(),
                e
            ))
        })?;

        if stations.is_empty() {
            return Err(ApiError::Config(format!(
                "Station catalog {} contains no stations",
                path.display()
            )));
        }

        Ok(Self { stations })
    }

    pub fn iter(&self) -> impl Iterator<Item = &StationMetadata> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
