use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::constants::STATION_ID_WIDTH;

/// A station entry from the ECA&D `stations.txt` listing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StationMetadata {
    pub staid: u32,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(equal = 2))]
    pub country: String,
}

impl StationMetadata {
    pub fn new(staid: u32, name: String, country: String) -> Self {
        Self {
            staid,
            name,
            country,
        }
    }

    /// Identifier in the fixed-width form used in file names and listings.
    pub fn padded_id(&self) -> String {
        format!("{:0width$}", self.staid, width = STATION_ID_WIDTH)
    }
}
