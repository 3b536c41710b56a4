use crate::error::{ApiError, Result};
use crate::models::StationMetadata;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub struct StationReader {
    skip_headers: bool,
}

impl StationReader {
    pub fn new() -> Self {
        Self { skip_headers: true }
    }

    pub fn with_skip_headers(skip_headers: bool) -> Self {
        Self { skip_headers }
    }

    /// Read station entries from the stations.txt listing, in file order.
    pub fn read_stations(&self, path: &Path) -> Result<Vec<StationMetadata>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut stations = Vec::new();

        for line_result in reader.lines() {
            let line = line_result?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            // Skip header lines: data rows start with the numeric station ID
            if self.skip_headers
                && !line
                    .trim_start()
                    .chars()
                    .next()
                    .unwrap_or(' ')
                    .is_ascii_digit()
            {
                continue;
            }

            if let Some(station) = self.parse_station_line(&line)? {
                stations.push(station);
            }
        }

        Ok(stations)
    }

    /// Parse a single line from the stations file
    fn parse_station_line(&self, line: &str) -> Result<Option<StationMetadata>> {
        // Expected format: STAID, STANAME                                 , CN, LAT    , LON     , HGHT
        let parts: Vec<&str> = line.split(',').map(|s| s.trim()).collect();

        if parts.len() < 3 {
            return Ok(None); // Skip malformed lines
        }

        let staid = parts[0].parse::<u32>().map_err(|_| {
            ApiError::InvalidFormat(format!("Invalid station ID: '{}'", parts[0]))
        })?;

        let name = parts[1].to_string();
        let country = parts[2].to_string();

        // Coordinates and elevation are present in the listing but not
        // served by the API; they are ignored here.
        Ok(Some(StationMetadata::new(staid, name, country)))
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}
