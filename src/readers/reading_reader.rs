use crate::error::{ApiError, Result};
use crate::models::ReadingRecord;
use crate::utils::constants::{DEFAULT_BUFFER_SIZE, READINGS_HEADER};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reader for per-station daily mean-temperature files (TG_STAID000001.txt).
///
/// The files open with a free-text preamble followed by the column header
/// line ` STAID, SOUID,    DATE,   TG, Q_TG`; everything after that line is
/// data. The header labels, padding included, are matched verbatim.
pub struct ReadingReader;

impl ReadingReader {
    pub fn new() -> Self {
        Self
    }

    /// Read all data rows from a per-station file, in file order.
    ///
    /// Missing observations (TG = -9999, Q_TG = 9) are kept: the returned
    /// record count equals the file's data-row count.
    pub fn read_readings(&self, path: &Path) -> Result<Vec<ReadingRecord>> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut records = Vec::new();
        let mut in_data = false;

        for line_result in reader.lines() {
            let line = line_result?;

            if !in_data {
                if line.trim_end() == READINGS_HEADER {
                    in_data = true;
                }
                continue;
            }

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            if let Some(record) = self.parse_reading_line(&line)? {
                records.push(record);
            }
        }

        if !in_data {
            return Err(ApiError::InvalidFormat(format!(
                "No column header line in readings file: {}",
                path.display()
            )));
        }

        Ok(records)
    }

    /// Parse a single data row: STAID, SOUID, DATE, TG, Q_TG
    fn parse_reading_line(&self, line: &str) -> Result<Option<ReadingRecord>> {
        let parts: Vec<&str> = line.split(',').map(|s| s.trim()).collect();

        if parts.len() < 5 {
            return Ok(None); // Skip malformed lines
        }

        let staid = parts[0].parse::<u32>().map_err(|_| {
            ApiError::InvalidFormat(format!("Invalid station ID: '{}'", parts[0]))
        })?;

        let souid = parts[1]
            .parse::<u32>()
            .map_err(|_| ApiError::InvalidFormat(format!("Invalid source ID: '{}'", parts[1])))?;

        // Dates are stored as YYYYMMDD
        let date = NaiveDate::parse_from_str(parts[2], "%Y%m%d").map_err(|_| {
            ApiError::InvalidFormat(format!("Invalid date format: '{}'", parts[2]))
        })?;

        let tg = parts[3].parse::<i32>().map_err(|_| {
            ApiError::InvalidFormat(format!("Invalid temperature: '{}'", parts[3]))
        })?;

        let quality_flag = parts[4].parse::<u8>().map_err(|_| {
            ApiError::InvalidFormat(format!("Invalid quality flag: '{}'", parts[4]))
        })?;

        let record = ReadingRecord::new(staid, souid, date, tg, quality_flag)?;

        Ok(Some(record))
    }
}

impl Default for ReadingReader {
    fn default() -> Self {
        Self::new()
    }
}
