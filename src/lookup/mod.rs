//! Station readings lookup: resolves a station identifier to its readings
//! file and filters the parsed table by a date expression.

pub mod dates;
pub mod table;

pub use table::ReadingTable;

use std::path::Path;

use crate::error::{ApiError, Result};
use crate::readers::ReadingReader;
use crate::utils::constants::{READINGS_FILE_PREFIX, READINGS_FILE_SUFFIX, STATION_ID_WIDTH};

/// File name for a station's daily mean-temperature readings.
///
/// The identifier is left-zero-padded to the fixed width, so `"1"` and
/// `"000001"` name the same file.
pub fn readings_file_name(station_id: &str) -> String {
    format!(
        "{prefix}{station_id:0>width$}{suffix}",
        prefix = READINGS_FILE_PREFIX,
        width = STATION_ID_WIDTH,
        suffix = READINGS_FILE_SUFFIX,
    )
}

/// Load the full readings table for one station.
///
/// The table is parsed fresh on every call; there is no cross-request
/// cache. A station whose file does not exist yields `StationNotFound`
/// (recoverable); an existing file with no data rows is a valid empty
/// table.
pub fn load_station_table(data_dir: &Path, station_id: &str) -> Result<ReadingTable> {
    let path = data_dir.join(readings_file_name(station_id));

    if !path.exists() {
        return Err(ApiError::StationNotFound {
            station_id: station_id.to_string(),
        });
    }

    let records = ReadingReader::new().read_readings(&path)?;
    Ok(ReadingTable::new(station_id.to_string(), records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::READINGS_HEADER;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_readings_file(dir: &Path, name: &str, rows: &[&str]) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        writeln!(file, "EUROPEAN CLIMATE ASSESSMENT & DATASET (ECA&D)").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{}", READINGS_HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
    }

    #[test]
    fn test_readings_file_name_padding() {
        assert_eq!(readings_file_name("1"), "TG_STAID000001.txt");
        assert_eq!(readings_file_name("000257"), "TG_STAID000257.txt");
        assert_eq!(readings_file_name("1234567"), "TG_STAID1234567.txt");
    }

    #[test]
    fn test_load_station_table() -> Result<()> {
        let dir = TempDir::new()?;
        write_readings_file(
            dir.path(),
            "TG_STAID000001.txt",
            &[
                "     1,   101, 19000101,   50,    0",
                "     1,   101, 19000102,  -12,    0",
            ],
        );

        let table = load_station_table(dir.path(), "000001")?;
        assert_eq!(table.len(), 2);

        // Unpadded identifiers resolve to the same file
        let table = load_station_table(dir.path(), "1")?;
        assert_eq!(table.len(), 2);

        Ok(())
    }

    #[test]
    fn test_unknown_station_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = load_station_table(dir.path(), "999999");

        assert!(matches!(
            result,
            Err(ApiError::StationNotFound { ref station_id }) if station_id == "999999"
        ));
    }

    #[test]
    fn test_empty_table_is_a_success() -> Result<()> {
        let dir = TempDir::new()?;
        write_readings_file(dir.path(), "TG_STAID000002.txt", &[]);

        let table = load_station_table(dir.path(), "2")?;
        assert!(table.is_empty());

        Ok(())
    }
}
