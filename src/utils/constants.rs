/// File names
pub const STATIONS_FILE: &str = "stations.txt";

/// Per-station readings file name parts: TG_STAID000001.txt
pub const READINGS_FILE_PREFIX: &str = "TG_STAID";
pub const READINGS_FILE_SUFFIX: &str = ".txt";

/// Station identifiers are left-zero-padded to this width in file names
pub const STATION_ID_WIDTH: usize = 6;

/// Column header line in per-station files. The padding inside the labels
/// is part of the upstream ECA&D convention and is matched verbatim.
pub const READINGS_HEADER: &str = " STAID, SOUID,    DATE,   TG, Q_TG";

/// Sentinel for a missing temperature value
pub const MISSING_VALUE: i32 = -9999;

/// Quality flag values
pub const QUALITY_VALID: u8 = 0;
pub const QUALITY_SUSPECT: u8 = 1;
pub const QUALITY_MISSING: u8 = 9;

/// I/O defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
