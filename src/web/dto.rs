//! Data transfer objects for API responses.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::ReadingRecord;

/// Exact-date response. `station` and `date` echo the request parameters
/// verbatim; `temperature` is in degrees Fahrenheit.
#[derive(Debug, Serialize)]
pub struct DailyTemperature {
    pub station: String,
    pub date: String,
    pub temperature: f64,
}

/// One reading in aggregate responses, keyed by the upstream column names.
/// `TG` stays in stored units (tenths of a degree Celsius).
#[derive(Debug, Serialize)]
pub struct ReadingRow {
    #[serde(rename = "DATE")]
    pub date: NaiveDate,

    #[serde(rename = "TG")]
    pub tg: i32,

    #[serde(rename = "Q_TG")]
    pub q_tg: u8,

    #[serde(rename = "SOUID")]
    pub souid: u32,

    #[serde(rename = "STAID")]
    pub staid: u32,
}

impl From<&ReadingRecord> for ReadingRow {
    fn from(record: &ReadingRecord) -> Self {
        Self {
            date: record.date,
            tg: record.tg,
            q_tg: record.quality_flag,
            souid: record.souid,
            staid: record.staid,
        }
    }
}
