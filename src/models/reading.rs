use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// One daily mean-temperature observation from a per-station ECA&D file.
///
/// `tg` is the stored value in tenths of a degree Celsius (`-147` is
/// -14.7C); `-9999` marks a missing observation. The raw value is kept
/// as-is because the aggregate API paths return stored units unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingRecord {
    pub staid: u32,
    pub souid: u32,
    pub date: NaiveDate,
    pub tg: i32,
    pub quality_flag: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityFlag {
    Valid = 0,
    Suspect = 1,
    Missing = 9,
}

impl QualityFlag {
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(QualityFlag::Valid),
            1 => Ok(QualityFlag::Suspect),
            9 => Ok(QualityFlag::Missing),
            _ => Err(ApiError::InvalidQualityFlag(value)),
        }
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn is_usable(&self) -> bool {
        matches!(self, QualityFlag::Valid | QualityFlag::Suspect)
    }
}

impl ReadingRecord {
    pub fn new(staid: u32, souid: u32, date: NaiveDate, tg: i32, quality_flag: u8) -> Result<Self> {
        QualityFlag::from_u8(quality_flag)?;

        Ok(Self {
            staid,
            souid,
            date,
            tg,
            quality_flag,
        })
    }

    pub fn quality(&self) -> Result<QualityFlag> {
        QualityFlag::from_u8(self.quality_flag)
    }

    /// Stored value in degrees Celsius.
    pub fn celsius(&self) -> f64 {
        self.tg as f64 / 10.0
    }

    pub fn is_missing(&self) -> bool {
        self.quality_flag == QualityFlag::Missing.as_u8()
    }
}
