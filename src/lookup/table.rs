use chrono::{Datelike, NaiveDate};

use crate::error::{ApiError, Result};
use crate::models::ReadingRecord;

/// All readings for one station, in source-file order. Built per lookup
/// and discarded with the request; never cached.
#[derive(Debug)]
pub struct ReadingTable {
    station_id: String,
    records: Vec<ReadingRecord>,
}

impl ReadingTable {
    pub fn new(station_id: String, records: Vec<ReadingRecord>) -> Self {
        Self {
            station_id,
            records,
        }
    }

    /// The identifier the table was requested under, as given by the caller.
    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn records(&self) -> &[ReadingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The single record on the given day.
    ///
    /// Source files carry one row per day; if a duplicate slips through,
    /// the first row in file order wins.
    pub fn find_by_exact_date(&self, date: NaiveDate) -> Result<&ReadingRecord> {
        self.records
            .iter()
            .find(|r| r.date == date)
            .ok_or_else(|| self.no_record(date.format("%Y-%m-%d").to_string()))
    }

    /// All records in the given year, in source order.
    pub fn find_by_year(&self, year: i32) -> Result<Vec<&ReadingRecord>> {
        let matches: Vec<&ReadingRecord> = self
            .records
            .iter()
            .filter(|r| r.date.year() == year)
            .collect();

        if matches.is_empty() {
            return Err(self.no_record(format!("year {}", year)));
        }

        Ok(matches)
    }

    /// All records in the given calendar month, in source order.
    pub fn find_by_year_month(&self, year: i32, month: u32) -> Result<Vec<&ReadingRecord>> {
        let matches: Vec<&ReadingRecord> = self
            .records
            .iter()
            .filter(|r| r.date.year() == year && r.date.month() == month)
            .collect();

        if matches.is_empty() {
            return Err(self.no_record(format!("{}-{:02}", year, month)));
        }

        Ok(matches)
    }

    fn no_record(&self, period: String) -> ApiError {
        ApiError::NoRecord {
            station_id: self.station_id.clone(),
            period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: (i32, u32, u32), tg: i32) -> ReadingRecord {
        ReadingRecord::new(
            1,
            101,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            tg,
            0,
        )
        .unwrap()
    }

    fn table() -> ReadingTable {
        ReadingTable::new(
            "000001".to_string(),
            vec![
                record((1900, 1, 1), 50),
                record((1900, 1, 2), -12),
                record((1900, 3, 1), 78),
                record((1901, 1, 1), 44),
            ],
        )
    }

    #[test]
    fn test_find_by_exact_date() {
        let table = table();
        let date = NaiveDate::from_ymd_opt(1900, 1, 2).unwrap();

        let found = table.find_by_exact_date(date).unwrap();
        assert_eq!(found.tg, -12);
    }

    #[test]
    fn test_exact_date_lookup_is_idempotent() {
        let table = table();
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();

        let first = table.find_by_exact_date(date).unwrap().tg;
        let second = table.find_by_exact_date(date).unwrap().tg;
        assert_eq!(first, second);
    }

    #[test]
    fn test_exact_date_no_match() {
        let table = table();
        let date = NaiveDate::from_ymd_opt(1950, 6, 1).unwrap();

        let err = table.find_by_exact_date(date).unwrap_err();
        assert!(matches!(err, ApiError::NoRecord { .. }));
        assert!(err.to_string().contains("1950-06-01"));
    }

    #[test]
    fn duplicate_dates_resolve_to_first_match() {
        let table = ReadingTable::new(
            "000001".to_string(),
            vec![record((1900, 1, 1), 50), record((1900, 1, 1), 999)],
        );
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();

        assert_eq!(table.find_by_exact_date(date).unwrap().tg, 50);
    }

    #[test]
    fn test_find_by_year() {
        let table = table();

        let matches = table.find_by_year(1900).unwrap();
        assert_eq!(matches.len(), 3);
        // Source order is preserved
        assert_eq!(matches[0].tg, 50);
        assert_eq!(matches[2].tg, 78);
    }

    #[test]
    fn test_find_by_year_empty() {
        let table = table();

        let err = table.find_by_year(1950).unwrap_err();
        assert!(err.to_string().contains("year 1950"));
    }

    #[test]
    fn test_find_by_year_month() {
        let table = table();

        let matches = table.find_by_year_month(1900, 1).unwrap();
        assert_eq!(matches.len(), 2);

        let matches = table.find_by_year_month(1900, 3).unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_find_by_year_month_empty_message_names_the_month() {
        let table = table();

        let err = table.find_by_year_month(1900, 2).unwrap_err();
        assert!(err.to_string().contains("1900-02"));
    }
}
