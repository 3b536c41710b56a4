//! Strict date-expression validation. Every form is checked before any
//! file access, so a malformed request never touches the data directory.

use chrono::NaiveDate;

use crate::error::{ApiError, Result};

fn validation_error(value: &str, expected: &str) -> ApiError {
    ApiError::Validation {
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

/// Parse an exact-date expression: exactly 10 characters, `YYYY-MM-DD`,
/// and a real calendar date.
pub fn parse_exact_date(input: &str) -> Result<NaiveDate> {
    if input.len() != 10 {
        return Err(validation_error(input, "a 10-character YYYY-MM-DD date"));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| validation_error(input, "a valid calendar date in YYYY-MM-DD form"))
}

/// Parse a year expression: exactly 4 digits.
pub fn parse_year(input: &str) -> Result<i32> {
    if input.len() != 4 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(validation_error(input, "a 4-digit year"));
    }

    input
        .parse::<i32>()
        .map_err(|_| validation_error(input, "a 4-digit year"))
}

/// Parse a year-month expression: exactly 7 characters, `YYYY-MM`,
/// month 01-12.
pub fn parse_year_month(input: &str) -> Result<(i32, u32)> {
    let expected = "a 7-character YYYY-MM year-month";

    if input.len() != 7 {
        return Err(validation_error(input, expected));
    }

    let (year_part, month_part) = input
        .split_once('-')
        .ok_or_else(|| validation_error(input, expected))?;

    if year_part.len() != 4
        || month_part.len() != 2
        || !year_part.bytes().all(|b| b.is_ascii_digit())
        || !month_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(validation_error(input, expected));
    }

    let year = year_part
        .parse::<i32>()
        .map_err(|_| validation_error(input, expected))?;
    let month = month_part
        .parse::<u32>()
        .map_err(|_| validation_error(input, expected))?;

    if !(1..=12).contains(&month) {
        return Err(validation_error(input, "a month between 01 and 12"));
    }

    Ok((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_date() {
        let date = parse_exact_date("1900-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());
    }

    #[test]
    fn test_exact_date_rejects_wrong_length() {
        assert!(parse_exact_date("1900-1-1").is_err());
        assert!(parse_exact_date("1900-01-011").is_err());
        assert!(parse_exact_date("").is_err());
    }

    #[test]
    fn test_exact_date_rejects_impossible_dates() {
        // Correct length, impossible calendar dates
        assert!(parse_exact_date("2024-13-01").is_err());
        assert!(parse_exact_date("2023-02-29").is_err());
        assert!(parse_exact_date("1900-04-31").is_err());
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("1875").unwrap(), 1875);
        assert!(parse_year("187").is_err());
        assert!(parse_year("18755").is_err());
        assert!(parse_year("187a").is_err());
        assert!(parse_year("-187").is_err());
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!(parse_year_month("1900-02").unwrap(), (1900, 2));
        assert_eq!(parse_year_month("1875-12").unwrap(), (1875, 12));
    }

    #[test]
    fn test_year_month_rejects_malformed_input() {
        assert!(parse_year_month("1900-2").is_err());
        assert!(parse_year_month("190002").is_err());
        assert!(parse_year_month("1900/02").is_err());
        assert!(parse_year_month("1900-13").is_err());
        assert!(parse_year_month("1900-00").is_err());
    }
}
