//! Wednesday counting task
//!
//! Reads `dates.txt` (one date per line, several accepted formats), counts
//! the lines falling on a Wednesday, and writes the count to
//! `dates-wednesdays.txt`.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use std::fs;
use std::path::Path;

use super::{require_input, TaskError};

/// Date-only formats tried in order
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d-%b-%Y", "%b %d, %Y"];

/// Datetime format accepted as a fourth alternative
const DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Parse a date string under one of the accepted formats
pub fn parse_date(s: &str) -> Result<NaiveDate, TaskError> {
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(s, DATETIME_FORMAT) {
        return Ok(datetime.date());
    }
    Err(TaskError::DateFormat(s.to_string()))
}

pub fn count_wednesdays(data_dir: &Path) -> Result<(), TaskError> {
    let input = require_input(data_dir, "dates.txt")?;
    let content = fs::read_to_string(&input)?;

    let mut count: usize = 0;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if parse_date(line)?.weekday() == Weekday::Wed {
            count += 1;
        }
    }

    fs::write(data_dir.join("dates-wednesdays.txt"), count.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_all_formats() {
        // 2017-01-04 was a Wednesday
        let expected = NaiveDate::from_ymd_opt(2017, 1, 4).unwrap();
        assert_eq!(parse_date("2017-01-04").unwrap(), expected);
        assert_eq!(parse_date("04-Jan-2017").unwrap(), expected);
        assert_eq!(parse_date("Jan 04, 2017").unwrap(), expected);
        assert_eq!(parse_date("2017/01/04 10:30:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let err = parse_date("04/01/2017").unwrap_err();
        assert!(matches!(err, TaskError::DateFormat(_)));
    }

    #[test]
    fn test_count_mixed_formats() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("dates.txt"),
            "2017-01-04\n2017-01-05\n04-Jan-2017\nJan 11, 2017\n2017/01/18 09:00:00\n",
        )
        .unwrap();

        count_wednesdays(temp.path()).unwrap();

        // Four Wednesdays; 2017-01-05 is a Thursday
        let written = std::fs::read_to_string(temp.path().join("dates-wednesdays.txt")).unwrap();
        assert_eq!(written, "4");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("dates.txt"), "2017-01-04\n\n  \n2017-01-11\n").unwrap();

        count_wednesdays(temp.path()).unwrap();
        let written = std::fs::read_to_string(temp.path().join("dates-wednesdays.txt")).unwrap();
        assert_eq!(written, "2");
    }

    #[test]
    fn test_bad_line_fails_whole_run() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("dates.txt"), "2017-01-04\nnot a date\n").unwrap();

        let err = count_wednesdays(temp.path()).unwrap_err();
        assert!(matches!(err, TaskError::DateFormat(_)));
        assert!(!temp.path().join("dates-wednesdays.txt").exists());
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let err = count_wednesdays(temp.path()).unwrap_err();
        assert!(matches!(err, TaskError::InvalidPath(_)));
    }
}
