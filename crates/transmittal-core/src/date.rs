//! Date formatting
//!
//! Turns the approval date sent by the API into a [`SessionDate`] and formats
//! the wall-clock values the caller injects (issue date, generation stamp).

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use tracing::warn;
use transmittal_ast::SessionDate;

/// Date layouts accepted for `date_approved`, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y"];

/// Date-time layouts accepted for `date_approved` when no zone is given
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Humanize an approval date
///
/// Absent, blank or unparseable input yields [`SessionDate::Unknown`]; this
/// never fails.
pub fn session_date(raw: Option<&str>) -> SessionDate {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        warn!("No approval date, printing N/A");
        return SessionDate::Unknown;
    };

    match parse_date(raw) {
        Some(date) => from_date(date),
        None => {
            warn!("Unparseable approval date {:?}, printing N/A", raw);
            SessionDate::Unknown
        }
    }
}

/// Humanize an already parsed calendar date
pub fn from_date(date: NaiveDate) -> SessionDate {
    SessionDate::known(date.day(), date.format("%B").to_string(), date.year())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Issue date printed under the heading ("January 5, 2024")
pub fn issued_on_text(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Generation stamp printed in the footer ("1/21/2024, 3:05:09 PM")
pub fn generated_at_text(at: NaiveDateTime) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use transmittal_ast::OrdinalSuffix;

    #[test]
    fn test_twenty_first() {
        assert_eq!(
            session_date(Some("2024-01-21")),
            SessionDate::Known {
                day: 21,
                suffix: OrdinalSuffix::St,
                month: "January".to_string(),
                year: 2024,
            }
        );
    }

    #[test]
    fn test_eleventh() {
        assert_eq!(
            session_date(Some("2024-01-11")),
            SessionDate::Known {
                day: 11,
                suffix: OrdinalSuffix::Th,
                month: "January".to_string(),
                year: 2024,
            }
        );
    }

    #[test]
    fn test_api_timestamp() {
        let date = session_date(Some("2023-03-02T16:00:00.000000Z"));
        assert_eq!(date, SessionDate::known(2, "March", 2023));
        assert_eq!(date.suffix_text(), "nd");
    }

    #[test]
    fn test_naive_timestamp_and_us_format() {
        assert_eq!(
            session_date(Some("2022-12-03 08:30:00")),
            SessionDate::known(3, "December", 2022)
        );
        assert_eq!(
            session_date(Some("07/13/2021")),
            SessionDate::known(13, "July", 2021)
        );
    }

    #[test]
    fn test_missing_and_garbage_yield_sentinel() {
        assert_eq!(session_date(None), SessionDate::Unknown);
        assert_eq!(session_date(Some("")), SessionDate::Unknown);
        assert_eq!(session_date(Some("   ")), SessionDate::Unknown);
        assert_eq!(session_date(Some("not a date")), SessionDate::Unknown);
        assert_eq!(session_date(Some("2024-02-30")), SessionDate::Unknown);
    }

    #[test]
    fn test_issued_on_text() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(issued_on_text(date), "January 5, 2024");
    }

    #[test]
    fn test_generated_at_text() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 21)
            .unwrap()
            .and_hms_opt(15, 5, 9)
            .unwrap();
        assert_eq!(generated_at_text(at), "1/21/2024, 3:05:09 PM");

        let midnight = NaiveDate::from_ymd_opt(2024, 11, 2)
            .unwrap()
            .and_hms_opt(0, 7, 0)
            .unwrap();
        assert_eq!(generated_at_text(midnight), "11/2/2024, 12:07:00 AM");
    }
}
