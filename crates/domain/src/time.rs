//! Date and time-of-day helpers for the controller's string formats.

use chrono::{Local, NaiveDate, NaiveTime};

use crate::error::ValidationError;

/// Calendar day in the controller's local time zone.
pub type Day = NaiveDate;

/// Return today's date in local time.
#[must_use]
pub fn today() -> Day {
    Local::now().date_naive()
}

/// Parse an `HH:MM` activation time.
///
/// # Errors
///
/// Returns [`ValidationError::ActivationTime`] when `value` is not `HH:MM`.
pub fn parse_activation_time(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| ValidationError::ActivationTime(value.to_string()))
}

/// Parse a `YYYY-MM-DD` run date.
///
/// # Errors
///
/// Returns [`ValidationError::RunDate`] when `value` is not `YYYY-MM-DD`.
pub fn parse_run_date(value: &str) -> Result<Day, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::RunDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_activation_time() {
        let time = parse_activation_time("06:30").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(6, 30, 0).unwrap());
    }

    #[test]
    fn should_reject_activation_time_without_minutes() {
        assert_eq!(
            parse_activation_time("6"),
            Err(ValidationError::ActivationTime("6".to_string()))
        );
    }

    #[test]
    fn should_parse_run_date() {
        let day = parse_run_date("2024-05-03").unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
    }

    #[test]
    fn should_reject_run_date_in_other_format() {
        assert!(parse_run_date("03/05/2024").is_err());
    }
}
