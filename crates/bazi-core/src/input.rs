//! Parsing of birth date and time strings.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{BaziError, BaziResult};

/// Parse a `YYYY-MM-DD` date.
pub fn parse_birth_date(input: &str) -> BaziResult<NaiveDate> {
    let invalid = || BaziError::InvalidDate(input.to_string());

    let parts: Vec<&str> = input.trim().split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        return Err(invalid());
    };
    let year: i32 = y.trim().parse().map_err(|_| invalid())?;
    let month: u32 = m.trim().parse().map_err(|_| invalid())?;
    let day: u32 = d.trim().parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parse an `HH` or `HH:MM` 24-hour time into `(hour, minute)`.
///
/// Anything after a second `:` (seconds) is ignored.
pub fn parse_birth_time(input: &str) -> BaziResult<(u32, u32)> {
    let invalid = || BaziError::InvalidTime(input.to_string());

    let trimmed = input.trim();
    let (hour, minute) = match trimmed.split_once(':') {
        Some((h, rest)) => {
            let m = rest.split(':').next().unwrap_or_default();
            (
                h.trim().parse::<u32>().map_err(|_| invalid())?,
                m.trim().parse::<u32>().map_err(|_| invalid())?,
            )
        }
        None => (trimmed.parse::<u32>().map_err(|_| invalid())?, 0),
    };

    if hour > 23 || minute > 59 {
        return Err(BaziError::TimeOutOfRange { hour, minute });
    }
    Ok((hour, minute))
}

/// Parse a birth date and time into a civil date-time (seconds zeroed).
pub fn parse_birth_datetime(date: &str, time: &str) -> BaziResult<NaiveDateTime> {
    let date = parse_birth_date(date)?;
    let (hour, minute) = parse_birth_time(time)?;
    date.and_hms_opt(hour, minute, 0)
        .ok_or(BaziError::TimeOutOfRange { hour, minute })
}
