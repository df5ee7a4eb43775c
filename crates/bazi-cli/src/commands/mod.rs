pub mod chart;
pub mod questions;
pub mod reading;

use chrono::{Local, NaiveDate};

use bazi_core::input::parse_birth_datetime;
use bazi_core::{Chart, SexagenaryCalendar, compute_chart};

/// Parse the birth input and compute the chart.
fn load_chart(date: &str, time: &str) -> Result<Chart, String> {
    let at = parse_birth_datetime(date, time).map_err(|e| e.to_string())?;
    Ok(compute_chart(&SexagenaryCalendar::new(), at))
}

/// The `--on` date, or today when absent.
fn context_date(on: Option<&str>) -> Result<NaiveDate, String> {
    match on {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| format!("--on must be YYYY-MM-DD, got '{raw}'")),
        None => Ok(Local::now().date_naive()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("failed to serialize: {e}"))
}
