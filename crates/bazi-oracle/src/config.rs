//! Configuration for a reading.

use chrono::{Datelike, NaiveDate};

/// Default number of years in the fortune timeline.
pub const DEFAULT_HORIZON_YEARS: u32 = 5;

/// Longest timeline a reading will project.
pub const MAX_HORIZON_YEARS: u32 = 60;

/// Configuration for the fortune part of a reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingConfig {
    /// Number of years in the timeline (1-60).
    pub horizon_years: u32,
    /// First timeline year; `None` means the context date's year.
    pub start_year: Option<i32>,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            start_year: None,
        }
    }
}

impl ReadingConfig {
    /// Set the timeline length (clamped to 1-60).
    pub fn with_horizon(mut self, years: u32) -> Self {
        self.horizon_years = years.clamp(1, MAX_HORIZON_YEARS);
        self
    }

    /// Pin the first timeline year.
    pub fn with_start_year(mut self, year: i32) -> Self {
        self.start_year = Some(year);
        self
    }

    /// First timeline year for a reading made on `today`.
    pub fn start_year_for(&self, today: NaiveDate) -> i32 {
        self.start_year.unwrap_or_else(|| today.year())
    }
}
