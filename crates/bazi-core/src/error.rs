//! Error types for chart input handling.

use thiserror::Error;

/// Alias for `Result<T, BaziError>`.
pub type BaziResult<T> = Result<T, BaziError>;

/// Errors raised while turning user input into a civil date-time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BaziError {
    /// The birth date is not a valid `YYYY-MM-DD` Gregorian date.
    #[error("birthDate 格式需為 YYYY-MM-DD")]
    InvalidDate(String),

    /// The birth time is not `HH` or `HH:MM`.
    #[error("birthTime 格式需為 HH 或 HH:MM（24 小時制）")]
    InvalidTime(String),

    /// The birth time parsed but lies outside 00:00–23:59.
    #[error("birthTime 不合法")]
    TimeOutOfRange {
        /// Parsed hour.
        hour: u32,
        /// Parsed minute.
        minute: u32,
    },
}
