//! Core types for four-pillar (八字) charts.
//!
//! This crate holds the fixed element tables, the pillar and chart model,
//! and the calendar collaborator that turns a civil date-time into the four
//! stem/branch pairs. Everything here is a pure function of its input.

/// Calendar collaborator and the built-in sexagenary calendar.
pub mod calendar;
/// Chart builder and element distribution.
pub mod chart;
/// The five elements, symbol tables, and generation/control cycles.
pub mod element;
/// Error types used throughout the crate.
pub mod error;
/// Birth date/time string parsing.
pub mod input;
/// Stem/branch pairs and resolved pillars.
pub mod pillar;

/// Re-export calendar types.
pub use calendar::{FORTUNE_ANCHOR, GanZhiCalendar, SexagenaryCalendar};
/// Re-export chart types.
pub use chart::{Chart, DayMaster, ElementCounts, ElementPercentages};
/// Re-export element types.
pub use element::Element;
/// Re-export error types.
pub use error::{BaziError, BaziResult};
/// Re-export pillar types.
pub use pillar::{FourPillars, GanZhi, Pillar, PillarKind};

/// Compute the chart for a civil date-time using the given calendar.
pub fn compute_chart<C: GanZhiCalendar + ?Sized>(
    calendar: &C,
    at: chrono::NaiveDateTime,
) -> Chart {
    Chart::from_pillars(&calendar.four_pillars(at))
}
