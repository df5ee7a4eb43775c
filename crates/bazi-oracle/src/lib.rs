//! Verification questions, answer scoring, and fortune projection for Bazi charts.
//!
//! Questions are deterministic per chart and calendar day: the chart key and
//! the date are hashed into an RNG seed, so the same person asking twice on
//! the same day sees the same set.

/// Element balance and day-master strength.
pub mod balance;
/// Reading configuration.
pub mod config;
/// Fortune projection.
pub mod fortune;
/// Verification question generation.
pub mod question;
/// Scoring and projection in one call.
pub mod reading;
/// Seeded randomness.
pub mod rng;
/// Answer scoring.
pub mod scoring;
/// Per-element phrase bank.
pub mod themes;

pub use balance::{DayMasterStrength, ElementBalance};
pub use config::ReadingConfig;
pub use fortune::{Confidence, FutureFortune, YearForecast, YearLevel, project_fortune};
pub use question::{QUESTION_COUNT, VerificationQuestion, generate_questions};
pub use reading::{ReadingOutcome, conclude};
pub use rng::{SeededRng, seed_from_key};
pub use scoring::{PastReview, ReviewItem, match_score, score_answers};
