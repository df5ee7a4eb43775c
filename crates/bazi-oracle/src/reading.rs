//! End-to-end reading: answers in, past review and fortune out.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use bazi_core::{Chart, GanZhiCalendar};

use crate::config::ReadingConfig;
use crate::fortune::{FutureFortune, project_fortune};
use crate::question::VerificationQuestion;
use crate::scoring::{PastReview, score_answers};

/// Result of scoring a question set and projecting the fortune.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingOutcome {
    /// How the answers lined up with the chart.
    pub past_review: PastReview,
    /// The forward projection, weighted by the review's score.
    pub future: FutureFortune,
}

/// Score `answers` against `questions` and project the fortune from `today`.
pub fn conclude<C: GanZhiCalendar + ?Sized>(
    chart: &Chart,
    questions: &[VerificationQuestion],
    answers: &HashMap<String, bool>,
    calendar: &C,
    config: &ReadingConfig,
    today: NaiveDate,
) -> ReadingOutcome {
    let past_review = score_answers(questions, answers);
    let start_year = config.start_year_for(today);
    tracing::info!(
        chart = chart.key(),
        answered = past_review.answered,
        matched = past_review.matched,
        score = past_review.match_score,
        start_year,
        years = config.horizon_years,
        "reading concluded"
    );
    let future = project_fortune(
        chart,
        calendar,
        start_year,
        config.horizon_years,
        past_review.match_score,
    );
    ReadingOutcome {
        past_review,
        future,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fortune::Confidence;
    use crate::question::generate_questions;
    use bazi_core::{SexagenaryCalendar, compute_chart};

    fn fixture() -> (Chart, Vec<VerificationQuestion>, NaiveDate) {
        let calendar = SexagenaryCalendar::new();
        let at = NaiveDate::from_ymd_opt(1990, 5, 17)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let chart = compute_chart(&calendar, at);
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let questions = generate_questions(&chart, today);
        (chart, questions, today)
    }

    #[test]
    fn expected_answers_give_high_confidence() {
        let (chart, questions, today) = fixture();
        let answers: HashMap<String, bool> = questions
            .iter()
            .map(|q| (q.id.clone(), q.expected_yes))
            .collect();
        let outcome = conclude(
            &chart,
            &questions,
            &answers,
            &SexagenaryCalendar::new(),
            &ReadingConfig::default(),
            today,
        );
        assert_eq!(outcome.past_review.matched, questions.len());
        assert_eq!(outcome.future.confidence, Confidence::High);
        assert_eq!(outcome.future.timeline.len(), 5);
        assert_eq!(outcome.future.timeline[0].year, 2026);
    }

    #[test]
    fn config_controls_timeline() {
        let (chart, questions, today) = fixture();
        let config = ReadingConfig::default().with_horizon(3).with_start_year(2040);
        let outcome = conclude(
            &chart,
            &questions,
            &HashMap::new(),
            &SexagenaryCalendar::new(),
            &config,
            today,
        );
        let years: Vec<i32> = outcome.future.timeline.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2040, 2041, 2042]);
        assert_eq!(outcome.past_review.answered, 0);
        assert_eq!(
            outcome.future.match_score,
            outcome.past_review.match_score
        );
    }
}
