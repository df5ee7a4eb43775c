//! Folding user answers into a completeness-weighted match score.
//!
//! `score = (matched / total) * (0.6 + 0.4 * answered / total)`. Leaving
//! questions unanswered dampens the score but never zeroes it, so a short,
//! fully correct answer set still counts.

use std::collections::HashMap;

use serde::Serialize;

use crate::question::VerificationQuestion;

/// Share of the score that does not depend on completeness.
pub const COMPLETENESS_FLOOR: f64 = 0.6;

/// Review of one question against the user's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    /// Question identifier.
    pub id: String,
    /// Question text.
    pub question: String,
    /// Expected answer.
    pub expected_yes: bool,
    /// The user's answer; unanswered counts as "no".
    pub your_answer: bool,
    /// Whether the answer matched the expectation.
    pub matched: bool,
    /// Explanation of the expectation.
    pub rationale: String,
}

/// Aggregate review of an answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PastReview {
    /// Number of questions.
    pub total: usize,
    /// Questions the user answered.
    pub answered: usize,
    /// Answers (given or defaulted) that matched.
    pub matched: usize,
    /// Completeness-weighted match score in `[0, 1]`.
    #[serde(serialize_with = "round3")]
    pub match_score: f64,
    /// Per-question review.
    pub items: Vec<ReviewItem>,
}

/// Serialize a score rounded to three decimals.
pub(crate) fn round3<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64((value * 1000.0).round() / 1000.0)
}

/// Combine counts into the match score. A zero `total` is treated as 1.
pub fn match_score(matched: usize, answered: usize, total: usize) -> f64 {
    let total = total.max(1) as f64;
    let completeness = answered as f64 / total;
    (matched as f64 / total) * (COMPLETENESS_FLOOR + (1.0 - COMPLETENESS_FLOOR) * completeness)
}

/// Score answers keyed by question id against a question set.
///
/// Ids not in the set are ignored.
pub fn score_answers(
    questions: &[VerificationQuestion],
    answers: &HashMap<String, bool>,
) -> PastReview {
    let items: Vec<ReviewItem> = questions
        .iter()
        .map(|q| {
            let your_answer = answers.get(&q.id).copied().unwrap_or(false);
            ReviewItem {
                id: q.id.clone(),
                question: q.text.clone(),
                expected_yes: q.expected_yes,
                your_answer,
                matched: your_answer == q.expected_yes,
                rationale: q.rationale.clone(),
            }
        })
        .collect();

    let total = questions.len();
    let answered = questions
        .iter()
        .filter(|q| answers.contains_key(&q.id))
        .count();
    let matched = items.iter().filter(|i| i.matched).count();

    PastReview {
        total,
        answered,
        matched,
        match_score: match_score(matched, answered, total),
        items,
    }
}
