//! Deterministic verification questions.
//!
//! A question set checks a chart against the user's own last five years. The
//! set is fully determined by the chart's identity key and the context date:
//! the same chart on the same day always gets the same five questions in the
//! same order, and a different day reshuffles them.
//!
//! Candidates come from the chart's signals, strongest first:
//! 1. one "yes" question per missing element,
//! 2. one "yes" question per element in excess,
//! 3. one "yes" question about what the day master leans on (weak) or puts out (strong),
//! 4. one "no" question about a neutral element, when any exists.
//!
//! The pool is shuffled and cut to [`QUESTION_COUNT`]. A short pool is padded
//! with filler questions whose expected answer is itself a coin flip, so
//! fillers carry less signal than the rest.

use chrono::NaiveDate;
use serde::Serialize;

use bazi_core::element::{generator_of, output_of};
use bazi_core::{Chart, Element};

use crate::balance::{DayMasterStrength, ElementBalance};
use crate::rng::{SeededRng, daily_key};
use crate::themes::theme;

/// Number of questions in every set.
pub const QUESTION_COUNT: usize = 5;

/// Where a question came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionOrigin {
    /// The element is absent from the chart.
    Missing(Element),
    /// The element is over-represented.
    Excess(Element),
    /// A weak day master drawing on its own element or its generator.
    DayMasterSupport(Element),
    /// A strong day master pruning (Metal) or producing (its output).
    DayMasterOutput(Element),
    /// A neutral element, expected to have stayed quiet.
    Neutral(Element),
    /// Padding question; `index` is its position in the final set.
    Filler {
        /// Element whose theme was drawn.
        element: Element,
        /// Position in the final set.
        index: usize,
    },
}

impl QuestionOrigin {
    /// The element whose theme the question draws on.
    pub fn element(self) -> Element {
        match self {
            Self::Missing(e)
            | Self::Excess(e)
            | Self::DayMasterSupport(e)
            | Self::DayMasterOutput(e)
            | Self::Neutral(e)
            | Self::Filler { element: e, .. } => e,
        }
    }

    /// Identifier, unique within a question set.
    pub fn id(self) -> String {
        match self {
            Self::Missing(e) => format!("miss_{e}"),
            Self::Excess(e) => format!("excess_{e}"),
            Self::DayMasterSupport(e) => format!("dm_support_{e}"),
            Self::DayMasterOutput(e) => format!("dm_output_{e}"),
            Self::Neutral(e) => format!("neutral_no_{e}"),
            Self::Filler { element, index } => format!("fill_{element}_{index}"),
        }
    }

    /// Why this question is expected to come out the way it does.
    pub fn rationale(self) -> String {
        match self {
            Self::Missing(e) => {
                format!("五行偏缺（{e}），近年遇到補{e}的年份/情境時，常以對應主題事件呈現。")
            }
            Self::Excess(e) => {
                format!("五行偏旺（{e}），過去數年容易在對應領域出現強烈感受或事件。")
            }
            Self::DayMasterSupport(e) => {
                format!("日主偏弱，遇到{e}相關主題時，往往是推動你前進的關鍵事件。")
            }
            Self::DayMasterOutput(e) => {
                format!("日主偏強，近年更容易在{e}的主題上做取捨與輸出。")
            }
            Self::Neutral(e) => format!("{e}較中性，通常不會以強事件主導過去 5 年。"),
            Self::Filler { .. } => "補題：用於校準你的生活主題。".to_string(),
        }
    }

    /// True for padding questions.
    pub fn is_filler(self) -> bool {
        matches!(self, Self::Filler { .. })
    }
}

/// A yes/no question with a known expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationQuestion {
    /// Identifier, unique within the set.
    pub id: String,
    /// Question text.
    pub text: String,
    /// Expected answer.
    pub expected_yes: bool,
    /// Explanation of the expectation.
    pub rationale: String,
    /// Origin of the question.
    #[serde(skip)]
    pub origin: QuestionOrigin,
}

impl VerificationQuestion {
    fn new(origin: QuestionOrigin, text: &str, expected_yes: bool) -> Self {
        Self {
            id: origin.id(),
            text: text.to_string(),
            expected_yes,
            rationale: origin.rationale(),
            origin,
        }
    }
}

/// Generate the question set for a chart on a given day.
pub fn generate_questions(chart: &Chart, day: NaiveDate) -> Vec<VerificationQuestion> {
    let mut rng = SeededRng::from_key(&daily_key(chart.key(), day));
    generate_questions_with_rng(chart, &mut rng)
}

/// Generate a question set drawing from an existing random source.
pub fn generate_questions_with_rng(
    chart: &Chart,
    rng: &mut SeededRng,
) -> Vec<VerificationQuestion> {
    let mut questions = candidate_pool(chart, rng);
    let pool_size = questions.len();

    rng.shuffle(&mut questions);
    questions.truncate(QUESTION_COUNT);

    while questions.len() < QUESTION_COUNT {
        let Some(&element) = rng.choice(&Element::ALL) else {
            break;
        };
        let text = rng
            .choice(theme(element).yes_templates)
            .copied()
            .unwrap_or_default();
        let expected_yes = rng.random_bit();
        let origin = QuestionOrigin::Filler {
            element,
            index: questions.len(),
        };
        questions.push(VerificationQuestion::new(origin, text, expected_yes));
    }

    tracing::debug!(
        chart = chart.key(),
        pool_size,
        fillers = questions.iter().filter(|q| q.origin.is_filler()).count(),
        "generated verification questions"
    );
    questions
}

/// Build the unshuffled candidate pool for a chart.
pub fn candidate_pool(chart: &Chart, rng: &mut SeededRng) -> Vec<VerificationQuestion> {
    let balance = ElementBalance::classify(chart.counts());
    let mut pool = Vec::new();

    for &e in &balance.missing {
        push_yes(&mut pool, rng, QuestionOrigin::Missing(e));
    }
    for &e in &balance.excess {
        push_yes(&mut pool, rng, QuestionOrigin::Excess(e));
    }

    if let Some(dm) = chart.day_master_element() {
        match DayMasterStrength::assess(chart) {
            DayMasterStrength::Weak => {
                let support: Vec<Element> =
                    [Some(dm), generator_of(dm)].into_iter().flatten().collect();
                if let Some(&e) = rng.choice(&support) {
                    push_yes(&mut pool, rng, QuestionOrigin::DayMasterSupport(e));
                }
            }
            DayMasterStrength::Strong => {
                let outlets: Vec<Element> = [Some(Element::Metal), output_of(dm)]
                    .into_iter()
                    .flatten()
                    .collect();
                if let Some(&e) = rng.choice(&outlets) {
                    push_yes(&mut pool, rng, QuestionOrigin::DayMasterOutput(e));
                }
            }
        }
    }

    let neutral = balance.neutral();
    if let Some(&e) = rng.choice(&neutral)
        && let Some(text) = rng.choice(theme(e).no_templates)
    {
        pool.push(VerificationQuestion::new(
            QuestionOrigin::Neutral(e),
            text,
            false,
        ));
    }

    pool
}

fn push_yes(pool: &mut Vec<VerificationQuestion>, rng: &mut SeededRng, origin: QuestionOrigin) {
    if let Some(text) = rng.choice(theme(origin.element()).yes_templates) {
        pool.push(VerificationQuestion::new(origin, text, true));
    }
}
