//! Five-year fortune projection.
//!
//! Strength decides which elements help the day master. A weak day master
//! wants its own element and whatever generates it, and is wary of whatever
//! controls it. A strong one wants to be controlled and to put out, and is
//! wary of more of its generator. Each year is labelled by how its stem's
//! element sits against those two sets.

use chrono::NaiveDate;
use serde::Serialize;

use bazi_core::calendar::{FORTUNE_ANCHOR, GanZhiCalendar};
use bazi_core::element::{
    Element, controller_of, element_of_stem, generator_of, opt_symbol, output_of,
};
use bazi_core::Chart;

use crate::balance::{DayMasterStrength, ElementBalance};
use crate::themes::theme;

/// Match score at or above which confidence is high.
pub const HIGH_CONFIDENCE: f64 = 0.8;

/// Match score at or above which confidence is medium.
pub const MEDIUM_CONFIDENCE: f64 = 0.6;

/// Disclaimer attached to every report.
pub const NOTE: &str =
    "此為八字與五行的簡化推演，用於自我反思與規劃；不構成醫療、法律或投資建議。";

const BALANCED_FOCUS: &str = "五行分佈較平均，屬於「靠選擇」比「靠運」更明顯的命格。";
const FALLBACK_TIP: &str = "把目標拆成季度里程碑，穩定複利會比短線爆發更有效。";

/// How much to trust the projection, from the answer match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    /// Score ≥ 0.8.
    #[serde(rename = "高")]
    High,
    /// Score ≥ 0.6.
    #[serde(rename = "中")]
    Medium,
    /// Anything lower.
    #[serde(rename = "低")]
    Low,
}

impl Confidence {
    /// Band a match score.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_CONFIDENCE {
            Self::High
        } else if score >= MEDIUM_CONFIDENCE {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "高"),
            Self::Medium => write!(f, "中"),
            Self::Low => write!(f, "低"),
        }
    }
}

/// How a year sits against the day master's needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum YearLevel {
    /// The year's element is beneficial.
    #[serde(rename = "順勢")]
    Favorable,
    /// The year's element calls for caution.
    #[serde(rename = "保守")]
    Conservative,
    /// Neither.
    #[serde(rename = "平穩")]
    Neutral,
}

impl YearLevel {
    /// Chinese label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Favorable => "順勢",
            Self::Conservative => "保守",
            Self::Neutral => "平穩",
        }
    }

    /// Advice for a year of `element` at this level.
    pub fn advice(self, element: Option<Element>) -> String {
        let base = element.map_or("", |e| theme(e).label);
        match self {
            Self::Favorable => format!("{base}偏旺，適合主動出擊、做決策、擴張影響力。"),
            Self::Conservative => {
                format!("{base}帶來壓力測試，適合守成、控風險、先補短板再加速。")
            }
            Self::Neutral => format!("{base}屬於可控變量年，重點在選對方向並保持節奏。"),
        }
    }
}

impl std::fmt::Display for YearLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One year of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearForecast {
    /// Gregorian year.
    pub year: i32,
    /// Element of the year's stem.
    #[serde(with = "opt_symbol")]
    pub year_element: Option<Element>,
    /// Classification.
    pub level: YearLevel,
    /// Advice text.
    pub advice: String,
}

/// Elements that help or strain the day master.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNeeds {
    /// Strength assessment behind the sets.
    pub strength: DayMasterStrength,
    /// Elements that support the day master.
    pub beneficial: Vec<Element>,
    /// Elements to be careful with.
    pub caution: Vec<Element>,
}

impl ElementNeeds {
    /// Derive the beneficial and caution sets for a chart.
    ///
    /// An unknown day-master element leaves both sets empty.
    pub fn for_chart(chart: &Chart) -> Self {
        let strength = DayMasterStrength::assess(chart);
        let (beneficial, caution) = match chart.day_master_element() {
            None => (Vec::new(), Vec::new()),
            Some(dm) => match strength {
                DayMasterStrength::Weak => (
                    collect_known([Some(dm), generator_of(dm)]),
                    collect_known([controller_of(dm)]),
                ),
                DayMasterStrength::Strong => (
                    collect_known([controller_of(dm), output_of(dm)]),
                    collect_known([generator_of(dm)]),
                ),
            },
        };
        Self {
            strength,
            beneficial,
            caution,
        }
    }

    /// Classify one year's element.
    pub fn level_of(&self, element: Option<Element>) -> YearLevel {
        match element {
            Some(e) if self.beneficial.contains(&e) => YearLevel::Favorable,
            Some(e) if self.caution.contains(&e) => YearLevel::Conservative,
            _ => YearLevel::Neutral,
        }
    }
}

fn collect_known<const N: usize>(elements: [Option<Element>; N]) -> Vec<Element> {
    let mut out = Vec::with_capacity(N);
    for e in elements.into_iter().flatten() {
        if !out.contains(&e) {
            out.push(e);
        }
    }
    out
}

/// Summary section of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneSummary {
    /// The day master's element.
    #[serde(with = "opt_symbol")]
    pub day_master_element: Option<Element>,
    /// Weak or strong.
    pub day_master_strength: DayMasterStrength,
    /// What to focus on.
    pub focus: Vec<String>,
    /// Practical tips.
    pub tips: Vec<String>,
}

/// The forward-looking report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureFortune {
    /// Confidence band.
    pub confidence: Confidence,
    /// Match score the band was derived from.
    #[serde(serialize_with = "crate::scoring::round3")]
    pub match_score: f64,
    /// Summary.
    pub summary: FortuneSummary,
    /// One entry per year, in order.
    pub timeline: Vec<YearForecast>,
    /// Disclaimer.
    pub note: &'static str,
}

/// Element of a year's stem, read at the mid-February anchor.
pub fn year_element<C: GanZhiCalendar + ?Sized>(calendar: &C, year: i32) -> Option<Element> {
    let anchor = NaiveDate::from_ymd_opt(year, FORTUNE_ANCHOR.0, FORTUNE_ANCHOR.1)?;
    element_of_stem(&calendar.year_stem(anchor))
}

/// Project the fortune for `years` years starting at `start_year`.
pub fn project_fortune<C: GanZhiCalendar + ?Sized>(
    chart: &Chart,
    calendar: &C,
    start_year: i32,
    years: u32,
    match_score: f64,
) -> FutureFortune {
    let needs = ElementNeeds::for_chart(chart);
    tracing::debug!(
        chart = chart.key(),
        strength = %needs.strength,
        beneficial = ?needs.beneficial,
        caution = ?needs.caution,
        "projecting fortune"
    );

    let timeline = (0..years)
        .map(|offset| {
            let year = start_year.saturating_add_unsigned(offset);
            let element = year_element(calendar, year);
            let level = needs.level_of(element);
            YearForecast {
                year,
                year_element: element,
                level,
                advice: level.advice(element),
            }
        })
        .collect();

    let balance = ElementBalance::classify(chart.counts());

    FutureFortune {
        confidence: Confidence::from_score(match_score),
        match_score,
        summary: FortuneSummary {
            day_master_element: chart.day_master_element(),
            day_master_strength: needs.strength,
            focus: focus_lines(&balance),
            tips: tips(&balance),
        },
        timeline,
        note: NOTE,
    }
}

fn join_symbols(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|e| e.symbol())
        .collect::<Vec<_>>()
        .join("、")
}

fn focus_lines(balance: &ElementBalance) -> Vec<String> {
    let mut focus = Vec::new();
    if !balance.missing.is_empty() {
        focus.push(format!(
            "五行偏缺：{}（建議刻意補足其對應生活策略）",
            join_symbols(&balance.missing)
        ));
    }
    if !balance.excess.is_empty() {
        focus.push(format!(
            "五行偏旺：{}（建議用規則/節奏把能量導向成果）",
            join_symbols(&balance.excess)
        ));
    }
    if focus.is_empty() {
        focus.push(BALANCED_FOCUS.to_string());
    }
    focus
}

fn tips(balance: &ElementBalance) -> Vec<String> {
    let mut tips: Vec<String> = balance
        .missing
        .iter()
        .chain(&balance.excess)
        .take(2)
        .filter_map(|e| theme(*e).tips.first())
        .map(|t| t.to_string())
        .collect();
    if tips.is_empty() {
        tips.push(FALLBACK_TIP.to_string());
    }
    tips
}
