//! Element balance and day-master strength.

use serde::{Deserialize, Serialize};

use bazi_core::{Chart, Element, ElementCounts};

/// Count at or above which an element is over-represented (out of 8 slots).
pub const EXCESS_THRESHOLD: u32 = 3;

/// Elements split into missing (count 0), excess (count ≥ 3), and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementBalance {
    /// Elements absent from the chart, in canonical order.
    pub missing: Vec<Element>,
    /// Over-represented elements, in canonical order.
    pub excess: Vec<Element>,
}

impl ElementBalance {
    /// Classify every element of a count table.
    pub fn classify(counts: &ElementCounts) -> Self {
        let missing = counts
            .iter()
            .filter(|(_, c)| *c == 0)
            .map(|(e, _)| e)
            .collect();
        let excess = counts
            .iter()
            .filter(|(_, c)| *c >= EXCESS_THRESHOLD)
            .map(|(e, _)| e)
            .collect();
        Self { missing, excess }
    }

    /// Elements that are neither missing nor in excess.
    pub fn neutral(&self) -> Vec<Element> {
        Element::ALL
            .into_iter()
            .filter(|e| !self.missing.contains(e) && !self.excess.contains(e))
            .collect()
    }

    /// True when no element is missing or in excess.
    pub fn is_balanced(&self) -> bool {
        self.missing.is_empty() && self.excess.is_empty()
    }
}

/// Day-master strength relative to the mean element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayMasterStrength {
    /// Count at or below the mean.
    #[serde(rename = "偏弱")]
    Weak,
    /// Count above the mean.
    #[serde(rename = "偏強")]
    Strong,
}

impl DayMasterStrength {
    /// Assess a chart's day master. An unknown day-master element counts as 0.
    pub fn assess(chart: &Chart) -> Self {
        let counts = chart.counts();
        let dm_count = chart
            .day_master_element()
            .map_or(0, |e| counts.get(e));
        if f64::from(dm_count) <= counts.mean() {
            Self::Weak
        } else {
            Self::Strong
        }
    }

    /// Chinese label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "偏弱",
            Self::Strong => "偏強",
        }
    }
}

impl std::fmt::Display for DayMasterStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_core::FourPillars;

    #[test]
    fn classify_example_distribution() {
        // {Wood:0, Fire:3, Earth:2, Metal:2, Water:1}
        let counts = ElementCounts::from_array([0, 3, 2, 2, 1]);
        let b = ElementBalance::classify(&counts);
        assert_eq!(b.missing, vec![Element::Wood]);
        assert_eq!(b.excess, vec![Element::Fire]);
        assert_eq!(
            b.neutral(),
            vec![Element::Earth, Element::Metal, Element::Water]
        );
        assert!(!b.is_balanced());
    }

    #[test]
    fn threshold_is_inclusive() {
        let b = ElementBalance::classify(&ElementCounts::from_array([2, 2, 2, 1, 1]));
        assert!(b.is_balanced());
        let b = ElementBalance::classify(&ElementCounts::from_array([3, 2, 1, 1, 1]));
        assert_eq!(b.excess, vec![Element::Wood]);
    }

    #[test]
    fn all_elements_classified_leaves_no_neutral() {
        let b = ElementBalance::classify(&ElementCounts::from_array([4, 4, 0, 0, 0]));
        assert!(b.neutral().is_empty());
    }

    #[test]
    fn water_day_master_with_one_is_weak() {
        // 甲午 丙午 壬辰 庚戌: Water appears once (the day stem)
        let chart = Chart::from_pillars(&FourPillars::from_symbols([
            ("甲", "午"),
            ("丙", "午"),
            ("壬", "辰"),
            ("庚", "戌"),
        ]));
        assert_eq!(chart.counts().get(Element::Water), 1);
        assert_eq!(DayMasterStrength::assess(&chart), DayMasterStrength::Weak);
    }

    #[test]
    fn two_is_strong_against_mean() {
        // 甲子 丙寅 戊午 壬子: Earth day master appears once -> weak;
        // 壬 day with three Water -> strong
        let weak = Chart::from_pillars(&FourPillars::from_symbols([
            ("甲", "子"),
            ("丙", "寅"),
            ("戊", "午"),
            ("壬", "子"),
        ]));
        assert_eq!(DayMasterStrength::assess(&weak), DayMasterStrength::Weak);
        let strong = Chart::from_pillars(&FourPillars::from_symbols([
            ("甲", "子"),
            ("丙", "寅"),
            ("壬", "午"),
            ("戊", "子"),
        ]));
        assert_eq!(DayMasterStrength::assess(&strong), DayMasterStrength::Strong);
    }

    #[test]
    fn unknown_day_master_is_weak() {
        let chart = Chart::from_pillars(&FourPillars::from_symbols([
            ("甲", "子"),
            ("丙", "寅"),
            ("?", "午"),
            ("壬", "子"),
        ]));
        assert_eq!(DayMasterStrength::assess(&chart), DayMasterStrength::Weak);
    }
}
