//! The four-pillar chart and its five-element distribution.
//!
//! A [`Chart`] is built once from the four symbol pairs a calendar produces
//! and never changes afterwards. Its identity key (the four pillar texts
//! concatenated) seeds everything downstream, so it must stay bit-for-bit
//! stable for the same input.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::element::{Element, opt_symbol};
use crate::pillar::{FourPillars, Pillar, PillarKind};

/// Number of symbol slots in a chart: four stems plus four branches.
pub const SLOT_COUNT: u32 = 8;

/// Per-element occurrence counts across the chart's eight slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementCounts([u32; 5]);

impl ElementCounts {
    /// Counts from a raw array in [`Element::ALL`] order.
    pub fn from_array(counts: [u32; 5]) -> Self {
        Self(counts)
    }

    /// Tally resolved elements; unknown entries are skipped.
    pub fn tally<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Option<Element>>,
    {
        let mut counts = [0u32; 5];
        for element in elements.into_iter().flatten() {
            counts[element.index()] += 1;
        }
        Self(counts)
    }

    /// Count for one element.
    pub fn get(&self, element: Element) -> u32 {
        self.0[element.index()]
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Mean count over the five elements.
    pub fn mean(&self) -> f64 {
        f64::from(self.total()) / Element::ALL.len() as f64
    }

    /// `(element, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        Element::ALL.iter().map(move |e| (*e, self.get(*e)))
    }

    /// Percentage share of each element, rounded to one decimal.
    ///
    /// An all-zero tally divides by 1 instead of 0.
    pub fn percentages(&self) -> ElementPercentages {
        let total = match self.total() {
            0 => 1.0,
            t => f64::from(t),
        };
        let mut percent = [0.0; 5];
        for (slot, count) in percent.iter_mut().zip(self.0) {
            *slot = round1(f64::from(count) * 100.0 / total);
        }
        ElementPercentages(percent)
    }
}

impl Serialize for ElementCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (element, count) in self.iter() {
            map.serialize_entry(element.symbol(), &count)?;
        }
        map.end()
    }
}

/// Per-element percentage share, one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementPercentages([f64; 5]);

impl ElementPercentages {
    /// Percentage for one element.
    pub fn get(&self, element: Element) -> f64 {
        self.0[element.index()]
    }

    /// Sum of all percentages (≈100 for a non-empty chart).
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Serialize for ElementPercentages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for element in Element::ALL {
            map.serialize_entry(element.symbol(), &self.get(element))?;
        }
        map.end()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The day master (日主): the day pillar's stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayMaster {
    /// Stem symbol of the day pillar.
    pub gan: String,
    /// Element of that stem.
    #[serde(with = "opt_symbol")]
    pub element: Option<Element>,
}

/// The four resolved pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pillars {
    /// 年柱
    pub year: Pillar,
    /// 月柱
    pub month: Pillar,
    /// 日柱
    pub day: Pillar,
    /// 時柱
    pub time: Pillar,
}

impl Pillars {
    /// Get one pillar by kind.
    pub fn get(&self, kind: PillarKind) -> &Pillar {
        match kind {
            PillarKind::Year => &self.year,
            PillarKind::Month => &self.month,
            PillarKind::Day => &self.day,
            PillarKind::Time => &self.time,
        }
    }

    /// Pillars in year, month, day, hour order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarKind, &Pillar)> {
        PillarKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

/// Five-element distribution of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FiveElements {
    /// Occurrence counts.
    pub counts: ElementCounts,
    /// Percentage shares.
    pub percent: ElementPercentages,
}

/// A computed four-pillar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    /// Identity key: the four pillar texts concatenated.
    pub key: String,
    /// The resolved pillars.
    pub pillars: Pillars,
    /// The day master.
    pub day_master: DayMaster,
    /// Element distribution.
    pub five_elements: FiveElements,
}

impl Chart {
    /// Build a chart from the four symbol pairs of a calendar.
    pub fn from_pillars(raw: &FourPillars) -> Self {
        let pillars = Pillars {
            year: Pillar::from_ganzhi(&raw.year),
            month: Pillar::from_ganzhi(&raw.month),
            day: Pillar::from_ganzhi(&raw.day),
            time: Pillar::from_ganzhi(&raw.time),
        };

        let counts = ElementCounts::tally(pillars.iter().flat_map(|(_, p)| p.elements()));
        let percent = counts.percentages();

        let day_master = DayMaster {
            gan: pillars.day.gan.clone(),
            element: pillars.day.gan_element,
        };

        let key: String = pillars.iter().map(|(_, p)| p.text.as_str()).collect();

        Self {
            key,
            pillars,
            day_master,
            five_elements: FiveElements { counts, percent },
        }
    }

    /// The identity key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Element counts.
    pub fn counts(&self) -> &ElementCounts {
        &self.five_elements.counts
    }

    /// Element of the day master, if resolvable.
    pub fn day_master_element(&self) -> Option<Element> {
        self.day_master.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::element::{BRANCH_ELEMENTS, STEM_ELEMENTS};

    fn sample() -> Chart {
        // 甲子 丙寅 戊午 壬子
        Chart::from_pillars(&FourPillars::from_symbols([
            ("甲", "子"),
            ("丙", "寅"),
            ("戊", "午"),
            ("壬", "子"),
        ]))
    }

    #[test]
    fn key_concatenates_pillars_in_order() {
        assert_eq!(sample().key(), "甲子丙寅戊午壬子");
    }

    #[test]
    fn counts_cover_eight_slots() {
        let chart = sample();
        let c = chart.counts();
        assert_eq!(c.get(Element::Wood), 2);
        assert_eq!(c.get(Element::Fire), 2);
        assert_eq!(c.get(Element::Earth), 1);
        assert_eq!(c.get(Element::Metal), 0);
        assert_eq!(c.get(Element::Water), 3);
        assert_eq!(c.total(), SLOT_COUNT);
    }

    #[test]
    fn percentages_one_decimal() {
        let chart = sample();
        let p = chart.five_elements.percent;
        assert_eq!(p.get(Element::Water), 37.5);
        assert_eq!(p.get(Element::Wood), 25.0);
        assert_eq!(p.get(Element::Metal), 0.0);
        assert!((p.total() - 100.0).abs() < 0.5);
    }

    #[test]
    fn day_master_is_day_stem() {
        let chart = sample();
        assert_eq!(chart.day_master.gan, "戊");
        assert_eq!(chart.day_master_element(), Some(Element::Earth));
    }

    #[test]
    fn unknown_symbols_are_not_counted() {
        let chart = Chart::from_pillars(&FourPillars::from_symbols([
            ("甲", "?"),
            ("丙", "寅"),
            ("?", "午"),
            ("壬", "子"),
        ]));
        assert_eq!(chart.counts().total(), 6);
        assert_eq!(chart.day_master_element(), None);
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["dayMaster"]["element"], "？");
    }

    #[test]
    fn empty_tally_does_not_divide_by_zero() {
        let counts = ElementCounts::default();
        let p = counts.percentages();
        for e in Element::ALL {
            assert_eq!(p.get(e), 0.0);
        }
    }

    #[test]
    fn mean_is_total_over_five() {
        assert!((sample().counts().mean() - 1.6).abs() < f64::EPSILON);
    }

    #[test]
    fn chart_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["key"], "甲子丙寅戊午壬子");
        assert_eq!(json["pillars"]["time"]["text"], "壬子");
        assert_eq!(json["dayMaster"]["gan"], "戊");
        assert_eq!(json["fiveElements"]["counts"]["水"], 3);
        assert_eq!(json["fiveElements"]["percent"]["火"], 25.0);
    }

    proptest! {
        #[test]
        fn counts_and_percentages_hold_for_any_valid_chart(
            stems in proptest::array::uniform4(0usize..10),
            branches in proptest::array::uniform4(0usize..12),
        ) {
            let pairs: Vec<(&str, &str)> = stems
                .iter()
                .zip(branches.iter())
                .map(|(s, b)| (STEM_ELEMENTS[*s].0, BRANCH_ELEMENTS[*b].0))
                .collect();
            let chart = Chart::from_pillars(&FourPillars::from_symbols([
                pairs[0], pairs[1], pairs[2], pairs[3],
            ]));
            let counts = chart.counts();
            prop_assert_eq!(counts.total(), SLOT_COUNT);
            for (_, c) in counts.iter() {
                prop_assert!(c <= SLOT_COUNT);
            }
            let total = chart.five_elements.percent.total();
            prop_assert!((total - 100.0).abs() <= 0.5, "percent total {}", total);
        }
    }
}
