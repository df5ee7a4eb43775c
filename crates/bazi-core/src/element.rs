//! The five elements and the fixed tables that relate symbols and elements.
//!
//! Each of the 10 heavenly stems and 12 earthly branches maps to exactly one
//! element. The elements form two closed cycles: generation (Wood feeds Fire,
//! Fire makes Earth, ...) and control (Wood breaks Earth, Earth dams Water, ...).
//!
//! Lookups never fail loudly. A symbol outside the tables, or an inverse
//! lookup with no matching entry, yields `None`, which the rest of the
//! workspace treats as the "unknown" element and renders as `？`.

use serde::{Deserialize, Serialize};

/// Display symbol for an element that could not be resolved.
pub const UNKNOWN_SYMBOL: &str = "？";

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    /// 木
    #[serde(rename = "木")]
    Wood,
    /// 火
    #[serde(rename = "火")]
    Fire,
    /// 土
    #[serde(rename = "土")]
    Earth,
    /// 金
    #[serde(rename = "金")]
    Metal,
    /// 水
    #[serde(rename = "水")]
    Water,
}

impl Element {
    /// All elements in canonical order (Wood, Fire, Earth, Metal, Water).
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position of this element in [`Element::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The single-character symbol, e.g. `木`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Parse an element from its symbol or English name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "木" | "wood" => Some(Self::Wood),
            "火" | "fire" => Some(Self::Fire),
            "土" | "earth" => Some(Self::Earth),
            "金" | "metal" => Some(Self::Metal),
            "水" | "water" => Some(Self::Water),
            _ => None,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Render a possibly-unknown element, using `？` for `None`.
pub fn element_symbol(element: Option<Element>) -> &'static str {
    element.map_or(UNKNOWN_SYMBOL, Element::symbol)
}

/// Serde helper for `Option<Element>` fields: `None` serializes as `？`.
pub mod opt_symbol {
    use serde::Serializer;

    use super::{Element, element_symbol};

    /// Serialize an optional element as its symbol.
    pub fn serialize<S: Serializer>(
        element: &Option<Element>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(element_symbol(*element))
    }
}

/// Heavenly stems in cycle order with their elements.
pub const STEM_ELEMENTS: [(&str, Element); 10] = [
    ("甲", Element::Wood),
    ("乙", Element::Wood),
    ("丙", Element::Fire),
    ("丁", Element::Fire),
    ("戊", Element::Earth),
    ("己", Element::Earth),
    ("庚", Element::Metal),
    ("辛", Element::Metal),
    ("壬", Element::Water),
    ("癸", Element::Water),
];

/// Earthly branches in cycle order with their elements.
pub const BRANCH_ELEMENTS: [(&str, Element); 12] = [
    ("子", Element::Water),
    ("丑", Element::Earth),
    ("寅", Element::Wood),
    ("卯", Element::Wood),
    ("辰", Element::Earth),
    ("巳", Element::Fire),
    ("午", Element::Fire),
    ("未", Element::Earth),
    ("申", Element::Metal),
    ("酉", Element::Metal),
    ("戌", Element::Earth),
    ("亥", Element::Water),
];

/// Generation cycle: `(a, b)` means `a` produces `b`.
const GENERATES: [(Element, Element); 5] = [
    (Element::Wood, Element::Fire),
    (Element::Fire, Element::Earth),
    (Element::Earth, Element::Metal),
    (Element::Metal, Element::Water),
    (Element::Water, Element::Wood),
];

/// Control cycle: `(a, b)` means `a` suppresses `b`.
const CONTROLS: [(Element, Element); 5] = [
    (Element::Wood, Element::Earth),
    (Element::Earth, Element::Water),
    (Element::Water, Element::Fire),
    (Element::Fire, Element::Metal),
    (Element::Metal, Element::Wood),
];

/// Element of a heavenly stem symbol, or `None` for an unmapped symbol.
pub fn element_of_stem(stem: &str) -> Option<Element> {
    STEM_ELEMENTS
        .iter()
        .find(|(s, _)| *s == stem)
        .map(|(_, e)| *e)
}

/// Element of an earthly branch symbol, or `None` for an unmapped symbol.
pub fn element_of_branch(branch: &str) -> Option<Element> {
    BRANCH_ELEMENTS
        .iter()
        .find(|(b, _)| *b == branch)
        .map(|(_, e)| *e)
}

/// The element that `element` generates (我生).
pub fn output_of(element: Element) -> Option<Element> {
    forward(&GENERATES, element)
}

/// The element that generates `element` (生我).
pub fn generator_of(element: Element) -> Option<Element> {
    inverse(&GENERATES, element)
}

/// The element that `element` suppresses (我克).
pub fn controlled_by(element: Element) -> Option<Element> {
    forward(&CONTROLS, element)
}

/// The element that suppresses `element` (克我).
pub fn controller_of(element: Element) -> Option<Element> {
    inverse(&CONTROLS, element)
}

fn forward(table: &[(Element, Element)], element: Element) -> Option<Element> {
    table.iter().find(|(k, _)| *k == element).map(|(_, v)| *v)
}

fn inverse(table: &[(Element, Element)], element: Element) -> Option<Element> {
    table.iter().find(|(_, v)| *v == element).map(|(k, _)| *k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_map_in_pairs() {
        assert_eq!(element_of_stem("甲"), Some(Element::Wood));
        assert_eq!(element_of_stem("丁"), Some(Element::Fire));
        assert_eq!(element_of_stem("己"), Some(Element::Earth));
        assert_eq!(element_of_stem("庚"), Some(Element::Metal));
        assert_eq!(element_of_stem("癸"), Some(Element::Water));
    }

    #[test]
    fn branches_map() {
        assert_eq!(element_of_branch("子"), Some(Element::Water));
        assert_eq!(element_of_branch("辰"), Some(Element::Earth));
        assert_eq!(element_of_branch("午"), Some(Element::Fire));
        assert_eq!(element_of_branch("酉"), Some(Element::Metal));
        assert_eq!(element_of_branch("卯"), Some(Element::Wood));
    }

    #[test]
    fn unknown_symbols_yield_none() {
        assert_eq!(element_of_stem("子"), None);
        assert_eq!(element_of_stem(""), None);
        assert_eq!(element_of_branch("甲"), None);
        assert_eq!(element_of_branch("x"), None);
    }

    #[test]
    fn branch_table_has_four_earth() {
        let earth = BRANCH_ELEMENTS
            .iter()
            .filter(|(_, e)| *e == Element::Earth)
            .count();
        assert_eq!(earth, 4);
    }

    #[test]
    fn generation_cycle() {
        assert_eq!(output_of(Element::Wood), Some(Element::Fire));
        assert_eq!(output_of(Element::Water), Some(Element::Wood));
        assert_eq!(generator_of(Element::Water), Some(Element::Metal));
        assert_eq!(generator_of(Element::Wood), Some(Element::Water));
    }

    #[test]
    fn control_cycle() {
        assert_eq!(controller_of(Element::Water), Some(Element::Earth));
        assert_eq!(controller_of(Element::Wood), Some(Element::Metal));
        assert_eq!(controller_of(Element::Fire), Some(Element::Water));
        assert_eq!(controlled_by(Element::Fire), Some(Element::Metal));
    }

    #[test]
    fn cycles_round_trip() {
        for e in Element::ALL {
            let out = output_of(e).unwrap();
            assert_eq!(generator_of(out), Some(e), "generation cycle at {e}");
            let victim = controlled_by(e).unwrap();
            assert_eq!(controller_of(victim), Some(e), "control cycle at {e}");
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, e) in Element::ALL.iter().enumerate() {
            assert_eq!(e.index(), i);
        }
    }

    #[test]
    fn parse_symbols_and_names() {
        assert_eq!(Element::parse("金"), Some(Element::Metal));
        assert_eq!(Element::parse("Water"), Some(Element::Water));
        assert_eq!(Element::parse("aether"), None);
    }

    #[test]
    fn unknown_renders_as_placeholder() {
        assert_eq!(element_symbol(None), "？");
        assert_eq!(element_symbol(Some(Element::Fire)), "火");
    }

    #[test]
    fn serde_uses_symbols() {
        let json = serde_json::to_string(&Element::Earth).unwrap();
        assert_eq!(json, "\"土\"");
        let back: Element = serde_json::from_str("\"水\"").unwrap();
        assert_eq!(back, Element::Water);
    }
}
