//! Pillars: a heavenly stem paired with an earthly branch.

use serde::{Deserialize, Serialize};

use crate::element::{Element, element_of_branch, element_of_stem, opt_symbol};

/// A raw stem/branch symbol pair as produced by a calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GanZhi {
    /// Heavenly stem symbol (天干), e.g. `甲`.
    pub stem: String,
    /// Earthly branch symbol (地支), e.g. `子`.
    pub branch: String,
}

impl GanZhi {
    /// Create a symbol pair.
    pub fn new(stem: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            branch: branch.into(),
        }
    }
}

impl std::fmt::Display for GanZhi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// The four raw symbol pairs for one moment: year, month, day, and hour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    /// Year pillar.
    pub year: GanZhi,
    /// Month pillar.
    pub month: GanZhi,
    /// Day pillar.
    pub day: GanZhi,
    /// Hour pillar.
    pub time: GanZhi,
}

impl FourPillars {
    /// Build from four `(stem, branch)` pairs in year, month, day, hour order.
    pub fn from_symbols(pairs: [(&str, &str); 4]) -> Self {
        let [y, m, d, t] = pairs;
        Self {
            year: GanZhi::new(y.0, y.1),
            month: GanZhi::new(m.0, m.1),
            day: GanZhi::new(d.0, d.1),
            time: GanZhi::new(t.0, t.1),
        }
    }

    /// Get the symbol pair for one pillar.
    pub fn get(&self, kind: PillarKind) -> &GanZhi {
        match kind {
            PillarKind::Year => &self.year,
            PillarKind::Month => &self.month,
            PillarKind::Day => &self.day,
            PillarKind::Time => &self.time,
        }
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.time)
    }
}

/// A pillar with both symbols resolved to elements.
///
/// Unmapped symbols keep their text but resolve to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    /// Stem symbol.
    pub gan: String,
    /// Branch symbol.
    pub zhi: String,
    /// Display form: stem followed by branch.
    pub text: String,
    /// Element of the stem.
    #[serde(with = "opt_symbol")]
    pub gan_element: Option<Element>,
    /// Element of the branch.
    #[serde(with = "opt_symbol")]
    pub zhi_element: Option<Element>,
}

impl Pillar {
    /// Resolve a symbol pair through the element tables.
    pub fn from_ganzhi(ganzhi: &GanZhi) -> Self {
        Self {
            gan: ganzhi.stem.clone(),
            zhi: ganzhi.branch.clone(),
            text: ganzhi.to_string(),
            gan_element: element_of_stem(&ganzhi.stem),
            zhi_element: element_of_branch(&ganzhi.branch),
        }
    }

    /// Both elements, stem first.
    pub fn elements(&self) -> [Option<Element>; 2] {
        [self.gan_element, self.zhi_element]
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Which of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarKind {
    /// 年柱
    Year,
    /// 月柱
    Month,
    /// 日柱
    Day,
    /// 時柱; labelled "time" in reports.
    Time,
}

impl PillarKind {
    /// The four pillars in chart order.
    pub const ALL: [PillarKind; 4] = [Self::Year, Self::Month, Self::Day, Self::Time];

    /// Chinese label used in tables.
    pub fn label(self) -> &'static str {
        match self {
            Self::Year => "年",
            Self::Month => "月",
            Self::Day => "日",
            Self::Time => "時",
        }
    }
}

impl std::fmt::Display for PillarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Year => write!(f, "year"),
            Self::Month => write!(f, "month"),
            Self::Day => write!(f, "day"),
            Self::Time => write!(f, "time"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillar_resolves_elements() {
        let p = Pillar::from_ganzhi(&GanZhi::new("丙", "午"));
        assert_eq!(p.text, "丙午");
        assert_eq!(p.elements(), [Some(Element::Fire), Some(Element::Fire)]);
    }

    #[test]
    fn pillar_with_bad_symbol_keeps_text() {
        let p = Pillar::from_ganzhi(&GanZhi::new("X", "亥"));
        assert_eq!(p.text, "X亥");
        assert_eq!(p.gan_element, None);
        assert_eq!(p.zhi_element, Some(Element::Water));
    }

    #[test]
    fn pillar_json_shape() {
        let p = Pillar::from_ganzhi(&GanZhi::new("庚", "??"));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["gan"], "庚");
        assert_eq!(json["ganElement"], "金");
        assert_eq!(json["zhiElement"], "？");
        assert_eq!(json["text"], "庚??");
    }

    #[test]
    fn four_pillars_display_line() {
        let fp = FourPillars::from_symbols([("甲", "子"), ("丙", "寅"), ("戊", "午"), ("壬", "子")]);
        insta::assert_snapshot!(fp.to_string(), @"甲子 丙寅 戊午 壬子");
        assert_eq!(fp.get(PillarKind::Day).stem, "戊");
    }

    #[test]
    fn pillar_kind_display() {
        assert_eq!(PillarKind::Time.to_string(), "time");
        assert_eq!(PillarKind::Day.label(), "日");
    }
}
