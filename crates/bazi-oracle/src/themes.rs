//! Thematic phrase bank per element.
//!
//! Each element carries a life-theme label, "yes" question templates (asked
//! when the element is expected to have shown up in the last five years),
//! "no" templates (asked when it is expected to have stayed quiet), and
//! practical tips ordered by priority.

use bazi_core::Element;

/// Phrase set for one element.
#[derive(Debug)]
pub struct Theme {
    /// Short life-theme label, e.g. `成長/學習/人脈`.
    pub label: &'static str,
    /// Questions whose expected answer is "yes".
    pub yes_templates: &'static [&'static str],
    /// Questions whose expected answer is "no".
    pub no_templates: &'static [&'static str],
    /// Tips, most important first.
    pub tips: &'static [&'static str],
}

const WOOD: Theme = Theme {
    label: "成長/學習/人脈",
    yes_templates: &[
        "過去 5 年內，你是否有明顯的學習/考證/進修或技能轉向？",
        "過去 5 年內，你是否出現過人際圈擴張、結識關鍵貴人的機會？",
    ],
    no_templates: &["過去 5 年內，你是否大多維持原本步調，較少主動學新東西或換跑道？"],
    tips: &[
        "主動學習、建立作品集/證照會放大運勢紅利。",
        "與其硬拚，不如先把基礎功練穩、拉長線。",
    ],
};

const FIRE: Theme = Theme {
    label: "曝光/名聲/情緒動能",
    yes_templates: &[
        "過去 5 年內，你是否有一段時間特別忙、事情密集、需要被看見或上台出面？",
        "過去 5 年內，你是否更在意自我表達、社群曝光或職場能見度？",
    ],
    no_templates: &["過去 5 年內，你是否偏低調，較少主動爭取曝光或舞台？"],
    tips: &[
        "把「可被看見」做成可複用的系統：履歷、作品、案例、社群內容。",
        "情緒與睡眠是火的開關，先穩住作息再談衝刺。",
    ],
};

const EARTH: Theme = Theme {
    label: "穩定/資產/責任壓力",
    yes_templates: &[
        "過去 5 年內，你是否有搬家/裝修/買賣房車或更在意資產配置？",
        "過去 5 年內，你是否承擔更多家庭/組織責任，壓力感上升？",
    ],
    no_templates: &["過去 5 年內，你是否較少涉及房產/長期承諾類的大決策？"],
    tips: &[
        "用預算與現金流管理，把安全感落地成數字。",
        "別把所有責任一肩扛，建立可交付/可委派的流程。",
    ],
};

const METAL: Theme = Theme {
    label: "規則/財務/決斷與斷捨離",
    yes_templates: &[
        "過去 5 年內，你是否有明顯的「斷捨離」：結束一段關係/合作/工作或砍掉一個方向？",
        "過去 5 年內，你是否更重視制度、合約、績效或財務紀律？",
    ],
    no_templates: &["過去 5 年內，你是否多半隨遇而安，較少做果斷切割或規則化管理？"],
    tips: &[
        "金旺靠紀律出成果：合約、流程、KPI、記帳都會很加分。",
        "該收口就收口：少做多成，比多線並進更順。",
    ],
};

const WATER: Theme = Theme {
    label: "變動/流動/旅行與思考",
    yes_templates: &[
        "過去 5 年內，你是否有頻繁出差、跨城市移動、或生活節奏明顯變動？",
        "過去 5 年內，你是否經歷過一段「想很多」或方向不確定、需要重新定位的時期？",
    ],
    no_templates: &["過去 5 年內，你是否大多在同一環境，變動不算大？"],
    tips: &[
        "把變動變成優勢：建立可搬移的能力（語言、工具、遠端/跨域技能）。",
        "用寫作/記錄整理思緒，水才不會變成焦慮。",
    ],
};

/// The phrase set for an element.
pub fn theme(element: Element) -> &'static Theme {
    match element {
        Element::Wood => &WOOD,
        Element::Fire => &FIRE,
        Element::Earth => &EARTH,
        Element::Metal => &METAL,
        Element::Water => &WATER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_element_has_full_bank() {
        for e in Element::ALL {
            let t = theme(e);
            assert!(!t.label.is_empty(), "{e} label");
            assert!(!t.yes_templates.is_empty(), "{e} yes");
            assert!(!t.no_templates.is_empty(), "{e} no");
            assert!(!t.tips.is_empty(), "{e} tips");
        }
    }

    #[test]
    fn templates_are_distinct_across_elements() {
        let mut all = std::collections::HashSet::new();
        for e in Element::ALL {
            for q in theme(e).yes_templates.iter().chain(theme(e).no_templates) {
                assert!(all.insert(*q), "duplicate template: {q}");
            }
        }
    }

    #[test]
    fn labels() {
        assert_eq!(theme(Element::Metal).label, "規則/財務/決斷與斷捨離");
        assert_eq!(theme(Element::Water).label, "變動/流動/旅行與思考");
    }
}
