//! Calendar collaborator: civil date/time to sexagenary (干支) pillars.
//!
//! The chart and fortune code only see the [`GanZhiCalendar`] trait and the
//! symbols it returns. [`SexagenaryCalendar`] is the built-in implementation.
//! Year and month boundaries follow the solar terms, evaluated in China
//! Standard Time.

pub mod solar;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::element::{BRANCH_ELEMENTS, STEM_ELEMENTS};
use crate::pillar::{FourPillars, GanZhi};

/// Month and day of the anchor used to read a year's governing stem.
///
/// Mid-February always falls after the Start of Spring, so the anchor never
/// straddles the civil/solar new-year boundary.
pub const FORTUNE_ANCHOR: (u32, u32) = (2, 15);

/// Offset of China Standard Time from UTC, in hours.
pub const CST_OFFSET_HOURS: i64 = 8;

/// Apparent solar longitude of the Start of Spring (立春), in degrees.
const START_OF_SPRING: f64 = 315.0;

/// Source of sexagenary pillars for civil dates.
pub trait GanZhiCalendar {
    /// The year, month, day, and hour pillars for a civil date-time.
    fn four_pillars(&self, at: NaiveDateTime) -> FourPillars;

    /// The year pillar's stem symbol for a civil date.
    fn year_stem(&self, date: NaiveDate) -> String;
}

/// Built-in calendar based on cycle arithmetic and solar terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct SexagenaryCalendar;

impl SexagenaryCalendar {
    /// Create the calendar.
    pub fn new() -> Self {
        Self
    }

    /// Solar month index for an instant: 0 is the 寅 month, 11 the 丑 month.
    fn solar_month_index(at: NaiveDateTime) -> u32 {
        let utc = at - chrono::Duration::hours(CST_OFFSET_HOURS);
        let jd = solar::julian_day(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            utc.second(),
        );
        let longitude = solar::apparent_longitude(jd);
        let since_spring = (longitude - START_OF_SPRING).rem_euclid(360.0);
        // floor of a value in [0, 360) / 30 is always 0..=11
        ((since_spring / 30.0).floor() as u32).min(11)
    }

    /// Sexagenary year number in effect at an instant.
    fn solar_year(at: NaiveDateTime, month_index: u32) -> i32 {
        // January and early February before 立春 still belong to the old year.
        if at.month() <= 2 && month_index >= 10 {
            at.year() - 1
        } else {
            at.year()
        }
    }

    fn year_index(solar_year: i32) -> usize {
        (i64::from(solar_year) - 4).rem_euclid(60) as usize
    }

    fn day_index(date: NaiveDate) -> usize {
        (solar::julian_day_number(date.year(), date.month(), date.day()) + 49).rem_euclid(60)
            as usize
    }
}

impl GanZhiCalendar for SexagenaryCalendar {
    fn four_pillars(&self, at: NaiveDateTime) -> FourPillars {
        let month_index = Self::solar_month_index(at);
        let year = Self::year_index(Self::solar_year(at, month_index));
        let year_stem = year % 10;

        // 五虎遁: the 寅 month stem follows from the year stem
        let month_stem = ((year_stem % 5) * 2 + 2 + month_index as usize) % 10;
        let month_branch = (2 + month_index as usize) % 12;

        let date = at.date();
        let day = Self::day_index(date);

        // 五鼠遁: the 子 hour stem follows from the day stem; the late 子 hour
        // (23:00) already takes the following day's stem.
        let hour_branch = ((at.hour() as usize + 1) / 2) % 12;
        let hour_day_stem = if at.hour() >= 23 {
            (day + 1) % 10
        } else {
            day % 10
        };
        let hour_stem = ((hour_day_stem % 5) * 2 + hour_branch) % 10;

        FourPillars {
            year: ganzhi(year % 10, year % 12),
            month: ganzhi(month_stem, month_branch),
            day: ganzhi(day % 10, day % 12),
            time: ganzhi(hour_stem, hour_branch),
        }
    }

    fn year_stem(&self, date: NaiveDate) -> String {
        let at = date.and_time(chrono::NaiveTime::MIN) + chrono::Duration::hours(12);
        self.four_pillars(at).year.stem
    }
}

fn ganzhi(stem: usize, branch: usize) -> GanZhi {
    GanZhi::new(STEM_ELEMENTS[stem % 10].0, BRANCH_ELEMENTS[branch % 12].0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn pillars(y: i32, m: u32, d: u32, h: u32, min: u32) -> String {
        SexagenaryCalendar::new().four_pillars(at(y, m, d, h, min)).to_string()
    }

    #[test]
    fn millennium_day_is_wu_wu() {
        // 2000-01-01 12:00: 己卯年 丙子月 戊午日 戊午時
        assert_eq!(pillars(2000, 1, 1, 12, 0), "己卯 丙子 戊午 戊午");
    }

    #[test]
    fn year_changes_at_start_of_spring() {
        // 立春 2024: 02-04 16:27 Beijing
        let before = SexagenaryCalendar::new().four_pillars(at(2024, 2, 4, 15, 0));
        let after = SexagenaryCalendar::new().four_pillars(at(2024, 2, 4, 18, 0));
        assert_eq!(before.year.to_string(), "癸卯");
        assert_eq!(before.month.to_string(), "乙丑");
        assert_eq!(after.year.to_string(), "甲辰");
        assert_eq!(after.month.to_string(), "丙寅");
    }

    #[test]
    fn january_belongs_to_previous_year() {
        let fp = SexagenaryCalendar::new().four_pillars(at(1984, 1, 20, 8, 0));
        assert_eq!(fp.year.to_string(), "癸亥");
        let fp = SexagenaryCalendar::new().four_pillars(at(1984, 3, 1, 8, 0));
        assert_eq!(fp.year.to_string(), "甲子");
    }

    #[test]
    fn december_keeps_civil_year() {
        let fp = SexagenaryCalendar::new().four_pillars(at(2023, 12, 31, 10, 0));
        assert_eq!(fp.year.to_string(), "癸卯");
        assert_eq!(fp.month.branch, "子");
    }

    #[test]
    fn hour_branches() {
        let cal = SexagenaryCalendar::new();
        let branch = |h| cal.four_pillars(at(2000, 1, 1, h, 30)).time.branch;
        assert_eq!(branch(0), "子");
        assert_eq!(branch(1), "丑");
        assert_eq!(branch(2), "丑");
        assert_eq!(branch(11), "午");
        assert_eq!(branch(12), "午");
        assert_eq!(branch(22), "亥");
        assert_eq!(branch(23), "子");
    }

    #[test]
    fn late_zi_hour_keeps_day_but_advances_hour_stem() {
        // 2000-01-01 is 戊午; 2000-01-02 is 己未.
        let fp = SexagenaryCalendar::new().four_pillars(at(2000, 1, 1, 23, 30));
        assert_eq!(fp.day.to_string(), "戊午");
        // 己 day: 子 hour is 甲子
        assert_eq!(fp.time.to_string(), "甲子");
        let early = SexagenaryCalendar::new().four_pillars(at(2000, 1, 1, 0, 30));
        // 戊 day: 子 hour is 壬子
        assert_eq!(early.time.to_string(), "壬子");
    }

    #[test]
    fn year_stem_at_anchor() {
        let cal = SexagenaryCalendar::new();
        let stem = |y| {
            cal.year_stem(NaiveDate::from_ymd_opt(y, FORTUNE_ANCHOR.0, FORTUNE_ANCHOR.1).unwrap())
        };
        assert_eq!(stem(2024), "甲");
        assert_eq!(stem(2025), "乙");
        assert_eq!(stem(2026), "丙");
        assert_eq!(stem(1984), "甲");
        assert_eq!(stem(2033), "癸");
    }

    #[test]
    fn month_stems_follow_year_stem() {
        // 甲辰 2024: 寅 month is 丙寅, 巳 month (mid-May) is 己巳
        let fp = SexagenaryCalendar::new().four_pillars(at(2024, 5, 20, 12, 0));
        assert_eq!(fp.month.to_string(), "己巳");
    }
}
