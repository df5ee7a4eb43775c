//! Low-precision solar position, enough to place the twelve "jie" solar terms.
//!
//! Uses the simplified solar theory from Meeus, *Astronomical Algorithms*,
//! ch. 25 (about 0.01° in longitude, i.e. a quarter of an hour near a term).

/// Julian Day Number of a Gregorian civil date (the JD at noon of that day).
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    let a = (14 - m) / 12;
    let y = y + 4800 - a;
    let m = m + 12 * a - 3;
    d + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        - 32045
}

/// Julian Day of a civil instant given in UTC.
pub fn julian_day(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> f64 {
    let day_fraction = (f64::from(hour) + f64::from(minute) / 60.0 + f64::from(second) / 3600.0)
        / 24.0;
    julian_day_number(year, month, day) as f64 - 0.5 + day_fraction
}

/// Apparent geocentric ecliptic longitude of the Sun in degrees, `[0, 360)`.
pub fn apparent_longitude(jd: f64) -> f64 {
    let t = (jd - 2_451_545.0) / 36_525.0;

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1_934.136 * t).to_radians();

    let apparent = l0 + c - 0.005_69 - 0.004_78 * omega.sin();
    apparent.rem_euclid(360.0)
}
