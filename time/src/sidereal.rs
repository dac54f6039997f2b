//! Greenwich Mean Sidereal Time.
//!
//! Uses the IAU 1982 GMST polynomial in seconds of time (Aoki et al. 1982),
//! with UT1 taken equal to UTC.

use serde::{Deserialize, Serialize};

use crate::{JulianDate, SEC_PER_DAY, SEC_PER_HOUR};

/// Earth's sidereal rotation rate in rad/s.
pub const EARTH_ROTATION_RATE: f64 = 7.292115e-5;

/// GMST at J2000.0, in seconds.
pub const GMST_J2000_SECONDS: f64 = 67310.54841;
const GMST_RATE: f64 = 876600.0 * SEC_PER_HOUR + 8640184.812866;
const GMST_T2: f64 = 0.093104;
const GMST_T3: f64 = -6.2e-6;

/// GMST in seconds for `t` Julian centuries since J2000.0, not range reduced.
pub fn gmst_seconds(t: f64) -> f64 {
    GMST_J2000_SECONDS + GMST_RATE * t + GMST_T2 * t.powi(2) + GMST_T3 * t.powi(3)
}

/// Floored modulo into one day, [0, 86400) for any finite input.
pub fn reduce_to_day(seconds: f64) -> f64 {
    let reduced = seconds.rem_euclid(SEC_PER_DAY);
    // rem_euclid rounds tiny negative inputs up to exactly one day
    if reduced >= SEC_PER_DAY {
        0.0
    } else {
        reduced
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Gmst {
    /// Polynomial value before reduction.
    pub seconds: f64,
    /// `seconds` reduced into [0, 86400).
    pub seconds_of_day: f64,
    pub radians: f64,
}

impl Gmst {
    /// The angle is the reduced seconds of day scaled by the sidereal rotation
    /// rate rather than by 2π/86400. The two differ by about 0.27%, and
    /// downstream results depend on this exact scaling.
    pub fn from_centuries(t: f64) -> Self {
        let seconds = gmst_seconds(t);
        let seconds_of_day = reduce_to_day(seconds);
        Self {
            seconds,
            seconds_of_day,
            radians: seconds_of_day * EARTH_ROTATION_RATE,
        }
    }
}

impl From<JulianDate> for Gmst {
    fn from(jd: JulianDate) -> Self {
        Gmst::from_centuries(jd.get_jd_centuries())
    }
}
