use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod sidereal;

pub const JD_J2000: f64 = 2451545.0;
pub const SEC_PER_DAY: f64 = 86400.0;
pub const SEC_PER_HOUR: f64 = 3600.0;
pub const SEC_PER_MINUTE: f64 = 60.0;
pub const DAYS_PER_CENTURY: f64 = 36525.0;

pub mod prelude {
    pub use crate::sidereal::Gmst;
    pub use crate::{CalendarTimestamp, DayNumberRule, JulianDate, TimeErrors};
}

#[derive(Debug, Error)]
pub enum TimeErrors {
    #[error("calendar fields {0:?} do not name a valid date-time")]
    InvalidCalendarFields(CalendarTimestamp),
}

/// Which century correction the Julian Day Number formula applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum DayNumberRule {
    /// Fliegel & Van Flandern, valid for the proleptic Gregorian calendar.
    #[default]
    Standard,
    /// Evaluates the century term from `year + 9700 - offset`. Lands 36 days
    /// early in the current era; kept to reproduce older results.
    Legacy,
}

/// A UTC calendar epoch. Every field is real valued and none are range
/// checked, so a month of 13 or a day of 45 simply rolls forward.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CalendarTimestamp {
    pub year: f64,
    pub month: f64,
    pub day: f64,
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl CalendarTimestamp {
    pub fn new(year: f64, month: f64, day: f64, hour: f64, minute: f64, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Seconds elapsed since midnight according to the clock fields.
    pub fn seconds_of_day(&self) -> f64 {
        self.second + self.minute * SEC_PER_MINUTE + self.hour * SEC_PER_HOUR
    }

    /// Fraction of a day elapsed since midnight. Not clamped to [0, 1).
    pub fn fraction_of_day(&self) -> f64 {
        self.seconds_of_day() / SEC_PER_DAY
    }

    /// Converts to a chrono datetime, for display. Fails when any field is
    /// fractional where chrono needs an integer, or out of chrono's range.
    pub fn to_datetime(&self) -> Result<NaiveDateTime, TimeErrors> {
        let err = || TimeErrors::InvalidCalendarFields(*self);
        let whole = |v: f64| (v.fract() == 0.0 && v >= 0.0 && v <= u32::MAX as f64).then_some(v as u32);

        if self.year.fract() != 0.0 || self.year.abs() > i32::MAX as f64 {
            return Err(err());
        }
        let month = whole(self.month).ok_or_else(err)?;
        let day = whole(self.day).ok_or_else(err)?;
        let hour = whole(self.hour).ok_or_else(err)?;
        let minute = whole(self.minute).ok_or_else(err)?;
        if !(self.second >= 0.0 && self.second < 60.0) {
            return Err(err());
        }
        let sec = self.second.floor();
        let nano = ((self.second - sec) * 1e9).round().min(999_999_999.0);

        NaiveDate::from_ymd_opt(self.year as i32, month, day)
            .ok_or_else(err)?
            .and_hms_nano_opt(hour, minute, sec as u32, nano as u32)
            .ok_or_else(err)
    }
}

impl From<NaiveDateTime> for CalendarTimestamp {
    fn from(dt: NaiveDateTime) -> Self {
        let second = dt.second() as f64 + dt.nanosecond() as f64 * 1e-9;
        Self::new(
            dt.year() as f64,
            dt.month() as f64,
            dt.day() as f64,
            dt.hour() as f64,
            dt.minute() as f64,
            second,
        )
    }
}

/// Floor division on reals, matching integer floor division for integral
/// operands. Divisors used here are all positive.
fn floor_div(numerator: f64, denominator: f64) -> f64 {
    numerator.div_euclid(denominator)
}

/// Julian Day Number of the civil date, i.e. the Julian date at noon.
///
/// reference: Fliegel, H. F. & Van Flandern, T. C. (1968), Communications of
/// the ACM 11(10), 657.
pub fn julian_day_number(year: f64, month: f64, day: f64, rule: DayNumberRule) -> f64 {
    let offset = floor_div(14.0 - month, 12.0);
    let y = year + 4800.0 - offset;
    let m = month - 2.0 + 12.0 * offset;

    let century = match rule {
        DayNumberRule::Standard => floor_div(y + 100.0, 100.0),
        DayNumberRule::Legacy => floor_div(y + 4900.0, 100.0),
    };

    day + floor_div(1461.0 * y, 4.0) + floor_div(367.0 * m, 12.0)
        - floor_div(3.0 * century, 4.0)
        - 32075.0
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct JulianDate(f64);

impl JulianDate {
    pub fn new(jd: f64) -> Self {
        Self(jd)
    }

    pub fn from_timestamp(epoch: &CalendarTimestamp, rule: DayNumberRule) -> Self {
        let jdn = julian_day_number(epoch.year, epoch.month, epoch.day, rule);
        // the day number refers to noon, shift it back to midnight
        Self(jdn + epoch.fraction_of_day() - 0.5)
    }

    pub fn get_jd(&self) -> f64 {
        self.0
    }

    /// Julian centuries since J2000.0.
    pub fn get_jd_centuries(&self) -> f64 {
        (self.0 - JD_J2000) / DAYS_PER_CENTURY
    }
}
