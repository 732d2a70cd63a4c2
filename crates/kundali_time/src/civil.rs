//! Local civil time with a fixed timezone offset.
//!
//! Birth data arrives as wall-clock time plus an hour offset from UTC
//! (e.g. `5.5` for IST). UTC = local − offset.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::calendar_to_jd;
use crate::utc_time::UtcTime;

/// Earliest supported calendar year.
pub const MIN_YEAR: i32 = 1800;
/// Latest supported calendar year.
pub const MAX_YEAR: i32 = 2200;

/// Days in a Gregorian month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        _ => 0,
    }
}

/// Wall-clock date/time at a location with a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Hours east of UTC.
    pub tz_hours: f64,
}

impl LocalDateTime {
    /// Check every field, including the supported year window.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(TimeError::field("year", self.year));
        }
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::field("month", self.month));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::field("day", self.day));
        }
        if self.hour > 23 {
            return Err(TimeError::field("hour", self.hour));
        }
        if self.minute > 59 {
            return Err(TimeError::field("minute", self.minute));
        }
        if self.second > 59 {
            return Err(TimeError::field("second", self.second));
        }
        if !self.tz_hours.is_finite() || !(-12.0..=14.0).contains(&self.tz_hours) {
            return Err(TimeError::InvalidTimezone(self.tz_hours));
        }
        Ok(())
    }

    /// UTC Julian Date for this wall-clock instant.
    pub fn to_utc_jd(&self) -> Result<f64, TimeError> {
        self.validate()?;
        let local_day = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second as f64 / 86_400.0;
        Ok(calendar_to_jd(self.year, self.month, local_day) - self.tz_hours / 24.0)
    }

    /// UTC calendar instant. May fall on the previous or next civil day.
    pub fn to_utc(&self) -> Result<UtcTime, TimeError> {
        UtcTime::from_jd(self.to_utc_jd()?)
    }
}
