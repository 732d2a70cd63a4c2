//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the instant type used throughout the chart pipeline.
//! It converts to and from a UTC Julian Date directly; no leap-second
//! table is involved.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Construct with range checks on every field.
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::field("month", month));
        }
        if day == 0 || day > crate::civil::days_in_month(year, month) {
            return Err(TimeError::field("day", day));
        }
        if hour > 23 {
            return Err(TimeError::field("hour", hour));
        }
        if minute > 59 {
            return Err(TimeError::field("minute", minute));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::field("second", second));
        }
        Ok(Self::new(year, month, day, hour, minute, second))
    }

    /// Julian Date (UTC).
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert a UTC Julian Date back to calendar form.
    pub fn from_jd(jd: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::NonFiniteJd);
        }
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        // round to the millisecond so 12:00 does not print as 11:59:59.999
        let total_ms = (day_frac.fract() * 86_400_000.0).round() as u64;
        if total_ms >= 86_400_000 {
            // rounding carried into the next day
            return Self::from_jd(calendar_to_jd(year, month, day as f64 + 1.0));
        }
        let hour = (total_ms / 3_600_000) as u32;
        let minute = ((total_ms % 3_600_000) / 60_000) as u32;
        let second = (total_ms % 60_000) as f64 / 1000.0;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Calendar date only, `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` and `YYYY-MM-DDTHH:MM:SS[.fff]`,
    /// each with an optional trailing `Z`. A space may replace the `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TimeError::Parse(s.to_string());
        let trimmed = s.trim().trim_end_matches('Z');
        let (date, time) = match trimmed.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (trimmed, None),
        };

        let mut date_parts = date.splitn(3, '-');
        let year: i32 = date_parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let month: u32 = date_parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let day: u32 = date_parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let mut parts = t.splitn(3, ':');
                let h: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
                let m: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
                let sec: f64 = match parts.next() {
                    Some(p) => p.parse().map_err(|_| bad())?,
                    None => 0.0,
                };
                (h, m, sec)
            }
        };

        Self::try_new(year, month, day, hour, minute, second)
    }
}
