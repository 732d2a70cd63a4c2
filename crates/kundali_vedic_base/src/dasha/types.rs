//! Period records shared by the dasha engine and its queries.

use kundali_time::DAYS_PER_YEAR;
use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
        }
    }

    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => None,
        }
    }
}

/// One period. Start is inclusive, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    pub start_jd: f64,
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-based position among its siblings.
    pub order: u16,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// `start <= jd < end`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// A mahadasha with its nine antardashas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mahadasha {
    pub period: DashaPeriod,
    pub antardashas: Vec<DashaPeriod>,
}

/// Full two-level timeline from birth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaTimeline {
    pub birth_jd: f64,
    pub birth_nakshatra: Nakshatra,
    pub nakshatra_lord: Graha,
    pub moon_longitude: f64,
    /// Years of the first mahadasha still to run at birth.
    pub balance_years: f64,
    pub horizon_years: f64,
    pub mahadashas: Vec<Mahadasha>,
}

impl DashaTimeline {
    pub fn start_jd(&self) -> f64 {
        self.birth_jd
    }

    pub fn end_jd(&self) -> f64 {
        self.mahadashas.last().map_or(self.birth_jd, |m| m.period.end_jd)
    }

    /// Total span covered, in years.
    pub fn covered_years(&self) -> f64 {
        (self.end_jd() - self.start_jd()) / DAYS_PER_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start: f64, end: f64) -> DashaPeriod {
        DashaPeriod {
            lord: Graha::Ketu,
            start_jd: start,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: 1,
        }
    }

    #[test]
    fn half_open_interval() {
        let p = period(100.0, 200.0);
        assert!(p.contains(100.0));
        assert!(p.contains(199.999));
        assert!(!p.contains(200.0));
        assert!(!p.contains(99.0));
    }

    #[test]
    fn durations() {
        let p = period(0.0, 365.25 * 7.0);
        assert!((p.duration_years() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn level_hierarchy() {
        assert_eq!(DashaLevel::Mahadasha.child_level(), Some(DashaLevel::Antardasha));
        assert_eq!(DashaLevel::Antardasha.child_level(), None);
    }
}
