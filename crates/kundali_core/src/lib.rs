//! Ephemeris oracle contract.
//!
//! The chart pipeline needs exactly one thing from astronomy: the apparent
//! geocentric ecliptic position and longitude rate of a body at a UTC
//! instant. [`Ephemeris`] is that seam. [`AnalyticEphemeris`] is the
//! built-in implementation; kernel-backed or remote oracles plug in behind
//! the same trait.

pub mod analytic;
pub mod error;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use analytic::AnalyticEphemeris;
pub use error::EphemerisError;

/// Bodies the oracle contract knows about.
///
/// `Earth` is the geocentric observer. It is part of the vocabulary so that
/// callers can name it, but no geocentric oracle serves a position for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Earth,
}

impl Body {
    /// All bodies with a geocentric position, in weekday-lord order.
    pub const OBSERVED: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mars,
        Body::Mercury,
        Body::Jupiter,
        Body::Venus,
        Body::Saturn,
    ];

    /// NAIF-style body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Mercury => 199,
            Self::Venus => 299,
            Self::Earth => 399,
            Self::Moon => 301,
            Self::Mars => 499,
            Self::Jupiter => 599,
            Self::Saturn => 699,
        }
    }

    /// Lowercase name as used on the oracle wire.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Earth => "earth",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sun" => Ok(Self::Sun),
            "moon" => Ok(Self::Moon),
            "mercury" => Ok(Self::Mercury),
            "venus" => Ok(Self::Venus),
            "mars" => Ok(Self::Mars),
            "jupiter" => Ok(Self::Jupiter),
            "saturn" => Ok(Self::Saturn),
            "earth" => Ok(Self::Earth),
            other => Err(EphemerisError::UnknownBody(other.to_string())),
        }
    }
}

/// One oracle answer: tropical ecliptic coordinates of date, geocentric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Tropical ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude, degrees.
    pub latitude_deg: f64,
    /// Geocentric distance in AU.
    pub distance_au: f64,
    /// Longitude rate in degrees per day; negative when retrograde.
    pub speed_deg_per_day: f64,
}

impl Observation {
    /// True when every field is finite.
    pub fn is_finite(&self) -> bool {
        self.longitude_deg.is_finite()
            && self.latitude_deg.is_finite()
            && self.distance_au.is_finite()
            && self.speed_deg_per_day.is_finite()
    }
}

/// Source of geocentric body positions.
///
/// Implementations are read-only after construction and shared across
/// threads.
pub trait Ephemeris: Send + Sync {
    /// Observe `body` at the UTC Julian Date `jd_utc`.
    fn observe(&self, body: Body, jd_utc: f64) -> Result<Observation, EphemerisError>;

    /// Short identifier for logs.
    fn name(&self) -> &str {
        "ephemeris"
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn observe(&self, body: Body, jd_utc: f64) -> Result<Observation, EphemerisError> {
        (**self).observe(body, jd_utc)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for std::sync::Arc<E> {
    fn observe(&self, body: Body, jd_utc: f64) -> Result<Observation, EphemerisError> {
        (**self).observe(body, jd_utc)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Configuration for the built-in analytic oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    /// First calendar year served.
    pub min_year: i32,
    /// Last calendar year served (inclusive).
    pub max_year: i32,
    /// Half-width in days of the central difference used for speeds.
    pub speed_step_days: f64,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            min_year: 1800,
            max_year: 2200,
            speed_step_days: 0.5,
        }
    }
}

impl EphemerisConfig {
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if self.min_year > self.max_year {
            return Err(EphemerisError::InvalidConfig(
                "min_year must not exceed max_year",
            ));
        }
        if !self.speed_step_days.is_finite() || self.speed_step_days <= 0.0 {
            return Err(EphemerisError::InvalidConfig(
                "speed_step_days must be positive",
            ));
        }
        if self.speed_step_days > 5.0 {
            return Err(EphemerisError::InvalidConfig(
                "speed_step_days must be at most 5 days",
            ));
        }
        Ok(())
    }
}
