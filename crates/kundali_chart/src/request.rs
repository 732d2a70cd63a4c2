//! Birth-time and location input.

use kundali_time::LocalDateTime;
use kundali_vedic_base::AyanamshaSystem;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ChartError;

/// Wall-clock birth time at a place, plus the sidereal system to use.
///
/// Accepts the short field names `date`, `hours`, `minutes` and `seconds`
/// as aliases when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub year: i32,
    pub month: u32,
    #[serde(alias = "date")]
    pub day: u32,
    #[serde(alias = "hours")]
    pub hour: u32,
    #[serde(alias = "minutes")]
    pub minute: u32,
    #[serde(default, alias = "seconds")]
    pub second: u32,
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
    /// Hours east of UTC.
    pub timezone: f64,
    #[serde(default)]
    pub ayanamsha: AyanamshaSystem,
}

impl ChartRequest {
    /// A request with `second = 0` and the default ayanamsha.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        latitude: f64,
        longitude: f64,
        timezone: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second: 0,
            latitude,
            longitude,
            timezone,
            ayanamsha: AyanamshaSystem::default(),
        }
    }

    pub fn with_ayanamsha(mut self, system: AyanamshaSystem) -> Self {
        self.ayanamsha = system;
        self
    }

    pub fn local(&self) -> LocalDateTime {
        LocalDateTime {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            tz_hours: self.timezone,
        }
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        let result = self.check();
        if let Err(e) = &result {
            warn!(error = %e, "chart request rejected");
        }
        result
    }

    fn check(&self) -> Result<(), ChartError> {
        self.local().validate()?;
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::InvalidInput(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::InvalidInput(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }

    /// UTC Julian Date of the birth instant (local minus timezone).
    pub fn jd_utc(&self) -> Result<f64, ChartError> {
        self.validate()?;
        Ok(self.local().to_utc_jd()?)
    }
}

/// A named person for compatibility matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRequest {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub birth: ChartRequest,
}

impl PersonRequest {
    pub fn new(name: impl Into<String>, birth: ChartRequest) -> Self {
        Self {
            name: name.into(),
            birth,
        }
    }
}
