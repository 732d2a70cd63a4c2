//! Ayanamsha: the offset between the tropical and sidereal zodiacs.
//!
//! As the equinox precesses westward the ayanamsha grows. Each system is a
//! single J2000.0 reference value; the value at any other epoch adds the
//! linear term of the IAU 2006 general precession (≈50.288″ per Julian
//! year). The quadratic p_A terms are left out.

use std::fmt;
use std::str::FromStr;

use kundali_frames::PRECESSION_RATE_ARCSEC_PER_YEAR;
use kundali_time::{DAYS_PER_YEAR, J2000_JD};
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::normalize_360;

/// Supported sidereal reference systems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AyanamshaSystem {
    /// Chitrapaksha: Spica at 0° Libra sidereal. Indian government standard.
    #[default]
    Lahiri,
    /// Krishnamurti Paddhati, a few arcseconds below Lahiri.
    #[serde(alias = "kp")]
    Krishnamurti,
    /// B.V. Raman, zero year near 397 CE.
    Raman,
    /// Tamil almanac convention on the Chitrapaksha anchor.
    Thirukanitham,
}

pub const ALL_AYANAMSHA_SYSTEMS: [AyanamshaSystem; 4] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::Krishnamurti,
    AyanamshaSystem::Raman,
    AyanamshaSystem::Thirukanitham,
];

impl AyanamshaSystem {
    /// Ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.853,
            Self::Krishnamurti => 23.850,
            Self::Raman => 22.370,
            Self::Thirukanitham => 23.853,
        }
    }

    /// Request name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
            Self::Krishnamurti => "krishnamurti",
            Self::Raman => "raman",
            Self::Thirukanitham => "thirukanitham",
        }
    }
}

impl fmt::Display for AyanamshaSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AyanamshaSystem {
    type Err = VedicError;

    /// Case-insensitive; `kp` is accepted for Krishnamurti.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "kp" {
            return Ok(Self::Krishnamurti);
        }
        ALL_AYANAMSHA_SYSTEMS
            .into_iter()
            .find(|sys| sys.name() == wanted)
            .ok_or(VedicError::UnknownAyanamsha(wanted))
    }
}

/// Ayanamsha in degrees at a Julian date.
pub fn ayanamsha_deg(system: AyanamshaSystem, jd: f64) -> Result<f64, VedicError> {
    if !jd.is_finite() {
        return Err(VedicError::InvalidInput(format!("non-finite Julian date {jd}")));
    }
    let years = (jd - J2000_JD) / DAYS_PER_YEAR;
    Ok(system.reference_j2000_deg() + years * PRECESSION_RATE_ARCSEC_PER_YEAR / 3600.0)
}

/// Tropical → sidereal longitude at a Julian date, normalized to [0, 360).
pub fn tropical_to_sidereal(
    tropical_lon_deg: f64,
    jd: f64,
    system: AyanamshaSystem,
) -> Result<f64, VedicError> {
    if !tropical_lon_deg.is_finite() {
        return Err(VedicError::InvalidLongitude(tropical_lon_deg));
    }
    let aya = ayanamsha_deg(system, jd)?;
    Ok(normalize_360(tropical_lon_deg - aya))
}
