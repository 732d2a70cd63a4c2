//! Ashtakoot matching from two birth requests.

use kundali_core::Ephemeris;
use kundali_vedic_base::{CompatibilityReport, PersonMoon, ashtakoot_match};
use tracing::info;

use crate::error::ChartError;
use crate::positions::moon_longitude;
use crate::request::PersonRequest;

/// Sidereal Moon of one person, under their own request's ayanamsha.
pub fn person_moon(oracle: &dyn Ephemeris, person: &PersonRequest) -> Result<PersonMoon, ChartError> {
    let jd = person.birth.jd_utc()?;
    let lon = moon_longitude(oracle, jd, person.birth.ayanamsha)?;
    Ok(PersonMoon::new(person.name.clone(), lon))
}

pub fn match_people(
    oracle: &dyn Ephemeris,
    bride: &PersonRequest,
    groom: &PersonRequest,
) -> Result<CompatibilityReport, ChartError> {
    let report = ashtakoot_match(&person_moon(oracle, bride)?, &person_moon(oracle, groom)?)?;
    info!(
        total = report.total_score,
        verdict = report.verdict.label(),
        "compatibility computed"
    );
    Ok(report)
}
