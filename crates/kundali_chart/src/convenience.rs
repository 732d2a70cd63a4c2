//! Pipeline entry points bound to the global oracle.

use kundali_vedic_base::{AspectOrbs, AyanamshaSystem, CompatibilityReport, Rashi, Varga, YogaReport};

use crate::chart::{BirthChart, compute_chart};
use crate::dasha::{DashaReport, dasha_report};
use crate::divisional::{DivisionalCharts, divisional_charts};
use crate::error::ChartError;
use crate::global::oracle;
use crate::horoscope::{SignHoroscope, all_sign_horoscopes, sign_horoscope};
use crate::matching::match_people;
use crate::panchang::{PanchangReport, PanchangRequest, panchang_report};
use crate::request::{ChartRequest, PersonRequest};
use crate::transits::{TransitReport, transit_report};
use crate::yogas::chart_yogas;

pub fn chart(request: &ChartRequest) -> Result<BirthChart, ChartError> {
    compute_chart(oracle()?, request)
}

/// All seven vargas when `vargas` is empty.
pub fn divisional(request: &ChartRequest, vargas: &[Varga]) -> Result<DivisionalCharts, ChartError> {
    divisional_charts(&chart(request)?, vargas)
}

pub fn dasha(
    request: &ChartRequest,
    horizon_years: f64,
    query_jd: f64,
) -> Result<DashaReport, ChartError> {
    dasha_report(&chart(request)?, horizon_years, query_jd)
}

pub fn yogas(request: &ChartRequest) -> Result<YogaReport, ChartError> {
    chart_yogas(&chart(request)?)
}

pub fn compatibility(
    bride: &PersonRequest,
    groom: &PersonRequest,
) -> Result<CompatibilityReport, ChartError> {
    match_people(oracle()?, bride, groom)
}

pub fn transits(
    natal: &ChartRequest,
    transit_jd: f64,
    orbs: &AspectOrbs,
) -> Result<TransitReport, ChartError> {
    let oracle = oracle()?;
    transit_report(oracle, &compute_chart(oracle, natal)?, transit_jd, orbs)
}

pub fn panchang(request: &PanchangRequest) -> Result<PanchangReport, ChartError> {
    panchang_report(oracle()?, request)
}

/// One sign when `sign` is given, otherwise all twelve.
pub fn horoscope(
    sign: Option<Rashi>,
    year: i32,
    month: u32,
    day: u32,
    system: AyanamshaSystem,
) -> Result<Vec<SignHoroscope>, ChartError> {
    let oracle = oracle()?;
    match sign {
        Some(sign) => Ok(vec![sign_horoscope(oracle, sign, year, month, day, system)?]),
        None => all_sign_horoscopes(oracle, year, month, day, system),
    }
}
