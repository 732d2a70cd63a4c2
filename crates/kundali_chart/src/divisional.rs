//! Divisional charts (vargas) derived from a birth chart.

use std::collections::BTreeMap;

use kundali_vedic_base::{
    ALL_VARGAS, AmshaPosition, Graha, PRIMARY_VARGAS, Rashi, Varga, amsha_position,
};
use serde::Serialize;
use tracing::debug;

use crate::chart::BirthChart;
use crate::error::ChartError;

/// Key used for the ascendant in every chart.
pub const ASCENDANT_KEY: &str = "Ascendant";

/// One body (or the ascendant) placed in a varga.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DivisionalEntry {
    pub chart: Varga,
    pub rashi_number: u8,
    pub sign: Rashi,
    pub lord: Graha,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<u8>,
    /// D2 only: Sun for Leo hora, Moon for Cancer hora.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hora: Option<Graha>,
}

impl From<AmshaPosition> for DivisionalEntry {
    fn from(p: AmshaPosition) -> Self {
        let hora = match (p.varga, p.rashi) {
            (Varga::D2, Rashi::Leo) => Some(Graha::Sun),
            (Varga::D2, _) => Some(Graha::Moon),
            _ => None,
        };
        Self {
            chart: p.varga,
            rashi_number: p.rashi.number(),
            sign: p.rashi,
            lord: p.lord(),
            degree: p.degree_in_sign,
            division: p.division,
            hora,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionalChart {
    pub name: &'static str,
    pub purpose: &'static str,
    pub ascendant_sign: Rashi,
    pub positions: BTreeMap<String, DivisionalEntry>,
}

impl DivisionalChart {
    pub fn position(&self, graha: Graha) -> Option<&DivisionalEntry> {
        self.positions.get(graha.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionalCharts {
    pub charts: BTreeMap<Varga, DivisionalChart>,
    pub available_charts: Vec<Varga>,
    pub primary_charts: Vec<Varga>,
}

/// Place the ascendant and every graha of `chart` in one varga.
pub fn divisional_chart(chart: &BirthChart, varga: Varga) -> Result<DivisionalChart, ChartError> {
    let asc = amsha_position(chart.ascendant.longitude, varga)?;
    let mut positions = BTreeMap::new();
    positions.insert(ASCENDANT_KEY.to_string(), DivisionalEntry::from(asc));
    for (graha, lon) in chart.longitudes() {
        let entry = DivisionalEntry::from(amsha_position(lon, varga)?);
        positions.insert(graha.name().to_string(), entry);
    }
    Ok(DivisionalChart {
        name: varga.name(),
        purpose: varga.purpose(),
        ascendant_sign: asc.rashi,
        positions,
    })
}

/// The requested vargas, or all seven when `vargas` is empty.
pub fn divisional_charts(chart: &BirthChart, vargas: &[Varga]) -> Result<DivisionalCharts, ChartError> {
    let wanted = if vargas.is_empty() { &ALL_VARGAS[..] } else { vargas };
    let charts = wanted
        .iter()
        .map(|&v| Ok((v, divisional_chart(chart, v)?)))
        .collect::<Result<BTreeMap<_, _>, ChartError>>()?;
    debug!(count = charts.len(), "divisional charts built");
    Ok(DivisionalCharts {
        charts,
        available_charts: ALL_VARGAS.to_vec(),
        primary_charts: PRIMARY_VARGAS.to_vec(),
    })
}
