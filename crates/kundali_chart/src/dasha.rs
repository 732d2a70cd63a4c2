//! Vimshottari dasha report for a birth chart.

use kundali_vedic_base::{
    DashaPeriod, DashaTimeline, Graha, Nakshatra, current_periods, vimshottari_timeline,
};
use serde::Serialize;
use tracing::debug;

use crate::chart::BirthChart;
use crate::error::ChartError;
use crate::format::{round_dp, utc_date};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AntardashaEntry {
    pub planet: Graha,
    pub start_jd: f64,
    pub end_jd: f64,
    pub start_date: String,
    pub end_date: String,
    pub duration_days: f64,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MahadashaEntry {
    pub planet: Graha,
    pub start_jd: f64,
    pub end_jd: f64,
    pub start_date: String,
    pub end_date: String,
    pub duration_years: f64,
    pub is_current: bool,
    pub antardashas: Vec<AntardashaEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaReport {
    pub birth_nakshatra: Nakshatra,
    pub nakshatra_lord: Graha,
    pub moon_longitude: f64,
    /// Years left in the first mahadasha at birth.
    pub balance_years: f64,
    pub horizon_years: f64,
    pub query_jd: f64,
    pub current_mahadasha: Option<Graha>,
    pub current_antardasha: Option<Graha>,
    pub mahadashas: Vec<MahadashaEntry>,
    pub total_years_calculated: f64,
}

fn antardasha_entry(p: &DashaPeriod, query_jd: f64) -> Result<AntardashaEntry, ChartError> {
    Ok(AntardashaEntry {
        planet: p.lord,
        start_jd: p.start_jd,
        end_jd: p.end_jd,
        start_date: utc_date(p.start_jd)?,
        end_date: utc_date(p.end_jd)?,
        duration_days: round_dp(p.duration_days(), 2),
        is_current: p.contains(query_jd),
    })
}

/// Render a timeline, marking the periods running at `query_jd`.
pub fn dasha_report_from_timeline(
    timeline: &DashaTimeline,
    query_jd: f64,
) -> Result<DashaReport, ChartError> {
    let current = current_periods(timeline, query_jd);
    let mahadashas = timeline
        .mahadashas
        .iter()
        .map(|m| {
            let antardashas = m
                .antardashas
                .iter()
                .map(|a| antardasha_entry(a, query_jd))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(MahadashaEntry {
                planet: m.period.lord,
                start_jd: m.period.start_jd,
                end_jd: m.period.end_jd,
                start_date: utc_date(m.period.start_jd)?,
                end_date: utc_date(m.period.end_jd)?,
                duration_years: round_dp(m.period.duration_years(), 2),
                is_current: m.period.contains(query_jd),
                antardashas,
            })
        })
        .collect::<Result<Vec<_>, ChartError>>()?;

    Ok(DashaReport {
        birth_nakshatra: timeline.birth_nakshatra,
        nakshatra_lord: timeline.nakshatra_lord,
        moon_longitude: timeline.moon_longitude,
        balance_years: round_dp(timeline.balance_years, 4),
        horizon_years: timeline.horizon_years,
        query_jd,
        current_mahadasha: current.map(|c| c.mahadasha.lord),
        current_antardasha: current.and_then(|c| c.antardasha).map(|a| a.lord),
        mahadashas,
        total_years_calculated: round_dp(timeline.covered_years(), 2),
    })
}

/// Dasha timeline from the chart's Moon, starting at the UTC birth instant.
pub fn dasha_report(
    chart: &BirthChart,
    horizon_years: f64,
    query_jd: f64,
) -> Result<DashaReport, ChartError> {
    if !query_jd.is_finite() {
        return Err(ChartError::InvalidInput(format!("query date {query_jd}")));
    }
    let moon = chart.moon()?;
    let timeline = vimshottari_timeline(moon.full_degree, chart.jd_utc, horizon_years)?;
    debug!(
        lord = %timeline.nakshatra_lord,
        balance_years = timeline.balance_years,
        periods = timeline.mahadashas.len(),
        "dasha timeline built"
    );
    dasha_report_from_timeline(&timeline, query_jd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::{DAYS_PER_YEAR, J2000_JD};

    #[test]
    fn marks_current_periods() {
        let t = vimshottari_timeline(10.0, J2000_JD, 100.0).unwrap();
        let r = dasha_report_from_timeline(&t, J2000_JD + 4.0 * DAYS_PER_YEAR).unwrap();
        // 1.75 Ketu, then 20 Venus
        assert_eq!(r.current_mahadasha, Some(Graha::Venus));
        assert_eq!(r.mahadashas.iter().filter(|m| m.is_current).count(), 1);
        assert!(r.mahadashas[1].is_current);
        let running: Vec<_> = r.mahadashas[1]
            .antardashas
            .iter()
            .filter(|a| a.is_current)
            .collect();
        assert_eq!(running.len(), 1);
        assert_eq!(Some(running[0].planet), r.current_antardasha);
        assert!((r.balance_years - 1.75).abs() < 1e-9);
        assert_eq!(r.mahadashas[0].start_date, "2000-01-01");
    }

    #[test]
    fn query_before_birth_has_no_current() {
        let t = vimshottari_timeline(10.0, J2000_JD, 100.0).unwrap();
        let r = dasha_report_from_timeline(&t, J2000_JD - 1.0).unwrap();
        assert_eq!(r.current_mahadasha, None);
        assert_eq!(r.current_antardasha, None);
        assert!(r.mahadashas.iter().all(|m| !m.is_current));
    }

    #[test]
    fn durations_are_rounded() {
        let t = vimshottari_timeline(10.0, J2000_JD, 100.0).unwrap();
        let r = dasha_report_from_timeline(&t, J2000_JD).unwrap();
        assert_eq!(r.mahadashas[1].duration_years, 20.0);
        assert_eq!(r.mahadashas[0].duration_years, 1.75);
        assert!(r.total_years_calculated >= 100.0);
    }
}
