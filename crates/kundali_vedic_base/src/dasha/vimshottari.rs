//! Vimshottari timeline construction.

use kundali_time::DAYS_PER_YEAR;

use super::balance::nakshatra_birth_balance;
use super::subperiod::proportional_children;
use super::types::{DashaLevel, DashaPeriod, DashaTimeline, Mahadasha};
use crate::error::VedicError;
use crate::graha::Graha;
use crate::util::check_longitude;

/// Cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Horizon used when the caller does not ask for one.
pub const DEFAULT_HORIZON_YEARS: f64 = 100.0;

/// Longest horizon accepted: three full cycles.
pub const MAX_HORIZON_YEARS: f64 = 3.0 * VIMSHOTTARI_TOTAL_YEARS;

/// Lords in dasha order with their full years.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Venus, 20.0),
    (Graha::Sun, 6.0),
    (Graha::Moon, 10.0),
    (Graha::Mars, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Jupiter, 16.0),
    (Graha::Saturn, 19.0),
    (Graha::Mercury, 17.0),
];

/// Full mahadasha years for a lord.
pub fn vimshottari_years(lord: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE[sequence_position(lord)].1
}

fn sequence_position(lord: Graha) -> usize {
    // every graha, nodes included, appears exactly once
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(g, _)| *g == lord)
        .unwrap_or(0)
}

/// The nine lords rotated to start at `lord`.
fn sequence_from(lord: Graha) -> [(Graha, f64); 9] {
    let start = sequence_position(lord);
    std::array::from_fn(|i| VIMSHOTTARI_SEQUENCE[(start + i) % 9])
}

/// Build mahadashas and antardashas from birth until `horizon_years` is covered.
///
/// The horizon check happens before each period is added, so the last
/// mahadasha is always included whole and the timeline usually overshoots
/// the horizon.
pub fn vimshottari_timeline(
    moon_sidereal_lon: f64,
    birth_jd: f64,
    horizon_years: f64,
) -> Result<DashaTimeline, VedicError> {
    let moon = check_longitude(moon_sidereal_lon)?;
    if !birth_jd.is_finite() {
        return Err(VedicError::InvalidInput(format!("non-finite birth date {birth_jd}")));
    }
    if !horizon_years.is_finite() || horizon_years <= 0.0 || horizon_years > MAX_HORIZON_YEARS {
        return Err(VedicError::InvalidInput(format!(
            "dasha horizon must be in (0, {MAX_HORIZON_YEARS}] years, got {horizon_years}"
        )));
    }

    let (nakshatra, _, elapsed) = nakshatra_birth_balance(moon, 1.0);
    let first_lord = nakshatra.lord();
    let balance_years = vimshottari_years(first_lord) * (1.0 - elapsed);

    let mut mahadashas = Vec::new();
    let mut cursor = birth_jd;
    let mut years_covered = 0.0;

    for (order_0, (lord, full_years)) in sequence_from(first_lord).into_iter().cycle().enumerate() {
        if years_covered >= horizon_years {
            break;
        }
        let years = if order_0 == 0 { balance_years } else { full_years };
        let period = DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: cursor + years * DAYS_PER_YEAR,
            level: DashaLevel::Mahadasha,
            order: order_0 as u16 + 1,
        };
        let antardashas =
            proportional_children(&period, &sequence_from(lord), VIMSHOTTARI_TOTAL_YEARS);
        mahadashas.push(Mahadasha { period, antardashas });
        cursor = period.end_jd;
        years_covered += years;
    }

    Ok(DashaTimeline {
        birth_jd,
        birth_nakshatra: nakshatra,
        nakshatra_lord: first_lord,
        moon_longitude: moon,
        balance_years,
        horizon_years,
        mahadashas,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::J2000_JD;

    #[test]
    fn cycle_sums_to_120() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|(_, y)| y).sum();
        assert_eq!(total, VIMSHOTTARI_TOTAL_YEARS);
    }

    #[test]
    fn moon_at_ten_degrees_starts_with_ketu() {
        let t = vimshottari_timeline(10.0, J2000_JD, 100.0).unwrap();
        assert_eq!(t.nakshatra_lord, Graha::Ketu);
        assert!((t.balance_years - 1.75).abs() < 1e-9, "balance = {}", t.balance_years);
        let first = &t.mahadashas[0].period;
        assert_eq!(first.lord, Graha::Ketu);
        assert!((first.duration_years() - 1.75).abs() < 1e-9);
        assert_eq!(t.mahadashas[1].period.lord, Graha::Venus);
    }

    #[test]
    fn mahadashas_are_contiguous() {
        let t = vimshottari_timeline(123.4, J2000_JD, 100.0).unwrap();
        for w in t.mahadashas.windows(2) {
            assert_eq!(w[0].period.end_jd, w[1].period.start_jd);
        }
        assert_eq!(t.mahadashas[0].period.start_jd, J2000_JD);
    }

    #[test]
    fn horizon_is_covered_inclusively() {
        let t = vimshottari_timeline(10.0, J2000_JD, 100.0).unwrap();
        // 1.75 + 20 + 6 + 10 + 7 + 18 + 16 + 19 = 97.75 < 100, so Mercury is added whole
        assert_eq!(t.mahadashas.len(), 9);
        assert_eq!(t.mahadashas.last().unwrap().period.lord, Graha::Mercury);
        assert!((t.covered_years() - 114.75).abs() < 1e-9);
    }

    #[test]
    fn timeline_wraps_the_cycle_for_long_horizons() {
        let t = vimshottari_timeline(0.0, J2000_JD, 250.0).unwrap();
        assert!(t.covered_years() >= 250.0);
        assert_eq!(t.mahadashas[9].period.lord, Graha::Ketu);
    }

    #[test]
    fn antardashas_sum_to_parent() {
        let t = vimshottari_timeline(200.0, J2000_JD, 100.0).unwrap();
        for m in &t.mahadashas {
            assert_eq!(m.antardashas.len(), 9);
            assert_eq!(m.antardashas[0].lord, m.period.lord);
            assert_eq!(m.antardashas[0].start_jd, m.period.start_jd);
            assert_eq!(m.antardashas[8].end_jd, m.period.end_jd);
            let sum: f64 = m.antardashas.iter().map(DashaPeriod::duration_days).sum();
            assert!((sum - m.period.duration_days()).abs() < 1e-6);
        }
    }

    #[test]
    fn full_mahadasha_antardasha_lengths() {
        // second mahadasha after Ketu is a full Venus period
        let t = vimshottari_timeline(10.0, J2000_JD, 100.0).unwrap();
        let venus = &t.mahadashas[1];
        let venus_sun = venus.antardashas[1];
        assert_eq!(venus_sun.lord, Graha::Sun);
        // 20 × 6 / 120 = 1 year
        assert!((venus_sun.duration_years() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(vimshottari_timeline(360.0, J2000_JD, 100.0).is_err());
        assert!(vimshottari_timeline(10.0, f64::NAN, 100.0).is_err());
        assert!(vimshottari_timeline(10.0, J2000_JD, 0.0).is_err());
        assert!(vimshottari_timeline(10.0, J2000_JD, f64::INFINITY).is_err());
    }

    #[test]
    fn horizon_is_capped() {
        let t = vimshottari_timeline(10.0, J2000_JD, MAX_HORIZON_YEARS).unwrap();
        assert!(t.covered_years() >= MAX_HORIZON_YEARS);
        assert!(t.mahadashas.len() < 40);
        let err = vimshottari_timeline(10.0, J2000_JD, 1.0e6).unwrap_err();
        assert!(matches!(err, VedicError::InvalidInput(msg) if msg.contains("horizon")));
        assert!(vimshottari_timeline(10.0, J2000_JD, MAX_HORIZON_YEARS + 1.0).is_err());
    }
}
