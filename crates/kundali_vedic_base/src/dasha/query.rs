//! Locating the running periods at an instant.

use serde::{Deserialize, Serialize};

use super::types::{DashaPeriod, DashaTimeline};

/// Periods running at a query instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentDasha {
    pub query_jd: f64,
    pub mahadasha: DashaPeriod,
    pub antardasha: Option<DashaPeriod>,
}

/// The mahadasha and antardasha whose `[start, end)` contains `jd`.
///
/// None when `jd` lies before birth or past the end of the timeline.
pub fn current_periods(timeline: &DashaTimeline, jd: f64) -> Option<CurrentDasha> {
    let maha = timeline.mahadashas.iter().find(|m| m.period.contains(jd))?;
    Some(CurrentDasha {
        query_jd: jd,
        mahadasha: maha.period,
        antardasha: maha.antardashas.iter().copied().find(|a| a.contains(jd)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::vimshottari::vimshottari_timeline;
    use crate::graha::Graha;
    use kundali_time::{DAYS_PER_YEAR, J2000_JD};

    #[test]
    fn finds_running_periods() {
        let t = vimshottari_timeline(10.0, J2000_JD, 100.0).unwrap();
        // 1 year in: still in the 1.75-year Ketu balance
        let c = current_periods(&t, J2000_JD + DAYS_PER_YEAR).unwrap();
        assert_eq!(c.mahadasha.lord, Graha::Ketu);
        assert!(c.antardasha.is_some());
        // 6 years in: Venus-Venus ends at 5.08, Venus-Sun runs to 6.08
        let c = current_periods(&t, J2000_JD + 6.0 * DAYS_PER_YEAR).unwrap();
        assert_eq!(c.mahadasha.lord, Graha::Venus);
        assert_eq!(c.antardasha.unwrap().lord, Graha::Sun);
    }

    #[test]
    fn boundary_belongs_to_next_period() {
        let t = vimshottari_timeline(10.0, J2000_JD, 100.0).unwrap();
        let boundary = t.mahadashas[1].period.start_jd;
        assert_eq!(current_periods(&t, boundary).unwrap().mahadasha.lord, Graha::Venus);
    }

    #[test]
    fn outside_timeline_is_none() {
        let t = vimshottari_timeline(10.0, J2000_JD, 100.0).unwrap();
        assert!(current_periods(&t, J2000_JD - 1.0).is_none());
        assert!(current_periods(&t, t.end_jd()).is_none());
    }
}
