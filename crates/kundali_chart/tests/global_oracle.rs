//! The global slot is process-wide, so everything runs in one test.

mod common;

use common::{FixedOracle, delhi_request};
use kundali_chart::{ChartError, global};
use kundali_core::EphemerisConfig;
use kundali_vedic_base::{AspectOrbs, AyanamshaSystem};

#[test]
fn global_oracle_lifecycle() {
    assert!(!global::is_initialized());
    assert!(matches!(
        kundali_chart::chart(&delhi_request()),
        Err(ChartError::EphemerisUnavailable(_))
    ));

    let bad = EphemerisConfig {
        min_year: 2100,
        max_year: 2000,
        ..Default::default()
    };
    assert!(matches!(global::init(bad), Err(ChartError::InvalidInput(_))));
    assert!(!global::is_initialized());

    global::init_with(Box::new(FixedOracle::new(AyanamshaSystem::Lahiri))).unwrap();
    assert!(global::is_initialized());
    assert_eq!(global::oracle().unwrap().name(), "fixed");

    assert_eq!(
        global::init(EphemerisConfig::default()),
        Err(ChartError::InvalidInput("oracle already initialized".into()))
    );

    let chart = kundali_chart::chart(&delhi_request()).unwrap();
    assert_eq!(chart.planets.len(), 9);
    let t = kundali_chart::transits(&delhi_request(), chart.jd_utc + 30.0, &AspectOrbs::default())
        .unwrap();
    assert_eq!(t.current_positions.len(), 9);
    let h = kundali_chart::horoscope(None, 2024, 1, 1, AyanamshaSystem::Lahiri).unwrap();
    assert_eq!(h.len(), 12);
}
