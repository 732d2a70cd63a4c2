//! A fixed oracle for pipeline tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use kundali_chart::ChartRequest;
use kundali_core::{Body, Ephemeris, EphemerisError, Observation};
use kundali_vedic_base::{AyanamshaSystem, ayanamsha_deg, normalize_360};

/// Serves the same sidereal longitude for a body at every instant, converted
/// back to tropical with the instant's ayanamsha so that the pipeline
/// recovers it exactly.
pub struct FixedOracle {
    system: AyanamshaSystem,
    bodies: HashMap<Body, (f64, f64)>,
    fail_with: Option<EphemerisError>,
    calls: AtomicUsize,
}

impl FixedOracle {
    pub fn new(system: AyanamshaSystem) -> Self {
        let mut bodies = HashMap::new();
        for (body, lon, speed) in [
            (Body::Sun, 30.5, 0.98),
            (Body::Moon, 10.0, 13.2),
            (Body::Mars, 275.0, 0.6),
            (Body::Mercury, 45.0, -0.4),
            (Body::Jupiter, 95.0, 0.08),
            (Body::Venus, 350.0, 1.2),
            (Body::Saturn, 200.0, -0.03),
        ] {
            bodies.insert(body, (lon, speed));
        }
        Self {
            system,
            bodies,
            fail_with: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sidereal longitude and speed for `body`.
    pub fn with(mut self, body: Body, sidereal_lon: f64, speed: f64) -> Self {
        self.bodies.insert(body, (sidereal_lon, speed));
        self
    }

    pub fn failing(mut self, err: EphemerisError) -> Self {
        self.fail_with = Some(err);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Ephemeris for FixedOracle {
    fn observe(&self, body: Body, jd_utc: f64) -> Result<Observation, EphemerisError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        let &(lon, speed) = self
            .bodies
            .get(&body)
            .ok_or_else(|| EphemerisError::UnknownBody(body.to_string()))?;
        let aya = ayanamsha_deg(self.system, jd_utc)
            .map_err(|e| EphemerisError::Divergence(e.to_string()))?;
        Ok(Observation {
            longitude_deg: normalize_360(lon + aya),
            latitude_deg: 0.0,
            distance_au: 1.0,
            speed_deg_per_day: speed,
        })
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

pub fn delhi_request() -> ChartRequest {
    ChartRequest::new(1990, 5, 15, 10, 30, 28.6139, 77.2090, 5.5)
}
