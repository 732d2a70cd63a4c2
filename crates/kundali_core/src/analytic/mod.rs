//! Built-in low-precision analytic ephemeris.
//!
//! Planets come from Keplerian mean elements with one light-time
//! iteration. The Moon comes from the truncated lunar series. Positions are
//! referred to the ecliptic and mean equinox of date: J2000 longitudes are
//! advanced by the general precession. Nutation is not applied.
//!
//! Typical errors are under 0.01° for the Sun and Moon and a few
//! arcminutes for the planets across 1800–2200. That is enough for
//! sign, nakshatra and pada placement away from boundaries; use a
//! kernel-backed oracle when second-level precision matters.
//!
//! UTC is used directly as the dynamical time argument.

mod kepler;
mod lunar;

use kundali_frames::{
    EclipticCoords, cartesian_to_spherical, general_precession_longitude_deg, normalize_deg,
};
use kundali_time::{calendar_to_jd, julian_centuries};
use tracing::trace;

use crate::{Body, Ephemeris, EphemerisConfig, EphemerisError, Observation};

/// Light travel time per AU, in days.
const LIGHT_DAYS_PER_AU: f64 = 0.005_775_518_3;
/// Constant of annual aberration, degrees.
const ABERRATION_DEG: f64 = 20.4898 / 3600.0;
const KM_PER_AU: f64 = 149_597_870.7;

/// Analytic oracle serving Sun, Moon and the five classical planets.
#[derive(Debug, Clone)]
pub struct AnalyticEphemeris {
    config: EphemerisConfig,
    jd_min: f64,
    jd_max: f64,
}

impl AnalyticEphemeris {
    /// Build an oracle for the configured year window.
    pub fn new(config: EphemerisConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        let jd_min = calendar_to_jd(config.min_year, 1, 1.0);
        let jd_max = calendar_to_jd(config.max_year + 1, 1, 1.0);
        Ok(Self {
            config,
            jd_min,
            jd_max,
        })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    fn check_epoch(&self, jd: f64) -> Result<(), EphemerisError> {
        if !jd.is_finite() {
            return Err(EphemerisError::Unavailable("non-finite epoch".to_string()));
        }
        if jd < self.jd_min || jd >= self.jd_max {
            return Err(EphemerisError::Unavailable(format!(
                "JD {jd} outside {}..={}",
                self.config.min_year, self.config.max_year
            )));
        }
        Ok(())
    }

    /// Geocentric tropical coordinates of date, distance in AU.
    pub fn position(&self, body: Body, jd: f64) -> Result<EclipticCoords, EphemerisError> {
        let t = julian_centuries(jd);
        let mut coords = match body {
            Body::Earth => return Err(EphemerisError::UnknownBody(body.name().to_string())),
            Body::Moon => {
                let (lon, lat, km) = lunar::moon_position(t);
                return Ok(EclipticCoords {
                    lon_deg: lon,
                    lat_deg: lat,
                    distance: km / KM_PER_AU,
                });
            }
            Body::Sun => {
                let earth = kepler::heliocentric_position(&kepler::EM_BARY, t)?;
                let mut sun = cartesian_to_spherical(&[-earth[0], -earth[1], -earth[2]]);
                sun.lon_deg -= ABERRATION_DEG / sun.distance;
                sun
            }
            planet => {
                let elements = match planet {
                    Body::Mercury => &kepler::MERCURY,
                    Body::Venus => &kepler::VENUS,
                    Body::Mars => &kepler::MARS,
                    Body::Jupiter => &kepler::JUPITER,
                    _ => &kepler::SATURN,
                };
                let earth = kepler::heliocentric_position(&kepler::EM_BARY, t)?;
                let geo = |p: [f64; 3]| [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]];
                let first = cartesian_to_spherical(&geo(kepler::heliocentric_position(
                    elements, t,
                )?));
                // planet where it was when the light left it
                let tau = first.distance * LIGHT_DAYS_PER_AU / 36_525.0;
                cartesian_to_spherical(&geo(kepler::heliocentric_position(
                    elements,
                    t - tau,
                )?))
            }
        };
        coords.lon_deg = normalize_deg(coords.lon_deg + general_precession_longitude_deg(t));
        Ok(coords)
    }

    fn speed(&self, body: Body, jd: f64) -> Result<f64, EphemerisError> {
        let h = self.config.speed_step_days;
        let before = self.position(body, jd - h)?.lon_deg;
        let after = self.position(body, jd + h)?.lon_deg;
        let mut delta = after - before;
        if delta > 180.0 {
            delta -= 360.0;
        } else if delta < -180.0 {
            delta += 360.0;
        }
        Ok(delta / (2.0 * h))
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn observe(&self, body: Body, jd_utc: f64) -> Result<Observation, EphemerisError> {
        if body == Body::Earth {
            return Err(EphemerisError::UnknownBody(body.name().to_string()));
        }
        self.check_epoch(jd_utc)?;
        let pos = self.position(body, jd_utc)?;
        let obs = Observation {
            longitude_deg: pos.lon_deg,
            latitude_deg: pos.lat_deg,
            distance_au: pos.distance,
            speed_deg_per_day: self.speed(body, jd_utc)?,
        };
        if !obs.is_finite() {
            return Err(EphemerisError::Divergence(format!(
                "non-finite observation for {body} at JD {jd_utc}"
            )));
        }
        trace!(%body, jd_utc, lon = obs.longitude_deg, speed = obs.speed_deg_per_day, "observed");
        Ok(obs)
    }

    fn name(&self) -> &str {
        "analytic"
    }
}
