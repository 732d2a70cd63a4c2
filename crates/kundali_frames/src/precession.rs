//! IAU 2006 general precession in ecliptic longitude.
//!
//! p_A is the accumulated westward drift of the vernal equinox along the
//! ecliptic since J2000.0. Adding it to a J2000 ecliptic longitude gives the
//! longitude referred to the equinox of date. Its linear term is also the
//! annual rate used by the linear ayanamsha model.
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567 (Table 1).

/// Linear term of p_A, 5028.796195″ per Julian century, as ″ per year.
pub const PRECESSION_RATE_ARCSEC_PER_YEAR: f64 = 5028.796195 / 100.0;

/// General precession in longitude in arcseconds after `t` Julian centuries.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    t * (5028.796195 + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 - t * 0.0000000383))))
}

/// General precession in longitude in degrees after `t` Julian centuries.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn one_century() {
        let p = general_precession_longitude_arcsec(1.0);
        assert!((p - 5029.9017).abs() < 0.001, "p_A(1) = {p}");
    }

    #[test]
    fn sign_follows_time() {
        assert!(general_precession_longitude_arcsec(-2.0) < 0.0);
        assert!(general_precession_longitude_arcsec(2.0) > 0.0);
    }

    #[test]
    fn annual_rate_matches_linear_term() {
        assert!((PRECESSION_RATE_ARCSEC_PER_YEAR - 50.28796195).abs() < 1e-12);
        let one_year = general_precession_longitude_arcsec(0.01);
        assert!((one_year - PRECESSION_RATE_ARCSEC_PER_YEAR).abs() < 0.001);
    }
}
