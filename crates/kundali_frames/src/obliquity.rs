//! Mean obliquity of the ecliptic.
//!
//! Source: IAU 2006 (Capitaine et al. 2003), ε_A polynomial in Julian
//! centuries from J2000.0.

/// Mean obliquity at J2000.0: 84381.406″.
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.406 / 3600.0;

/// Mean obliquity of date in degrees.
///
/// ε = 84381.406″ − 46.836769″T − 0.0001831″T² + 0.00200340″T³
///     − 0.000000576″T⁴ − 0.0000000434″T⁵
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84_381.406
        + t * (-46.836769
            + t * (-0.0001831 + t * (0.00200340 + t * (-0.000000576 - t * 0.0000000434))));
    arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert!((mean_obliquity_deg(0.0) - 23.439_279_4).abs() < 1e-6);
        assert_eq!(mean_obliquity_deg(0.0), OBLIQUITY_J2000_DEG);
    }

    #[test]
    fn decreasing_over_centuries() {
        // about 47″ smaller after one century
        let drop = (mean_obliquity_deg(0.0) - mean_obliquity_deg(1.0)) * 3600.0;
        assert!((drop - 46.8349).abs() < 0.01, "drop = {drop}″");
    }
}
