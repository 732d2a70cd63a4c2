//! Cartesian → spherical conversion in the ecliptic frame.

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Ecliptic longitude, latitude and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoords {
    /// Longitude in degrees, [0, 360), measured from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, [−90, 90].
    pub lat_deg: f64,
    /// Distance in the input's length unit.
    pub distance: f64,
}

/// Convert `[x, y, z]` to spherical coordinates. The origin maps to all zeros.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> EclipticCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return EclipticCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }
    EclipticCoords {
        lon_deg: normalize_deg(y.atan2(x).to_degrees()),
        lat_deg: (z / r).asin().to_degrees(),
        distance: r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn axes() {
        let c = cartesian_to_spherical(&[0.0, 2.0, 0.0]);
        assert_abs_diff_eq!(c.lon_deg, 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.distance, 2.0, epsilon = 1e-12);
        let c = cartesian_to_spherical(&[0.0, -1.0, 0.0]);
        assert_abs_diff_eq!(c.lon_deg, 270.0, epsilon = 1e-12);
        let c = cartesian_to_spherical(&[0.0, 0.0, 3.0]);
        assert_abs_diff_eq!(c.lat_deg, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn origin_is_zero() {
        let c = cartesian_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(c.distance, 0.0);
    }

    #[test]
    fn normalize_edges() {
        assert_eq!(normalize_deg(360.0), 0.0);
        assert_eq!(normalize_deg(-1e-18), 0.0);
        assert_abs_diff_eq!(normalize_deg(-30.0), 330.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_deg(725.0), 5.0, epsilon = 1e-12);
    }
}
