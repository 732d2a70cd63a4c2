//! Delaunay fundamental arguments of lunisolar theory.
//!
//! Polynomial coefficients from IERS Conventions 2010, Table 5.2e (″).

use crate::spherical::normalize_deg;

/// The five Delaunay arguments in degrees, each normalized to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelaunayArgs {
    /// l: mean anomaly of the Moon.
    pub l: f64,
    /// l′: mean anomaly of the Sun.
    pub l_prime: f64,
    /// F: mean argument of latitude of the Moon.
    pub f: f64,
    /// D: mean elongation of the Moon from the Sun.
    pub d: f64,
    /// Ω: mean longitude of the Moon's ascending node.
    pub omega: f64,
}

fn poly_arcsec(c: [f64; 5], t: f64) -> f64 {
    c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])))
}

const L: [f64; 5] = [485_868.249036, 1_717_915_923.2178, 31.8792, 0.051635, -0.000_244_70];
const L_PRIME: [f64; 5] = [1_287_104.79305, 129_596_581.0481, -0.5532, 0.000136, -0.000_011_49];
const F: [f64; 5] = [335_779.526232, 1_739_527_262.8478, -12.7512, -0.001037, 0.000_004_17];
const D: [f64; 5] = [1_072_260.70369, 1_602_961_601.2090, -6.3706, 0.006593, -0.000_031_69];
const OMEGA: [f64; 5] = [450_160.398036, -6_962_890.5431, 7.4722, 0.007702, -0.000_059_39];

/// Delaunay arguments at `t` Julian centuries from J2000.0.
pub fn delaunay_args(t: f64) -> DelaunayArgs {
    let deg = |c| normalize_deg(poly_arcsec(c, t) / 3600.0);
    DelaunayArgs {
        l: deg(L),
        l_prime: deg(L_PRIME),
        f: deg(F),
        d: deg(D),
        omega: deg(OMEGA),
    }
}

/// Tropical longitude of the mean ascending lunar node, degrees [0, 360).
///
/// Regresses about 1934.136° per century (≈19.34° per year).
pub fn mean_lunar_node_deg(t: f64) -> f64 {
    normalize_deg(poly_arcsec(OMEGA, t) / 3600.0)
}

/// Rate of the mean node in degrees per day (negative, retrograde).
pub const MEAN_NODE_RATE_DEG_PER_DAY: f64 = -6_962_890.5431 / 3600.0 / 36_525.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_at_j2000() {
        assert!((mean_lunar_node_deg(0.0) - 125.044_555).abs() < 1e-5);
    }

    #[test]
    fn node_regresses() {
        let a = mean_lunar_node_deg(0.0);
        let b = mean_lunar_node_deg(0.01);
        let moved = (a - b).rem_euclid(360.0);
        assert!((moved - 19.341).abs() < 0.01, "moved {moved}° in a year");
        assert!((MEAN_NODE_RATE_DEG_PER_DAY + 0.052_954).abs() < 1e-5);
    }

    #[test]
    fn args_normalized() {
        for &t in &[-2.0, -0.37, 0.0, 0.5, 2.0] {
            let a = delaunay_args(t);
            for v in [a.l, a.l_prime, a.f, a.d, a.omega] {
                assert!((0.0..360.0).contains(&v), "t={t}: {v}");
            }
        }
    }

    #[test]
    fn args_at_epoch() {
        let a = delaunay_args(0.0);
        assert!((a.l - 134.963_402_5).abs() < 1e-6);
        assert!((a.l_prime - 357.529_109_2).abs() < 1e-6);
        assert!((a.f - 93.272_090_6).abs() < 1e-6);
        assert!((a.d - 297.850_195_5).abs() < 1e-6);
    }
}
