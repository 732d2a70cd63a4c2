//! Heliocentric planet positions from Keplerian mean elements.
//!
//! Elements and rates: Standish, "Keplerian Elements for Approximate
//! Positions of the Major Planets" (JPL), Table 1. Referred to the mean
//! ecliptic and equinox of J2000. Intended accuracy is a few arcminutes
//! over 1800–2050, degrading slowly outside that window.

use crate::error::EphemerisError;

/// Mean elements `[value at J2000, rate per Julian century]`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Elements {
    /// Semi-major axis, AU.
    a: [f64; 2],
    /// Eccentricity.
    e: [f64; 2],
    /// Inclination, degrees.
    i: [f64; 2],
    /// Mean longitude, degrees.
    l: [f64; 2],
    /// Longitude of perihelion, degrees.
    peri: [f64; 2],
    /// Longitude of the ascending node, degrees.
    node: [f64; 2],
}

pub(crate) const MERCURY: Elements = Elements {
    a: [0.387_099_27, 0.000_000_37],
    e: [0.205_635_93, 0.000_019_06],
    i: [7.004_979_02, -0.005_947_49],
    l: [252.250_323_50, 149_472.674_111_75],
    peri: [77.457_796_28, 0.160_476_89],
    node: [48.330_765_93, -0.125_340_81],
};

pub(crate) const VENUS: Elements = Elements {
    a: [0.723_335_66, 0.000_003_90],
    e: [0.006_776_72, -0.000_041_07],
    i: [3.394_676_05, -0.000_788_90],
    l: [181.979_099_50, 58_517.815_387_29],
    peri: [131.602_467_18, 0.002_683_29],
    node: [76.679_842_55, -0.277_694_18],
};

/// Earth-Moon barycenter.
pub(crate) const EM_BARY: Elements = Elements {
    a: [1.000_002_61, 0.000_005_62],
    e: [0.016_711_23, -0.000_043_92],
    i: [-0.000_015_31, -0.012_946_68],
    l: [100.464_571_66, 35_999.372_449_81],
    peri: [102.937_681_93, 0.323_273_64],
    node: [0.0, 0.0],
};

pub(crate) const MARS: Elements = Elements {
    a: [1.523_710_34, 0.000_018_47],
    e: [0.093_394_10, 0.000_078_82],
    i: [1.849_691_42, -0.008_131_31],
    l: [-4.553_432_05, 19_140.302_684_99],
    peri: [-23.943_629_59, 0.444_410_88],
    node: [49.559_538_91, -0.292_573_43],
};

pub(crate) const JUPITER: Elements = Elements {
    a: [5.202_887_00, -0.000_116_07],
    e: [0.048_386_24, -0.000_132_53],
    i: [1.304_396_95, -0.001_837_14],
    l: [34.396_440_51, 3_034.746_127_75],
    peri: [14.728_479_83, 0.212_526_68],
    node: [100.473_909_09, 0.204_691_06],
};

pub(crate) const SATURN: Elements = Elements {
    a: [9.536_675_94, -0.001_250_60],
    e: [0.053_861_79, -0.000_509_91],
    i: [2.485_991_87, 0.001_936_09],
    l: [49.954_244_23, 1_222.493_622_01],
    peri: [92.598_878_31, -0.418_972_16],
    node: [113.662_424_48, -0.288_677_94],
};

const MAX_ITER: usize = 30;
const TOLERANCE: f64 = 1e-12;

/// Solve Kepler's equation E − e·sin E = M (radians) by Newton iteration.
pub(crate) fn solve_kepler(m: f64, e: f64) -> Result<f64, EphemerisError> {
    let mut ecc = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..MAX_ITER {
        let delta = (ecc - e * ecc.sin() - m) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if !ecc.is_finite() {
            break;
        }
        if delta.abs() < TOLERANCE {
            return Ok(ecc);
        }
    }
    Err(EphemerisError::Divergence(format!(
        "Kepler equation did not converge (M={m}, e={e})"
    )))
}

/// Heliocentric ecliptic J2000 position in AU at `t` Julian centuries.
pub(crate) fn heliocentric_position(el: &Elements, t: f64) -> Result<[f64; 3], EphemerisError> {
    let at = |c: [f64; 2]| c[0] + c[1] * t;
    let a = at(el.a);
    let e = at(el.e);
    let incl = at(el.i).to_radians();
    let l = at(el.l);
    let peri = at(el.peri);
    let node = at(el.node);

    let arg_peri = (peri - node).to_radians();
    // mean anomaly in (−180, 180]
    let m_deg = (l - peri).rem_euclid(360.0);
    let m = if m_deg > 180.0 { m_deg - 360.0 } else { m_deg }.to_radians();

    let ecc = solve_kepler(m, e)?;
    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = node.to_radians().sin_cos();
    let (si, ci) = incl.sin_cos();

    Ok([
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_circular_is_identity() {
        let e = solve_kepler(1.234, 0.0).unwrap();
        assert!((e - 1.234).abs() < 1e-14);
    }

    #[test]
    fn kepler_satisfies_equation() {
        for &(m, e) in &[(0.3, 0.2056), (-2.9, 0.0934), (3.1, 0.6), (0.01, 0.95)] {
            let ecc = solve_kepler(m, e).unwrap();
            assert!((ecc - e * ecc.sin() - m).abs() < 1e-10, "M={m} e={e}");
        }
    }

    #[test]
    fn kepler_nan_diverges() {
        assert!(matches!(
            solve_kepler(f64::NAN, 0.1),
            Err(EphemerisError::Divergence(_))
        ));
    }

    #[test]
    fn earth_distance_about_one_au() {
        let p = heliocentric_position(&EM_BARY, 0.0).unwrap();
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        // early January: near perihelion
        assert!((r - 0.9833).abs() < 0.001, "r = {r}");
        assert!(p[2].abs() < 1e-6);
    }

    #[test]
    fn jupiter_radius_within_orbit_bounds() {
        for &t in &[-2.0, -0.5, 0.0, 0.24, 2.0] {
            let p = heliocentric_position(&JUPITER, t).unwrap();
            let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((4.9..5.5).contains(&r), "t={t}: r = {r}");
        }
    }
}
