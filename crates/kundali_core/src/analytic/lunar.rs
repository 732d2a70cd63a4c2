//! Geocentric Moon from the truncated ELP-2000/82 series.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 47, Tables
//! 47.A and 47.B. Longitude accuracy about 10″, referred to the mean
//! equinox of date (no nutation).

use kundali_frames::normalize_deg;

/// `[D, M, M′, F, Σl (1e-6°), Σr (m)]`
#[rustfmt::skip]
static LON_DIST_TERMS: [[i32; 6]; 60] = [
    [0,  0,  1,  0, 6_288_774, -20_905_355],
    [2,  0, -1,  0, 1_274_027,  -3_699_111],
    [2,  0,  0,  0,   658_314,  -2_955_968],
    [0,  0,  2,  0,   213_618,    -569_925],
    [0,  1,  0,  0,  -185_116,      48_888],
    [0,  0,  0,  2,  -114_332,      -3_149],
    [2,  0, -2,  0,    58_793,     246_158],
    [2, -1, -1,  0,    57_066,    -152_138],
    [2,  0,  1,  0,    53_322,    -170_733],
    [2, -1,  0,  0,    45_758,    -204_586],
    [0,  1, -1,  0,   -40_923,    -129_620],
    [1,  0,  0,  0,   -34_720,     108_743],
    [0,  1,  1,  0,   -30_383,     104_755],
    [2,  0,  0, -2,    15_327,      10_321],
    [0,  0,  1,  2,   -12_528,           0],
    [0,  0,  1, -2,    10_980,      79_661],
    [4,  0, -1,  0,    10_675,     -34_782],
    [0,  0,  3,  0,    10_034,     -23_210],
    [4,  0, -2,  0,     8_548,     -21_636],
    [2,  1, -1,  0,    -7_888,      24_208],
    [2,  1,  0,  0,    -6_766,      30_824],
    [1,  0, -1,  0,    -5_163,      -8_379],
    [1,  1,  0,  0,     4_987,     -16_675],
    [2, -1,  1,  0,     4_036,     -12_831],
    [2,  0,  2,  0,     3_994,     -10_445],
    [4,  0,  0,  0,     3_861,     -11_650],
    [2,  0, -3,  0,     3_665,      14_403],
    [0,  1, -2,  0,    -2_689,      -7_003],
    [2,  0, -1,  2,    -2_602,           0],
    [2, -1, -2,  0,     2_390,      10_056],
    [1,  0,  1,  0,    -2_348,       6_322],
    [2, -2,  0,  0,     2_236,      -9_884],
    [0,  1,  2,  0,    -2_120,       5_751],
    [0,  2,  0,  0,    -2_069,           0],
    [2, -2, -1,  0,     2_048,      -4_950],
    [2,  0,  1, -2,    -1_773,       4_130],
    [2,  0,  0,  2,    -1_595,           0],
    [4, -1, -1,  0,     1_215,      -3_958],
    [0,  0,  2,  2,    -1_110,           0],
    [3,  0, -1,  0,      -892,       3_258],
    [2,  1,  1,  0,      -810,       2_616],
    [4, -1, -2,  0,       759,      -1_897],
    [0,  2, -1,  0,      -713,      -2_117],
    [2,  2, -1,  0,      -700,       2_354],
    [2,  1, -2,  0,       691,           0],
    [2, -1,  0, -2,       596,           0],
    [4,  0,  1,  0,       549,      -1_423],
    [0,  0,  4,  0,       537,      -1_117],
    [4, -1,  0,  0,       520,      -1_571],
    [1,  0, -2,  0,      -487,      -1_739],
    [2,  1,  0, -2,      -399,           0],
    [0,  0,  2, -2,      -381,      -4_421],
    [1,  1,  1,  0,       351,           0],
    [3,  0, -2,  0,      -340,           0],
    [4,  0, -3,  0,       330,           0],
    [2, -1,  2,  0,       327,           0],
    [0,  2,  1,  0,      -323,       1_165],
    [1,  1, -1,  0,       299,           0],
    [2,  0,  3,  0,       294,           0],
    [2,  0, -1, -2,         0,       8_752],
];

/// `[D, M, M′, F, Σb (1e-6°)]`
#[rustfmt::skip]
static LAT_TERMS: [[i32; 5]; 30] = [
    [0,  0,  0,  1, 5_128_122],
    [0,  0,  1,  1,   280_602],
    [0,  0,  1, -1,   277_693],
    [2,  0,  0, -1,   173_237],
    [2,  0, -1,  1,    55_413],
    [2,  0, -1, -1,    46_271],
    [2,  0,  0,  1,    32_573],
    [0,  0,  2,  1,    17_198],
    [2,  0,  1, -1,     9_266],
    [0,  0,  2, -1,     8_822],
    [2, -1,  0, -1,     8_216],
    [2,  0, -2, -1,     4_324],
    [2,  0,  1,  1,     4_200],
    [2,  1,  0, -1,    -3_359],
    [2, -1, -1,  1,     2_463],
    [2, -1,  0,  1,     2_211],
    [2, -1, -1, -1,     2_065],
    [0,  1, -1, -1,    -1_870],
    [4,  0, -1, -1,     1_828],
    [0,  1,  0,  1,    -1_794],
    [0,  0,  0,  3,    -1_749],
    [0,  1, -1,  1,    -1_565],
    [1,  0,  0,  1,    -1_491],
    [0,  1,  1,  1,    -1_475],
    [0,  1,  1, -1,    -1_410],
    [0,  1,  0, -1,    -1_344],
    [1,  0,  0, -1,    -1_335],
    [0,  0,  3,  1,     1_107],
    [4,  0,  0, -1,     1_021],
    [4,  0, -1,  1,       833],
];

/// Mean Earth–Moon distance term of the series, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Moon position: `(longitude°, latitude°, distance km)`, mean equinox of date.
pub(crate) fn moon_position(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    // decreasing eccentricity of Earth's orbit
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let (lp_r, d_r, m_r, mp_r, f_r) = (
        lp.to_radians(),
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );
    let ecc_factor = |mcoef: i32| match mcoef.abs() {
        1 => e,
        2 => e * e,
        _ => 1.0,
    };
    let arg = |c: &[i32]| {
        c[0] as f64 * d_r + c[1] as f64 * m_r + c[2] as f64 * mp_r + c[3] as f64 * f_r
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for row in &LON_DIST_TERMS {
        let a = arg(&row[..4]);
        let k = ecc_factor(row[1]);
        sum_l += row[4] as f64 * k * a.sin();
        sum_r += row[5] as f64 * k * a.cos();
    }
    let mut sum_b = 0.0;
    for row in &LAT_TERMS {
        sum_b += row[4] as f64 * ecc_factor(row[1]) * arg(&row[..4]).sin();
    }

    // Venus, Jupiter and flattening terms
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp_r - f_r).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp_r.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f_r).sin()
        + 175.0 * (a1 + f_r).sin()
        + 127.0 * (lp_r - mp_r).sin()
        - 115.0 * (lp_r + mp_r).sin();

    (
        normalize_deg(lp + sum_l / 1e6),
        sum_b / 1e6,
        MEAN_DISTANCE_KM + sum_r / 1000.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let (lon, lat, dist) = moon_position(t);
        assert!((lon - 133.162_655).abs() < 0.01, "lon = {lon}");
        assert!((lat + 3.229_126).abs() < 0.01, "lat = {lat}");
        assert!((dist - 368_409.7).abs() < 50.0, "dist = {dist}");
    }

    #[test]
    fn distance_within_perigee_apogee() {
        for i in 0..60 {
            let t = -1.5 + i as f64 * 0.05;
            let (_, lat, dist) = moon_position(t);
            assert!((355_000.0..407_500.0).contains(&dist), "t={t}: {dist}");
            assert!(lat.abs() < 5.4, "t={t}: {lat}");
        }
    }
}
