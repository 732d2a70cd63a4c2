mod common;

use approx::assert_abs_diff_eq;
use common::{FixedOracle, delhi_request};
use kundali_chart::*;
use kundali_core::{Body, EphemerisError};
use kundali_vedic_base::{
    ALL_GRAHAS, AspectKind, AspectOrbs, AyanamshaSystem, Graha, Nakshatra, Rashi, Significance,
    Tithi, Varga, house_of, normalize_360,
};

fn chart() -> BirthChart {
    compute_chart(&FixedOracle::new(AyanamshaSystem::Lahiri), &delhi_request()).unwrap()
}

#[test]
fn chart_has_nine_planets_and_twelve_houses() {
    let c = chart();
    let names: Vec<_> = c.planets.iter().map(|p| p.name).collect();
    assert_eq!(names, ALL_GRAHAS.to_vec());
    assert_eq!(c.houses.len(), 12);
    assert_eq!(c.houses[0].rashi, c.ascendant.sign);

    let mut signs: Vec<_> = c.houses.iter().map(|h| h.rashi.index()).collect();
    signs.sort_unstable();
    assert_eq!(signs, (0..12).collect::<Vec<u8>>());
}

#[test]
fn positions_come_back_sidereal() {
    let c = chart();
    let sun = c.planet(Graha::Sun).unwrap();
    assert_abs_diff_eq!(sun.full_degree, 30.5, epsilon = 1e-9);
    assert_eq!(sun.sign, Rashi::Taurus);
    assert_abs_diff_eq!(sun.norm_degree, 0.5, epsilon = 1e-9);
    assert!(!sun.is_retro);

    let moon = c.moon().unwrap();
    assert_eq!(moon.nakshatra, Nakshatra::Ashwini);
    assert_eq!(moon.nakshatra_lord, Graha::Ketu);

    assert!(c.planet(Graha::Mercury).unwrap().is_retro);
    assert!(c.planet(Graha::Saturn).unwrap().is_retro);
}

#[test]
fn chart_serializes_with_camel_case_keys() {
    let v = serde_json::to_value(chart()).unwrap();
    for key in ["jdUtc", "ayanamshaValue", "ascendant", "midheaven", "planets", "houses"] {
        assert!(v.get(key).is_some(), "missing {key}");
    }
    assert_eq!(v["ayanamsha"], "lahiri");
    assert!(v["ascendant"]["signIndex"].is_u64());

    let planets = v["planets"].as_array().unwrap();
    assert_eq!(planets.len(), 9);
    let sun = &planets[0];
    assert_eq!(sun["name"], "Sun");
    assert_eq!(sun["sign"], "Taurus");
    assert_eq!(sun["signIndex"], 2);
    assert_eq!(sun["nakshatraIndex"], 3);
    assert_eq!(sun["isRetro"], false);
    assert!(sun["fullDegree"].is_f64());
    assert!(sun["house"].is_u64());
    assert!(sun.get("full_degree").is_none());

    let houses = v["houses"].as_array().unwrap();
    assert_eq!(houses.len(), 12);
    assert_eq!(houses[0]["house"], 1);
    assert_eq!(houses[0]["rashi"], v["ascendant"]["sign"]);
}

#[test]
fn nodes_are_opposite_and_retrograde() {
    let c = chart();
    let rahu = c.planet(Graha::Rahu).unwrap();
    let ketu = c.planet(Graha::Ketu).unwrap();
    assert_eq!(ketu.full_degree, normalize_360(rahu.full_degree + 180.0));
    assert!(rahu.is_retro && ketu.is_retro);
    assert_eq!(ketu.sign, rahu.sign.offset(6));
}

#[test]
fn houses_follow_the_ascendant() {
    let c = chart();
    for p in &c.planets {
        assert_eq!(p.house, house_of(p.full_degree, c.ascendant.longitude).unwrap());
    }
    assert!((0.0..360.0).contains(&c.ascendant.longitude));
    assert!((0.0..360.0).contains(&c.midheaven));
}

#[test]
fn ayanamsha_choice_changes_the_correction_only() {
    let lahiri = chart();
    let raman = compute_chart(
        &FixedOracle::new(AyanamshaSystem::Raman),
        &delhi_request().with_ayanamsha(AyanamshaSystem::Raman),
    )
    .unwrap();
    assert!(raman.ayanamsha_value < lahiri.ayanamsha_value);
    let diff = raman.ascendant.longitude - lahiri.ascendant.longitude;
    let expected = lahiri.ayanamsha_value - raman.ayanamsha_value;
    assert!((normalize_360(diff) - expected).abs() < 1e-9);
}

#[test]
fn oracle_failures_fail_the_whole_chart() {
    let unavailable = FixedOracle::new(AyanamshaSystem::Lahiri)
        .failing(EphemerisError::Unavailable("no kernel".into()));
    assert_eq!(
        compute_chart(&unavailable, &delhi_request()),
        Err(ChartError::EphemerisUnavailable("no kernel".into()))
    );

    let unknown = FixedOracle::new(AyanamshaSystem::Lahiri)
        .failing(EphemerisError::UnknownBody("mars".into()));
    assert!(matches!(
        compute_chart(&unknown, &delhi_request()),
        Err(ChartError::UnknownBody(_))
    ));

    let non_finite = FixedOracle::new(AyanamshaSystem::Lahiri).with(Body::Venus, f64::NAN, 1.0);
    assert!(matches!(
        compute_chart(&non_finite, &delhi_request()),
        Err(ChartError::CalculationDivergence(_))
    ));
}

#[test]
fn invalid_request_never_reaches_the_oracle() {
    let oracle = FixedOracle::new(AyanamshaSystem::Lahiri);
    let mut req = delhi_request();
    req.hour = 24;
    assert!(matches!(compute_chart(&oracle, &req), Err(ChartError::InvalidInput(_))));
    req = delhi_request();
    req.latitude = -91.0;
    assert!(compute_chart(&oracle, &req).is_err());
    assert_eq!(oracle.calls(), 0);
}

#[test]
fn d1_matches_the_chart_and_ascendant_is_everywhere() {
    let c = chart();
    let set = divisional_charts(&c, &[]).unwrap();
    assert_eq!(set.charts.len(), 7);
    assert_eq!(set.primary_charts, vec![Varga::D1, Varga::D9, Varga::D10]);

    let d1 = &set.charts[&Varga::D1];
    for p in &c.planets {
        let e = d1.position(p.name).unwrap();
        assert_eq!(e.sign, p.sign);
        assert!((e.degree.unwrap() - p.norm_degree).abs() < 1e-9);
        assert!(e.division.is_none());
    }
    for chart in set.charts.values() {
        assert_eq!(chart.positions.len(), 10);
        assert_eq!(chart.positions[ASCENDANT_KEY].sign, chart.ascendant_sign);
    }
}

#[test]
fn hora_is_sun_or_moon() {
    let c = chart();
    let d2 = divisional_chart(&c, Varga::D2).unwrap();
    for e in d2.positions.values() {
        match e.sign {
            Rashi::Leo => assert_eq!(e.hora, Some(Graha::Sun)),
            Rashi::Cancer => assert_eq!(e.hora, Some(Graha::Moon)),
            other => panic!("D2 placed a body in {other}"),
        }
    }
    // Sun at 0.5° Taurus: even sign, first half → Cancer
    assert_eq!(d2.position(Graha::Sun).unwrap().sign, Rashi::Cancer);
}

#[test]
fn dasha_from_chart_moon() {
    let c = chart();
    let r = dasha_report(&c, 100.0, c.jd_utc + 1.0).unwrap();
    assert_eq!(r.birth_nakshatra, Nakshatra::Ashwini);
    assert_eq!(r.nakshatra_lord, Graha::Ketu);
    assert!((r.balance_years - 1.75).abs() < 1e-6);
    assert_eq!(r.mahadashas[0].start_jd, c.jd_utc);
    assert_eq!(r.mahadashas[0].start_date, "1990-05-15");
    assert_eq!(r.current_mahadasha, Some(Graha::Ketu));
    for m in &r.mahadashas {
        assert_eq!(m.antardashas.len(), 9);
        assert_eq!(m.antardashas[0].planet, m.planet);
    }
    assert!(dasha_report(&c, 0.0, c.jd_utc).is_err());
}

#[test]
fn yogas_from_chart() {
    // Jupiter 95° is exalted in Cancer; Moon 10° in Aries
    let report = chart_yogas(&chart()).unwrap();
    assert_eq!(report.placements.len(), 9);
    assert_eq!(report.summary.total_yogas, report.yogas.len());
    let jupiter = report
        .placements
        .iter()
        .find(|p| p.graha == Graha::Jupiter)
        .unwrap();
    assert!(jupiter.is_exalted);
    // Moon → Jupiter is four signs: Gaja Kesari
    assert!(report.yogas.iter().any(|y| y.name.contains("Gaja Kesari")));
}

#[test]
fn same_birth_matches_itself() {
    let oracle = FixedOracle::new(AyanamshaSystem::Lahiri);
    let bride = PersonRequest::new("A", delhi_request());
    let groom = PersonRequest::new("B", delhi_request());
    let r = match_people(&oracle, &bride, &groom).unwrap();
    assert_eq!(r.total_score, 28.0);
    let koot = |name: &str| r.koots.iter().find(|k| k.name == name).unwrap().score;
    assert_eq!(koot("Nadi"), 0.0);
    assert_eq!(koot("Yoni"), 4.0);
    assert_eq!(r.bride.name, "A");
    // only the Moon is observed per person
    assert_eq!(oracle.calls(), 2);
}

#[test]
fn static_sky_conjoins_every_natal_body() {
    let oracle = FixedOracle::new(AyanamshaSystem::Lahiri);
    let natal = compute_chart(&oracle, &delhi_request()).unwrap();
    let r = transit_report(&oracle, &natal, natal.jd_utc, &AspectOrbs::default()).unwrap();
    assert_eq!(r.current_positions.len(), 9);
    for g in ALL_GRAHAS {
        assert!(r.active_transits.iter().any(|t| t.transit_planet == g
            && t.natal_planet == g
            && t.aspect == AspectKind::Conjunction
            && t.exactness == 1.0));
    }
    let first = &r.active_transits[0];
    assert_eq!(first.significance, Significance::Critical);
    assert_eq!(r.summary.total_aspects, r.active_transits.len());
    let ranks: Vec<_> = r.active_transits.iter().map(|t| t.significance).collect();
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn panchang_from_sun_and_moon() {
    let oracle = FixedOracle::new(AyanamshaSystem::Lahiri)
        .with(Body::Sun, 100.0, 1.0)
        .with(Body::Moon, 100.5, 13.0);
    let req = PanchangRequest {
        year: 2000,
        month: 1,
        day: 1,
        latitude: 28.6,
        longitude: 77.2,
        timezone: 5.5,
        ayanamsha: AyanamshaSystem::Lahiri,
    };
    let p = panchang_report(&oracle, &req).unwrap();
    assert_eq!(p.tithi.tithi, Tithi::ShuklaPratipada);
    assert_eq!(p.sun_sign, Rashi::Cancer);
    assert_eq!(p.date, "2000-01-01");
    assert!((p.jd_utc - 2_451_545.0).abs() < 1e-9);
    assert_eq!(p.sun_times.sunrise.len(), 5);
}

#[test]
fn horoscope_for_all_signs() {
    let oracle = FixedOracle::new(AyanamshaSystem::Lahiri);
    let all = all_sign_horoscopes(&oracle, 2024, 6, 1, AyanamshaSystem::Lahiri).unwrap();
    assert_eq!(all.len(), 12);
    for h in &all {
        assert_eq!(h.transits.len(), 9);
        for r in [h.ratings.overall, h.ratings.career, h.ratings.love, h.ratings.health] {
            assert!((1..=5).contains(&r));
        }
    }
    let leo = sign_horoscope(&oracle, Rashi::Leo, 2024, 6, 1, AyanamshaSystem::Lahiri).unwrap();
    assert_eq!(leo, all[4]);
}
