use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_chart::{
    ChartRequest, chart_yogas, compute_chart, dasha_report, divisional_charts, sidereal_states,
    transit_report,
};
use kundali_core::{AnalyticEphemeris, EphemerisConfig};
use kundali_vedic_base::{AspectOrbs, AyanamshaSystem};

fn pipeline_bench(c: &mut Criterion) {
    let Ok(oracle) = AnalyticEphemeris::new(EphemerisConfig::default()) else {
        eprintln!("Skipping: analytic oracle rejected the default config");
        return;
    };
    let request = ChartRequest::new(1990, 5, 15, 10, 30, 28.6139, 77.2090, 5.5);
    let Ok(chart) = compute_chart(&oracle, &request) else {
        eprintln!("Skipping: chart failed");
        return;
    };

    let mut group = c.benchmark_group("pipeline");
    group.bench_function("sidereal_states", |b| {
        b.iter(|| sidereal_states(&oracle, black_box(chart.jd_utc), AyanamshaSystem::Lahiri))
    });
    group.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(&oracle, black_box(&request)))
    });
    group.finish();

    let mut group = c.benchmark_group("reports");
    group.bench_function("divisional_all", |b| {
        b.iter(|| divisional_charts(black_box(&chart), &[]))
    });
    group.bench_function("dasha_100y", |b| {
        b.iter(|| dasha_report(black_box(&chart), 100.0, chart.jd_utc + 3650.0))
    });
    group.bench_function("yogas", |b| b.iter(|| chart_yogas(black_box(&chart))));
    group.bench_function("transits", |b| {
        b.iter(|| transit_report(&oracle, black_box(&chart), chart.jd_utc + 9000.0, &AspectOrbs::default()))
    });
    group.finish();
}

criterion_group!(benches, pipeline_bench);
criterion_main!(benches);
