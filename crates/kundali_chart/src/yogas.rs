//! Yoga detection over a computed chart.

use kundali_vedic_base::{YogaInput, YogaReport, detect_yogas};
use tracing::debug;

use crate::chart::BirthChart;
use crate::error::ChartError;

pub fn yoga_input(chart: &BirthChart) -> YogaInput {
    chart
        .longitudes()
        .fold(YogaInput::new(chart.ascendant.longitude), |input, (g, lon)| {
            input.with(g, lon)
        })
}

pub fn chart_yogas(chart: &BirthChart) -> Result<YogaReport, ChartError> {
    let report = detect_yogas(&yoga_input(chart))?;
    debug!(yogas = report.summary.total_yogas, "yogas detected");
    Ok(report)
}
