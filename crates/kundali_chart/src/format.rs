//! Output rounding and date rendering shared by the reports.

use kundali_time::UtcTime;

use crate::error::ChartError;

/// Round to `places` decimals, half away from zero.
pub(crate) fn round_dp(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// `YYYY-MM-DD` of a UTC Julian date.
pub(crate) fn utc_date(jd: f64) -> Result<String, ChartError> {
    Ok(UtcTime::from_jd(jd)?.date_string())
}

/// Julian date of 12:00 UTC on a civil date.
pub(crate) fn noon_utc_jd(year: i32, month: u32, day: u32) -> Result<f64, ChartError> {
    Ok(UtcTime::try_new(year, month, day, 12, 0, 0.0)?.to_jd())
}
