//! Process-wide oracle slot.
//!
//! Set once at startup with [`init`] or [`init_with`]; read-only afterwards.
//! Callers that manage their own oracle pass `&dyn Ephemeris` to the
//! pipeline functions directly and never touch this module.

use std::sync::OnceLock;

use kundali_core::{AnalyticEphemeris, Ephemeris, EphemerisConfig};
use tracing::info;

use crate::error::ChartError;

static ORACLE: OnceLock<Box<dyn Ephemeris>> = OnceLock::new();

/// Build the analytic oracle from `config` and install it.
pub fn init(config: EphemerisConfig) -> Result<(), ChartError> {
    if is_initialized() {
        return Err(already_initialized());
    }
    let oracle = AnalyticEphemeris::new(config)?;
    init_with(Box::new(oracle))
}

/// Install a caller-built oracle.
pub fn init_with(oracle: Box<dyn Ephemeris>) -> Result<(), ChartError> {
    let name = oracle.name().to_string();
    ORACLE.set(oracle).map_err(|_| already_initialized())?;
    info!(oracle = %name, "oracle initialized");
    Ok(())
}

pub fn is_initialized() -> bool {
    ORACLE.get().is_some()
}

/// The installed oracle, or `EphemerisUnavailable` before [`init`].
pub fn oracle() -> Result<&'static dyn Ephemeris, ChartError> {
    ORACLE
        .get()
        .map(|b| b.as_ref())
        .ok_or_else(|| ChartError::EphemerisUnavailable("oracle not initialized".into()))
}

fn already_initialized() -> ChartError {
    ChartError::InvalidInput("oracle already initialized".into())
}
