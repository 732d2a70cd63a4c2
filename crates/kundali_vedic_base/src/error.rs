//! Error type for Vedic rule computations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Longitude is non-finite or outside [0, 360).
    #[error("invalid longitude {0}: expected a finite value in [0, 360)")]
    InvalidLongitude(f64),
    /// Any other rejected argument.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Ayanamsha system name not recognised.
    #[error("unknown ayanamsha system '{0}'")]
    UnknownAyanamsha(String),
    /// An intermediate value became NaN or infinite.
    #[error("calculation diverged: {0}")]
    CalculationDivergence(String),
}
