//! Oracle error types.

use thiserror::Error;

/// Errors raised by an [`crate::Ephemeris`] implementation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The oracle cannot answer for this instant (not loaded, out of range).
    #[error("ephemeris unavailable: {0}")]
    Unavailable(String),
    /// The requested body is not served by this oracle.
    #[error("unknown body: {0}")]
    UnknownBody(String),
    /// An iterative solution failed or produced non-finite output.
    #[error("calculation diverged: {0}")]
    Divergence(String),
    /// Oracle configuration rejected at construction time.
    #[error("invalid ephemeris config: {0}")]
    InvalidConfig(&'static str),
}
