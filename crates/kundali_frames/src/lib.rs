//! Ecliptic frame helpers for chart computations.
//!
//! Precession of the equinox, obliquity of the ecliptic, the Delaunay
//! fundamental arguments and Cartesian ↔ spherical conversion. All angles
//! are in degrees unless a function name says otherwise.

pub mod fundamental;
pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use fundamental::{MEAN_NODE_RATE_DEG_PER_DAY, DelaunayArgs, delaunay_args, mean_lunar_node_deg};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use precession::{
    PRECESSION_RATE_ARCSEC_PER_YEAR, general_precession_longitude_arcsec,
    general_precession_longitude_deg,
};
pub use spherical::{EclipticCoords, cartesian_to_spherical, normalize_deg};
