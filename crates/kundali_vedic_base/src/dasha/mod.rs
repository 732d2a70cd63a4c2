//! Vimshottari dasha (planetary periods).
//!
//! A 120-year cycle of nine lords. The first mahadasha is the lord of the
//! Moon's birth nakshatra, shortened by how far the Moon has already
//! travelled through it. Every mahadasha splits into nine antardashas that
//! start from its own lord.

pub mod balance;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::nakshatra_birth_balance;
pub use query::{CurrentDasha, current_periods};
pub use subperiod::{proportional_children, snap_last_child_end};
pub use types::{DashaLevel, DashaPeriod, DashaTimeline, Mahadasha};
pub use vimshottari::{
    DEFAULT_HORIZON_YEARS, MAX_HORIZON_YEARS, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS,
    vimshottari_timeline, vimshottari_years,
};
