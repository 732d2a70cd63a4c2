//! Birth-chart pipeline over an ephemeris oracle.
//!
//! A [`ChartRequest`] (wall-clock birth time, place, ayanamsha) becomes a
//! [`BirthChart`]: nine sidereal graha positions, the ascendant and twelve
//! whole-sign houses. Every derived report (divisional charts, dasha,
//! yogas, transits) is built from a chart, so the oracle is queried once
//! per chart.
//!
//! Functions take the oracle as `&dyn Ephemeris`. The [`convenience`]
//! wrappers use the process-wide oracle installed through [`global::init`].
//!
//! ```rust,no_run
//! use kundali_chart::{ChartRequest, global};
//!
//! global::init(Default::default())?;
//! let request = ChartRequest::new(1990, 5, 15, 10, 30, 28.6139, 77.2090, 5.5);
//! let chart = kundali_chart::chart(&request)?;
//! println!("{}", chart.ascendant.sign);
//! # Ok::<(), kundali_chart::ChartError>(())
//! ```

pub mod chart;
pub mod convenience;
pub mod dasha;
pub mod divisional;
pub mod error;
mod format;
pub mod global;
pub mod horoscope;
pub mod matching;
pub mod panchang;
pub mod positions;
pub mod request;
pub mod transits;
pub mod yogas;

pub use chart::{Ascendant, BirthChart, chart_at, compute_chart};
pub use convenience::{
    chart, compatibility, dasha, divisional, horoscope, panchang, transits, yogas,
};
pub use dasha::{AntardashaEntry, DashaReport, MahadashaEntry, dasha_report, dasha_report_from_timeline};
pub use divisional::{
    ASCENDANT_KEY, DivisionalChart, DivisionalCharts, DivisionalEntry, divisional_chart,
    divisional_charts,
};
pub use error::ChartError;
pub use global::{init, init_with, is_initialized};
pub use horoscope::{SignHoroscope, all_sign_horoscopes, horoscope_from_states, sign_horoscope};
pub use matching::{match_people, person_moon};
pub use panchang::{PanchangReport, PanchangRequest, panchang_report};
pub use positions::{GrahaState, PlanetPosition, body_of, moon_longitude, sidereal_states};
pub use request::{ChartRequest, PersonRequest};
pub use transits::{ActiveTransit, TransitReport, TransitSummary, aspects_between, transit_report};
pub use yogas::{chart_yogas, yoga_input};
