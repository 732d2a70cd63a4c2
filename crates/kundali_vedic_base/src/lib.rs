//! Sidereal Vedic rules over ecliptic longitudes.
//!
//! Everything here is a pure function of sidereal longitudes and Julian
//! dates. Ephemeris access lives in `kundali_core`; assembling full charts
//! lives in `kundali_chart`.
//!
//! - [`ayanamsha`]: tropical → sidereal correction
//! - [`rashi`], [`nakshatra`], [`graha`], [`dignity`]: lookup tables
//! - [`lunar_nodes`], [`lagna`], [`bhava`]: Rahu/Ketu, ascendant, whole-sign houses
//! - [`amsha`]: divisional charts
//! - [`dasha`]: Vimshottari timeline
//! - [`yoga`], [`ashtakoot`], [`aspect`], [`sign_transit`], [`panchang`]

pub mod amsha;
pub mod ashtakoot;
pub mod ashtakoot_data;
pub mod aspect;
pub mod ayanamsha;
pub mod bhava;
pub mod dasha;
pub mod dignity;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;
pub mod sign_transit;
pub mod util;
pub mod yoga;
pub mod yoga_types;

pub use amsha::{ALL_VARGAS, AmshaPosition, PRIMARY_VARGAS, Varga, amsha_position};
pub use ashtakoot::{
    ASHTAKOOT_MAX_SCORE, CompatibilityReport, KootResult, PersonMoon, PersonSummary, Verdict,
    ashtakoot_match,
};
pub use ashtakoot_data::{Gana, Nadi, Varna, Vashya, Yoni};
pub use aspect::{
    ALL_ASPECTS, AspectKind, AspectMatch, AspectNature, AspectOrbs, Significance, TransitTone,
    find_aspect, significance_for, significations, transit_effect,
};
pub use ayanamsha::{ALL_AYANAMSHA_SYSTEMS, AyanamshaSystem, ayanamsha_deg, tropical_to_sidereal};
pub use bhava::{House, house_of, whole_sign_houses};
pub use dasha::{
    CurrentDasha, DEFAULT_HORIZON_YEARS, DashaLevel, DashaPeriod, DashaTimeline, MAX_HORIZON_YEARS,
    Mahadasha, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, current_periods, vimshottari_timeline,
    vimshottari_years,
};
pub use dignity::{
    Relationship, debilitation_rashi, exaltation_rashi, is_debilitated, is_exalted, is_own_sign,
    natural_relationship, own_signs,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use lagna::{Angles, ascendant_and_mc_deg, lagna_from_lst_rad, mc_from_lst_rad};
pub use lunar_nodes::{LunarNodes, MEAN_NODE_SPEED_DEG_PER_DAY, mean_rahu_tropical_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use panchang::{
    Karana, KaranaInfo, MoonNakshatra, PanchangInfo, Paksha, Ritu, SunTimes, Tithi, TithiInfo,
    Vara, YogaInfo, YogaName, approximate_sun_times, panchang_at,
};
pub use rashi::{ALL_RASHIS, Dms, Element, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use sign_transit::{Ratings, SignAspect, SignTransit, sign_aspect, sign_ratings};
pub use util::{angular_separation, check_longitude, normalize_360, sign_count};
pub use yoga::{YogaInput, YogaPlacement, YogaReport, YogaSummary, detect_yogas};
pub use yoga_types::{StrengthCounts, Yoga, YogaCategory, YogaStrength};
