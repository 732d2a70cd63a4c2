//! Panchang elements for one instant.
//!
//! Everything derives from the sidereal Sun and Moon plus the weekday:
//! tithi and karana from the elongation, yoga from the longitude sum, and
//! the Moon's nakshatra. Ritu and sunrise/sunset are coarse civil
//! approximations and do not touch the ephemeris.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::nakshatra::{NAKSHATRA_SPAN, Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::{check_longitude, normalize_360};

const TITHI_SPAN: f64 = 12.0;
const KARANA_SPAN: f64 = 6.0;

/// Lunar day, 30 per synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

pub const ALL_TITHIS: [Tithi; 30] = {
    use Tithi::*;
    [
        ShuklaPratipada, ShuklaDwitiya, ShuklaTritiya, ShuklaChaturthi, ShuklaPanchami,
        ShuklaShashthi, ShuklaSaptami, ShuklaAshtami, ShuklaNavami, ShuklaDashami,
        ShuklaEkadashi, ShuklaDwadashi, ShuklaTrayodashi, ShuklaChaturdashi, Purnima,
        KrishnaPratipada, KrishnaDwitiya, KrishnaTritiya, KrishnaChaturthi, KrishnaPanchami,
        KrishnaShashthi, KrishnaSaptami, KrishnaAshtami, KrishnaNavami, KrishnaDashami,
        KrishnaEkadashi, KrishnaDwadashi, KrishnaTrayodashi, KrishnaChaturdashi, Amavasya,
    ]
};

const TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

impl Tithi {
    /// 0-based index 0..=29.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Name without the paksha prefix; the 30th is Amavasya.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Amavasya => "Amavasya",
            _ => TITHI_NAMES[self as usize % 15],
        }
    }

    pub const fn paksha(self) -> Paksha {
        if (self as u8) < 15 { Paksha::Shukla } else { Paksha::Krishna }
    }

    /// 1..=15 within the paksha.
    pub const fn number_in_paksha(self) -> u8 {
        self as u8 % 15 + 1
    }
}

impl fmt::Display for Tithi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    #[serde(rename = "Shukla Paksha")]
    Shukla,
    #[serde(rename = "Krishna Paksha")]
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla Paksha",
            Self::Krishna => "Krishna Paksha",
        }
    }
}

/// Luni-solar yoga (Sun + Moon), distinct from chart yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YogaName {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shoola,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGA_NAMES: [YogaName; 27] = {
    use YogaName::*;
    [
        Vishkambha, Priti, Ayushman, Saubhagya, Shobhana, Atiganda, Sukarma, Dhriti, Shoola,
        Ganda, Vriddhi, Dhruva, Vyaghata, Harshana, Vajra, Siddhi, Vyatipata, Variyan, Parigha,
        Shiva, Siddha, Sadhya, Shubha, Shukla, Brahma, Indra, Vaidhriti,
    ]
};

impl YogaName {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> String {
        format!("{self:?}")
    }
}

/// Half-tithi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    /// Karana for a half-tithi slot 0..=59 of the synodic month.
    ///
    /// Slot 0 is Kimstughna, 1..=56 cycle the movable seven, and the last
    /// three are the fixed Shakuni, Chatushpada and Naga.
    pub const fn from_slot(slot: u8) -> Self {
        match slot {
            0 => Self::Kimstughna,
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            59 => Self::Naga,
            s => MOVABLE_KARANAS[((s - 1) % 7) as usize],
        }
    }

    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

/// Weekday, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vara {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

impl Vara {
    /// 0 = Sunday.
    pub const fn from_weekday(weekday: u8) -> Self {
        match weekday % 7 {
            0 => Self::Ravivara,
            1 => Self::Somavara,
            2 => Self::Mangalavara,
            3 => Self::Budhavara,
            4 => Self::Guruvara,
            5 => Self::Shukravara,
            _ => Self::Shanivara,
        }
    }

    pub fn from_jd(jd: f64) -> Self {
        Self::from_weekday(kundali_time::weekday_from_jd(jd))
    }
}

/// Season by civil month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ritu {
    #[serde(rename = "Vasanta (Spring)")]
    Vasanta,
    #[serde(rename = "Grishma (Summer)")]
    Grishma,
    #[serde(rename = "Varsha (Monsoon)")]
    Varsha,
    #[serde(rename = "Sharad (Autumn)")]
    Sharad,
    #[serde(rename = "Hemanta (Pre-Winter)")]
    Hemanta,
    #[serde(rename = "Shishira (Winter)")]
    Shishira,
}

impl Ritu {
    pub const fn from_month(month: u32) -> Self {
        match month {
            3 | 4 => Self::Vasanta,
            5 | 6 => Self::Grishma,
            7 | 8 => Self::Varsha,
            9 | 10 => Self::Sharad,
            11 | 12 => Self::Hemanta,
            _ => Self::Shishira,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TithiInfo {
    pub tithi: Tithi,
    /// 1..=30.
    pub number: u8,
    pub paksha: Paksha,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonNakshatra {
    pub nakshatra: Nakshatra,
    /// 1..=27.
    pub number: u8,
    pub pada: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YogaInfo {
    pub yoga: YogaName,
    /// 1..=27.
    pub number: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// Half-tithi slot 1..=60.
    pub number: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanchangInfo {
    pub vara: Vara,
    pub tithi: TithiInfo,
    pub nakshatra: MoonNakshatra,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub sun_rashi: Rashi,
    pub moon_rashi: Rashi,
    /// Moon minus Sun, [0, 360).
    pub elongation: f64,
}

/// Panchang from sidereal Sun and Moon longitudes at `jd_utc`.
pub fn panchang_at(sun_sid: f64, moon_sid: f64, jd_utc: f64) -> Result<PanchangInfo, VedicError> {
    let sun = check_longitude(sun_sid)?;
    let moon = check_longitude(moon_sid)?;
    if !jd_utc.is_finite() {
        return Err(VedicError::InvalidInput(format!("julian date {jd_utc}")));
    }

    let elongation = normalize_360(moon - sun);
    let tithi_idx = ((elongation / TITHI_SPAN).floor() as usize).min(29);
    let tithi = ALL_TITHIS[tithi_idx];

    let yoga_idx = ((normalize_360(sun + moon) / NAKSHATRA_SPAN).floor() as usize).min(26);
    let karana_slot = ((elongation / KARANA_SPAN).floor() as u8).min(59);
    let nak = nakshatra_from_longitude(moon);

    Ok(PanchangInfo {
        vara: Vara::from_jd(jd_utc),
        tithi: TithiInfo {
            tithi,
            number: tithi.index() + 1,
            paksha: tithi.paksha(),
        },
        nakshatra: MoonNakshatra {
            nakshatra: nak.nakshatra,
            number: nak.nakshatra.number(),
            pada: nak.pada,
        },
        yoga: YogaInfo {
            yoga: ALL_YOGA_NAMES[yoga_idx],
            number: yoga_idx as u8 + 1,
        },
        karana: KaranaInfo {
            karana: Karana::from_slot(karana_slot),
            number: karana_slot + 1,
        },
        sun_rashi: rashi_from_longitude(sun).rashi,
        moon_rashi: rashi_from_longitude(moon).rashi,
        elongation,
    })
}

/// Local clock times as `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
}

fn hours_to_clock(h: f64) -> String {
    let minutes = (h.rem_euclid(24.0) * 60.0).round() as u32 % 1440;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Sunrise and sunset from a sinusoidal declination model.
///
/// Accurate to a few minutes at mid latitudes; polar day and night clamp
/// to a full or empty day.
pub fn approximate_sun_times(
    day_of_year: u32,
    latitude_deg: f64,
    longitude_deg: f64,
    tz_hours: f64,
) -> SunTimes {
    let declination = 23.45 * (360.0 / 365.0 * (day_of_year as f64 - 81.0)).to_radians().sin();
    let cos_h = (-latitude_deg.to_radians().tan() * declination.to_radians().tan()).clamp(-1.0, 1.0);
    let half_day = cos_h.acos().to_degrees() / 15.0;
    let solar_noon = 12.0 - longitude_deg / 15.0 + tz_hours;
    SunTimes {
        sunrise: hours_to_clock(solar_noon - half_day),
        sunset: hours_to_clock(solar_noon + half_day),
    }
}
