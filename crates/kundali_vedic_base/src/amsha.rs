//! Divisional (varga) charts.
//!
//! Each varga divides the 30° rashi into N equal parts and maps each part
//! to a target rashi. Mapping rules by chart:
//!
//! - D1: identity
//! - D2: odd rashi → Leo, Cancer; even rashi → Cancer, Leo
//! - D3: natal, +4, +8 (trines)
//! - D7: odd starts at natal, even at natal + 6
//! - D9: start by element: Fire Aries, Earth Capricorn, Air Libra, Water Cancer
//! - D10: odd starts at natal, even at natal + 8
//! - D12: start at natal

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;
use crate::rashi::{Element, Rashi, rashi_from_longitude};
use crate::util::check_longitude;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Varga {
    D1,
    D2,
    D3,
    D7,
    D9,
    D10,
    D12,
}

pub const ALL_VARGAS: [Varga; 7] = [
    Varga::D1,
    Varga::D2,
    Varga::D3,
    Varga::D7,
    Varga::D9,
    Varga::D10,
    Varga::D12,
];

/// The charts read first: rashi, navamsa, dasamsa.
pub const PRIMARY_VARGAS: [Varga; 3] = [Varga::D1, Varga::D9, Varga::D10];

impl Varga {
    /// Number of parts each rashi is divided into.
    pub const fn divisions(self) -> u8 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D3 => "D3",
            Self::D7 => "D7",
            Self::D9 => "D9",
            Self::D10 => "D10",
            Self::D12 => "D12",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D7 => "Saptamsa",
            Self::D9 => "Navamsa",
            Self::D10 => "Dasamsa",
            Self::D12 => "Dwadasamsa",
        }
    }

    /// Life area the chart is read for.
    pub const fn purpose(self) -> &'static str {
        match self {
            Self::D1 => "Physical body, general life",
            Self::D2 => "Wealth and prosperity",
            Self::D3 => "Siblings and courage",
            Self::D7 => "Children and progeny",
            Self::D9 => "Marriage, spouse, dharma, soul purpose",
            Self::D10 => "Career and profession",
            Self::D12 => "Parents and ancestors",
        }
    }
}

impl fmt::Display for Varga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Varga {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_VARGAS
            .into_iter()
            .find(|v| v.code().eq_ignore_ascii_case(wanted) || v.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| VedicError::InvalidInput(format!("unknown divisional chart '{wanted}'")))
    }
}

/// A longitude placed in one varga.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmshaPosition {
    pub varga: Varga,
    pub rashi: Rashi,
    /// Degrees within the natal sign; D1 only.
    pub degree_in_sign: Option<f64>,
    /// 1-based part of the natal sign; every chart except D1.
    pub division: Option<u8>,
}

impl AmshaPosition {
    pub fn lord(&self) -> Graha {
        self.rashi.lord()
    }
}

/// Odd rashi starts at natal, even rashi at natal + `even_offset`.
fn increment_start(natal: Rashi, div_idx: u8, even_offset: i32) -> Rashi {
    let start = if natal.is_odd() { natal } else { natal.offset(even_offset) };
    start.offset(div_idx as i32)
}

fn target_rashi(varga: Varga, natal: Rashi, div_idx: u8) -> Rashi {
    match varga {
        Varga::D1 => natal,
        Varga::D2 => match (natal.is_odd(), div_idx) {
            (true, 0) | (false, 1) => Rashi::Leo,
            _ => Rashi::Cancer,
        },
        Varga::D3 => natal.offset(div_idx as i32 * 4),
        Varga::D7 => increment_start(natal, div_idx, 6),
        Varga::D9 => {
            let start = match natal.element() {
                Element::Fire => Rashi::Aries,
                Element::Earth => Rashi::Capricorn,
                Element::Air => Rashi::Libra,
                Element::Water => Rashi::Cancer,
            };
            start.offset(div_idx as i32)
        }
        Varga::D10 => increment_start(natal, div_idx, 8),
        Varga::D12 => natal.offset(div_idx as i32),
    }
}

/// Place a sidereal longitude in a divisional chart.
///
/// Longitudes outside [0, 360) are rejected rather than wrapped.
pub fn amsha_position(sidereal_lon_deg: f64, varga: Varga) -> Result<AmshaPosition, VedicError> {
    let lon = check_longitude(sidereal_lon_deg)?;
    let info = rashi_from_longitude(lon);
    let n = varga.divisions();
    // multiply before dividing so 10°, 20° in D3 land on exact boundaries
    let div_idx = ((info.degrees_in_rashi * n as f64 / 30.0).floor() as u8).min(n - 1);
    let rashi = target_rashi(varga, info.rashi, div_idx);

    Ok(match varga {
        Varga::D1 => AmshaPosition {
            varga,
            rashi,
            degree_in_sign: Some(info.degrees_in_rashi),
            division: None,
        },
        _ => AmshaPosition {
            varga,
            rashi,
            degree_in_sign: None,
            division: Some(div_idx + 1),
        },
    })
}
