//! Sign dignities and natural friendship.
//!
//! Exaltation and debilitation are tracked at sign granularity only; the
//! exact exaltation degree is not used by any rule in this crate.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::rashi::{ALL_RASHIS, Rashi};

/// Exaltation sign. Returns None for Rahu/Ketu.
///
/// Sun Aries, Moon Taurus, Mars Capricorn, Mercury Virgo,
/// Jupiter Cancer, Venus Pisces, Saturn Libra.
pub const fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Sun => Some(Rashi::Aries),
        Graha::Moon => Some(Rashi::Taurus),
        Graha::Mars => Some(Rashi::Capricorn),
        Graha::Mercury => Some(Rashi::Virgo),
        Graha::Jupiter => Some(Rashi::Cancer),
        Graha::Venus => Some(Rashi::Pisces),
        Graha::Saturn => Some(Rashi::Libra),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation sign: the 7th from exaltation. Returns None for Rahu/Ketu.
pub const fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    match exaltation_rashi(graha) {
        Some(r) => Some(r.offset(6)),
        None => None,
    }
}

pub fn is_exalted(graha: Graha, rashi: Rashi) -> bool {
    exaltation_rashi(graha) == Some(rashi)
}

pub fn is_debilitated(graha: Graha, rashi: Rashi) -> bool {
    debilitation_rashi(graha) == Some(rashi)
}

/// Signs lorded by `graha`. Empty for the nodes.
pub fn own_signs(graha: Graha) -> Vec<Rashi> {
    ALL_RASHIS.into_iter().filter(|r| r.lord() == graha).collect()
}

pub fn is_own_sign(graha: Graha, rashi: Rashi) -> bool {
    !graha.is_node() && rashi.lord() == graha
}

/// Natural (naisargika) relationship of one graha towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Friend,
    Neutral,
    Enemy,
}

/// How `graha` regards `other` in the natural friendship table.
///
/// The table is not symmetric: Moon has no enemies but Mercury treats the
/// Moon as one. Any pairing with a node, and a graha with itself, is Neutral.
pub const fn natural_relationship(graha: Graha, other: Graha) -> Relationship {
    use Graha::*;
    use Relationship::*;

    match (graha, other) {
        (Sun, Moon | Mars | Jupiter) => Friend,
        (Sun, Venus | Saturn) => Enemy,

        (Moon, Sun | Mercury) => Friend,

        (Mars, Sun | Moon | Jupiter) => Friend,
        (Mars, Mercury) => Enemy,

        (Mercury, Sun | Venus) => Friend,
        (Mercury, Moon) => Enemy,

        (Jupiter, Sun | Moon | Mars) => Friend,
        (Jupiter, Mercury | Venus) => Enemy,

        (Venus, Mercury | Saturn) => Friend,
        (Venus, Sun | Moon) => Enemy,

        (Saturn, Mercury | Venus) => Friend,
        (Saturn, Sun | Moon | Mars) => Enemy,

        _ => Neutral,
    }
}
