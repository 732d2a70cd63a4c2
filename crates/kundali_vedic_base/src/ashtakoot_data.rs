//! Lookup tables for Ashtakoot matching.
//!
//! Nakshatra tables are indexed by 0-based nakshatra index, rashi tables
//! by 0-based rashi index.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;

macro_rules! named_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

named_enum!(
    /// Varna of a rashi, ranked Brahmin (1) to Shudra (4).
    Varna { Brahmin, Kshatriya, Vaishya, Shudra }
);

impl Varna {
    /// 1 = Brahmin … 4 = Shudra.
    pub const fn rank(self) -> u8 {
        self as u8 + 1
    }
}

named_enum!(
    /// Vashya (control) category of a rashi.
    Vashya { Chatushpada, Vanachara, Keet, Jalchar, Manava }
);

named_enum!(
    /// Yoni (animal) of a nakshatra.
    Yoni {
        Horse, Elephant, Sheep, Snake, Dog, Cat, Rat, Cow, Buffalo, Tiger, Deer, Monkey,
        Mongoose, Lion,
    }
);

named_enum!(
    /// Gana (temperament) of a nakshatra.
    Gana { Deva, Manushya, Rakshasa }
);

named_enum!(
    /// Nadi (constitution) of a nakshatra.
    Nadi { Vata, Pitta, Kapha }
);

const RASHI_VARNA: [Varna; 12] = {
    use Varna::*;
    [
        Kshatriya, Vaishya, Shudra, Brahmin, Kshatriya, Vaishya, Shudra, Brahmin, Kshatriya,
        Vaishya, Shudra, Brahmin,
    ]
};

const RASHI_VASHYA: [Vashya; 12] = {
    use Vashya::*;
    [
        Chatushpada, // Aries
        Chatushpada, // Taurus
        Manava,      // Gemini
        Keet,        // Cancer
        Vanachara,   // Leo
        Manava,      // Virgo
        Manava,      // Libra
        Keet,        // Scorpio
        Chatushpada, // Sagittarius
        Chatushpada, // Capricorn
        Manava,      // Aquarius
        Jalchar,     // Pisces
    ]
};

const NAKSHATRA_YONI: [Yoni; 27] = {
    use Yoni::*;
    [
        Horse, Elephant, Sheep, Snake, Snake, // 1-5
        Dog, Cat, Sheep, Cat, Rat, // 6-10
        Rat, Cow, Buffalo, Tiger, Buffalo, // 11-15
        Tiger, Deer, Deer, Dog, Monkey, // 16-20
        Mongoose, Monkey, Lion, Horse, Lion, // 21-25
        Cow, Elephant, // 26-27
    ]
};

/// Sworn-enemy yoni pairs.
pub const YONI_ENEMIES: [(Yoni, Yoni); 7] = [
    (Yoni::Horse, Yoni::Buffalo),
    (Yoni::Elephant, Yoni::Lion),
    (Yoni::Sheep, Yoni::Monkey),
    (Yoni::Snake, Yoni::Mongoose),
    (Yoni::Dog, Yoni::Deer),
    (Yoni::Cat, Yoni::Rat),
    (Yoni::Tiger, Yoni::Cow),
];

const NAKSHATRA_GANA: [Gana; 27] = {
    use Gana::*;
    [
        Deva, Manushya, Rakshasa, Manushya, Deva, // 1-5
        Manushya, Deva, Deva, Rakshasa, Rakshasa, // 6-10
        Manushya, Manushya, Deva, Rakshasa, Deva, // 11-15
        Rakshasa, Deva, Rakshasa, Rakshasa, Manushya, // 16-20
        Manushya, Deva, Rakshasa, Rakshasa, Manushya, // 21-25
        Manushya, Deva, // 26-27
    ]
};

const NAKSHATRA_NADI: [Nadi; 27] = {
    use Nadi::*;
    [
        Vata, Pitta, Kapha, Kapha, Pitta, // 1-5
        Vata, Vata, Pitta, Kapha, Kapha, // 6-10
        Pitta, Vata, Vata, Pitta, Kapha, // 11-15
        Kapha, Pitta, Vata, Vata, Pitta, // 16-20
        Kapha, Kapha, Pitta, Vata, Vata, // 21-25
        Pitta, Kapha, // 26-27
    ]
};

pub const fn varna_of(rashi: Rashi) -> Varna {
    RASHI_VARNA[rashi.index() as usize]
}

pub const fn vashya_of(rashi: Rashi) -> Vashya {
    RASHI_VASHYA[rashi.index() as usize]
}

pub const fn yoni_of(nakshatra: Nakshatra) -> Yoni {
    NAKSHATRA_YONI[nakshatra.index() as usize]
}

pub const fn gana_of(nakshatra: Nakshatra) -> Gana {
    NAKSHATRA_GANA[nakshatra.index() as usize]
}

pub const fn nadi_of(nakshatra: Nakshatra) -> Nadi {
    NAKSHATRA_NADI[nakshatra.index() as usize]
}

pub fn yonis_are_enemies(a: Yoni, b: Yoni) -> bool {
    YONI_ENEMIES
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::ALL_NAKSHATRAS;

    #[test]
    fn varna_ranks() {
        assert_eq!(varna_of(Rashi::Cancer).rank(), 1);
        assert_eq!(varna_of(Rashi::Leo).rank(), 2);
        assert_eq!(varna_of(Rashi::Capricorn).rank(), 3);
        assert_eq!(varna_of(Rashi::Aquarius).rank(), 4);
    }

    #[test]
    fn nadi_cycles_in_threes() {
        assert_eq!(nadi_of(Nakshatra::Ashwini), Nadi::Vata);
        assert_eq!(nadi_of(Nakshatra::Magha), Nadi::Kapha);
        assert_eq!(nadi_of(Nakshatra::Revati), Nadi::Kapha);
        let vata = ALL_NAKSHATRAS.iter().filter(|n| nadi_of(**n) == Nadi::Vata).count();
        assert_eq!(vata, 9);
    }

    #[test]
    fn every_yoni_is_used_and_paired() {
        for (a, b) in YONI_ENEMIES {
            assert!(ALL_NAKSHATRAS.iter().any(|n| yoni_of(*n) == a));
            assert!(ALL_NAKSHATRAS.iter().any(|n| yoni_of(*n) == b));
        }
        assert!(yonis_are_enemies(Yoni::Rat, Yoni::Cat));
        assert!(!yonis_are_enemies(Yoni::Horse, Yoni::Horse));
    }

    #[test]
    fn gana_counts() {
        let count = |g| ALL_NAKSHATRAS.iter().filter(|n| gana_of(**n) == g).count();
        assert_eq!(count(Gana::Deva), 9);
        assert_eq!(count(Gana::Manushya), 9);
        assert_eq!(count(Gana::Rakshasa), 9);
    }
}
