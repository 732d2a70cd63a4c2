//! Birth balance from the Moon's position within its nakshatra.

use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

/// Returns `(nakshatra, balance_days, elapsed_fraction)`.
///
/// `elapsed_fraction` is how much of the nakshatra the Moon has already
/// covered; the entry period is shortened by the same fraction.
pub fn nakshatra_birth_balance(
    moon_sidereal_lon: f64,
    entry_period_days: f64,
) -> (Nakshatra, f64, f64) {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let elapsed_fraction = info.progress();
    let balance_days = entry_period_days * (1.0 - elapsed_fraction);
    (info.nakshatra, balance_days, elapsed_fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN;

    #[test]
    fn balance_at_start_of_nakshatra() {
        let (nak, balance, frac) = nakshatra_birth_balance(0.0, 2556.75);
        assert_eq!(nak, Nakshatra::Ashwini);
        assert!((balance - 2556.75).abs() < 1e-10);
        assert!(frac.abs() < 1e-10);
    }

    #[test]
    fn balance_at_midpoint() {
        let (_, balance, frac) = nakshatra_birth_balance(NAKSHATRA_SPAN / 2.0, 2556.75);
        assert!((frac - 0.5).abs() < 1e-10);
        assert!((balance - 2556.75 * 0.5).abs() < 1e-6);
    }

    #[test]
    fn balance_rohini_start() {
        let (nak, balance, frac) = nakshatra_birth_balance(40.0, 3652.5);
        assert_eq!(nak, Nakshatra::Rohini);
        assert!(frac.abs() < 1e-10);
        assert!((balance - 3652.5).abs() < 1e-9);
    }

    #[test]
    fn balance_near_end_is_small() {
        let (_, balance, _) = nakshatra_birth_balance(NAKSHATRA_SPAN - 0.001, 2556.75);
        assert!(balance < 1.0);
    }
}
