//! The day-rotation law: which label a date gets, given the anchor seed.

use chrono::NaiveDate;

use crate::choice::Choice;
use crate::constants::{ANCHOR_DAY, ANCHOR_MONTH, ANCHOR_YEAR};

/// The fixed reference date the rotation parity is measured against.
#[must_use]
pub fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(ANCHOR_YEAR, ANCHOR_MONTH, ANCHOR_DAY)
        .expect("anchor constants should form a valid calendar date")
}

/// Signed whole-day distance from the anchor; negative before it.
#[must_use]
pub fn day_offset(date: NaiveDate) -> i64 {
    date.signed_duration_since(anchor()).num_days()
}

/// The label the rotation assigns to `date` when the anchor holds `seed`.
///
/// The label alternates strictly every calendar day: even offsets (the
/// anchor included) keep the seed, odd offsets flip it. `rem_euclid` keeps
/// the parity check well-defined for dates before the anchor.
#[must_use]
pub fn rotated_choice(date: NaiveDate, seed: Choice) -> Choice {
    if day_offset(date).rem_euclid(2) == 0 {
        seed
    } else {
        seed.other()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::next_day;
    use chrono::Days;

    #[test]
    fn anchor_resolves_to_the_seed_itself() {
        assert_eq!(rotated_choice(anchor(), Choice::Ad), Choice::Ad);
        assert_eq!(rotated_choice(anchor(), Choice::D3), Choice::D3);
    }

    #[test]
    fn consecutive_days_strictly_alternate() {
        let mut day = anchor().checked_sub_days(Days::new(400)).unwrap();
        for _ in 0..800 {
            let tomorrow = next_day(day);
            assert_ne!(
                rotated_choice(day, Choice::D3),
                rotated_choice(tomorrow, Choice::D3),
                "alternation broke between {day} and {tomorrow}"
            );
            day = tomorrow;
        }
    }

    #[test]
    fn offsets_mirror_around_the_anchor() {
        for k in 0..64 {
            let before = anchor().checked_sub_days(Days::new(k)).unwrap();
            let after = anchor().checked_add_days(Days::new(k)).unwrap();
            assert_eq!(
                rotated_choice(before, Choice::Ad),
                rotated_choice(after, Choice::Ad)
            );
        }
    }

    #[test]
    fn day_offset_is_signed_and_exact() {
        let before = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap();
        let after = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(day_offset(anchor()), 0);
        assert_eq!(day_offset(before), -1);
        assert_eq!(day_offset(after), 2);
    }

    #[test]
    fn rotation_matches_the_documented_scenario() {
        let dec30 = NaiveDate::from_ymd_opt(2025, 12, 30).unwrap();
        let dec31 = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let jan01 = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(rotated_choice(dec30, Choice::D3), Choice::D3);
        assert_eq!(rotated_choice(dec31, Choice::D3), Choice::Ad);
        assert_eq!(rotated_choice(jan01, Choice::D3), Choice::D3);
    }
}
