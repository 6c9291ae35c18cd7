// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-field arithmetic and text interpretation.
//!
//! Hours cycle through `1..=12` (there is no hour zero on the dial) and
//! minutes through `0..=59`. Both stepping and typed input go through the
//! same wrap functions, so every stored number is in range.
//!
//! ```
//! use understory_time_input::field::{wrap_hours, wrap_minutes};
//!
//! assert_eq!(wrap_hours(13), 1);
//! assert_eq!(wrap_hours(0), 12);
//! assert_eq!(wrap_minutes(60), 0);
//! assert_eq!(wrap_minutes(-1), 59);
//! ```

use crate::value::Meridiem;

/// Folds any integer onto the 12-hour dial.
///
/// Multiples of 12 map to 12; everything else maps to its remainder, with
/// negative values wrapping from the top.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "rem_euclid(12) is always in 0..12"
)]
pub fn wrap_hours(value: i64) -> u8 {
    match value.rem_euclid(12) {
        0 => 12,
        h => h as u8,
    }
}

/// Folds an integer onto `0..=59`.
///
/// Any negative value becomes 59; this is what makes "step down from 0"
/// land on 59.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "a non-negative value modulo 60 fits in u8"
)]
pub fn wrap_minutes(value: i64) -> u8 {
    if value < 0 {
        59
    } else {
        (value % 60) as u8
    }
}

/// Steps the hours by `delta`, wrapping around the dial.
///
/// An unset hour steps up to 1 and down to 12.
#[must_use]
pub fn step_hours(current: Option<u8>, delta: i64) -> u8 {
    match current {
        Some(h) => wrap_hours(i64::from(h) + delta),
        None if delta >= 0 => 1,
        None => 12,
    }
}

/// Steps the minutes by `delta`, wrapping around the hour.
///
/// An unset minute steps up to 0 and down to 59.
#[must_use]
pub fn step_minutes(current: Option<u8>, delta: i64) -> u8 {
    match current {
        Some(m) => wrap_minutes(i64::from(m) + delta),
        None if delta >= 0 => 0,
        None => 59,
    }
}

/// Parses typed or selected text as an integer.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is
/// not a plain decimal integer.
pub(crate) fn parse_number(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Interprets text typed into the hours field.
///
/// `"0"` and the empty string clear the field so the user can delete and
/// retype. Text that does not parse as a number also clears it.
#[must_use]
pub fn typed_hours(input: &str) -> Option<u8> {
    if is_clearing(input) {
        return None;
    }
    parse_number(input).map(wrap_hours)
}

/// Interprets text typed into the minutes field.
///
/// Same clearing rules as [`typed_hours`].
#[must_use]
pub fn typed_minutes(input: &str) -> Option<u8> {
    if is_clearing(input) {
        return None;
    }
    parse_number(input).map(wrap_minutes)
}

/// Interprets a dropdown item picked for the hours part.
///
/// Unlike typed input, `"0"` is not a request to clear.
#[must_use]
pub fn picked_hours(input: &str) -> Option<u8> {
    parse_number(input).map(wrap_hours)
}

/// Interprets a dropdown item picked for the minutes part.
#[must_use]
pub fn picked_minutes(input: &str) -> Option<u8> {
    parse_number(input).map(wrap_minutes)
}

fn is_clearing(input: &str) -> bool {
    input.is_empty() || input == "0"
}

/// Looks for `am` or `pm` anywhere in `input`, ignoring case.
///
/// `am` is checked first, so text containing both resolves to AM.
#[must_use]
pub fn match_meridiem(input: &str) -> Option<Meridiem> {
    if contains_ignore_case(input, b"am") {
        Some(Meridiem::Am)
    } else if contains_ignore_case(input, b"pm") {
        Some(Meridiem::Pm)
    } else {
        None
    }
}

/// Forces partially-typed meridiem text to AM or PM.
///
/// Any `a` in the text means AM. Everything else, including the empty
/// string, means PM.
#[must_use]
pub fn coerce_meridiem(input: &str) -> Meridiem {
    if input.bytes().any(|b| b.eq_ignore_ascii_case(&b'a')) {
        Meridiem::Am
    } else {
        Meridiem::Pm
    }
}

fn contains_ignore_case(haystack: &str, needle: &[u8]) -> bool {
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|w| w.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_increment_stays_on_dial() {
        for h in 1..=12_i64 {
            let next = wrap_hours(h + 1);
            assert!((1..=12).contains(&next), "{h} + 1 wrapped to {next}");
        }
        assert_eq!(wrap_hours(12 + 1), 1);
    }

    #[test]
    fn hour_decrement_wraps_one_to_twelve() {
        assert_eq!(wrap_hours(1 - 1), 12);
        for h in 2..=12_i64 {
            assert_eq!(i64::from(wrap_hours(h - 1)), h - 1);
        }
    }

    #[test]
    fn minute_increment_and_decrement() {
        for m in 0..=59_i64 {
            assert_eq!(i64::from(wrap_minutes(m + 1)), (m + 1) % 60);
        }
        assert_eq!(wrap_minutes(59 + 1), 0);
        assert_eq!(wrap_minutes(0 - 1), 59);
        for m in 1..=59_i64 {
            assert_eq!(i64::from(wrap_minutes(m - 1)), m - 1);
        }
    }

    #[test]
    fn stepping_from_unset_starts_at_an_end() {
        assert_eq!(step_hours(None, 1), 1);
        assert_eq!(step_hours(None, -1), 12);
        assert_eq!(step_minutes(None, 1), 0);
        assert_eq!(step_minutes(None, -1), 59);
        assert_eq!(step_hours(Some(12), 1), 1);
        assert_eq!(step_minutes(Some(0), -1), 59);
    }

    #[test]
    fn picked_zero_is_a_value() {
        assert_eq!(picked_minutes("0"), Some(0));
        assert_eq!(picked_minutes("30"), Some(30));
        assert_eq!(picked_hours("0"), Some(12));
        assert_eq!(picked_hours("7"), Some(7));
        assert_eq!(picked_hours("seven"), None);
    }

    #[test]
    fn large_and_negative_hours_fold() {
        assert_eq!(wrap_hours(24), 12);
        assert_eq!(wrap_hours(25), 1);
        assert_eq!(wrap_hours(-3), 9);
    }

    #[test]
    fn typed_numbers_clear_on_zero_or_empty() {
        assert_eq!(typed_hours("0"), None);
        assert_eq!(typed_hours(""), None);
        assert_eq!(typed_minutes("0"), None);
        assert_eq!(typed_minutes(""), None);
        // Only the literal "0" clears; "00" is a number.
        assert_eq!(typed_hours("00"), Some(12));
        assert_eq!(typed_minutes("00"), Some(0));
    }

    #[test]
    fn typed_numbers_wrap() {
        assert_eq!(typed_hours("7"), Some(7));
        assert_eq!(typed_hours("13"), Some(1));
        assert_eq!(typed_minutes("45"), Some(45));
        assert_eq!(typed_minutes("75"), Some(15));
        assert_eq!(typed_minutes("-4"), Some(59));
    }

    #[test]
    fn non_numeric_input_clears() {
        assert_eq!(typed_hours("x"), None);
        assert_eq!(typed_hours("1a"), None);
        assert_eq!(typed_minutes("four"), None);
        assert_eq!(typed_minutes("99999999999999999999999"), None);
    }

    #[test]
    fn meridiem_matching_ignores_case_and_position() {
        assert_eq!(match_meridiem("am"), Some(Meridiem::Am));
        assert_eq!(match_meridiem("PM"), Some(Meridiem::Pm));
        assert_eq!(match_meridiem("xPm"), Some(Meridiem::Pm));
        assert_eq!(match_meridiem("aM pm"), Some(Meridiem::Am));
        assert_eq!(match_meridiem("a"), None);
        assert_eq!(match_meridiem("p"), None);
        assert_eq!(match_meridiem(""), None);
    }

    #[test]
    fn coercion_defaults_to_pm() {
        assert_eq!(coerce_meridiem("a"), Meridiem::Am);
        assert_eq!(coerce_meridiem("A"), Meridiem::Am);
        assert_eq!(coerce_meridiem("p"), Meridiem::Pm);
        assert_eq!(coerce_meridiem("xq"), Meridiem::Pm);
        assert_eq!(coerce_meridiem(""), Meridiem::Pm);
    }
}
