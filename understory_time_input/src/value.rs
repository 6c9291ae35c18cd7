// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Finalized time values and their host-facing text form.
//!
//! [`TimeValue`] is what a completed edit commits: an hour in `1..=12`, a
//! minute in `0..=59`, and a [`Meridiem`]. Hosts usually show it as
//! `HH:MM AM`, which is exactly what its [`Display`](core::fmt::Display)
//! impl produces. The [`FromStr`] impl accepts the same form (and a single
//! hour digit) so a stored display string can seed a new machine.
//!
//! ```
//! use understory_time_input::{Meridiem, TimeValue};
//!
//! let value = TimeValue::new(4, 45, Meridiem::Pm).unwrap();
//! assert_eq!(value.to_string(), "04:45 PM");
//!
//! let parsed: TimeValue = "9:00 am".parse().unwrap();
//! assert_eq!(parsed, TimeValue::new(9, 0, Meridiem::Am).unwrap());
//! ```

use core::fmt;
use core::str::FromStr;

/// Which half of the day a [`TimeValue`] falls in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Meridiem {
    /// Ante meridiem (midnight to noon).
    #[default]
    Am,
    /// Post meridiem (noon to midnight).
    Pm,
}

impl Meridiem {
    /// Returns the other half of the day.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Am => Self::Pm,
            Self::Pm => Self::Am,
        }
    }

    /// Upper-case label, `"AM"` or `"PM"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meridiem {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("am") {
            Ok(Self::Am)
        } else if s.eq_ignore_ascii_case("pm") {
            Ok(Self::Pm)
        } else {
            Err(ParseTimeError::Meridiem)
        }
    }
}

/// A complete, range-checked 12-hour clock time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimeValue {
    hours: u8,
    minutes: u8,
    meridiem: Meridiem,
}

impl TimeValue {
    /// Creates a value, or `None` if `hours` is outside `1..=12` or
    /// `minutes` is outside `0..=59`.
    #[must_use]
    pub const fn new(hours: u8, minutes: u8, meridiem: Meridiem) -> Option<Self> {
        if hours < 1 || hours > 12 || minutes > 59 {
            return None;
        }
        Some(Self {
            hours,
            minutes,
            meridiem,
        })
    }

    /// Hour on the 12-hour dial, `1..=12`.
    #[must_use]
    pub const fn hours(self) -> u8 {
        self.hours
    }

    /// Minute, `0..=59`.
    #[must_use]
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// Half of the day.
    #[must_use]
    pub const fn meridiem(self) -> Meridiem {
        self.meridiem
    }

    /// Hour on the 24-hour clock, `0..=23`. `12 AM` is midnight.
    #[must_use]
    pub const fn hours_24(self) -> u8 {
        match (self.hours, self.meridiem) {
            (12, Meridiem::Am) => 0,
            (12, Meridiem::Pm) => 12,
            (h, Meridiem::Am) => h,
            (h, Meridiem::Pm) => h + 12,
        }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02} {}",
            self.hours, self.minutes, self.meridiem
        )
    }
}

impl FromStr for TimeValue {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // The meridiem is the trailing run of letters; stray letters inside
        // the clock digits are reported against their own part.
        let letters = s
            .bytes()
            .rev()
            .take_while(u8::is_ascii_alphabetic)
            .count();
        let (clock, meridiem) = s.split_at(s.len() - letters);

        let (hours, minutes) = clock
            .trim_end()
            .split_once(':')
            .ok_or(ParseTimeError::Separator)?;
        let hours = parse_digits(hours, 1..=2).ok_or(ParseTimeError::Hours)?;
        let minutes = parse_digits(minutes, 2..=2).ok_or(ParseTimeError::Minutes)?;
        if !(1..=12).contains(&hours) {
            return Err(ParseTimeError::Hours);
        }
        if minutes > 59 {
            return Err(ParseTimeError::Minutes);
        }
        let meridiem: Meridiem = meridiem.parse()?;
        Ok(Self {
            hours,
            minutes,
            meridiem,
        })
    }
}

fn parse_digits(s: &str, len: core::ops::RangeInclusive<usize>) -> Option<u8> {
    if !len.contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Error returned when a display string cannot be read back as a [`TimeValue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseTimeError {
    /// No `:` between the hour and minute digits.
    Separator,
    /// Hour digits missing, malformed, or outside `1..=12`.
    Hours,
    /// Minute digits missing, malformed, or outside `0..=59`.
    Minutes,
    /// Trailing `AM`/`PM` missing or unrecognized.
    Meridiem,
}

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Self::Separator => "expected `:` between hours and minutes",
            Self::Hours => "hours must be one or two digits in 1..=12",
            Self::Minutes => "minutes must be two digits in 00..=59",
            Self::Meridiem => "expected a trailing AM or PM",
        };
        write!(f, "invalid time: {what}")
    }
}

impl core::error::Error for ParseTimeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn tv(h: u8, m: u8, meridiem: Meridiem) -> TimeValue {
        TimeValue::new(h, m, meridiem).unwrap()
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(TimeValue::new(0, 0, Meridiem::Am).is_none());
        assert!(TimeValue::new(13, 0, Meridiem::Am).is_none());
        assert!(TimeValue::new(12, 60, Meridiem::Pm).is_none());
        assert!(TimeValue::new(12, 59, Meridiem::Pm).is_some());
    }

    #[test]
    fn display_zero_pads() {
        assert_eq!(tv(4, 45, Meridiem::Pm).to_string(), "04:45 PM");
        assert_eq!(tv(12, 0, Meridiem::Am).to_string(), "12:00 AM");
        assert_eq!(tv(7, 5, Meridiem::Am).to_string(), "07:05 AM");
    }

    #[test]
    fn parses_host_strings() {
        assert_eq!("11:40 AM".parse(), Ok(tv(11, 40, Meridiem::Am)));
        assert_eq!("9:00 AM".parse(), Ok(tv(9, 0, Meridiem::Am)));
        assert_eq!(" 04:45pm ".parse(), Ok(tv(4, 45, Meridiem::Pm)));
    }

    #[test]
    fn parse_reports_failing_part() {
        assert_eq!("1140 AM".parse::<TimeValue>(), Err(ParseTimeError::Separator));
        assert_eq!("13:00 AM".parse::<TimeValue>(), Err(ParseTimeError::Hours));
        assert_eq!("0:00 AM".parse::<TimeValue>(), Err(ParseTimeError::Hours));
        assert_eq!("10:5 AM".parse::<TimeValue>(), Err(ParseTimeError::Minutes));
        assert_eq!("10:75 AM".parse::<TimeValue>(), Err(ParseTimeError::Minutes));
        assert_eq!("10:30".parse::<TimeValue>(), Err(ParseTimeError::Meridiem));
        assert_eq!("10:30 XM".parse::<TimeValue>(), Err(ParseTimeError::Meridiem));
    }

    #[test]
    fn letters_inside_digits_blame_their_part() {
        // Letter O typed for a zero.
        assert_eq!("12:3O PM".parse::<TimeValue>(), Err(ParseTimeError::Minutes));
        assert_eq!("I2:30 PM".parse::<TimeValue>(), Err(ParseTimeError::Hours));
        assert_eq!("12:3O".parse::<TimeValue>(), Err(ParseTimeError::Minutes));
        assert_eq!("12:30 P M".parse::<TimeValue>(), Err(ParseTimeError::Minutes));
    }

    #[test]
    fn hours_24_handles_noon_and_midnight() {
        assert_eq!(tv(12, 0, Meridiem::Am).hours_24(), 0);
        assert_eq!(tv(12, 0, Meridiem::Pm).hours_24(), 12);
        assert_eq!(tv(1, 0, Meridiem::Pm).hours_24(), 13);
        assert_eq!(tv(11, 0, Meridiem::Am).hours_24(), 11);
    }

    #[test]
    fn meridiem_toggles() {
        assert_eq!(Meridiem::Am.toggled(), Meridiem::Pm);
        assert_eq!(Meridiem::Pm.toggled(), Meridiem::Am);
    }
}
