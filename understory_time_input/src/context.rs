// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The in-progress value behind a time input.
//!
//! [`TimeContext`] is deliberately looser than [`TimeValue`]: while the user
//! edits, hours and minutes may be unset and the meridiem may hold whatever
//! text was typed. The machine only commits once [`TimeContext::resolve`]
//! succeeds.
//!
//! ## Seeding
//!
//! [`InitialTime`] describes what the host knows up front. Missing parts take
//! the machine defaults (`1`, `1`, `AM`); out-of-range parts are folded into
//! range with [`wrap_hours`] / [`wrap_minutes`].
//!
//! ```
//! use understory_time_input::{Fields, InitialTime, Meridiem, TimeContext};
//!
//! let ctx = TimeContext::new(InitialTime::new().with_hours(9).with_meridiem(Meridiem::Pm));
//! assert_eq!(ctx.hours(), Some(9));
//! assert_eq!(ctx.minutes(), Some(1));
//! assert!(ctx.missing().is_empty());
//!
//! assert_eq!(TimeContext::unset().missing(), Fields::all());
//! ```

use alloc::string::String;

use crate::field::{coerce_meridiem, match_meridiem, wrap_hours, wrap_minutes};
use crate::value::{Meridiem, TimeValue};

/// Hours used when construction supplies none.
pub const DEFAULT_HOURS: u8 = 1;
/// Minutes used when construction supplies none.
pub const DEFAULT_MINUTES: u8 = 1;
/// Meridiem used when construction supplies none.
pub const DEFAULT_MERIDIEM: Meridiem = Meridiem::Am;

/// What the meridiem part currently holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MeridiemEntry {
    /// Nothing entered.
    #[default]
    Unset,
    /// A recognized half of the day.
    Set(Meridiem),
    /// Text that did not (yet) match `am` or `pm`.
    Raw(String),
}

impl MeridiemEntry {
    /// Classifies text typed into the meridiem part.
    ///
    /// ```
    /// use understory_time_input::{Meridiem, MeridiemEntry};
    ///
    /// assert_eq!(MeridiemEntry::from_typed("pM"), MeridiemEntry::Set(Meridiem::Pm));
    /// assert_eq!(MeridiemEntry::from_typed("p"), MeridiemEntry::Raw("p".into()));
    /// assert_eq!(MeridiemEntry::from_typed(""), MeridiemEntry::Unset);
    /// ```
    #[must_use]
    pub fn from_typed(input: &str) -> Self {
        if input.is_empty() {
            return Self::Unset;
        }
        match match_meridiem(input) {
            Some(m) => Self::Set(m),
            None => Self::Raw(input.into()),
        }
    }

    /// Returns the meridiem if one has been recognized.
    #[must_use]
    pub fn resolved(&self) -> Option<Meridiem> {
        match self {
            Self::Set(m) => Some(*m),
            Self::Unset | Self::Raw(_) => None,
        }
    }

    /// Forces the entry to AM or PM, as happens when the part loses focus.
    ///
    /// Unrecognized and empty entries become PM.
    #[must_use]
    pub fn coerced(&self) -> Meridiem {
        match self {
            Self::Set(m) => *m,
            Self::Raw(text) => coerce_meridiem(text),
            Self::Unset => Meridiem::Pm,
        }
    }

    /// The opposite of a recognized AM; everything else toggles to AM.
    #[must_use]
    pub fn toggled(&self) -> Meridiem {
        match self {
            Self::Set(Meridiem::Am) => Meridiem::Pm,
            _ => Meridiem::Am,
        }
    }
}

bitflags::bitflags! {
    /// A set of time parts, used to report which ones are still missing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Fields: u8 {
        /// The hours part.
        const HOURS    = 0b0000_0001;
        /// The minutes part.
        const MINUTES  = 0b0000_0010;
        /// The AM/PM part.
        const MERIDIEM = 0b0000_0100;
    }
}

/// Construction-time values supplied by the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InitialTime {
    /// Initial hours, folded onto `1..=12`.
    pub hours: Option<u8>,
    /// Initial minutes, folded onto `0..=59`.
    pub minutes: Option<u8>,
    /// Initial meridiem.
    pub meridiem: Option<Meridiem>,
}

impl InitialTime {
    /// No initial values; every part takes the machine default.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hours: None,
            minutes: None,
            meridiem: None,
        }
    }

    /// Sets the initial hours.
    #[must_use]
    pub const fn with_hours(mut self, hours: u8) -> Self {
        self.hours = Some(hours);
        self
    }

    /// Sets the initial minutes.
    #[must_use]
    pub const fn with_minutes(mut self, minutes: u8) -> Self {
        self.minutes = Some(minutes);
        self
    }

    /// Sets the initial meridiem.
    #[must_use]
    pub const fn with_meridiem(mut self, meridiem: Meridiem) -> Self {
        self.meridiem = Some(meridiem);
        self
    }
}

impl From<TimeValue> for InitialTime {
    fn from(value: TimeValue) -> Self {
        Self::new()
            .with_hours(value.hours())
            .with_minutes(value.minutes())
            .with_meridiem(value.meridiem())
    }
}

/// The value being edited, possibly incomplete.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeContext {
    hours: Option<u8>,
    minutes: Option<u8>,
    meridiem: MeridiemEntry,
}

impl TimeContext {
    /// Seeds a context from host-supplied values and the machine defaults.
    #[must_use]
    pub fn new(initial: InitialTime) -> Self {
        Self {
            hours: Some(wrap_hours(initial.hours.unwrap_or(DEFAULT_HOURS).into())),
            minutes: Some(wrap_minutes(
                initial.minutes.unwrap_or(DEFAULT_MINUTES).into(),
            )),
            meridiem: MeridiemEntry::Set(initial.meridiem.unwrap_or(DEFAULT_MERIDIEM)),
        }
    }

    /// A context with every part unset.
    #[must_use]
    pub fn unset() -> Self {
        Self::default()
    }

    /// Current hours, if set.
    #[must_use]
    pub fn hours(&self) -> Option<u8> {
        self.hours
    }

    /// Current minutes, if set.
    #[must_use]
    pub fn minutes(&self) -> Option<u8> {
        self.minutes
    }

    /// Current meridiem entry.
    #[must_use]
    pub fn meridiem(&self) -> &MeridiemEntry {
        &self.meridiem
    }

    /// Parts that are unset or, for the meridiem, not recognized.
    #[must_use]
    pub fn missing(&self) -> Fields {
        let mut missing = Fields::empty();
        missing.set(Fields::HOURS, self.hours.is_none());
        missing.set(Fields::MINUTES, self.minutes.is_none());
        missing.set(Fields::MERIDIEM, self.meridiem.resolved().is_none());
        missing
    }

    /// Returns the complete value, or `None` if any part is missing.
    #[must_use]
    pub fn resolve(&self) -> Option<TimeValue> {
        TimeValue::new(self.hours?, self.minutes?, self.meridiem.resolved()?)
    }

    pub(crate) fn set_hours(&mut self, hours: Option<u8>) {
        self.hours = hours;
    }

    pub(crate) fn set_minutes(&mut self, minutes: Option<u8>) {
        self.minutes = minutes;
    }

    pub(crate) fn set_meridiem(&mut self, meridiem: MeridiemEntry) {
        self.meridiem = meridiem;
    }

    /// Fills unset parts with `1`, `0`, and `AM`. Raw meridiem text is kept.
    pub(crate) fn fill_unset(&mut self) {
        self.hours.get_or_insert(1);
        self.minutes.get_or_insert(0);
        if self.meridiem == MeridiemEntry::Unset {
            self.meridiem = MeridiemEntry::Set(Meridiem::Am);
        }
    }
}

impl From<TimeValue> for TimeContext {
    fn from(value: TimeValue) -> Self {
        Self::new(value.into())
    }
}
