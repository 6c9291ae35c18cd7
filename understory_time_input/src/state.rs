// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where the user is in the widget.
//!
//! [`State`] is hierarchical: the per-part editing phases and the dropdown
//! carry a nested sub-state. Hosts usually only need [`State::matches`] with
//! a dotted path, or [`State::active_part`] to decide which part to
//! highlight.
//!
//! ```
//! use understory_time_input::{DropdownStep, Fields, State};
//!
//! let state = State::Dropdown(DropdownStep::Minutes);
//! assert!(state.matches("dropdown"));
//! assert!(state.matches("dropdown.minutes"));
//! assert!(!state.matches("minutes"));
//! assert_eq!(state.to_string(), "dropdown.minutes");
//! assert_eq!(state.active_part(), Some(Fields::MINUTES));
//! ```

use core::fmt;

use crate::context::Fields;

/// Sub-state of a per-part editing phase.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldState {
    /// The part has keyboard focus.
    #[default]
    Focussed,
}

/// Which list the dropdown is currently offering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DropdownStep {
    /// Picking the hour.
    #[default]
    Hours,
    /// Picking the minute.
    Minutes,
    /// Picking AM or PM.
    Meridiem,
}

/// The machine's state tag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum State {
    /// Not yet interacted with.
    #[default]
    Idle,
    /// The widget has focus but no part is being edited.
    Focussed,
    /// Editing the hours part.
    Hours(FieldState),
    /// Editing the minutes part.
    Minutes(FieldState),
    /// Editing the meridiem part.
    Meridiem(FieldState),
    /// Choosing from the dropdown lists.
    Dropdown(DropdownStep),
    /// Transient: the value is being checked. Never observed after a send.
    Visited,
    /// The last edit produced a complete value.
    Valid,
    /// The last edit left a part missing.
    Invalid,
}

impl State {
    /// Name of the top-level phase.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Focussed => "focussed",
            Self::Hours(_) => "hours",
            Self::Minutes(_) => "minutes",
            Self::Meridiem(_) => "meridiem",
            Self::Dropdown(_) => "dropdown",
            Self::Visited => "visited",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }

    /// Name of the nested sub-state, if this phase has one.
    #[must_use]
    pub const fn child_name(self) -> Option<&'static str> {
        match self {
            Self::Hours(FieldState::Focussed)
            | Self::Minutes(FieldState::Focussed)
            | Self::Meridiem(FieldState::Focussed) => Some("focussed"),
            Self::Dropdown(DropdownStep::Hours) => Some("hours"),
            Self::Dropdown(DropdownStep::Minutes) => Some("minutes"),
            Self::Dropdown(DropdownStep::Meridiem) => Some("meridiem"),
            Self::Idle | Self::Focussed | Self::Visited | Self::Valid | Self::Invalid => None,
        }
    }

    /// Returns `true` if `path` names this state or one of its ancestors.
    ///
    /// Paths are dotted, top-level first: `"hours"`, `"hours.focussed"`,
    /// `"dropdown.meridiem"`.
    #[must_use]
    pub fn matches(self, path: &str) -> bool {
        let mut segments = path.split('.');
        if segments.next() != Some(self.name()) {
            return false;
        }
        match (segments.next(), segments.next()) {
            (None, _) => true,
            (Some(child), None) => self.child_name() == Some(child),
            (Some(_), Some(_)) => false,
        }
    }

    /// The part the user is working on, for highlighting.
    #[must_use]
    pub const fn active_part(self) -> Option<Fields> {
        match self {
            Self::Hours(_) | Self::Dropdown(DropdownStep::Hours) => Some(Fields::HOURS),
            Self::Minutes(_) | Self::Dropdown(DropdownStep::Minutes) => Some(Fields::MINUTES),
            Self::Meridiem(_) | Self::Dropdown(DropdownStep::Meridiem) => {
                Some(Fields::MERIDIEM)
            }
            Self::Idle | Self::Focussed | Self::Visited | Self::Valid | Self::Invalid => None,
        }
    }

    /// Returns `true` while a part is being typed into or picked.
    #[must_use]
    pub const fn is_editing(self) -> bool {
        self.active_part().is_some()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        if let Some(child) = self.child_name() {
            write!(f, ".{child}")?;
        }
        Ok(())
    }
}
