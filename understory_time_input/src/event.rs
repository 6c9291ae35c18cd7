// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events a host forwards to the time machine.

use alloc::string::String;

use crate::value::Meridiem;

/// An input event.
///
/// The set is closed. An event that the current state does not model is
/// ignored, which is how stray key presses and pointer events are absorbed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The widget gained focus.
    Focus,
    /// The widget or the active part lost focus.
    Blur,
    /// The user pressed Tab.
    Tab,
    /// Move editing to the hours part.
    Hours,
    /// Move editing to the minutes part.
    Minutes,
    /// Move editing to the meridiem part.
    Meridiem,
    /// Step the active numeric part up.
    Increment,
    /// Step the active numeric part down.
    Decrement,
    /// Flip AM and PM while editing the meridiem.
    Toggle,
    /// Request validation. Accepted for compatibility; no state reacts to it.
    Validate,
    /// Open or close the dropdown selector.
    ToggleDropdown,
    /// The text of the active part changed.
    UserInput {
        /// Full text of the part after the edit.
        input: String,
    },
    /// A dropdown list item was picked for the hours or minutes part.
    Select {
        /// The item's label.
        input: String,
    },
    /// A dropdown AM/PM item was picked.
    SelectMeridiem {
        /// The picked half of the day.
        input: Meridiem,
    },
}

impl Event {
    /// Shorthand for [`Event::UserInput`].
    #[must_use]
    pub fn user_input(input: impl Into<String>) -> Self {
        Self::UserInput {
            input: input.into(),
        }
    }

    /// Shorthand for [`Event::Select`].
    #[must_use]
    pub fn select(input: impl Into<String>) -> Self {
        Self::Select {
            input: input.into(),
        }
    }

    /// Shorthand for [`Event::SelectMeridiem`].
    #[must_use]
    pub const fn select_meridiem(input: Meridiem) -> Self {
        Self::SelectMeridiem { input }
    }
}

/// Events the machine raises for itself while settling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Raised {
    /// Editing finished; go validate.
    Done,
    /// Advance to the minutes part.
    Minutes,
    /// Advance to the meridiem part.
    Meridiem,
}
