// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_time_input --heading-base-level=0

//! Understory Time Input: a state machine for hours/minutes/AM-PM entry.
//!
//! This crate holds the behavior of a small time-of-day input: which part
//! has focus, how key presses and stepper clicks change a partially-typed
//! value, when that value is checked, and when a finished value is handed
//! back to the host. It knows nothing about rendering or key routing; a host
//! forwards [`Event`]s and reads [`State`] and [`TimeContext`] back.
//!
//! - [`TimeMachine`] owns the state and context and calls a commit callback
//!   once per completed edit.
//! - [`transition`] is the same logic as a pure function, for hosts that keep
//!   state themselves and for tests.
//! - [`TimeValue`] is the committed triple; it formats as `HH:MM AM`.
//!
//! ## States
//!
//! | State              | Reacts to                                                         |
//! |--------------------|-------------------------------------------------------------------|
//! | `idle`             | `FOCUS` → `focussed`, `TOGGLE_DROPDOWN` → `dropdown`              |
//! | `focussed`         | `HOURS`/`MINUTES`/`MERIDIEM` → that part, `BLUR`/`TAB` → `visited` |
//! | `hours.focussed`   | step, type, `TAB` → `minutes`, `BLUR` → `visited`                 |
//! | `minutes.focussed` | step, type, `TAB` → `meridiem`, `BLUR` → `visited`                |
//! | `meridiem.focussed`| `TOGGLE`, type, `BLUR` → `visited`                                |
//! | `dropdown.*`       | `SELECT` hours, then minutes, then `SELECT_MERIDIEM` → `visited`; `MINUTES` → `minutes` |
//! | `valid`            | `FOCUS` → `focussed`, `TOGGLE_DROPDOWN` → `dropdown`              |
//! | `invalid`          | `FOCUS` → `focussed`                                              |
//!
//! `visited` is transient: it resolves to `valid` or `invalid` within the
//! same [`TimeMachine::send`] call. Entering `valid` commits.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_time_input::{Event, InitialTime, Meridiem, TimeMachine, TimeValue};
//!
//! let mut commits = Vec::new();
//! let mut machine = TimeMachine::new(InitialTime::new(), |value: TimeValue| {
//!     commits.push(value.to_string());
//! });
//!
//! machine.send(Event::Focus);
//! machine.send(Event::Hours);
//! for _ in 0..3 {
//!     machine.send(Event::Increment);
//! }
//! machine.send(Event::Tab);
//! machine.send(Event::user_input("45"));
//! machine.send(Event::Tab);
//! machine.send(Event::Toggle);
//! machine.send(Event::Blur);
//!
//! assert!(machine.matches("valid"));
//! assert_eq!(machine.value(), TimeValue::new(4, 45, Meridiem::Pm));
//! drop(machine);
//! assert_eq!(commits, ["04:45 PM"]);
//! ```
//!
//! ## Incomplete values
//!
//! Typing `"0"` or clearing a numeric part unsets it, as does text that is
//! not a number. The machine never rejects input; it reports the gap instead,
//! by settling in `invalid` with [`TimeContext::missing`] naming the parts.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for each dispatched event and commit.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

macro_rules! log_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

mod context;
mod event;
pub mod field;
mod machine;
mod state;
mod value;

pub use context::{
    DEFAULT_HOURS, DEFAULT_MERIDIEM, DEFAULT_MINUTES, Fields, InitialTime, MeridiemEntry,
    TimeContext,
};
pub use event::Event;
pub use machine::{Effect, Effects, TimeMachine, Transition, transition};
pub use state::{DropdownStep, FieldState, State};
pub use value::{Meridiem, ParseTimeError, TimeValue};
