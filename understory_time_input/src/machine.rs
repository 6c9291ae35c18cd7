// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The time-input state machine.
//!
//! ## Model
//!
//! The machine is a pure reducer, [`transition`], plus a small driver,
//! [`TimeMachine`], that owns the state and context and runs effects.
//!
//! One call to [`transition`] is a full macrostep:
//!
//! 1. The event is offered to the current state. Nested sub-states are
//!    consulted before their parent phase.
//! 2. Any target state is entered and its entry action runs. Entering
//!    `focussed` fills unset parts; entering `visited` immediately moves on
//!    to `valid` or `invalid`; entering `valid` emits [`Effect::Commit`].
//! 3. Events the handlers raised (`DONE`, or a move to the next part) are
//!    processed in order, repeating step 2, until none are left.
//!
//! The returned state is therefore never [`State::Visited`].
//!
//! ## Usage
//!
//! ```
//! use understory_time_input::{Event, InitialTime, Meridiem, TimeMachine, TimeValue};
//!
//! let mut committed = None;
//! let mut machine = TimeMachine::new(InitialTime::new(), |value| committed = Some(value));
//!
//! machine.send(Event::Focus);
//! machine.send(Event::Hours);
//! machine.send(Event::Increment);
//! machine.send(Event::Blur);
//! assert!(machine.matches("valid"));
//!
//! drop(machine);
//! assert_eq!(committed, TimeValue::new(2, 1, Meridiem::Am));
//! ```

use core::fmt;

use smallvec::SmallVec;

use crate::context::{InitialTime, MeridiemEntry, TimeContext};
use crate::event::{Event, Raised};
use crate::field::{
    picked_hours, picked_minutes, step_hours, step_minutes, typed_hours, typed_minutes,
};
use crate::state::{DropdownStep, FieldState, State};
use crate::value::TimeValue;

/// A side effect requested by a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// An edit completed with this value.
    Commit(TimeValue),
}

/// Effects produced by one macrostep. At most one commit is ever produced.
pub type Effects = SmallVec<[Effect; 1]>;

/// Result of [`transition`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The settled state.
    pub state: State,
    /// The context after all actions ran.
    pub context: TimeContext,
    /// Effects for the driver to run, in order.
    pub effects: Effects,
    /// `false` if the current state does not react to the event.
    pub handled: bool,
}

/// Computes the outcome of `event` without touching the caller's values.
///
/// ```
/// use understory_time_input::{transition, Event, FieldState, InitialTime, State, TimeContext};
///
/// let ctx = TimeContext::new(InitialTime::new().with_hours(12));
/// let next = transition(State::Hours(FieldState::Focussed), &ctx, &Event::Increment);
/// assert!(next.handled);
/// assert_eq!(next.context.hours(), Some(1));
/// assert!(next.effects.is_empty());
/// ```
#[must_use]
pub fn transition(state: State, context: &TimeContext, event: &Event) -> Transition {
    let mut context = context.clone();
    let mut effects = Effects::new();
    let (state, handled) = settle(state, &mut context, event, &mut effects);
    Transition {
        state,
        context,
        effects,
        handled,
    }
}

/// In-place form of [`transition`], used by the driver.
fn settle(
    mut state: State,
    context: &mut TimeContext,
    event: &Event,
    effects: &mut Effects,
) -> (State, bool) {
    let mut raised = SmallVec::<[Raised; 2]>::new();
    match react(state, context, Signal::External(event), &mut raised) {
        Reaction::Ignored => return (state, false),
        Reaction::Handled => {}
        Reaction::Goto(target) => state = enter(target, context, effects),
    }

    let mut next = 0;
    while next < raised.len() {
        let signal = raised[next];
        next += 1;
        if let Reaction::Goto(target) = react(state, context, Signal::Raised(signal), &mut raised)
        {
            state = enter(target, context, effects);
        }
    }
    (state, true)
}

#[derive(Copy, Clone, Debug)]
enum Signal<'a> {
    External(&'a Event),
    Raised(Raised),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Reaction {
    Ignored,
    /// Actions ran; the state is unchanged.
    Handled,
    Goto(State),
}

/// Enters `state`, running entry actions and eventless transitions.
fn enter(mut state: State, context: &mut TimeContext, effects: &mut Effects) -> State {
    loop {
        match on_entry(state, context, effects) {
            Some(next) => state = next,
            None => return state,
        }
    }
}

/// Entry action for each state. Returns an eventless follow-up target.
fn on_entry(state: State, context: &mut TimeContext, effects: &mut Effects) -> Option<State> {
    match state {
        State::Focussed => {
            context.fill_unset();
            None
        }
        State::Visited => Some(if context.resolve().is_some() {
            State::Valid
        } else {
            State::Invalid
        }),
        State::Valid => {
            if let Some(value) = context.resolve() {
                effects.push(Effect::Commit(value));
            }
            None
        }
        State::Idle
        | State::Hours(_)
        | State::Minutes(_)
        | State::Meridiem(_)
        | State::Dropdown(_)
        | State::Invalid => None,
    }
}

/// Offers one signal to `state`. Sub-state handlers are listed before the
/// handlers of their parent phase.
fn react(
    state: State,
    context: &mut TimeContext,
    signal: Signal<'_>,
    raised: &mut SmallVec<[Raised; 2]>,
) -> Reaction {
    use Signal::{External, Raised as Internal};

    match state {
        State::Idle => match signal {
            External(Event::Focus) => Reaction::Goto(State::Focussed),
            External(Event::ToggleDropdown) => Reaction::Goto(State::Dropdown(DropdownStep::Hours)),
            _ => Reaction::Ignored,
        },

        State::Focussed => match signal {
            External(Event::Blur | Event::Tab) => Reaction::Goto(State::Visited),
            External(Event::Hours) => Reaction::Goto(State::Hours(FieldState::Focussed)),
            External(Event::Minutes) => Reaction::Goto(State::Minutes(FieldState::Focussed)),
            External(Event::Meridiem) => Reaction::Goto(State::Meridiem(FieldState::Focussed)),
            External(Event::ToggleDropdown) => Reaction::Goto(State::Dropdown(DropdownStep::Hours)),
            _ => Reaction::Ignored,
        },

        State::Hours(FieldState::Focussed) => match signal {
            External(Event::Increment) => {
                context.set_hours(Some(step_hours(context.hours(), 1)));
                Reaction::Handled
            }
            External(Event::Decrement) => {
                context.set_hours(Some(step_hours(context.hours(), -1)));
                Reaction::Handled
            }
            External(Event::UserInput { input }) => {
                context.set_hours(typed_hours(input));
                Reaction::Handled
            }
            External(Event::Tab) => {
                raised.push(Raised::Minutes);
                Reaction::Handled
            }
            External(Event::Blur) => {
                raised.push(Raised::Done);
                Reaction::Handled
            }
            External(Event::Minutes) | Internal(Raised::Minutes) => {
                Reaction::Goto(State::Minutes(FieldState::Focussed))
            }
            Internal(Raised::Done) => Reaction::Goto(State::Visited),
            _ => Reaction::Ignored,
        },

        State::Minutes(FieldState::Focussed) => match signal {
            External(Event::Increment) => {
                context.set_minutes(Some(step_minutes(context.minutes(), 1)));
                Reaction::Handled
            }
            External(Event::Decrement) => {
                context.set_minutes(Some(step_minutes(context.minutes(), -1)));
                Reaction::Handled
            }
            External(Event::UserInput { input }) => {
                context.set_minutes(typed_minutes(input));
                Reaction::Handled
            }
            External(Event::Tab) => {
                raised.push(Raised::Meridiem);
                Reaction::Handled
            }
            External(Event::Blur) => {
                raised.push(Raised::Done);
                Reaction::Handled
            }
            External(Event::Meridiem) | Internal(Raised::Meridiem) => {
                Reaction::Goto(State::Meridiem(FieldState::Focussed))
            }
            Internal(Raised::Done) => Reaction::Goto(State::Visited),
            _ => Reaction::Ignored,
        },

        State::Meridiem(FieldState::Focussed) => match signal {
            External(Event::Toggle) => {
                let toggled = context.meridiem().toggled();
                context.set_meridiem(MeridiemEntry::Set(toggled));
                Reaction::Handled
            }
            External(Event::UserInput { input }) => {
                context.set_meridiem(MeridiemEntry::from_typed(input));
                Reaction::Handled
            }
            External(Event::Blur) => {
                let coerced = context.meridiem().coerced();
                context.set_meridiem(MeridiemEntry::Set(coerced));
                raised.push(Raised::Done);
                Reaction::Handled
            }
            Internal(Raised::Done) => Reaction::Goto(State::Visited),
            _ => Reaction::Ignored,
        },

        State::Dropdown(step) => match (step, signal) {
            (DropdownStep::Hours, External(Event::Select { input })) => {
                context.set_hours(picked_hours(input));
                Reaction::Goto(State::Dropdown(DropdownStep::Minutes))
            }
            (DropdownStep::Minutes, External(Event::Select { input })) => {
                context.set_minutes(picked_minutes(input));
                Reaction::Goto(State::Dropdown(DropdownStep::Meridiem))
            }
            (DropdownStep::Meridiem, External(Event::SelectMeridiem { input })) => {
                context.set_meridiem(MeridiemEntry::Set(*input));
                raised.push(Raised::Done);
                Reaction::Handled
            }
            // Leaves the dropdown for the minutes editing phase.
            (_, External(Event::Minutes)) => Reaction::Goto(State::Minutes(FieldState::Focussed)),
            (_, External(Event::ToggleDropdown) | Internal(Raised::Done)) => {
                Reaction::Goto(State::Visited)
            }
            _ => Reaction::Ignored,
        },

        State::Visited | State::Invalid => match signal {
            External(Event::Focus) => Reaction::Goto(State::Focussed),
            _ => Reaction::Ignored,
        },

        State::Valid => match signal {
            External(Event::Focus) => Reaction::Goto(State::Focussed),
            External(Event::ToggleDropdown) => Reaction::Goto(State::Dropdown(DropdownStep::Hours)),
            _ => Reaction::Ignored,
        },
    }
}

/// Owns a [`TimeContext`] and its [`State`], and reports completed edits.
///
/// `on_commit` runs once for every entry into [`State::Valid`], after the
/// machine has settled. Dispatch takes `&mut self`, so events on one
/// machine are always processed one at a time.
pub struct TimeMachine<F> {
    state: State,
    context: TimeContext,
    on_commit: F,
}

impl<F> fmt::Debug for TimeMachine<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeMachine")
            .field("state", &self.state)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl TimeMachine<fn(TimeValue)> {
    /// A machine whose commits are observed only through [`TimeMachine::value`].
    #[must_use]
    pub fn without_commit(initial: InitialTime) -> Self {
        Self::new(initial, |_| {})
    }
}

impl<F: FnMut(TimeValue)> TimeMachine<F> {
    /// Creates a machine in [`State::Idle`] seeded from `initial`.
    pub fn new(initial: InitialTime, on_commit: F) -> Self {
        Self {
            state: State::Idle,
            context: TimeContext::new(initial),
            on_commit,
        }
    }

    /// Dispatches one event and runs any resulting commit.
    ///
    /// Returns `false` if the current state ignored the event.
    pub fn send(&mut self, event: Event) -> bool {
        let mut effects = Effects::new();
        let from = self.state;
        let (state, handled) = settle(from, &mut self.context, &event, &mut effects);
        self.state = state;
        log_trace!(event = ?event, from = %from, to = %state, handled, "time input event");

        for effect in effects {
            match effect {
                Effect::Commit(value) => {
                    log_debug!(value = %value, "time input commit");
                    (self.on_commit)(value);
                }
            }
        }
        handled
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Current, possibly incomplete, value.
    #[must_use]
    pub fn context(&self) -> &TimeContext {
        &self.context
    }

    /// The current value if it is complete.
    #[must_use]
    pub fn value(&self) -> Option<TimeValue> {
        self.context.resolve()
    }

    /// Shorthand for [`State::matches`] on the current state.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.state.matches(path)
    }

    /// Owned copy of the state and context.
    #[must_use]
    pub fn snapshot(&self) -> (State, TimeContext) {
        (self.state, self.context.clone())
    }

    /// Consumes the machine, returning its context.
    #[must_use]
    pub fn into_context(self) -> TimeContext {
        self.context
    }
}
