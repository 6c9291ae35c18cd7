// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared host glue for the Understory demos.
//!
//! A real host would translate DOM or winit events; here keys are plain
//! strings and the "rendering" is a line of text.

use understory_time_input::{Event, Fields, MeridiemEntry, State, TimeContext};

/// Maps a key name to a time-input event, the way a text host would.
///
/// These bindings are illustrative demo choices, not part of the widget's
/// contract. Each host picks its own keys: a host may step with on-screen
/// up/down buttons instead of arrow keys and leave Tab, the arrows and
/// Backspace to the browser.
///
/// Digits and letters are not mapped here: the host appends them to the
/// active part's text and sends [`Event::UserInput`] with the whole text.
pub fn key_event(key: &str) -> Option<Event> {
    match key {
        "ArrowUp" => Some(Event::Increment),
        "ArrowDown" => Some(Event::Decrement),
        "Tab" => Some(Event::Tab),
        "Escape" => Some(Event::Blur),
        " " => Some(Event::Toggle),
        "F4" => Some(Event::ToggleDropdown),
        _ => None,
    }
}

/// Renders the context as `HH:MM AM`, bracketing the active part.
///
/// Unset parts show as `--`; raw meridiem text is shown as typed.
pub fn render(state: State, context: &TimeContext) -> String {
    let hours = context
        .hours()
        .map_or_else(|| "--".to_owned(), |h| format!("{h:02}"));
    let minutes = context
        .minutes()
        .map_or_else(|| "--".to_owned(), |m| format!("{m:02}"));
    let meridiem = match context.meridiem() {
        MeridiemEntry::Unset => "--".to_owned(),
        MeridiemEntry::Set(m) => m.to_string(),
        MeridiemEntry::Raw(text) => text.clone(),
    };

    let active = state.active_part().unwrap_or(Fields::empty());
    let mark = |part: Fields, text: String| {
        if active.contains(part) {
            format!("[{text}]")
        } else {
            text
        }
    };
    format!(
        "{}:{} {}",
        mark(Fields::HOURS, hours),
        mark(Fields::MINUTES, minutes),
        mark(Fields::MERIDIEM, meridiem)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_time_input::{FieldState, InitialTime};

    #[test]
    fn render_brackets_active_part() {
        let ctx = TimeContext::new(InitialTime::new().with_hours(4).with_minutes(5));
        assert_eq!(render(State::Idle, &ctx), "04:05 AM");
        assert_eq!(
            render(State::Minutes(FieldState::Focussed), &ctx),
            "04:[05] AM"
        );
        assert_eq!(render(State::Idle, &TimeContext::unset()), "--:-- --");
    }

    #[test]
    fn arrows_step() {
        assert_eq!(key_event("ArrowUp"), Some(Event::Increment));
        assert_eq!(key_event("7"), None);
    }

    #[test]
    fn unbound_keys_are_left_to_the_host() {
        for key in ["Backspace", "Enter", "a", "p", "ArrowLeft"] {
            assert_eq!(key_event(key), None, "{key} should not be bound");
        }
    }
}
