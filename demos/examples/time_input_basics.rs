// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time input basics.
//!
//! Drive a time input through a keyboard edit and a dropdown pick, printing
//! the rendered field after each event and the formatted commits.
//!
//! Run:
//! - `cargo run -p understory_demos --example time_input_basics`
//! - `RUST_LOG=trace cargo run -p understory_demos --example time_input_basics`

use tracing_subscriber::EnvFilter;
use understory_demos::{key_event, render};
use understory_time_input::{Event, InitialTime, Meridiem, TimeMachine, TimeValue};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let initial: TimeValue = "9:00 AM".parse().expect("valid seed time");
    let mut machine = TimeMachine::new(InitialTime::from(initial), |value: TimeValue| {
        println!("  commit -> {value}");
    });

    println!("Keyboard edit");
    let script = [
        Event::Focus,
        Event::Hours,
        key_event("ArrowUp").expect("mapped key"),
        key_event("ArrowUp").expect("mapped key"),
        key_event("Tab").expect("mapped key"),
        Event::user_input("4"),
        Event::user_input("45"),
        key_event("Tab").expect("mapped key"),
        Event::user_input("p"),
        Event::Blur,
    ];
    for event in script {
        step(&mut machine, event);
    }

    println!("Dropdown pick");
    let script = [
        Event::ToggleDropdown,
        Event::select("7"),
        Event::select("30"),
        Event::select_meridiem(Meridiem::Am),
    ];
    for event in script {
        step(&mut machine, event);
    }

    println!("Cleared hours");
    let script = [
        Event::Focus,
        Event::Hours,
        Event::user_input(""),
        Event::Blur,
    ];
    for event in script {
        step(&mut machine, event);
    }
    println!("  missing: {:?}", machine.context().missing());
}

fn step(machine: &mut TimeMachine<impl FnMut(TimeValue)>, event: Event) {
    let label = format!("{event:?}");
    let handled = machine.send(event);
    println!(
        "{label:<28} {:<18} {}{}",
        machine.state().to_string(),
        render(machine.state(), machine.context()),
        if handled { "" } else { "  (ignored)" }
    );
}
