// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_time_input::{
    Event, FieldState, InitialTime, Meridiem, State, TimeContext, TimeMachine, transition,
};

fn keyboard_script() -> Vec<Event> {
    vec![
        Event::Focus,
        Event::Hours,
        Event::Increment,
        Event::Increment,
        Event::Increment,
        Event::Tab,
        Event::user_input("45"),
        Event::Tab,
        Event::Toggle,
        Event::Blur,
    ]
}

fn dropdown_script() -> Vec<Event> {
    vec![
        Event::ToggleDropdown,
        Event::select("7"),
        Event::select("30"),
        Event::select_meridiem(Meridiem::Am),
    ]
}

fn bench_scripts(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_input/script");

    for (name, script) in [("keyboard", keyboard_script()), ("dropdown", dropdown_script())] {
        group.throughput(Throughput::Elements(script.len() as u64));
        group.bench_with_input(BenchmarkId::new("send", name), &script, |b, script| {
            b.iter_batched(
                || script.clone(),
                |events| {
                    let mut commits = 0_u32;
                    let mut machine = TimeMachine::new(InitialTime::new(), |_| commits += 1);
                    for event in events {
                        machine.send(event);
                    }
                    black_box(machine.state());
                    drop(machine);
                    black_box(commits);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_stepping(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_input/stepping");

    // Increments never leave the hours phase, so this isolates the reducer.
    for steps in [12_usize, 144, 1_440] {
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_with_input(BenchmarkId::new("increment", steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut machine = TimeMachine::without_commit(InitialTime::new());
                machine.send(Event::Focus);
                machine.send(Event::Hours);
                for _ in 0..steps {
                    machine.send(Event::Increment);
                }
                black_box(machine.value());
            });
        });
    }

    group.bench_function("transition/pure", |b| {
        let context = TimeContext::new(InitialTime::new());
        let state = State::Minutes(FieldState::Focussed);
        let event = Event::user_input("45");
        b.iter(|| black_box(transition(state, black_box(&context), &event)));
    });

    group.finish();
}

criterion_group!(benches, bench_scripts, bench_stepping);
criterion_main!(benches);
