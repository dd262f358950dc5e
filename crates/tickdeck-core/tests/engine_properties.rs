//! Property tests for the three timer engines.
//!
//! Engines are driven by calling `tick()` directly, so these run without
//! any scheduler or wall clock.

use proptest::prelude::*;
use tickdeck_core::{
    format_milliseconds, format_seconds, CountdownTimer, PomodoroScheduler, Session, Stopwatch,
};

#[derive(Debug, Clone)]
enum StopwatchOp {
    Start,
    Pause,
    Lap,
    Tick(u8),
}

fn stopwatch_op() -> impl Strategy<Value = StopwatchOp> {
    prop_oneof![
        Just(StopwatchOp::Start),
        Just(StopwatchOp::Pause),
        Just(StopwatchOp::Lap),
        any::<u8>().prop_map(StopwatchOp::Tick),
    ]
}

proptest! {
    #[test]
    fn countdown_never_increases_or_underflows(
        minutes in 0u32..=59,
        seconds in 0u32..=59,
        ticks in 0u32..4000,
    ) {
        let mut timer = CountdownTimer::new();
        timer.start(minutes, seconds);
        let total = minutes * 60 + seconds;
        prop_assert_eq!(timer.is_running(), total > 0);

        let mut previous = timer.remaining_secs();
        for _ in 0..ticks {
            timer.tick();
            let now = timer.remaining_secs();
            prop_assert!(now <= previous);
            if now == 0 {
                prop_assert!(!timer.is_running());
            }
            previous = now;
        }
        prop_assert_eq!(timer.remaining_secs(), total.saturating_sub(ticks));
    }

    #[test]
    fn stopwatch_elapsed_is_ten_per_tick(n in 0u32..5000) {
        let mut sw = Stopwatch::new();
        sw.start();
        for _ in 0..n {
            sw.tick();
        }
        prop_assert_eq!(sw.elapsed_ms(), 10 * u64::from(n));
    }

    #[test]
    fn laps_are_append_only_and_sorted(ops in prop::collection::vec(stopwatch_op(), 0..60)) {
        let mut sw = Stopwatch::new();
        let mut lap_calls = 0;
        for op in ops {
            match op {
                StopwatchOp::Start => { sw.start(); }
                StopwatchOp::Pause => { sw.pause(); }
                StopwatchOp::Lap => {
                    let before = sw.laps().to_vec();
                    sw.lap();
                    lap_calls += 1;
                    prop_assert_eq!(&sw.laps()[..before.len()], &before[..]);
                }
                StopwatchOp::Tick(n) => {
                    for _ in 0..n {
                        sw.tick();
                    }
                }
            }
        }
        prop_assert_eq!(sw.laps().len(), lap_calls);
        prop_assert!(sw.laps().windows(2).all(|w| w[0] <= w[1]));

        sw.reset();
        prop_assert!(sw.laps().is_empty());
        prop_assert_eq!(sw.elapsed_ms(), 0);
    }

    #[test]
    fn pomodoro_alternates_strictly(work in 1u32..=3, brk in 1u32..=3, cycles in 1usize..4) {
        let mut p = PomodoroScheduler::with_durations(work, brk);
        p.toggle();

        let mut expected = Session::Work;
        for _ in 0..cycles * 2 {
            let span = p.session_secs(expected);
            for _ in 0..span {
                p.tick();
            }
            expected = expected.next();
            prop_assert_eq!(p.session(), expected);
            prop_assert_eq!(p.time_left_secs(), p.session_secs(expected));
            prop_assert!(p.is_running());
        }
    }

    #[test]
    fn preset_while_running_changes_nothing(
        work in 1u32..=120,
        brk in 1u32..=60,
        ticks in 0u32..200,
    ) {
        let mut p = PomodoroScheduler::new();
        p.toggle();
        for _ in 0..ticks {
            p.tick();
        }
        let before = p.snapshot();
        prop_assert!(p.set_preset(work, brk).is_none());
        prop_assert_eq!(p.snapshot(), before);
    }

    #[test]
    fn formatted_seconds_are_fixed_width(s in 0u64..(100 * 60)) {
        let text = format_seconds(s);
        prop_assert_eq!(text.len(), 5);
        prop_assert_eq!(&text[2..3], ":");
    }

    #[test]
    fn formatted_milliseconds_round_trip_to_centiseconds(ms in 0u64..(100 * 60 * 1000)) {
        let text = format_milliseconds(ms);
        let (mm, rest) = text.split_once(':').unwrap();
        let (ss, cc) = rest.split_once('.').unwrap();
        let parsed = mm.parse::<u64>().unwrap() * 60_000
            + ss.parse::<u64>().unwrap() * 1000
            + cc.parse::<u64>().unwrap() * 10;
        prop_assert_eq!(parsed, ms - ms % 10);
    }
}

#[test]
fn pomodoro_work_minute_then_break() {
    let mut p = PomodoroScheduler::with_durations(1, 5);
    p.toggle();
    for _ in 0..60 {
        p.tick();
    }
    assert_eq!(p.session(), Session::Break);
    assert_eq!(p.time_left_secs(), 5 * 60);

    for _ in 0..5 * 60 {
        p.tick();
    }
    assert_eq!(p.session(), Session::Work);
}

#[test]
fn pause_twice_equals_pause_once() {
    let mut timer = CountdownTimer::new();
    timer.start(0, 30);
    timer.tick();
    timer.pause();
    let countdown_once = timer.snapshot();
    timer.pause();
    assert_eq!(timer.snapshot(), countdown_once);

    let mut sw = Stopwatch::new();
    sw.start();
    sw.tick();
    sw.pause();
    let stopwatch_once = sw.snapshot();
    sw.pause();
    assert_eq!(sw.snapshot(), stopwatch_once);

    let mut p = PomodoroScheduler::new();
    p.toggle();
    p.tick();
    p.pause();
    let pomodoro_once = p.snapshot();
    p.pause();
    assert_eq!(p.snapshot(), pomodoro_once);
}

#[test]
fn formatter_boundaries() {
    assert_eq!(format_seconds(0), "00:00");
    assert_eq!(format_seconds(125), "02:05");
    assert_eq!(format_milliseconds(61_234), "01:01.23");
}
