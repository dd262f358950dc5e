//! Countdown timer state machine.
//!
//! Seeded from a minutes/seconds pair, it loses exactly one second per tick
//! and stops itself on reaching zero:
//!
//! ```text
//! Idle --start(>0)--> Running --tick(remaining == 1)--> Idle (finished)
//!                     Running --pause--> Idle
//! ```
//!
//! No scheduling happens here; see [`crate::runtime::Driver`] for that.

use std::ops::RangeInclusive;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;

use crate::events::Event;
use crate::format::format_seconds;
use crate::input::parse_leading_int;
use crate::runtime::Periodic;

pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Accepted range for both the minutes and the seconds field.
pub const FIELD_RANGE: RangeInclusive<u32> = 0..=59;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownInput {
    Start { minutes: u32, seconds: u32 },
    /// Start from the pending field values.
    StartPending,
    Pause,
    Reset,
    Tick,
}

#[derive(Debug, Clone, Default)]
pub struct CountdownTimer {
    remaining_secs: u32,
    running: bool,
    minutes_input: u32,
    seconds_input: u32,
}

/// Read-only view of a countdown for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownSnapshot {
    pub running: bool,
    pub remaining_secs: u32,
    pub display: String,
    pub minutes_input: u32,
    pub seconds_input: u32,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a timer whose pending fields are pre-filled.
    ///
    /// Out-of-range values fall back to 0.
    pub fn with_inputs(minutes: u32, seconds: u32) -> Self {
        let mut timer = Self::new();
        timer.set_minutes(i64::from(minutes));
        timer.set_seconds(i64::from(seconds));
        timer
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn minutes_input(&self) -> u32 {
        self.minutes_input
    }

    pub fn seconds_input(&self) -> u32 {
        self.seconds_input
    }

    pub fn snapshot(&self) -> CountdownSnapshot {
        CountdownSnapshot {
            running: self.running,
            remaining_secs: self.remaining_secs,
            display: format_seconds(u64::from(self.remaining_secs)),
            minutes_input: self.minutes_input,
            seconds_input: self.seconds_input,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self, minutes: u32, seconds: u32) -> Option<Event> {
        self.transition(CountdownInput::Start { minutes, seconds })
    }

    pub fn start_pending(&mut self) -> Option<Event> {
        self.transition(CountdownInput::StartPending)
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.transition(CountdownInput::Pause)
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.transition(CountdownInput::Reset)
    }

    /// Advance one second. Returns `CountdownFinished` on the tick that hits zero.
    pub fn tick(&mut self) -> Option<Event> {
        self.transition(CountdownInput::Tick)
    }

    pub fn transition(&mut self, input: CountdownInput) -> Option<Event> {
        match input {
            CountdownInput::Start { minutes, seconds } => self.seed(minutes, seconds),
            CountdownInput::StartPending => self.seed(self.minutes_input, self.seconds_input),
            CountdownInput::Pause => self.stop(),
            CountdownInput::Reset => {
                self.running = false;
                self.remaining_secs = 0;
                Some(Event::CountdownReset { at: Utc::now() })
            }
            CountdownInput::Tick => {
                if !self.running {
                    return None;
                }
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
                if self.remaining_secs == 0 {
                    self.running = false;
                    return Some(Event::CountdownFinished { at: Utc::now() });
                }
                None
            }
        }
    }

    // ── Pending inputs ───────────────────────────────────────────────

    /// Update the pending minutes from raw field text.
    ///
    /// Non-numeric text counts as 0. Returns whether the value was accepted.
    pub fn set_minutes_input(&mut self, raw: &str) -> bool {
        self.set_minutes(parse_leading_int(raw).unwrap_or(0))
    }

    /// Update the pending seconds from raw field text.
    pub fn set_seconds_input(&mut self, raw: &str) -> bool {
        self.set_seconds(parse_leading_int(raw).unwrap_or(0))
    }

    pub fn set_minutes(&mut self, value: i64) -> bool {
        match field_value(value) {
            Some(v) => {
                self.minutes_input = v;
                true
            }
            None => {
                tracing::debug!(value, "countdown minutes rejected");
                false
            }
        }
    }

    pub fn set_seconds(&mut self, value: i64) -> bool {
        match field_value(value) {
            Some(v) => {
                self.seconds_input = v;
                true
            }
            None => {
                tracing::debug!(value, "countdown seconds rejected");
                false
            }
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn seed(&mut self, minutes: u32, seconds: u32) -> Option<Event> {
        if !FIELD_RANGE.contains(&minutes) || !FIELD_RANGE.contains(&seconds) {
            tracing::debug!(minutes, seconds, "countdown start rejected: field out of range");
            return None;
        }

        let total = minutes * 60 + seconds;
        if total == 0 {
            // Nothing to count; make sure an earlier run does not linger.
            let event = self.stop();
            self.remaining_secs = 0;
            return event;
        }

        self.remaining_secs = total;
        self.running = true;
        Some(Event::CountdownStarted {
            remaining_secs: total,
            at: Utc::now(),
        })
    }

    fn stop(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::CountdownPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }
}

fn field_value(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| FIELD_RANGE.contains(v))
}

impl Periodic for CountdownTimer {
    fn period(&self) -> Duration {
        COUNTDOWN_TICK
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn tick(&mut self) -> Option<Event> {
        CountdownTimer::tick(self)
    }

    fn halt(&mut self) -> Option<Event> {
        self.pause()
    }
}
