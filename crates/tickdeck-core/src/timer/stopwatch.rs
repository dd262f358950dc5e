//! Stopwatch with lap recording.
//!
//! Each tick adds a fixed [`STOPWATCH_STEP_MS`]; the elapsed total is a tick
//! count, not a wall-clock measurement, so ticks the scheduler drops are lost.

use std::time::Duration;

use chrono::Utc;
use serde::Serialize;

use crate::events::Event;
use crate::format::format_milliseconds;
use crate::runtime::Periodic;

pub const STOPWATCH_STEP_MS: u64 = 10;
pub const STOPWATCH_TICK: Duration = Duration::from_millis(STOPWATCH_STEP_MS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchInput {
    Start,
    Pause,
    Reset,
    Lap,
    Tick,
}

#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    elapsed_ms: u64,
    laps: Vec<u64>,
    running: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopwatchSnapshot {
    pub running: bool,
    pub elapsed_ms: u64,
    pub display: String,
    pub laps: Vec<u64>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Lap snapshots in the order they were taken.
    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn snapshot(&self) -> StopwatchSnapshot {
        StopwatchSnapshot {
            running: self.running,
            elapsed_ms: self.elapsed_ms,
            display: format_milliseconds(self.elapsed_ms),
            laps: self.laps.clone(),
        }
    }

    pub fn start(&mut self) -> Option<Event> {
        self.transition(StopwatchInput::Start)
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.transition(StopwatchInput::Pause)
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.transition(StopwatchInput::Reset)
    }

    pub fn lap(&mut self) -> Option<Event> {
        self.transition(StopwatchInput::Lap)
    }

    pub fn tick(&mut self) -> Option<Event> {
        self.transition(StopwatchInput::Tick)
    }

    pub fn transition(&mut self, input: StopwatchInput) -> Option<Event> {
        match input {
            StopwatchInput::Start => {
                if self.running {
                    return None;
                }
                self.running = true;
                Some(Event::StopwatchStarted {
                    elapsed_ms: self.elapsed_ms,
                    at: Utc::now(),
                })
            }
            StopwatchInput::Pause => {
                if !self.running {
                    return None;
                }
                self.running = false;
                Some(Event::StopwatchPaused {
                    elapsed_ms: self.elapsed_ms,
                    at: Utc::now(),
                })
            }
            StopwatchInput::Reset => {
                self.running = false;
                self.elapsed_ms = 0;
                self.laps.clear();
                Some(Event::StopwatchReset { at: Utc::now() })
            }
            // Allowed while paused too; the snapshot is simply repeated.
            StopwatchInput::Lap => {
                self.laps.push(self.elapsed_ms);
                Some(Event::LapRecorded {
                    lap: self.laps.len(),
                    elapsed_ms: self.elapsed_ms,
                    at: Utc::now(),
                })
            }
            StopwatchInput::Tick => {
                if self.running {
                    self.elapsed_ms = self.elapsed_ms.saturating_add(STOPWATCH_STEP_MS);
                }
                None
            }
        }
    }
}

impl Periodic for Stopwatch {
    fn period(&self) -> Duration {
        STOPWATCH_TICK
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn tick(&mut self) -> Option<Event> {
        Stopwatch::tick(self)
    }

    fn halt(&mut self) -> Option<Event> {
        self.pause()
    }
}
