//! Pomodoro session scheduler.
//!
//! Two independent axes, `running` and the current [`Session`], give four
//! states. Ticks only move time while running; exhausting a session rolls
//! straight into the next one without user action:
//!
//! ```text
//! Work(running) --time_left == 0--> Break(running) --time_left == 0--> Work(running) ...
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut pomodoro = PomodoroScheduler::new();
//! pomodoro.toggle();
//! // Once per second:
//! pomodoro.tick(); // Returns Some(Event::SessionSwitched) at a boundary
//! ```

use std::time::Duration;

use chrono::Utc;
use serde::Serialize;

use super::session::{
    Preset, Session, BREAK_MINUTES_RANGE, DEFAULT_BREAK_MINUTES, DEFAULT_WORK_MINUTES,
    WORK_MINUTES_RANGE,
};
use crate::events::Event;
use crate::format::format_seconds;
use crate::input::parse_leading_int;
use crate::runtime::Periodic;

pub const POMODORO_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PomodoroInput {
    Toggle,
    Start,
    Pause,
    Tick,
    Reset,
    SetPreset { work: u32, brk: u32 },
    SetWork(i64),
    SetBreak(i64),
}

#[derive(Debug, Clone)]
pub struct PomodoroScheduler {
    work_minutes: u32,
    break_minutes: u32,
    session: Session,
    time_left_secs: u32,
    running: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomodoroSnapshot {
    pub running: bool,
    pub session: Session,
    pub time_left_secs: u32,
    pub display: String,
    pub work_minutes: u32,
    pub break_minutes: u32,
}

impl Default for PomodoroScheduler {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
            session: Session::Work,
            time_left_secs: DEFAULT_WORK_MINUTES * 60,
            running: false,
        }
    }
}

impl PomodoroScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paused scheduler with the given durations.
    ///
    /// Invalid pairs are rejected the same way [`set_preset`](Self::set_preset)
    /// rejects them, leaving the 25/5 defaults in place.
    pub fn with_durations(work_minutes: u32, break_minutes: u32) -> Self {
        let mut scheduler = Self::new();
        scheduler.set_preset(work_minutes, break_minutes);
        scheduler
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn time_left_secs(&self) -> u32 {
        self.time_left_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Full length of `session` under the current configuration.
    pub fn session_secs(&self, session: Session) -> u32 {
        match session {
            Session::Work => self.work_minutes * 60,
            Session::Break => self.break_minutes * 60,
        }
    }

    pub fn snapshot(&self) -> PomodoroSnapshot {
        PomodoroSnapshot {
            running: self.running,
            session: self.session,
            time_left_secs: self.time_left_secs,
            display: format_seconds(u64::from(self.time_left_secs)),
            work_minutes: self.work_minutes,
            break_minutes: self.break_minutes,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn toggle(&mut self) -> Option<Event> {
        self.transition(PomodoroInput::Toggle)
    }

    pub fn start(&mut self) -> Option<Event> {
        self.transition(PomodoroInput::Start)
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.transition(PomodoroInput::Pause)
    }

    /// Call once per second while running.
    pub fn tick(&mut self) -> Option<Event> {
        self.transition(PomodoroInput::Tick)
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.transition(PomodoroInput::Reset)
    }

    pub fn set_preset(&mut self, work: u32, brk: u32) -> Option<Event> {
        self.transition(PomodoroInput::SetPreset { work, brk })
    }

    pub fn apply_preset(&mut self, preset: Preset) -> Option<Event> {
        let (work, brk) = preset.durations();
        self.set_preset(work, brk)
    }

    pub fn set_work_duration(&mut self, minutes: i64) -> Option<Event> {
        self.transition(PomodoroInput::SetWork(minutes))
    }

    pub fn set_break_duration(&mut self, minutes: i64) -> Option<Event> {
        self.transition(PomodoroInput::SetBreak(minutes))
    }

    /// Update the work duration from raw field text. Non-numeric text is rejected.
    pub fn set_work_input(&mut self, raw: &str) -> Option<Event> {
        let value = parse_leading_int(raw)?;
        self.set_work_duration(value)
    }

    /// Update the break duration from raw field text. Non-numeric text is rejected.
    pub fn set_break_input(&mut self, raw: &str) -> Option<Event> {
        let value = parse_leading_int(raw)?;
        self.set_break_duration(value)
    }

    pub fn transition(&mut self, input: PomodoroInput) -> Option<Event> {
        match input {
            PomodoroInput::Toggle => {
                if self.running {
                    self.transition(PomodoroInput::Pause)
                } else {
                    self.transition(PomodoroInput::Start)
                }
            }
            PomodoroInput::Start => {
                if self.running {
                    return None;
                }
                self.running = true;
                Some(Event::PomodoroStarted {
                    session: self.session,
                    time_left_secs: self.time_left_secs,
                    at: Utc::now(),
                })
            }
            PomodoroInput::Pause => {
                if !self.running {
                    return None;
                }
                self.running = false;
                Some(Event::PomodoroPaused {
                    session: self.session,
                    time_left_secs: self.time_left_secs,
                    at: Utc::now(),
                })
            }
            PomodoroInput::Tick => {
                if !self.running {
                    return None;
                }
                self.time_left_secs = self.time_left_secs.saturating_sub(1);
                if self.time_left_secs == 0 {
                    return Some(self.switch_session());
                }
                None
            }
            PomodoroInput::Reset => {
                self.running = false;
                self.session = Session::Work;
                self.time_left_secs = self.session_secs(Session::Work);
                Some(Event::PomodoroReset { at: Utc::now() })
            }
            PomodoroInput::SetPreset { work, brk } => {
                if self.reject_while_running("preset") {
                    return None;
                }
                if !WORK_MINUTES_RANGE.contains(&work) || !BREAK_MINUTES_RANGE.contains(&brk) {
                    tracing::debug!(work, brk, "preset rejected: duration out of range");
                    return None;
                }
                self.work_minutes = work;
                self.break_minutes = brk;
                Some(self.reconfigured(None))
            }
            PomodoroInput::SetWork(minutes) => {
                if self.reject_while_running("work duration") {
                    return None;
                }
                let Some(minutes) = in_range(minutes, &WORK_MINUTES_RANGE) else {
                    tracing::debug!(minutes, "work duration rejected: out of range");
                    return None;
                };
                self.work_minutes = minutes;
                Some(self.reconfigured(Some(Session::Work)))
            }
            PomodoroInput::SetBreak(minutes) => {
                if self.reject_while_running("break duration") {
                    return None;
                }
                let Some(minutes) = in_range(minutes, &BREAK_MINUTES_RANGE) else {
                    tracing::debug!(minutes, "break duration rejected: out of range");
                    return None;
                };
                self.break_minutes = minutes;
                Some(self.reconfigured(Some(Session::Break)))
            }
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn switch_session(&mut self) -> Event {
        let from = self.session;
        self.session = from.next();
        self.time_left_secs = self.session_secs(self.session);
        tracing::debug!(%from, to = %self.session, "pomodoro session switched");
        Event::SessionSwitched {
            from,
            to: self.session,
            duration_secs: self.time_left_secs,
            at: Utc::now(),
        }
    }

    /// Recompute the countdown from the current session's duration, unless
    /// only the other session's duration changed. Only reachable while paused.
    fn reconfigured(&mut self, changed: Option<Session>) -> Event {
        if changed.map_or(true, |s| s == self.session) {
            self.time_left_secs = self.session_secs(self.session);
        }
        Event::PomodoroReconfigured {
            work_minutes: self.work_minutes,
            break_minutes: self.break_minutes,
            time_left_secs: self.time_left_secs,
            at: Utc::now(),
        }
    }

    fn reject_while_running(&self, what: &str) -> bool {
        if self.running {
            tracing::debug!("{what} change rejected: pomodoro is running");
        }
        self.running
    }
}

fn in_range(value: i64, range: &std::ops::RangeInclusive<u32>) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| range.contains(v))
}

impl Periodic for PomodoroScheduler {
    fn period(&self) -> Duration {
        POMODORO_TICK
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn tick(&mut self) -> Option<Event> {
        PomodoroScheduler::tick(self)
    }

    fn halt(&mut self) -> Option<Event> {
        self.pause()
    }
}
