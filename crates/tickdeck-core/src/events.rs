use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Session;

/// Every state change in the engine produces an Event.
/// Hosts poll snapshots for rendering; listeners subscribe to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    CountdownStarted {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    CountdownPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    CountdownReset {
        at: DateTime<Utc>,
    },
    /// The countdown reached zero and stopped itself.
    CountdownFinished {
        at: DateTime<Utc>,
    },
    StopwatchStarted {
        elapsed_ms: u64,
        at: DateTime<Utc>,
    },
    StopwatchPaused {
        elapsed_ms: u64,
        at: DateTime<Utc>,
    },
    StopwatchReset {
        at: DateTime<Utc>,
    },
    LapRecorded {
        /// 1-based lap number.
        lap: usize,
        elapsed_ms: u64,
        at: DateTime<Utc>,
    },
    PomodoroStarted {
        session: Session,
        time_left_secs: u32,
        at: DateTime<Utc>,
    },
    PomodoroPaused {
        session: Session,
        time_left_secs: u32,
        at: DateTime<Utc>,
    },
    PomodoroReset {
        at: DateTime<Utc>,
    },
    /// A session ran out and the scheduler rolled into the next one.
    SessionSwitched {
        from: Session,
        to: Session,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    /// Durations changed while paused.
    PomodoroReconfigured {
        work_minutes: u32,
        break_minutes: u32,
        time_left_secs: u32,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Whether this event begins (or restarts) a component's periodic tick.
    pub fn starts_ticking(&self) -> bool {
        matches!(
            self,
            Event::CountdownStarted { .. }
                | Event::StopwatchStarted { .. }
                | Event::PomodoroStarted { .. }
        )
    }
}
