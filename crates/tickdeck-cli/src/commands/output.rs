//! Terminal rendering shared by the live commands.

use std::cell::Cell;
use std::io::Write;

use tickdeck_core::{format_milliseconds, format_seconds, Event};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Prints events either as JSON lines or as text, with an in-place status
/// line in text mode.
pub struct Output {
    json: bool,
    status_shown: Cell<bool>,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            status_shown: Cell::new(false),
        }
    }

    pub fn event(&self, event: &Event) -> Result<(), serde_json::Error> {
        if self.json {
            println!("{}", serde_json::to_string(event)?);
        } else {
            self.line(&describe(event));
        }
        Ok(())
    }

    /// Print a full line, ending any status line first.
    pub fn line(&self, text: &str) {
        if self.status_shown.replace(false) {
            println!();
        }
        println!("{text}");
    }

    /// Overwrite the status line. Silent in JSON mode.
    pub fn status(&self, text: &str) {
        if self.json {
            return;
        }
        print!("\r{text}    ");
        let _ = std::io::stdout().flush();
        self.status_shown.set(true);
    }

    pub fn finish(&self) {
        if self.status_shown.replace(false) {
            println!();
        }
    }
}

pub fn describe(event: &Event) -> String {
    match event {
        Event::CountdownStarted { remaining_secs, .. } => {
            format!("Countdown started: {}", format_seconds(u64::from(*remaining_secs)))
        }
        Event::CountdownPaused { remaining_secs, .. } => {
            format!("Countdown paused at {}", format_seconds(u64::from(*remaining_secs)))
        }
        Event::CountdownReset { .. } => "Countdown reset".to_string(),
        Event::CountdownFinished { .. } => "Time's up!".to_string(),
        Event::StopwatchStarted { elapsed_ms, .. } => {
            format!("Stopwatch running from {}", format_milliseconds(*elapsed_ms))
        }
        Event::StopwatchPaused { elapsed_ms, .. } => {
            format!("Stopwatch paused at {}", format_milliseconds(*elapsed_ms))
        }
        Event::StopwatchReset { .. } => "Stopwatch reset".to_string(),
        Event::LapRecorded { lap, elapsed_ms, .. } => {
            format!("Lap {lap}: {}", format_milliseconds(*elapsed_ms))
        }
        Event::PomodoroStarted { session, time_left_secs, .. } => {
            format!("{session} running, {} left", format_seconds(u64::from(*time_left_secs)))
        }
        Event::PomodoroPaused { session, time_left_secs, .. } => {
            format!("{session} paused, {} left", format_seconds(u64::from(*time_left_secs)))
        }
        Event::PomodoroReset { .. } => "Pomodoro reset".to_string(),
        Event::SessionSwitched { to, duration_secs, .. } => {
            format!("{to} session started ({})", format_seconds(u64::from(*duration_secs)))
        }
        Event::PomodoroReconfigured { work_minutes, break_minutes, time_left_secs, .. } => format!(
            "Durations set to {work_minutes}/{break_minutes} min, {} on the clock",
            format_seconds(u64::from(*time_left_secs))
        ),
    }
}

pub fn stdin_lines() -> Lines<BufReader<Stdin>> {
    BufReader::new(tokio::io::stdin()).lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tickdeck_core::Session;

    #[test]
    fn describes_session_switch() {
        let text = describe(&Event::SessionSwitched {
            from: Session::Work,
            to: Session::Break,
            duration_secs: 300,
            at: Utc::now(),
        });
        assert_eq!(text, "Break session started (05:00)");
    }

    #[test]
    fn describes_lap() {
        let text = describe(&Event::LapRecorded {
            lap: 3,
            elapsed_ms: 61_234,
            at: Utc::now(),
        });
        assert_eq!(text, "Lap 3: 01:01.23");
    }
}
