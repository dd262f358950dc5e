mod driver;
mod ticker;

pub use driver::{CountdownDriver, Driver, Periodic, PomodoroDriver, StopwatchDriver};
pub use ticker::PeriodicTask;

use crate::storage::Config;
use crate::timer::{CountdownTimer, PomodoroScheduler, Stopwatch};

/// The three engines side by side. They share nothing but an owner.
pub struct Deck {
    pub countdown: CountdownDriver,
    pub stopwatch: StopwatchDriver,
    pub pomodoro: PomodoroDriver,
}

impl Deck {
    pub fn new() -> Self {
        Self {
            countdown: Driver::new(CountdownTimer::new()),
            stopwatch: Driver::new(Stopwatch::new()),
            pomodoro: Driver::new(PomodoroScheduler::new()),
        }
    }

    /// Seed pending countdown fields and pomodoro durations from config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            countdown: Driver::new(CountdownTimer::with_inputs(
                config.countdown.minutes,
                config.countdown.seconds,
            )),
            stopwatch: Driver::new(Stopwatch::new()),
            pomodoro: Driver::new(PomodoroScheduler::with_durations(
                config.pomodoro.work_minutes,
                config.pomodoro.break_minutes,
            )),
        }
    }

    /// Stop every engine and cancel its periodic task. Order does not matter.
    pub fn shutdown(&mut self) {
        self.countdown.shutdown();
        self.stopwatch.shutdown();
        self.pomodoro.shutdown();
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_every_engine() {
        let mut deck = Deck::new();
        deck.countdown.start(1, 0);
        deck.stopwatch.start();
        deck.pomodoro.toggle();
        assert!(deck.countdown.is_ticking());
        assert!(deck.stopwatch.is_ticking());
        assert!(deck.pomodoro.is_ticking());

        deck.shutdown();
        deck.shutdown();
        assert!(!deck.countdown.is_ticking());
        assert!(!deck.stopwatch.is_ticking());
        assert!(!deck.pomodoro.is_ticking());

        assert!(!deck.countdown.snapshot().running);
        assert!(!deck.stopwatch.snapshot().running);
        assert!(!deck.pomodoro.snapshot().running);

        deck.stopwatch.lap();
        deck.countdown.set_minutes_input("5");
        deck.pomodoro.set_work_duration(30);
        assert!(!deck.countdown.is_ticking());
        assert!(!deck.stopwatch.is_ticking());
        assert!(!deck.pomodoro.is_ticking());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(deck.countdown.snapshot().remaining_secs, 60);
        assert_eq!(deck.stopwatch.snapshot().elapsed_ms, 0);
        assert_eq!(deck.stopwatch.snapshot().laps, vec![0]);
    }

    #[test]
    fn from_config_seeds_engines() {
        let mut config = Config::default();
        config.pomodoro.work_minutes = 50;
        config.pomodoro.break_minutes = 10;
        config.countdown.minutes = 2;

        let deck = Deck::from_config(&config);
        let pomodoro = deck.pomodoro.snapshot();
        assert_eq!(pomodoro.work_minutes, 50);
        assert_eq!(pomodoro.time_left_secs, 50 * 60);
        assert_eq!(deck.countdown.snapshot().minutes_input, 2);
    }
}
