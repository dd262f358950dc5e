//! Binds a pure state machine to a periodic task.
//!
//! The machine itself never schedules anything. After every command the
//! driver reconciles the task with the machine's `is_running()`:
//!
//! - not running: cancel the task
//! - running after a start event: replace the task, so at most one is live
//! - running with no live task: spawn one
//!
//! The task stops itself once a tick leaves the machine stopped (a finished
//! countdown), so no orphaned callback keeps mutating state.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::broadcast;

use super::ticker::PeriodicTask;
use crate::events::Event;
use crate::timer::{
    CountdownSnapshot, CountdownTimer, PomodoroScheduler, PomodoroSnapshot, Preset, Stopwatch,
    StopwatchSnapshot,
};

const EVENT_CAPACITY: usize = 64;

/// A state machine that advances on a fixed period while running.
pub trait Periodic: Send + 'static {
    fn period(&self) -> Duration;
    fn is_running(&self) -> bool;
    /// Advance one step. Returns an event when the step caused a transition.
    fn tick(&mut self) -> Option<Event>;
    /// Stop without discarding progress. A no-op when already stopped.
    fn halt(&mut self) -> Option<Event>;
}

pub struct Driver<M> {
    model: Arc<Mutex<M>>,
    task: Option<PeriodicTask>,
    events: broadcast::Sender<Event>,
}

pub type CountdownDriver = Driver<CountdownTimer>;
pub type StopwatchDriver = Driver<Stopwatch>;
pub type PomodoroDriver = Driver<PomodoroScheduler>;

impl<M: Periodic> Driver<M> {
    pub fn new(model: M) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            model: Arc::new(Mutex::new(model)),
            task: None,
            events,
        }
    }

    /// Receive every event produced from now on, including those raised
    /// inside ticks.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Read the model without mutating it.
    pub fn read<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        let model = lock(&self.model);
        f(&*model)
    }

    /// Whether a periodic task is currently live.
    pub fn is_ticking(&self) -> bool {
        self.task.as_ref().is_some_and(PeriodicTask::is_active)
    }

    /// Run a command against the model and reconcile the periodic task.
    ///
    /// Must be called from within a tokio runtime when the command can
    /// start the machine.
    pub fn apply(&mut self, command: impl FnOnce(&mut M) -> Option<Event>) -> Option<Event> {
        let (event, running, period) = {
            let mut model = lock(&self.model);
            let event = command(&mut *model);
            (event, model.is_running(), model.period())
        };

        let restart = event.as_ref().is_some_and(Event::starts_ticking);
        if !running {
            self.cancel_task();
        } else if restart || !self.is_ticking() {
            self.spawn_task(period);
        }

        if let Some(event) = &event {
            // No subscribers is fine.
            let _ = self.events.send(event.clone());
        }
        event
    }

    /// Stop the machine and cancel its periodic task. Safe to call
    /// repeatedly; later commands never revive ticking on their own.
    pub fn shutdown(&mut self) -> Option<Event> {
        self.apply(M::halt)
    }

    fn spawn_task(&mut self, period: Duration) {
        self.cancel_task();

        let model = Arc::clone(&self.model);
        let events = self.events.clone();
        self.task = Some(PeriodicTask::spawn(period, move || {
            let (event, running) = {
                let mut model = lock(&model);
                if !model.is_running() {
                    return ControlFlow::Break(());
                }
                let event = model.tick();
                (event, model.is_running())
            };
            if let Some(event) = event {
                let _ = events.send(event);
            }
            if running {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        }));
        tracing::debug!(?period, "periodic task spawned");
    }

    fn cancel_task(&mut self) {
        if let Some(mut task) = self.task.take() {
            if task.cancel() {
                tracing::debug!("periodic task cancelled");
            }
        }
    }
}

fn lock<M>(model: &Mutex<M>) -> MutexGuard<'_, M> {
    // Transitions never panic midway, so a poisoned model is still consistent.
    model.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── Typed adapters ───────────────────────────────────────────────────

impl Driver<CountdownTimer> {
    pub fn snapshot(&self) -> CountdownSnapshot {
        self.read(CountdownTimer::snapshot)
    }

    pub fn start(&mut self, minutes: u32, seconds: u32) -> Option<Event> {
        self.apply(|t| t.start(minutes, seconds))
    }

    pub fn start_pending(&mut self) -> Option<Event> {
        self.apply(CountdownTimer::start_pending)
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.apply(CountdownTimer::pause)
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.apply(CountdownTimer::reset)
    }

    pub fn set_minutes_input(&mut self, raw: &str) -> bool {
        let mut accepted = false;
        self.apply(|t| {
            accepted = t.set_minutes_input(raw);
            None
        });
        accepted
    }

    pub fn set_seconds_input(&mut self, raw: &str) -> bool {
        let mut accepted = false;
        self.apply(|t| {
            accepted = t.set_seconds_input(raw);
            None
        });
        accepted
    }
}

impl Driver<Stopwatch> {
    pub fn snapshot(&self) -> StopwatchSnapshot {
        self.read(Stopwatch::snapshot)
    }

    pub fn start(&mut self) -> Option<Event> {
        self.apply(Stopwatch::start)
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.apply(Stopwatch::pause)
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.apply(Stopwatch::reset)
    }

    pub fn lap(&mut self) -> Option<Event> {
        self.apply(Stopwatch::lap)
    }
}

impl Driver<PomodoroScheduler> {
    pub fn snapshot(&self) -> PomodoroSnapshot {
        self.read(PomodoroScheduler::snapshot)
    }

    pub fn toggle(&mut self) -> Option<Event> {
        self.apply(PomodoroScheduler::toggle)
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.apply(PomodoroScheduler::pause)
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.apply(PomodoroScheduler::reset)
    }

    pub fn set_preset(&mut self, work: u32, brk: u32) -> Option<Event> {
        self.apply(|p| p.set_preset(work, brk))
    }

    pub fn apply_preset(&mut self, preset: Preset) -> Option<Event> {
        self.apply(|p| p.apply_preset(preset))
    }

    pub fn set_work_duration(&mut self, minutes: i64) -> Option<Event> {
        self.apply(|p| p.set_work_duration(minutes))
    }

    pub fn set_break_duration(&mut self, minutes: i64) -> Option<Event> {
        self.apply(|p| p.set_break_duration(minutes))
    }
}
