mod countdown;
mod pomodoro;
mod session;
mod stopwatch;

pub use countdown::{CountdownInput, CountdownSnapshot, CountdownTimer, COUNTDOWN_TICK, FIELD_RANGE};
pub use pomodoro::{PomodoroInput, PomodoroScheduler, PomodoroSnapshot, POMODORO_TICK};
pub use session::{
    Preset, Session, BREAK_MINUTES_RANGE, DEFAULT_BREAK_MINUTES, DEFAULT_WORK_MINUTES,
    WORK_MINUTES_RANGE,
};
pub use stopwatch::{Stopwatch, StopwatchInput, StopwatchSnapshot, STOPWATCH_STEP_MS, STOPWATCH_TICK};
