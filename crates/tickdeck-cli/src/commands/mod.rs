pub mod clock;
pub mod config;
pub mod countdown;
pub mod pomodoro;
pub mod stopwatch;

mod output;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
