//! # Tickdeck Core Library
//!
//! Temporal state engine behind the Tickdeck productivity widget: a countdown
//! timer, a stopwatch with laps, and a Pomodoro work/break scheduler. The
//! `tickdeck` CLI is a thin shell over this crate.
//!
//! ## Architecture
//!
//! - **Timer engines**: pure state machines advanced by explicit `tick()`
//!   calls, testable without any clock
//! - **Runtime**: a [`Driver`] binds each engine to one cancellable periodic
//!   task and publishes [`Event`]s
//! - **Storage**: TOML-based configuration for default durations
//! - **Clock / Quote**: display collaborators that share no state with the
//!   engines
//!
//! ## Key Components
//!
//! - [`CountdownTimer`], [`Stopwatch`], [`PomodoroScheduler`]: the engines
//! - [`Driver`]: periodic scheduling and event fan-out
//! - [`Config`]: application configuration management

pub mod clock;
pub mod error;
pub mod events;
pub mod format;
pub mod input;
pub mod quote;
pub mod runtime;
pub mod storage;
pub mod timer;

pub use clock::ClockFace;
pub use error::{ConfigError, QuoteError};
pub use events::Event;
pub use format::{format_milliseconds, format_seconds};
pub use quote::{Quote, QuoteFetcher};
pub use runtime::{CountdownDriver, Deck, Driver, Periodic, PomodoroDriver, StopwatchDriver};
pub use storage::Config;
pub use timer::{CountdownTimer, PomodoroScheduler, Preset, Session, Stopwatch};
