//! Timer engine module for the interval timer.
//!
//! This module contains the stateful core:
//! - `timer`: engine wrapping the workout state, cue and event channel
//! - `driver`: tick source that drives the engine once per second
//! - `error`: errors for configuration changes

pub mod driver;
pub mod error;
pub mod timer;

pub use driver::{TimerDriver, TICK_PERIOD};
pub use error::TimerError;
pub use timer::{TimerEngine, TimerEvent};
