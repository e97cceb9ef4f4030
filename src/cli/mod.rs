//! CLI module for the interval timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `console`: Typed commands for the interactive session
//! - `display`: Output formatting and display logic
//! - `session`: Run and interactive loops over the timer driver

pub mod commands;
pub mod console;
pub mod display;
pub mod session;

pub use commands::{Cli, Commands, InteractiveArgs, WorkoutArgs};
pub use console::Intent;
pub use display::Display;
pub use session::{run_interactive, run_workout};
