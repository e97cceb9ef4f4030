//! Command definitions for the interval timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::types::config::{DEFAULT_INTERVALS, DEFAULT_REST_SECONDS, DEFAULT_WORK_SECONDS};
use crate::types::IntervalConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// Interval workout timer with countdown cues
#[derive(Parser, Debug)]
#[command(
    name = "interval-timer",
    version,
    about = "Interval workout timer with countdown cues",
    long_about = "Counts you through a 3 second get-ready countdown, then alternating \
                  work and rest phases, beeping on the last 3 seconds of every phase.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run a workout now and exit when it completes
    Run(WorkoutArgs),

    /// Control the timer with typed commands (start, reset, set, status)
    Interactive(InteractiveArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Workout Arguments
// ============================================================================

/// Arguments shared by every command that runs a workout
#[derive(Args, Debug, Clone)]
pub struct WorkoutArgs {
    /// Work phase length in seconds
    #[arg(short, long, default_value_t = DEFAULT_WORK_SECONDS)]
    pub work: u32,

    /// Rest phase length in seconds
    #[arg(short, long, default_value_t = DEFAULT_REST_SECONDS)]
    pub rest: u32,

    /// Number of work/rest intervals
    #[arg(short, long, default_value_t = DEFAULT_INTERVALS)]
    pub intervals: u32,

    /// Disable countdown cues
    #[arg(long)]
    pub no_sound: bool,

    /// Audio file to play as the cue instead of the built-in beep
    #[arg(long, value_name = "PATH", conflicts_with = "no_sound")]
    pub cue_sound: Option<PathBuf>,

    /// Print timer updates as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Tick length in milliseconds
    #[arg(
        long,
        default_value_t = 1000,
        hide = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_millis: u64,
}

impl Default for WorkoutArgs {
    fn default() -> Self {
        Self {
            work: DEFAULT_WORK_SECONDS,
            rest: DEFAULT_REST_SECONDS,
            intervals: DEFAULT_INTERVALS,
            no_sound: false,
            cue_sound: None,
            json: false,
            tick_millis: 1000,
        }
    }
}

impl WorkoutArgs {
    /// Builds the workout configuration from the flags.
    pub fn config(&self) -> IntervalConfig {
        IntervalConfig::default()
            .with_work_duration(self.work)
            .with_rest_duration(self.rest)
            .with_interval_count(self.intervals)
    }

    /// Returns the time between ticks.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

/// Arguments for the interactive command
#[derive(Args, Debug, Clone, Default)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub workout: WorkoutArgs,

    /// Reject non-numeric setting values instead of treating them as 0
    #[arg(long)]
    pub strict: bool,
}

// ============================================================================
// Tests
// ============================================================================
