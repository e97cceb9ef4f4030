//! Interval Timer Library
//!
//! This library provides the core functionality for the interval workout timer.
//! It includes:
//! - A pure tick state machine (countdown, work, rest, complete)
//! - Timer engine and tick driver built on tokio
//! - Countdown cue playback through rodio
//! - CLI command parsing, interactive commands and display utilities

pub mod cli;
pub mod engine;
pub mod sound;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    cues_at, ConfigField, IntervalConfig, Phase, PhaseChange, SettingPolicy, Snapshot,
    TickOutcome, TimerState,
};

// Re-export engine types
pub use engine::{TimerDriver, TimerEngine, TimerError, TimerEvent, TICK_PERIOD};

// Re-export sound types
pub use sound::{
    try_create_player, Cue, MockSoundPlayer, RodioSoundPlayer, SoundError, SoundPlayer,
    SoundSource,
};
