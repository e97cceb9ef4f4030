//! Sound playback for the countdown cue.
//!
//! This module provides:
//!
//! - The [`Cue`] the timer engine fires on the last seconds of a phase
//! - A rodio-backed player running on its own audio thread
//! - Synthesized tone and audio-file sound sources
//! - A mock player for tests
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   play()   ┌──────────────────┐  channel  ┌──────────────┐
//! │ TimerEngine  │──────────▶│ Cue (SoundPlayer) │─────────▶│ audio thread │
//! └──────────────┘            └──────────────────┘           │ (rodio Sink) │
//!                                                            └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use interval_timer::sound::{Cue, RodioSoundPlayer, SoundSource};
//!
//! let player = RodioSoundPlayer::new().expect("audio init");
//! let cue = Cue::new(Arc::new(player), SoundSource::default());
//! cue.play();
//! ```

mod cue;
mod error;
mod player;
mod source;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

pub use cue::Cue;
pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};
pub use source::{SoundSource, DEFAULT_CUE_DURATION_MS, DEFAULT_CUE_FREQUENCY_HZ};

/// Trait for sound playback implementations.
///
/// This trait abstracts the sound playback functionality, allowing for
/// different implementations (e.g., rodio-based, mock for testing).
/// Turning sound off is done by leaving the [`Cue`] without a player.
pub trait SoundPlayer: Send + Sync {
    /// Plays a sound from the given source, restarting it if it is already
    /// playing.
    ///
    /// This method must not block; the sound plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback could not be started.
    fn play(&self, source: &SoundSource) -> Result<(), SoundError>;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, source)
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: Mutex<Vec<SoundSource>>,
    attempts: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Number of successful plays.
    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    /// Number of `play` calls, failed ones included.
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<SoundSource> {
        self.play_calls.lock().unwrap().clone()
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        self.play_calls.lock().unwrap().push(source.clone());
        Ok(())
    }
}
