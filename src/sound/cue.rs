//! The countdown cue.
//!
//! `Cue::play` is what the timer engine calls on the last seconds of a phase.
//! It never fails: a missing player or a playback error is only logged.

use std::sync::Arc;

use tracing::{debug, warn};

use super::source::SoundSource;
use super::SoundPlayer;

/// Fire-and-forget audible cue.
#[derive(Clone, Default)]
pub struct Cue {
    player: Option<Arc<dyn SoundPlayer>>,
    source: SoundSource,
}

impl Cue {
    /// Creates a cue that plays `source` through `player`.
    pub fn new(player: Arc<dyn SoundPlayer>, source: SoundSource) -> Self {
        Self {
            player: Some(player),
            source,
        }
    }

    /// Creates a cue that only logs.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Creates a cue from an optional player, silent when there is none.
    pub fn from_player(player: Option<Arc<dyn SoundPlayer>>, source: SoundSource) -> Self {
        Self { player, source }
    }

    /// Plays the cue from its beginning.
    pub fn play(&self) {
        let Some(player) = &self.player else {
            debug!("Cue (silent)");
            return;
        };

        if let Err(e) = player.play(&self.source) {
            warn!("Cue playback failed: {} ({})", e, e.suggestion());
        }
    }

    /// Returns true if the cue has no player.
    pub fn is_silent(&self) -> bool {
        self.player.is_none()
    }
}

impl std::fmt::Debug for Cue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cue")
            .field("silent", &self.is_silent())
            .field("source", &self.source)
            .finish()
    }
}
