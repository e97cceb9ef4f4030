//! Sound player implementation using rodio.
//!
//! The rodio output stream is not `Send`, so it lives on a dedicated audio
//! thread. `RodioSoundPlayer` only holds the request channel to that thread,
//! which makes it shareable across tasks and keeps `play` non-blocking.

use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::error::SoundError;
use super::source::SoundSource;

/// Amplitude applied to synthesized tones.
const TONE_VOLUME: f32 = 0.25;

/// A sound player that uses rodio for audio playback.
///
/// Each `play` stops whatever the player is still sounding and starts the new
/// sound from its beginning, so rapid re-triggering never queues or overlaps.
pub struct RodioSoundPlayer {
    /// Channel to the audio thread; dropping it stops the thread.
    requests: Sender<SoundSource>,
}

impl RodioSoundPlayer {
    /// Creates a new sound player and its audio thread.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new() -> Result<Self, SoundError> {
        let (requests, request_rx) = crossbeam_channel::unbounded();
        let (ready_tx, ready_rx) = crossbeam_channel::bounded(1);

        thread::Builder::new()
            .name("cue-audio".to_string())
            .spawn(move || audio_thread(request_rx, ready_tx))
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        ready_rx
            .recv()
            .map_err(|_| SoundError::DeviceNotAvailable("audio thread exited".to_string()))??;

        debug!("Audio output stream initialized");

        Ok(Self { requests })
    }

    /// Queues a sound for playback, replacing any sound still playing.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::PlaybackError` if the audio thread has stopped.
    /// Decoding problems are reported by the audio thread itself.
    pub fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        self.requests
            .send(source.clone())
            .map_err(|_| SoundError::PlaybackError("audio thread is not running".to_string()))
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("pending", &self.requests.len())
            .finish_non_exhaustive()
    }
}

/// Creates a sound player, returning None if audio is unavailable.
///
/// If audio initialization fails, a warning is logged and None is returned.
#[must_use]
pub fn try_create_player() -> Option<Arc<RodioSoundPlayer>> {
    match RodioSoundPlayer::new() {
        Ok(player) => Some(Arc::new(player)),
        Err(e) => {
            warn!("Audio not available, cues disabled: {}", e);
            None
        }
    }
}

fn audio_thread(requests: Receiver<SoundSource>, ready: Sender<Result<(), SoundError>>) {
    let (_stream, handle) = match OutputStream::try_default() {
        Ok(pair) => {
            let _ = ready.send(Ok(()));
            pair
        }
        Err(e) => {
            let _ = ready.send(Err(SoundError::DeviceNotAvailable(e.to_string())));
            return;
        }
    };

    let mut current: Option<Sink> = None;

    for source in requests.iter() {
        if let Some(sink) = current.take() {
            sink.stop();
        }

        match start_playback(&handle, &source) {
            Ok(sink) => current = Some(sink),
            Err(e) if e.should_fallback_to_tone() => {
                warn!("Failed to play {}: {}, falling back to tone", source, e);
                match start_playback(&handle, &SoundSource::default()) {
                    Ok(sink) => current = Some(sink),
                    Err(e) => warn!("Failed to play fallback tone: {}", e),
                }
            }
            Err(e) => warn!("Failed to play {}: {}", source, e),
        }
    }

    debug!("Audio thread stopped");
}

fn start_playback(handle: &OutputStreamHandle, source: &SoundSource) -> Result<Sink, SoundError> {
    let sink = Sink::try_new(handle).map_err(|e| SoundError::StreamError(e.to_string()))?;

    match source {
        SoundSource::Tone {
            frequency_hz,
            duration_ms,
        } => {
            let tone = SineWave::new(*frequency_hz as f32)
                .take_duration(Duration::from_millis(*duration_ms))
                .amplify(TONE_VOLUME);
            sink.append(tone);
        }
        SoundSource::File { path } => {
            let file = File::open(path)
                .map_err(|e| SoundError::FileNotFound(format!("{}: {}", path.display(), e)))?;
            let decoder = Decoder::new(BufReader::new(file))
                .map_err(|e| SoundError::DecodeError(e.to_string()))?;
            sink.append(decoder);
        }
    }

    debug!("Playing {}", source);
    Ok(sink)
}
