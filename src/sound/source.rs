//! Sound source management.
//!
//! A cue is either a short synthesized tone or a user-supplied audio file.

use std::fmt;
use std::path::{Path, PathBuf};

use super::error::SoundError;

/// Frequency of the default cue tone.
pub const DEFAULT_CUE_FREQUENCY_HZ: u32 = 880;

/// Length of the default cue tone.
pub const DEFAULT_CUE_DURATION_MS: u64 = 150;

/// Represents the source of a sound to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// A sine tone synthesized at playback time.
    Tone {
        /// Pitch in hertz.
        frequency_hz: u32,
        /// Length in milliseconds.
        duration_ms: u64,
    },
    /// An audio file on disk, decoded on each playback.
    File {
        /// The full path to the sound file.
        path: PathBuf,
    },
}

impl Default for SoundSource {
    fn default() -> Self {
        Self::tone(DEFAULT_CUE_FREQUENCY_HZ, DEFAULT_CUE_DURATION_MS)
    }
}

impl SoundSource {
    /// Creates a new tone source.
    #[must_use]
    pub fn tone(frequency_hz: u32, duration_ms: u64) -> Self {
        Self::Tone {
            frequency_hz,
            duration_ms,
        }
    }

    /// Creates a new file source without checking the path.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File { path: path.into() }
    }

    /// Creates a new file source, checking that the path is a readable file.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::FileNotFound` if the path does not name a file.
    pub fn file_checked(path: impl Into<PathBuf>) -> Result<Self, SoundError> {
        let path = path.into();
        check_file(&path)?;
        Ok(Self::file(path))
    }
}

impl fmt::Display for SoundSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tone {
                frequency_hz,
                duration_ms,
            } => write!(f, "tone {}Hz/{}ms", frequency_hz, duration_ms),
            Self::File { path } => write!(f, "file {}", path.display()),
        }
    }
}

fn check_file(path: &Path) -> Result<(), SoundError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(SoundError::FileNotFound(format!(
            "{} is not a file",
            path.display()
        ))),
        Err(e) => Err(SoundError::FileNotFound(format!("{}: {}", path.display(), e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tone() {
        let source = SoundSource::default();
        assert_eq!(source, SoundSource::tone(880, 150));
        assert!(matches!(
            source,
            SoundSource::Tone {
                frequency_hz: DEFAULT_CUE_FREQUENCY_HZ,
                ..
            }
        ));
    }

    #[test]
    fn test_file_source() {
        let source = SoundSource::file("/tmp/beep.wav");
        assert_eq!(
            source,
            SoundSource::File {
                path: PathBuf::from("/tmp/beep.wav")
            }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(SoundSource::tone(440, 200).to_string(), "tone 440Hz/200ms");
        assert_eq!(
            SoundSource::file("/tmp/beep.wav").to_string(),
            "file /tmp/beep.wav"
        );
    }

    #[test]
    fn test_file_checked_accepts_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let source = SoundSource::file_checked(file.path()).unwrap();
        assert_eq!(source, SoundSource::file(file.path()));
    }

    #[test]
    fn test_file_checked_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.wav");

        match SoundSource::file_checked(&missing) {
            Err(SoundError::FileNotFound(msg)) => assert!(msg.contains("missing.wav")),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_file_checked_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = SoundSource::file_checked(dir.path());
        assert!(matches!(result, Err(SoundError::FileNotFound(_))));
    }
}
