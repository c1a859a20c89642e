//! Error types for the game core.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while generating a chord clip.
///
/// Sloppy request tokens are not errors; they resolve to defaults and
/// surface as [`ResolveWarning`](crate::resolve::ResolveWarning) values
/// in the result instead.
#[derive(Debug, Error)]
pub enum GameError {
    /// Synthesis or WAV encoding failed.
    #[error("audio error: {0}")]
    Audio(#[from] chordlab_audio::error::AudioError),

    /// Writing the clip to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chordlab_audio::error::AudioError;

    #[test]
    fn test_audio_errors_convert() {
        let err = GameError::from(AudioError::EmptyToneList);
        assert!(err.to_string().contains("tone list is empty"));
    }
}
