//! Error types for the audio backend.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis and WAV output.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Unsupported sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Synthesis was asked to render zero tones.
    #[error("tone list is empty")]
    EmptyToneList,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("waveform", "unknown token \"noise\"");
        assert!(err.to_string().contains("waveform"));
        assert!(err.to_string().contains("noise"));
    }

    #[test]
    fn test_sample_rate_message_names_the_rate() {
        let err = AudioError::InvalidSampleRate { rate: 96000 };
        assert!(err.to_string().contains("96000"));
    }
}
