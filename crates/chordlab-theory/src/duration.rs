//! Note duration values.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownToken;

/// Length of a whole note in milliseconds at the fixed playback tempo.
pub const WHOLE_NOTE_MS: u32 = 2000;

/// Standard note duration, named by its denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteDuration {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
}

impl NoteDuration {
    /// The denominator of the duration (1 for whole, 4 for quarter, ...).
    pub fn denominator(self) -> u32 {
        match self {
            NoteDuration::Whole => 1,
            NoteDuration::Half => 2,
            NoteDuration::Quarter => 4,
            NoteDuration::Eighth => 8,
            NoteDuration::Sixteenth => 16,
        }
    }

    /// Playback length in milliseconds.
    pub fn millis(self) -> u32 {
        WHOLE_NOTE_MS / self.denominator()
    }

    /// Maps a denominator back to a duration. Unknown values degrade to a
    /// quarter note.
    pub fn from_denominator(denominator: u32) -> Self {
        match denominator {
            1 => NoteDuration::Whole,
            2 => NoteDuration::Half,
            4 => NoteDuration::Quarter,
            8 => NoteDuration::Eighth,
            16 => NoteDuration::Sixteenth,
            _ => NoteDuration::Quarter,
        }
    }

    /// Token used in requests and summaries.
    pub fn token(self) -> &'static str {
        match self {
            NoteDuration::Whole => "whole",
            NoteDuration::Half => "half",
            NoteDuration::Quarter => "quarter",
            NoteDuration::Eighth => "eighth",
            NoteDuration::Sixteenth => "sixteenth",
        }
    }
}

impl Default for NoteDuration {
    fn default() -> Self {
        NoteDuration::Quarter
    }
}

impl FromStr for NoteDuration {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whole" => Ok(NoteDuration::Whole),
            "half" => Ok(NoteDuration::Half),
            "quarter" => Ok(NoteDuration::Quarter),
            "eighth" => Ok(NoteDuration::Eighth),
            "sixteenth" => Ok(NoteDuration::Sixteenth),
            _ => Err(UnknownToken::new("duration", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn millis_follow_denominator() {
        assert_eq!(NoteDuration::Whole.millis(), 2000);
        assert_eq!(NoteDuration::Half.millis(), 1000);
        assert_eq!(NoteDuration::Quarter.millis(), 500);
        assert_eq!(NoteDuration::Eighth.millis(), 250);
        assert_eq!(NoteDuration::Sixteenth.millis(), 125);
    }

    #[test]
    fn denominator_round_trip() {
        for dur in [
            NoteDuration::Whole,
            NoteDuration::Half,
            NoteDuration::Quarter,
            NoteDuration::Eighth,
            NoteDuration::Sixteenth,
        ] {
            assert_eq!(NoteDuration::from_denominator(dur.denominator()), dur);
        }
        assert_eq!(NoteDuration::from_denominator(3), NoteDuration::Quarter);
    }

    #[test]
    fn parses_tokens() {
        assert_eq!("whole".parse::<NoteDuration>().unwrap(), NoteDuration::Whole);
        assert_eq!(
            " Sixteenth ".parse::<NoteDuration>().unwrap(),
            NoteDuration::Sixteenth
        );
        assert!("breve".parse::<NoteDuration>().is_err());
    }
}
