//! Request and response types for the generation boundary.
//!
//! These are the serde-facing structs a web or CLI caller exchanges with
//! the game core. Field names serialize in camelCase to match the JSON
//! the front end consumes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use chordlab_audio::synth::ToneSpec;

use crate::resolve::ResolveWarning;

/// A chord exercise request.
///
/// Every token field is free text; unrecognized tokens resolve to fixed
/// defaults and are reported as warnings in the result rather than
/// failing the request. Absent fields take the defaults silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateRequest {
    /// Number of simultaneous voices, 2 through 5. Out-of-range values
    /// clamp to the nearest bound with a warning.
    pub voices: u8,
    /// Sonority kind token, scoped to the voice count (e.g. "third",
    /// "triad", "six-five-chord").
    pub kind: Option<String>,
    /// Quality token, scoped to the kind (e.g. "minor", "major-major").
    pub quality: Option<String>,
    /// Root note token. A bare letter means the natural note at octave 1;
    /// full spellings such as "G#1" are accepted too.
    pub root: Option<String>,
    /// Seed for the deterministic random streams. `None` leaves random
    /// generation to an OS-seeded draw.
    pub seed: Option<u32>,
    /// Waveform token ("sine", "triangle", "sawtooth", "square").
    pub timbre: Option<String>,
    /// Note duration token ("whole", "half", "quarter", ...).
    pub duration: Option<String>,
}

impl GenerateRequest {
    /// Creates a request for `voices` voices with every token left to its
    /// default.
    pub fn new(voices: u8) -> Self {
        Self {
            voices,
            ..Self::default()
        }
    }
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            voices: 3,
            kind: None,
            quality: None,
            root: None,
            seed: None,
            timbre: None,
            duration: None,
        }
    }
}

/// The outcome of one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResult {
    /// Spelled note names from the bass upward (e.g. `["C1", "E1", "G1"]`).
    pub note_names: Vec<String>,
    /// Where the rendered WAV was written.
    pub file_path: PathBuf,
    /// The tones that were synthesized, bass first.
    pub notes: Vec<ToneSpec>,
    /// Token fallbacks applied during resolution.
    pub warnings: Vec<ResolveWarning>,
    /// BLAKE3 hex digest of the 16-bit PCM payload. Equal seeds yield
    /// equal digests, which lets callers check reproducibility without
    /// re-reading the file.
    pub pcm_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_round_trips_through_camel_case_json() {
        let request = GenerateRequest {
            voices: 4,
            kind: Some("six-five-chord".into()),
            quality: Some("major-minor".into()),
            root: Some("D".into()),
            seed: Some(99),
            timbre: Some("square".into()),
            duration: Some("half".into()),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"voices\":4"));
        assert!(json.contains("\"kind\":\"six-five-chord\""));
        assert!(json.contains("\"timbre\":\"square\""));

        let back: GenerateRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn partial_request_fills_in_defaults() {
        let request: GenerateRequest = serde_json::from_str(r#"{"voices": 2}"#).unwrap();
        assert_eq!(request.voices, 2);
        assert_eq!(request.kind, None);
        assert_eq!(request.seed, None);
    }

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let result = GenerateResult {
            note_names: vec!["C1".into(), "E1".into(), "G1".into()],
            file_path: PathBuf::from("out/chord-00c0ffee.wav"),
            notes: vec![ToneSpec::new(261.625565, 2000)],
            warnings: Vec::new(),
            pcm_hash: "deadbeef".into(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("noteNames").is_some());
        assert!(json.get("filePath").is_some());
        assert!(json.get("pcmHash").is_some());
        let notes = json.get("notes").unwrap().as_array().unwrap();
        assert!(notes[0].get("frequencyHz").is_some());
        assert!(notes[0].get("durationMs").is_some());
    }
}
