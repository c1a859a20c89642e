//! Generate command implementation
//!
//! Builds a request from explicit tokens and renders it to a WAV file.
//! Unrecognized tokens do not fail the command; they fall back to the
//! game defaults and show up in the warnings section of the summary.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;

use chordlab_game::GenerateRequest;

use crate::commands::reporting::print_result;

/// Run the generate command
///
/// # Arguments
/// * `voices` - Requested number of voices (2-5)
/// * `kind` - Sonority kind token (e.g. "triad", "six-five-chord")
/// * `quality` - Quality token (e.g. "minor", "major-major")
/// * `root` - Root note token (e.g. "C", "G#1")
/// * `timbre` - Oscillator waveform token
/// * `duration` - Note duration token
/// * `output_dir` - Directory for the rendered WAV (default: current directory)
/// * `json` - Whether to print the raw response JSON instead of the summary
///
/// # Returns
/// Exit code: 0 on success, 1 on error
#[allow(clippy::too_many_arguments)]
pub fn run(
    voices: u8,
    kind: Option<&str>,
    quality: Option<&str>,
    root: Option<&str>,
    timbre: Option<&str>,
    duration: Option<&str>,
    output_dir: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let request = GenerateRequest {
        voices,
        kind: kind.map(str::to_owned),
        quality: quality.map(str::to_owned),
        root: root.map(str::to_owned),
        timbre: timbre.map(str::to_owned),
        duration: duration.map(str::to_owned),
        seed: None,
    };

    let dir = Path::new(output_dir.unwrap_or("."));
    let result = chordlab_game::generate(&request, dir)
        .with_context(|| format!("Failed to render chord into {}", dir.display()))?;

    print_result(&result, json)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_explicit_triad_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let code = run(
            3,
            Some("triad"),
            Some("minor"),
            Some("D"),
            None,
            None,
            Some(dir),
            false,
        )
        .unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        let wavs: Vec<_> = std::fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(wavs.len(), 1);
    }

    #[test]
    fn generate_with_json_output_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let code = run(2, Some("fifth"), None, None, None, None, Some(dir), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn generate_recovers_from_sloppy_tokens() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let code = run(
            4,
            Some("banana-chord"),
            Some("mysterious"),
            Some("H"),
            Some("theremin"),
            Some("breve"),
            Some(dir),
            false,
        )
        .unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn generate_into_unwritable_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, b"").unwrap();

        let result = run(3, None, None, None, None, None, blocker.to_str(), false);
        assert!(result.is_err());
    }
}
