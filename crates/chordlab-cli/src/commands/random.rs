//! Random command implementation
//!
//! Draws a seeded exercise from the drill vocabulary and renders it.
//! The same seed always draws the same exercise, so a drill can be
//! replayed by passing the printed seed back in.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use chordlab_game::{random_request, random_seed};

use crate::commands::reporting::print_result;

/// Run the random command
///
/// # Arguments
/// * `seed` - Seed for the draw; a fresh one comes from OS entropy when absent
/// * `voices` - Pinned voice count (2-5); drawn from the seed when absent
/// * `timbre` - Oscillator waveform token
/// * `duration` - Note duration token
/// * `output_dir` - Directory for the rendered WAV (default: current directory)
/// * `json` - Whether to print the raw response JSON instead of the summary
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    seed: Option<u32>,
    voices: Option<u8>,
    timbre: Option<&str>,
    duration: Option<&str>,
    output_dir: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let seed = seed.unwrap_or_else(random_seed);
    let mut request = random_request(seed, voices);
    request.timbre = timbre.map(str::to_owned);
    request.duration = duration.map(str::to_owned);

    let dir = Path::new(output_dir.unwrap_or("."));
    let result = chordlab_game::generate(&request, dir)
        .with_context(|| format!("Failed to render chord into {}", dir.display()))?;

    if !json {
        println!("{} {}", "Seed:".cyan().bold(), seed);
        if let (Some(kind), Some(quality), Some(root)) =
            (&request.kind, &request.quality, &request.root)
        {
            println!(
                "{} {} {} on {}",
                "Drawn:".cyan().bold(),
                quality,
                kind,
                root
            );
        }
    }
    print_result(&result, json)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_with_fixed_seed_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let code = run(Some(7), None, None, None, Some(dir), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn random_without_seed_draws_one() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let code = run(None, None, None, None, Some(dir), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let wavs: Vec<_> = std::fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(wavs.len(), 1);
    }

    #[test]
    fn random_with_pinned_voices_and_overrides_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let code = run(
            Some(42),
            Some(5),
            Some("square"),
            Some("quarter"),
            Some(dir),
            true,
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
