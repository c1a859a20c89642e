//! ChordLab CLI - Command-line interface for ear-training chord drills
//!
//! This binary renders chords to WAV files from explicit musical tokens,
//! draws seeded random exercises, and lists the drill vocabulary.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use chordlab_cli::commands;

/// ChordLab - Ear-Training Chord Generator
#[derive(Parser)]
#[command(name = "chordlab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a chord from explicit kind/quality/root tokens
    Generate {
        /// Number of voices, 2 through 5 (out-of-range values clamp with a warning)
        #[arg(short, long, default_value = "3")]
        voices: u8,

        /// Sonority kind token (e.g. triad, six-five-chord, fifth)
        #[arg(short, long)]
        kind: Option<String>,

        /// Quality token (e.g. minor, major-major, natural-flat)
        #[arg(short, long)]
        quality: Option<String>,

        /// Root note (bare letter or full spelling, e.g. C, G#1, Bb2)
        #[arg(short, long)]
        root: Option<String>,

        /// Oscillator timbre (sine, triangle, sawtooth, square)
        #[arg(short, long)]
        timbre: Option<String>,

        /// Note duration (whole, half, quarter, eighth, sixteenth)
        #[arg(short, long)]
        duration: Option<String>,

        /// Directory for the rendered WAV (default: current directory)
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Output the raw response JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Draw a seeded random exercise and render it
    Random {
        /// Seed for the deterministic draw (default: fresh OS entropy)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Pin the number of voices instead of drawing it (2-5)
        #[arg(short, long)]
        voices: Option<u8>,

        /// Oscillator timbre (sine, triangle, sawtooth, square)
        #[arg(short, long)]
        timbre: Option<String>,

        /// Note duration (whole, half, quarter, eighth, sixteenth)
        #[arg(short, long)]
        duration: Option<String>,

        /// Directory for the rendered WAV (default: current directory)
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Output the raw response JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the kind/quality vocabulary offered per voice count
    Pools {
        /// Voice count to list (default: all four counts)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(2..=5))]
        voices: Option<u8>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            voices,
            kind,
            quality,
            root,
            timbre,
            duration,
            output_dir,
            json,
        } => commands::generate::run(
            voices,
            kind.as_deref(),
            quality.as_deref(),
            root.as_deref(),
            timbre.as_deref(),
            duration.as_deref(),
            output_dir.as_deref(),
            json,
        ),
        Commands::Random {
            seed,
            voices,
            timbre,
            duration,
            output_dir,
            json,
        } => commands::random::run(
            seed,
            voices,
            timbre.as_deref(),
            duration.as_deref(),
            output_dir.as_deref(),
            json,
        ),
        Commands::Pools { voices, json } => commands::pools::run(voices, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
