//! Pools command implementation
//!
//! Lists the kind/quality vocabulary the random draw picks from, grouped
//! by voice count. This is the full menu a front end would offer.

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::process::ExitCode;

use chordlab_game::candidate_pool;

/// Vocabulary entry for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolEntry {
    pub voices: u8,
    pub kind: String,
    pub quality: String,
}

fn pool_entries(voices: Option<u8>) -> Vec<PoolEntry> {
    let counts: Vec<u8> = match voices {
        Some(count) => vec![count],
        None => (2..=5).collect(),
    };

    counts
        .into_iter()
        .flat_map(|count| {
            candidate_pool(count)
                .into_iter()
                .map(move |sonority| PoolEntry {
                    voices: count,
                    kind: sonority.kind_token().to_string(),
                    quality: sonority.quality_token().to_string(),
                })
        })
        .collect()
}

/// Run the pools command
///
/// # Arguments
/// * `voices` - Voice count to list (2-5); all four counts when absent
/// * `json` - Output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(voices: Option<u8>, json: bool) -> Result<ExitCode> {
    let entries = pool_entries(voices);

    if json {
        let output = serde_json::to_string_pretty(&entries)?;
        println!("{}", output);
        return Ok(ExitCode::SUCCESS);
    }

    let mut current = 0;
    for entry in &entries {
        if entry.voices != current {
            if current != 0 {
                println!();
            }
            current = entry.voices;
            let drills = entries.iter().filter(|e| e.voices == current).count();
            println!(
                "{}",
                format!("{} voices ({} drills)", current, drills)
                    .cyan()
                    .bold()
            );
        }
        println!("  {:<26} {}", entry.kind, entry.quality);
    }

    Ok(ExitCode::SUCCESS)
}
