//! Shared response printing for the generate and random commands.

use anyhow::{Context, Result};
use colored::Colorize;

use chordlab_game::GenerateResult;

/// Prints a generation response, either as a colored summary or as the
/// raw JSON a front end would consume.
pub(crate) fn print_result(result: &GenerateResult, json: bool) -> Result<()> {
    if json {
        let output =
            serde_json::to_string_pretty(result).context("Failed to serialize response to JSON")?;
        println!("{}", output);
        return Ok(());
    }

    println!("{} {}", "Chord:".cyan().bold(), result.note_names.join(" "));
    println!(
        "{} {}",
        "Written to:".cyan().bold(),
        result.file_path.display()
    );

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            println!("  {}", warning.to_string().yellow());
        }
    }

    Ok(())
}
