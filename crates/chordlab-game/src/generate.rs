//! End-to-end generation: resolve the request, spell the chord, render
//! it, and write the clip.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use rand::Rng;

use chordlab_audio::{AdsrParams, ToneSpec, ToneSynthesizer, WavResult};
use chordlab_theory::Chord;

use crate::error::GameResult;
use crate::request::{GenerateRequest, GenerateResult};
use crate::resolve::resolve;

/// Sample rate for every game render.
pub const GAME_SAMPLE_RATE: u32 = 44_100;

/// Top-voice ceiling: a chord whose highest note passes this absolute
/// pitch drops one octave before rendering.
const MAX_TOP_ABSOLUTE_PITCH: i32 = 36;

/// Resolves `request`, renders the chord, and writes the WAV into
/// `output_dir` under a collision-free name.
///
/// The directory is created if missing. Token fallbacks surface in the
/// result's warnings; only I/O and synthesis failures are errors.
pub fn generate(request: &GenerateRequest, output_dir: &Path) -> GameResult<GenerateResult> {
    let resolved = resolve(request);
    let chord = apply_ceiling(resolved.chord());

    let duration_ms = resolved.duration.millis();
    let tones: Vec<ToneSpec> = chord
        .notes()
        .iter()
        .map(|note| ToneSpec::new(note.frequency(), duration_ms))
        .collect();

    let synth = ToneSynthesizer::new(
        &tones,
        resolved.timbre,
        AdsrParams::default(),
        GAME_SAMPLE_RATE,
    )?;
    let samples = synth.render();
    let wav = WavResult::from_mono(&samples, GAME_SAMPLE_RATE);

    let (file_path, mut file) = create_output_file(output_dir)?;
    file.write_all(&wav.wav_data)?;

    Ok(GenerateResult {
        note_names: chord.note_names(),
        file_path,
        notes: tones,
        warnings: resolved.warnings,
        pcm_hash: wav.pcm_hash,
    })
}

/// Keeps the top voice at or below the ceiling with a single whole-chord
/// octave drop.
fn apply_ceiling(chord: Chord) -> Chord {
    match chord.max_absolute_pitch() {
        Some(top) if top > MAX_TOP_ABSOLUTE_PITCH => chord.octave_down(1),
        _ => chord,
    }
}

/// Opens a new WAV file under a name no concurrent writer can claim.
///
/// The name token comes from the OS-seeded generator rather than the
/// request's deterministic streams; two generations of the same seed
/// must not fight over one path.
fn create_output_file(output_dir: &Path) -> GameResult<(PathBuf, File)> {
    fs::create_dir_all(output_dir)?;
    let mut rng = rand::thread_rng();
    loop {
        let token: u32 = rng.gen();
        let path = output_dir.join(format!("chord-{token:08x}.wav"));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err.into()),
        }
    }
}
