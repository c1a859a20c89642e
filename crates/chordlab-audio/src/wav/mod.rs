//! Deterministic WAV file writer.
//!
//! Writes 16-bit PCM mono WAV files with no timestamps or variable
//! metadata, so the same samples always produce byte-identical files. The
//! BLAKE3 hash of the PCM data identifies a rendered clip independently of
//! the container.

mod format;
mod result;
mod writer;


pub use format::WavFormat;
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec};
