//! ChordLab audio backend.
//!
//! Renders chords as additive mixes of ADSR-shaped oscillator voices and
//! writes the result as deterministic 16-bit PCM WAV. Every tone is gated
//! on together at sample zero; the clip runs for the longest tone's
//! duration plus one release tail, so output length is a pure function of
//! the input.
//!
//! # Crate Structure
//!
//! - [`envelope`] - ADSR envelope generator
//! - [`oscillator`] - Basic waveform generators with per-shape gain
//! - [`synth`] - The additive tone synthesizer and its pull interface
//! - [`wav`] - Deterministic WAV file writer

pub mod envelope;
pub mod error;
pub mod oscillator;
pub mod synth;
pub mod wav;

pub use envelope::{AdsrEnvelope, AdsrParams, EnvelopeState};
pub use error::{AudioError, AudioResult};
pub use oscillator::{clamp_frequency, Oscillator, Waveform};
pub use synth::{ToneSpec, ToneSynthesizer, SUPPORTED_SAMPLE_RATES};
pub use wav::{WavFormat, WavResult};
