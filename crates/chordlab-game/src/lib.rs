//! ChordLab game core.
//!
//! Turns web-style requests into spelled chords and rendered WAV clips.
//! The pipeline is resolution first (free-text tokens to a typed
//! [`resolve::Sonority`], with warning fallbacks instead of errors),
//! then chord construction in the theory crate, then additive synthesis
//! and a collision-free write through the audio crate.
//!
//! Random exercises are requests drawn from seeded PCG32 streams: the
//! same seed always produces the same chord and the same PCM hash, while
//! output file names stay unique per generation.
//!
//! # Crate Structure
//!
//! - [`request`] - Serde boundary types for callers
//! - [`resolve`] - Token resolution, warnings, candidate pools
//! - [`random`] - Seeded exercise drawing
//! - [`generate`] - End-to-end rendering and output
//! - [`rng`] - PCG32 + BLAKE3 stream derivation

pub mod error;
pub mod generate;
pub mod random;
pub mod request;
pub mod resolve;
pub mod rng;

pub use error::{GameError, GameResult};
pub use generate::{generate, GAME_SAMPLE_RATE};
pub use random::{random_request, random_seed};
pub use request::{GenerateRequest, GenerateResult};
pub use resolve::{
    candidate_pool, resolve, ResolveWarning, ResolvedRequest, Sonority, WarningCode,
};
