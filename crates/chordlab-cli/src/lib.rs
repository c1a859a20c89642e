//! ChordLab CLI library.
//!
//! This crate provides the command implementations behind the `chordlab`
//! binary: rendering chords from explicit tokens, drawing seeded random
//! exercises, and listing the drill vocabulary.

pub mod commands;
