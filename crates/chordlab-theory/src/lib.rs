//! Music theory for ChordLab: pitch, interval, and chord algebra.
//!
//! The model keeps chromatic pitch and letter spelling as separate
//! coordinates, so enharmonic names (C♯ against D♭) survive every
//! operation. [`algebra`] holds the raw coordinate arithmetic, [`Note`]
//! the spelled value type, [`Interval`] the distance algebra, and
//! [`Chord`] the stacked-interval builders with inversion and voicing
//! repair.

pub mod algebra;
pub mod chord;
pub mod duration;
pub mod error;
pub mod interval;
pub mod note;
pub mod parse;

pub use chord::{Chord, NinthQuality, SeventhQuality, TriadQuality};
pub use duration::{NoteDuration, WHOLE_NOTE_MS};
pub use error::{ParseNoteError, UnknownToken};
pub use interval::{semitones, Direction, Interval, IntervalQuality, IntervalSize};
pub use note::Note;
