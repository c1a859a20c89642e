//! The spelled note value type.
//!
//! A `Note` keeps its chromatic pitch and its letter step as independent
//! coordinates, so enharmonic spellings stay distinct: C♯ and D♭ share a
//! chromatic pitch but compare as different notes. The chromatic pitch is
//! deliberately left unreduced after arithmetic; `absolute_pitch` decodes
//! the (pitch, step, octave) triple in one place.

use std::cmp::Ordering;
use std::fmt;

use crate::algebra::{
    absolute_pitch, add_pitch, add_step, alteration_of, display_alteration,
    frequency_for_absolute, letter_for_step, natural_pitch, sharpness, spelling_for_pitch,
    MIDI_MIDDLE_C, REST_ABS_PITCH, SEMITONES_PER_OCTAVE,
};
use crate::duration::NoteDuration;
use crate::interval::{semitones, Direction, IntervalQuality, IntervalSize};

/// One spelled note, or a rest.
///
/// Octaves are 1-based: octave 1 starts at middle C. A rest carries only a
/// duration; its pitch fields are inert.
#[derive(Debug, Clone, Copy)]
pub struct Note {
    pitch: i32,
    step: i32,
    octave: i32,
    duration: NoteDuration,
    rest: bool,
}

impl Note {
    /// A note from raw coordinates: chromatic pitch, letter step, octave.
    pub fn new(pitch: i32, step: i32, octave: i32) -> Self {
        Self {
            pitch,
            step,
            octave,
            duration: NoteDuration::default(),
            rest: false,
        }
    }

    /// A note from a spelling: letter step, alteration, octave.
    ///
    /// The chromatic pitch is the letter's natural pitch plus the
    /// alteration, kept without reduction, so `spelled(6, 1, 1)` (B♯1)
    /// stores pitch 12.
    pub fn spelled(step: i32, alter: i32, octave: i32) -> Self {
        Self::new(natural_pitch(step) + alter, step, octave)
    }

    /// A rest of the given duration.
    pub fn rest(duration: NoteDuration) -> Self {
        Self {
            pitch: 0,
            step: 0,
            octave: 0,
            duration,
            rest: true,
        }
    }

    /// The note at an absolute chromatic pitch, spelled sharp-biased.
    ///
    /// Absolute pitch 0 is middle C; each octave spans twelve. Black keys
    /// come back as sharps.
    pub fn from_absolute(abs: i32) -> Self {
        let pc = abs.rem_euclid(SEMITONES_PER_OCTAVE);
        let octave = 1 + (abs - pc) / SEMITONES_PER_OCTAVE;
        let (step, alter) = spelling_for_pitch(pc);
        Self::spelled(step, alter, octave)
    }

    /// The same note with a different duration.
    pub fn with_duration(mut self, duration: NoteDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn pitch(&self) -> i32 {
        self.pitch
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    pub fn duration(&self) -> NoteDuration {
        self.duration
    }

    pub fn is_rest(&self) -> bool {
        self.rest
    }

    /// Accidental count relative to the letter's natural pitch. Positive
    /// for sharps, negative for flats.
    pub fn alteration(&self) -> i32 {
        alteration_of(self.step, self.pitch)
    }

    /// Position on the line of fifths; drives the respelling heuristics.
    pub fn sharpness(&self) -> i32 {
        sharpness(self.step, self.alteration())
    }

    /// Absolute chromatic pitch, middle C = 0. Rests answer -1.
    pub fn absolute_pitch(&self) -> i32 {
        if self.rest {
            REST_ABS_PITCH
        } else {
            absolute_pitch(self.pitch, self.step, self.octave)
        }
    }

    /// MIDI note number, or `None` for a rest.
    pub fn midi_note(&self) -> Option<i32> {
        if self.rest {
            None
        } else {
            Some(self.absolute_pitch() + MIDI_MIDDLE_C)
        }
    }

    /// Equal-tempered frequency in Hz, A above middle C = 440. Rests are
    /// silent and answer 0.
    pub fn frequency(&self) -> f64 {
        if self.rest {
            0.0
        } else {
            frequency_for_absolute(self.absolute_pitch())
        }
    }

    /// Transposes by an interval in the given direction, plus extra whole
    /// octaves. Step and chromatic pitch move independently, which is what
    /// preserves the spelling: a major third above C is E, a diminished
    /// fourth above C is F♭. Rests transpose to themselves.
    pub fn transpose(
        self,
        size: IntervalSize,
        quality: IntervalQuality,
        direction: Direction,
        extra_octaves: i32,
    ) -> Self {
        if self.rest {
            return self;
        }
        let mut semis = semitones(size, quality);
        let mut steps = size.steps();
        let mut extra = extra_octaves;
        if direction == Direction::Down {
            semis = -semis;
            steps = -steps;
            extra = -extra;
        }
        let (step, octave) = add_step(self.step, self.octave, steps);
        let pitch = add_pitch(self.pitch, semis);
        Self {
            pitch,
            step,
            octave: octave + extra,
            duration: self.duration,
            rest: false,
        }
    }

    /// Respells toward sharps: the letter below, same sounding pitch.
    /// D♭ becomes C♯, F becomes E♯.
    pub fn respell_sharp(self) -> Self {
        let (step, octave) = add_step(self.step, self.octave, -1);
        Self {
            step,
            octave,
            ..self
        }
    }

    /// Respells toward flats: the letter above, same sounding pitch.
    /// A♯ becomes B♭, E becomes F♭.
    pub fn respell_flat(self) -> Self {
        let (step, octave) = add_step(self.step, self.octave, 1);
        Self {
            step,
            octave,
            ..self
        }
    }

    /// Replaces an outlandish single accidental with the common enharmonic
    /// name. Spellings past G♯ on the sharp side become flats, spellings
    /// past A♭ on the flat side become sharps; everything in between is
    /// returned unchanged.
    pub fn respell(self) -> Self {
        let sharpness = self.sharpness();
        if sharpness > 6 {
            self.respell_flat()
        } else if sharpness < -6 {
            self.respell_sharp()
        } else {
            self
        }
    }

    /// Collapses double accidentals onto the neighbouring letter, leaving
    /// single accidentals and naturals alone. F𝄪 becomes G, B𝄫 becomes A.
    pub fn respell_doubles(self) -> Self {
        let sharpness = self.sharpness();
        if sharpness > 10 {
            self.respell_flat()
        } else if sharpness < -10 {
            self.respell_sharp()
        } else {
            self
        }
    }

    /// Raises by whole octaves. Only the octave coordinate moves.
    pub fn octave_up(self, octaves: i32) -> Self {
        Self {
            octave: self.octave + octaves,
            ..self
        }
    }

    /// Lowers by whole octaves. Only the octave coordinate moves.
    pub fn octave_down(self, octaves: i32) -> Self {
        Self {
            octave: self.octave - octaves,
            ..self
        }
    }

    /// The spelled name without the octave: letter plus an accidental run,
    /// `"C#"`, `"Bb"`, `"F##"`. Rests answer `"rest"`.
    pub fn name(&self) -> String {
        if self.rest {
            return "rest".to_string();
        }
        let mut name = String::new();
        name.push(letter_for_step(self.step));
        // The raw alteration can carry a whole octave after the step
        // wrapped the seam; the name wants the in-octave accidental.
        let alter = display_alteration(self.step, self.pitch);
        let accidental = if alter >= 0 { '#' } else { 'b' };
        for _ in 0..alter.abs() {
            name.push(accidental);
        }
        name
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rest {
            write!(f, "rest")
        } else {
            write!(f, "{}{}", self.name(), self.octave)
        }
    }
}

impl Ord for Note {
    /// Sounding pitch first. Enharmonic ties order by letter step, except
    /// across the octave seam where the B-family spelling (B♯, step 6)
    /// sorts before the C-family spelling (step 0) it coincides with.
    fn cmp(&self, other: &Self) -> Ordering {
        let abs = self.absolute_pitch();
        let other_abs = other.absolute_pitch();
        if abs != other_abs {
            return abs.cmp(&other_abs);
        }
        if self.step == 6 && other.step == 0 {
            return Ordering::Less;
        }
        if self.step == 0 && other.step == 6 {
            return Ordering::Greater;
        }
        self.step.cmp(&other.step)
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Note {}
