//! Interval sizes, qualities, and the distance between two notes.
//!
//! An interval is a (diatonic size, quality) pair plus an extra octave
//! count. The size fixes the step distance; size and quality together fix
//! the semitone distance. Transposition applies the two independently,
//! which is what keeps spellings exact: a major third above C is E, while
//! a diminished fourth above C is F♭, even though both span four
//! semitones.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algebra::{SEMITONES_PER_OCTAVE, STEPS_PER_OCTAVE};
use crate::error::UnknownToken;
use crate::note::Note;

/// Diatonic interval size, unison through octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntervalSize {
    Unison,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Octave,
}

impl IntervalSize {
    /// Diatonic step distance covered by this size.
    pub fn steps(self) -> i32 {
        match self {
            IntervalSize::Unison => 0,
            IntervalSize::Second => 1,
            IntervalSize::Third => 2,
            IntervalSize::Fourth => 3,
            IntervalSize::Fifth => 4,
            IntervalSize::Sixth => 5,
            IntervalSize::Seventh => 6,
            IntervalSize::Octave => 7,
        }
    }

    /// Semitones spanned by the reference quality of this size: perfect
    /// for unison/fourth/fifth/octave, major for the rest.
    pub fn base_semitones(self) -> i32 {
        match self {
            IntervalSize::Unison => 0,
            IntervalSize::Second => 2,
            IntervalSize::Third => 4,
            IntervalSize::Fourth => 5,
            IntervalSize::Fifth => 7,
            IntervalSize::Sixth => 9,
            IntervalSize::Seventh => 11,
            IntervalSize::Octave => 12,
        }
    }

    /// Whether this size takes perfect qualities (unison, fourth, fifth,
    /// octave) rather than major/minor ones.
    pub fn is_perfect(self) -> bool {
        matches!(
            self,
            IntervalSize::Unison | IntervalSize::Fourth | IntervalSize::Fifth | IntervalSize::Octave
        )
    }

    /// Maps a step distance in 0..7 back to a size. Out-of-range values
    /// degrade to a unison.
    pub fn from_steps(steps: i32) -> Self {
        match steps {
            0 => IntervalSize::Unison,
            1 => IntervalSize::Second,
            2 => IntervalSize::Third,
            3 => IntervalSize::Fourth,
            4 => IntervalSize::Fifth,
            5 => IntervalSize::Sixth,
            6 => IntervalSize::Seventh,
            7 => IntervalSize::Octave,
            _ => IntervalSize::Unison,
        }
    }

    /// Token used in requests and summaries.
    pub fn token(self) -> &'static str {
        match self {
            IntervalSize::Unison => "unison",
            IntervalSize::Second => "second",
            IntervalSize::Third => "third",
            IntervalSize::Fourth => "fourth",
            IntervalSize::Fifth => "fifth",
            IntervalSize::Sixth => "sixth",
            IntervalSize::Seventh => "seventh",
            IntervalSize::Octave => "octave",
        }
    }
}

impl FromStr for IntervalSize {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unison" => Ok(IntervalSize::Unison),
            "second" => Ok(IntervalSize::Second),
            "third" => Ok(IntervalSize::Third),
            "fourth" => Ok(IntervalSize::Fourth),
            "fifth" => Ok(IntervalSize::Fifth),
            "sixth" => Ok(IntervalSize::Sixth),
            "seventh" => Ok(IntervalSize::Seventh),
            "octave" => Ok(IntervalSize::Octave),
            _ => Err(UnknownToken::new("interval", s)),
        }
    }
}

/// Interval quality.
///
/// Perfect applies only to the perfect sizes; major and minor only to the
/// others. `semitones` tolerates an illegal pairing by falling back to the
/// size's reference distance, keeping the best-effort resolution policy of
/// the request layer intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntervalQuality {
    Perfect,
    Major,
    Minor,
    Augmented,
    Diminished,
}

impl IntervalQuality {
    /// Token used in requests and summaries.
    pub fn token(self) -> &'static str {
        match self {
            IntervalQuality::Perfect => "perfect",
            IntervalQuality::Major => "major",
            IntervalQuality::Minor => "minor",
            IntervalQuality::Augmented => "augmented",
            IntervalQuality::Diminished => "diminished",
        }
    }
}

impl FromStr for IntervalQuality {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "perfect" => Ok(IntervalQuality::Perfect),
            "major" => Ok(IntervalQuality::Major),
            "minor" => Ok(IntervalQuality::Minor),
            "augmented" => Ok(IntervalQuality::Augmented),
            "diminished" => Ok(IntervalQuality::Diminished),
            _ => Err(UnknownToken::new("quality", s)),
        }
    }
}

/// Semitone distance of a (size, quality) pair within one octave.
///
/// Perfect sizes: augmented adds one, diminished removes one. Imperfect
/// sizes: minor removes one, augmented adds one, diminished removes two.
/// An illegal pairing answers the size's reference distance.
pub fn semitones(size: IntervalSize, quality: IntervalQuality) -> i32 {
    let base = size.base_semitones();
    if size.is_perfect() {
        match quality {
            IntervalQuality::Perfect => base,
            IntervalQuality::Augmented => base + 1,
            IntervalQuality::Diminished => base - 1,
            IntervalQuality::Major | IntervalQuality::Minor => base,
        }
    } else {
        match quality {
            IntervalQuality::Major => base,
            IntervalQuality::Minor => base - 1,
            IntervalQuality::Augmented => base + 1,
            IntervalQuality::Diminished => base - 2,
            IntervalQuality::Perfect => base,
        }
    }
}

/// Transposition direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Up,
    Down,
}

/// A named interval: size, quality, and extra whole octaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    size: IntervalSize,
    quality: IntervalQuality,
    octaves: i32,
}

impl Interval {
    /// A simple interval within one octave.
    pub fn new(size: IntervalSize, quality: IntervalQuality) -> Self {
        Self {
            size,
            quality,
            octaves: 0,
        }
    }

    /// A compound interval: the simple part plus whole octaves.
    pub fn with_octaves(size: IntervalSize, quality: IntervalQuality, octaves: i32) -> Self {
        Self {
            size,
            quality,
            octaves,
        }
    }

    /// The interval between two notes, measured from the lower one.
    ///
    /// The diatonic span comes from the spelled (octave, step) positions,
    /// the chromatic span from absolute pitches; the quality is whatever
    /// reconciles the two. A chromatic span no legal quality can produce
    /// for the spelled size degrades to the size's reference quality.
    pub fn between(a: &Note, b: &Note) -> Self {
        let (low, high) = if b.absolute_pitch() < a.absolute_pitch() {
            (b, a)
        } else {
            (a, b)
        };

        let index_low = low.octave() * STEPS_PER_OCTAVE + low.step();
        let index_high = high.octave() * STEPS_PER_OCTAVE + high.step();
        let span = (index_high - index_low).max(0);
        let semis = high.absolute_pitch() - low.absolute_pitch();

        let mut octaves = span / STEPS_PER_OCTAVE;
        let mut step_span = span % STEPS_PER_OCTAVE;
        // A whole-octave span names an octave, not a unison one octave up.
        if step_span == 0 && octaves > 0 {
            step_span = STEPS_PER_OCTAVE;
            octaves -= 1;
        }

        let size = IntervalSize::from_steps(step_span);
        let simple_semis = semis - octaves * SEMITONES_PER_OCTAVE;
        let diff = simple_semis - size.base_semitones();
        let quality = if size.is_perfect() {
            match diff {
                0 => IntervalQuality::Perfect,
                1 => IntervalQuality::Augmented,
                -1 => IntervalQuality::Diminished,
                _ => IntervalQuality::Perfect,
            }
        } else {
            match diff {
                0 => IntervalQuality::Major,
                -1 => IntervalQuality::Minor,
                1 => IntervalQuality::Augmented,
                -2 => IntervalQuality::Diminished,
                _ => IntervalQuality::Major,
            }
        };

        Self {
            size,
            quality,
            octaves,
        }
    }

    pub fn size(&self) -> IntervalSize {
        self.size
    }

    pub fn quality(&self) -> IntervalQuality {
        self.quality
    }

    pub fn octaves(&self) -> i32 {
        self.octaves
    }

    /// Total semitone span including the extra octaves.
    pub fn semitone_span(&self) -> i32 {
        semitones(self.size, self.quality) + self.octaves * SEMITONES_PER_OCTAVE
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::note::Note;

    #[test]
    fn semitone_table_for_legal_pairs() {
        use IntervalQuality::*;
        use IntervalSize::*;

        assert_eq!(semitones(Unison, Perfect), 0);
        assert_eq!(semitones(Second, Minor), 1);
        assert_eq!(semitones(Second, Major), 2);
        assert_eq!(semitones(Third, Minor), 3);
        assert_eq!(semitones(Third, Major), 4);
        assert_eq!(semitones(Fourth, Perfect), 5);
        assert_eq!(semitones(Fourth, Augmented), 6);
        assert_eq!(semitones(Fifth, Diminished), 6);
        assert_eq!(semitones(Fifth, Perfect), 7);
        assert_eq!(semitones(Fifth, Augmented), 8);
        assert_eq!(semitones(Sixth, Minor), 8);
        assert_eq!(semitones(Sixth, Major), 9);
        assert_eq!(semitones(Seventh, Minor), 10);
        assert_eq!(semitones(Seventh, Major), 11);
        assert_eq!(semitones(Octave, Perfect), 12);
    }

    #[test]
    fn illegal_pairings_fall_back_to_base() {
        use IntervalQuality::*;
        use IntervalSize::*;

        assert_eq!(semitones(Fourth, Major), 5);
        assert_eq!(semitones(Fifth, Minor), 7);
        assert_eq!(semitones(Third, Perfect), 4);
    }

    #[test]
    fn between_simple_intervals() {
        let c = Note::spelled(0, 0, 1);
        let e = Note::spelled(2, 0, 1);
        let found = Interval::between(&c, &e);
        assert_eq!(found.size(), IntervalSize::Third);
        assert_eq!(found.quality(), IntervalQuality::Major);
        assert_eq!(found.octaves(), 0);

        let e_flat = Note::spelled(2, -1, 1);
        let found = Interval::between(&c, &e_flat);
        assert_eq!(found.quality(), IntervalQuality::Minor);
    }

    #[test]
    fn between_is_direction_agnostic() {
        let c = Note::spelled(0, 0, 1);
        let g = Note::spelled(4, 0, 1);
        assert_eq!(Interval::between(&c, &g), Interval::between(&g, &c));
        assert_eq!(Interval::between(&c, &g).size(), IntervalSize::Fifth);
    }

    #[test]
    fn between_distinguishes_enharmonic_spellings() {
        // C to F♯ is an augmented fourth; C to G♭ a diminished fifth.
        let c = Note::spelled(0, 0, 1);
        let f_sharp = Note::spelled(3, 1, 1);
        let g_flat = Note::spelled(4, -1, 1);

        let tritone_up = Interval::between(&c, &f_sharp);
        assert_eq!(tritone_up.size(), IntervalSize::Fourth);
        assert_eq!(tritone_up.quality(), IntervalQuality::Augmented);

        let tritone_down = Interval::between(&c, &g_flat);
        assert_eq!(tritone_down.size(), IntervalSize::Fifth);
        assert_eq!(tritone_down.quality(), IntervalQuality::Diminished);
    }

    #[test]
    fn between_compound_intervals() {
        let c1 = Note::spelled(0, 0, 1);
        let c2 = Note::spelled(0, 0, 2);
        let octave = Interval::between(&c1, &c2);
        assert_eq!(octave.size(), IntervalSize::Octave);
        assert_eq!(octave.octaves(), 0);
        assert_eq!(octave.semitone_span(), 12);

        let d2 = Note::spelled(1, 0, 2);
        let ninth = Interval::between(&c1, &d2);
        assert_eq!(ninth.size(), IntervalSize::Second);
        assert_eq!(ninth.quality(), IntervalQuality::Major);
        assert_eq!(ninth.octaves(), 1);
        assert_eq!(ninth.semitone_span(), 14);
    }

    #[test]
    fn between_equal_notes_is_perfect_unison() {
        let g = Note::spelled(4, 0, 2);
        let found = Interval::between(&g, &g);
        assert_eq!(found.size(), IntervalSize::Unison);
        assert_eq!(found.quality(), IntervalQuality::Perfect);
        assert_eq!(found.semitone_span(), 0);
    }

    #[test]
    fn size_tokens_parse() {
        assert_eq!("third".parse::<IntervalSize>().unwrap(), IntervalSize::Third);
        assert_eq!(
            "OCTAVE".parse::<IntervalSize>().unwrap(),
            IntervalSize::Octave
        );
        assert!("ninth".parse::<IntervalSize>().is_err());

        assert_eq!(
            "augmented".parse::<IntervalQuality>().unwrap(),
            IntervalQuality::Augmented
        );
        assert!("narrow".parse::<IntervalQuality>().is_err());
    }
}
