//! Chords: stacked-interval builders, inversion, and voicing repair.
//!
//! A chord is an ordered list of notes. Builders stack intervals above a
//! root and finish with `adjust`, which raises octaves until the voices
//! sound in ascending order; inversion is a rotation followed by the same
//! repair. Qualities are named by the member intervals they stack, so the
//! spelling of every chord member is exact.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownToken;
use crate::interval::{Direction, IntervalQuality, IntervalSize};
use crate::note::Note;

/// Triad quality, named by its third and fifth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriadQuality {
    Major,
    Minor,
    Augmented,
    Diminished,
}

impl TriadQuality {
    pub const ALL: [TriadQuality; 4] = [
        TriadQuality::Major,
        TriadQuality::Minor,
        TriadQuality::Augmented,
        TriadQuality::Diminished,
    ];

    /// Quality of the third above the root.
    pub fn third(self) -> IntervalQuality {
        match self {
            TriadQuality::Major | TriadQuality::Augmented => IntervalQuality::Major,
            TriadQuality::Minor | TriadQuality::Diminished => IntervalQuality::Minor,
        }
    }

    /// Quality of the fifth above the root.
    pub fn fifth(self) -> IntervalQuality {
        match self {
            TriadQuality::Major | TriadQuality::Minor => IntervalQuality::Perfect,
            TriadQuality::Augmented => IntervalQuality::Augmented,
            TriadQuality::Diminished => IntervalQuality::Diminished,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            TriadQuality::Major => "major",
            TriadQuality::Minor => "minor",
            TriadQuality::Augmented => "augmented",
            TriadQuality::Diminished => "diminished",
        }
    }
}

impl FromStr for TriadQuality {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(TriadQuality::Major),
            "minor" => Ok(TriadQuality::Minor),
            "augmented" => Ok(TriadQuality::Augmented),
            "diminished" => Ok(TriadQuality::Diminished),
            _ => Err(UnknownToken::new("quality", s)),
        }
    }
}

/// Seventh-chord quality, named triad-then-seventh.
///
/// The two altered qualities step outside the four triads: `AlteredFifth`
/// is a dominant seventh with a lowered fifth, `AlteredPrime` one with a
/// raised fifth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeventhQuality {
    MajorAugmented,
    MajorMajor,
    MajorMinor,
    MinorMajor,
    MinorMinor,
    MinorDiminished,
    DiminishedDiminished,
    AlteredFifth,
    AlteredPrime,
}

impl SeventhQuality {
    pub const ALL: [SeventhQuality; 9] = [
        SeventhQuality::MajorAugmented,
        SeventhQuality::MajorMajor,
        SeventhQuality::MajorMinor,
        SeventhQuality::MinorMajor,
        SeventhQuality::MinorMinor,
        SeventhQuality::MinorDiminished,
        SeventhQuality::DiminishedDiminished,
        SeventhQuality::AlteredFifth,
        SeventhQuality::AlteredPrime,
    ];

    pub fn third(self) -> IntervalQuality {
        match self {
            SeventhQuality::MajorAugmented
            | SeventhQuality::MajorMajor
            | SeventhQuality::MajorMinor
            | SeventhQuality::AlteredFifth
            | SeventhQuality::AlteredPrime => IntervalQuality::Major,
            SeventhQuality::MinorMajor
            | SeventhQuality::MinorMinor
            | SeventhQuality::MinorDiminished
            | SeventhQuality::DiminishedDiminished => IntervalQuality::Minor,
        }
    }

    pub fn fifth(self) -> IntervalQuality {
        match self {
            SeventhQuality::MajorMajor
            | SeventhQuality::MajorMinor
            | SeventhQuality::MinorMajor
            | SeventhQuality::MinorMinor => IntervalQuality::Perfect,
            SeventhQuality::MajorAugmented | SeventhQuality::AlteredPrime => {
                IntervalQuality::Augmented
            }
            SeventhQuality::MinorDiminished
            | SeventhQuality::DiminishedDiminished
            | SeventhQuality::AlteredFifth => IntervalQuality::Diminished,
        }
    }

    pub fn seventh(self) -> IntervalQuality {
        match self {
            SeventhQuality::MajorAugmented
            | SeventhQuality::MajorMajor
            | SeventhQuality::MinorMajor => IntervalQuality::Major,
            SeventhQuality::MajorMinor
            | SeventhQuality::MinorMinor
            | SeventhQuality::MinorDiminished
            | SeventhQuality::AlteredFifth
            | SeventhQuality::AlteredPrime => IntervalQuality::Minor,
            SeventhQuality::DiminishedDiminished => IntervalQuality::Diminished,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            SeventhQuality::MajorAugmented => "major-augmented",
            SeventhQuality::MajorMajor => "major-major",
            SeventhQuality::MajorMinor => "major-minor",
            SeventhQuality::MinorMajor => "minor-major",
            SeventhQuality::MinorMinor => "minor-minor",
            SeventhQuality::MinorDiminished => "minor-diminished",
            SeventhQuality::DiminishedDiminished => "diminished-diminished",
            SeventhQuality::AlteredFifth => "altered-fifth",
            SeventhQuality::AlteredPrime => "altered-prime",
        }
    }
}

impl FromStr for SeventhQuality {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        SeventhQuality::ALL
            .into_iter()
            .find(|quality| quality.token() == token)
            .ok_or_else(|| UnknownToken::new("quality", s))
    }
}

/// Ninth-chord quality: a seventh-chord base plus the quality of the
/// ninth stacked on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NinthQuality {
    HarmonicMajor,
    HarmonicDominant,
    HarmonicAugmented,
    NaturalMajorAugmented,
    NaturalMajor,
    NaturalDominant,
    NaturalMinor,
    MinorDominant,
    MinorMinor,
    MinorHalfDiminished,
    MinorDiminished,
}

impl NinthQuality {
    pub const ALL: [NinthQuality; 11] = [
        NinthQuality::HarmonicMajor,
        NinthQuality::HarmonicDominant,
        NinthQuality::HarmonicAugmented,
        NinthQuality::NaturalMajorAugmented,
        NinthQuality::NaturalMajor,
        NinthQuality::NaturalDominant,
        NinthQuality::NaturalMinor,
        NinthQuality::MinorDominant,
        NinthQuality::MinorMinor,
        NinthQuality::MinorHalfDiminished,
        NinthQuality::MinorDiminished,
    ];

    /// The seventh chord this ninth chord extends.
    pub fn seventh_base(self) -> SeventhQuality {
        match self {
            NinthQuality::HarmonicMajor | NinthQuality::NaturalMajor => SeventhQuality::MajorMajor,
            NinthQuality::HarmonicDominant
            | NinthQuality::NaturalDominant
            | NinthQuality::MinorDominant => SeventhQuality::MajorMinor,
            NinthQuality::HarmonicAugmented => SeventhQuality::AlteredPrime,
            NinthQuality::NaturalMajorAugmented => SeventhQuality::MajorAugmented,
            NinthQuality::NaturalMinor | NinthQuality::MinorMinor => SeventhQuality::MinorMinor,
            NinthQuality::MinorHalfDiminished => SeventhQuality::MinorDiminished,
            NinthQuality::MinorDiminished => SeventhQuality::DiminishedDiminished,
        }
    }

    /// Quality of the ninth itself: augmented for the harmonic family,
    /// major for the natural family, minor for the minor family.
    pub fn ninth(self) -> IntervalQuality {
        match self {
            NinthQuality::HarmonicMajor
            | NinthQuality::HarmonicDominant
            | NinthQuality::HarmonicAugmented => IntervalQuality::Augmented,
            NinthQuality::NaturalMajorAugmented
            | NinthQuality::NaturalMajor
            | NinthQuality::NaturalDominant
            | NinthQuality::NaturalMinor => IntervalQuality::Major,
            NinthQuality::MinorDominant
            | NinthQuality::MinorMinor
            | NinthQuality::MinorHalfDiminished
            | NinthQuality::MinorDiminished => IntervalQuality::Minor,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            NinthQuality::HarmonicMajor => "harmonic-major",
            NinthQuality::HarmonicDominant => "harmonic-dominant",
            NinthQuality::HarmonicAugmented => "harmonic-augmented",
            NinthQuality::NaturalMajorAugmented => "natural-major-augmented",
            NinthQuality::NaturalMajor => "natural-major",
            NinthQuality::NaturalDominant => "natural-dominant",
            NinthQuality::NaturalMinor => "natural-minor",
            NinthQuality::MinorDominant => "minor-dominant",
            NinthQuality::MinorMinor => "minor-minor",
            NinthQuality::MinorHalfDiminished => "minor-half-diminished",
            NinthQuality::MinorDiminished => "minor-diminished",
        }
    }
}

impl FromStr for NinthQuality {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        NinthQuality::ALL
            .into_iter()
            .find(|quality| quality.token() == token)
            .ok_or_else(|| UnknownToken::new("quality", s))
    }
}

/// An ordered list of notes, low voice first after `adjust`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chord {
    notes: Vec<Note>,
}

impl Chord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Two voices an interval apart. The upper voice keeps whatever
    /// octave transposition gives it; no voicing repair runs.
    pub fn dyad(root: Note, size: IntervalSize, quality: IntervalQuality) -> Self {
        let upper = root.transpose(size, quality, Direction::Up, 0);
        Self {
            notes: vec![root, upper],
        }
    }

    /// Root-position triad: root, third, fifth.
    pub fn triad(root: Note, quality: TriadQuality) -> Self {
        Self {
            notes: vec![
                root,
                root.transpose(IntervalSize::Third, quality.third(), Direction::Up, 0),
                root.transpose(IntervalSize::Fifth, quality.fifth(), Direction::Up, 0),
            ],
        }
        .adjust()
    }

    /// Root-position seventh chord: root, third, fifth, seventh.
    pub fn seventh(root: Note, quality: SeventhQuality) -> Self {
        Self {
            notes: vec![
                root,
                root.transpose(IntervalSize::Third, quality.third(), Direction::Up, 0),
                root.transpose(IntervalSize::Fifth, quality.fifth(), Direction::Up, 0),
                root.transpose(IntervalSize::Seventh, quality.seventh(), Direction::Up, 0),
            ],
        }
        .adjust()
    }

    /// Root-position ninth chord: the seventh-chord base plus a ninth,
    /// a second raised one extra octave.
    pub fn ninth(root: Note, quality: NinthQuality) -> Self {
        let base = quality.seventh_base();
        Self {
            notes: vec![
                root,
                root.transpose(IntervalSize::Third, base.third(), Direction::Up, 0),
                root.transpose(IntervalSize::Fifth, base.fifth(), Direction::Up, 0),
                root.transpose(IntervalSize::Seventh, base.seventh(), Direction::Up, 0),
                root.transpose(IntervalSize::Second, quality.ninth(), Direction::Up, 1),
            ],
        }
        .adjust()
    }

    /// Six-nine chord: a major sixth substitutes for the seventh under
    /// the ninth. Voices are root, third, fifth, sixth, ninth.
    pub fn six_nine(root: Note, quality: NinthQuality) -> Self {
        let base = quality.seventh_base();
        Self {
            notes: vec![
                root,
                root.transpose(IntervalSize::Third, base.third(), Direction::Up, 0),
                root.transpose(IntervalSize::Fifth, base.fifth(), Direction::Up, 0),
                root.transpose(IntervalSize::Sixth, IntervalQuality::Major, Direction::Up, 0),
                root.transpose(IntervalSize::Second, quality.ninth(), Direction::Up, 1),
            ],
        }
        .adjust()
    }

    pub fn push(&mut self, note: Note) {
        self.notes.push(note);
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Raises each voice by octaves until it sounds at or above the voice
    /// before it. Rests stay where they are and never force a raise.
    pub fn adjust(mut self) -> Self {
        for i in 1..self.notes.len() {
            if self.notes[i].is_rest() {
                continue;
            }
            while self.notes[i].absolute_pitch() < self.notes[i - 1].absolute_pitch() {
                self.notes[i] = self.notes[i].octave_up(1);
            }
        }
        self
    }

    /// One inversion step: the lowest voice moves to the top, then the
    /// voicing is repaired, carrying the moved voice up an octave.
    pub fn invert_once(mut self) -> Self {
        if !self.notes.is_empty() {
            self.notes.rotate_left(1);
        }
        self.adjust()
    }

    /// Applies `invert_once` the given number of times.
    pub fn invert_up(self, times: u32) -> Self {
        let mut chord = self;
        for _ in 0..times {
            chord = chord.invert_once();
        }
        chord
    }

    /// Transposes every voice by the same interval.
    pub fn transpose(
        &self,
        size: IntervalSize,
        quality: IntervalQuality,
        direction: Direction,
        extra_octaves: i32,
    ) -> Self {
        Self {
            notes: self
                .notes
                .iter()
                .map(|note| note.transpose(size, quality, direction, extra_octaves))
                .collect(),
        }
    }

    /// Appends another chord's voices and repairs the joint voicing.
    pub fn concat(&self, other: &Chord) -> Self {
        let mut notes = self.notes.clone();
        notes.extend_from_slice(&other.notes);
        Self { notes }.adjust()
    }

    /// Lowers every voice by whole octaves, without voicing repair.
    pub fn octave_down(&self, octaves: i32) -> Self {
        Self {
            notes: self
                .notes
                .iter()
                .map(|note| note.octave_down(octaves))
                .collect(),
        }
    }

    /// Highest sounding pitch across the voices, if any.
    pub fn max_absolute_pitch(&self) -> Option<i32> {
        self.notes.iter().map(Note::absolute_pitch).max()
    }

    /// Spelled names with octaves, voice order preserved.
    pub fn note_names(&self) -> Vec<String> {
        self.notes.iter().map(Note::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::duration::NoteDuration;

    fn names(chord: &Chord) -> Vec<String> {
        chord.note_names()
    }

    #[test]
    fn c_major_triad_and_its_inversions() {
        let root = Note::spelled(0, 0, 1);
        let chord = Chord::triad(root, TriadQuality::Major);
        assert_eq!(names(&chord), ["C1", "E1", "G1"]);

        let first = chord.clone().invert_once();
        assert_eq!(names(&first), ["E1", "G1", "C2"]);

        let second = first.clone().invert_once();
        assert_eq!(names(&second), ["G1", "C2", "E2"]);

        let third = second.invert_once();
        assert_eq!(names(&third), ["C2", "E2", "G2"]);
        assert_eq!(third, Chord::triad(root.octave_up(1), TriadQuality::Major));
    }

    #[test]
    fn invert_up_composes_single_inversions() {
        let chord = Chord::triad(Note::spelled(1, 0, 1), TriadQuality::Minor);
        assert_eq!(
            chord.clone().invert_up(2),
            chord.invert_once().invert_once()
        );
    }

    #[test]
    fn adjust_raises_out_of_order_voices() {
        let g1 = Note::spelled(4, 0, 1);
        let c1 = Note::spelled(0, 0, 1);
        let e1 = Note::spelled(2, 0, 1);
        let chord = Chord::from_notes(vec![g1, c1, e1]).adjust();
        assert_eq!(names(&chord), ["G1", "C2", "E2"]);
    }

    #[test]
    fn adjust_leaves_rests_alone() {
        let e1 = Note::spelled(2, 0, 1);
        let rest = Note::rest(NoteDuration::Quarter);
        let c1 = Note::spelled(0, 0, 1);
        let chord = Chord::from_notes(vec![e1, rest, c1]).adjust();
        // The rest breaks the ascending chain, so C1 stays put.
        assert_eq!(names(&chord), ["E1", "rest", "C1"]);
    }

    #[test]
    fn triad_member_offsets() {
        let root = Note::spelled(0, 0, 1);
        let cases = [
            (TriadQuality::Major, [0, 4, 7]),
            (TriadQuality::Minor, [0, 3, 7]),
            (TriadQuality::Augmented, [0, 4, 8]),
            (TriadQuality::Diminished, [0, 3, 6]),
        ];
        for (quality, expected) in cases {
            let chord = Chord::triad(root, quality);
            let offsets: Vec<i32> = chord
                .notes()
                .iter()
                .map(|n| n.absolute_pitch() - root.absolute_pitch())
                .collect();
            assert_eq!(offsets, expected, "{quality:?}");
        }
    }

    #[test]
    fn seventh_member_offsets() {
        let root = Note::spelled(4, 0, 1); // G1
        let cases = [
            (SeventhQuality::MajorAugmented, [0, 4, 8, 11]),
            (SeventhQuality::MajorMajor, [0, 4, 7, 11]),
            (SeventhQuality::MajorMinor, [0, 4, 7, 10]),
            (SeventhQuality::MinorMajor, [0, 3, 7, 11]),
            (SeventhQuality::MinorMinor, [0, 3, 7, 10]),
            (SeventhQuality::MinorDiminished, [0, 3, 6, 10]),
            (SeventhQuality::DiminishedDiminished, [0, 3, 6, 9]),
            (SeventhQuality::AlteredFifth, [0, 4, 6, 10]),
            (SeventhQuality::AlteredPrime, [0, 4, 8, 10]),
        ];
        for (quality, expected) in cases {
            let chord = Chord::seventh(root, quality);
            let offsets: Vec<i32> = chord
                .notes()
                .iter()
                .map(|n| n.absolute_pitch() - root.absolute_pitch())
                .collect();
            assert_eq!(offsets, expected, "{quality:?}");
        }
    }

    #[test]
    fn ninth_member_offsets() {
        let root = Note::spelled(0, 0, 1);
        let cases = [
            (NinthQuality::HarmonicMajor, [0, 4, 7, 11, 15]),
            (NinthQuality::HarmonicDominant, [0, 4, 7, 10, 15]),
            (NinthQuality::HarmonicAugmented, [0, 4, 8, 10, 15]),
            (NinthQuality::NaturalMajorAugmented, [0, 4, 8, 11, 14]),
            (NinthQuality::NaturalMajor, [0, 4, 7, 11, 14]),
            (NinthQuality::NaturalDominant, [0, 4, 7, 10, 14]),
            (NinthQuality::NaturalMinor, [0, 3, 7, 10, 14]),
            (NinthQuality::MinorDominant, [0, 4, 7, 10, 13]),
            (NinthQuality::MinorMinor, [0, 3, 7, 10, 13]),
            (NinthQuality::MinorHalfDiminished, [0, 3, 6, 10, 13]),
            (NinthQuality::MinorDiminished, [0, 3, 6, 9, 13]),
        ];
        for (quality, expected) in cases {
            let chord = Chord::ninth(root, quality);
            let offsets: Vec<i32> = chord
                .notes()
                .iter()
                .map(|n| n.absolute_pitch() - root.absolute_pitch())
                .collect();
            assert_eq!(offsets, expected, "{quality:?}");
        }
    }

    #[test]
    fn six_nine_substitutes_the_sixth() {
        let root = Note::spelled(0, 0, 1);
        let chord = Chord::six_nine(root, NinthQuality::NaturalMajor);
        let offsets: Vec<i32> = chord
            .notes()
            .iter()
            .map(|n| n.absolute_pitch() - root.absolute_pitch())
            .collect();
        assert_eq!(offsets, [0, 4, 7, 9, 14]);
        assert_eq!(names(&chord), ["C1", "E1", "G1", "A1", "D2"]);
    }

    #[test]
    fn dyad_keeps_both_voices_as_spelled() {
        let root = Note::spelled(6, 0, 1); // B1
        let chord = Chord::dyad(root, IntervalSize::Second, IntervalQuality::Major);
        assert_eq!(names(&chord), ["B1", "C#2"]);

        let tritone = Chord::dyad(
            Note::spelled(0, 0, 1),
            IntervalSize::Fourth,
            IntervalQuality::Augmented,
        );
        assert_eq!(names(&tritone), ["C1", "F#1"]);
    }

    #[test]
    fn chord_transpose_moves_every_voice() {
        let c_major = Chord::triad(Note::spelled(0, 0, 1), TriadQuality::Major);
        let d_major = c_major.transpose(
            IntervalSize::Second,
            IntervalQuality::Major,
            Direction::Up,
            0,
        );
        assert_eq!(
            d_major,
            Chord::triad(Note::spelled(1, 0, 1), TriadQuality::Major)
        );
    }

    #[test]
    fn concat_repairs_the_joint_voicing() {
        let low = Chord::triad(Note::spelled(0, 0, 1), TriadQuality::Major);
        let high = Chord::triad(Note::spelled(4, 0, 0), TriadQuality::Major);
        let joined = low.concat(&high);
        assert_eq!(names(&joined), ["C1", "E1", "G1", "G1", "B1", "D2"]);
    }

    #[test]
    fn octave_down_shifts_every_voice() {
        let chord = Chord::triad(Note::spelled(0, 0, 2), TriadQuality::Major);
        let lowered = chord.octave_down(1);
        assert_eq!(names(&lowered), ["C1", "E1", "G1"]);
        assert_eq!(lowered.max_absolute_pitch(), Some(7));
    }

    #[test]
    fn quality_tokens_round_trip() {
        for quality in TriadQuality::ALL {
            assert_eq!(quality.token().parse::<TriadQuality>().unwrap(), quality);
        }
        for quality in SeventhQuality::ALL {
            assert_eq!(quality.token().parse::<SeventhQuality>().unwrap(), quality);
        }
        for quality in NinthQuality::ALL {
            assert_eq!(quality.token().parse::<NinthQuality>().unwrap(), quality);
        }
        assert!("sus4".parse::<TriadQuality>().is_err());
    }
}
