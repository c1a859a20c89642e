//! Text form of notes: `C`, `c#2`, `Bb0`, `E♭2`, `rest`.
//!
//! A note token is a letter, an optional run of accidentals, and an
//! optional signed octave. The octave defaults to 1, the middle-C octave.

use std::str::FromStr;

use crate::algebra::step_for_letter;
use crate::error::ParseNoteError;
use crate::note::Note;

impl FromStr for Note {
    type Err = ParseNoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(ParseNoteError::Empty);
        }
        if token.eq_ignore_ascii_case("rest") {
            return Ok(Note::rest(Default::default()));
        }

        let mut chars = token.chars();
        let letter = chars.next().ok_or(ParseNoteError::Empty)?;
        let step = step_for_letter(letter).ok_or(ParseNoteError::UnknownLetter { letter })?;

        let mut alter = 0;
        let rest = chars.as_str();
        let mut consumed = 0;
        for c in rest.chars() {
            match c {
                '#' | '♯' => alter += 1,
                'b' | '♭' => alter -= 1,
                _ => break,
            }
            consumed += c.len_utf8();
        }

        let octave_text = &rest[consumed..];
        let octave = if octave_text.is_empty() {
            1
        } else {
            octave_text
                .parse::<i32>()
                .map_err(|_| ParseNoteError::InvalidOctave {
                    text: octave_text.to_string(),
                })?
        };

        Ok(Note::spelled(step, alter, octave))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_letters_default_to_octave_one() {
        let c: Note = "C".parse().unwrap();
        assert_eq!(c.to_string(), "C1");
        assert_eq!(c.absolute_pitch(), 0);

        let b: Note = "b".parse().unwrap();
        assert_eq!(b.to_string(), "B1");
    }

    #[test]
    fn accidentals_and_octaves_parse() {
        let cs2: Note = "c#2".parse().unwrap();
        assert_eq!(cs2.to_string(), "C#2");

        let bb0: Note = "Bb0".parse().unwrap();
        assert_eq!(bb0.to_string(), "Bb0");

        let fx3: Note = "F##3".parse().unwrap();
        assert_eq!(fx3.alteration(), 2);
        assert_eq!(fx3.octave(), 3);

        let low: Note = "G-1".parse().unwrap();
        assert_eq!(low.octave(), -1);
    }

    #[test]
    fn unicode_accidentals_are_accepted() {
        let e_flat: Note = "E♭2".parse().unwrap();
        assert_eq!(e_flat.to_string(), "Eb2");

        let f_sharp: Note = "F♯".parse().unwrap();
        assert_eq!(f_sharp.to_string(), "F#1");
    }

    #[test]
    fn rest_keyword_parses() {
        let rest: Note = "rest".parse().unwrap();
        assert!(rest.is_rest());
        let rest: Note = " REST ".parse().unwrap();
        assert!(rest.is_rest());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let d3: Note = " D3 ".parse().unwrap();
        assert_eq!(d3.to_string(), "D3");
    }

    #[test]
    fn errors_carry_the_offending_text() {
        assert_eq!("".parse::<Note>(), Err(ParseNoteError::Empty));
        assert_eq!("   ".parse::<Note>(), Err(ParseNoteError::Empty));
        assert_eq!(
            "H2".parse::<Note>(),
            Err(ParseNoteError::UnknownLetter { letter: 'H' })
        );
        assert_eq!(
            "C#x".parse::<Note>(),
            Err(ParseNoteError::InvalidOctave {
                text: "x".to_string()
            })
        );
        assert_eq!(
            "Eb1.5".parse::<Note>(),
            Err(ParseNoteError::InvalidOctave {
                text: "1.5".to_string()
            })
        );
    }
}
