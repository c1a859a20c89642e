//! Pure integer arithmetic over the two pitch numbering systems.
//!
//! Western notation couples two coordinates that move independently: the
//! diatonic step (letter name, 0..6 with C = 0) and the chromatic pitch
//! class (semitone, nominally 0..11 with C = 0). Transposition must update
//! both, and enharmonic respelling moves the step while holding the pitch
//! class fixed. The functions here keep the two systems reconcilable:
//!
//! - `add_step` wraps the step into 0..6 and carries the octave.
//! - `add_pitch` applies **no** reduction. A pitch class may temporarily
//!   sit outside 0..11 (B♯ is 12, C♭ is −1); `absolute_pitch` resolves the
//!   octave from the step/pitch disagreement instead. Reducing early would
//!   make B♯1 and C1 indistinguishable before the octave is settled.
//! - `absolute_pitch` produces the continuous semitone count from C of
//!   octave 1 (middle C), the single ordering every other module uses.
//!
//! Out-of-range table lookups fall back to C rather than panicking, so a
//! malformed step degrades to a sane note instead of poisoning a whole
//! generation pass.

/// Diatonic steps per octave.
pub const STEPS_PER_OCTAVE: i32 = 7;

/// Semitones per octave.
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// MIDI note number of middle C (octave 1, step 0 in this model).
pub const MIDI_MIDDLE_C: i32 = 60;

/// Absolute pitch sentinel for rests.
pub const REST_ABS_PITCH: i32 = -1;

/// Unaltered chromatic pitch class of a diatonic step.
///
/// C=0, D=2, E=4, F=5, G=7, A=9, B=11. Steps outside 0..6 fall back to C.
pub fn natural_pitch(step: i32) -> i32 {
    match step {
        0 => 0,
        1 => 2,
        2 => 4,
        3 => 5,
        4 => 7,
        5 => 9,
        6 => 11,
        _ => 0,
    }
}

/// Alteration (signed accidental count) implied by a step/pitch pair.
///
/// Not reduced modulo 12: a double sharp stays +2, and transient values
/// beyond ±2 produced by interval arithmetic stay representable.
pub fn alteration_of(step: i32, pitch: i32) -> i32 {
    pitch - natural_pitch(step)
}

/// In-octave accidental count for a step/pitch pair.
///
/// When transposition wraps the step across the octave seam the pitch
/// class keeps counting (a fifth above G lands on pitch 14 while the
/// step resets to D), so the raw alteration carries a whole octave.
/// Rendering wants the accidental relative to the note's own octave;
/// this folds the raw value back into the single-octave window.
pub fn display_alteration(step: i32, pitch: i32) -> i32 {
    let mut alteration = alteration_of(step, pitch);
    while alteration > 6 {
        alteration -= SEMITONES_PER_OCTAVE;
    }
    while alteration < -6 {
        alteration += SEMITONES_PER_OCTAVE;
    }
    alteration
}

/// Advances a diatonic step by `delta` positions, carrying the octave.
///
/// Works for negative deltas (downward transposition) as well; the octave
/// moves exactly once per 7-step wraparound.
pub fn add_step(step: i32, octave: i32, delta: i32) -> (i32, i32) {
    let mut step = step + delta;
    let mut octave = octave;
    while step > STEPS_PER_OCTAVE - 1 {
        step -= STEPS_PER_OCTAVE;
        octave += 1;
    }
    while step < 0 {
        step += STEPS_PER_OCTAVE;
        octave -= 1;
    }
    (step, octave)
}

/// Advances a chromatic pitch class by `delta` semitones.
///
/// Deliberately unreduced; see the module docs. `absolute_pitch` is the
/// place where octave membership is decided.
pub fn add_pitch(pitch: i32, delta: i32) -> i32 {
    pitch + delta
}

/// Continuous absolute pitch: semitones from C of octave 1 (middle C).
///
/// The two guard branches resolve spellings whose step and pitch class
/// disagree about which octave the note sits in. A pitch class far above
/// its step (B♯ carried into 12, C𝄪 into 14) belongs to the octave the
/// step wrapped into, so the nominal octave overshoots by one; a pitch
/// class far below its step (C♭ at −1 with step 6 after respelling)
/// undershoots by one. The thresholds bound the disagreement reachable
/// from double accidentals.
pub fn absolute_pitch(pitch: i32, step: i32, octave: i32) -> i32 {
    if pitch - step > 10 {
        pitch + (octave - 2) * SEMITONES_PER_OCTAVE
    } else if step - pitch > 5 {
        pitch + octave * SEMITONES_PER_OCTAVE
    } else {
        pitch + (octave - 1) * SEMITONES_PER_OCTAVE
    }
}

/// Circle-of-fifths position of a spelling, anchored at D = 0.
///
/// Naturals span −3 (F) to +3 (B); each sharp adds 7 and each flat
/// subtracts 7, so F♯ = 4 and B♭ = −4. Used by the enharmonic-preference
/// heuristics: a large magnitude means the spelling is far around the
/// circle and an enharmonic neighbor is simpler.
pub fn sharpness(step: i32, alteration: i32) -> i32 {
    let natural = match step {
        0 => -2,
        1 => 0,
        2 => 2,
        3 => -3,
        4 => -1,
        5 => 1,
        6 => 3,
        _ => -2,
    };
    natural + STEPS_PER_OCTAVE * alteration
}

/// Diatonic step for a note letter, or `None` for a non-letter.
pub fn step_for_letter(letter: char) -> Option<i32> {
    match letter.to_ascii_uppercase() {
        'C' => Some(0),
        'D' => Some(1),
        'E' => Some(2),
        'F' => Some(3),
        'G' => Some(4),
        'A' => Some(5),
        'B' => Some(6),
        _ => None,
    }
}

/// Note letter for a diatonic step. Steps outside 0..6 fall back to C.
pub fn letter_for_step(step: i32) -> char {
    match step {
        0 => 'C',
        1 => 'D',
        2 => 'E',
        3 => 'F',
        4 => 'G',
        5 => 'A',
        6 => 'B',
        _ => 'C',
    }
}

/// Canonical sharp-biased (step, alteration) spelling of a pitch class.
///
/// Black keys spell as the sharp of the letter below (1 → C♯, 3 → D♯,
/// 6 → F♯, 8 → G♯, 10 → A♯). The argument is reduced into 0..12 first, so
/// any integer is accepted.
pub fn spelling_for_pitch(pitch_class: i32) -> (i32, i32) {
    match pitch_class.rem_euclid(SEMITONES_PER_OCTAVE) {
        0 => (0, 0),
        1 => (0, 1),
        2 => (1, 0),
        3 => (1, 1),
        4 => (2, 0),
        5 => (3, 0),
        6 => (3, 1),
        7 => (4, 0),
        8 => (4, 1),
        9 => (5, 0),
        10 => (5, 1),
        _ => (6, 0),
    }
}

/// Frequency in Hz of an absolute pitch, equal temperament, A4 = 440 Hz.
///
/// Absolute pitch 0 is middle C (MIDI 60), so the A above it (absolute 9)
/// lands exactly on 440.
pub fn frequency_for_absolute(abs_pitch: i32) -> f64 {
    let midi = (abs_pitch + MIDI_MIDDLE_C) as f64;
    440.0 * 2.0_f64.powf((midi - 69.0) / 12.0)
}
