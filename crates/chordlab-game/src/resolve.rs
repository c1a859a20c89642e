//! Token resolution from request fields to typed sonorities.
//!
//! The caller submits free-text tokens and resolution never fails:
//! unrecognized tokens degrade to fixed defaults, and every degradation
//! is recorded as a [`ResolveWarning`] in the result. The vocabulary is
//! scoped by voice count, so "triad" is a valid kind for three voices
//! and an unknown one for two.

use std::fmt;

use serde::{Deserialize, Serialize};

use chordlab_audio::Waveform;
use chordlab_theory::{
    Chord, IntervalQuality, IntervalSize, NinthQuality, Note, NoteDuration, SeventhQuality,
    TriadQuality,
};

use crate::request::GenerateRequest;

/// Stable identifier for a resolution fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningCode {
    #[serde(rename = "W001")]
    UnknownKind,
    #[serde(rename = "W002")]
    UnknownQuality,
    #[serde(rename = "W003")]
    UnknownRoot,
    #[serde(rename = "W004")]
    IllegalQualityForKind,
    #[serde(rename = "W005")]
    UnknownTimbre,
    #[serde(rename = "W006")]
    UnknownDuration,
    #[serde(rename = "W007")]
    VoicesOutOfRange,
}

impl WarningCode {
    pub fn as_str(self) -> &'static str {
        match self {
            WarningCode::UnknownKind => "W001",
            WarningCode::UnknownQuality => "W002",
            WarningCode::UnknownRoot => "W003",
            WarningCode::IllegalQualityForKind => "W004",
            WarningCode::UnknownTimbre => "W005",
            WarningCode::UnknownDuration => "W006",
            WarningCode::VoicesOutOfRange => "W007",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fallback applied while resolving one request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveWarning {
    pub code: WarningCode,
    pub message: String,
}

impl ResolveWarning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn unknown_kind(token: &str, voices: u8, fallback: &str) -> Self {
        Self::new(
            WarningCode::UnknownKind,
            format!("unknown kind token \"{token}\" for {voices} voices; using \"{fallback}\""),
        )
    }

    fn unknown_quality(token: &str, fallback: &str) -> Self {
        Self::new(
            WarningCode::UnknownQuality,
            format!("unknown quality token \"{token}\"; using \"{fallback}\""),
        )
    }

    fn unknown_root(token: &str) -> Self {
        Self::new(
            WarningCode::UnknownRoot,
            format!("unrecognized root \"{token}\"; using \"C\""),
        )
    }

    fn illegal_quality(quality: &str, kind: &str, fallback: &str) -> Self {
        Self::new(
            WarningCode::IllegalQualityForKind,
            format!("quality \"{quality}\" is not offered for \"{kind}\"; using \"{fallback}\""),
        )
    }

    fn unknown_timbre(token: &str, fallback: &str) -> Self {
        Self::new(
            WarningCode::UnknownTimbre,
            format!("unknown timbre token \"{token}\"; using \"{fallback}\""),
        )
    }

    fn unknown_duration(token: &str, fallback: &str) -> Self {
        Self::new(
            WarningCode::UnknownDuration,
            format!("unknown duration token \"{token}\"; using \"{fallback}\""),
        )
    }

    fn voices_out_of_range(requested: u8, clamped: u8) -> Self {
        Self::new(
            WarningCode::VoicesOutOfRange,
            format!("voice count {requested} is outside 2..=5; clamping to {clamped}"),
        )
    }
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Interval sizes offered as two-voice exercises. Unison is not an
/// exercise; the list starts at the second.
const INTERVAL_KINDS: [IntervalSize; 7] = [
    IntervalSize::Second,
    IntervalSize::Third,
    IntervalSize::Fourth,
    IntervalSize::Fifth,
    IntervalSize::Sixth,
    IntervalSize::Seventh,
    IntervalSize::Octave,
];

/// Figured-bass kind tokens for three voices, with their inversions.
const TRIAD_KINDS: [(&str, u32); 3] = [("triad", 0), ("sixth-chord", 1), ("six-four-chord", 2)];

/// Figured-bass kind tokens for four voices.
const SEVENTH_KINDS: [(&str, u32); 4] = [
    ("seventh-chord", 0),
    ("six-five-chord", 1),
    ("four-three-chord", 2),
    ("two-chord", 3),
];

/// Ninth-chord kind tokens for five voices. Ninth inversions have no
/// common figured-bass names, so the tokens spell the ordinal out.
const NINTH_KINDS: [(&str, u32); 5] = [
    ("ninth-chord", 0),
    ("ninth-chord-1st-inversion", 1),
    ("ninth-chord-2nd-inversion", 2),
    ("ninth-chord-3rd-inversion", 3),
    ("ninth-chord-4th-inversion", 4),
];

const SIX_NINE_KIND: &str = "six-nine-chord";

/// A fully resolved sonority: what to stack and how it lies.
///
/// Kind and quality resolve together, so an interval can only carry an
/// interval quality and a ninth chord only a ninth quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sonority {
    Interval {
        size: IntervalSize,
        quality: IntervalQuality,
    },
    Triad {
        quality: TriadQuality,
        inversion: u32,
    },
    Seventh {
        quality: SeventhQuality,
        inversion: u32,
    },
    Ninth {
        quality: NinthQuality,
        inversion: u32,
    },
    SixNine {
        quality: NinthQuality,
    },
}

impl Sonority {
    /// Number of simultaneous voices this sonority sounds.
    pub fn voices(self) -> u8 {
        match self {
            Sonority::Interval { .. } => 2,
            Sonority::Triad { .. } => 3,
            Sonority::Seventh { .. } => 4,
            Sonority::Ninth { .. } | Sonority::SixNine { .. } => 5,
        }
    }

    /// The request token that selects this sonority's kind.
    pub fn kind_token(self) -> &'static str {
        match self {
            Sonority::Interval { size, .. } => size.token(),
            Sonority::Triad { inversion, .. } => inversion_token(&TRIAD_KINDS, inversion),
            Sonority::Seventh { inversion, .. } => inversion_token(&SEVENTH_KINDS, inversion),
            Sonority::Ninth { inversion, .. } => inversion_token(&NINTH_KINDS, inversion),
            Sonority::SixNine { .. } => SIX_NINE_KIND,
        }
    }

    /// The request token that selects this sonority's quality.
    pub fn quality_token(self) -> &'static str {
        match self {
            Sonority::Interval { quality, .. } => quality.token(),
            Sonority::Triad { quality, .. } => quality.token(),
            Sonority::Seventh { quality, .. } => quality.token(),
            Sonority::Ninth { quality, .. } | Sonority::SixNine { quality } => quality.token(),
        }
    }

    /// Builds the sonority on `root`, inversion applied.
    pub fn chord(self, root: Note) -> Chord {
        match self {
            Sonority::Interval { size, quality } => Chord::dyad(root, size, quality),
            Sonority::Triad { quality, inversion } => {
                Chord::triad(root, quality).invert_up(inversion)
            }
            Sonority::Seventh { quality, inversion } => {
                Chord::seventh(root, quality).invert_up(inversion)
            }
            Sonority::Ninth { quality, inversion } => {
                Chord::ninth(root, quality).invert_up(inversion)
            }
            Sonority::SixNine { quality } => Chord::six_nine(root, quality),
        }
    }
}

fn inversion_token(table: &'static [(&'static str, u32)], inversion: u32) -> &'static str {
    table
        .iter()
        .find(|(_, candidate)| *candidate == inversion)
        .map(|(token, _)| *token)
        .unwrap_or(table[0].0)
}

/// Legal interval qualities for a size: perfect sizes admit only
/// perfect, the rest offer major and minor with major first.
fn interval_quality_pool(size: IntervalSize) -> &'static [IntervalQuality] {
    if size.is_perfect() {
        &[IntervalQuality::Perfect]
    } else {
        &[IntervalQuality::Major, IntervalQuality::Minor]
    }
}

/// Every sonority the given voice count can ask for, in vocabulary
/// order. Random generation draws uniformly from this list.
pub fn candidate_pool(voices: u8) -> Vec<Sonority> {
    let mut pool = Vec::new();
    match voices.clamp(2, 5) {
        2 => {
            for size in INTERVAL_KINDS {
                for &quality in interval_quality_pool(size) {
                    pool.push(Sonority::Interval { size, quality });
                }
            }
        }
        3 => {
            for (_, inversion) in TRIAD_KINDS {
                for quality in TriadQuality::ALL {
                    pool.push(Sonority::Triad { quality, inversion });
                }
            }
        }
        4 => {
            for (_, inversion) in SEVENTH_KINDS {
                for quality in SeventhQuality::ALL {
                    pool.push(Sonority::Seventh { quality, inversion });
                }
            }
        }
        _ => {
            for (_, inversion) in NINTH_KINDS {
                for quality in NinthQuality::ALL {
                    pool.push(Sonority::Ninth { quality, inversion });
                }
            }
            for quality in NinthQuality::ALL {
                pool.push(Sonority::SixNine { quality });
            }
        }
    }
    pool
}

/// A request after token resolution, ready to render.
#[derive(Debug, Clone)]
pub struct ResolvedRequest {
    pub voices: u8,
    pub sonority: Sonority,
    pub root: Note,
    pub timbre: Waveform,
    pub duration: NoteDuration,
    pub warnings: Vec<ResolveWarning>,
}

impl ResolvedRequest {
    /// The chord this request asks for, before the octave ceiling.
    pub fn chord(&self) -> Chord {
        self.sonority.chord(self.root)
    }
}

/// Resolves every token field of a request, collecting fallbacks.
pub fn resolve(request: &GenerateRequest) -> ResolvedRequest {
    let mut warnings = Vec::new();

    let voices = resolve_voices(request.voices, &mut warnings);
    let sonority = resolve_sonority(
        voices,
        request.kind.as_deref(),
        request.quality.as_deref(),
        &mut warnings,
    );
    let root = resolve_root(request.root.as_deref(), &mut warnings);
    let timbre = resolve_timbre(request.timbre.as_deref(), &mut warnings);
    let duration = resolve_duration(request.duration.as_deref(), &mut warnings);

    ResolvedRequest {
        voices,
        sonority,
        root,
        timbre,
        duration,
        warnings,
    }
}

fn resolve_voices(requested: u8, warnings: &mut Vec<ResolveWarning>) -> u8 {
    let clamped = requested.clamp(2, 5);
    if clamped != requested {
        warnings.push(ResolveWarning::voices_out_of_range(requested, clamped));
    }
    clamped
}

fn resolve_sonority(
    voices: u8,
    kind: Option<&str>,
    quality: Option<&str>,
    warnings: &mut Vec<ResolveWarning>,
) -> Sonority {
    match voices {
        2 => {
            let size = resolve_interval_kind(kind, warnings);
            let quality = resolve_interval_quality(size, quality, warnings);
            Sonority::Interval { size, quality }
        }
        3 => {
            let inversion = resolve_kind_inversion(&TRIAD_KINDS, kind, 3, warnings);
            let quality =
                resolve_quality_token::<TriadQuality>(quality, TriadQuality::Major, warnings);
            Sonority::Triad { quality, inversion }
        }
        4 => {
            let inversion = resolve_kind_inversion(&SEVENTH_KINDS, kind, 4, warnings);
            let quality = resolve_quality_token::<SeventhQuality>(
                quality,
                SeventhQuality::MajorMajor,
                warnings,
            );
            Sonority::Seventh { quality, inversion }
        }
        _ => resolve_five_voice_sonority(kind, quality, warnings),
    }
}

fn resolve_interval_kind(
    kind: Option<&str>,
    warnings: &mut Vec<ResolveWarning>,
) -> IntervalSize {
    match kind {
        None => IntervalSize::Second,
        Some(raw) => {
            let token = raw.trim().to_ascii_lowercase();
            match INTERVAL_KINDS.into_iter().find(|size| size.token() == token) {
                Some(size) => size,
                None => {
                    warnings.push(ResolveWarning::unknown_kind(
                        raw,
                        2,
                        IntervalSize::Second.token(),
                    ));
                    IntervalSize::Second
                }
            }
        }
    }
}

fn resolve_interval_quality(
    size: IntervalSize,
    quality: Option<&str>,
    warnings: &mut Vec<ResolveWarning>,
) -> IntervalQuality {
    let pool = interval_quality_pool(size);
    let fallback = pool[0];
    match quality {
        None => fallback,
        Some(raw) => match raw.parse::<IntervalQuality>() {
            Ok(parsed) if pool.contains(&parsed) => parsed,
            Ok(parsed) => {
                warnings.push(ResolveWarning::illegal_quality(
                    parsed.token(),
                    size.token(),
                    fallback.token(),
                ));
                fallback
            }
            Err(_) => {
                warnings.push(ResolveWarning::unknown_quality(raw, fallback.token()));
                fallback
            }
        },
    }
}

fn resolve_kind_inversion(
    table: &'static [(&'static str, u32)],
    kind: Option<&str>,
    voices: u8,
    warnings: &mut Vec<ResolveWarning>,
) -> u32 {
    match kind {
        None => 0,
        Some(raw) => {
            let token = raw.trim().to_ascii_lowercase();
            match table.iter().find(|(name, _)| *name == token) {
                Some((_, inversion)) => *inversion,
                None => {
                    warnings.push(ResolveWarning::unknown_kind(raw, voices, table[0].0));
                    0
                }
            }
        }
    }
}

/// Shared quality parsing for the chord families with a single legal
/// quality set.
fn resolve_quality_token<Q>(
    quality: Option<&str>,
    fallback: Q,
    warnings: &mut Vec<ResolveWarning>,
) -> Q
where
    Q: Copy + std::str::FromStr + QualityToken,
{
    match quality {
        None => fallback,
        Some(raw) => match raw.parse::<Q>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warnings.push(ResolveWarning::unknown_quality(raw, fallback.token_str()));
                fallback
            }
        },
    }
}

/// Bridge over the per-family `token` methods, for warning messages.
trait QualityToken {
    fn token_str(self) -> &'static str;
}

impl QualityToken for TriadQuality {
    fn token_str(self) -> &'static str {
        self.token()
    }
}

impl QualityToken for SeventhQuality {
    fn token_str(self) -> &'static str {
        self.token()
    }
}

impl QualityToken for NinthQuality {
    fn token_str(self) -> &'static str {
        self.token()
    }
}

fn resolve_five_voice_sonority(
    kind: Option<&str>,
    quality: Option<&str>,
    warnings: &mut Vec<ResolveWarning>,
) -> Sonority {
    let quality =
        resolve_quality_token::<NinthQuality>(quality, NinthQuality::NaturalMajor, warnings);
    match kind {
        None => Sonority::Ninth {
            quality,
            inversion: 0,
        },
        Some(raw) => {
            let token = raw.trim().to_ascii_lowercase();
            if token == SIX_NINE_KIND {
                return Sonority::SixNine { quality };
            }
            match NINTH_KINDS.iter().find(|(name, _)| *name == token) {
                Some((_, inversion)) => Sonority::Ninth {
                    quality,
                    inversion: *inversion,
                },
                None => {
                    warnings.push(ResolveWarning::unknown_kind(raw, 5, NINTH_KINDS[0].0));
                    Sonority::Ninth {
                        quality,
                        inversion: 0,
                    }
                }
            }
        }
    }
}

fn resolve_root(root: Option<&str>, warnings: &mut Vec<ResolveWarning>) -> Note {
    let fallback = Note::spelled(0, 0, 1);
    match root {
        None => fallback,
        Some(raw) => match raw.parse::<Note>() {
            Ok(note) if !note.is_rest() => note,
            _ => {
                warnings.push(ResolveWarning::unknown_root(raw));
                fallback
            }
        },
    }
}

fn resolve_timbre(timbre: Option<&str>, warnings: &mut Vec<ResolveWarning>) -> Waveform {
    let fallback = Waveform::default();
    match timbre {
        None => fallback,
        Some(raw) => match raw.parse::<Waveform>() {
            Ok(waveform) => waveform,
            Err(_) => {
                warnings.push(ResolveWarning::unknown_timbre(raw, fallback.token()));
                fallback
            }
        },
    }
}

fn resolve_duration(duration: Option<&str>, warnings: &mut Vec<ResolveWarning>) -> NoteDuration {
    let fallback = NoteDuration::Whole;
    match duration {
        None => fallback,
        Some(raw) => match raw.parse::<NoteDuration>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warnings.push(ResolveWarning::unknown_duration(raw, fallback.token()));
                fallback
            }
        },
    }
}
