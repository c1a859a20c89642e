//! Seeded random exercise drawing.
//!
//! A random exercise is just a request whose tokens were drawn for the
//! caller: voice count, a (kind, quality) pick from that count's
//! candidate pool, and a root in the G-to-G register. Each decision
//! draws from its own derived stream, so pinning the voice count never
//! changes which root the same seed produces.

use rand::Rng;

use chordlab_theory::Note;

use crate::request::GenerateRequest;
use crate::resolve::candidate_pool;
use crate::rng::create_stream_rng;

/// Lowest random root: the G a fourth below the octave anchor C1.
const ROOT_MIN_ABSOLUTE: i32 = 7;

/// Highest random root: the G an octave above the lowest.
const ROOT_MAX_ABSOLUTE: i32 = 19;

/// Draws a fresh base seed from the OS-seeded generator, for callers
/// that did not bring one.
pub fn random_seed() -> u32 {
    rand::thread_rng().gen()
}

/// Draws a complete exercise request from `seed`.
///
/// `voices` pins the voice count instead of drawing it; out-of-range
/// pins clamp silently. The returned request carries valid tokens only,
/// so resolving it never warns.
pub fn random_request(seed: u32, voices: Option<u8>) -> GenerateRequest {
    let voices = match voices {
        Some(pinned) => pinned.clamp(2, 5),
        None => create_stream_rng(seed, "voices").gen_range(2..=5u8),
    };

    let pool = candidate_pool(voices);
    let index = create_stream_rng(seed, "pool").gen_range(0..pool.len());
    let sonority = pool[index];

    let absolute = create_stream_rng(seed, "root")
        .gen_range(ROOT_MIN_ABSOLUTE..=ROOT_MAX_ABSOLUTE);
    let root = Note::from_absolute(absolute);

    GenerateRequest {
        voices,
        kind: Some(sonority.kind_token().to_owned()),
        quality: Some(sonority.quality_token().to_owned()),
        root: Some(root.to_string()),
        seed: Some(seed),
        timbre: None,
        duration: None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::resolve::resolve;

    use super::*;

    #[test]
    fn same_seed_reproduces_the_request() {
        assert_eq!(random_request(42, None), random_request(42, None));
        assert_eq!(random_request(42, Some(4)), random_request(42, Some(4)));
    }

    #[test]
    fn seeds_vary_the_exercise() {
        let requests: Vec<GenerateRequest> =
            (0..20u32).map(|seed| random_request(seed, None)).collect();
        let first = &requests[0];
        assert!(requests.iter().any(|request| request != first));
    }

    #[test]
    fn drawn_requests_resolve_without_warnings() {
        for seed in 0..50u32 {
            let request = random_request(seed, None);
            assert!((2..=5).contains(&request.voices), "seed {seed}");

            let resolved = resolve(&request);
            assert!(resolved.warnings.is_empty(), "seed {seed}: {:?}", resolved.warnings);
            assert_eq!(resolved.sonority.voices(), request.voices, "seed {seed}");

            let absolute = resolved.root.absolute_pitch();
            assert!(
                (ROOT_MIN_ABSOLUTE..=ROOT_MAX_ABSOLUTE).contains(&absolute),
                "seed {seed}: root {absolute}"
            );
        }
    }

    #[test]
    fn drawn_roots_spell_naturals_or_single_sharps() {
        for seed in 0..50u32 {
            let request = random_request(seed, None);
            let root = resolve(&request).root;
            assert!(
                root.alteration() == 0 || root.alteration() == 1,
                "seed {seed}: {root}"
            );
        }
    }

    #[test]
    fn pinned_voices_override_the_draw() {
        for voices in 2..=5u8 {
            let request = random_request(7, Some(voices));
            assert_eq!(request.voices, voices);
            assert!(resolve(&request).warnings.is_empty());
        }
        // Out-of-range pins clamp without entering the request.
        assert_eq!(random_request(7, Some(0)).voices, 2);
        assert_eq!(random_request(7, Some(9)).voices, 5);
    }

    #[test]
    fn pinning_leaves_the_root_stream_alone() {
        let two = random_request(11, Some(2));
        let five = random_request(11, Some(5));
        assert_eq!(two.root, five.root);
        assert_eq!(two.root, random_request(11, None).root);
    }
}
