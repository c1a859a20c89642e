//! Additive chord synthesizer.
//!
//! All tones are gated on together at sample zero, each holds for its own
//! duration, and the clip ends after the longest tone plus one release
//! tail. Output is pulled in blocks, so callers can stream the mix into a
//! WAV writer without materializing it first; `render` collects the whole
//! clip when streaming is not needed.

use serde::{Deserialize, Serialize};

use crate::envelope::{AdsrEnvelope, AdsrParams};
use crate::error::{AudioError, AudioResult};
use crate::oscillator::{Oscillator, Waveform};

/// Sample rates the synthesizer accepts.
pub const SUPPORTED_SAMPLE_RATES: [u32; 3] = [22050, 44100, 48000];

/// Headroom applied to the normalized mix to keep peaks off full scale.
const MIX_HEADROOM: f64 = 0.9;

/// One tone to render: a frequency and how long it sounds.
///
/// A non-positive frequency is a rest voice: it occupies its duration in
/// the clip but contributes silence and is never gated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneSpec {
    /// Frequency in Hz; 0 for a rest.
    pub frequency_hz: f64,
    /// Sounding duration in milliseconds, before the release tail.
    pub duration_ms: u32,
}

impl ToneSpec {
    pub fn new(frequency_hz: f64, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }
}

struct Voice {
    oscillator: Oscillator,
    envelope: AdsrEnvelope,
    active_samples: usize,
}

/// Renders a list of tones as one mixed mono clip.
///
/// The mix is the sum of the voices divided by the voice count, with a
/// fixed headroom factor, so adding voices never pushes the clip toward
/// clipping.
pub struct ToneSynthesizer {
    voices: Vec<Voice>,
    scale: f64,
    total_samples: usize,
    position: usize,
    sample_rate: u32,
}

impl ToneSynthesizer {
    /// Prepares a synthesizer for the given tones.
    ///
    /// Rejects sample rates outside [`SUPPORTED_SAMPLE_RATES`] and an
    /// empty tone list. Every sounding voice is gated on at sample zero.
    pub fn new(
        tones: &[ToneSpec],
        waveform: Waveform,
        params: AdsrParams,
        sample_rate: u32,
    ) -> AudioResult<Self> {
        if !SUPPORTED_SAMPLE_RATES.contains(&sample_rate) {
            return Err(AudioError::InvalidSampleRate { rate: sample_rate });
        }
        if tones.is_empty() {
            return Err(AudioError::EmptyToneList);
        }

        let rate = sample_rate as f64;
        let mut voices = Vec::with_capacity(tones.len());
        let mut longest = 0usize;
        for tone in tones {
            let oscillator = Oscillator::new(waveform, tone.frequency_hz, rate);
            let mut envelope = AdsrEnvelope::new(params, rate);
            if !oscillator.is_silent() {
                envelope.trigger();
            }
            // Multiply before dividing so the count is exact for every
            // supported rate.
            let active_samples = (tone.duration_ms as u64 * sample_rate as u64 / 1000) as usize;
            longest = longest.max(active_samples);
            voices.push(Voice {
                oscillator,
                envelope,
                active_samples,
            });
        }

        let tail_samples = (params.release * rate) as usize;
        Ok(Self {
            scale: MIX_HEADROOM / tones.len() as f64,
            voices,
            total_samples: longest + tail_samples,
            position: 0,
            sample_rate,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Total length of the clip in samples: the longest tone's duration
    /// plus the release tail.
    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    /// Whether every sample of the clip has been produced.
    pub fn is_complete(&self) -> bool {
        self.position >= self.total_samples
    }

    fn step(&mut self) -> f64 {
        let position = self.position;
        let mut sum = 0.0;
        for voice in &mut self.voices {
            if voice.oscillator.is_silent() {
                continue;
            }
            if position == voice.active_samples {
                voice.envelope.release();
            }
            sum += voice.oscillator.next_sample() * voice.envelope.next_sample();
        }
        self.position += 1;
        sum * self.scale
    }

    /// Fills the front of `buffer` with the next samples of the clip and
    /// returns how many were written. Returns 0 once the clip is
    /// complete; it never runs past the fixed total length.
    pub fn next_block(&mut self, buffer: &mut [f64]) -> usize {
        let remaining = self.total_samples - self.position;
        let count = remaining.min(buffer.len());
        for slot in buffer.iter_mut().take(count) {
            *slot = self.step();
        }
        count
    }

    /// Renders the whole clip at once.
    pub fn render(mut self) -> Vec<f64> {
        let mut samples = vec![0.0; self.total_samples];
        let mut written = 0;
        while written < samples.len() {
            let wrote = self.next_block(&mut samples[written..]);
            if wrote == 0 {
                break;
            }
            written += wrote;
        }
        samples
    }
}
