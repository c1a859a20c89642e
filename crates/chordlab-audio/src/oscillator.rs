//! Basic waveform oscillators.
//!
//! Four classic shapes drive chord playback. Each carries its own gain so
//! that timbres with strong harmonics (square, sawtooth) sit at roughly
//! the same loudness as a pure sine when voices are mixed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AudioError;

/// One full oscillator cycle in radians.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Lowest audible frequency in Hz; anything positive below this is raised.
pub const MIN_FREQUENCY_HZ: f64 = 20.0;

/// Highest audible frequency in Hz; anything above this is lowered.
pub const MAX_FREQUENCY_HZ: f64 = 20_000.0;

/// Clamps a frequency into the audible band.
///
/// Zero and negative frequencies have no audible pitch and answer `None`;
/// the oscillator treats them as silence.
pub fn clamp_frequency(frequency_hz: f64) -> Option<f64> {
    if frequency_hz <= 0.0 {
        None
    } else {
        Some(frequency_hz.clamp(MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ))
    }
}

/// Waveform shape for a synthesized voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
    Square,
}

impl Waveform {
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Triangle,
        Waveform::Sawtooth,
        Waveform::Square,
    ];

    /// Loudness compensation for the shape's harmonic content.
    pub fn gain(self) -> f64 {
        match self {
            Waveform::Sine => 1.0,
            Waveform::Triangle => 0.9,
            Waveform::Sawtooth => 0.75,
            Waveform::Square => 0.6,
        }
    }

    /// Samples the shape at a phase in radians. Output is in [-1, 1].
    pub fn sample(self, phase: f64) -> f64 {
        match self {
            Waveform::Sine => phase.sin(),
            Waveform::Triangle => (2.0 / std::f64::consts::PI) * phase.sin().asin(),
            Waveform::Sawtooth => (phase / std::f64::consts::PI) - 1.0,
            Waveform::Square => {
                let s = phase.sin();
                if s > 0.0 {
                    1.0
                } else if s < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Square => "square",
        }
    }
}

impl Default for Waveform {
    fn default() -> Self {
        Waveform::Sine
    }
}

impl FromStr for Waveform {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" => Ok(Waveform::Sine),
            "triangle" => Ok(Waveform::Triangle),
            "sawtooth" => Ok(Waveform::Sawtooth),
            "square" => Ok(Waveform::Square),
            _ => Err(AudioError::invalid_param(
                "waveform",
                format!("unknown token {s:?}"),
            )),
        }
    }
}

/// Phase-accumulator oscillator for one voice.
///
/// The phase advances by a fixed increment per sample and wraps at 2π. A
/// silent oscillator (rest voice) has a zero increment and always outputs
/// zero without sampling the waveform, so a sawtooth rest does not emit
/// the ramp's DC start value.
#[derive(Debug, Clone)]
pub struct Oscillator {
    waveform: Waveform,
    phase: f64,
    increment: f64,
}

impl Oscillator {
    /// Creates an oscillator at the given frequency. Out-of-band
    /// frequencies are clamped; non-positive ones make a silent voice.
    pub fn new(waveform: Waveform, frequency_hz: f64, sample_rate: f64) -> Self {
        let increment = match clamp_frequency(frequency_hz) {
            Some(freq) => TWO_PI * freq / sample_rate,
            None => 0.0,
        };
        Self {
            waveform,
            phase: 0.0,
            increment,
        }
    }

    /// Whether this voice renders as silence.
    pub fn is_silent(&self) -> bool {
        self.increment == 0.0
    }

    /// Produces the next sample, gain applied, and advances the phase.
    pub fn next_sample(&mut self) -> f64 {
        if self.is_silent() {
            return 0.0;
        }
        let value = self.waveform.sample(self.phase) * self.waveform.gain();
        self.phase += self.increment;
        if self.phase > TWO_PI {
            self.phase -= TWO_PI;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn frequency_clamp_bounds_the_audible_band() {
        assert_eq!(clamp_frequency(440.0), Some(440.0));
        assert_eq!(clamp_frequency(5.0), Some(20.0));
        assert_eq!(clamp_frequency(44_000.0), Some(20_000.0));
        assert_eq!(clamp_frequency(0.0), None);
        assert_eq!(clamp_frequency(-10.0), None);
    }

    #[test]
    fn shapes_stay_in_unit_range() {
        for waveform in Waveform::ALL {
            let mut osc = Oscillator::new(waveform, 440.0, 44100.0);
            for i in 0..2000 {
                let value = osc.next_sample();
                assert!(
                    (-1.0..=1.0).contains(&value),
                    "{waveform:?} sample {i}: {value}"
                );
            }
        }
    }

    #[test]
    fn gains_order_by_harmonic_content() {
        assert_eq!(Waveform::Sine.gain(), 1.0);
        assert_eq!(Waveform::Triangle.gain(), 0.9);
        assert_eq!(Waveform::Sawtooth.gain(), 0.75);
        assert_eq!(Waveform::Square.gain(), 0.6);
    }

    #[test]
    fn sine_starts_at_zero_and_peaks_mid_cycle() {
        // 441 Hz at 44.1 kHz puts a full cycle in exactly 100 samples.
        let mut osc = Oscillator::new(Waveform::Sine, 441.0, 44100.0);
        let samples: Vec<f64> = (0..100).map(|_| osc.next_sample()).collect();
        assert!(samples[0].abs() < 1e-12);
        assert!((samples[25] - 1.0).abs() < 1e-9);
        assert!((samples[75] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn sawtooth_ramps_across_the_cycle() {
        let mut osc = Oscillator::new(Waveform::Sawtooth, 441.0, 44100.0);
        let samples: Vec<f64> = (0..100).map(|_| osc.next_sample()).collect();
        let gain = Waveform::Sawtooth.gain();
        assert!((samples[0] + gain).abs() < 1e-9);
        for pair in samples.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn square_flips_sign_mid_cycle() {
        let mut osc = Oscillator::new(Waveform::Square, 441.0, 44100.0);
        let samples: Vec<f64> = (0..100).map(|_| osc.next_sample()).collect();
        let gain = Waveform::Square.gain();
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[10], gain);
        assert_eq!(samples[60], -gain);
    }

    #[test]
    fn silent_oscillator_never_emits() {
        let mut osc = Oscillator::new(Waveform::Sawtooth, 0.0, 44100.0);
        assert!(osc.is_silent());
        for _ in 0..100 {
            assert_eq!(osc.next_sample(), 0.0);
        }

        let mut negative = Oscillator::new(Waveform::Square, -440.0, 44100.0);
        assert!(negative.is_silent());
        assert_eq!(negative.next_sample(), 0.0);
    }

    #[test]
    fn waveform_tokens_round_trip() {
        for waveform in Waveform::ALL {
            assert_eq!(waveform.token().parse::<Waveform>().unwrap(), waveform);
        }
        assert!("noise".parse::<Waveform>().is_err());
        assert_eq!("SQUARE".parse::<Waveform>().unwrap(), Waveform::Square);
    }
}
