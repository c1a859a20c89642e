//! ADSR envelope generator.
//!
//! Each chord voice is shaped by an Attack-Decay-Sustain-Release envelope:
//! gated on at the start of playback, held at the sustain level for the
//! note's duration, then released into a fade that forms the tail of the
//! rendered clip.

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for AdsrParams {
    /// The chord playback envelope: a fast attack and a short tail that
    /// lets stacked voices ring without smearing into each other.
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.12,
            sustain: 0.7,
            release: 0.18,
        }
    }
}

impl AdsrParams {
    /// Creates new ADSR parameters. Times are floored at zero and the
    /// sustain level is clamped into 0..1.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }
}

/// Envelope generator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    /// Attack phase - amplitude rising from 0 to 1.
    Attack,
    /// Decay phase - amplitude falling from 1 to sustain level.
    Decay,
    /// Sustain phase - amplitude held at sustain level.
    Sustain,
    /// Release phase - amplitude falling from current level to 0.
    Release,
    /// Envelope completed - amplitude is 0.
    Idle,
}

/// ADSR envelope generator.
#[derive(Debug, Clone)]
pub struct AdsrEnvelope {
    params: AdsrParams,
    sample_rate: f64,
    state: EnvelopeState,
    time: f64,
    level: f64,
    release_level: f64,
}

impl AdsrEnvelope {
    /// Creates a new ADSR envelope.
    pub fn new(params: AdsrParams, sample_rate: f64) -> Self {
        Self {
            params,
            sample_rate,
            state: EnvelopeState::Attack,
            time: 0.0,
            level: 0.0,
            release_level: 0.0,
        }
    }

    /// Triggers the envelope to start (note on).
    pub fn trigger(&mut self) {
        self.state = EnvelopeState::Attack;
        self.time = 0.0;
        self.level = 0.0;
    }

    /// Releases the envelope (note off). The release ramp starts from the
    /// level the envelope had reached, so a release during the attack does
    /// not jump.
    pub fn release(&mut self) {
        if self.state != EnvelopeState::Idle && self.state != EnvelopeState::Release {
            self.release_level = self.level;
            self.state = EnvelopeState::Release;
            self.time = 0.0;
        }
    }

    /// Gets the current envelope state.
    pub fn state(&self) -> EnvelopeState {
        self.state
    }

    /// Returns true if the envelope has completed.
    pub fn is_idle(&self) -> bool {
        self.state == EnvelopeState::Idle
    }

    /// Generates the next envelope sample.
    pub fn next_sample(&mut self) -> f64 {
        let dt = 1.0 / self.sample_rate;

        match self.state {
            EnvelopeState::Attack => {
                if self.params.attack > 0.0 {
                    self.level = self.time / self.params.attack;
                    if self.level >= 1.0 {
                        self.level = 1.0;
                        self.state = EnvelopeState::Decay;
                        self.time = 0.0;
                    } else {
                        self.time += dt;
                    }
                } else {
                    self.level = 1.0;
                    self.state = EnvelopeState::Decay;
                    self.time = 0.0;
                }
            }
            EnvelopeState::Decay => {
                if self.params.decay > 0.0 {
                    let progress = self.time / self.params.decay;
                    self.level = 1.0 - progress * (1.0 - self.params.sustain);
                    if progress >= 1.0 {
                        self.level = self.params.sustain;
                        self.state = EnvelopeState::Sustain;
                        self.time = 0.0;
                    } else {
                        self.time += dt;
                    }
                } else {
                    self.level = self.params.sustain;
                    self.state = EnvelopeState::Sustain;
                    self.time = 0.0;
                }
            }
            EnvelopeState::Sustain => {
                self.level = self.params.sustain;
                // Stay in sustain until release() is called
            }
            EnvelopeState::Release => {
                if self.params.release > 0.0 {
                    let progress = self.time / self.params.release;
                    self.level = self.release_level * (1.0 - progress);
                    if progress >= 1.0 {
                        self.level = 0.0;
                        self.state = EnvelopeState::Idle;
                    } else {
                        self.time += dt;
                    }
                } else {
                    self.level = 0.0;
                    self.state = EnvelopeState::Idle;
                }
            }
            EnvelopeState::Idle => {
                self.level = 0.0;
            }
        }

        self.level
    }
}
