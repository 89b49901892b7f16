//! Tone Synthesis for UI Cues
//!
//! Static tone profiles per cue, the single-use voices built from them, and a
//! rodio `Source` that renders a voice sample by sample.

use super::CueType;
use rand::Rng;
use rodio::Source;
use std::time::Duration;

/// Oscillator wave shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
}

impl Waveform {
    /// Sample the waveform at `phase` (cycles, wrapped to `[0, 1)`).
    pub fn sample(&self, phase: f32) -> f32 {
        let phase = phase.fract();
        match self {
            Waveform::Sine => (phase * std::f32::consts::TAU).sin(),
            Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

/// Frequency interpolation between the start and end of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    /// Constant ratio per unit time
    Exponential,
    /// Constant Hz per unit time
    Linear,
}

impl Sweep {
    /// Frequency at `progress` (0.0 - 1.0) along the sweep.
    pub fn frequency_at(&self, start_hz: f32, end_hz: f32, progress: f32) -> f32 {
        let progress = progress.clamp(0.0, 1.0);
        match self {
            Sweep::Exponential => start_hz * (end_hz / start_hz).powf(progress),
            Sweep::Linear => start_hz + (end_hz - start_hz) * progress,
        }
    }
}

/// Fixed sound parameters for one cue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneProfile {
    /// Oscillator shape
    pub waveform: Waveform,
    /// Frequency at tone start in Hz
    pub start_hz: f32,
    /// Frequency reached at the end of the envelope in Hz
    pub end_hz: f32,
    /// Interpolation used between start and end
    pub sweep: Sweep,
    /// Envelope peak gain (0.0 - 1.0)
    pub peak_gain: f32,
    /// Gain the envelope decays towards
    pub decay_floor: f32,
    /// Envelope decay time in milliseconds
    pub envelope_ms: u64,
    /// Total tone length in milliseconds
    pub duration_ms: u64,
}

impl ToneProfile {
    /// Soft upward chirp for previewing a collapsed panel.
    pub const HOVER: ToneProfile = ToneProfile {
        waveform: Waveform::Sine,
        start_hz: 880.0,
        end_hz: 1320.0,
        sweep: Sweep::Exponential,
        peak_gain: 0.04,
        decay_floor: 0.001,
        envelope_ms: 60,
        duration_ms: 70,
    };

    /// Short pitch drop for activation.
    pub const CLICK: ToneProfile = ToneProfile {
        waveform: Waveform::Triangle,
        start_hz: 640.0,
        end_hz: 240.0,
        sweep: Sweep::Linear,
        peak_gain: 0.10,
        decay_floor: 0.001,
        envelope_ms: 90,
        duration_ms: 100,
    };

    /// Bright rising sweep for locale switching.
    pub const MODE_SWITCH: ToneProfile = ToneProfile {
        waveform: Waveform::Square,
        start_hz: 330.0,
        end_hz: 990.0,
        sweep: Sweep::Exponential,
        peak_gain: 0.05,
        decay_floor: 0.001,
        envelope_ms: 170,
        duration_ms: 180,
    };

    /// Long low-to-high sweep.
    pub const POWER_ON: ToneProfile = ToneProfile {
        waveform: Waveform::Sine,
        start_hz: 110.0,
        end_hz: 880.0,
        sweep: Sweep::Exponential,
        peak_gain: 0.08,
        decay_floor: 0.001,
        envelope_ms: 380,
        duration_ms: 400,
    };

    /// Look up the profile for a cue.
    pub fn for_cue(cue: CueType) -> &'static ToneProfile {
        match cue {
            CueType::Hover => &Self::HOVER,
            CueType::Click => &Self::CLICK,
            CueType::ModeSwitch => &Self::MODE_SWITCH,
            CueType::PowerOn => &Self::POWER_ON,
        }
    }

    /// Total tone length.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Whether the sweep rises in pitch.
    pub fn is_rising(&self) -> bool {
        self.end_hz > self.start_hz
    }
}

/// Largest detune a voice may receive, in cents.
pub const MAX_JITTER_CENTS: f32 = 25.0;

/// Random detuning applied per voice, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PitchJitter {
    cents: f32,
}

impl PitchJitter {
    /// No detuning.
    pub fn none() -> Self {
        Self { cents: 0.0 }
    }

    /// Detune each voice by up to `cents` in either direction.
    ///
    /// Clamped to [`MAX_JITTER_CENTS`]; non-finite values disable jitter.
    pub fn new(cents: f32) -> Self {
        let cents = if cents.is_finite() {
            cents.clamp(0.0, MAX_JITTER_CENTS)
        } else {
            0.0
        };
        Self { cents }
    }

    /// Maximum detune in cents.
    pub fn cents(&self) -> f32 {
        self.cents
    }

    /// Draw a frequency ratio for one voice.
    pub fn ratio(&self) -> f32 {
        if self.cents <= 0.0 {
            return 1.0;
        }
        let offset = rand::rng().random_range(-self.cents..=self.cents);
        2f32.powf(offset / 1200.0)
    }
}

/// Tone generator half of a voice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    pub sweep: Sweep,
    /// Time over which the sweep runs
    pub sweep_time: Duration,
}

impl Oscillator {
    /// Instantaneous frequency `elapsed` after start.
    pub fn frequency_at(&self, elapsed: Duration) -> f32 {
        let sweep_secs = self.sweep_time.as_secs_f32();
        let progress = if sweep_secs > 0.0 {
            elapsed.as_secs_f32() / sweep_secs
        } else {
            1.0
        };
        self.sweep.frequency_at(self.start_hz, self.end_hz, progress)
    }
}

/// Amplitude-envelope half of a voice.
///
/// Starts at `peak_gain` and ramps exponentially to `floor` over
/// `decay_time`, then holds the floor until the voice stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub peak_gain: f32,
    pub floor: f32,
    pub decay_time: Duration,
}

impl Envelope {
    /// Gain `elapsed` after start.
    pub fn gain_at(&self, elapsed: Duration) -> f32 {
        if self.peak_gain <= 0.0 {
            return 0.0;
        }
        let decay_secs = self.decay_time.as_secs_f32();
        if decay_secs <= 0.0 {
            return self.floor.min(self.peak_gain);
        }
        let progress = (elapsed.as_secs_f32() / decay_secs).clamp(0.0, 1.0);
        let floor = self.floor.clamp(f32::MIN_POSITIVE, self.peak_gain);
        self.peak_gain * (floor / self.peak_gain).powf(progress)
    }
}

/// One oscillator and one envelope, built for a single cue playback.
///
/// Voices are moved into the output context and never reused, so
/// overlapping cues cannot disturb each other's envelopes.
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub oscillator: Oscillator,
    pub envelope: Envelope,
    pub duration: Duration,
}

impl Voice {
    /// Build a voice from a profile.
    ///
    /// `detune` multiplies both sweep endpoints; `gain` scales the envelope.
    pub fn from_profile(profile: &ToneProfile, detune: f32, gain: f32) -> Self {
        let gain = gain.clamp(0.0, 1.0);
        Self {
            oscillator: Oscillator {
                waveform: profile.waveform,
                start_hz: profile.start_hz * detune,
                end_hz: profile.end_hz * detune,
                sweep: profile.sweep,
                sweep_time: Duration::from_millis(profile.envelope_ms),
            },
            envelope: Envelope {
                peak_gain: profile.peak_gain * gain,
                floor: profile.decay_floor,
                decay_time: Duration::from_millis(profile.envelope_ms),
            },
            duration: profile.duration(),
        }
    }
}

/// Renders a voice as mono f32 samples.
pub struct ToneSource {
    voice: Voice,
    sample_rate: u32,
    position: usize,
    total_samples: usize,
    phase: f32,
}

impl ToneSource {
    /// Create a source for `voice` at the given sample rate.
    pub fn new(voice: Voice, sample_rate: u32) -> Self {
        let total_samples = (voice.duration.as_secs_f64() * sample_rate as f64).round() as usize;
        Self {
            voice,
            sample_rate,
            position: 0,
            total_samples,
            phase: 0.0,
        }
    }

    /// Number of samples this source produces in total.
    pub fn total_samples(&self) -> usize {
        self.total_samples
    }
}

impl Iterator for ToneSource {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.position >= self.total_samples {
            return None;
        }

        let elapsed = Duration::from_secs_f64(self.position as f64 / self.sample_rate as f64);
        let frequency = self.voice.oscillator.frequency_at(elapsed);
        let sample =
            self.voice.oscillator.waveform.sample(self.phase) * self.voice.envelope.gain_at(elapsed);

        self.phase = (self.phase + frequency / self.sample_rate as f32).fract();
        self.position += 1;

        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_samples - self.position;
        (remaining, Some(remaining))
    }
}

impl Source for ToneSource {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.total_samples - self.position)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(self.voice.duration)
    }
}
