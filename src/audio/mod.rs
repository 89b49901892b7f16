//! Audio Feedback Module
//!
//! Procedural UI sounds for hover, click and mode-switch interactions.
//!
//! Sounds are synthesized on demand from a fixed table of tone profiles and
//! played through a lazily created output context. Every failure in here is
//! swallowed: feedback is best-effort, interaction is not.

pub mod engine;
pub mod output;
pub mod tones;

use thiserror::Error;

// Re-export main types
pub use engine::{AudioFeedbackEngine, ContextFactory, ContextState, EngineState, SynthesisContext};
pub use output::{RodioContext, RodioContextFactory};
pub use tones::{
    Envelope, Oscillator, PitchJitter, Sweep, ToneProfile, ToneSource, Voice, Waveform,
    MAX_JITTER_CENTS,
};

/// Errors that can occur during audio operations
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    #[error("Audio output is suspended")]
    Suspended,

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// The closed catalogue of UI sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueType {
    /// Pointer entered a collapsed panel
    Hover,
    /// A panel was activated
    Click,
    /// The page locale was switched
    ModeSwitch,
    /// Rising start-up sweep
    PowerOn,
}

impl CueType {
    /// Get all cue types.
    pub fn all() -> &'static [CueType] {
        &[
            CueType::Hover,
            CueType::Click,
            CueType::ModeSwitch,
            CueType::PowerOn,
        ]
    }

    /// Get the tone profile for this cue.
    pub fn profile(&self) -> &'static ToneProfile {
        ToneProfile::for_cue(*self)
    }
}

impl std::fmt::Display for CueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CueType::Hover => write!(f, "hover"),
            CueType::Click => write!(f, "click"),
            CueType::ModeSwitch => write!(f, "mode-switch"),
            CueType::PowerOn => write!(f, "power-on"),
        }
    }
}

/// Anything that can receive cue requests.
///
/// Panels emit cues through this seam so they never own audio state.
pub trait CueSink {
    /// Request playback of a cue. Must not block and must not fail.
    fn play(&mut self, cue: CueType);
}

/// Recording sink: keeps every requested cue in order.
///
/// Drives panels without an audio device, e.g. when checking which cues an
/// input sequence produces.
impl CueSink for Vec<CueType> {
    fn play(&mut self, cue: CueType) {
        self.push(cue);
    }
}
