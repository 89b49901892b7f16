//! Audio Feedback Engine
//!
//! Owns the synthesis context and turns cue requests into scheduled voices.

use super::tones::{PitchJitter, ToneProfile, Voice};
use super::{AudioError, CueSink, CueType};

/// Running state reported by a synthesis context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Output is live; scheduled voices are heard
    Running,
    /// Output was paused by the host
    Suspended,
}

/// Trait for synthesis context implementations
pub trait SynthesisContext {
    /// Current running state.
    fn state(&self) -> ContextState;

    /// Ask the host to resume a suspended context.
    fn resume(&mut self) -> Result<(), AudioError>;

    /// Release output because the host suspended it.
    fn suspend(&mut self);

    /// Start `voice` immediately; it stops on its own after its duration.
    fn schedule(&mut self, voice: Voice) -> Result<(), AudioError>;
}

/// Creates the synthesis context on first use.
pub trait ContextFactory {
    type Context: SynthesisContext;

    /// Construct the context. Called at most once per engine.
    fn create(&mut self) -> Result<Self::Context, AudioError>;
}

/// Observable engine lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No cue has been requested yet
    Uninitialized,
    /// Context exists and is running
    Ready,
    /// Context exists but the host suspended it
    Suspended,
    /// Context construction failed; the engine is a permanent no-op
    Unavailable,
}

enum ContextSlot<C> {
    Uninitialized,
    Ready(C),
    Unavailable,
}

/// Plays UI cues through a lazily created synthesis context.
///
/// The context is created by the first unmuted [`play`](Self::play) call.
/// Hosts that only unlock audio output from inside a user gesture require
/// that first call to come from an input handler; every caller in this crate
/// does so.
pub struct AudioFeedbackEngine<F: ContextFactory> {
    factory: F,
    slot: ContextSlot<F::Context>,
    muted: bool,
    gain: f32,
    jitter: PitchJitter,
}

impl<F: ContextFactory> AudioFeedbackEngine<F> {
    /// Create an engine. No context is constructed until the first cue.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            slot: ContextSlot::Uninitialized,
            muted: false,
            gain: 1.0,
            jitter: PitchJitter::none(),
        }
    }

    /// Scale every cue's peak gain (0.0 - 1.0).
    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain.clamp(0.0, 1.0);
        self
    }

    /// Detune each voice randomly by up to the given jitter.
    pub fn with_jitter(mut self, jitter: PitchJitter) -> Self {
        self.jitter = jitter;
        self
    }

    /// Set muted state.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Check if muted.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        match &self.slot {
            ContextSlot::Uninitialized => EngineState::Uninitialized,
            ContextSlot::Unavailable => EngineState::Unavailable,
            ContextSlot::Ready(context) => match context.state() {
                ContextState::Running => EngineState::Ready,
                ContextState::Suspended => EngineState::Suspended,
            },
        }
    }

    /// Report that the host suspended audio output (e.g. focus loss).
    pub fn suspend(&mut self) {
        if let ContextSlot::Ready(context) = &mut self.slot {
            if context.state() == ContextState::Running {
                tracing::debug!("Suspending audio context");
                context.suspend();
            }
        }
    }

    /// Play a cue. Never blocks and never fails.
    pub fn play(&mut self, cue: CueType) {
        if self.muted {
            return;
        }

        let voice = Voice::from_profile(ToneProfile::for_cue(cue), self.jitter.ratio(), self.gain);

        let Some(context) = self.context() else {
            return;
        };

        if context.state() == ContextState::Suspended {
            if let Err(e) = context.resume() {
                tracing::debug!("Audio context resume failed: {}", e);
            }
        }

        if let Err(e) = context.schedule(voice) {
            tracing::debug!("Failed to schedule {} cue: {}", cue, e);
        }
    }

    fn context(&mut self) -> Option<&mut F::Context> {
        if matches!(self.slot, ContextSlot::Uninitialized) {
            self.slot = match self.factory.create() {
                Ok(context) => {
                    tracing::info!("Audio context created");
                    ContextSlot::Ready(context)
                }
                Err(e) => {
                    tracing::warn!("Audio unavailable, cues disabled: {}", e);
                    ContextSlot::Unavailable
                }
            };
        }

        match &mut self.slot {
            ContextSlot::Ready(context) => Some(context),
            _ => None,
        }
    }
}

impl<F: ContextFactory> CueSink for AudioFeedbackEngine<F> {
    fn play(&mut self, cue: CueType) {
        AudioFeedbackEngine::play(self, cue);
    }
}
