//! rodio-backed synthesis context.

use super::engine::{ContextFactory, ContextState, SynthesisContext};
use super::tones::{ToneSource, Voice};
use super::AudioError;
use rodio::{OutputStream, OutputStreamHandle, PlayError};

/// Sample rate voices are rendered at; rodio converts to the device rate.
pub const SAMPLE_RATE: u32 = 44_100;

/// Where the output stream stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    /// Stream open, voices accepted
    Live,
    /// Host paused output; the stream stays open so playing voices finish
    Paused,
    /// Device went away; the stream has to be reopened
    Lost,
}

impl Link {
    fn state(self) -> ContextState {
        match self {
            Link::Live => ContextState::Running,
            Link::Paused | Link::Lost => ContextState::Suspended,
        }
    }

    fn suspended(self) -> Self {
        match self {
            Link::Live => Link::Paused,
            other => other,
        }
    }

    fn needs_reopen(self) -> bool {
        self == Link::Lost
    }
}

/// Output context holding the default device's stream.
///
/// Host suspension only pauses scheduling. The stream is released when
/// `play_raw` reports the device gone, and reopened on the next resume.
pub struct RodioContext {
    output: Option<(OutputStream, OutputStreamHandle)>,
    link: Link,
}

impl RodioContext {
    /// Open the default output device.
    pub fn open() -> Result<Self, AudioError> {
        let output = open_default()?;
        Ok(Self {
            output: Some(output),
            link: Link::Live,
        })
    }
}

impl SynthesisContext for RodioContext {
    fn state(&self) -> ContextState {
        self.link.state()
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        if self.link.needs_reopen() || self.output.is_none() {
            self.output = Some(open_default()?);
            tracing::debug!("Audio output reopened");
        }
        self.link = Link::Live;
        Ok(())
    }

    fn suspend(&mut self) {
        self.link = self.link.suspended();
    }

    fn schedule(&mut self, voice: Voice) -> Result<(), AudioError> {
        if self.link != Link::Live {
            return Err(AudioError::Suspended);
        }
        let (_, handle) = self.output.as_ref().ok_or(AudioError::Suspended)?;

        match handle.play_raw(ToneSource::new(voice, SAMPLE_RATE)) {
            Ok(()) => Ok(()),
            Err(PlayError::NoDevice) => {
                self.output = None;
                self.link = Link::Lost;
                Err(AudioError::DeviceNotAvailable("output device lost".to_string()))
            }
            Err(e) => Err(AudioError::PlaybackFailed(e.to_string())),
        }
    }
}

/// Factory opening the default output device on first use.
#[derive(Debug, Default)]
pub struct RodioContextFactory;

impl ContextFactory for RodioContextFactory {
    type Context = RodioContext;

    fn create(&mut self) -> Result<RodioContext, AudioError> {
        RodioContext::open()
    }
}

fn open_default() -> Result<(OutputStream, OutputStreamHandle), AudioError> {
    OutputStream::try_default().map_err(|e| AudioError::DeviceNotAvailable(e.to_string()))
}
