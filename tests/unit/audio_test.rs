//! Audio feedback engine tests against a recording context.

use crate::audio_mock::{MockBehavior, MockFactory};
use biopage::audio::{
    AudioFeedbackEngine, ContextState, CueType, EngineState, PitchJitter, Sweep, ToneProfile,
    Voice, Waveform, MAX_JITTER_CENTS,
};
use std::time::Duration;

#[test]
fn test_muted_engine_schedules_nothing() {
    let (factory, log) = MockFactory::new(MockBehavior::default());
    let mut engine = AudioFeedbackEngine::new(factory);
    engine.set_muted(true);

    for cue in CueType::all() {
        engine.play(*cue);
    }

    assert!(log.borrow().voices.is_empty());
    assert_eq!(log.borrow().created, 0);
    assert_eq!(engine.state(), EngineState::Uninitialized);
}

#[test]
fn test_context_created_once() {
    let (factory, log) = MockFactory::new(MockBehavior::default());
    let mut engine = AudioFeedbackEngine::new(factory);

    for _ in 0..5 {
        engine.play(CueType::Hover);
    }
    engine.play(CueType::Click);

    assert_eq!(log.borrow().created, 1);
    assert_eq!(log.borrow().voices.len(), 6);
    assert_eq!(engine.state(), EngineState::Ready);
}

#[test]
fn test_scheduled_voices_match_profiles() {
    let (factory, log) = MockFactory::new(MockBehavior::default());
    let mut engine = AudioFeedbackEngine::new(factory);

    for cue in CueType::all() {
        engine.play(*cue);
    }

    let log = log.borrow();
    for (cue, voice) in CueType::all().iter().zip(log.voices.iter()) {
        assert_eq!(voice, &Voice::from_profile(cue.profile(), 1.0, 1.0));
    }
}

#[test]
fn test_click_voice_parameters() {
    let (factory, log) = MockFactory::new(MockBehavior::default());
    let mut engine = AudioFeedbackEngine::new(factory);

    engine.play(CueType::Click);

    let log = log.borrow();
    let voice = &log.voices[0];
    assert_eq!(voice.oscillator.waveform, Waveform::Triangle);
    assert_eq!(voice.oscillator.start_hz, 640.0);
    assert_eq!(voice.oscillator.end_hz, 240.0);
    assert_eq!(voice.oscillator.sweep, Sweep::Linear);
    assert_eq!(voice.envelope.peak_gain, 0.10);
    assert_eq!(voice.duration, Duration::from_millis(100));
}

#[test]
fn test_hover_voice_parameters() {
    let (factory, log) = MockFactory::new(MockBehavior::default());
    let mut engine = AudioFeedbackEngine::new(factory);

    engine.play(CueType::Hover);

    let log = log.borrow();
    let voice = &log.voices[0];
    assert_eq!(voice.oscillator.waveform, Waveform::Sine);
    assert_eq!(voice.oscillator.sweep, Sweep::Exponential);
    assert_eq!(voice.oscillator.start_hz, 880.0);
    assert_eq!(voice.oscillator.end_hz, 1320.0);
    assert_eq!(voice.oscillator.sweep_time, Duration::from_millis(60));
    assert_eq!(voice.envelope.peak_gain, 0.04);
    assert_eq!(voice.envelope.floor, 0.001);
    assert_eq!(voice.envelope.decay_time, Duration::from_millis(60));
    assert_eq!(voice.duration, Duration::from_millis(70));
}

#[test]
fn test_mode_switch_voice_parameters() {
    let (factory, log) = MockFactory::new(MockBehavior::default());
    let mut engine = AudioFeedbackEngine::new(factory);

    engine.play(CueType::ModeSwitch);

    let log = log.borrow();
    let voice = &log.voices[0];
    assert_eq!(voice.oscillator.waveform, Waveform::Square);
    assert_eq!(voice.oscillator.sweep, Sweep::Exponential);
    assert_eq!(voice.oscillator.start_hz, 330.0);
    assert_eq!(voice.oscillator.end_hz, 990.0);
    assert_eq!(voice.oscillator.sweep_time, Duration::from_millis(170));
    assert_eq!(voice.envelope.peak_gain, 0.05);
    assert_eq!(voice.envelope.floor, 0.001);
    assert_eq!(voice.envelope.decay_time, Duration::from_millis(170));
    assert_eq!(voice.duration, Duration::from_millis(180));
}

#[test]
fn test_out_of_range_jitter_never_panics() {
    let bound = 2f32.powf(MAX_JITTER_CENTS / 1200.0) + 1e-6;

    for cents in [f32::INFINITY, f32::NAN, 1e9, 3.0e38] {
        let (factory, log) = MockFactory::new(MockBehavior::default());
        let mut engine = AudioFeedbackEngine::new(factory).with_jitter(PitchJitter::new(cents));

        for _ in 0..20 {
            engine.play(CueType::Click);
        }

        let log = log.borrow();
        assert_eq!(log.voices.len(), 20);
        for voice in &log.voices {
            let ratio = voice.oscillator.start_hz / 640.0;
            assert!(ratio <= bound && ratio >= 1.0 / bound);
            assert_eq!(voice.duration, Duration::from_millis(100));
        }
    }
}

#[test]
fn test_power_on_rises() {
    let profile = ToneProfile::for_cue(CueType::PowerOn);
    assert!(profile.is_rising());
    assert_eq!(profile.start_hz, 110.0);
    assert_eq!(profile.end_hz, 880.0);
    assert_eq!(profile.waveform, Waveform::Sine);
    assert_eq!(profile.peak_gain, 0.08);
    assert_eq!(profile.envelope_ms, 380);
    assert_eq!(profile.duration_ms, 400);
}

#[test]
fn test_unsupported_context_never_retried() {
    let (factory, log) = MockFactory::new(MockBehavior {
        unsupported: true,
        ..Default::default()
    });
    let mut engine = AudioFeedbackEngine::new(factory);

    engine.play(CueType::Hover);
    engine.play(CueType::Click);
    engine.play(CueType::ModeSwitch);

    assert_eq!(log.borrow().created, 1);
    assert!(log.borrow().voices.is_empty());
    assert_eq!(engine.state(), EngineState::Unavailable);
}

#[test]
fn test_suspended_context_resumed_before_schedule() {
    let (factory, log) = MockFactory::new(MockBehavior {
        start_suspended: true,
        ..Default::default()
    });
    let mut engine = AudioFeedbackEngine::new(factory);

    engine.play(CueType::Click);

    let log = log.borrow();
    assert_eq!(log.resumed, 1);
    assert_eq!(log.states_at_schedule, vec![ContextState::Running]);
}

#[test]
fn test_resume_failure_is_swallowed() {
    let (factory, log) = MockFactory::new(MockBehavior {
        start_suspended: true,
        resume_fails: true,
        ..Default::default()
    });
    let mut engine = AudioFeedbackEngine::new(factory);

    engine.play(CueType::Click);
    engine.play(CueType::Click);

    // Scheduling is still attempted; the host decides whether it is heard
    let log = log.borrow();
    assert_eq!(log.resumed, 2);
    assert_eq!(log.voices.len(), 2);
    assert_eq!(engine.state(), EngineState::Suspended);
}

#[test]
fn test_schedule_failure_is_swallowed() {
    let (factory, log) = MockFactory::new(MockBehavior {
        schedule_fails: true,
        ..Default::default()
    });
    let mut engine = AudioFeedbackEngine::new(factory);

    engine.play(CueType::Hover);
    engine.play(CueType::Hover);

    assert_eq!(log.borrow().voices.len(), 2);
    assert_eq!(engine.state(), EngineState::Ready);
}

#[test]
fn test_host_suspend_then_play_resumes() {
    let (factory, log) = MockFactory::new(MockBehavior::default());
    let mut engine = AudioFeedbackEngine::new(factory);

    engine.play(CueType::Hover);
    engine.suspend();
    assert_eq!(engine.state(), EngineState::Suspended);

    engine.play(CueType::Hover);
    assert_eq!(engine.state(), EngineState::Ready);
    assert_eq!(log.borrow().resumed, 1);
}

#[test]
fn test_overlapping_cues_get_independent_voices() {
    let (factory, log) = MockFactory::new(MockBehavior::default());
    let mut engine = AudioFeedbackEngine::new(factory);

    // Fired back to back, well inside the 100ms click duration
    engine.play(CueType::Click);
    engine.play(CueType::Click);

    let log = log.borrow();
    assert_eq!(log.voices.len(), 2);
    assert_eq!(log.voices[0], log.voices[1]);
}

#[test]
fn test_unmute_restores_playback() {
    let (factory, log) = MockFactory::new(MockBehavior::default());
    let mut engine = AudioFeedbackEngine::new(factory);

    engine.set_muted(true);
    engine.play(CueType::Click);
    engine.set_muted(false);
    engine.play(CueType::Click);

    assert_eq!(log.borrow().voices.len(), 1);
}
