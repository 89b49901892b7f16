//! Page session behaviour end to end.

use crate::audio_mock::{AudioLog, MockBehavior, MockFactory};
use biopage::audio::{AudioFeedbackEngine, CueType, Voice};
use biopage::i18n::Locale;
use biopage::panels::{PanelConfig, PanelInput, PanelKey, PanelState};
use biopage::session::PageSession;
use biopage::storage::{MemoryStore, PreferenceStore, TomlFileStore, MUTED_KEY};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

fn panels() -> Vec<PanelConfig> {
    vec![
        PanelConfig::new("about").open(),
        PanelConfig::new("projects"),
        PanelConfig::new("devices"),
    ]
}

fn session(
    medium: MemoryStore,
) -> (PageSession<MemoryStore, MockFactory>, Rc<RefCell<AudioLog>>) {
    let (factory, log) = MockFactory::new(MockBehavior::default());
    let session = PageSession::new(
        PreferenceStore::new(medium),
        AudioFeedbackEngine::new(factory),
        panels(),
    );
    (session, log)
}

fn file_session(path: &Path) -> (PageSession<TomlFileStore, MockFactory>, Rc<RefCell<AudioLog>>) {
    let (factory, log) = MockFactory::new(MockBehavior::default());
    let session = PageSession::new(
        PreferenceStore::new(TomlFileStore::new(path)),
        AudioFeedbackEngine::new(factory),
        panels(),
    );
    (session, log)
}

fn voice(cue: CueType) -> Voice {
    Voice::from_profile(cue.profile(), 1.0, 1.0)
}

#[test]
fn test_fresh_session_defaults() {
    let (session, log) = session(MemoryStore::new());

    assert_eq!(session.locale(), Locale::English);
    assert!(!session.is_muted());
    assert!(session.panels()[0].is_open());
    assert!(!session.panels()[1].is_open());
    assert_eq!(log.borrow().created, 0);
}

#[test]
fn test_locale_toggle_plays_one_mode_switch() {
    let (mut session, log) = session(MemoryStore::new());

    assert_eq!(session.toggle_locale(), Locale::Spanish);
    assert_eq!(log.borrow().voices, vec![voice(CueType::ModeSwitch)]);

    assert_eq!(session.toggle_locale(), Locale::English);
    assert_eq!(log.borrow().voices.len(), 2);
}

#[test]
fn test_locale_toggle_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");

    let (mut first, _log) = file_session(&path);
    first.toggle_locale();
    drop(first);

    let (second, _log) = file_session(&path);
    assert_eq!(second.locale(), Locale::Spanish);
    assert!(!second.is_muted());
}

#[test]
fn test_mute_toggle_plays_nothing() {
    let (mut session, log) = session(MemoryStore::new());

    assert!(session.toggle_mute());
    assert!(!session.toggle_mute());

    assert!(log.borrow().voices.is_empty());
}

#[test]
fn test_muted_session_is_silent() {
    let (mut session, log) = session(MemoryStore::new());
    session.toggle_mute();

    session.panel_input(1, PanelInput::PointerEnter);
    session.panel_input(1, PanelInput::PrimaryActivate);
    session.toggle_locale();

    assert!(log.borrow().voices.is_empty());
    assert_eq!(log.borrow().created, 0);
    // Panels and locale still respond
    assert!(session.panels()[1].is_open());
    assert_eq!(session.locale(), Locale::Spanish);
}

#[test]
fn test_stored_mute_applies_to_engine() {
    let (mut session, log) = session(MemoryStore::new().with_entry(MUTED_KEY, "true"));

    assert!(session.is_muted());
    assert!(session.engine().is_muted());

    session.panel_input(1, PanelInput::PrimaryActivate);
    assert!(log.borrow().voices.is_empty());
}

#[test]
fn test_mute_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");

    let (mut first, _log) = file_session(&path);
    first.toggle_mute();
    first.toggle_locale();
    drop(first);

    let (mut second, log) = file_session(&path);
    assert!(second.is_muted());
    assert_eq!(second.locale(), Locale::Spanish);

    second.panel_input(2, PanelInput::PrimaryActivate);
    assert!(log.borrow().voices.is_empty());
}

#[test]
fn test_panel_hover_then_click() {
    let (mut session, log) = session(MemoryStore::new());

    session.panel_input(1, PanelInput::PointerEnter);
    assert_eq!(
        session.panel_input(1, PanelInput::PrimaryActivate),
        Some(PanelState::Open)
    );
    // Pointer re-entering an open panel is silent
    session.panel_input(1, PanelInput::PointerEnter);

    assert_eq!(
        log.borrow().voices,
        vec![voice(CueType::Hover), voice(CueType::Click)]
    );
    assert_eq!(log.borrow().created, 1);
}

#[test]
fn test_keyboard_activation() {
    let (mut session, log) = session(MemoryStore::new());

    assert_eq!(
        session.panel_input(0, PanelInput::KeyDown(PanelKey::Enter)),
        Some(PanelState::Closed)
    );
    assert_eq!(
        session.panel_input(0, PanelInput::KeyDown(PanelKey::Other)),
        Some(PanelState::Closed)
    );
    assert_eq!(log.borrow().voices, vec![voice(CueType::Click)]);
}

#[test]
fn test_panels_do_not_share_state() {
    let (mut session, _log) = session(MemoryStore::new());

    session.panel_input(1, PanelInput::PrimaryActivate);
    session.panel_input(2, PanelInput::PrimaryActivate);
    session.panel_input(1, PanelInput::PrimaryActivate);

    let open: Vec<bool> = session.panels().iter().map(|p| p.is_open()).collect();
    assert_eq!(open, vec![true, false, true]);
}

#[test]
fn test_out_of_range_panel_ignored() {
    let (mut session, log) = session(MemoryStore::new());
    assert_eq!(session.panel_input(9, PanelInput::PrimaryActivate), None);
    assert!(log.borrow().voices.is_empty());
}

#[test]
fn test_suspend_then_interaction_resumes() {
    let (mut session, log) = session(MemoryStore::new());

    session.panel_input(1, PanelInput::PointerEnter);
    session.suspend_audio();
    session.panel_input(1, PanelInput::PrimaryActivate);

    assert_eq!(log.borrow().resumed, 1);
    assert_eq!(log.borrow().voices.len(), 2);
}

#[test]
fn test_unavailable_storage_keeps_session_working() {
    let (mut session, _log) = session(MemoryStore::unavailable());

    assert_eq!(session.locale(), Locale::English);
    session.toggle_locale();
    session.toggle_mute();
    assert_eq!(session.locale(), Locale::Spanish);
    assert!(session.is_muted());
}
