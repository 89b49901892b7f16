//! Page session: preferences, audio feedback and panels wired together.
//!
//! This is the non-visual half of the page. The egui shell forwards input
//! events here and renders whatever state it reads back.

use crate::audio::{AudioFeedbackEngine, ContextFactory, CueType};
use crate::i18n::Locale;
use crate::panels::{DisclosurePanel, PanelConfig, PanelInput, PanelState};
use crate::storage::{KeyValueStore, PreferenceStore, Preferences};

/// Owns the preference store, the feedback engine and every panel.
pub struct PageSession<S: KeyValueStore, F: ContextFactory> {
    preferences: PreferenceStore<S>,
    engine: AudioFeedbackEngine<F>,
    panels: Vec<DisclosurePanel>,
}

impl<S: KeyValueStore, F: ContextFactory> PageSession<S, F> {
    /// Load preferences and build panels. The engine picks up the stored mute flag.
    pub fn new(
        mut preferences: PreferenceStore<S>,
        mut engine: AudioFeedbackEngine<F>,
        panels: Vec<PanelConfig>,
    ) -> Self {
        let loaded = preferences.load();
        engine.set_muted(loaded.muted);

        tracing::info!(
            "Loaded preferences: locale={}, muted={}",
            loaded.locale.id(),
            loaded.muted
        );

        Self {
            preferences,
            engine,
            panels: panels.into_iter().map(DisclosurePanel::new).collect(),
        }
    }

    /// Current preferences.
    pub fn preferences(&self) -> Preferences {
        self.preferences.preferences()
    }

    /// Current locale.
    pub fn locale(&self) -> Locale {
        self.preferences.preferences().locale
    }

    /// Check if interface sounds are muted.
    pub fn is_muted(&self) -> bool {
        self.preferences.preferences().muted
    }

    /// The feedback engine.
    pub fn engine(&self) -> &AudioFeedbackEngine<F> {
        &self.engine
    }

    /// All panels in display order.
    pub fn panels(&self) -> &[DisclosurePanel] {
        &self.panels
    }

    /// Switch to the other locale, persist it and play the mode-switch cue.
    pub fn toggle_locale(&mut self) -> Locale {
        let locale = self.locale().toggled();
        self.preferences.set_locale(locale);
        self.engine.play(CueType::ModeSwitch);
        locale
    }

    /// Flip the mute flag and persist it. Plays no cue in either direction.
    pub fn toggle_mute(&mut self) -> bool {
        let muted = !self.is_muted();
        self.preferences.set_muted(muted);
        self.engine.set_muted(muted);
        muted
    }

    /// Forward an input event to panel `index`. Returns its new state.
    pub fn panel_input(&mut self, index: usize, input: PanelInput) -> Option<PanelState> {
        let panel = self.panels.get_mut(index)?;
        panel.handle(input, &mut self.engine);
        Some(panel.state())
    }

    /// The host suspended audio output (window lost focus).
    pub fn suspend_audio(&mut self) {
        self.engine.suspend();
    }
}
