//! Main application state and egui integration.
//!
//! Wires configuration, persisted preferences and the audio feedback engine
//! into a [`PageSession`] and renders it every frame.

use eframe::egui;

use biopage::audio::{AudioFeedbackEngine, PitchJitter, RodioContextFactory};
use biopage::i18n::TranslationService;
use biopage::session::PageSession;
use biopage::storage::config::{self, AppConfig};
use biopage::storage::{KeyValueStore, MemoryStore, PreferenceStore, TomlFileStore};
use biopage::ui::screens::{default_panels, PageAction, PageView, ProfileScreen};
use biopage::ui::theme::Theme;
use std::time::Duration;

type Session = PageSession<Box<dyn KeyValueStore>, RodioContextFactory>;

/// Main application state.
pub struct BioPageApp {
    /// Preferences, audio feedback and panels
    session: Session,
    /// Page copy in both locales
    translations: TranslationService,
    /// Application configuration
    config: AppConfig,
    /// Resolved UI theme
    theme: Theme,
    /// Window focus as of the previous frame
    window_focused: bool,
}

impl BioPageApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = load_or_create_config();

        let theme = Theme::resolve(config.ui.theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx
            .set_zoom_factor(config.ui.font_scale.clamp(0.5, 3.0));

        let medium: Box<dyn KeyValueStore> = match config::get_preferences_path() {
            Some(path) => {
                tracing::debug!("Preferences stored at {}", path.display());
                Box::new(TomlFileStore::new(path))
            }
            None => {
                tracing::warn!("No data directory available, preferences will not persist");
                Box::new(MemoryStore::new())
            }
        };

        // The output device is opened on the first cue, from an input handler
        let engine = AudioFeedbackEngine::new(RodioContextFactory)
            .with_gain(config.audio.gain())
            .with_jitter(PitchJitter::new(config.audio.pitch_jitter_cents));

        let session = PageSession::new(PreferenceStore::new(medium), engine, default_panels());

        let mut translations = TranslationService::new();
        translations.set_locale(session.locale());

        Self {
            session,
            translations,
            config,
            theme,
            window_focused: true,
        }
    }

    /// Apply one action requested by the page.
    fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::ToggleLocale => {
                let locale = self.session.toggle_locale();
                self.translations.set_locale(locale);
                tracing::debug!("Locale switched to {}", locale.id());
            }
            PageAction::ToggleMute => {
                let muted = self.session.toggle_mute();
                tracing::debug!("Interface sounds muted: {}", muted);
            }
            PageAction::Panel(index, input) => {
                self.session.panel_input(index, input);
            }
        }
    }
}

impl eframe::App for BioPageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Host policy: losing focus suspends audio output
        let focused = ctx.input(|i| i.viewport().focused).unwrap_or(true);
        if self.window_focused && !focused {
            self.session.suspend_audio();
        }
        self.window_focused = focused;

        let clock = chrono::Local::now().format("%H:%M:%S").to_string();

        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| {
                        let view = PageView {
                            translations: &self.translations,
                            profile: &self.config.profile,
                            panels: self.session.panels(),
                            theme: self.theme,
                            locale: self.session.locale(),
                            muted: self.session.is_muted(),
                            clock,
                        };
                        ProfileScreen::show(ui, &view)
                    })
                    .inner
            })
            .inner;

        for action in actions {
            self.apply(action);
        }

        // Keep the clock ticking
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}

/// Load configuration, writing defaults on first run.
fn load_or_create_config() -> AppConfig {
    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            return AppConfig::default();
        }
    };

    if let Some(path) = config::get_config_path() {
        if !path.exists() {
            if let Err(e) = config::save_config(&config) {
                tracing::warn!("Failed to write default config: {}", e);
            }
        }
    }

    config
}
