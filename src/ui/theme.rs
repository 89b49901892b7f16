//! UI theme definitions.

use crate::storage::config::Theme as ThemePreference;
use egui::{Color32, Visuals};

/// Resolved theme for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Colors one theme is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Page background behind the cards
    pub page: Color32,
    /// Panel cards and button rests
    pub card: Color32,
    /// Hovered widget fill
    pub hover: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    /// Default accent, used by the avatar and unstyled panels
    pub accent: Color32,
    pub outline: Color32,
    /// Selection fill strength relative to the accent
    pub selection_alpha: f32,
}

impl Palette {
    pub const DARK: Palette = Palette {
        page: Color32::from_rgb(17, 17, 23),
        card: Color32::from_rgb(36, 37, 48),
        hover: Color32::from_rgb(50, 51, 64),
        text: Color32::from_rgb(238, 238, 244),
        text_muted: Color32::from_rgb(158, 160, 172),
        accent: Color32::from_rgb(92, 141, 255),
        outline: Color32::from_rgb(62, 63, 76),
        selection_alpha: 0.4,
    };

    pub const LIGHT: Palette = Palette {
        page: Color32::from_rgb(248, 248, 251),
        card: Color32::from_rgb(255, 255, 255),
        hover: Color32::from_rgb(232, 233, 240),
        text: Color32::from_rgb(30, 31, 40),
        text_muted: Color32::from_rgb(98, 99, 110),
        accent: Color32::from_rgb(38, 99, 235),
        outline: Color32::from_rgb(214, 215, 224),
        selection_alpha: 0.2,
    };
}

impl Theme {
    /// Resolve a configured preference, asking the OS when it says `System`.
    pub fn resolve(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Light => Theme::Light,
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Light => Theme::Light,
                dark_light::Mode::Dark | dark_light::Mode::Default => Theme::Dark,
            },
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Dark => &Palette::DARK,
            Theme::Light => &Palette::LIGHT,
        }
    }

    /// Build egui visuals from the palette.
    pub fn visuals(&self) -> Visuals {
        let p = self.palette();
        let mut visuals = match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        };

        visuals.panel_fill = p.page;
        visuals.window_fill = p.card;
        visuals.faint_bg_color = p.card;
        visuals.extreme_bg_color = p.page;
        visuals.hyperlink_color = p.accent;

        let widgets = &mut visuals.widgets;
        widgets.inactive.bg_fill = p.card;
        widgets.inactive.weak_bg_fill = p.card;
        widgets.hovered.bg_fill = p.hover;
        widgets.hovered.weak_bg_fill = p.hover;
        widgets.active.bg_fill = p.accent;

        widgets.noninteractive.fg_stroke.color = p.text;
        widgets.inactive.fg_stroke.color = p.text_muted;
        widgets.hovered.fg_stroke.color = p.text;
        widgets.noninteractive.bg_stroke.color = p.outline;
        widgets.inactive.bg_stroke.color = p.outline;

        visuals.selection.bg_fill = p.accent.linear_multiply(p.selection_alpha);
        visuals.selection.stroke.color = p.accent;

        visuals
    }

    pub fn card_bg(&self) -> Color32 {
        self.palette().card
    }

    pub fn text_secondary(&self) -> Color32 {
        self.palette().text_muted
    }

    /// Accent color for a panel style class. Unknown classes use the palette accent.
    pub fn accent_for(&self, style_class: &str) -> Color32 {
        match style_class {
            "accent-green" => Color32::from_rgb(46, 160, 98),
            "accent-amber" => Color32::from_rgb(232, 168, 24),
            "accent-rose" => Color32::from_rgb(226, 72, 122),
            _ => self.palette().accent,
        }
    }
}
