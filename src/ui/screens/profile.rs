//! Profile page: header, toggles and the panel grid.

use egui::{Align, Layout, RichText, Ui, Vec2};

use crate::accessibility::AccessibleLabel;
use crate::i18n::{Locale, TranslationService};
use crate::panels::{DisclosurePanel, PanelConfig, PanelInput};
use crate::storage::config::ProfileSettings;
use crate::ui::theme::Theme;
use crate::ui::widgets::{AccessibleButtonStyle, AccessibleIconButton, DisclosureCard};

/// Devices listed in the devices panel.
pub const DEVICES: &[&str] = &[
    "OnePlus 12",
    "Xiaomi Mi 11 Lite 5G NE",
    "iPhone 11 Pro",
    "Quest 3 with BoboVR M3 pro",
    "Steam Deck OLED 512",
    "ThinkPad T430",
];

/// Width of one panel card.
const CARD_WIDTH: f32 = 320.0;

/// The panels shown on the page, in display order.
pub fn default_panels() -> Vec<PanelConfig> {
    vec![
        PanelConfig::new("about").with_style_class("accent-blue").open(),
        PanelConfig::new("projects").with_style_class("accent-green"),
        PanelConfig::new("devices").with_style_class("accent-amber"),
        PanelConfig::new("links").with_style_class("accent-rose"),
    ]
}

/// Something the user asked for while the page was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Switch page language
    ToggleLocale,
    /// Flip the interface sound mute
    ToggleMute,
    /// Input for the panel at an index
    Panel(usize, PanelInput),
}

/// Everything the page reads while drawing.
pub struct PageView<'a> {
    pub translations: &'a TranslationService,
    pub profile: &'a ProfileSettings,
    pub panels: &'a [DisclosurePanel],
    pub theme: Theme,
    pub locale: Locale,
    pub muted: bool,
    /// Preformatted local time
    pub clock: String,
}

/// Profile screen UI.
pub struct ProfileScreen;

impl ProfileScreen {
    /// Render the page and return the actions requested this frame.
    pub fn show(ui: &mut Ui, view: &PageView<'_>) -> Vec<PageAction> {
        let mut actions = Vec::new();

        Self::show_toolbar(ui, view, &mut actions);
        Self::show_header(ui, view);

        ui.add_space(24.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = Vec2::new(16.0, 16.0);
            for (index, panel) in view.panels.iter().enumerate() {
                if let Some(input) = Self::show_panel(ui, view, panel) {
                    actions.push(PageAction::Panel(index, input));
                }
            }
        });

        actions
    }

    fn show_toolbar(ui: &mut Ui, view: &PageView<'_>, actions: &mut Vec<PageAction>) {
        let t = view.translations;
        let style = AccessibleButtonStyle::from_palette(view.theme.palette());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let (icon, label) = if view.muted {
                ("🔇", t.translate("toggle-unmute"))
            } else {
                ("🔊", t.translate("toggle-mute"))
            };
            let mute = AccessibleIconButton::new(icon, AccessibleLabel::toggle(label, view.muted))
                .style(style);
            if ui.add(mute).clicked() {
                actions.push(PageAction::ToggleMute);
            }

            let language = AccessibleIconButton::new(
                view.locale.short_label(),
                AccessibleLabel::button(t.translate("toggle-language"))
                    .with_description(view.locale.toggled().display_name()),
            )
            .style(style)
            .icon_size(16.0);
            if ui.add(language).clicked() {
                actions.push(PageAction::ToggleLocale);
            }
        });
    }

    fn show_header(ui: &mut Ui, view: &PageView<'_>) {
        let t = view.translations;

        ui.vertical_centered(|ui| {
            // Initials avatar
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(96.0), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 48.0, view.theme.accent_for("accent-blue"));
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                view.profile.initials(),
                egui::FontId::proportional(36.0),
                egui::Color32::WHITE,
            );

            ui.add_space(12.0);
            ui.label(RichText::new(&view.profile.display_name).size(32.0).strong());
            let handle =
                t.translate_with_args("profile-handle", &[("handle", view.profile.handle.as_str())]);
            ui.label(RichText::new(handle).color(view.theme.text_secondary()));
            ui.add_space(8.0);
            ui.label(t.translate("profile-tagline"));
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{} · {}", t.translate("profile-clock"), view.clock))
                    .small()
                    .monospace(),
            );
        });
    }

    fn show_panel(ui: &mut Ui, view: &PageView<'_>, panel: &DisclosurePanel) -> Option<PanelInput> {
        let t = view.translations;
        let config = panel.config();
        let title = t.translate(&config.title_key);
        let hint = if panel.is_open() {
            t.translate("panel-hint-collapse")
        } else {
            t.translate("panel-hint-expand")
        };

        let output = DisclosureCard::new(panel, &title)
            .hint(&hint)
            .accent(view.theme.accent_for(&config.style_class))
            .background(view.theme.card_bg())
            .width(CARD_WIDTH)
            .show(ui, |ui| {
                ui.label(t.translate(&config.body_key));
                match config.id.as_str() {
                    "devices" => {
                        for device in DEVICES {
                            ui.label(format!("• {}", device));
                        }
                    }
                    "links" => {
                        if view.profile.links.is_empty() {
                            ui.label(
                                RichText::new(t.translate("links-empty"))
                                    .italics()
                                    .color(view.theme.text_secondary()),
                            );
                        }
                        for link in &view.profile.links {
                            ui.hyperlink_to(link.label.as_str(), &link.url);
                        }
                    }
                    _ => {}
                }
            });

        output.input
    }
}
