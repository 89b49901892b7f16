//! Card rendering a [`DisclosurePanel`] and reporting its input events.
//!
//! The card never changes panel state itself; it translates egui interaction
//! into [`PanelInput`] so the session can apply it and play feedback.

use crate::accessibility::AccessibleLabel;
use crate::panels::{DisclosurePanel, PanelInput, PanelKey};
use egui::{Color32, CornerRadius, Key, Response, RichText, Sense, Stroke, Ui, Vec2};

/// Height of the clickable summary row.
const HEADER_HEIGHT: f32 = 48.0;

/// Result of drawing a card.
pub struct DisclosureCardOutput {
    /// Response of the summary row
    pub response: Response,
    /// Input the panel should receive this frame
    pub input: Option<PanelInput>,
}

/// A bordered card with a summary row and a detail body.
pub struct DisclosureCard<'a> {
    panel: &'a DisclosurePanel,
    title: &'a str,
    hint: &'a str,
    accent: Color32,
    background: Color32,
    width: f32,
}

impl<'a> DisclosureCard<'a> {
    /// Create a card for `panel` with its localized title.
    pub fn new(panel: &'a DisclosurePanel, title: &'a str) -> Self {
        Self {
            panel,
            title,
            hint: "",
            accent: Color32::from_rgb(66, 133, 244),
            background: Color32::from_rgb(38, 38, 48),
            width: 320.0,
        }
    }

    /// Tooltip describing how to toggle the card.
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = hint;
        self
    }

    /// Accent stripe color.
    pub fn accent(mut self, accent: Color32) -> Self {
        self.accent = accent;
        self
    }

    /// Card background.
    pub fn background(mut self, background: Color32) -> Self {
        self.background = background;
        self
    }

    /// Card width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Draw the card. `add_body` renders the detail view when expanded.
    pub fn show(self, ui: &mut Ui, add_body: impl FnOnce(&mut Ui)) -> DisclosureCardOutput {
        let Self {
            panel,
            title,
            hint,
            accent,
            background,
            width,
        } = self;

        let inner = egui::Frame::new()
            .fill(background)
            .stroke(Stroke::new(1.0, accent.gamma_multiply(0.6)))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(width);

                let (rect, response) =
                    ui.allocate_exact_size(Vec2::new(width, HEADER_HEIGHT), Sense::click());

                if ui.is_rect_visible(rect) {
                    if response.hovered() {
                        ui.painter()
                            .rect_filled(rect, CornerRadius::same(4), accent.gamma_multiply(0.15));
                    }

                    if response.has_focus() {
                        ui.painter().rect_stroke(
                            rect,
                            CornerRadius::same(4),
                            Stroke::new(2.0, accent),
                            egui::StrokeKind::Inside,
                        );
                    }

                    let marker = if panel.is_open() { "▾" } else { "▸" };
                    ui.painter().text(
                        rect.left_center() + Vec2::new(8.0, 0.0),
                        egui::Align2::LEFT_CENTER,
                        format!("{}  {}", marker, title),
                        egui::FontId::proportional(18.0),
                        ui.visuals().strong_text_color(),
                    );
                }

                let label = AccessibleLabel::disclosure(title, panel.expansion());
                let info = label.widget_info();
                response.widget_info(|| info.clone());

                let response = if hint.is_empty() {
                    response
                } else {
                    response.on_hover_text(RichText::new(hint).small())
                };

                if panel.is_open() {
                    ui.add_space(8.0);
                    add_body(ui);
                }

                response
            });

        let response = inner.inner;
        let input = read_input(ui, &response);

        DisclosureCardOutput { response, input }
    }
}

/// Translate this frame's interaction with the summary row into a panel input.
fn read_input(ui: &Ui, response: &Response) -> Option<PanelInput> {
    let hovered = response.hovered();
    let hover_id = response.id.with("was_hovered");
    let was_hovered = ui.data(|d| d.get_temp::<bool>(hover_id)).unwrap_or(false);
    ui.data_mut(|d| d.insert_temp(hover_id, hovered));

    if response.has_focus() {
        // egui also reports Enter/Space on a focused widget as a click
        if ui.input(|i| i.key_pressed(Key::Enter)) {
            return Some(PanelInput::KeyDown(PanelKey::Enter));
        }
        if ui.input(|i| i.key_pressed(Key::Space)) {
            return Some(PanelInput::KeyDown(PanelKey::Space));
        }
    }

    if response.clicked() {
        return Some(PanelInput::PrimaryActivate);
    }

    if hovered && !was_hovered {
        return Some(PanelInput::PointerEnter);
    }

    None
}
