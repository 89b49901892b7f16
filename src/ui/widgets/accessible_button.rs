//! Round toolbar button with a 44x44 minimum touch target.
//!
//! Draws an icon or short label, highlights while pressed or toggled on, and
//! reports its [`AccessibleLabel`] to screen readers.

use crate::accessibility::{AccessibleLabel, AccessibleRole};
use crate::ui::theme::Palette;
use egui::{Align2, Color32, FontId, Response, Sense, Stroke, Ui, Vec2, Widget};

/// Minimum touch target size per WCAG 2.1 guidelines (44x44 CSS pixels).
pub const MIN_TOUCH_TARGET: f32 = 44.0;

/// Colors for a toolbar button.
#[derive(Debug, Clone, Copy)]
pub struct AccessibleButtonStyle {
    pub rest: Color32,
    pub hover: Color32,
    pub foreground: Color32,
    /// Fill while pressed or toggled on, and the focus ring
    pub accent: Color32,
}

impl AccessibleButtonStyle {
    /// Style matching a theme palette.
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            rest: palette.card,
            hover: palette.hover,
            foreground: palette.text,
            accent: palette.accent,
        }
    }
}

impl Default for AccessibleButtonStyle {
    fn default() -> Self {
        Self::from_palette(&Palette::DARK)
    }
}

/// Round icon button with minimum touch target.
pub struct AccessibleIconButton<'a> {
    icon: &'a str,
    label: AccessibleLabel,
    style: AccessibleButtonStyle,
    icon_size: f32,
}

impl<'a> AccessibleIconButton<'a> {
    /// Create a button. A [`AccessibleRole::Toggle`] label draws the checked state.
    pub fn new(icon: &'a str, label: AccessibleLabel) -> Self {
        Self {
            icon,
            label,
            style: AccessibleButtonStyle::default(),
            icon_size: 20.0,
        }
    }

    pub fn style(mut self, style: AccessibleButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn icon_size(mut self, size: f32) -> Self {
        self.icon_size = size;
        self
    }

    fn is_on(&self) -> bool {
        matches!(self.label.role, AccessibleRole::Toggle { checked: true })
    }
}

impl Widget for AccessibleIconButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let diameter = MIN_TOUCH_TARGET.max(self.icon_size + 16.0);
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(diameter), Sense::click());

        if ui.is_rect_visible(rect) {
            let style = self.style;
            let radius = diameter / 2.0;
            let fill = if response.is_pointer_button_down_on() {
                style.accent
            } else if self.is_on() {
                style.accent.gamma_multiply(0.45)
            } else if response.hovered() {
                style.hover
            } else {
                style.rest
            };

            let painter = ui.painter();
            painter.circle_filled(rect.center(), radius, fill);
            if response.has_focus() {
                painter.circle_stroke(rect.center(), radius, Stroke::new(2.0, style.accent));
            }
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.icon,
                FontId::proportional(self.icon_size),
                style.foreground,
            );
        }

        let info = self.label.widget_info();
        response.widget_info(|| info.clone());
        response.on_hover_text(self.label.spoken())
    }
}
