//! Accessible labels published to screen readers via accesskit.

use crate::panels::Expansion;
use egui::{WidgetInfo, WidgetType};

/// Accessible role hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessibleRole {
    /// Generic widget
    #[default]
    Generic,
    /// Button (activatable)
    Button,
    /// Toggle with a checked state
    Toggle { checked: bool },
    /// Disclosure widget with expanded/collapsed state
    Disclosure(Expansion),
}

/// Accessible label for a widget.
#[derive(Debug, Clone)]
pub struct AccessibleLabel {
    /// The accessible name (read by screen reader)
    pub name: String,
    /// Optional description for more context
    pub description: Option<String>,
    /// Role hint
    pub role: AccessibleRole,
}

impl AccessibleLabel {
    /// Create a new accessible label with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            role: AccessibleRole::Generic,
        }
    }

    /// Add a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the role.
    pub fn with_role(mut self, role: AccessibleRole) -> Self {
        self.role = role;
        self
    }

    /// Create a button label.
    pub fn button(name: impl Into<String>) -> Self {
        Self::new(name).with_role(AccessibleRole::Button)
    }

    /// Create a toggle label.
    pub fn toggle(name: impl Into<String>, checked: bool) -> Self {
        Self::new(name)
            .with_role(AccessibleRole::Toggle { checked })
            .with_description(if checked { "checked" } else { "unchecked" })
    }

    /// Create a disclosure label.
    pub fn disclosure(name: impl Into<String>, expansion: Expansion) -> Self {
        Self::new(name)
            .with_role(AccessibleRole::Disclosure(expansion))
            .with_description(expansion.as_str())
    }

    /// Text spoken for this widget: name, then description.
    pub fn spoken(&self) -> String {
        match &self.description {
            Some(description) => format!("{}, {}", self.name, description),
            None => self.name.clone(),
        }
    }

    /// Widget info for egui's accesskit bridge.
    pub fn widget_info(&self) -> WidgetInfo {
        match self.role {
            AccessibleRole::Generic => WidgetInfo::labeled(WidgetType::Label, true, &self.name),
            AccessibleRole::Button => WidgetInfo::labeled(WidgetType::Button, true, &self.name),
            AccessibleRole::Toggle { checked } => {
                WidgetInfo::selected(WidgetType::Checkbox, true, checked, &self.name)
            }
            AccessibleRole::Disclosure(expansion) => WidgetInfo::selected(
                WidgetType::CollapsingHeader,
                true,
                expansion == Expansion::Expanded,
                &self.name,
            ),
        }
    }
}
