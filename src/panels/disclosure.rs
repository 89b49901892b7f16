//! Disclosure panel state machine.
//!
//! Each panel toggles between collapsed and expanded on activation and
//! previews itself with a hover cue while collapsed. Panels never coordinate:
//! opening one leaves every other panel as it was.

use crate::audio::{CueSink, CueType};

/// Open/closed state of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    /// The opposite state.
    pub fn toggled(&self) -> Self {
        match self {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        }
    }
}

/// Expanded/collapsed semantics exposed to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    Expanded,
    Collapsed,
}

impl Expansion {
    /// Attribute-style value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Expansion::Expanded => "expanded",
            Expansion::Collapsed => "collapsed",
        }
    }
}

/// Keys a focused panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKey {
    Enter,
    Space,
    Other,
}

/// Input events a panel consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInput {
    /// Pointer moved onto the panel
    PointerEnter,
    /// Primary pointer action
    PrimaryActivate,
    /// Key pressed while the panel is focused
    KeyDown(PanelKey),
}

/// Static per-panel configuration.
///
/// Title, body and style class are opaque to the panel; the presentation
/// layer resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Stable identifier
    pub id: String,
    /// Translation key of the summary line
    pub title_key: String,
    /// Translation key of the detail view
    pub body_key: String,
    /// Style class applied by the presentation layer
    pub style_class: String,
    /// Whether the panel starts expanded
    pub initially_open: bool,
}

impl PanelConfig {
    /// Create a config that starts collapsed, deriving keys from `id`.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title_key: format!("panel-{}-title", id),
            body_key: format!("panel-{}-body", id),
            style_class: String::new(),
            initially_open: false,
            id,
        }
    }

    /// Set the style class.
    pub fn with_style_class(mut self, class: impl Into<String>) -> Self {
        self.style_class = class.into();
        self
    }

    /// Start expanded.
    pub fn open(mut self) -> Self {
        self.initially_open = true;
        self
    }
}

/// A toggle widget with hover preview feedback.
#[derive(Debug, Clone)]
pub struct DisclosurePanel {
    config: PanelConfig,
    state: PanelState,
}

impl DisclosurePanel {
    /// Create a panel in its configured initial state.
    pub fn new(config: PanelConfig) -> Self {
        let state = if config.initially_open {
            PanelState::Open
        } else {
            PanelState::Closed
        };
        Self { config, state }
    }

    /// Panel configuration.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Check if expanded.
    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    /// Expansion state for assistive technology.
    pub fn expansion(&self) -> Expansion {
        match self.state {
            PanelState::Open => Expansion::Expanded,
            PanelState::Closed => Expansion::Collapsed,
        }
    }

    /// Flip state without feedback.
    pub fn toggle(&mut self) -> PanelState {
        self.state = self.state.toggled();
        self.state
    }

    /// Emit a click cue, then flip state.
    pub fn activate(&mut self, cues: &mut impl CueSink) -> PanelState {
        cues.play(CueType::Click);
        self.toggle()
    }

    /// Emit a hover cue if collapsed. Expanded panels stay silent.
    pub fn pointer_enter(&mut self, cues: &mut impl CueSink) {
        if self.state == PanelState::Closed {
            cues.play(CueType::Hover);
        }
    }

    /// Handle a key press while focused. Returns whether the key was used.
    pub fn key_down(&mut self, key: PanelKey, cues: &mut impl CueSink) -> bool {
        match key {
            PanelKey::Enter | PanelKey::Space => {
                self.activate(cues);
                true
            }
            PanelKey::Other => false,
        }
    }

    /// Dispatch an input event.
    pub fn handle(&mut self, input: PanelInput, cues: &mut impl CueSink) {
        match input {
            PanelInput::PointerEnter => self.pointer_enter(cues),
            PanelInput::PrimaryActivate => {
                self.activate(cues);
            }
            PanelInput::KeyDown(key) => {
                self.key_down(key, cues);
            }
        }
    }
}
