//! Expandable information panels.

pub mod disclosure;

pub use disclosure::{
    DisclosurePanel, Expansion, PanelConfig, PanelInput, PanelKey, PanelState,
};
