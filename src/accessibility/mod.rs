//! Accessibility support.
//!
//! Widgets describe themselves through [`AccessibleLabel`], which egui
//! forwards to platform screen readers (NVDA, VoiceOver, Orca) via accesskit.

pub mod labels;

pub use labels::{AccessibleLabel, AccessibleRole};
