//! UI widgets for reusable components.

pub mod accessible_button;
pub mod disclosure_card;

pub use accessible_button::{AccessibleButtonStyle, AccessibleIconButton, MIN_TOUCH_TARGET};
pub use disclosure_card::{DisclosureCard, DisclosureCardOutput};
