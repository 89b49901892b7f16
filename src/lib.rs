//! BioPage - personal link-in-bio page
//!
//! A profile header, a grid of expandable panels, a language toggle and a
//! mute toggle. Interactions are backed by short procedurally synthesized
//! sounds, and the mute flag and locale persist across restarts.

pub mod accessibility;
pub mod audio;
pub mod i18n;
pub mod panels;
pub mod session;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use audio::{AudioFeedbackEngine, CueSink, CueType};
pub use panels::{DisclosurePanel, PanelConfig, PanelState};
pub use session::PageSession;
pub use storage::preferences::{PreferenceStore, Preferences};
