//! Screen implementations.

pub mod profile;

pub use profile::{default_panels, PageAction, PageView, ProfileScreen, DEVICES};
