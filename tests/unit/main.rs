//! Unit tests for BioPage components.

#[path = "../support/audio_mock.rs"]
mod audio_mock;

mod audio_test;
mod preferences_test;
