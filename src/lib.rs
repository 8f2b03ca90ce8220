// Fincrew - Small-Business Finance Portal TUI
// Library root

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod portal;
pub mod ui;
pub mod version;

// Test modules (only compiled during tests)
#[cfg(test)]
mod app_tests;
