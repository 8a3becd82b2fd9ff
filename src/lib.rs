//! Jellyfin TUI library exports

pub mod catalog;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
