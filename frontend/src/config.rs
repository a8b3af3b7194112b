use log::Level;

use crate::theme::Theme;

/// localStorage key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` while the dark palette is active.
pub const DARK_CLASS: &str = "dark";

/// Viewport width (px) at which the desktop navigation takes over from the burger menu.
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

pub const fn default_theme() -> Theme {
    Theme::Dark
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Transition logging while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
