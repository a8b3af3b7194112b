use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};
use thiserror::Error;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Label of the mobile theme switch, naming the mode it switches to.
    pub fn switch_label(self) -> &'static str {
        match self {
            Theme::Dark => "Modo Claro",
            Theme::Light => "Modo Escuro",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        config::default_theme()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognised theme value {0:?}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("no storage backend available")]
    Unavailable,
    #[error("failed to read from storage: {0}")]
    Read(String),
    #[error("failed to write to storage: {0}")]
    Write(String),
}

/// Key-value store the theme preference is persisted to.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every access so a missing backend
/// (private mode, disabled storage) shows up as `StorageError::Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn backend() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::backend()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::backend()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Owns the current theme and the store it is persisted to.
///
/// Storage problems never escape: a failed or corrupt read falls back to the
/// default theme and a failed write leaves the in-memory theme changed.
pub struct ThemeController<S> {
    theme: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn initialize(store: S) -> Self {
        let theme = match store.read(config::THEME_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse::<Theme>() {
                Ok(theme) => {
                    info!("Using stored theme preference: {}", theme);
                    theme
                }
                Err(e) => {
                    warn!("Ignoring stored theme preference: {}", e);
                    Theme::default()
                }
            },
            Ok(None) => {
                info!("No stored theme preference, defaulting to {}", Theme::default());
                Theme::default()
            }
            Err(e) => {
                warn!("Could not read theme preference: {}", e);
                Theme::default()
            }
        };

        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and persists the new value. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!("Theme toggled to {}", self.theme);
        self.persist();
        self.theme
    }

    pub fn persist(&self) {
        if let Err(e) = self.store.write(config::THEME_STORAGE_KEY, self.theme.as_str()) {
            warn!("Could not persist theme preference: {}", e);
        }
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }
}

/// Marks `<html>` with the dark class (or removes it). `classList` add/remove
/// are no-ops when the class is already in the requested state.
pub fn apply_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("No document element to apply theme {} to", theme);
        return;
    };

    let classes = root.class_list();
    let result = match theme {
        Theme::Dark => classes.add_1(config::DARK_CLASS),
        Theme::Light => classes.remove_1(config::DARK_CLASS),
    };
    if let Err(e) = result {
        warn!("Failed to apply theme {}: {:?}", theme, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl MemoryStore {
        fn with_theme(value: &str) -> Self {
            let store = Self::default();
            store
                .values
                .borrow_mut()
                .insert(config::THEME_STORAGE_KEY.to_string(), value.to_string());
            store
        }

        fn stored(&self) -> Option<String> {
            self.values.borrow().get(config::THEME_STORAGE_KEY).cloned()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.fail_reads {
                return Err(StorageError::Unavailable);
            }
            Ok(self.values.borrow().get(key).cloned())
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Write("quota exceeded".to_string()));
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn defaults_to_dark_without_stored_value() {
        let controller = ThemeController::initialize(MemoryStore::default());
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn uses_stored_light_preference() {
        let controller = ThemeController::initialize(MemoryStore::with_theme("light"));
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn corrupt_value_is_treated_as_absent() {
        for raw in ["", "Light", "blue", " dark"] {
            let controller = ThemeController::initialize(MemoryStore::with_theme(raw));
            assert_eq!(controller.theme(), Theme::Dark, "stored value {:?}", raw);
        }
    }

    #[test]
    fn unreadable_storage_falls_back_to_default() {
        let store = MemoryStore {
            fail_reads: true,
            ..MemoryStore::with_theme("light")
        };
        assert_eq!(ThemeController::initialize(store).theme(), Theme::Dark);
    }

    #[test]
    fn initialize_is_stable_without_toggles() {
        let store = MemoryStore::with_theme("light");
        let first = ThemeController::initialize(store);
        let first_theme = first.theme();
        let second = ThemeController::initialize(first.store);
        assert_eq!(first_theme, second.theme());
    }

    #[test]
    fn toggle_parity_and_persistence() {
        let mut controller = ThemeController::initialize(MemoryStore::default());
        for n in 1..=7 {
            let theme = controller.toggle();
            let expected = if n % 2 == 0 { Theme::Dark } else { Theme::Light };
            assert_eq!(theme, expected);
            assert_eq!(controller.theme(), expected);
            assert_eq!(controller.store().stored().as_deref(), Some(expected.as_str()));
        }
    }

    #[test]
    fn toggle_survives_write_failure() {
        let store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };
        let mut controller = ThemeController::initialize(store);
        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.store().stored(), None);
    }

    #[test]
    fn parse_accepts_only_exact_literals() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("DARK".parse::<Theme>().is_err());
    }

    #[test]
    fn switch_label_names_the_other_mode() {
        assert_eq!(Theme::Dark.switch_label(), "Modo Claro");
        assert_eq!(Theme::Light.switch_label(), "Modo Escuro");
    }
}
