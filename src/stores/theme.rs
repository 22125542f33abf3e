use log::{error, warn};
use std::sync::Arc;

use crate::data::{keys, Storage};

/// Light/dark display preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Holds the reader's theme preference; a trivial toggle with persistence
pub struct ThemeStore {
    theme: Theme,
    storage: Arc<dyn Storage>,
}

impl ThemeStore {
    /// Restores the persisted preference, defaulting to light
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let theme = match storage.load(keys::THEME) {
            Ok(Some(raw)) => Theme::from_str(&raw).unwrap_or_else(|| {
                warn!("Stored theme {:?} is unknown, defaulting to light", raw);
                Theme::Light
            }),
            Ok(None) => Theme::Light,
            Err(err) => {
                warn!("Failed to read theme preference: {:#}", err);
                Theme::Light
            }
        };
        Self { theme, storage }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(err) = self.storage.save(keys::THEME, self.theme.as_str()) {
            error!("Failed to persist theme preference: {:#}", err);
        }
    }
}
