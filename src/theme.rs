//! Light / dark display mode.

use std::rc::Rc;

use crate::constants::{CSS_DARK_MODE, CSS_LIGHT_MODE, ICON_MOON, ICON_SUN, STORAGE_KEY_THEME};
use crate::debug_log;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Body class, also the persisted representation.
    pub fn css_class(self) -> &'static str {
        match self {
            ThemeMode::Light => CSS_LIGHT_MODE,
            ThemeMode::Dark => CSS_DARK_MODE,
        }
    }

    /// Icon shown on the toggle: a moon invites switching to dark, a sun
    /// invites switching back.
    pub fn icon_class(self) -> &'static str {
        match self {
            ThemeMode::Light => ICON_MOON,
            ThemeMode::Dark => ICON_SUN,
        }
    }

    pub fn from_css_class(value: &str) -> Option<Self> {
        match value {
            CSS_LIGHT_MODE => Some(ThemeMode::Light),
            CSS_DARK_MODE => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

pub struct ThemeController {
    mode: ThemeMode,
    storage: Rc<dyn KeyValueStore>,
}

impl ThemeController {
    /// Restore the persisted mode.  Missing or unrecognised values fall back
    /// to light mode.
    pub fn load(storage: Rc<dyn KeyValueStore>) -> Self {
        let mode = match storage.get(STORAGE_KEY_THEME) {
            Some(raw) => ThemeMode::from_css_class(&raw).unwrap_or_else(|| {
                debug_log!("Ignoring unknown persisted theme {:?}", raw);
                ThemeMode::default()
            }),
            None => ThemeMode::default(),
        };
        Self { mode, storage }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and persist it.  Returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        self.storage.set(STORAGE_KEY_THEME, self.mode.css_class());
        self.mode
    }
}
