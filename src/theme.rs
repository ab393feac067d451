//! Light/dark theme initialization and toggle.
//!
//! The persisted flag lives in a [`KeyValueStore`] under a single key and is
//! mirrored onto the root element's `data-theme` attribute, which the
//! stylesheet keys off of. Toggling reads the attribute rather than any cached
//! state so markup edits by other scripts are respected.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::THEME_ATTRIBUTE;
use crate::error::PageError;
use crate::surface::{KeyValueStore, UiSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse the persisted or attribute form. Only exact values are accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The theme a toggle switches to. Anything that is not light becomes light.
    #[must_use]
    pub fn next(current: Option<Self>) -> Self {
        match current {
            Some(Self::Light) => Self::Dark,
            Some(Self::Dark) | None => Self::Light,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeController {
    storage_key: String,
}

impl ThemeController {
    #[must_use]
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self { storage_key: storage_key.into() }
    }

    /// Read the persisted theme and apply it to the root element.
    ///
    /// An unreadable store or an unrecognized value falls back to light.
    pub fn load<S: UiSurface, K: KeyValueStore>(&self, surface: &S, store: &K) -> Result<Theme, PageError> {
        let stored = match store.get(&self.storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme: falling back to light, {err}");
                None
            }
        };
        let theme = match stored.as_deref() {
            None => Theme::default(),
            Some(raw) => Theme::parse(raw).unwrap_or_else(|| {
                log::warn!("theme: ignoring unrecognized stored value {raw:?}");
                Theme::default()
            }),
        };
        surface.set_root_attribute(THEME_ATTRIBUTE, theme.as_str())?;
        log::debug!("theme: applied {}", theme.as_str());
        Ok(theme)
    }

    /// Flip the root attribute and persist the new value.
    ///
    /// The attribute is written before the store, so a storage failure still
    /// leaves the page showing the new theme for this session.
    pub fn toggle<S: UiSurface, K: KeyValueStore>(&self, surface: &S, store: &K) -> Result<Theme, PageError> {
        let next = Theme::next(Self::current(surface));
        surface.set_root_attribute(THEME_ATTRIBUTE, next.as_str())?;
        store.set(&self.storage_key, next.as_str())?;
        log::debug!("theme: toggled to {}", next.as_str());
        Ok(next)
    }

    /// The theme currently shown, if the root carries a recognized value.
    pub fn current<S: UiSurface>(surface: &S) -> Option<Theme> {
        surface
            .root_attribute(THEME_ATTRIBUTE)
            .as_deref()
            .and_then(Theme::parse)
    }
}
