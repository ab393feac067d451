//! Runtime configuration for the page behaviors.
//!
//! Every field has a default matching the stock portfolio page, so an empty
//! JSON object (or no override at all) reproduces the stock behavior. Hosts
//! that restyle the page can pass a partial override to `startWithConfig`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_CONTACT_EMAIL, DEFAULT_EASE, DEFAULT_INTERACTIVE_SELECTOR, DEFAULT_LOG_LEVEL, DEFAULT_NAV_SHADOW,
    DEFAULT_NAV_SHADOW_THRESHOLD_PX, DEFAULT_REVEAL_BOTTOM_MARGIN_PX, DEFAULT_REVEAL_OFFSET_PX,
    DEFAULT_REVEAL_THRESHOLD, DEFAULT_REVEAL_TRANSITION, DEFAULT_STORAGE_KEY,
};
use crate::error::PageError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_key: String,
    pub ease: f64,
    pub interactive_selector: String,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: f64,
    pub reveal_offset_px: f64,
    pub reveal_transition: String,
    pub nav_shadow_threshold_px: f64,
    pub nav_shadow: String,
    pub contact_email: String,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            ease: DEFAULT_EASE,
            interactive_selector: DEFAULT_INTERACTIVE_SELECTOR.to_owned(),
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_bottom_margin_px: DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
            reveal_offset_px: DEFAULT_REVEAL_OFFSET_PX,
            reveal_transition: DEFAULT_REVEAL_TRANSITION.to_owned(),
            nav_shadow_threshold_px: DEFAULT_NAV_SHADOW_THRESHOLD_PX,
            nav_shadow: DEFAULT_NAV_SHADOW.to_owned(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override and validate it.
    ///
    /// Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the behaviors cannot work with.
    pub fn validate(&self) -> Result<(), PageError> {
        if self.storage_key.trim().is_empty() {
            return Err(invalid("storage_key", "must not be empty"));
        }
        if !(self.ease > 0.0 && self.ease <= 1.0) {
            return Err(invalid("ease", format!("{} is outside (0, 1]", self.ease)));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(invalid("reveal_threshold", format!("{} is outside [0, 1]", self.reveal_threshold)));
        }
        if !(self.reveal_bottom_margin_px >= 0.0) {
            return Err(invalid("reveal_bottom_margin_px", "must be non-negative"));
        }
        if !(self.reveal_offset_px >= 0.0) {
            return Err(invalid("reveal_offset_px", "must be non-negative"));
        }
        if !self.nav_shadow_threshold_px.is_finite() {
            return Err(invalid("nav_shadow_threshold_px", "must be finite"));
        }
        self.level()?;
        Ok(())
    }

    /// The configured console log level.
    pub fn level(&self) -> Result<log::Level, PageError> {
        log::Level::from_str(self.log_level.trim())
            .map_err(|_| invalid("log_level", format!("unknown level `{}`", self.log_level)))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> PageError {
    PageError::InvalidConfig { field, reason: reason.into() }
}
