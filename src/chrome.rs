//! Navbar shadow driven by the vertical scroll offset.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

use crate::consts::NAV_SELECTOR;
use crate::error::PageError;
use crate::surface::UiSurface;

pub struct ChromeReactor<E> {
    nav: Option<E>,
    threshold_px: f64,
    shadow: String,
}

impl<E: Clone + PartialEq> ChromeReactor<E> {
    /// Bind to the page's `<nav>`. A page without one gets a no-op reactor.
    pub fn mount<S: UiSurface<Element = E>>(surface: &S, threshold_px: f64, shadow: impl Into<String>) -> Self {
        let nav = surface.query(NAV_SELECTOR);
        if nav.is_none() {
            log::debug!("chrome: no nav element, shadow disabled");
        }
        Self { nav, threshold_px, shadow: shadow.into() }
    }

    /// Whether a scroll offset earns the shadow.
    #[must_use]
    pub fn wants_shadow(&self, scroll_offset: f64) -> bool {
        scroll_offset > self.threshold_px
    }

    /// Re-apply the nav shadow for the current offset. Returns whether the
    /// shadow is shown.
    pub fn on_scroll<S: UiSurface<Element = E>>(&self, surface: &S, scroll_offset: f64) -> Result<bool, PageError> {
        let Some(nav) = &self.nav else {
            return Ok(false);
        };
        let shadowed = self.wants_shadow(scroll_offset);
        let value = if shadowed { self.shadow.as_str() } else { "none" };
        surface.set_style(nav, "box-shadow", value)?;
        Ok(shadowed)
    }
}
