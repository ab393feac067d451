//! Smooth scrolling for same-page anchor links.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{ANCHOR_SELECTOR, NAV_SELECTOR};
use crate::error::PageError;
use crate::surface::UiSurface;

/// What a click on a same-page anchor resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollTarget {
    /// Bare `#`: back to the top of the page.
    Top,
    /// A section, already adjusted for the navbar height.
    Offset(f64),
    /// No such element (or no navbar to offset against).
    Unresolved,
}

impl ScrollTarget {
    #[must_use]
    pub fn top(self) -> Option<f64> {
        match self {
            Self::Top => Some(0.0),
            Self::Offset(top) => Some(top),
            Self::Unresolved => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollRouter;

impl ScrollRouter {
    /// Anchors whose clicks should be intercepted.
    pub fn anchors<S: UiSurface>(surface: &S) -> Vec<S::Element> {
        surface.query_all(ANCHOR_SELECTOR)
    }

    /// Resolve an anchor `href` to a scroll destination.
    pub fn resolve<S: UiSurface>(surface: &S, href: &str) -> ScrollTarget {
        let Some(id) = href.strip_prefix('#') else {
            return ScrollTarget::Unresolved;
        };
        if id.is_empty() {
            return ScrollTarget::Top;
        }
        let Some(target) = surface.element_by_id(id) else {
            return ScrollTarget::Unresolved;
        };
        let Some(nav) = surface.query(NAV_SELECTOR) else {
            return ScrollTarget::Unresolved;
        };
        ScrollTarget::Offset(surface.offset_top(&target) - surface.offset_height(&nav))
    }

    /// Handle a click on a same-page anchor. The host has already suppressed
    /// the default navigation; unresolved targets scroll nowhere.
    pub fn on_anchor_click<S: UiSurface>(surface: &S, href: &str) -> Result<ScrollTarget, PageError> {
        let target = Self::resolve(surface, href);
        match target.top() {
            Some(top) => surface.smooth_scroll_to(top)?,
            None => log::debug!("scroll: no target for {href:?}"),
        }
        Ok(target)
    }
}
