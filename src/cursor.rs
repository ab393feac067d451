//! Cursor glow that eases toward the pointer.
//!
//! Pointer events only move the target. The glow itself moves once per
//! animation frame, covering a fixed fraction of the remaining distance, so it
//! trails the pointer and settles geometrically once the pointer stops.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::consts::{GLOW_SELECTOR, GRABBING_CLASS};
use crate::error::PageError;
use crate::surface::UiSurface;

/// A point in viewport (client) coordinates, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Move `ease` of the way from `self` toward `target`.
    #[must_use]
    pub fn eased_toward(self, target: Point, ease: f64) -> Point {
        Point {
            x: self.x + (target.x - self.x) * ease,
            y: self.y + (target.y - self.y) * ease,
        }
    }
}

pub struct CursorFollower<E> {
    glow: E,
    target: Point,
    current: Point,
    ease: f64,
}

impl<E: Clone + PartialEq> CursorFollower<E> {
    /// Bind to the page's glow element. Both positions start at the origin.
    pub fn mount<S: UiSurface<Element = E>>(surface: &S, ease: f64) -> Result<Self, PageError> {
        let glow = surface
            .query(GLOW_SELECTOR)
            .ok_or_else(|| PageError::MissingElement { selector: GLOW_SELECTOR.to_owned() })?;
        Ok(Self { glow, target: Point::default(), current: Point::default(), ease })
    }

    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }

    /// Track the pointer and reveal the glow on its first movement.
    pub fn on_pointer_move<S: UiSurface<Element = E>>(&mut self, surface: &S, x: f64, y: f64) -> Result<(), PageError> {
        self.target = Point::new(x, y);
        let opacity = surface.style(&self.glow, "opacity");
        if opacity.is_empty() || opacity == "0" {
            surface.set_style(&self.glow, "opacity", "1")?;
        }
        Ok(())
    }

    /// Advance the glow one frame and write its position.
    pub fn tick<S: UiSurface<Element = E>>(&mut self, surface: &S) -> Result<Point, PageError> {
        self.current = self.current.eased_toward(self.target, self.ease);
        surface.set_style(&self.glow, "left", &format!("{}px", self.current.x))?;
        surface.set_style(&self.glow, "top", &format!("{}px", self.current.y))?;
        Ok(self.current)
    }

    pub fn on_pointer_leave<S: UiSurface<Element = E>>(&self, surface: &S) -> Result<(), PageError> {
        surface.set_style(&self.glow, "opacity", "0")
    }

    pub fn on_pointer_enter<S: UiSurface<Element = E>>(&self, surface: &S) -> Result<(), PageError> {
        surface.set_style(&self.glow, "opacity", "1")
    }

    /// Pointer entered an interactive element.
    pub fn on_hover_enter<S: UiSurface<Element = E>>(&self, surface: &S) -> Result<(), PageError> {
        surface.add_class(&self.glow, GRABBING_CLASS)
    }

    /// Pointer left an interactive element.
    pub fn on_hover_leave<S: UiSurface<Element = E>>(&self, surface: &S) -> Result<(), PageError> {
        surface.remove_class(&self.glow, GRABBING_CLASS)
    }
}
