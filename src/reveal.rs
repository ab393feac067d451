//! One-way fade-in of page sections as they scroll into view.
//!
//! Each section starts [`Visibility::Hidden`] (transparent and nudged down)
//! and moves to [`Visibility::Visible`] the first time enough of it is inside
//! the viewport. There is no transition back.
//!
//! The browser's intersection observer normally reports crossings; it only
//! fires once the configured threshold is reached, so an intersecting report
//! is enough to reveal. When it is unavailable the host calls
//! [`Revealer::on_scroll_geometry`] instead, which computes the ratio from
//! element geometry. A section too tall to ever reach the threshold still
//! reveals once it covers the whole shrunk viewport.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::PageConfig;
use crate::consts::SECTION_SELECTOR;
use crate::error::PageError;
use crate::surface::UiSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// One intersection report for a watched section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub bottom_margin_px: f64,
    pub offset_px: f64,
    pub transition: String,
}

impl RevealOptions {
    #[must_use]
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            threshold: config.reveal_threshold,
            bottom_margin_px: config.reveal_bottom_margin_px,
            offset_px: config.reveal_offset_px,
            transition: config.reveal_transition.clone(),
        }
    }

    /// Observer root margin, shrinking only the bottom edge.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }

}

/// Fraction of an element's height inside a viewport whose bottom edge is
/// pulled up by `bottom_margin`.
#[must_use]
pub fn visible_ratio(top: f64, height: f64, viewport_height: f64, bottom_margin: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let root_bottom = viewport_height - bottom_margin;
    let overlap = (top + height).min(root_bottom) - top.max(0.0);
    (overlap.max(0.0) / height).min(1.0)
}

/// Whether a section at this geometry has earned its reveal: it reaches the
/// threshold, or it spans the entire shrunk viewport.
#[must_use]
pub fn geometry_reveals(top: f64, height: f64, viewport_height: f64, options: &RevealOptions) -> bool {
    let ratio = visible_ratio(top, height, viewport_height, options.bottom_margin_px);
    if ratio <= 0.0 {
        return false;
    }
    let root_bottom = viewport_height - options.bottom_margin_px;
    ratio >= options.threshold || (top <= 0.0 && top + height >= root_bottom)
}

/// Whether the document is far enough along for sections to be mounted.
/// Takes `document.readyState`.
#[must_use]
pub fn document_ready(ready_state: &str) -> bool {
    ready_state != "loading"
}

pub struct Revealer<E> {
    sections: Vec<(E, Visibility)>,
    options: RevealOptions,
}

impl<E: Clone + PartialEq> Revealer<E> {
    /// Hide every section and start tracking it.
    pub fn mount<S: UiSurface<Element = E>>(surface: &S, options: RevealOptions) -> Result<Self, PageError> {
        let elements = surface.query_all(SECTION_SELECTOR);
        let hidden_transform = format!("translateY({}px)", options.offset_px);
        for section in &elements {
            surface.set_style(section, "opacity", "0")?;
            surface.set_style(section, "transform", &hidden_transform)?;
            surface.set_style(section, "transition", &options.transition)?;
        }
        log::debug!("reveal: watching {} sections", elements.len());
        Ok(Self {
            sections: elements.into_iter().map(|el| (el, Visibility::Hidden)).collect(),
            options,
        })
    }

    #[must_use]
    pub fn sections(&self) -> Vec<E> {
        self.sections.iter().map(|(el, _)| el.clone()).collect()
    }

    #[must_use]
    pub fn visibility(&self, section: &E) -> Option<Visibility> {
        self.sections
            .iter()
            .find(|(el, _)| el == section)
            .map(|(_, state)| *state)
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|(_, state)| *state == Visibility::Hidden)
            .count()
    }

    /// Apply one observer report. The observer only reports at threshold
    /// crossings, so any intersecting report reveals. Returns `true` if the
    /// section was revealed by this report.
    pub fn on_intersection<S: UiSurface<Element = E>>(
        &mut self,
        surface: &S,
        section: &E,
        sample: IntersectionSample,
    ) -> Result<bool, PageError> {
        if !sample.is_intersecting {
            return Ok(false);
        }
        let Some(index) = self.sections.iter().position(|(el, _)| el == section) else {
            return Ok(false);
        };
        let revealed = self.reveal(surface, index)?;
        if revealed {
            log::debug!("reveal: section {index} at ratio {:.3}", sample.ratio);
        }
        Ok(revealed)
    }

    /// Re-check every hidden section against the current geometry. Returns the
    /// number revealed.
    pub fn on_scroll_geometry<S: UiSurface<Element = E>>(&mut self, surface: &S) -> Result<usize, PageError> {
        let viewport_height = surface.viewport_height();
        let mut revealed = 0;
        for index in 0..self.sections.len() {
            if self.sections[index].1 == Visibility::Visible {
                continue;
            }
            let section = &self.sections[index].0;
            let earned = geometry_reveals(
                surface.viewport_top(section),
                surface.offset_height(section),
                viewport_height,
                &self.options,
            );
            if earned && self.reveal(surface, index)? {
                revealed += 1;
            }
        }
        Ok(revealed)
    }

    fn reveal<S: UiSurface<Element = E>>(&mut self, surface: &S, index: usize) -> Result<bool, PageError> {
        let Some((section, state)) = self.sections.get_mut(index) else {
            return Ok(false);
        };
        if *state == Visibility::Visible {
            return Ok(false);
        }
        surface.set_style(section, "opacity", "1")?;
        surface.set_style(section, "transform", "translateY(0)")?;
        *state = Visibility::Visible;
        Ok(true)
    }
}
