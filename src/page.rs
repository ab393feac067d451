//! The assembled page: every behavior bound to one surface and store.
//!
//! `Page` owns the per-unit state and exposes one method per browser event.
//! It has no browser dependency, so the host in [`crate::web`] only translates
//! DOM events into these calls, and tests drive it with the fake surface.
//!
//! Units fail independently. A page without a cursor glow still themes,
//! scrolls, and reveals; an error from one handler never reaches another.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::banner;
use crate::chrome::ChromeReactor;
use crate::config::PageConfig;
use crate::cursor::CursorFollower;
use crate::error::PageError;
use crate::frame::FrameLoop;
use crate::reveal::{IntersectionSample, RevealOptions, Revealer};
use crate::scroll::{ScrollRouter, ScrollTarget};
use crate::surface::{KeyValueStore, UiSurface};
use crate::theme::{Theme, ThemeController};

/// How section reveals are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// The host forwards intersection observer reports.
    Observer,
    /// No observer; geometry is re-checked on every scroll.
    Geometry,
}

pub struct Page<S: UiSurface, K: KeyValueStore> {
    surface: S,
    store: K,
    config: PageConfig,
    theme: ThemeController,
    cursor: Option<CursorFollower<S::Element>>,
    frames: FrameLoop,
    chrome: ChromeReactor<S::Element>,
    revealer: Option<Revealer<S::Element>>,
    reveal_mode: RevealMode,
}

impl<S: UiSurface, K: KeyValueStore> Page<S, K> {
    /// Apply the stored theme and mount the units that need no document
    /// readiness. Sections are mounted later by [`Page::mount_sections`].
    pub fn new(surface: S, store: K, config: PageConfig) -> Self {
        let theme = ThemeController::new(config.storage_key.clone());
        if let Err(err) = theme.load(&surface, &store) {
            log::warn!("theme: could not apply stored theme: {err}");
        }

        let frames = FrameLoop::new();
        let cursor = match CursorFollower::mount(&surface, config.ease) {
            Ok(cursor) => Some(cursor),
            Err(err) => {
                log::error!("cursor: disabled, {err}");
                frames.stop();
                None
            }
        };

        let chrome = ChromeReactor::mount(&surface, config.nav_shadow_threshold_px, config.nav_shadow.clone());
        banner::print(&surface, &config.contact_email);

        Self {
            surface,
            store,
            config,
            theme,
            cursor,
            frames,
            chrome,
            revealer: None,
            reveal_mode: RevealMode::Observer,
        }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn store(&self) -> &K {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn cursor(&self) -> Option<&CursorFollower<S::Element>> {
        self.cursor.as_ref()
    }

    #[must_use]
    pub fn revealer(&self) -> Option<&Revealer<S::Element>> {
        self.revealer.as_ref()
    }

    /// Handle to the cursor's frame loop. Already stopped when there is no
    /// cursor to animate.
    #[must_use]
    pub fn frame_loop(&self) -> FrameLoop {
        self.frames.clone()
    }

    // --- Theme ---

    pub fn toggle_theme(&self) -> Result<Theme, PageError> {
        self.theme.toggle(&self.surface, &self.store)
    }

    #[must_use]
    pub fn theme(&self) -> Option<Theme> {
        ThemeController::current(&self.surface)
    }

    // --- Cursor ---

    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Result<(), PageError> {
        match self.cursor.as_mut() {
            Some(cursor) => cursor.on_pointer_move(&self.surface, x, y),
            None => Ok(()),
        }
    }

    pub fn on_pointer_leave(&self) -> Result<(), PageError> {
        self.with_cursor(|cursor, surface| cursor.on_pointer_leave(surface))
    }

    pub fn on_pointer_enter(&self) -> Result<(), PageError> {
        self.with_cursor(|cursor, surface| cursor.on_pointer_enter(surface))
    }

    pub fn on_hover_enter(&self) -> Result<(), PageError> {
        self.with_cursor(|cursor, surface| cursor.on_hover_enter(surface))
    }

    pub fn on_hover_leave(&self) -> Result<(), PageError> {
        self.with_cursor(|cursor, surface| cursor.on_hover_leave(surface))
    }

    /// Run one animation frame. Returns `false` once the loop is stopped, in
    /// which case the host must not schedule another frame.
    pub fn on_frame(&mut self) -> Result<bool, PageError> {
        if !self.frames.begin_frame() {
            return Ok(false);
        }
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.tick(&self.surface)?;
        }
        Ok(true)
    }

    /// Stop the cursor loop. Returns the pending frame request to cancel.
    pub fn stop_cursor(&self) -> Option<i32> {
        self.frames.stop()
    }

    fn with_cursor(
        &self,
        f: impl FnOnce(&CursorFollower<S::Element>, &S) -> Result<(), PageError>,
    ) -> Result<(), PageError> {
        match &self.cursor {
            Some(cursor) => f(cursor, &self.surface),
            None => Ok(()),
        }
    }

    // --- Scroll ---

    #[must_use]
    pub fn anchors(&self) -> Vec<S::Element> {
        ScrollRouter::anchors(&self.surface)
    }

    #[must_use]
    pub fn interactive_elements(&self) -> Vec<S::Element> {
        self.surface.query_all(&self.config.interactive_selector)
    }

    pub fn on_anchor_click(&self, href: &str) -> Result<ScrollTarget, PageError> {
        ScrollRouter::on_anchor_click(&self.surface, href)
    }

    /// Route a click on `anchor`, reading its `href` at click time.
    pub fn on_anchor_activated(&self, anchor: &S::Element) -> Result<ScrollTarget, PageError> {
        let href = self.surface.attribute(anchor, "href").unwrap_or_default();
        self.on_anchor_click(&href)
    }

    /// React to a page scroll: update the nav shadow and, without an
    /// observer, re-check section geometry.
    pub fn on_scroll(&mut self) -> Result<(), PageError> {
        let offset = self.surface.scroll_offset();
        self.chrome.on_scroll(&self.surface, offset)?;
        if self.reveal_mode == RevealMode::Geometry {
            if let Some(revealer) = self.revealer.as_mut() {
                revealer.on_scroll_geometry(&self.surface)?;
            }
        }
        Ok(())
    }

    // --- Reveal ---

    /// Hide and start tracking every section. Runs once, when the document
    /// structure is ready; later calls return the already-tracked sections.
    pub fn mount_sections(&mut self) -> Result<Vec<S::Element>, PageError> {
        if let Some(revealer) = &self.revealer {
            return Ok(revealer.sections());
        }
        let revealer = Revealer::mount(&self.surface, RevealOptions::from_config(&self.config))?;
        let sections = revealer.sections();
        self.revealer = Some(revealer);
        Ok(sections)
    }

    #[must_use]
    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions::from_config(&self.config)
    }

    /// Switch reveal driving mode. Switching to geometry checks immediately so
    /// sections already on screen do not wait for a scroll.
    pub fn set_reveal_mode(&mut self, mode: RevealMode) -> Result<(), PageError> {
        self.reveal_mode = mode;
        if mode == RevealMode::Geometry {
            if let Some(revealer) = self.revealer.as_mut() {
                revealer.on_scroll_geometry(&self.surface)?;
            }
        }
        Ok(())
    }

    pub fn on_intersection(&mut self, section: &S::Element, sample: IntersectionSample) -> Result<bool, PageError> {
        match self.revealer.as_mut() {
            Some(revealer) => revealer.on_intersection(&self.surface, section, sample),
            None => Ok(false),
        }
    }
}
