//! Shared constants for the page behaviors.

// ── Theme ───────────────────────────────────────────────────────

/// Attribute on the root element that stylesheet rules key off of.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Default `localStorage` key holding `"light"` or `"dark"`.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

// ── Cursor ──────────────────────────────────────────────────────

/// Element that follows the pointer.
pub const GLOW_SELECTOR: &str = ".cursor-glow";

/// Class added to the glow while an interactive element is hovered.
pub const GRABBING_CLASS: &str = "grabbing";

/// Fraction of the remaining distance covered per frame.
pub const DEFAULT_EASE: f64 = 0.15;

/// Elements that switch the glow into its grabbing state.
pub const DEFAULT_INTERACTIVE_SELECTOR: &str = "a, button, .skill-card, .project-card, .logo-circle";

// ── Scroll ──────────────────────────────────────────────────────

/// Same-page anchors intercepted by the scroll router.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Navigation bar, used for the scroll offset and the shadow.
pub const NAV_SELECTOR: &str = "nav";

// ── Reveal ──────────────────────────────────────────────────────

pub const SECTION_SELECTOR: &str = "section";

/// Visible fraction a section must reach before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Pixels trimmed off the bottom of the viewport for reveal checks.
pub const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: f64 = 100.0;

/// Initial downward offset of hidden sections.
pub const DEFAULT_REVEAL_OFFSET_PX: f64 = 20.0;

pub const DEFAULT_REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// ── Chrome ──────────────────────────────────────────────────────

/// Scroll offset above which the navbar gets its shadow.
pub const DEFAULT_NAV_SHADOW_THRESHOLD_PX: f64 = 100.0;

pub const DEFAULT_NAV_SHADOW: &str = "0 2px 10px var(--shadow)";

// ── Console ─────────────────────────────────────────────────────

pub const DEFAULT_CONTACT_EMAIL: &str = "rozlanwayu@email.com";

pub const DEFAULT_LOG_LEVEL: &str = "info";
