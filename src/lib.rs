//! Interactive behavior for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the page after its
//! markup. It themes the page from a stored preference, eases a glow element
//! after the pointer, smooth-scrolls same-page links past the navbar, fades
//! sections in as they scroll into view, and shadows the navbar once the page
//! is scrolled. All logic is written against the [`surface`] traits; the
//! `hydrate` feature adds the [`web`] host that binds it to the real DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | All behaviors bound to one surface, one method per event |
//! | [`theme`] | Light/dark flag, persisted and mirrored onto the root |
//! | [`cursor`] | Glow element easing toward the pointer |
//! | [`frame`] | Stop handle for the per-frame cursor loop |
//! | [`scroll`] | Same-page anchor resolution and smooth scroll |
//! | [`reveal`] | One-way section fade-in |
//! | [`chrome`] | Navbar shadow on scroll |
//! | [`banner`] | Console greeting |
//! | [`surface`] | DOM and storage capabilities the behaviors depend on |
//! | [`config`] | Runtime configuration and validation |
//! | [`consts`] | Selectors and default numeric constants |
//! | [`error`] | Shared error type |

pub mod banner;
pub mod chrome;
pub mod config;
pub mod consts;
pub mod cursor;
pub mod error;
pub mod frame;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod surface;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
mod fake;
