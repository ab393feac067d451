//! Capabilities the page behaviors need from their host.
//!
//! The behaviors never touch the DOM directly. They go through [`UiSurface`]
//! for element access and [`KeyValueStore`] for persistence, so the same logic
//! runs against `web-sys` in the browser and against an in-memory fake in
//! tests. Event subscription and the animation-frame clock stay with the host,
//! which maps each browser event onto a [`crate::page::Page`] method.

use crate::error::PageError;

/// Element lookup, mutation, and geometry for one page document.
///
/// Methods take `&self`; implementations mutate the document behind it.
pub trait UiSurface {
    /// Handle to one element. Equality identifies the same element.
    type Element: Clone + PartialEq;

    /// First element matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn root_attribute(&self, name: &str) -> Option<String>;

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), PageError>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Inline style value, or an empty string when unset.
    fn style(&self, element: &Self::Element, property: &str) -> String;

    fn set_style(&self, element: &Self::Element, property: &str, value: &str) -> Result<(), PageError>;

    fn add_class(&self, element: &Self::Element, class: &str) -> Result<(), PageError>;

    fn remove_class(&self, element: &Self::Element, class: &str) -> Result<(), PageError>;

    /// Document-relative top edge (`offsetTop`).
    fn offset_top(&self, element: &Self::Element) -> f64;

    /// Rendered height (`offsetHeight`).
    fn offset_height(&self, element: &Self::Element) -> f64;

    /// Viewport-relative top edge (`getBoundingClientRect().top`).
    fn viewport_top(&self, element: &Self::Element) -> f64;

    fn viewport_height(&self) -> f64;

    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;

    /// Start a native smooth scroll to `top`.
    fn smooth_scroll_to(&self, top: f64) -> Result<(), PageError>;

    /// Write a `%c`-styled message to the developer console.
    fn console_styled(&self, text: &str, css: &str);
}

/// Persistent string storage (`localStorage` in the browser).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), PageError>;
}
