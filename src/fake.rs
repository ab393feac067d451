//! In-memory [`UiSurface`] and [`KeyValueStore`] for unit tests.
//!
//! Elements are matched by exact selector strings registered when they are
//! added; a comma-separated selector matches an element carrying any of its
//! parts. Every mutation is recorded so tests can assert on it.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

use crate::error::PageError;
use crate::surface::{KeyValueStore, UiSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeElement(usize);

#[derive(Debug, Default)]
struct FakeNode {
    selectors: Vec<String>,
    id: Option<String>,
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    classes: BTreeSet<String>,
    offset_top: f64,
    offset_height: f64,
    viewport_top: f64,
}

#[derive(Debug, Default)]
pub struct FakeSurface {
    nodes: RefCell<Vec<FakeNode>>,
    root_attributes: RefCell<HashMap<String, String>>,
    scroll_offset: Cell<f64>,
    viewport_height: Cell<f64>,
    scrolls: RefCell<Vec<f64>>,
    console: RefCell<Vec<(String, String)>>,
    fail_writes: Cell<bool>,
}

impl FakeSurface {
    pub fn new() -> Self {
        let surface = Self::default();
        surface.viewport_height.set(800.0);
        surface
    }

    /// Add an element matched by each of `selectors`.
    pub fn add(&self, selectors: &[&str]) -> FakeElement {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            selectors: selectors.iter().map(|s| (*s).to_owned()).collect(),
            ..FakeNode::default()
        });
        FakeElement(nodes.len() - 1)
    }

    /// Add a same-page anchor pointing at `href`.
    pub fn add_anchor(&self, href: &str) -> FakeElement {
        let el = self.add(&["a", crate::consts::ANCHOR_SELECTOR]);
        self.set_attribute(el, "href", href);
        el
    }

    /// Add the stock glow element.
    pub fn add_glow(&self) -> FakeElement {
        self.add(&[crate::consts::GLOW_SELECTOR])
    }

    /// Add a `<nav>` with the given rendered height.
    pub fn add_nav(&self, height: f64) -> FakeElement {
        let el = self.add(&[crate::consts::NAV_SELECTOR]);
        self.set_geometry(el, 0.0, height);
        el
    }

    /// Add an element with `id` at document offset `top`.
    pub fn add_with_id(&self, selectors: &[&str], id: &str, top: f64) -> FakeElement {
        let el = self.add(selectors);
        self.nodes.borrow_mut()[el.0].id = Some(id.to_owned());
        self.set_geometry(el, top, 0.0);
        el
    }

    pub fn set_attribute(&self, el: FakeElement, name: &str, value: &str) {
        self.nodes.borrow_mut()[el.0].attributes.insert(name.to_owned(), value.to_owned());
    }

    pub fn set_geometry(&self, el: FakeElement, offset_top: f64, offset_height: f64) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[el.0].offset_top = offset_top;
        nodes[el.0].offset_height = offset_height;
    }

    pub fn set_viewport_top(&self, el: FakeElement, top: f64) {
        self.nodes.borrow_mut()[el.0].viewport_top = top;
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.viewport_height.set(height);
    }

    pub fn set_scroll_offset(&self, offset: f64) {
        self.scroll_offset.set(offset);
    }

    pub fn set_root(&self, name: &str, value: &str) {
        self.root_attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    /// Make every subsequent mutation fail with [`PageError::Dom`].
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn has_class(&self, el: FakeElement, class: &str) -> bool {
        self.nodes.borrow()[el.0].classes.contains(class)
    }

    pub fn scrolls(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }

    pub fn console_lines(&self) -> Vec<(String, String)> {
        self.console.borrow().clone()
    }

    fn check_writable(&self) -> Result<(), PageError> {
        if self.fail_writes.get() {
            return Err(PageError::Dom("fake surface rejects writes".to_owned()));
        }
        Ok(())
    }
}

fn matches(node: &FakeNode, selector: &str) -> bool {
    selector
        .split(',')
        .map(str::trim)
        .any(|part| node.selectors.iter().any(|s| s == part))
}

impl UiSurface for FakeSurface {
    type Element = FakeElement;

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| matches(node, selector))
            .map(FakeElement)
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| matches(node, selector))
            .map(|(i, _)| FakeElement(i))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
            .map(FakeElement)
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_attributes.borrow().get(name).cloned()
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), PageError> {
        self.check_writable()?;
        self.set_root(name, value);
        Ok(())
    }

    fn attribute(&self, element: &FakeElement, name: &str) -> Option<String> {
        self.nodes.borrow()[element.0].attributes.get(name).cloned()
    }

    fn style(&self, element: &FakeElement, property: &str) -> String {
        self.nodes.borrow()[element.0]
            .styles
            .get(property)
            .cloned()
            .unwrap_or_default()
    }

    fn set_style(&self, element: &FakeElement, property: &str, value: &str) -> Result<(), PageError> {
        self.check_writable()?;
        self.nodes.borrow_mut()[element.0]
            .styles
            .insert(property.to_owned(), value.to_owned());
        Ok(())
    }

    fn add_class(&self, element: &FakeElement, class: &str) -> Result<(), PageError> {
        self.check_writable()?;
        self.nodes.borrow_mut()[element.0].classes.insert(class.to_owned());
        Ok(())
    }

    fn remove_class(&self, element: &FakeElement, class: &str) -> Result<(), PageError> {
        self.check_writable()?;
        self.nodes.borrow_mut()[element.0].classes.remove(class);
        Ok(())
    }

    fn offset_top(&self, element: &FakeElement) -> f64 {
        self.nodes.borrow()[element.0].offset_top
    }

    fn offset_height(&self, element: &FakeElement) -> f64 {
        self.nodes.borrow()[element.0].offset_height
    }

    fn viewport_top(&self, element: &FakeElement) -> f64 {
        self.nodes.borrow()[element.0].viewport_top
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height.get()
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset.get()
    }

    fn smooth_scroll_to(&self, top: f64) -> Result<(), PageError> {
        self.check_writable()?;
        self.scrolls.borrow_mut().push(top);
        Ok(())
    }

    fn console_styled(&self, text: &str, css: &str) {
        self.console.borrow_mut().push((text.to_owned(), css.to_owned()));
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    unavailable: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Make every read and write fail with [`PageError::Storage`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        if self.unavailable.get() {
            return Err(PageError::Storage("memory store disabled".to_owned()));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        if self.unavailable.get() {
            return Err(PageError::Storage("memory store disabled".to_owned()));
        }
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
