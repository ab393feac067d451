//! Browser host: binds [`Page`] to the live document through `web-sys`.
//!
//! ARCHITECTURE
//! ============
//! `WebSurface` and `LocalStore` implement the surface traits over the real
//! DOM and `localStorage`. `boot` builds the page, registers one listener per
//! event the behaviors react to, and starts the cursor's animation-frame loop.
//! Listeners live for the whole page, so their closures are leaked on
//! registration; only the frame loop can be torn down (`stopCursor`).
//!
//! Every handler borrows the shared page with `try_borrow_mut` and logs a
//! skipped event instead of panicking on re-entry.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollToOptions, Storage,
    Window,
};

use crate::config::PageConfig;
use crate::error::PageError;
use crate::frame::FrameLoop;
use crate::page::{Page, RevealMode};
use crate::reveal::{IntersectionSample, document_ready};
use crate::surface::{KeyValueStore, UiSurface};

type BrowserPage = Page<WebSurface, LocalStore>;
type SharedPage = Rc<RefCell<BrowserPage>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct FrameDriver {
    frames: FrameLoop,
    callback: FrameCallback,
}

thread_local! {
    static PAGE: RefCell<Option<SharedPage>> = const { RefCell::new(None) };
    static FRAME_DRIVER: RefCell<Option<FrameDriver>> = const { RefCell::new(None) };
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn dom_error(value: JsValue) -> PageError {
    PageError::Dom(describe(&value))
}

fn storage_error(value: JsValue) -> PageError {
    PageError::Storage(describe(&value))
}

fn to_js(err: PageError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Log a handler failure; the event is dropped.
fn report<T>(result: Result<T, PageError>) {
    if let Err(err) = result {
        log::warn!("{err}");
    }
}

// =============================================================
// Surface
// =============================================================

pub struct WebSurface {
    window: Window,
    document: Document,
}

impl WebSurface {
    pub fn new(window: Window) -> Result<Self, PageError> {
        let document = window
            .document()
            .ok_or_else(|| PageError::Dom("window has no document".to_owned()))?;
        Ok(Self { window, document })
    }

    fn html(element: &Element) -> Result<&HtmlElement, PageError> {
        element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| PageError::Dom(format!("<{}> has no inline style", element.tag_name())))
    }
}

impl UiSurface for WebSurface {
    type Element = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("invalid selector {selector:?}: {}", describe(&err));
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("invalid selector {selector:?}: {}", describe(&err));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), PageError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| PageError::Dom("document has no root element".to_owned()))?;
        root.set_attribute(name, value).map_err(dom_error)
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn style(&self, element: &Element, property: &str) -> String {
        let Some(html) = element.dyn_ref::<HtmlElement>() else {
            return String::new();
        };
        html.style().get_property_value(property).unwrap_or_default()
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) -> Result<(), PageError> {
        Self::html(element)?
            .style()
            .set_property(property, value)
            .map_err(dom_error)
    }

    fn add_class(&self, element: &Element, class: &str) -> Result<(), PageError> {
        element.class_list().add_1(class).map_err(dom_error)
    }

    fn remove_class(&self, element: &Element, class: &str) -> Result<(), PageError> {
        element.class_list().remove_1(class).map_err(dom_error)
    }

    fn offset_top(&self, element: &Element) -> f64 {
        element
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| f64::from(html.offset_top()))
    }

    fn offset_height(&self, element: &Element) -> f64 {
        element
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |html| f64::from(html.offset_height()))
    }

    fn viewport_top(&self, element: &Element) -> f64 {
        element.get_bounding_client_rect().top()
    }

    fn viewport_height(&self) -> f64 {
        match self.window.inner_height() {
            Ok(height) => height.as_f64().unwrap_or(0.0),
            Err(err) => {
                log::warn!("innerHeight unavailable: {}", describe(&err));
                0.0
            }
        }
    }

    fn scroll_offset(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(offset) => offset,
            Err(err) => {
                log::warn!("scrollY unavailable: {}", describe(&err));
                0.0
            }
        }
    }

    fn smooth_scroll_to(&self, top: f64) -> Result<(), PageError> {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }

    fn console_styled(&self, text: &str, css: &str) {
        web_sys::console::log_2(&JsValue::from_str(&format!("%c{text}")), &JsValue::from_str(css));
    }
}

// =============================================================
// Storage
// =============================================================

pub struct LocalStore {
    window: Window,
}

impl LocalStore {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn storage(&self) -> Result<Storage, PageError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(PageError::Storage("localStorage is not available".to_owned())),
            Err(err) => Err(storage_error(err)),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        self.storage()?.get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.storage()?.set_item(key, value).map_err(storage_error)
    }
}

// =============================================================
// Wiring
// =============================================================

fn with_page<T>(page: &SharedPage, event: &str, f: impl FnOnce(&mut BrowserPage) -> Result<T, PageError>) {
    match page.try_borrow_mut() {
        Ok(mut page) => report(f(&mut page)),
        Err(_) => log::debug!("{event}: page busy, event skipped"),
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), PageError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}

fn wire_cursor(page: &SharedPage, document: &Document) -> Result<(), PageError> {
    let shared = Rc::clone(page);
    listen(document, "mousemove", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let (x, y) = (f64::from(mouse.client_x()), f64::from(mouse.client_y()));
        with_page(&shared, "mousemove", |page| page.on_pointer_move(x, y));
    })?;

    let shared = Rc::clone(page);
    listen(document, "mouseleave", move |_| {
        with_page(&shared, "mouseleave", |page| page.on_pointer_leave());
    })?;

    let shared = Rc::clone(page);
    listen(document, "mouseenter", move |_| {
        with_page(&shared, "mouseenter", |page| page.on_pointer_enter());
    })?;

    let interactive = page.borrow().interactive_elements();
    for element in &interactive {
        let shared = Rc::clone(page);
        listen(element, "mouseenter", move |_| {
            with_page(&shared, "hover", |page| page.on_hover_enter());
        })?;
        let shared = Rc::clone(page);
        listen(element, "mouseleave", move |_| {
            with_page(&shared, "hover", |page| page.on_hover_leave());
        })?;
    }
    log::debug!("cursor: {} interactive elements", interactive.len());
    Ok(())
}

fn wire_anchors(page: &SharedPage) -> Result<(), PageError> {
    let anchors = page.borrow().anchors();
    for anchor in anchors {
        let shared = Rc::clone(page);
        let target = anchor.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            with_page(&shared, "click", |page| page.on_anchor_activated(&target));
        })?;
    }
    Ok(())
}

fn wire_scroll(page: &SharedPage, window: &Window) -> Result<(), PageError> {
    let shared = Rc::clone(page);
    listen(window, "scroll", move |_| {
        with_page(&shared, "scroll", BrowserPage::on_scroll);
    })
}

/// Hide the sections and hand them to an intersection observer, falling back
/// to scroll geometry when the browser has none.
fn mount_sections(page: &SharedPage) -> Result<(), PageError> {
    let (sections, options) = {
        let mut borrowed = page.borrow_mut();
        (borrowed.mount_sections()?, borrowed.reveal_options())
    };

    let shared = Rc::clone(page);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let sample = IntersectionSample {
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                };
                let section = entry.target();
                with_page(&shared, "intersection", |page| page.on_intersection(&section, sample));
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for section in &sections {
                observer.observe(section);
            }
            callback.forget();
            Ok(())
        }
        Err(err) => {
            log::warn!("reveal: no intersection observer ({}), using scroll geometry", describe(&err));
            page.borrow_mut().set_reveal_mode(RevealMode::Geometry)
        }
    }
}

fn wire_sections(page: &SharedPage, document: &Document) -> Result<(), PageError> {
    if document_ready(&document.ready_state()) {
        return mount_sections(page);
    }
    let shared = Rc::clone(page);
    listen(document, "DOMContentLoaded", move |_| {
        report(mount_sections(&shared));
    })
}

fn schedule_frame(window: &Window, frames: &FrameLoop, callback: &FrameCallback) -> Result<(), PageError> {
    let slot = callback.borrow();
    let Some(closure) = slot.as_ref() else {
        return Ok(());
    };
    let request = window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    frames.set_pending(request);
    Ok(())
}

fn start_frame_loop(page: &SharedPage, window: &Window) -> Result<(), PageError> {
    let frames = page.borrow().frame_loop();
    if !frames.is_running() {
        return Ok(());
    }

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&callback);
    let shared = Rc::clone(page);
    let handle = frames.clone();
    let window_for_cb = window.clone();
    *callback.borrow_mut() = Some(Closure::new(move |_ts: f64| {
        let keep_running = match shared.try_borrow_mut() {
            Ok(mut page) => match page.on_frame() {
                Ok(running) => running,
                Err(err) => {
                    log::warn!("cursor: {err}");
                    true
                }
            },
            Err(_) => true,
        };
        if !keep_running {
            drop(slot.borrow_mut().take());
            return;
        }
        report(schedule_frame(&window_for_cb, &handle, &slot));
    }));

    schedule_frame(window, &frames, &callback)?;
    FRAME_DRIVER.with(|driver| *driver.borrow_mut() = Some(FrameDriver { frames, callback }));
    Ok(())
}

fn boot(config: PageConfig) -> Result<(), JsValue> {
    if PAGE.with(|slot| slot.borrow().is_some()) {
        log::warn!("page already started");
        return Ok(());
    }

    console_error_panic_hook::set_once();
    let level = config.level().map_err(to_js)?;
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already installed: {err}")));
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let surface = WebSurface::new(window.clone()).map_err(to_js)?;
    let document = surface.document.clone();
    let page: SharedPage = Rc::new(RefCell::new(Page::new(surface, LocalStore::new(window.clone()), config)));

    if page.borrow().cursor().is_some() {
        report(wire_cursor(&page, &document));
        report(start_frame_loop(&page, &window));
    }
    report(wire_anchors(&page));
    report(wire_scroll(&page, &window));
    report(wire_sections(&page, &document));

    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    log::info!("portfolio page ready");
    Ok(())
}

// =============================================================
// JS exports
// =============================================================

/// Mount every behavior with the stock configuration.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    boot(PageConfig::default())
}

/// Mount every behavior with a JSON configuration override.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    boot(PageConfig::from_json(json).map_err(to_js)?)
}

/// Flip between light and dark. Bound to the page's theme button.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<(), JsValue> {
    let page = PAGE
        .with(|slot| slot.borrow().clone())
        .ok_or_else(|| JsValue::from_str("page not started"))?;
    let theme = page.borrow().toggle_theme().map_err(to_js)?;
    log::debug!("theme: now {}", theme.as_str());
    Ok(())
}

/// Stop the cursor animation loop and cancel its pending frame.
#[wasm_bindgen(js_name = stopCursor)]
pub fn stop_cursor() {
    let Some(driver) = FRAME_DRIVER.with(|driver| driver.borrow_mut().take()) else {
        return;
    };
    if let Some(request) = driver.frames.stop() {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.cancel_animation_frame(request) {
                log::warn!("cursor: cancel failed: {}", describe(&err));
            }
        }
    }
    drop(driver.callback.borrow_mut().take());
    log::debug!("cursor: stopped");
}
