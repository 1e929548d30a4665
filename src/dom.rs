use anyhow::anyhow;
use folio_core::Bounds;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Event listener that stays registered until dropped.
pub struct ScopedListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ScopedListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Anything with `querySelector`/`querySelectorAll`.
pub trait Scope {
    fn select_all(&self, selector: &str) -> Result<web::NodeList, JsValue>;
    fn select_one(&self, selector: &str) -> Result<Option<web::Element>, JsValue>;
}

impl Scope for web::Document {
    fn select_all(&self, selector: &str) -> Result<web::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
    fn select_one(&self, selector: &str) -> Result<Option<web::Element>, JsValue> {
        self.query_selector(selector)
    }
}

impl Scope for web::Element {
    fn select_all(&self, selector: &str) -> Result<web::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
    fn select_one(&self, selector: &str) -> Result<Option<web::Element>, JsValue> {
        self.query_selector(selector)
    }
}

/// Every element under `root` matching `selector` that is an `HtmlElement`.
pub fn query_all(root: &impl Scope, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.select_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_one(root: &impl Scope, selector: &str) -> Option<web::HtmlElement> {
    root.select_one(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Viewport-relative box of `el`.
pub fn bounds(el: &web::Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}
