//! Window scroll and resize as shared signals.
//!
//! Each signal owns at most one real `window` listener, attached while at
//! least one component is subscribed.

use crate::dom::ScopedListener;
use folio_core::{ListenerBackend, SharedSignal};
use wasm_bindgen::JsValue;
use web_sys as web;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

thread_local! {
    static SCROLL: SharedSignal<f64> =
        SharedSignal::new(read_scroll_y(), WindowBackend::new("scroll", publish_scroll));
    static RESIZE: SharedSignal<ViewportSize> =
        SharedSignal::new(read_viewport(), WindowBackend::new("resize", publish_resize));
}

/// Vertical page offset in px.
pub fn scroll() -> SharedSignal<f64> {
    SCROLL.with(|s| s.clone())
}

/// Inner window size in px.
pub fn resize() -> SharedSignal<ViewportSize> {
    RESIZE.with(|s| s.clone())
}

fn read_scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn read_viewport() -> ViewportSize {
    let Some(w) = web::window() else {
        return ViewportSize::default();
    };
    let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    ViewportSize {
        width: px(w.inner_width()),
        height: px(w.inner_height()),
    }
}

fn publish_scroll() {
    let y = read_scroll_y();
    SCROLL.with(|s| s.publish(y));
}

fn publish_resize() {
    let size = read_viewport();
    RESIZE.with(|s| s.publish(size));
}

struct WindowBackend {
    event: &'static str,
    refresh: fn(),
    listener: Option<ScopedListener>,
}

impl WindowBackend {
    fn new(event: &'static str, refresh: fn()) -> Self {
        Self {
            event,
            refresh,
            listener: None,
        }
    }
}

impl ListenerBackend for WindowBackend {
    fn attach(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let refresh = self.refresh;
        match ScopedListener::new(&window, self.event, move |_| refresh()) {
            Ok(l) => {
                log::debug!("[signal] window {} listener attached", self.event);
                self.listener = Some(l);
            }
            Err(e) => log::error!("[signal] {:?}", e),
        }
        // The value may have moved while nobody was listening
        refresh();
    }

    fn detach(&mut self) {
        if self.listener.take().is_some() {
            log::debug!("[signal] window {} listener detached", self.event);
        }
    }
}
