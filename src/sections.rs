//! Page chrome: navbar state, the mobile menu, back-to-top button, section
//! progress and the experience timeline line.

use crate::constants::*;
use crate::dom::{self, ScopedListener};
use crate::style;
use crate::window_signals::{self, ViewportSize};
use folio_core::{section_progress, MenuState, ScrollState, Subscription, TimelinePath};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Sections {
    _scroll: Option<Subscription>,
    _resize: Option<Subscription>,
    _back_to_top: Option<ScopedListener>,
    _menu: Option<MobileMenu>,
}

impl Sections {
    pub fn mount(document: &web::Document) -> Self {
        let navbar = document.get_element_by_id(NAVBAR_ID);
        let back_to_top = document.get_element_by_id(BACK_TO_TOP_ID);
        let progress = dom::query_all(document, SCROLL_PROGRESS_SELECTOR);

        let back_to_top_click = back_to_top.as_ref().and_then(|button| {
            ScopedListener::new(button, "click", |ev| {
                ev.prevent_default();
                scroll_to_top();
            })
            .map_err(|e| log::error!("[mount] {:?}", e))
            .ok()
        });

        let scroll = (navbar.is_some() || back_to_top.is_some() || !progress.is_empty()).then(|| {
            let on_scroll = move |y: f64| {
                let state = ScrollState::from_offset(y);
                if let Some(navbar) = &navbar {
                    dom::toggle_class(navbar, NAVBAR_SCROLLED_CLASS, state.navbar_scrolled);
                }
                if let Some(button) = &back_to_top {
                    dom::toggle_class(button, BACK_TO_TOP_VISIBLE_CLASS, state.back_to_top_visible);
                }
                let viewport_height = dom::viewport_height();
                for section in &progress {
                    let rect = section.get_bounding_client_rect();
                    let p = section_progress(rect.top(), rect.height(), viewport_height);
                    dom::set_style(section, SCROLL_PROGRESS_VAR, &format!("{:.4}", p));
                }
            };
            let signal = window_signals::scroll();
            on_scroll(signal.get());
            signal.subscribe(on_scroll)
        });

        let timelines = dom::query_all(document, TIMELINE_SELECTOR);
        let resize = (!timelines.is_empty()).then(|| {
            let on_resize = move |_: ViewportSize| {
                for timeline in &timelines {
                    draw_timeline(timeline);
                }
            };
            let signal = window_signals::resize();
            on_resize(signal.get());
            signal.subscribe(on_resize)
        });

        let menu = MobileMenu::mount(document)
            .map_err(|e| log::error!("[mount] {:?}", e))
            .ok()
            .flatten();

        Self {
            _scroll: scroll,
            _resize: resize,
            _back_to_top: back_to_top_click,
            _menu: menu,
        }
    }
}

struct MenuView {
    toggle: web::Element,
    overlay: Option<web::HtmlElement>,
    body: Option<web::HtmlElement>,
}

impl MenuView {
    fn render(&self, state: MenuState) {
        let open = state.is_open();
        _ = self.toggle.set_attribute("aria-expanded", state.aria_expanded());
        dom::toggle_class(&self.toggle, MENU_OPEN_CLASS, open);
        if let Some(overlay) = &self.overlay {
            dom::toggle_class(overlay, MENU_OPEN_CLASS, open);
        }
        if let Some(body) = &self.body {
            match state.body_overflow() {
                Some(value) => dom::set_style(body, "overflow", value),
                None => {
                    _ = body.style().remove_property("overflow");
                }
            }
        }
    }
}

/// Hamburger toggle plus its overlay. Body scrolling is locked while open
/// and always restored on drop.
struct MobileMenu {
    view: Rc<MenuView>,
    _toggle: ScopedListener,
    _links: Vec<ScopedListener>,
}

impl MobileMenu {
    fn mount(document: &web::Document) -> anyhow::Result<Option<Self>> {
        let Some(toggle) = document.get_element_by_id(MENU_TOGGLE_ID) else {
            return Ok(None);
        };
        let view = Rc::new(MenuView {
            toggle: toggle.clone(),
            overlay: document
                .get_element_by_id(MENU_OVERLAY_ID)
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok()),
            body: document.body(),
        });
        let state = Rc::new(Cell::new(MenuState::default()));
        view.render(state.get());

        let toggle_listener = {
            let (view, state) = (view.clone(), state.clone());
            ScopedListener::new(&toggle, "click", move |_| {
                let mut menu = state.get();
                menu.toggle();
                state.set(menu);
                view.render(menu);
            })?
        };

        let links = match &view.overlay {
            Some(overlay) => {
                let scope: &web::Element = overlay;
                dom::query_all(scope, MENU_LINK_SELECTOR)
                    .iter()
                    .map(|link| {
                        let (view, state) = (view.clone(), state.clone());
                        ScopedListener::new(link, "click", move |_| {
                            let mut menu = state.get();
                            if menu.close() {
                                state.set(menu);
                                view.render(menu);
                            }
                        })
                    })
                    .collect::<anyhow::Result<Vec<_>>>()?
            }
            None => Vec::new(),
        };

        log::info!("[mount] mobile menu ({} links)", links.len());
        Ok(Some(Self {
            view,
            _toggle: toggle_listener,
            _links: links,
        }))
    }
}

impl Drop for MobileMenu {
    fn drop(&mut self) {
        self.view.render(MenuState::default());
    }
}

fn scroll_to_top() {
    let Some(window) = web::window() else {
        return;
    };
    let opts = web::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Size the timeline's SVG path to its container and set the draw duration
/// from the number of entries.
fn draw_timeline(timeline: &web::HtmlElement) {
    let scope: &web::Element = timeline;
    let Ok(Some(path)) = scope.query_selector(TIMELINE_PATH_SELECTOR) else {
        return;
    };
    let height = f64::from(timeline.offset_height());
    match TimelinePath::new(height).path_data() {
        Some(d) => {
            _ = path.set_attribute("d", &d);
        }
        None => {
            _ = path.remove_attribute("d");
        }
    }
    let entries = dom::query_all(scope, TIMELINE_ENTRY_SELECTOR).len();
    dom::set_style(
        timeline,
        TIMELINE_DURATION_VAR,
        &style::seconds(TimelinePath::draw_duration(entries)),
    );
}
