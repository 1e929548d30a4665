//! Floating background icons: one drift animator per `[data-drift]` element.

use crate::constants::*;
use crate::dom;
use crate::style;
use crate::window_signals::{self, ViewportSize};
use folio_core::{
    section_progress, Breakpoint, DriftAnimator, DriftProfile, ParamGen, Subscription, TimeDriver,
};
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use web_sys as web;

struct FloatingIcon {
    el: web::HtmlElement,
    /// Section whose scroll position biases this icon, if the profile uses one.
    scope: Option<web::Element>,
    animator: DriftAnimator,
    visible: Rc<Cell<bool>>,
}

pub struct FloatingLayer {
    icons: Vec<FloatingIcon>,
    _resize: Option<Subscription>,
}

impl FloatingLayer {
    pub fn mount(document: &web::Document, gen: &mut ParamGen) -> Self {
        let mut icons = Vec::new();
        // Per profile: (element, slot within the profile, visibility flag)
        let mut groups: BTreeMap<String, Vec<(web::HtmlElement, Rc<Cell<bool>>)>> = BTreeMap::new();

        for el in dom::query_all(document, DRIFT_SELECTOR) {
            let name = el.get_attribute(DRIFT_ATTR).unwrap_or_default();
            let Some(profile) = DriftProfile::named(name.trim()) else {
                log::warn!("[mount] unknown drift profile {:?}", name);
                continue;
            };
            let scope = profile
                .scroll_bias_px
                .and_then(|_| el.closest(DRIFT_SCOPE_SELECTOR).ok().flatten());
            let visible = Rc::new(Cell::new(true));
            groups
                .entry(name.trim().to_string())
                .or_default()
                .push((el.clone(), visible.clone()));
            icons.push(FloatingIcon {
                el,
                scope,
                animator: DriftAnimator::spawn(&profile, gen),
                visible,
            });
        }
        log::info!("[mount] {} floating icons", icons.len());

        let resize = (!icons.is_empty()).then(|| {
            let apply = move |size: ViewportSize| {
                let breakpoint = Breakpoint::from_width(size.width);
                for members in groups.values() {
                    let shown = breakpoint.visible_icon_count(members.len());
                    for (slot, (el, visible)) in members.iter().enumerate() {
                        let on = slot < shown;
                        visible.set(on);
                        dom::toggle_class(el, HIDDEN_CLASS, !on);
                    }
                }
            };
            let signal = window_signals::resize();
            apply(signal.get());
            signal.subscribe(apply)
        });

        Self {
            icons,
            _resize: resize,
        }
    }

    pub fn advance(&mut self, dt_sec: f32) {
        let viewport_height = dom::viewport_height();
        for icon in &mut self.icons {
            icon.animator.advance(dt_sec);
            if !icon.visible.get() {
                continue;
            }
            let progress = icon.scope.as_ref().map(|scope| {
                let rect = scope.get_bounding_client_rect();
                section_progress(rect.top(), rect.height(), viewport_height)
            });
            let frame = icon.animator.frame(progress);
            dom::set_style(&icon.el, "transform", &style::drift_transform(&frame));
            dom::set_style(&icon.el, "opacity", &style::opacity(frame.opacity));
        }
    }
}
