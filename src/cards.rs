use crate::constants::*;
use crate::dom::{self, ScopedListener};
use crate::style;
use folio_core::{CardFrame, PointerDriver, TiltCard, TimeDriver};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct CardView {
    model: TiltCard,
    root: web::HtmlElement,
    image: Option<web::HtmlElement>,
    title: Option<web::HtmlElement>,
    glare: Option<web::HtmlElement>,
    /// Pointer input arrived since the last render.
    dirty: bool,
}

impl CardView {
    fn render(&self, f: &CardFrame) {
        dom::set_style(&self.root, "transform", &style::card_transform(f));
        if let Some(image) = &self.image {
            dom::set_style(image, "transform", &style::layer_transform(f.image_offset));
        }
        if let Some(title) = &self.title {
            dom::set_style(title, "transform", &style::layer_transform(f.title_offset));
        }
        if let Some(glare) = &self.glare {
            dom::set_style(glare, "background", &style::glare_background(f.glare));
        }
    }
}

/// Every `[data-tilt-card]` on the page with its pointer listeners.
pub struct TiltCards {
    cards: Vec<Rc<RefCell<CardView>>>,
    _listeners: Vec<ScopedListener>,
}

impl TiltCards {
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let mut cards = Vec::new();
        let mut listeners = Vec::new();
        for root in dom::query_all(document, CARD_SELECTOR) {
            let scope: &web::Element = &root;
            let view = Rc::new(RefCell::new(CardView {
                model: TiltCard::new(),
                image: dom::query_one(scope, CARD_IMAGE_SELECTOR),
                title: dom::query_one(scope, CARD_TITLE_SELECTOR),
                glare: dom::query_one(scope, CARD_GLARE_SELECTOR),
                root: root.clone(),
                dirty: true,
            }));

            let on_move = view.clone();
            listeners.push(ScopedListener::new(&root, "mousemove", move |ev| {
                let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                    return;
                };
                let mut view = on_move.borrow_mut();
                let bounds = dom::bounds(&view.root);
                let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                view.model.pointer_move(client, &bounds);
                view.dirty = true;
            })?);

            let on_leave = view.clone();
            listeners.push(ScopedListener::new(&root, "mouseleave", move |_| {
                let mut view = on_leave.borrow_mut();
                view.model.pointer_leave();
                view.dirty = true;
            })?);

            cards.push(view);
        }
        log::info!("[mount] {} tilt cards", cards.len());
        Ok(Self {
            cards,
            _listeners: listeners,
        })
    }

    pub fn advance(&mut self, dt_sec: f32) {
        for card in &self.cards {
            let mut view = card.borrow_mut();
            if !view.dirty && view.model.is_settled() {
                continue;
            }
            view.model.advance(dt_sec);
            view.dirty = false;
            let frame = view.model.frame();
            view.render(&frame);
        }
    }
}
