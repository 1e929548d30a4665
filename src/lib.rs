#![cfg(target_arch = "wasm32")]
use folio_core::ParamGen;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod cards;
mod constants;
mod contact;
mod dom;
mod floating;
mod frame;
mod sections;
mod style;
mod window_signals;

/// Everything mounted on the page. Dropping it releases every listener,
/// subscription and the pending animation frame.
struct Page {
    /// Owns the per-frame views (icons, cards, contact form).
    _frame: frame::FrameLoop,
    _sections: sections::Sections,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = mount() {
        log::error!("[mount] init error: {:?}", e);
    }
    Ok(())
}

/// Mount every effect on the current document, replacing any earlier mount.
#[wasm_bindgen]
pub fn remount() {
    unmount();
    if let Err(e) = mount() {
        log::error!("[mount] init error: {:?}", e);
    }
}

/// Tear down every effect. Safe to call when nothing is mounted.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    if page.is_some() {
        drop(page);
        log::info!("[mount] page released");
    }
}

fn mount() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut gen = ParamGen::from_entropy();
    let mut floating = floating::FloatingLayer::mount(&document, &mut gen);
    let mut cards = cards::TiltCards::mount(&document)?;
    let contact = contact::ContactMount::mount(&document)?;
    let sections = sections::Sections::mount(&document);

    let frame = frame::FrameLoop::start(move |dt_sec| {
        floating.advance(dt_sec);
        cards.advance(dt_sec);
        if let Some(contact) = &contact {
            contact.tick();
        }
    })?;

    PAGE.with(|p| {
        *p.borrow_mut() = Some(Page {
            _frame: frame,
            _sections: sections,
        })
    });
    Ok(())
}
