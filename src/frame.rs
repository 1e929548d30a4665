use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop handing each callback the elapsed seconds
/// since the previous frame. Dropping the loop cancels the pending request.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    tick: Tick,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f32) + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Tick = Rc::new(RefCell::new(None));

        // Weak self-reference so the closure does not keep its own slot alive
        let tick_next = Rc::downgrade(&tick);
        let pending_next = pending.clone();
        let mut last_instant = Instant::now();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let now = Instant::now();
            let dt_sec = (now - last_instant).as_secs_f32();
            last_instant = now;
            on_frame(dt_sec);
            if let (Some(tick), Some(w)) = (tick_next.upgrade(), web::window()) {
                pending_next.set(request(&w, &tick));
            }
        }) as Box<dyn FnMut()>));

        pending.set(request(&window, &tick));
        Ok(Self { pending, tick })
    }
}

fn request(window: &web::Window, tick: &Tick) -> Option<i32> {
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}
