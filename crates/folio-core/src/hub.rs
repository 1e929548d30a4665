//! Process-wide observable values with reference-counted subscriptions.
//!
//! Window-level inputs such as scroll and resize are shared by many
//! components. Each one is a single [`SharedSignal`] whose platform listener
//! is attached when the first subscriber arrives and detached when the last
//! [`Subscription`] is dropped, so teardown stays correct however often
//! components mount and unmount.

use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Platform hook owning the real event listener behind a signal.
pub trait ListenerBackend {
    fn attach(&mut self);
    fn detach(&mut self);
}

/// Backend for signals fed by hand (tests, derived values).
#[derive(Default)]
pub struct ManualBackend;

impl ListenerBackend for ManualBackend {
    fn attach(&mut self) {}
    fn detach(&mut self) {}
}

type Callback<T> = Rc<RefCell<dyn FnMut(T)>>;

struct Inner<T> {
    latest: T,
    next_id: u64,
    subscribers: FnvHashMap<u64, Callback<T>>,
    backend: Box<dyn ListenerBackend>,
    attached: bool,
}

/// Shared, single-threaded observable.
pub struct SharedSignal<T: Copy + 'static> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Copy + 'static> Clone for SharedSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Copy + 'static> SharedSignal<T> {
    pub fn new(initial: T, backend: impl ListenerBackend + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                latest: initial,
                next_id: 0,
                subscribers: FnvHashMap::default(),
                backend: Box::new(backend),
                attached: false,
            })),
        }
    }

    pub fn manual(initial: T) -> Self {
        Self::new(initial, ManualBackend)
    }

    /// Latest published value.
    pub fn get(&self) -> T {
        self.inner.borrow().latest
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    pub fn is_attached(&self) -> bool {
        self.inner.borrow().attached
    }

    /// Register `callback`; it stays registered until the returned handle drops.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl FnMut(T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.insert(id, Rc::new(RefCell::new(callback)));
            id
        };
        self.attach_if_needed();
        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    release(&inner, id);
                }
            })),
        }
    }

    /// Store `value` and notify every current subscriber.
    pub fn publish(&self, value: T) {
        let ids: Vec<u64> = {
            let mut inner = self.inner.borrow_mut();
            inner.latest = value;
            inner.subscribers.keys().copied().collect()
        };
        for id in ids {
            // Re-check each id: an earlier callback may have unsubscribed it
            let callback = self.inner.borrow().subscribers.get(&id).cloned();
            if let Some(cb) = callback {
                if let Ok(mut f) = cb.try_borrow_mut() {
                    f(value);
                } else {
                    log::warn!("[signal] skipped re-entrant publish for subscriber {}", id);
                }
            }
        }
    }

    fn attach_if_needed(&self) {
        // Attach outside the RefCell borrow so the backend may publish synchronously
        let mut backend = {
            let mut inner = self.inner.borrow_mut();
            if inner.attached {
                return;
            }
            inner.attached = true;
            std::mem::replace(&mut inner.backend, Box::new(ManualBackend))
        };
        backend.attach();
        self.inner.borrow_mut().backend = backend;
    }
}

fn release<T: Copy + 'static>(inner: &Rc<RefCell<Inner<T>>>, id: u64) {
    let (removed, backend) = {
        let mut guard = inner.borrow_mut();
        let removed = guard.subscribers.remove(&id);
        let backend = if guard.subscribers.is_empty() && guard.attached {
            guard.attached = false;
            Some(std::mem::replace(&mut guard.backend, Box::new(ManualBackend)))
        } else {
            None
        };
        (removed, backend)
    };
    // The callback may own other subscriptions; drop it with no borrow held
    drop(removed);
    if let Some(mut backend) = backend {
        backend.detach();
        inner.borrow_mut().backend = backend;
    }
}

/// Handle keeping a callback registered. Dropping it unsubscribes.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribe now; same as dropping.
    pub fn cancel(mut self) {
        if let Some(f) = self.release.take() {
            f();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.release.take() {
            f();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting {
        attached: Rc<Cell<u32>>,
        detached: Rc<Cell<u32>>,
    }

    impl ListenerBackend for Counting {
        fn attach(&mut self) {
            self.attached.set(self.attached.get() + 1);
        }
        fn detach(&mut self) {
            self.detached.set(self.detached.get() + 1);
        }
    }

    fn counting() -> (SharedSignal<f64>, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let attached = Rc::new(Cell::new(0));
        let detached = Rc::new(Cell::new(0));
        let signal = SharedSignal::new(
            0.0,
            Counting {
                attached: attached.clone(),
                detached: detached.clone(),
            },
        );
        (signal, attached, detached)
    }

    #[test]
    fn attaches_once_and_detaches_with_last_subscriber() {
        let (signal, attached, detached) = counting();
        let a = signal.subscribe(|_| {});
        let b = signal.subscribe(|_| {});
        assert_eq!(attached.get(), 1);
        drop(a);
        assert_eq!(detached.get(), 0);
        assert!(signal.is_attached());
        drop(b);
        assert_eq!(detached.get(), 1);
        assert!(!signal.is_attached());

        let _c = signal.subscribe(|_| {});
        assert_eq!(attached.get(), 2);
    }

    #[test]
    fn publish_reaches_live_subscribers_only() {
        let signal = SharedSignal::manual(0.0_f64);
        let seen = Rc::new(Cell::new(0.0));
        let seen_cb = seen.clone();
        let sub = signal.subscribe(move |v| seen_cb.set(v));
        signal.publish(12.5);
        assert_eq!(seen.get(), 12.5);
        assert_eq!(signal.get(), 12.5);
        sub.cancel();
        signal.publish(40.0);
        assert_eq!(seen.get(), 12.5);
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn subscriber_dropped_during_dispatch_is_not_called() {
        let signal = SharedSignal::manual(0_u32);
        let victim_calls = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

        let slot_cb = slot.clone();
        let killer = signal.subscribe(move |_| slot_cb.borrow_mut().clear());
        let calls = victim_calls.clone();
        slot.borrow_mut().push(signal.subscribe(move |_| calls.set(calls.get() + 1)));

        // Dispatch order is unspecified, so the victim runs at most once
        signal.publish(1);
        assert!(victim_calls.get() <= 1);
        signal.publish(2);
        assert!(victim_calls.get() <= 1);
        assert_eq!(signal.subscriber_count(), 1);
        drop(killer);
    }

    #[test]
    fn subscription_outliving_signal_is_harmless() {
        let signal = SharedSignal::manual(1_i32);
        let sub = signal.subscribe(|_| {});
        drop(signal);
        drop(sub);
    }
}
