//! Frame-aligned scheduling plus debounce and throttle helpers.
//!
//! Everything here is written against [`TaskHost`], so the same coalescing
//! rules run in the browser (`requestAnimationFrame` / `setTimeout` through
//! `gloo`) and in tests (a manually stepped host).

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(test)]
pub(crate) mod manual;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Source of frame callbacks and timers.
///
/// Dropping a returned handle cancels the callback if it has not run yet.
pub trait TaskHost {
    type Handle: 'static;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Handle;

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Coalesces bursts of notifications into one callback per rendered frame.
///
/// At most one frame is pending at any time. Scheduling while a frame is
/// pending cancels it and requests a fresh one, so the last callback wins.
pub struct FrameScheduler<H: TaskHost> {
    host: H,
    pending: Rc<RefCell<Option<H::Handle>>>,
}

impl<H: TaskHost> FrameScheduler<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn schedule(&self, callback: impl FnOnce() + 'static) {
        self.cancel();
        let pending = Rc::clone(&self.pending);
        let handle = self.host.request_frame(Box::new(move || {
            pending.borrow_mut().take();
            callback();
        }));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        let stale = self.pending.borrow_mut().take();
        drop(stale);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl<H: TaskHost> Drop for FrameScheduler<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs only the last callback of a burst, once `wait_ms` of quiet has passed.
pub struct Debouncer<H: TaskHost> {
    host: H,
    wait_ms: u32,
    pending: Rc<RefCell<Option<H::Handle>>>,
}

impl<H: TaskHost> Debouncer<H> {
    pub fn new(host: H, wait_ms: u32) -> Self {
        Self {
            host,
            wait_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call(&self, callback: impl FnOnce() + 'static) {
        self.cancel();
        let pending = Rc::clone(&self.pending);
        let handle = self.host.set_timeout(
            self.wait_ms,
            Box::new(move || {
                pending.borrow_mut().take();
                callback();
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        let stale = self.pending.borrow_mut().take();
        drop(stale);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl<H: TaskHost> Drop for Debouncer<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Lets a call through at most once per `limit_ms`.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    open_at: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit_ms: f64::from(limit_ms),
            open_at: None,
        }
    }

    /// `true` if the caller may proceed at `now_ms`; the first call always may.
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        match self.open_at {
            Some(open_at) if now_ms < open_at => false,
            _ => {
                self.open_at = Some(now_ms + self.limit_ms);
                true
            }
        }
    }
}
