//! Browser [`TaskHost`] backed by `gloo` frame and timer handles.

use super::TaskHost;
use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;

/// Either kind of browser callback; dropping it cancels the callback.
pub enum BrowserHandle {
    Frame(AnimationFrame),
    Timeout(Timeout),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl TaskHost for BrowserHost {
    type Handle = BrowserHandle;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> BrowserHandle {
        BrowserHandle::Frame(request_animation_frame(move |_timestamp| callback()))
    }

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> BrowserHandle {
        BrowserHandle::Timeout(Timeout::new(millis, callback))
    }
}
