//! Manually stepped [`TaskHost`] for deterministic tests.

use super::TaskHost;
use std::cell::RefCell;
use std::rc::Rc;

type Callback = Box<dyn FnOnce()>;

#[derive(Default)]
struct Queue {
    next_id: u64,
    now_ms: f64,
    frames: Vec<(u64, Callback)>,
    timers: Vec<(u64, f64, Callback)>,
}

#[derive(Clone, Default)]
pub(crate) struct ManualHost {
    queue: Rc<RefCell<Queue>>,
}

/// Removes its callback from the queue when dropped.
pub(crate) struct ManualHandle {
    id: u64,
    queue: Rc<RefCell<Queue>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        let removed = {
            let mut queue = self.queue.borrow_mut();
            let frame = queue
                .frames
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|idx| queue.frames.remove(idx).1);
            let timer = queue
                .timers
                .iter()
                .position(|(id, _, _)| *id == self.id)
                .map(|idx| queue.timers.remove(idx).2);
            (frame, timer)
        };
        drop(removed);
    }
}

impl ManualHost {
    pub(crate) fn queued_frames(&self) -> usize {
        self.queue.borrow().frames.len()
    }

    /// Run every frame callback queued before this call.
    pub(crate) fn run_frame(&self) {
        let frames = std::mem::take(&mut self.queue.borrow_mut().frames);
        for (_, callback) in frames {
            callback();
        }
    }

    /// Move the clock forward, firing timers that come due in order.
    pub(crate) fn advance(&self, millis: f64) {
        let target = self.queue.borrow().now_ms + millis;
        loop {
            let due = {
                let mut queue = self.queue.borrow_mut();
                let next = queue
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, at, _))| *at <= target)
                    .min_by(|a, b| a.1.1.total_cmp(&b.1.1))
                    .map(|(idx, _)| idx);
                next.map(|idx| {
                    let (_, at, callback) = queue.timers.remove(idx);
                    queue.now_ms = at;
                    callback
                })
            };
            match due {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.queue.borrow_mut().now_ms = target;
    }

    fn enqueue(&self, build: impl FnOnce(&mut Queue, u64)) -> ManualHandle {
        let mut queue = self.queue.borrow_mut();
        queue.next_id += 1;
        let id = queue.next_id;
        build(&mut queue, id);
        ManualHandle {
            id,
            queue: Rc::clone(&self.queue),
        }
    }
}

impl TaskHost for ManualHost {
    type Handle = ManualHandle;

    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> ManualHandle {
        self.enqueue(|queue, id| queue.frames.push((id, callback)))
    }

    fn set_timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        self.enqueue(|queue, id| {
            let at = queue.now_ms + f64::from(millis);
            queue.timers.push((id, at, callback));
        })
    }
}
