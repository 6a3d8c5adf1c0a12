use crate::core::{FrameLoop, FrameScheduler};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` as a `FrameScheduler`.
pub struct RafScheduler {
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let window = web::window()?;
        let cb = self.callback.borrow();
        let cb = cb.as_ref()?;
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

/// A running rAF loop. Stopping (or dropping) cancels the pending frame
/// and releases the callback.
pub struct AnimationLoop {
    inner: Rc<RefCell<FrameLoop<RafScheduler>>>,
    callback: FrameCallback,
}

impl AnimationLoop {
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.stop();
        if self.callback.borrow_mut().take().is_some() {
            log::debug!("[frame] loop stopped after {} frames", inner.frames());
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start calling `frame(timestamp_ms)` once per display refresh.
pub fn start_loop(mut frame: impl FnMut(f64) + 'static) -> AnimationLoop {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let inner = Rc::new(RefCell::new(FrameLoop::new(RafScheduler {
        callback: callback.clone(),
    })));
    // Weak so the closure does not keep its own loop alive
    let weak: Weak<RefCell<FrameLoop<RafScheduler>>> = Rc::downgrade(&inner);
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if let Some(l) = weak.upgrade() {
            l.borrow_mut().tick(|| frame(ts));
        }
    }) as Box<dyn FnMut(f64)>));
    inner.borrow_mut().start();
    AnimationLoop { inner, callback }
}
