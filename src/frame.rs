use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A cancellable requestAnimationFrame loop.
///
/// The step function receives the frame's monotonic timestamp and returns
/// whether the loop should keep running. Cloning shares the same loop.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

struct FrameLoopInner {
    running: Cell<bool>,
    raf_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    pub fn new(mut step: impl FnMut(Duration) -> bool + 'static) -> Self {
        let inner = Rc::new(FrameLoopInner {
            running: Cell::new(false),
            raf_id: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak: Weak<FrameLoopInner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.raf_id.set(None);
            if !inner.running.get() {
                return;
            }
            let now = Duration::from_secs_f64(timestamp_ms.max(0.0) / 1000.0);
            if step(now) && inner.running.get() {
                inner.request();
            } else {
                inner.running.set(false);
            }
        }) as Box<dyn FnMut(f64)>));
        Self { inner }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Start the loop unless it is already scheduled.
    pub fn ensure_running(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        self.inner.request();
    }

    pub fn cancel(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    /// Cancel and release the frame callback. Must not be called from inside
    /// the step function.
    pub fn dispose(&self) {
        self.cancel();
        self.inner.tick.borrow_mut().take();
    }
}

impl FrameLoopInner {
    fn request(&self) {
        let tick = self.tick.borrow();
        let (Some(w), Some(cb)) = (web::window(), tick.as_ref()) else {
            self.running.set(false);
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.raf_id.set(Some(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                self.running.set(false);
            }
        }
    }
}
