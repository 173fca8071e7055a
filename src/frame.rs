//! Browser timers and animation frames behind `folio_core::Scheduler`.
//!
//! Each timeout or frame callback carries a `Task`; when it fires the task is
//! passed to the sink installed with [`BrowserScheduler::connect`], which runs
//! it on the controller. Timeouts are `gloo_timers` handles kept in a
//! [`TimerBook`], so clearing one drops its callback.

use folio_core::{Scheduler, Task, TimerBook, TimerId};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Sink = Rc<dyn Fn(Task<web::Element>)>;
type SinkSlot = Rc<RefCell<Option<Sink>>>;

pub struct BrowserScheduler {
    window: web::Window,
    sink: SinkSlot,
    timeouts: TimerBook<Timeout>,
}

impl BrowserScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            sink: Rc::new(RefCell::new(None)),
            timeouts: TimerBook::default(),
        }
    }

    /// Handle used to install the sink once the controller exists.
    pub fn sink_slot(&self) -> SinkSlot {
        self.sink.clone()
    }

    pub fn connect(slot: &SinkSlot, sink: impl Fn(Task<web::Element>) + 'static) {
        *slot.borrow_mut() = Some(Rc::new(sink));
    }
}

fn deliver(slot: &SinkSlot, task: Task<web::Element>) {
    // clone out so the slot is not borrowed while the task runs
    let sink = slot.borrow().clone();
    match sink {
        Some(sink) => sink(task),
        None => log::warn!("[timer] task fired before the controller was connected"),
    }
}

impl Scheduler<web::Element> for BrowserScheduler {
    fn set_timeout(&mut self, delay_ms: u32, task: Task<web::Element>) -> TimerId {
        let id = self.timeouts.next_id();
        let slot = self.sink.clone();
        let done = self.timeouts.done_log();
        let timeout = Timeout::new(delay_ms, move || done.run(id, || deliver(&slot, task)));
        self.timeouts.insert(id, timeout);
        id
    }

    fn clear_timeout(&mut self, id: TimerId) {
        self.timeouts.cancel(id);
    }

    fn request_frame(&mut self, task: Task<web::Element>) {
        // a requested frame always runs, which frees the one-shot closure
        let slot = self.sink.clone();
        let cb = Closure::once_into_js(move || deliver(&slot, task));
        if let Err(e) = self.window.request_animation_frame(cb.unchecked_ref()) {
            log::warn!("[timer] requestAnimationFrame failed: {:?}", e);
        }
    }
}
