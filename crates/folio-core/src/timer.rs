//! Deferred work: one-shot timers, animation frames and the two rate limiters
//! built on them.
//!
//! Deferred actions are data ([`Task`]) rather than closures. The host keeps
//! them until they are due and hands them back through
//! [`crate::PageFx::on_timer`], so a timer never holds a borrow of the
//! controller.

use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Work the controller asked to run later. `N` is the host's node handle.
#[derive(Clone, Debug, PartialEq)]
pub enum Task<N> {
    /// Restore particle opacity after scrolling stops.
    RestoreParticles,
    /// Debounced resize: regenerate or trim the particle field.
    LayoutResize,
    /// Debounced resize: force the menu closed on wide viewports.
    MenuSync,
    /// Remove a ripple whose lifetime elapsed.
    RemoveNode(N),
    /// Staggered reveal of an observed content element.
    Reveal(N),
    /// Staggered entrance of a hero block after page load.
    HeroReveal(N),
    /// Settle a card after a touch ends.
    CardRelease(N),
    /// Recompute the navbar style on the next animation frame.
    NavbarFrame,
}

/// Handle of a pending timeout, issued by the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

pub trait Scheduler<N> {
    fn set_timeout(&mut self, delay_ms: u32, task: Task<N>) -> TimerId;
    /// Cancelling an id that already fired is a no-op.
    fn clear_timeout(&mut self, id: TimerId);
    fn request_frame(&mut self, task: Task<N>);
}

/// Cancellable one-shot timer: arming it again drops whatever was pending.
#[derive(Debug)]
pub struct Debounce {
    delay_ms: u32,
    pending: Option<TimerId>,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn schedule<N, S: Scheduler<N>>(&mut self, scheduler: &mut S, task: Task<N>) {
        self.cancel_previous(scheduler);
        self.pending = Some(scheduler.set_timeout(self.delay_ms, task));
    }

    pub fn cancel_previous<N, S: Scheduler<N>>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.pending.take() {
            scheduler.clear_timeout(id);
        }
    }

    /// Call when the armed task runs.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// At most one pending animation-frame callback.
#[derive(Debug, Default)]
pub struct FrameGuard {
    ticking: bool,
}

impl FrameGuard {
    /// Request `task` on the next frame unless one is already pending.
    /// Returns whether a frame was requested.
    pub fn request<N, S: Scheduler<N>>(&mut self, scheduler: &mut S, task: Task<N>) -> bool {
        if self.ticking {
            return false;
        }
        scheduler.request_frame(task);
        self.ticking = true;
        true
    }

    pub fn complete(&mut self) {
        self.ticking = false;
    }

    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}

/// Owns the host handle of every live timeout. Dropping a handle must cancel
/// the timeout and release its callback, so a cancelled timer frees its
/// callback right away and a finished one frees it on the next `next_id`.
pub struct TimerBook<H> {
    next: i32,
    live: FnvHashMap<TimerId, H>,
    done: DoneLog,
}

impl<H> Default for TimerBook<H> {
    fn default() -> Self {
        Self {
            next: 0,
            live: FnvHashMap::default(),
            done: DoneLog::default(),
        }
    }
}

impl<H> TimerBook<H> {
    /// Id for the next timeout. Releases handles of timeouts that finished.
    pub fn next_id(&mut self) -> TimerId {
        self.sweep();
        self.next += 1;
        TimerId(self.next)
    }

    pub fn insert(&mut self, id: TimerId, handle: H) {
        self.live.insert(id, handle);
    }

    /// Drop the handle of `id`. A timeout whose callback is running stays
    /// until it reports done.
    pub fn cancel(&mut self, id: TimerId) {
        if self.done.running.get() == Some(id) {
            return;
        }
        self.live.remove(&id);
    }

    /// Shared log the callbacks report to.
    pub fn done_log(&self) -> DoneLog {
        self.done.clone()
    }

    pub fn live(&self) -> usize {
        self.live.len()
    }

    fn sweep(&mut self) {
        let finished: Vec<TimerId> = self.done.finished.borrow_mut().drain(..).collect();
        for id in finished {
            self.live.remove(&id);
        }
    }
}

/// Wraps a timeout callback: marks it running while it executes and queues
/// its id for release once it returns.
#[derive(Clone, Default)]
pub struct DoneLog {
    running: Rc<Cell<Option<TimerId>>>,
    finished: Rc<RefCell<Vec<TimerId>>>,
}

impl DoneLog {
    pub fn run(&self, id: TimerId, f: impl FnOnce()) {
        let outer = self.running.replace(Some(id));
        f();
        self.running.set(outer);
        self.finished.borrow_mut().push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        next: i32,
        armed: Vec<(TimerId, u32)>,
        cleared: Vec<TimerId>,
        frames: usize,
    }

    impl Scheduler<()> for Recorder {
        fn set_timeout(&mut self, delay_ms: u32, _task: Task<()>) -> TimerId {
            self.next += 1;
            let id = TimerId(self.next);
            self.armed.push((id, delay_ms));
            id
        }
        fn clear_timeout(&mut self, id: TimerId) {
            self.cleared.push(id);
        }
        fn request_frame(&mut self, _task: Task<()>) {
            self.frames += 1;
        }
    }

    #[test]
    fn debounce_cancels_previous_timer() {
        let mut rec = Recorder::default();
        let mut d = Debounce::new(150);
        d.schedule(&mut rec, Task::MenuSync);
        d.schedule(&mut rec, Task::MenuSync);
        d.schedule(&mut rec, Task::MenuSync);
        assert_eq!(rec.armed.len(), 3);
        assert!(rec.armed.iter().all(|(_, ms)| *ms == 150));
        assert_eq!(rec.cleared, vec![TimerId(1), TimerId(2)]);
        assert!(d.is_pending());
        d.fired();
        assert!(!d.is_pending());
        // nothing left to cancel
        d.cancel_previous(&mut rec);
        assert_eq!(rec.cleared.len(), 2);
    }

    #[test]
    fn frame_guard_is_single_flight() {
        let mut rec = Recorder::default();
        let mut g = FrameGuard::default();
        assert!(g.request(&mut rec, Task::NavbarFrame));
        for _ in 0..10 {
            assert!(!g.request(&mut rec, Task::NavbarFrame));
        }
        assert_eq!(rec.frames, 1);
        g.complete();
        assert!(g.request(&mut rec, Task::NavbarFrame));
        assert_eq!(rec.frames, 2);
    }

    struct Handle(Rc<Cell<usize>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    /// Scheduler that keeps one counted handle per timeout, like the browser one.
    #[derive(Default)]
    struct Booked {
        book: TimerBook<Handle>,
        released: Rc<Cell<usize>>,
    }

    impl Scheduler<()> for Booked {
        fn set_timeout(&mut self, _delay_ms: u32, _task: Task<()>) -> TimerId {
            let id = self.book.next_id();
            self.book.insert(id, Handle(self.released.clone()));
            id
        }
        fn clear_timeout(&mut self, id: TimerId) {
            self.book.cancel(id);
        }
        fn request_frame(&mut self, _task: Task<()>) {}
    }

    #[test]
    fn rearmed_debounce_releases_cancelled_handles() {
        let mut s = Booked::default();
        let mut d = Debounce::new(100);
        for _ in 0..50 {
            d.schedule(&mut s, Task::RestoreParticles);
        }
        assert_eq!(s.book.live(), 1);
        assert_eq!(s.released.get(), 49);
    }

    #[test]
    fn finished_handles_are_released_on_next_arm() {
        let mut s = Booked::default();
        let done = s.book.done_log();
        let first = s.set_timeout(100, Task::LayoutResize);
        let mut ran = false;
        done.run(first, || ran = true);
        assert!(ran);
        // still owned until the next timeout is armed
        assert_eq!(s.book.live(), 1);
        s.set_timeout(100, Task::LayoutResize);
        assert_eq!(s.book.live(), 1);
        assert_eq!(s.released.get(), 1);
    }

    #[test]
    fn running_timeout_is_not_released_by_its_own_cancel() {
        let mut s = Booked::default();
        let done = s.book.done_log();
        let id = s.set_timeout(150, Task::MenuSync);
        done.run(id, || s.clear_timeout(id));
        assert_eq!(s.released.get(), 0);
        s.set_timeout(150, Task::MenuSync);
        assert_eq!(s.released.get(), 1);
        assert_eq!(s.book.live(), 1);
    }
}
