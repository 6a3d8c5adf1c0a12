// Host-side tests for the cancellable frame loop and teardown ordering.

#![allow(dead_code)]
mod fx {
    pub mod palette {
        include!("../src/core/palette.rs");
    }
    pub mod style {
        include!("../src/core/style.rs");
    }
    pub mod ticker {
        include!("../src/core/ticker.rs");
    }
}

use fx::palette::{apply_palette, clear_palette, palette_at, STYLE_VARS};
use fx::ticker::*;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Default)]
struct Calls {
    requested: Vec<u32>,
    cancelled: Vec<u32>,
}

/// Records every request and cancel into a log the test keeps a handle to.
#[derive(Default)]
struct FakeScheduler {
    next: u32,
    calls: Rc<RefCell<Calls>>,
    unavailable: bool,
}

impl FrameScheduler for FakeScheduler {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        if self.unavailable {
            return None;
        }
        self.next += 1;
        self.calls.borrow_mut().requested.push(self.next);
        Some(self.next)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.calls.borrow_mut().cancelled.push(handle);
    }
}

fn fake_loop() -> (FrameLoop<FakeScheduler>, Rc<RefCell<Calls>>) {
    let scheduler = FakeScheduler::default();
    let calls = scheduler.calls.clone();
    (FrameLoop::new(scheduler), calls)
}

#[test]
fn start_requests_a_single_frame() {
    let (mut lp, calls) = fake_loop();
    assert!(calls.borrow().requested.is_empty());
    lp.start();
    lp.start();
    assert_eq!(calls.borrow().requested, vec![1]);
}

#[test]
fn each_tick_runs_work_and_reschedules() {
    let (mut lp, calls) = fake_loop();
    lp.start();
    let mut work = 0;
    for _ in 0..3 {
        lp.tick(|| work += 1);
    }
    assert_eq!(work, 3);
    assert_eq!(lp.frames(), 3);
    assert_eq!(calls.borrow().requested, vec![1, 2, 3, 4]);
}

#[test]
fn tick_before_start_does_nothing() {
    let (mut lp, calls) = fake_loop();
    let mut ran = false;
    lp.tick(|| ran = true);
    assert!(!ran);
    assert_eq!(lp.frames(), 0);
    assert!(calls.borrow().requested.is_empty());
}

#[test]
fn stop_cancels_pending_and_halts() {
    let (mut lp, calls) = fake_loop();
    lp.start();
    lp.tick(|| {});
    lp.stop();
    assert_eq!(calls.borrow().cancelled, vec![2]);

    // A callback that was already in flight does no work and requests nothing
    let mut ran = false;
    lp.tick(|| ran = true);
    assert!(!ran);
    assert_eq!(lp.frames(), 1);
    assert_eq!(calls.borrow().requested, vec![1, 2]);

    // Nothing left to cancel the second time
    lp.stop();
    assert_eq!(calls.borrow().cancelled, vec![2]);
}

#[test]
fn stop_before_start_is_harmless() {
    let (mut lp, calls) = fake_loop();
    lp.stop();
    assert!(calls.borrow().cancelled.is_empty());
}

#[test]
fn restart_after_stop_requests_again() {
    let (mut lp, calls) = fake_loop();
    lp.start();
    lp.stop();
    lp.start();
    assert_eq!(calls.borrow().requested, vec![1, 2]);
    assert_eq!(calls.borrow().cancelled, vec![1]);
}

#[test]
fn missing_scheduler_leaves_nothing_pending() {
    let scheduler = FakeScheduler {
        unavailable: true,
        ..Default::default()
    };
    let calls = scheduler.calls.clone();
    let mut lp = FrameLoop::new(scheduler);
    lp.start();
    lp.stop();
    assert!(calls.borrow().requested.is_empty());
    assert!(calls.borrow().cancelled.is_empty());
}

#[test]
fn teardown_stops_frames_and_removes_theme_vars() {
    let mut style: BTreeMap<String, String> = BTreeMap::new();
    let (mut lp, calls) = fake_loop();
    lp.start();
    for i in 0..5 {
        lp.tick(|| apply_palette(&mut style, &palette_at(i as f64 / 4.0)));
    }
    assert_eq!(style.len(), STYLE_VARS.len());

    lp.stop();
    clear_palette(&mut style);

    assert!(style.is_empty());
    let requested = calls.borrow().requested.len();
    lp.tick(|| apply_palette(&mut style, &palette_at(0.5)));
    assert!(style.is_empty());
    assert_eq!(calls.borrow().requested.len(), requested);
}
