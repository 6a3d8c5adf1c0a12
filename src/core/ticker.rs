/// Host capability for "call me on the next display refresh".
pub trait FrameScheduler {
    type Handle: Copy;

    /// Request one callback; `None` when the host cannot schedule frames.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Self-rescheduling per-frame loop. The host calls `tick` when a requested
/// frame fires; the loop requests the next one only while running.
pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
    running: bool,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.pending = self.scheduler.request_frame();
    }

    /// Run one frame of work, then schedule the next.
    pub fn tick(&mut self, frame: impl FnOnce()) {
        self.pending = None;
        if !self.running {
            return;
        }
        frame();
        self.frames += 1;
        if self.running {
            self.pending = self.scheduler.request_frame();
        }
    }

    /// Cancel the outstanding request; no further frames run.
    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
