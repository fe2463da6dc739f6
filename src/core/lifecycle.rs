/// Bookkeeping for a self-rescheduling frame loop.
///
/// Tracks whether the loop may keep going and the id of the frame request
/// currently in flight, so a stop can also withdraw that request.
#[derive(Clone, Copy, Debug)]
pub struct LoopGate {
    running: bool,
    pending: Option<i32>,
}

impl Default for LoopGate {
    fn default() -> Self {
        Self {
            running: true,
            pending: None,
        }
    }
}

impl LoopGate {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    /// Called at the top of each tick: the request that fired is spent.
    /// Returns whether the tick body should run.
    pub fn enter_tick(&mut self) -> bool {
        self.pending = None;
        self.running
    }

    /// Record the next frame request. Ignored once stopped.
    pub fn scheduled(&mut self, id: Option<i32>) {
        if self.running {
            self.pending = id;
        }
    }

    /// Stop the loop. Returns `None` if it was already stopped, otherwise the
    /// outstanding request id (if any) that the caller should cancel.
    pub fn stop(&mut self) -> Option<Option<i32>> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(self.pending.take())
    }
}
