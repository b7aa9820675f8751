/// Defers work to the next animation frame.
///
/// After `request_frame`, the host must call [`crate::Packer::run_frame`]
/// once on its next frame tick.
pub trait FrameScheduler {
    /// Ask for one frame callback.
    fn request_frame(&mut self);
}

/// Scheduler that only counts requests; the caller drives frames by hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualScheduler {
    requested: u64,
    pending: bool,
}

impl ManualScheduler {
    /// Fresh scheduler with nothing requested.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of frame requests received.
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Whether a requested frame has not been taken yet.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending frame, returning whether there was one.
    pub fn take_frame(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.requested += 1;
        self.pending = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pack/schedule.rs"]
mod tests;
