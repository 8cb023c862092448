/// FixedFrameScheduler - deterministic frame scheduling for tests

use nebula_gl::renderer::FrameScheduler;

/// Scheduler that delivers a fixed number of 60 Hz frame ticks, then reports
/// host teardown
///
/// Timestamps start at 0 and advance by one frame interval per tick, so a
/// loop driven by this scheduler is fully deterministic.
pub struct FixedFrameScheduler {
    remaining: u32,
    now_ms: f64,
    interval_ms: f64,
}

impl FixedFrameScheduler {
    /// Scheduler that ticks `frame_count` times
    pub fn new(frame_count: u32) -> Self {
        Self {
            remaining: frame_count,
            now_ms: 0.0,
            interval_ms: 1000.0 / 60.0,
        }
    }
}

impl FrameScheduler for FixedFrameScheduler {
    fn wait_for_frame(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let timestamp = self.now_ms;
        self.now_ms += self.interval_ms;
        Some(timestamp)
    }
}
