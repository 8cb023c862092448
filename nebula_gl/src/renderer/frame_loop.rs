/// Cancellable per-display-frame callback loop
///
/// The host's frame-scheduling primitive stays behind [`FrameScheduler`];
/// the loop itself is explicit and stops deterministically through a
/// [`CancellationToken`] held by the caller, or when the scheduler reports
/// the host is gone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Host frame-scheduling primitive
///
/// One call per display refresh: blocks until the next refresh and returns
/// its timestamp in milliseconds, or `None` once the host environment has
/// been torn down.
pub trait FrameScheduler {
    /// Wait for the next display refresh
    fn wait_for_frame(&mut self) -> Option<f64>;
}

/// Externally held stop switch for [`run_loop`]
///
/// Clones share the same flag, so the caller can keep one clone and hand
/// another to whatever decides when to stop.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Fresh, un-cancelled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop before its next iteration
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Run `callback` once per scheduled frame until cancelled
///
/// The callback runs to completion each frame before the next wait; there is
/// no re-entrancy and no double invocation. The token is checked before each
/// wait, so cancelling from inside the callback stops the loop with no
/// further calls.
pub fn run_loop<S, F>(scheduler: &mut S, token: &CancellationToken, mut callback: F)
where
    S: FrameScheduler + ?Sized,
    F: FnMut(f64),
{
    while !token.is_cancelled() {
        let Some(timestamp) = scheduler.wait_for_frame() else {
            break;
        };
        callback(timestamp);
    }
}
