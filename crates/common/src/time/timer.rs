//! Recurring timers
//!
//! Provides a periodic timer whose lifetime is controlled through an explicit
//! [`TimerHandle`]. A callback can end its own timer by returning
//! [`TickFlow::Break`], and any holder of the handle can cancel it.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::trace;

/// Result of one timer tick. `Break` stops the timer after this tick.
pub type TickFlow = ControlFlow<()>;

/// A timer handle that can be used to cancel a timer
#[derive(Debug, Clone)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
}

impl TimerHandle {
    /// Create a new timer handle
    fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            finished: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Cancel the timer. No callback runs after this returns.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check if the timer has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Check if the timer loop has exited, either by cancellation or because
    /// the callback asked to stop.
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    /// Whether the timer is still scheduled to fire.
    pub fn is_active(&self) -> bool {
        !self.is_cancelled() && !self.is_finished()
    }

    fn mark_finished(&self) {
        self.finished.store(true, Ordering::SeqCst);
    }
}

/// Create a recurring timer
///
/// The first callback runs one `period` after the call. The timer keeps
/// firing until the callback returns [`TickFlow::Break`] or the returned
/// handle is cancelled. Must be called from within a tokio runtime.
///
/// # Examples
///
/// ```no_run
/// use std::ops::ControlFlow;
/// use std::time::Duration;
///
/// use wellscope_common::time::timer::recurring;
///
/// #[tokio::main]
/// async fn main() {
///     let mut ticks = 0;
///     let handle = recurring(Duration::from_millis(16), move || {
///         ticks += 1;
///         if ticks == 10 {
///             ControlFlow::Break(())
///         } else {
///             ControlFlow::Continue(())
///         }
///     });
///
///     tokio::time::sleep(Duration::from_millis(50)).await;
///     handle.cancel();
/// }
/// ```
pub fn recurring<F>(period: Duration, mut callback: F) -> TimerHandle
where
    F: FnMut() -> TickFlow + Send + 'static,
{
    let handle = TimerHandle::new();
    let handle_clone = handle.clone();

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await; // Skip first immediate tick

        loop {
            interval.tick().await;
            if handle_clone.is_cancelled() {
                trace!("recurring timer cancelled");
                break;
            }
            if callback().is_break() {
                break;
            }
        }

        handle_clone.mark_finished();
    });

    handle
}
