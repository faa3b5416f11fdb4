//! Time-sliced numeric animation
//!
//! Interpolates a displayed number from a start value to a target value on a
//! fixed tick, writing each intermediate value rounded to one decimal place.
//! Each field has at most one running animation: starting a new one cancels
//! the previous timer on that field first.

use std::collections::HashMap;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, trace};
use wellscope_common::time::{recurring, TimerHandle};
use wellscope_domain::constants::ANIMATION_TICK_MS;

use crate::render::format::format_tenths;

/// A displayed number the animator can write to.
pub trait NumericField: Send + Sync {
    /// Identifies the field; animations on the same key supersede each other.
    fn field_key(&self) -> &'static str;

    /// Write the displayed text.
    fn write(&self, text: &str);
}

/// Drives numeric animations, one timer per field.
pub struct NumericAnimator {
    tick: Duration,
    active: Mutex<HashMap<&'static str, TimerHandle>>,
}

impl Default for NumericAnimator {
    fn default() -> Self {
        Self::new(Duration::from_millis(ANIMATION_TICK_MS))
    }
}

impl NumericAnimator {
    pub fn new(tick: Duration) -> Self {
        Self { tick: tick.max(Duration::from_millis(1)), active: Mutex::new(HashMap::new()) }
    }

    /// Animate `target` from `from` to `to` over `duration`.
    ///
    /// Each tick advances the value by `(to - from) / (duration / tick)`. Once
    /// the value reaches the target, the rounded target is written and the
    /// timer stops. When there is nothing to interpolate (`to <= from`, a
    /// duration shorter than one tick, or non-finite input) the rounded
    /// target is written at once and no timer is started.
    ///
    /// Returns the handle of the started timer, if any. Must be called from
    /// within a tokio runtime when a timer is started.
    pub fn animate(
        &self,
        target: Arc<dyn NumericField>,
        from: f64,
        to: f64,
        duration: Duration,
    ) -> Option<TimerHandle> {
        let key = target.field_key();
        let mut active = self.active.lock();

        if let Some(previous) = active.remove(key) {
            if previous.is_active() {
                debug!(field = key, "superseding running animation");
            }
            previous.cancel();
        }

        let final_text = format_tenths(to);
        let steps = duration.as_secs_f64() / self.tick.as_secs_f64();

        if !from.is_finite() || !to.is_finite() || to <= from || steps < 1.0 {
            trace!(field = key, from, to, "writing final value without animation");
            target.write(&final_text);
            return None;
        }

        let increment = (to - from) / steps;
        let mut current = from;
        let handle = recurring(self.tick, move || {
            current += increment;
            if current >= to {
                target.write(&final_text);
                ControlFlow::Break(())
            } else {
                target.write(&format_tenths(current));
                ControlFlow::Continue(())
            }
        });

        active.insert(key, handle.clone());
        Some(handle)
    }

    /// Stop the running animation on a field, leaving its last written value.
    pub fn cancel(&self, field_key: &str) {
        if let Some(handle) = self.active.lock().remove(field_key) {
            handle.cancel();
        }
    }

    /// Whether an animation is currently running on the field.
    pub fn is_animating(&self, field_key: &str) -> bool {
        self.active.lock().get(field_key).is_some_and(TimerHandle::is_active)
    }
}
