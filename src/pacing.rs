use std::cell::Cell;

use crate::constants::{TRAIL_MIN_INTERVAL_MS, TRAIL_SPAWN_THRESHOLD};

/// Opportunistic rate limiter for cursor-trail spawns.
///
/// A spawn is allowed only when more than `TRAIL_MIN_INTERVAL_MS` has passed
/// since the last accepted spawn AND the caller's uniform draw exceeds the
/// threshold. Fast mouse movement therefore never floods the page.
pub struct TrailGate {
    last_ms: f64,
}

impl Default for TrailGate {
    fn default() -> Self {
        Self { last_ms: f64::MIN }
    }
}

impl TrailGate {
    /// `now_ms` is a monotonic-enough millisecond clock (Date.now is fine for
    /// a 100ms window); `draw` is uniform in [0, 1).
    pub fn should_spawn(&mut self, now_ms: f64, draw: f64) -> bool {
        if now_ms - self.last_ms <= TRAIL_MIN_INTERVAL_MS {
            return false;
        }
        if draw <= TRAIL_SPAWN_THRESHOLD {
            return false;
        }
        self.last_ms = now_ms;
        true
    }
}

/// Guards the per-frame tick so visibility flapping can never stack a second
/// animation loop on top of a running one.
#[derive(Default)]
pub struct FrameGate {
    running: Cell<bool>,
}

impl FrameGate {
    /// Returns true if the caller should start the loop now.
    pub fn try_start(&self) -> bool {
        if self.running.get() {
            return false;
        }
        self.running.set(true);
        true
    }

    /// Returns true if a running loop was stopped.
    pub fn stop(&self) -> bool {
        let was = self.running.get();
        self.running.set(false);
        was
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}
