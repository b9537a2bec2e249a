use std::cell::Cell;

use crate::constants::{
    LOW_END_CORES, LOW_END_MAX_AMBIENT_PARTICLES, LOW_END_MAX_PARTICLES, MAX_AMBIENT_PARTICLES,
    MAX_PARTICLES,
};

/// Capped counter of concurrently live particles in one pool.
///
/// Single-threaded by construction: the UI thread is the only mutator, so a
/// `Cell` suffices. The cap is fixed at construction; lowering caps for weak
/// hardware is done by building a different profile, never by mutation.
pub struct Budget {
    live: Cell<usize>,
    cap: usize,
}

impl Budget {
    pub fn new(cap: usize) -> Self {
        Self {
            live: Cell::new(0),
            cap,
        }
    }

    /// Claim one slot. Returns false (and changes nothing) at cap.
    pub fn try_acquire(&self) -> bool {
        let live = self.live.get();
        if live >= self.cap {
            return false;
        }
        self.live.set(live + 1);
        true
    }

    /// Return a slot. Saturates at zero so a stray double-settle cannot
    /// underflow the counter.
    pub fn release(&self) {
        let live = self.live.get();
        self.live.set(live.saturating_sub(1));
    }

    #[inline]
    pub fn live(&self) -> usize {
        self.live.get()
    }

    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }
}

/// Which pool a particle counts against.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Pool {
    /// Cursor-trail and other general decorative particles.
    General,
    /// Ambient glyph particles (the drifting leaves).
    Ambient,
    /// Short bursts that are bounded by their own count and never tracked.
    Unbudgeted,
}

/// The two process-wide pools.
pub struct Budgets {
    pub general: Budget,
    pub ambient: Budget,
}

impl Budgets {
    /// Build pools for the given hardware class.
    pub fn with_profile(low_end: bool) -> Self {
        let (general, ambient) = if low_end {
            (LOW_END_MAX_PARTICLES, LOW_END_MAX_AMBIENT_PARTICLES)
        } else {
            (MAX_PARTICLES, MAX_AMBIENT_PARTICLES)
        };
        Self {
            general: Budget::new(general),
            ambient: Budget::new(ambient),
        }
    }

    /// `navigator.hardwareConcurrency` maps to a profile here.
    pub fn is_low_end(cores: u32) -> bool {
        cores <= LOW_END_CORES
    }

    /// The budget backing a pool, if the pool is tracked at all.
    pub fn for_pool(&self, pool: Pool) -> Option<&Budget> {
        match pool {
            Pool::General => Some(&self.general),
            Pool::Ambient => Some(&self.ambient),
            Pool::Unbudgeted => None,
        }
    }
}
