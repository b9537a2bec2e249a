use glam::Vec2;
use rand::Rng;

/// A distance sampled as `base + draw * spread`, draw uniform in [0, 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jitter {
    pub base: f32,
    pub spread: f32,
}

impl Jitter {
    pub const fn fixed(base: f32) -> Self {
        Self { base, spread: 0.0 }
    }

    #[inline]
    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        if self.spread == 0.0 {
            return self.base;
        }
        self.base + rng.gen::<f32>() * self.spread
    }
}

/// Rule mapping a particle index to a destination offset from its origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trajectory {
    /// `count` particles evenly spaced around a circle: angle `2π·i/count`.
    RadialUniform { distance: Jitter },
    /// Random angle in [0, 2π), jittered distance.
    RadialRandom { distance: Jitter },
    /// Destination equals origin; motion (if any) comes from page CSS.
    Hold,
}

impl Trajectory {
    /// Destination offset for particle `index` of a burst of `count`.
    pub fn destination(&self, index: usize, count: usize, rng: &mut impl Rng) -> Vec2 {
        match self {
            Trajectory::RadialUniform { distance } => {
                let angle = std::f32::consts::TAU * index as f32 / count.max(1) as f32;
                polar(angle, distance.sample(rng))
            }
            Trajectory::RadialRandom { distance } => {
                let angle = rng.gen::<f32>() * std::f32::consts::TAU;
                polar(angle, distance.sample(rng))
            }
            Trajectory::Hold => Vec2::ZERO,
        }
    }
}

#[inline]
fn polar(angle: f32, distance: f32) -> Vec2 {
    Vec2::new(angle.cos() * distance, angle.sin() * distance)
}

/// Uniform origin jitter in `[-spread/2, +spread/2]` per axis.
pub fn scatter(spread: Vec2, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * spread.x,
        (rng.gen::<f32>() - 0.5) * spread.y,
    )
}

/// Spawn delay for particle `index` of a staggered burst.
#[inline]
pub fn spawn_delay(index: usize, stagger_ms: f64) -> f64 {
    index as f64 * stagger_ms
}

/// Time from first to last spawn of a burst (12 x 50ms stagger -> 550ms).
#[inline]
pub fn burst_window(count: usize, stagger_ms: f64) -> f64 {
    spawn_delay(count.saturating_sub(1), stagger_ms)
}
