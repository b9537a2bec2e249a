use glam::Vec2;

use crate::constants::{
    FLOAT_SCROLL_BASE, FLOAT_SCROLL_STEP, NEBULA_POINTER_FACTOR, NEBULA_SCROLL_SCALE_PER_PX,
    POINTER_PARALLAX_SCALE,
};

/// Pointer-driven offset for a floating layer: displacement from the viewport
/// center, scaled by the layer's speed.
#[inline]
pub fn pointer_offset(cursor: Vec2, viewport: Vec2, speed: f32) -> Vec2 {
    (cursor - viewport * 0.5) * speed * POINTER_PARALLAX_SCALE
}

/// The nebula follows the pointer much more slowly than the floating objects.
#[inline]
pub fn nebula_pointer_offset(cursor: Vec2, viewport: Vec2) -> Vec2 {
    (cursor - viewport * 0.5) * NEBULA_POINTER_FACTOR
}

/// Vertical offset of a scroll-parallaxed layer.
#[inline]
pub fn scroll_offset(scroll_y: f32, factor: f32) -> f32 {
    scroll_y * factor
}

/// The nebula also grows slightly as the page scrolls.
#[inline]
pub fn nebula_scroll_scale(scroll_y: f32) -> f32 {
    1.0 + scroll_y * NEBULA_SCROLL_SCALE_PER_PX
}

/// Scroll factor for the i-th floating object; deeper objects move faster.
#[inline]
pub fn float_scroll_factor(index: usize) -> f32 {
    FLOAT_SCROLL_BASE + index as f32 * FLOAT_SCROLL_STEP
}

/// Exponential approach of `current` toward `target` with time constant
/// `tau` seconds. Frame-rate independent; used by the per-frame tick to
/// smooth pointer parallax.
#[inline]
pub fn ease_toward(current: Vec2, target: Vec2, dt_sec: f32, tau_sec: f32) -> Vec2 {
    if tau_sec <= 0.0 {
        return target;
    }
    let alpha = 1.0 - (-dt_sec / tau_sec).exp();
    current + (target - current) * alpha
}

/// Smoothed pointer-parallax state shared between the mousemove handler
/// (writes targets) and the frame tick (eases and applies).
#[derive(Default)]
pub struct PointerParallax {
    /// Raw cursor position in viewport px; None until first move.
    pub cursor: Option<Vec2>,
    /// Eased normalized offset, speed factor applied per element on read.
    pub eased: Vec2,
}

impl PointerParallax {
    /// Advance the eased offset toward the current cursor target.
    pub fn step(&mut self, viewport: Vec2, dt_sec: f32, tau_sec: f32) {
        let Some(cursor) = self.cursor else { return };
        // Ease the unit-speed offset; per-layer speed scales it on apply.
        let target = pointer_offset(cursor, viewport, 1.0);
        self.eased = ease_toward(self.eased, target, dt_sec, tau_sec);
    }

    /// Offset for a layer of the given speed.
    #[inline]
    pub fn layer_offset(&self, speed: f32) -> Vec2 {
        self.eased * speed
    }
}
