use glam::Vec2;
use web_sys as web;

use super::EffectWiring;
use crate::dom;
use crate::effects::{CLICK_RIPPLE, TRAIL_PARTICLE};
use crate::emitter;

#[inline]
pub(super) fn event_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Mouse movement feeds the parallax target and, rate-limited, the cursor
/// trail. The gate keeps trail spawns at least 100ms apart no matter how
/// fast the pointer moves.
pub fn wire_mousemove(w: &EffectWiring) {
    let w = w.clone();
    dom::listen_document(&w.document.clone(), "mousemove", move |ev| {
        let pos = event_pos(ev);
        w.parallax.borrow_mut().cursor = Some(pos);

        let now = js_sys::Date::now();
        let draw = js_sys::Math::random();
        if w.trail_gate.borrow_mut().should_spawn(now, draw) {
            emitter::emit(&w.document, pos, &TRAIL_PARTICLE, &w.budgets);
        }
    });
}

/// Every page click leaves a small ripple at the pointer.
pub fn wire_document_click(w: &EffectWiring) {
    let w = w.clone();
    dom::listen_document(&w.document.clone(), "click", move |ev| {
        emitter::emit(&w.document, event_pos(ev), &CLICK_RIPPLE, &w.budgets);
    });
}
