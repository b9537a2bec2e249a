use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::EffectWiring;
use crate::constants::{
    COSMIC_INTERVAL_MS, INITIAL_TRAIL_COUNT, INITIAL_TRAIL_STAGGER_MS, MOVING_STARS_SCROLL_FACTOR,
    NEBULA_SCROLL_FACTOR, STARS_SCROLL_FACTOR,
};
use crate::dom;
use crate::effects::{
    ambient_leaves, cosmic_pick, CosmicEvent, MINI_BURST, SOUND_WAVE, TRAIL_PARTICLE,
    WELCOME_BURST,
};
use crate::emitter;
use crate::frame::FrameLoop;
use crate::parallax;
use crate::trajectory::spawn_delay;

/// Scroll parallax: background layers translate at different fractions of the
/// scroll offset, the nebula also grows slightly. Applied directly from the
/// scroll handler; only pointer parallax goes through the eased frame tick.
pub fn wire_scroll(document: &web::Document) {
    let document = document.clone();
    dom::listen_window("scroll", move || {
        let Some(window) = web::window() else { return };
        let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;

        translate_layer(&document, ".stars", parallax::scroll_offset(scroll_y, STARS_SCROLL_FACTOR));
        translate_layer(
            &document,
            ".moving-stars",
            parallax::scroll_offset(scroll_y, MOVING_STARS_SCROLL_FACTOR),
        );
        if let Ok(Some(nebula)) = document.query_selector(".nebula") {
            if let Some(html) = nebula.dyn_ref::<web::HtmlElement>() {
                let y = parallax::scroll_offset(scroll_y, NEBULA_SCROLL_FACTOR);
                let scale = parallax::nebula_scroll_scale(scroll_y);
                _ = html
                    .style()
                    .set_property("transform", &format!("translateY({y}px) scale({scale})"));
            }
        }
        if let Ok(nodes) = document.query_selector_all(".floating-object") {
            for i in 0..nodes.length() {
                let Some(node) = nodes.get(i) else { continue };
                let Ok(el) = node.dyn_into::<web::Element>() else {
                    continue;
                };
                let y = parallax::scroll_offset(scroll_y, parallax::float_scroll_factor(i as usize));
                dom::set_translate(&el, Vec2::new(0.0, y));
            }
        }
    });
}

fn translate_layer(document: &web::Document, selector: &str, y: f32) {
    if let Ok(Some(el)) = document.query_selector(selector) {
        dom::set_translate(&el, Vec2::new(0.0, y));
    }
}

/// Pause the frame tick while the page is hidden; resume on show. The loop's
/// gate makes resume idempotent, so event flapping cannot double the loop.
pub fn wire_visibility(document: &web::Document, frame_loop: Rc<FrameLoop>) {
    let doc = document.clone();
    dom::listen_document_bare(document, "visibilitychange", move || {
        if doc.hidden() {
            frame_loop.stop();
        } else {
            frame_loop.start();
        }
    });
}

/// Log uncaught errors and keep going; a cosmetic page never crashes.
pub fn wire_error_trap() {
    if let Some(window) = web::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::ErrorEvent| {
            log::error!("[page] uncaught error: {}", ev.message());
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Every few seconds, roll for a low-probability cosmic event somewhere on
/// screen, picked uniformly among four presets.
pub fn wire_cosmic_events(w: &EffectWiring) {
    let w = w.clone();
    dom::set_interval(COSMIC_INTERVAL_MS, move || {
        let Some(event) = cosmic_pick(js_sys::Math::random(), js_sys::Math::random()) else {
            return;
        };
        let viewport = dom::viewport_size();
        let origin = Vec2::new(
            js_sys::Math::random() as f32 * viewport.x,
            js_sys::Math::random() as f32 * viewport.y,
        );
        let spec = match event {
            CosmicEvent::Trail => TRAIL_PARTICLE,
            CosmicEvent::AmbientLeaves => ambient_leaves(2),
            CosmicEvent::SoundWave => SOUND_WAVE,
            CosmicEvent::MiniBurst => MINI_BURST,
        };
        emitter::emit(&w.document, origin, &spec, &w.budgets);
        log::info!("[cosmic] random event: {}", spec.name);
    });
}

/// Startup seeding: a handful of trail motes at random positions, then a
/// welcome burst at the viewport center.
pub fn seed_initial_effects(w: &EffectWiring) {
    for i in 0..INITIAL_TRAIL_COUNT {
        let w = w.clone();
        dom::set_timeout(spawn_delay(i, INITIAL_TRAIL_STAGGER_MS) as i32, move || {
            let viewport = dom::viewport_size();
            let origin = Vec2::new(
                js_sys::Math::random() as f32 * viewport.x,
                js_sys::Math::random() as f32 * viewport.y,
            );
            emitter::emit(&w.document, origin, &TRAIL_PARTICLE, &w.budgets);
        });
    }

    let viewport = dom::viewport_size();
    emitter::emit(
        &w.document,
        viewport * 0.5,
        &WELCOME_BURST,
        &w.budgets,
    );
}
