#![cfg(target_arch = "wasm32")]
//! Decorative effects for the portfolio page: one generic ephemeral particle
//! emitter, a preset table of parameterizations, pointer/scroll parallax, and
//! thin DOM event wiring. Nothing here may ever take the page down; every
//! failure is logged and swallowed.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod budget;
mod constants;
mod dom;
mod effects;
mod emitter;
mod events;
mod frame;
mod pacing;
mod parallax;
mod style;
mod trajectory;

use budget::Budgets;
use pacing::TrailGate;
use parallax::PointerParallax;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cosmic-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Constrained hardware gets lower particle caps, fixed at startup.
    let cores = window.navigator().hardware_concurrency() as u32;
    let low_end = Budgets::is_low_end(cores);
    let budgets = Rc::new(Budgets::with_profile(low_end));
    log::info!(
        "[init] cores={} caps: general={} ambient={}",
        cores,
        budgets.general.cap(),
        budgets.ambient.cap()
    );

    let wiring = events::EffectWiring {
        document: document.clone(),
        budgets,
        parallax: Rc::new(RefCell::new(PointerParallax::default())),
        trail_gate: Rc::new(RefCell::new(TrailGate::default())),
    };

    events::wire_error_trap();
    events::wire_input_handlers(&wiring);
    events::wire_scroll(&document);
    events::wire_cosmic_events(&wiring);
    events::seed_initial_effects(&wiring);

    // Per-frame tick for eased pointer parallax, paused while hidden.
    let frame_loop = frame::FrameLoop::new(frame::FrameContext {
        document: document.clone(),
        parallax: wiring.parallax.clone(),
        last_ms: js_sys::Date::now(),
    });
    events::wire_visibility(&document, frame_loop.clone());
    frame_loop.start();

    log::info!("cosmic-fx initialized");
    Ok(())
}
