use anyhow::anyhow;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::budget::{Budgets, Pool};
use crate::dom;
use crate::effects::EffectSpec;
use crate::trajectory::{scatter, spawn_delay};

/// Run one parameterization of the ephemeral particle emitter.
///
/// Each particle index is scheduled at `index * stagger_ms`; at spawn time the
/// pool budget is checked (skip silently at cap), the element is created and
/// animated from full intensity at the origin to zero intensity at its
/// trajectory destination, and a single settle continuation removes it and
/// returns the budget slot. Errors are logged and swallowed; a cosmetic
/// failure never aborts other effects.
pub fn emit(document: &web::Document, origin: Vec2, spec: &EffectSpec, budgets: &Rc<Budgets>) {
    for index in 0..spec.count {
        let delay = spawn_delay(index, spec.stagger_ms);
        if delay <= 0.0 {
            spawn_checked(document, origin, spec, budgets, index);
            continue;
        }
        let document = document.clone();
        let spec = *spec;
        let budgets = budgets.clone();
        dom::set_timeout(delay as i32, move || {
            spawn_checked(&document, origin, &spec, &budgets, index);
        });
    }
}

fn spawn_checked(
    document: &web::Document,
    origin: Vec2,
    spec: &EffectSpec,
    budgets: &Rc<Budgets>,
    index: usize,
) {
    if let Err(e) = spawn_one(document, origin, spec, budgets, index) {
        log::error!("[emit] {} particle {} failed: {:?}", spec.name, index, e);
    }
}

fn spawn_one(
    document: &web::Document,
    origin: Vec2,
    spec: &EffectSpec,
    budgets: &Rc<Budgets>,
    index: usize,
) -> anyhow::Result<()> {
    if let Some(budget) = budgets.for_pool(spec.pool) {
        if !budget.try_acquire() {
            return Ok(());
        }
    }
    // The slot is ours; any failure below must give it back.
    let result = spawn_acquired(document, origin, spec, budgets, index);
    if result.is_err() {
        if let Some(budget) = budgets.for_pool(spec.pool) {
            budget.release();
        }
    }
    result
}

fn spawn_acquired(
    document: &web::Document,
    origin: Vec2,
    spec: &EffectSpec,
    budgets: &Rc<Budgets>,
    index: usize,
) -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let pos = origin + spec.origin_nudge + scatter(spec.origin_jitter, &mut rng);

    let el = document
        .create_element("div")
        .map_err(|e| anyhow!("create: {:?}", e))?;
    if let Some(class) = spec.appearance.class() {
        el.set_class_name(class);
    }
    el.set_attribute("style", &spec.appearance.inline_style(pos, index, &mut rng))
        .map_err(|e| anyhow!("style: {:?}", e))?;
    if let Some(text) = spec.appearance.content(index, &mut rng) {
        el.set_text_content(Some(text));
    }

    let parent = dom::container_or_body(document, spec.container_id)
        .ok_or_else(|| anyhow!("no container or body"))?;
    parent
        .append_child(&el)
        .map_err(|e| anyhow!("append: {:?}", e))?;

    if spec.appearance.css_driven() {
        // Page CSS animates these; a timer is the settle continuation.
        settle_after(el, spec.pool, budgets.clone(), spec.duration_ms);
        return Ok(());
    }

    let dest = spec
        .trajectory
        .destination(index, spec.count, &mut rng);
    let anim = animate_flight(&el, spec, dest)?;
    settle_on_finish(&anim, el, spec.pool, budgets.clone());
    Ok(())
}

/// Start the Web Animations API flight and return the animation handle.
fn animate_flight(
    el: &web::Element,
    spec: &EffectSpec,
    dest: Vec2,
) -> anyhow::Result<web::Animation> {
    let (from, to) = spec.appearance.flight_transforms(dest);

    // Property-indexed keyframes: { transform: [from, to], opacity: [a, 0] }.
    let frames = js_sys::Object::new();
    let transforms = js_sys::Array::of2(&JsValue::from_str(&from), &JsValue::from_str(&to));
    js_sys::Reflect::set(&frames, &JsValue::from_str("transform"), &transforms)
        .map_err(|e| anyhow!("keyframes: {:?}", e))?;
    let opacities = js_sys::Array::of2(
        &JsValue::from_f64(spec.appearance.start_opacity()),
        &JsValue::from_f64(0.0),
    );
    js_sys::Reflect::set(&frames, &JsValue::from_str("opacity"), &opacities)
        .map_err(|e| anyhow!("keyframes: {:?}", e))?;

    let opts = web::KeyframeAnimationOptions::new();
    opts.set_duration(&JsValue::from_f64(spec.duration_ms));
    opts.set_easing(spec.easing);

    Ok(el.animate_with_keyframe_animation_options(Some(&frames), &opts))
}

/// Settle via `onfinish`: remove the element and release the slot exactly
/// once, even if the host fires the callback more than once.
fn settle_on_finish(anim: &web::Animation, el: web::Element, pool: Pool, budgets: Rc<Budgets>) {
    let mut slot = Some((el, pool, budgets));
    let closure = Closure::wrap(Box::new(move || {
        if let Some((el, pool, budgets)) = slot.take() {
            el.remove();
            if let Some(budget) = budgets.for_pool(pool) {
                budget.release();
            }
        }
    }) as Box<dyn FnMut()>);
    anim.set_onfinish(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
}

/// Settle via timer, for particles whose motion lives in the page stylesheet.
fn settle_after(el: web::Element, pool: Pool, budgets: Rc<Budgets>, delay_ms: f64) {
    dom::set_timeout(delay_ms as i32, move || {
        el.remove();
        if let Some(budget) = budgets.for_pool(pool) {
            budget.release();
        }
    });
}
