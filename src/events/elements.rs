use wasm_bindgen::JsCast;
use web_sys as web;

use super::pointer::event_pos;
use super::EffectWiring;
use crate::constants::{ALIEN_PULSE_MS, AVATAR_PULSE_MS};
use crate::dom;
use crate::effects::{
    ambient_leaves, footer_burst, ALIEN_EXPLOSION, ALIEN_HOVER_GLOW, AVATAR_GLOW, COSMIC_BURST,
    GALLERY_RING, NAV_BURST, SOCIAL_ICONS, SOUND_WAVE, STAT_SPARKS,
};
use crate::emitter;

/// Map each interactive page element to its emitter parameterization.
/// No decision logic lives here beyond "this element, this preset".
pub fn wire_element_effects(w: &EffectWiring) {
    wire_aliens(w);
    wire_avatar(w);
    wire_nav_links(w);
    wire_gallery(w);
    wire_social_links(w);
    wire_stats(w);
    wire_footer_aliens(w);
}

fn wire_aliens(w: &EffectWiring) {
    let wc = w.clone();
    dom::listen_each(&w.document, ".alien-character", "click", move |el, index, ev| {
        pulse_class(el, "clicked", ALIEN_PULSE_MS);
        let pos = event_pos(ev);
        emitter::emit(&wc.document, pos, &ALIEN_EXPLOSION, &wc.budgets);
        emitter::emit(&wc.document, pos, &ambient_leaves(5), &wc.budgets);
        emitter::emit(&wc.document, pos, &SOUND_WAVE, &wc.budgets);
        log::info!("[alien] character {} activated", index + 1);
    });

    let wc = w.clone();
    dom::listen_each(&w.document, ".alien-character", "mouseenter", move |el, _, _| {
        emitter::emit(
            &wc.document,
            dom::element_center(el),
            &ALIEN_HOVER_GLOW,
            &wc.budgets,
        );
    });
}

fn wire_avatar(w: &EffectWiring) {
    let wc = w.clone();
    dom::listen_each(&w.document, "#alienAvatar", "click", move |el, _, _| {
        pulse_scale(el, 1.2, AVATAR_PULSE_MS);
        let center = dom::element_center(el);
        emitter::emit(&wc.document, center, &COSMIC_BURST, &wc.budgets);
        emitter::emit(&wc.document, center, &ambient_leaves(8), &wc.budgets);
        log::info!("[avatar] activated");
    });

    let wc = w.clone();
    dom::listen_each(&w.document, "#alienAvatar", "mouseenter", move |el, _, _| {
        emitter::emit(&wc.document, dom::element_center(el), &AVATAR_GLOW, &wc.budgets);
    });
}

fn wire_nav_links(w: &EffectWiring) {
    let wc = w.clone();
    dom::listen_each(&w.document, ".nav-link", "click", move |_, _, ev| {
        emitter::emit(&wc.document, event_pos(ev), &NAV_BURST, &wc.budgets);
    });
}

fn wire_gallery(w: &EffectWiring) {
    let wc = w.clone();
    dom::listen_each(&w.document, ".gallery-item", "click", move |el, _, _| {
        emitter::emit(&wc.document, dom::element_center(el), &GALLERY_RING, &wc.budgets);
    });
}

fn wire_social_links(w: &EffectWiring) {
    let wc = w.clone();
    dom::listen_each(&w.document, ".social-link", "click", move |_, _, ev| {
        emitter::emit(&wc.document, event_pos(ev), &SOCIAL_ICONS, &wc.budgets);
    });
}

fn wire_stats(w: &EffectWiring) {
    let wc = w.clone();
    dom::listen_each(&w.document, ".stat-item", "mouseenter", move |el, _, _| {
        emitter::emit(&wc.document, dom::element_center(el), &STAT_SPARKS, &wc.budgets);
    });
}

fn wire_footer_aliens(w: &EffectWiring) {
    let wc = w.clone();
    dom::listen_each(&w.document, ".footer-alien", "click", move |_, index, ev| {
        let pos = event_pos(ev);
        emitter::emit(&wc.document, pos, &footer_burst(index), &wc.budgets);
        emitter::emit(&wc.document, pos, &ambient_leaves(3), &wc.budgets);
        log::info!("[footer] alien {} opened a portal", index + 1);
    });
}

/// Add a class for `duration_ms` (the "clicked" wobble the stylesheet owns).
fn pulse_class(el: &web::Element, class: &str, duration_ms: i32) {
    _ = el.class_list().add_1(class);
    let el = el.clone();
    let class = class.to_string();
    dom::set_timeout(duration_ms, move || {
        _ = el.class_list().remove_1(&class);
    });
}

/// Briefly scale an element up, then restore it.
fn pulse_scale(el: &web::Element, scale: f32, duration_ms: i32) {
    let Some(html) = el.dyn_ref::<web::HtmlElement>() else {
        return;
    };
    _ = html
        .style()
        .set_property("transform", &format!("scale({scale})"));
    let html = html.clone();
    dom::set_timeout(duration_ms, move || {
        _ = html.style().set_property("transform", "scale(1)");
    });
}
