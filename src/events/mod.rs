mod elements;
mod page;
mod pointer;

use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::budget::Budgets;
use crate::pacing::TrailGate;
use crate::parallax::PointerParallax;

pub use page::{seed_initial_effects, wire_cosmic_events, wire_error_trap, wire_scroll, wire_visibility};

/// Everything the event handlers share. Cheap to clone; all state is behind
/// `Rc`, all of it touched only from the UI thread.
#[derive(Clone)]
pub struct EffectWiring {
    pub document: web::Document,
    pub budgets: Rc<Budgets>,
    pub parallax: Rc<RefCell<PointerParallax>>,
    pub trail_gate: Rc<RefCell<TrailGate>>,
}

pub fn wire_input_handlers(w: &EffectWiring) {
    pointer::wire_mousemove(w);
    pointer::wire_document_click(w);
    elements::wire_element_effects(w);
}
