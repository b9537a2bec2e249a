use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{DEFAULT_FLOAT_SPEED, NEBULA_POINTER_FACTOR, POINTER_EASE_TAU_SEC, POINTER_PARALLAX_SCALE};
use crate::dom;
use crate::pacing::FrameGate;
use crate::parallax::PointerParallax;

/// State advanced once per animation frame: eased pointer parallax applied to
/// the floating background layers.
pub struct FrameContext {
    pub document: web::Document,
    pub parallax: Rc<RefCell<PointerParallax>>,
    pub last_ms: f64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = js_sys::Date::now();
        // Clamp dt so a background tab resume does not snap the easing.
        let dt_sec = (((now - self.last_ms) / 1000.0) as f32).clamp(0.0, 0.1);
        self.last_ms = now;

        let viewport = dom::viewport_size();
        let parallax = {
            let mut p = self.parallax.borrow_mut();
            p.step(viewport, dt_sec, POINTER_EASE_TAU_SEC);
            p.eased
        };
        if parallax == glam::Vec2::ZERO {
            return;
        }

        if let Ok(nodes) = self.document.query_selector_all(".floating-object") {
            for i in 0..nodes.length() {
                let Some(node) = nodes.get(i) else { continue };
                let Ok(el) = node.dyn_into::<web::Element>() else {
                    continue;
                };
                let speed = dom::data_speed(&el, DEFAULT_FLOAT_SPEED);
                dom::set_translate(&el, parallax * speed);
            }
        }
        if let Ok(Some(nebula)) = self.document.query_selector(".nebula") {
            let nebula_speed = NEBULA_POINTER_FACTOR / POINTER_PARALLAX_SCALE;
            dom::set_translate(&nebula, parallax * nebula_speed);
        }
    }
}

/// The cancelable per-frame tick. `start` is idempotent while running, so a
/// burst of visibilitychange events can never stack loops.
pub struct FrameLoop {
    gate: FrameGate,
    ctx: Rc<RefCell<FrameContext>>,
    raf_id: Cell<i32>,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Rc<Self> {
        Rc::new(Self {
            gate: FrameGate::default(),
            ctx: Rc::new(RefCell::new(ctx)),
            raf_id: Cell::new(0),
        })
    }

    pub fn start(self: &Rc<Self>) {
        if !self.gate.try_start() {
            return;
        }
        self.ctx.borrow_mut().last_ms = js_sys::Date::now();

        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let this = self.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !this.gate.is_running() {
                return;
            }
            this.ctx.borrow_mut().frame();
            if let Some(w) = web::window() {
                if let Ok(id) = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .expect("tick closure set before first frame")
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    this.raf_id.set(id);
                }
            }
        }) as Box<dyn FnMut()>));
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick.borrow()
                    .as_ref()
                    .expect("tick closure just set")
                    .as_ref()
                    .unchecked_ref(),
            ) {
                self.raf_id.set(id);
            }
        }
    }

    pub fn stop(&self) {
        if !self.gate.stop() {
            return;
        }
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.raf_id.get());
        }
    }
}
