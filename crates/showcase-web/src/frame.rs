use crate::constants::OVERLAY_EPSILON;
use crate::dom;
use crate::render;
use crate::style;
use instant::Instant;
use showcase_core::{ModelMesh, OverlayState, SceneContext};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: SceneContext,
    pub canvas: web::HtmlCanvasElement,
    pub overlays: [Option<web::HtmlElement>; 2],
    pub gpu: Option<render::GpuState>,
    /// Parsed model waiting for the GPU to come up.
    pub pending_model: Option<ModelMesh>,
    pub last_instant: Instant,
    pub last_overlays: [OverlayState; 2],
    pub disposed: bool,
}

impl FrameContext {
    pub fn new(
        scene: SceneContext,
        canvas: web::HtmlCanvasElement,
        overlays: [Option<web::HtmlElement>; 2],
    ) -> Self {
        let initial = scene.state().overlays;
        for (el, state) in overlays.iter().zip(initial.iter()) {
            if let Some(el) = el {
                dom::apply_overlay(el, state);
            }
        }
        Self {
            scene,
            canvas,
            overlays,
            gpu: None,
            pending_model: None,
            last_instant: Instant::now(),
            last_overlays: initial,
            disposed: false,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Tween step: the only place scene state moves.
        self.scene.step(dt_sec);
        let state = self.scene.state();
        let target = self.scene.target_state();
        self.write_overlays(&state.overlays, &target.overlays);

        if let Some(g) = &mut self.gpu {
            if let Some(mesh) = self.pending_model.take() {
                g.upload_model(&mesh);
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&self.scene.uniforms()) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn write_overlays(&mut self, next: &[OverlayState; 2], target: &[OverlayState; 2]) {
        for i in 0..2 {
            let prev = self.last_overlays[i];
            let cur = next[i];
            let goal = target[i];
            if !style::overlay_needs_write(
                (prev.opacity, prev.offset.to_array()),
                (cur.opacity, cur.offset.to_array()),
                (goal.opacity, goal.offset.to_array()),
                OVERLAY_EPSILON,
            ) {
                continue;
            }
            if let Some(el) = &self.overlays[i] {
                dom::apply_overlay(el, &cur);
            }
            self.last_overlays[i] = cur;
        }
    }

    /// Drop GPU resources and anything still waiting to be uploaded.
    pub fn release(&mut self) {
        self.disposed = true;
        self.gpu = None;
        self.pending_model = None;
    }
}

/// requestAnimationFrame loop that can be cancelled.
pub struct RenderLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, raf_id: &Cell<Option<i32>>) {
    let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref().map(|c| c.as_ref().clone()))
    else {
        return;
    };
    match w.request_animation_frame(cb.unchecked_ref()) {
        Ok(id) => raf_id.set(Some(id)),
        Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
    }
}

impl RenderLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let raf_id = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let raf_clone = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_clone.set(None);
            {
                let mut ctx = frame_ctx.borrow_mut();
                if ctx.disposed {
                    return;
                }
                ctx.frame();
            }
            request_frame(&tick_clone, &raf_clone);
        }) as Box<dyn FnMut()>));
        request_frame(&tick, &raf_id);
        Self { tick, raf_id }
    }

    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to its own cell.
        self.tick.borrow_mut().take();
    }
}
