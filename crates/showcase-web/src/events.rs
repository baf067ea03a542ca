use crate::dom;
use crate::frame::FrameContext;
use showcase_core::{normalize_wheel_delta, WheelDeltaMode};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

/// Registered DOM listeners; all are removed on [`Listeners::remove_all`] or drop.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(web::EventTarget, &'static str, Handler)>,
}

impl Listeners {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<()> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        self.entries.push((target.clone(), event, closure));
        Ok(())
    }

    pub fn remove_all(&mut self) {
        for (target, event, closure) in self.entries.drain(..) {
            _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.remove_all();
    }
}

pub fn wire_wheel(
    listeners: &mut Listeners,
    window: &web::Window,
    ctx: Rc<RefCell<FrameContext>>,
) -> anyhow::Result<()> {
    listeners.add(window, "wheel", move |ev: web::Event| {
        let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        let (_, page_px) = dom::viewport_size();
        let delta = normalize_wheel_delta(
            wheel.delta_y() as f32,
            WheelDeltaMode::from_dom(wheel.delta_mode()),
            page_px as f32,
        );
        let mut c = ctx.borrow_mut();
        if c.disposed {
            return;
        }
        c.scene.handle_wheel(delta);
        log::debug!("[wheel] delta={:.1} progress={:.3}", delta, c.scene.progress());
    })
}

pub fn wire_resize(
    listeners: &mut Listeners,
    window: &web::Window,
    ctx: Rc<RefCell<FrameContext>>,
) -> anyhow::Result<()> {
    listeners.add(window, "resize", move |_ev: web::Event| {
        let mut c = ctx.borrow_mut();
        if c.disposed {
            return;
        }
        let (w, h) = dom::sync_canvas_to_viewport(&c.canvas);
        c.scene.resize(w as f32, h as f32);
    })
}
