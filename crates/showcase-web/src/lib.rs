#![cfg(target_arch = "wasm32")]
use showcase_core::{MapperParams, SceneContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod loader;
mod render;
mod style;

use constants::{CONTAINER_ID, MODEL_URL, OVERLAY_IDS};
use frame::{FrameContext, RenderLoop};

/// A mounted showcase: canvas, listeners, render loop and GPU state.
struct Showcase {
    ctx: Rc<RefCell<FrameContext>>,
    listeners: events::Listeners,
    render_loop: RenderLoop,
}

thread_local! {
    static MOUNTED: RefCell<Option<Showcase>> = const { RefCell::new(None) };
}

impl Showcase {
    fn mount(container_id: &str) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;

        let canvas = dom::create_canvas(&document, &container)?;
        let (css_w, css_h) = dom::viewport_size();
        let scene = SceneContext::new(MapperParams::default(), css_w as f32, css_h as f32);
        let clear = scene.lighting.clear_color;
        let overlays = [
            dom::find_overlay(&document, OVERLAY_IDS[0]),
            dom::find_overlay(&document, OVERLAY_IDS[1]),
        ];
        let ctx = Rc::new(RefCell::new(FrameContext::new(
            scene,
            canvas.clone(),
            overlays,
        )));

        let mut listeners = events::Listeners::default();
        events::wire_wheel(&mut listeners, &window, ctx.clone())?;
        events::wire_resize(&mut listeners, &window, ctx.clone())?;
        log::info!("[mount] {} listeners on #{}", listeners.len(), container_id);

        // GPU and asset come up independently; the frame loop uploads once both exist.
        let ctx_gpu = ctx.clone();
        spawn_local(async move {
            match render::GpuState::new(canvas, clear).await {
                Ok(g) => {
                    let mut c = ctx_gpu.borrow_mut();
                    if !c.disposed {
                        c.gpu = Some(g);
                    }
                }
                Err(e) => log::error!("[gpu] WebGPU init error: {:?}", e),
            }
        });
        let ctx_asset = ctx.clone();
        spawn_local(async move {
            match loader::load_model(MODEL_URL).await {
                Ok(mesh) => {
                    let mut c = ctx_asset.borrow_mut();
                    if !c.disposed {
                        c.pending_model = Some(mesh);
                    }
                }
                Err(e) => log::error!("[asset] Error loading model: {:?}", e),
            }
        });

        let render_loop = RenderLoop::start(ctx.clone());
        Ok(Self {
            ctx,
            listeners,
            render_loop,
        })
    }

    fn dispose(mut self) {
        self.render_loop.stop();
        self.listeners.remove_all();
        let mut c = self.ctx.borrow_mut();
        c.release();
        c.canvas.remove();
        log::info!("[mount] disposed at progress {:.3}", c.scene.progress());
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");
    mount_showcase();
    Ok(())
}

/// Mount into `#showcase`. A second mount while mounted is ignored.
#[wasm_bindgen]
pub fn mount_showcase() {
    MOUNTED.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            log::warn!("[mount] already mounted; ignoring");
            return;
        }
        match Showcase::mount(CONTAINER_ID) {
            Ok(s) => *slot = Some(s),
            Err(e) => log::error!("init error: {:?}", e),
        }
    });
}

/// Release the render surface, listeners and animation loop.
#[wasm_bindgen]
pub fn unmount_showcase() {
    if let Some(s) = MOUNTED.with(|slot| slot.borrow_mut().take()) {
        s.dispose();
    }
}

/// Current scroll progress, or 0 when nothing is mounted.
#[wasm_bindgen]
pub fn showcase_progress() -> f32 {
    MOUNTED.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|s| s.ctx.borrow().scene.progress())
            .unwrap_or(0.0)
    })
}
