use crate::constants::CONTROLLER_TICK_MS;
use crate::render;
use instant::Instant;
use player_core::model::MeshData;
use player_core::{AudioSource, Backdrop, OrbitControls, Placement, PlaybackController, TrackView};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub placement: Rc<Cell<Placement>>,
    pub pending_mesh: Rc<RefCell<Option<MeshData>>>,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let eye = self.orbit.borrow_mut().update();
        let Some(g) = &mut self.gpu else {
            return;
        };
        if let Some(mesh) = self.pending_mesh.borrow_mut().take() {
            g.upload_mesh(&mesh);
            log::info!("[scene] model uploaded, camera at {:?}", eye);
        }
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        let camera = self.orbit.borrow().camera(g.aspect());
        if let Err(e) = g.render(&camera, self.placement.get().model_matrix()) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref().map(|c| c.as_ref().clone()))
    else {
        return;
    };
    _ = w.request_animation_frame(cb.unchecked_ref());
}

/// Drive the controller's fades and deferred background transitions from a
/// repeating timer, feeding it wall-clock deltas.
pub fn start_controller_clock<S, B, V>(controller: Rc<RefCell<PlaybackController<S, B, V>>>)
where
    S: AudioSource + 'static,
    B: Backdrop + 'static,
    V: TrackView + 'static,
{
    let Some(window) = web::window() else {
        log::error!("no window; controller clock not started");
        return;
    };
    let mut last = Instant::now();
    let closure = Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt = now - last;
        last = now;
        controller.borrow_mut().tick(dt);
    }) as Box<dyn FnMut()>);
    if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        CONTROLLER_TICK_MS,
    ) {
        log::error!("setInterval failed: {:?}", e);
    }
    closure.forget();
}
