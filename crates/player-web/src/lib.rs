#![cfg(target_arch = "wasm32")]
mod audio;
mod background;
mod constants;
mod dom;
mod events;
mod frame;
mod loader;
mod render;
mod view;

use crate::audio::ElementAudioSource;
use crate::background::PageBackground;
use crate::constants::*;
use crate::view::PageView;
use player_core::{Command, OrbitControls, Placement, PlaybackController, MODEL_PATH};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

type PageController = PlaybackController<ElementAudioSource, PageBackground, PageView>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dragon-player starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Player first: it must work even when WebGPU or the model do not
    let controller: Rc<RefCell<PageController>> = Rc::new(RefCell::new(PlaybackController::new(
        ElementAudioSource,
        PageBackground::new(document.clone()),
        PageView::new(&document),
    )));
    wire_commands(&document, &controller);
    frame::start_controller_clock(controller);

    let canvas = dom::scene_canvas(&document, SCENE_CANVAS_ID)?;
    let placement = Rc::new(Cell::new(Placement::for_viewport_width(dom::viewport_width())));
    events::wire_resize(&canvas, placement.clone());
    let orbit = Rc::new(RefCell::new(OrbitControls::default()));
    events::wire_orbit_input(&canvas, orbit.clone());

    let pending_mesh = Rc::new(RefCell::new(None));
    {
        let pending_mesh = pending_mesh.clone();
        spawn_local(async move {
            match loader::load_model(MODEL_PATH).await {
                Ok(mesh) => *pending_mesh.borrow_mut() = Some(mesh),
                Err(e) => log::error!("failed to load model: {:?}", e),
            }
        });
    }

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[scene] no renderer; continuing with audio only");
        return Ok(());
    }
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        orbit,
        placement,
        pending_mesh,
        gpu,
    })));
    Ok(())
}

fn wire_commands(document: &web_sys::Document, controller: &Rc<RefCell<PageController>>) {
    for (id, command) in [
        (PLAY_PAUSE_BUTTON_ID, Command::TogglePlay),
        (PREV_BUTTON_ID, Command::Previous),
        (NEXT_BUTTON_ID, Command::Next),
    ] {
        let controller = controller.clone();
        dom::add_click_listener(document, id, move || {
            let result = controller.borrow_mut().handle(command);
            if let Err(e) = result {
                log::error!("[player] {:?} failed: {}", command, e);
            }
        });
    }
}
