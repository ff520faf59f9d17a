#![cfg(target_arch = "wasm32")]
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod layout;
mod overlay;
mod panel;
mod render;
mod simulation;
mod webcam;

use audio::CueAudio;
use constants::CANVAS_ID;
use instant::Instant;
use neuro_core::{CueTracker, OrbitCamera, ParticleField, SignalStore, SphereVisual};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neuro-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    events::wire_resize(canvas.clone())?;

    let store = Rc::new(RefCell::new(SignalStore::new(rand::random())));

    // Auto simulation runs until the panel switches to manual.
    let sim = Rc::new(RefCell::new(simulation::AutoSimulation::new(store.clone())));
    sim.borrow_mut().sync(store.borrow().mode());
    let sim_panel = sim.clone();
    let panel = panel::ControlPanel::build(&document, store.clone(), move |mode| {
        sim_panel.borrow_mut().sync(mode);
    })?;

    // Audio stays optional: the page works without it.
    let audio = match CueAudio::new() {
        Ok(a) => Some(Rc::new(a)),
        Err(e) => {
            log::error!("[audio] {e}");
            None
        }
    };

    let orbit = Rc::new(RefCell::new(OrbitCamera::default()));
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        orbit: orbit.clone(),
        pointer: pointer.clone(),
        audio: audio.clone(),
    })?;

    if let Err(e) = webcam::spawn(&document, store.clone()) {
        log::error!("[webcam] {e}");
    }

    let mut overlay = overlay::SceneOverlay::new(&document);
    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_some() {
        overlay.scene_ready();
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        store,
        panel,
        orbit,
        pointer,
        canvas,
        overlay,
        audio,
        gpu,
        sphere: SphereVisual::default(),
        particles: ParticleField::default(),
        cues: CueTracker::default(),
        rng: StdRng::from_entropy(),
        instances: Vec::new(),
        last_instant: Instant::now(),
        elapsed_sec: 0.0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
