use crate::audio::CueAudio;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::input::PointerState;
use crate::overlay::{OverlayFrame, SceneOverlay};
use crate::panel::ControlPanel;
use crate::render::{self, instances};
use glam::Vec3;
use instant::Instant;
use neuro_core::{
    condition_label, glow_for, icon_anchor, step_sphere, CueTracker, OrbitCamera, ParticleField,
    SignalStore, SphereVisual,
};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub store: Rc<RefCell<SignalStore>>,
    pub panel: Rc<RefCell<ControlPanel>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub pointer: Rc<RefCell<PointerState>>,

    pub canvas: web::HtmlCanvasElement,
    pub overlay: SceneOverlay,
    pub audio: Option<Rc<CueAudio>>,
    pub gpu: Option<render::GpuState>,

    pub sphere: SphereVisual,
    pub particles: ParticleField,
    pub cues: CueTracker,
    pub rng: StdRng,
    pub instances: Vec<instances::InstanceData>,

    pub last_instant: Instant,
    pub elapsed_sec: f32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        self.elapsed_sec += dt_sec;

        let signals = {
            let store = self.store.borrow();
            self.panel.borrow_mut().sync(&store);
            *store.signals()
        };

        // Sphere, glow and particles
        self.sphere = step_sphere(&self.sphere, &signals);
        let glow = glow_for(&self.sphere, &signals, self.elapsed_sec);
        self.particles
            .emit(self.sphere.position, signals.stress, &mut self.rng);
        self.particles.advance(dt_sec, signals.stress);

        // Audio cues
        for ev in self.cues.update(&signals) {
            if let Some(a) = &self.audio {
                a.apply(&ev);
            }
        }

        // Camera and HTML overlays
        let w = self.canvas.width().max(1) as f32;
        let h = self.canvas.height().max(1) as f32;
        let camera = self.orbit.borrow().camera(w / h);
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        self.overlay.update(&OverlayFrame {
            signals: &signals,
            condition: condition_label(&signals),
            label_px: camera.project_to_screen(self.sphere.label_anchor(), w, h),
            icon_px: camera.project_to_screen(icon_anchor(self.elapsed_sec), w, h),
            readout_px: camera.project_to_screen(Vec3::ZERO, w, h),
            hint: self.pointer.borrow().hint,
            dpr,
        });

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            instances::pack_instances(
                &self.sphere,
                &glow,
                self.particles.particles(),
                &mut self.instances,
            );
            if let Err(e) = g.render(&camera, &self.instances) {
                log::warn!("[render] frame skipped: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
