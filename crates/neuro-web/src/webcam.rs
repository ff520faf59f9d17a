//! face-api.js glue for the expression detector.
//!
//! Phase bookkeeping lives in [`neuro_core::DetectorState`]; this module
//! does the browser work: model fetches, `getUserMedia`, the 100 ms
//! detection interval and drawing onto `#webcam-overlay`.

use crate::constants::{VIDEO_ID, VIDEO_OVERLAY_ID};
use crate::dom::{self, Interval};
use js_sys::{Function, Promise, Reflect};
use neuro_core::{
    DetectorConfig, DetectorError, DetectorState, Emotion, ExpressionScores, ModelAsset,
    SignalStore, SignalUpdate,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = faceapi)]
    type TinyFaceDetectorOptions;

    #[wasm_bindgen(constructor, js_namespace = faceapi)]
    fn new() -> TinyFaceDetectorOptions;

    type DetectionTask;

    #[wasm_bindgen(js_namespace = faceapi, js_name = detectAllFaces, catch)]
    fn detect_all_faces(
        input: &web::HtmlVideoElement,
        options: &TinyFaceDetectorOptions,
    ) -> Result<DetectionTask, JsValue>;

    #[wasm_bindgen(method, js_name = withFaceLandmarks)]
    fn with_face_landmarks(this: &DetectionTask) -> DetectionTask;

    #[wasm_bindgen(method, js_name = withFaceExpressions)]
    fn with_face_expressions(this: &DetectionTask) -> DetectionTask;

    #[wasm_bindgen(js_namespace = faceapi, js_name = matchDimensions)]
    fn match_dimensions(canvas: &web::HtmlCanvasElement, dims: &JsValue);

    #[wasm_bindgen(js_namespace = faceapi, js_name = resizeResults)]
    fn resize_results(results: &JsValue, dims: &JsValue) -> JsValue;

    #[wasm_bindgen(js_namespace = ["faceapi", "draw"], js_name = drawDetections)]
    fn draw_detections(canvas: &web::HtmlCanvasElement, results: &JsValue);

    #[wasm_bindgen(js_namespace = ["faceapi", "draw"], js_name = drawFaceExpressions)]
    fn draw_face_expressions(canvas: &web::HtmlCanvasElement, results: &JsValue);
}

fn net_name(asset: ModelAsset) -> &'static str {
    match asset {
        ModelAsset::TinyFaceDetector => "tinyFaceDetector",
        ModelAsset::FaceLandmark68 => "faceLandmark68Net",
        ModelAsset::FaceRecognition => "faceRecognitionNet",
        ModelAsset::FaceExpression => "faceExpressionNet",
    }
}

#[inline]
fn js_text(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

struct Detector {
    state: RefCell<DetectorState>,
    store: Rc<RefCell<SignalStore>>,
    video: web::HtmlVideoElement,
    overlay: web::HtmlCanvasElement,
    dims: JsValue,
    interval: RefCell<Option<Interval>>,
}

/// Start the detector in the background. Failures leave it inert and are
/// only logged; the rest of the page keeps working.
pub fn spawn(document: &web::Document, store: Rc<RefCell<SignalStore>>) -> anyhow::Result<()> {
    let video: web::HtmlVideoElement = dom::element_by_id(document, VIDEO_ID)?;
    let overlay: web::HtmlCanvasElement = dom::element_by_id(document, VIDEO_OVERLAY_ID)?;
    let config = DetectorConfig::default();
    video.set_width(config.video_width);
    video.set_height(config.video_height);
    video.set_muted(true);
    video.set_autoplay(true);
    let _ = video.style().set_property("display", "none");
    overlay.set_width(config.video_width);
    overlay.set_height(config.video_height);

    let dims = js_sys::Object::new();
    let _ = Reflect::set(&dims, &"width".into(), &config.video_width.into());
    let _ = Reflect::set(&dims, &"height".into(), &config.video_height.into());

    let detector = Rc::new(Detector {
        state: RefCell::new(DetectorState::new(config)),
        store,
        video,
        overlay,
        dims: dims.into(),
        interval: RefCell::new(None),
    });
    spawn_local(async move {
        if let Err(e) = start(detector).await {
            log::error!("[webcam] {e}");
        }
    });
    Ok(())
}

async fn start(detector: Rc<Detector>) -> Result<(), DetectorError> {
    loop {
        let next = detector.state.borrow().next_model();
        let Some(asset) = next else { break };
        let url = detector.state.borrow().config.model_url.clone();
        match load_model(asset, &url).await {
            Ok(()) => {
                detector.state.borrow_mut().model_loaded(asset)?;
                log::info!("[webcam] loaded {}", asset.name());
            }
            Err(reason) => return Err(detector.state.borrow_mut().model_failed(asset, reason)),
        }
    }

    match open_camera().await {
        Ok(stream) => {
            detector.video.set_src_object(Some(&stream));
            let _ = detector.video.style().set_property("display", "block");
            detector.state.borrow_mut().stream_started()?;
        }
        Err(reason) => return Err(detector.state.borrow_mut().camera_failed(reason)),
    }

    let on_play = detector.clone();
    dom::add_listener(&detector.video, "play", move |_: web::Event| {
        on_play.begin_detecting();
    })
    .map_err(|e| DetectorError::CameraAccess(e.to_string()))?;
    if let Ok(p) = detector.video.play() {
        let _ = JsFuture::from(p).await;
    }
    Ok(())
}

async fn load_model(asset: ModelAsset, url: &str) -> Result<(), String> {
    let faceapi = Reflect::get(&js_sys::global(), &"faceapi".into()).map_err(js_text)?;
    if faceapi.is_undefined() {
        return Err("face-api.js is not loaded".to_string());
    }
    let nets = Reflect::get(&faceapi, &"nets".into()).map_err(js_text)?;
    let net = Reflect::get(&nets, &net_name(asset).into()).map_err(js_text)?;
    let load: Function = Reflect::get(&net, &"loadFromUri".into())
        .map_err(js_text)?
        .dyn_into()
        .map_err(|_| format!("{} has no loadFromUri", net_name(asset)))?;
    let promise: Promise = load
        .call1(&net, &url.into())
        .map_err(js_text)?
        .dyn_into()
        .map_err(js_text)?;
    JsFuture::from(promise).await.map_err(js_text)?;
    Ok(())
}

async fn open_camera() -> Result<web::MediaStream, String> {
    let window = web::window().ok_or("no window")?;
    let devices = window.navigator().media_devices().map_err(js_text)?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(js_text)?;
    JsFuture::from(promise)
        .await
        .map_err(js_text)?
        .dyn_into::<web::MediaStream>()
        .map_err(js_text)
}

impl Detector {
    fn begin_detecting(self: &Rc<Self>) {
        if let Err(e) = self.state.borrow_mut().playing() {
            log::warn!("[webcam] {e}");
            return;
        }
        if self.interval.borrow().is_some() {
            return;
        }
        match_dimensions(&self.overlay, &self.dims);
        let period = self.state.borrow().config.interval_ms;
        let me = self.clone();
        match Interval::new(period, move || me.tick()) {
            Ok(i) => {
                log::info!("[webcam] detecting every {period} ms");
                *self.interval.borrow_mut() = Some(i);
            }
            Err(e) => log::error!("[webcam] {e:?}"),
        }
    }

    fn tick(self: &Rc<Self>) {
        if !self.state.borrow_mut().begin_cycle() {
            return;
        }
        let me = self.clone();
        spawn_local(async move {
            let faces = match me.detect().await {
                Ok(f) => Some(f),
                Err(e) => {
                    log::warn!("[webcam] detection skipped: {}", js_text(e));
                    None
                }
            };
            let emotion = me.state.borrow_mut().finish_cycle(faces.as_deref());
            if let Some(e) = emotion {
                let _ = me.store.borrow_mut().apply(SignalUpdate::Detected(e));
            }
        });
    }

    async fn detect(&self) -> Result<Vec<ExpressionScores>, JsValue> {
        let options = TinyFaceDetectorOptions::new();
        let task = detect_all_faces(&self.video, &options)?
            .with_face_landmarks()
            .with_face_expressions();
        let results = JsFuture::from(Promise::resolve(&task)).await?;
        self.draw(&results);
        let faces: js_sys::Array = results.dyn_into()?;
        Ok(faces.iter().map(|f| expression_scores(&f)).collect())
    }

    fn draw(&self, results: &JsValue) {
        if let Ok(Some(ctx)) = self.overlay.get_context("2d") {
            if let Ok(ctx) = ctx.dyn_into::<web::CanvasRenderingContext2d>() {
                ctx.clear_rect(
                    0.0,
                    0.0,
                    self.overlay.width() as f64,
                    self.overlay.height() as f64,
                );
            }
        }
        let resized = resize_results(results, &self.dims);
        draw_detections(&self.overlay, &resized);
        draw_face_expressions(&self.overlay, &resized);
    }
}

fn expression_scores(face: &JsValue) -> ExpressionScores {
    let expressions = Reflect::get(face, &"expressions".into()).unwrap_or(JsValue::UNDEFINED);
    ExpressionScores::from_pairs(Emotion::ALL.iter().map(|e| {
        let score = Reflect::get(&expressions, &e.as_str().into())
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        (*e, score as f32)
    }))
}
