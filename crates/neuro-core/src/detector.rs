//! Webcam expression detector state machine.
//!
//! The browser side (model fetches, camera, face detection) lives in the web
//! crate; this module owns the phase transitions and the reduction of a
//! detection result to a single [`Emotion`].
//!
//! ```text
//! LoadingModels -> ModelsReady -> Streaming -> Detecting
//!       |               |
//!       v               v
//!   Inert(ModelLoad)  Inert(CameraAccess)
//! ```

use crate::signals::Emotion;
use thiserror::Error;

pub const DETECTION_INTERVAL_MS: i32 = 100;
pub const MODEL_URL: &str = "/models";
pub const VIDEO_WIDTH: u32 = 720;
pub const VIDEO_HEIGHT: u32 = 560;

/// The four model assets, in load order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelAsset {
    TinyFaceDetector,
    FaceLandmark68,
    FaceRecognition,
    FaceExpression,
}

impl ModelAsset {
    pub const LOAD_ORDER: [ModelAsset; 4] = [
        ModelAsset::TinyFaceDetector,
        ModelAsset::FaceLandmark68,
        ModelAsset::FaceRecognition,
        ModelAsset::FaceExpression,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModelAsset::TinyFaceDetector => "tiny_face_detector",
            ModelAsset::FaceLandmark68 => "face_landmark_68",
            ModelAsset::FaceRecognition => "face_recognition",
            ModelAsset::FaceExpression => "face_expression",
        }
    }
}

#[derive(Clone, Debug)]
pub struct DetectorConfig {
    pub model_url: String,
    pub interval_ms: i32,
    pub video_width: u32,
    pub video_height: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model_url: MODEL_URL.to_string(),
            interval_ms: DETECTION_INTERVAL_MS,
            video_width: VIDEO_WIDTH,
            video_height: VIDEO_HEIGHT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectorFault {
    ModelLoad,
    CameraAccess,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectorPhase {
    LoadingModels,
    ModelsReady,
    Streaming,
    Detecting,
    Inert(DetectorFault),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetectorError {
    #[error("failed to load model {}: {reason}", .asset.name())]
    ModelLoad { asset: ModelAsset, reason: String },
    #[error("camera access failed: {0}")]
    CameraAccess(String),
    #[error("invalid detector transition from {from:?} ({event})")]
    InvalidTransition {
        from: DetectorPhase,
        event: &'static str,
    },
}

/// Expression probabilities for one face, indexed by [`Emotion::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExpressionScores {
    scores: [f32; 7],
}

impl ExpressionScores {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Emotion, f32)>,
    {
        let mut out = Self::default();
        for (e, s) in pairs {
            out.set(e, s);
        }
        out
    }

    #[inline]
    pub fn set(&mut self, emotion: Emotion, score: f32) {
        self.scores[emotion.index()] = if score.is_finite() { score } else { 0.0 };
    }

    #[inline]
    pub fn get(&self, emotion: Emotion) -> f32 {
        self.scores[emotion.index()]
    }

    /// Highest-scoring expression. A tie goes to the later expression in
    /// canonical order.
    pub fn dominant(&self) -> Emotion {
        let mut best = Emotion::ALL[0];
        for e in Emotion::ALL.iter().copied().skip(1) {
            if self.get(e) >= self.get(best) {
                best = e;
            }
        }
        best
    }
}

pub struct DetectorState {
    phase: DetectorPhase,
    loaded: usize,
    in_flight: bool,
    pub config: DetectorConfig,
}

impl Default for DetectorState {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

impl DetectorState {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            phase: DetectorPhase::LoadingModels,
            loaded: 0,
            in_flight: false,
            config,
        }
    }

    #[inline]
    pub fn phase(&self) -> DetectorPhase {
        self.phase
    }

    #[inline]
    pub fn models_loaded(&self) -> usize {
        self.loaded
    }

    #[inline]
    pub fn is_inert(&self) -> bool {
        matches!(self.phase, DetectorPhase::Inert(_))
    }

    /// Next model to fetch, if still loading.
    pub fn next_model(&self) -> Option<ModelAsset> {
        match self.phase {
            DetectorPhase::LoadingModels => ModelAsset::LOAD_ORDER.get(self.loaded).copied(),
            _ => None,
        }
    }

    fn require_phase(
        &self,
        want: DetectorPhase,
        event: &'static str,
    ) -> Result<(), DetectorError> {
        if self.phase == want {
            Ok(())
        } else {
            Err(DetectorError::InvalidTransition {
                from: self.phase,
                event,
            })
        }
    }

    fn enter(&mut self, next: DetectorPhase) {
        log::debug!("[detector] {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    pub fn model_loaded(&mut self, asset: ModelAsset) -> Result<DetectorPhase, DetectorError> {
        self.require_phase(DetectorPhase::LoadingModels, "model_loaded")?;
        if self.next_model() != Some(asset) {
            return Err(DetectorError::InvalidTransition {
                from: self.phase,
                event: "model_loaded out of order",
            });
        }
        self.loaded += 1;
        if self.loaded == ModelAsset::LOAD_ORDER.len() {
            self.enter(DetectorPhase::ModelsReady);
        }
        Ok(self.phase)
    }

    /// Record a model fetch failure. The detector goes inert; nothing retries.
    pub fn model_failed(&mut self, asset: ModelAsset, reason: impl Into<String>) -> DetectorError {
        self.enter(DetectorPhase::Inert(DetectorFault::ModelLoad));
        DetectorError::ModelLoad {
            asset,
            reason: reason.into(),
        }
    }

    pub fn stream_started(&mut self) -> Result<(), DetectorError> {
        self.require_phase(DetectorPhase::ModelsReady, "stream_started")?;
        self.enter(DetectorPhase::Streaming);
        Ok(())
    }

    pub fn camera_failed(&mut self, reason: impl Into<String>) -> DetectorError {
        self.enter(DetectorPhase::Inert(DetectorFault::CameraAccess));
        DetectorError::CameraAccess(reason.into())
    }

    /// Video started playing; the detection interval may begin.
    pub fn playing(&mut self) -> Result<(), DetectorError> {
        match self.phase {
            DetectorPhase::Detecting => Ok(()),
            _ => {
                self.require_phase(DetectorPhase::Streaming, "playing")?;
                self.enter(DetectorPhase::Detecting);
                Ok(())
            }
        }
    }

    /// Claim the next detection cycle. Returns false when not detecting or
    /// when the previous cycle has not finished yet.
    pub fn begin_cycle(&mut self) -> bool {
        if self.phase != DetectorPhase::Detecting || self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Finish a cycle. `faces` holds expression scores per detected face;
    /// only the first face is reported. `None` means the cycle failed and is
    /// simply skipped.
    pub fn finish_cycle(&mut self, faces: Option<&[ExpressionScores]>) -> Option<Emotion> {
        self.in_flight = false;
        faces.and_then(|f| f.first()).map(|s| s.dominant())
    }

    #[inline]
    pub fn cycle_in_flight(&self) -> bool {
        self.in_flight
    }
}
