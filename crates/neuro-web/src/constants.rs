// Web front-end tuning: DOM ids, render setup and audio routing.

// Element ids expected in the host page
pub const CANVAS_ID: &str = "app-canvas";
pub const PANEL_ID: &str = "control-panel";
pub const VIDEO_ID: &str = "webcam-video";
pub const VIDEO_OVERLAY_ID: &str = "webcam-overlay";
pub const LABEL_ID: &str = "condition-label";
pub const ICON_ID: &str = "emotion-icon";
pub const READOUT_ID: &str = "signal-readout";
pub const HINT_ID: &str = "hover-hint";
pub const LOADING_ID: &str = "scene-loading";

// Scene clear color (linear)
pub const CLEAR_RGB: [f64; 3] = [0.02, 0.02, 0.04];

// Bloom post chain
pub const BLOOM_STRENGTH: f32 = 0.8;
pub const BLOOM_THRESHOLD: f32 = 0.55;

// Mesh tessellation
pub const SPHERE_SEGMENTS: u32 = 32;
pub const SPHERE_RINGS: u32 = 16;
pub const PARTICLE_SEGMENTS: u32 = 8;
pub const PARTICLE_RINGS: u32 = 6;

// Point light strength relative to the ambient term
pub const POINT_LIGHT_INTENSITY: f32 = 1.0;

// Master output level for cue tones
pub const CUE_MASTER_GAIN: f32 = 0.3;
pub const TONE_PEAK_GAIN: f32 = 0.4;
pub const TONE_ATTACK_SEC: f64 = 0.01;
pub const NOISE_BUFFER_SEC: f32 = 2.0;

// Frame delta clamp, so a backgrounded tab does not fade particles at once
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
