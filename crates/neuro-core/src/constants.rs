// Shared visual/audio tuning constants used by the core mapping and the web frontend.

// Signal range
pub const SIGNAL_MIN: f32 = 0.0;
pub const SIGNAL_MAX: f32 = 100.0;
pub const SIGNAL_DEFAULT: f32 = 50.0;

// Auto simulation
pub const AUTO_TICK_MS: i32 = 1000;
pub const AUTO_DELTA_RANGE: f32 = 10.0; // uniform delta in [-range, range]
pub const AUTO_FATIGUE_DELTA_RANGE: f32 = 5.0;

// Break action
pub const BREAK_RELIEF: f32 = 20.0;

// Scene layout
pub const POSITION_GAIN: f32 = 0.04; // world units per signal point away from 50
pub const POSITION_LIMIT: f32 = 2.0; // target position is clamped to [-limit, limit]
pub const EASE_FACTOR: f32 = 0.1; // per-frame exponential smoothing factor

// Visual sizing
pub const SCALE_BASE: f32 = 0.5;
pub const SCALE_PER_ATTENTION: f32 = 0.01;
pub const SPHERE_RADIUS: f32 = 1.0;
pub const ROTATION_PER_LOAD: f32 = 0.0002; // radians per frame per cognitive-load point

// Glow shell
pub const GLOW_RADIUS: f32 = 1.2;
pub const GLOW_BASE_OPACITY: f32 = 0.3;
pub const GLOW_STRESS_OPACITY: f32 = 0.7;
pub const GLOW_PULSE_RATE: f32 = 2.0; // rad/sec
pub const GLOW_PULSE_DEPTH: f32 = 0.1;

// Floating label and emotion icon
pub const LABEL_HEIGHT: f32 = 1.5;
pub const ICON_HEIGHT: f32 = 1.5;
pub const ICON_BOB_RATE: f32 = 2.0;
pub const ICON_BOB_DEPTH: f32 = 0.1;

// Particles
pub const PARTICLE_STRESS_THRESHOLD: f32 = 60.0;
pub const PARTICLE_STRESS_PER_EMIT: f32 = 20.0; // one particle per this many stress points
pub const PARTICLE_JITTER: f32 = 0.5; // spawn spread around the sphere center
pub const PARTICLE_SPEED: f32 = 0.05; // velocity spread, world units per frame
pub const PARTICLE_RADIUS: f32 = 0.05;
pub const PARTICLE_COLOR: [f32; 3] = [1.0, 0.5, 0.0];
pub const MAX_PARTICLES: usize = 512;

// Audio cues
pub const FOCUS_HIGH: f32 = 80.0;
pub const FOCUS_LOW: f32 = 20.0;
pub const NOISE_STRESS_THRESHOLD: f32 = 80.0;
pub const HIGH_FOCUS_MIDI: i32 = 60; // C4
pub const LOW_FOCUS_MIDI: i32 = 57; // A3
pub const HIGH_FOCUS_FILTER_HZ: f32 = 2000.0;
pub const LOW_FOCUS_FILTER_HZ: f32 = 500.0;
pub const NOISE_FILTER_HZ: f32 = 1000.0;
pub const NOISE_VOLUME_DB: f32 = -20.0;
pub const CUE_RAMP_SEC: f64 = 0.1;
pub const CUE_TEMPO_BPM: f32 = 120.0;

// Camera
pub const CAMERA_DISTANCE: f32 = 5.0;
pub const CAMERA_MIN_DISTANCE: f32 = 2.0;
pub const CAMERA_MAX_DISTANCE: f32 = 20.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const ORBIT_RADIANS_PER_PX: f32 = 0.008;
pub const ZOOM_PER_WHEEL_UNIT: f32 = 0.001;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const POINT_LIGHT_POS: [f32; 3] = [10.0, 10.0, 10.0];

// Hover hints
pub const HINT_EDGE: f32 = 0.8;
