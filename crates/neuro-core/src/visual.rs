//! Per-frame mapping from signals to sphere visuals.
//!
//! Interpolation anchors are not hidden in the renderer: the caller keeps the
//! previous [`SphereVisual`] and passes it back into [`step_sphere`] each
//! frame. Easing is per frame (not per second), so motion speed follows the
//! display refresh rate.

use crate::constants::*;
use crate::signals::{BrainSignals, Emotion};
use glam::{Mat4, Quat, Vec3};

/// Fully stressed color.
pub const STRESS_RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);

pub fn emotion_color(emotion: Emotion) -> Vec3 {
    match emotion {
        Emotion::Happy => Vec3::new(1.0, 1.0, 0.0),
        Emotion::Sad => Vec3::new(0.0, 0.0, 1.0),
        Emotion::Angry => Vec3::new(1.0, 0.0, 0.0),
        Emotion::Fearful => Vec3::new(0.5, 0.0, 0.5),
        Emotion::Disgusted => Vec3::new(0.0, 0.5, 0.0),
        Emotion::Surprised => Vec3::new(1.0, 0.5, 0.0),
        Emotion::Neutral => Vec3::new(0.5, 0.5, 0.5),
    }
}

/// Emotion color blended toward red by `stress / 100`.
pub fn target_color(signals: &BrainSignals) -> Vec3 {
    let t = (signals.stress / SIGNAL_MAX).clamp(0.0, 1.0);
    emotion_color(signals.emotion).lerp(STRESS_RED, t)
}

pub fn target_position(signals: &BrainSignals) -> Vec3 {
    Vec3::new(
        (signals.focus - SIGNAL_DEFAULT) * POSITION_GAIN,
        (signals.stress - SIGNAL_DEFAULT) * POSITION_GAIN,
        0.0,
    )
    .clamp(Vec3::splat(-POSITION_LIMIT), Vec3::splat(POSITION_LIMIT))
}

#[inline]
pub fn target_scale(signals: &BrainSignals) -> f32 {
    SCALE_BASE + signals.attention * SCALE_PER_ATTENTION
}

/// Radians added to both the x and y rotation each frame.
#[inline]
pub fn rotation_speed(signals: &BrainSignals) -> f32 {
    signals.cognitive_load * ROTATION_PER_LOAD
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereVisual {
    pub position: Vec3,
    pub color: Vec3,
    pub scale: f32,
    /// Accumulated (x, y) rotation in radians.
    pub rotation: [f32; 2],
}

impl Default for SphereVisual {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: emotion_color(Emotion::Neutral),
            scale: 1.0,
            rotation: [0.0, 0.0],
        }
    }
}

impl SphereVisual {
    pub fn model_matrix(&self) -> Mat4 {
        let rot = Quat::from_rotation_x(self.rotation[0]) * Quat::from_rotation_y(self.rotation[1]);
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale * SPHERE_RADIUS),
            rot,
            self.position,
        )
    }

    /// World-space anchor of the condition label.
    pub fn label_anchor(&self) -> Vec3 {
        self.position + Vec3::new(0.0, LABEL_HEIGHT, 0.0)
    }
}

/// Advance the sphere one frame toward the targets derived from `signals`.
pub fn step_sphere(prev: &SphereVisual, signals: &BrainSignals) -> SphereVisual {
    let speed = rotation_speed(signals);
    SphereVisual {
        position: prev.position.lerp(target_position(signals), EASE_FACTOR),
        color: prev.color.lerp(target_color(signals), EASE_FACTOR),
        scale: prev.scale + (target_scale(signals) - prev.scale) * EASE_FACTOR,
        rotation: [prev.rotation[0] + speed, prev.rotation[1] + speed],
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowVisual {
    pub center: Vec3,
    pub color: Vec3,
    pub opacity: f32,
    pub pulse: f32,
}

impl GlowVisual {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(GLOW_RADIUS * self.pulse),
            Quat::IDENTITY,
            self.center,
        )
    }
}

#[inline]
pub fn glow_opacity(stress: f32) -> f32 {
    GLOW_BASE_OPACITY + (stress / SIGNAL_MAX).clamp(0.0, 1.0) * GLOW_STRESS_OPACITY
}

#[inline]
pub fn glow_pulse(elapsed_sec: f32) -> f32 {
    1.0 + (elapsed_sec * GLOW_PULSE_RATE).sin() * GLOW_PULSE_DEPTH
}

/// Glow shell mirrors the current sphere color. It follows the sphere
/// position rather than staying at the scene origin, so the shell always
/// wraps the sphere it lights.
pub fn glow_for(sphere: &SphereVisual, signals: &BrainSignals, elapsed_sec: f32) -> GlowVisual {
    GlowVisual {
        center: sphere.position,
        color: sphere.color,
        opacity: glow_opacity(signals.stress),
        pulse: glow_pulse(elapsed_sec),
    }
}

/// World-space anchor of the floating emotion icon.
pub fn icon_anchor(elapsed_sec: f32) -> Vec3 {
    Vec3::new(
        0.0,
        ICON_HEIGHT + (elapsed_sec * ICON_BOB_RATE).sin() * ICON_BOB_DEPTH,
        0.0,
    )
}
