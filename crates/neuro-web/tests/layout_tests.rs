// Host-side tests for overlay and panel text.
// The web crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod layout {
    include!("../src/layout.rs");
}

use constants::*;
use glam::Vec2;
use layout::*;
use neuro_core::{BrainSignals, ControlMode, Emotion};

#[test]
fn captions_round_to_whole_values() {
    assert_eq!(value_caption(50.0), "Value: 50");
    assert_eq!(value_caption(72.6), "Value: 73");
    assert_eq!(value_caption(0.2), "Value: 0");
}

#[test]
fn mode_button_names_the_other_mode() {
    assert_eq!(mode_button_text(ControlMode::Auto), "Switch to Manual Control");
    assert_eq!(mode_button_text(ControlMode::Manual), "Switch to Auto Simulation");
}

#[test]
fn condition_heading_prefix() {
    assert_eq!(
        condition_heading("😐 Neutral State"),
        "Current Condition: 😐 Neutral State"
    );
}

#[test]
fn readout_lists_every_signal() {
    let s = BrainSignals {
        focus: 12.4,
        cognitive_load: 99.6,
        emotion: Emotion::Fearful,
        ..BrainSignals::default()
    };
    assert_eq!(
        readout_lines(&s),
        vec![
            "Attention: 50%",
            "Stress: 50%",
            "Focus: 12%",
            "Cognitive Load: 100%",
            "Emotion: fearful",
            "Mental Fatigue: 50%",
        ]
    );
}

#[test]
fn anchor_style_converts_to_css_pixels() {
    assert_eq!(
        anchor_style(Some(Vec2::new(200.0, 100.0)), 2.0),
        "left:100.0px;top:50.0px;transform:translate(-50%,-50%);"
    );
    assert_eq!(anchor_style(None, 1.0), "display:none;");
    // A bogus ratio falls back to 1.
    assert!(anchor_style(Some(Vec2::new(10.0, 10.0)), 0.0).starts_with("left:10.0px"));
}

#[test]
fn guide_has_ten_lines() {
    assert_eq!(GUIDE_LINES.len(), 10);
    assert!(GUIDE_LINES.iter().all(|l| !l.is_empty()));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_is_sane() {
    assert!(BLOOM_STRENGTH > 0.0);
    assert!(BLOOM_THRESHOLD > 0.0 && BLOOM_THRESHOLD < 1.0);
    assert!(PARTICLE_SEGMENTS < SPHERE_SEGMENTS);
    assert!(MAX_FRAME_DT_SEC > 0.0);
    let ids = [
        CANVAS_ID,
        PANEL_ID,
        VIDEO_ID,
        VIDEO_OVERLAY_ID,
        LABEL_ID,
        ICON_ID,
        READOUT_ID,
        HINT_ID,
        LOADING_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn hint_only_toggles_display() {
    use neuro_core::HoverHint;
    assert_eq!(hint_display(Some(HoverHint::HighFocus)), "block");
    assert_eq!(hint_display(Some(HoverHint::LowStress)), "block");
    assert_eq!(hint_display(None), "none");
}
