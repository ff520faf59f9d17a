// Text and placement for the HTML overlays and the control panel.
// Kept free of web-sys so it can be exercised on the host.

use glam::Vec2;
use neuro_core::{BrainSignals, ControlMode, HoverHint, SignalField};

pub const PANEL_TITLE: &str = "Neural Control Panel";
pub const BREAK_BUTTON_TEXT: &str = "Take a Break";
pub const EMOTION_FIELD_LABEL: &str = "Emotion";
pub const LOADING_TEXT: &str = "Loading 3D scene…";

pub const GUIDE_TITLE: &str = "Neuro-Visualization Guide:";
pub const GUIDE_LINES: [&str; 10] = [
    "Sphere size reflects attention level (larger = more attentive)",
    "Color intensity shows stress (blue = calm, red = stressed)",
    "Horizontal position represents focus (right = high focus)",
    "Vertical position represents stress (higher = more stressed)",
    "Rotation speed indicates cognitive load",
    "Particle emission occurs during high stress",
    "Text and emoji above sphere describes the current mental state",
    "Glow intensity increases with stress level",
    "Emotion is represented by the floating icon and sphere color",
    "Audio cues play for different mental states",
];

/// Rows of the floating readout, in display order.
const READOUT_ORDER: [SignalField; 4] = [
    SignalField::Attention,
    SignalField::Stress,
    SignalField::Focus,
    SignalField::CognitiveLoad,
];

#[inline]
pub fn display_value(v: f32) -> i32 {
    v.round() as i32
}

pub fn value_caption(v: f32) -> String {
    format!("Value: {}", display_value(v))
}

pub fn mode_button_text(mode: ControlMode) -> &'static str {
    match mode {
        ControlMode::Auto => "Switch to Manual Control",
        ControlMode::Manual => "Switch to Auto Simulation",
    }
}

pub fn condition_heading(label: &str) -> String {
    format!("Current Condition: {label}")
}

pub fn readout_lines(signals: &BrainSignals) -> Vec<String> {
    let mut lines: Vec<String> = READOUT_ORDER
        .iter()
        .map(|f| format!("{}: {}%", f.label(), display_value(signals.get(*f))))
        .collect();
    lines.push(format!("Emotion: {}", signals.emotion));
    lines.push(format!(
        "Mental Fatigue: {}%",
        display_value(signals.mental_fatigue)
    ));
    lines
}

/// `display` value for the hover hint. Its position comes from the page
/// stylesheet, so only this property is touched.
pub fn hint_display(hint: Option<HoverHint>) -> &'static str {
    match hint {
        Some(_) => "block",
        None => "none",
    }
}

/// CSS for an overlay centered on `px`, given in backing-store pixels.
/// `dpr` converts back to CSS pixels.
pub fn anchor_style(px: Option<Vec2>, dpr: f64) -> String {
    match px {
        Some(p) => {
            let scale = if dpr > 0.0 { dpr as f32 } else { 1.0 };
            format!(
                "left:{:.1}px;top:{:.1}px;transform:translate(-50%,-50%);",
                p.x / scale,
                p.y / scale
            )
        }
        None => "display:none;".to_string(),
    }
}
