use crate::constants::HINT_EDGE;

/// Edge hint shown while hovering the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverHint {
    HighFocus,
    LowFocus,
    HighStress,
    LowStress,
}

impl HoverHint {
    pub fn text(self) -> &'static str {
        match self {
            HoverHint::HighFocus => "High Focus",
            HoverHint::LowFocus => "Low Focus",
            HoverHint::HighStress => "High Stress",
            HoverHint::LowStress => "Low Stress",
        }
    }
}

/// Map a pointer position inside a `width` x `height` box (origin top-left)
/// to normalized device coordinates, y up.
pub fn pointer_ndc(x: f32, y: f32, width: f32, height: f32) -> Option<[f32; 2]> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some([x / width * 2.0 - 1.0, -(y / height) * 2.0 + 1.0])
}

/// Horizontal edges win over vertical ones.
pub fn hover_hint(ndc: [f32; 2]) -> Option<HoverHint> {
    let [x, y] = ndc;
    if x > HINT_EDGE {
        Some(HoverHint::HighFocus)
    } else if x < -HINT_EDGE {
        Some(HoverHint::LowFocus)
    } else if y > HINT_EDGE {
        Some(HoverHint::HighStress)
    } else if y < -HINT_EDGE {
        Some(HoverHint::LowStress)
    } else {
        None
    }
}
