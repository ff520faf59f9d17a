use glam::Vec2;
use neuro_core::{hover_hint, pointer_ndc, HoverHint};
use web_sys as web;

/// Pointer state shared between the event handlers and the frame loop.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub dragging: bool,
    pub drag_from: Vec2,
    pub hint: Option<HoverHint>,
}

impl PointerState {
    pub fn leave(&mut self) {
        self.dragging = false;
        self.hint = None;
    }
}

#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (Vec2, Vec2) {
    let rect = canvas.get_bounding_client_rect();
    let pos = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    (pos, Vec2::new(rect.width() as f32, rect.height() as f32))
}

#[inline]
pub fn hint_at(pos: Vec2, size: Vec2) -> Option<HoverHint> {
    pointer_ndc(pos.x, pos.y, size.x, size.y).and_then(hover_hint)
}
