use crate::constants::{HINT_ID, ICON_ID, LABEL_ID, LOADING_ID, READOUT_ID};
use crate::dom;
use crate::layout;
use glam::Vec2;
use neuro_core::{BrainSignals, HoverHint};
use web_sys as web;

/// HTML elements layered over the WebGPU canvas. Each is optional; a
/// missing element is skipped.
pub struct SceneOverlay {
    label: Option<web::HtmlElement>,
    icon: Option<web::HtmlElement>,
    readout: Option<web::HtmlElement>,
    hint: Option<web::HtmlElement>,
    loading: Option<web::HtmlElement>,
    readout_text: String,
}

fn lookup(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    match dom::element_by_id(document, id) {
        Ok(el) => Some(el),
        Err(e) => {
            log::warn!("[overlay] {e}");
            None
        }
    }
}

fn place(el: &Option<web::HtmlElement>, px: Option<Vec2>, dpr: f64) {
    if let Some(el) = el {
        let _ = el.set_attribute("style", &layout::anchor_style(px, dpr));
    }
}

fn set_text(el: &Option<web::HtmlElement>, text: &str) {
    if let Some(el) = el {
        if el.text_content().as_deref() != Some(text) {
            el.set_text_content(Some(text));
        }
    }
}

pub struct OverlayFrame<'a> {
    pub signals: &'a BrainSignals,
    pub condition: &'static str,
    pub label_px: Option<Vec2>,
    pub icon_px: Option<Vec2>,
    pub readout_px: Option<Vec2>,
    pub hint: Option<HoverHint>,
    pub dpr: f64,
}

impl SceneOverlay {
    pub fn new(document: &web::Document) -> Self {
        let loading = lookup(document, LOADING_ID);
        set_text(&loading, layout::LOADING_TEXT);
        Self {
            label: lookup(document, LABEL_ID),
            icon: lookup(document, ICON_ID),
            readout: lookup(document, READOUT_ID),
            hint: lookup(document, HINT_ID),
            loading,
            readout_text: String::new(),
        }
    }

    /// Remove the placeholder once the renderer is up.
    pub fn scene_ready(&mut self) {
        if let Some(el) = self.loading.take() {
            el.remove();
        }
    }

    pub fn update(&mut self, f: &OverlayFrame) {
        set_text(&self.label, f.condition);
        place(&self.label, f.label_px, f.dpr);

        set_text(&self.icon, f.signals.emotion.icon());
        place(&self.icon, f.icon_px, f.dpr);

        let text = layout::readout_lines(f.signals).join("\n");
        if text != self.readout_text {
            set_text(&self.readout, &text);
            self.readout_text = text;
        }
        place(&self.readout, f.readout_px, f.dpr);

        if let Some(el) = &self.hint {
            if let Some(h) = f.hint {
                set_text(&self.hint, h.text());
            }
            let _ = el
                .style()
                .set_property("display", layout::hint_display(f.hint));
        }
    }
}
