use crate::audio::CueAudio;
use crate::dom;
use crate::input::{self, PointerState};
use neuro_core::OrbitCamera;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub audio: Option<Rc<CueAudio>>,
}

pub fn wire_input_handlers(w: InputWiring) -> anyhow::Result<()> {
    // pointerdown: start orbit drag, unlock audio
    {
        let canvas = w.canvas.clone();
        let pointer = w.pointer.clone();
        let audio = w.audio.clone();
        dom::add_listener(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
            let (pos, _) = input::pointer_canvas_css(&ev, &canvas);
            {
                let mut p = pointer.borrow_mut();
                p.dragging = true;
                p.drag_from = pos;
            }
            let _ = canvas.set_pointer_capture(ev.pointer_id());
            if let Some(a) = &audio {
                a.resume();
            }
        })?;
    }

    // pointermove: orbit while dragging, edge hints otherwise
    {
        let canvas = w.canvas.clone();
        let pointer = w.pointer.clone();
        let orbit = w.orbit.clone();
        dom::add_listener(&w.canvas, "pointermove", move |ev: web::PointerEvent| {
            let (pos, size) = input::pointer_canvas_css(&ev, &canvas);
            let mut p = pointer.borrow_mut();
            if p.dragging {
                let d = pos - p.drag_from;
                orbit.borrow_mut().rotate_by_drag(d.x, d.y);
                p.drag_from = pos;
            }
            p.hint = input::hint_at(pos, size);
        })?;
    }

    // pointerup / pointercancel: end drag
    for name in ["pointerup", "pointercancel"] {
        let canvas = w.canvas.clone();
        let pointer = w.pointer.clone();
        dom::add_listener(&w.canvas, name, move |ev: web::PointerEvent| {
            pointer.borrow_mut().dragging = false;
            let _ = canvas.release_pointer_capture(ev.pointer_id());
        })?;
    }

    {
        let pointer = w.pointer.clone();
        dom::add_listener(&w.canvas, "pointerleave", move |_: web::PointerEvent| {
            pointer.borrow_mut().leave();
        })?;
    }

    {
        let orbit = w.orbit.clone();
        dom::add_listener(&w.canvas, "wheel", move |ev: web::WheelEvent| {
            ev.prevent_default();
            orbit.borrow_mut().zoom_by_wheel(ev.delta_y() as f32);
        })?;
    }

    // Any click on the page counts as the audio-unlocking gesture.
    if let (Some(audio), Some(doc)) = (w.audio, dom::window_document()) {
        dom::add_listener(&doc, "click", move |_: web::MouseEvent| audio.resume())?;
    }
    Ok(())
}

pub fn wire_resize(canvas: web::HtmlCanvasElement) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    dom::sync_canvas_backing_size(&canvas);
    dom::add_listener(&window, "resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
    })
}
