//! Control panel built into `#control-panel`.
//!
//! Every handler writes through [`SignalStore::apply`]; the panel itself only
//! mirrors the store and re-syncs when the store revision moves.

use crate::constants::PANEL_ID;
use crate::dom;
use crate::layout;
use fnv::FnvHashMap;
use neuro_core::{condition_label, ControlMode, Emotion, SignalField, SignalStore, SignalUpdate};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct SliderRow {
    input: web::HtmlInputElement,
    caption: web::HtmlElement,
}

pub struct ControlPanel {
    condition: web::HtmlElement,
    sliders: FnvHashMap<SignalField, SliderRow>,
    emotion: web::HtmlSelectElement,
    mode_button: web::HtmlElement,
    synced_revision: Option<u64>,
}

fn log_rejected(what: &str, result: Result<neuro_core::UpdateSource, neuro_core::UpdateError>) {
    if let Err(e) = result {
        log::debug!("[panel] {what} ignored: {e}");
    }
}

fn append(parent: &web::Element, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append: {:?}", e))
}

fn text_element(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el: web::HtmlElement = dom::create(document, tag)?;
    el.set_class_name(class);
    el.set_text_content(Some(text));
    Ok(el)
}

impl ControlPanel {
    /// Build the panel and wire its handlers. `on_mode` runs after every
    /// accepted mode toggle with the new mode.
    pub fn build(
        document: &web::Document,
        store: Rc<RefCell<SignalStore>>,
        on_mode: impl Fn(ControlMode) + 'static,
    ) -> anyhow::Result<Rc<RefCell<Self>>> {
        let root: web::Element = dom::element_by_id(document, PANEL_ID)?;
        root.set_text_content(None);

        append(
            &root,
            &text_element(document, "h2", "panel-title", layout::PANEL_TITLE)?,
        )?;
        let condition = text_element(document, "h3", "panel-condition", "")?;
        append(&root, &condition)?;

        let mut sliders = FnvHashMap::default();
        for field in SignalField::ALL {
            let row: web::HtmlElement = dom::create(document, "div")?;
            row.set_class_name("panel-row");
            append(&row, &text_element(document, "label", "panel-label", field.label())?)?;

            let input: web::HtmlInputElement = dom::create(document, "input")?;
            input.set_type("range");
            input.set_min("0");
            input.set_max("100");
            input.set_step("1");
            input.set_name(field.key());
            append(&row, &input)?;

            let caption = text_element(document, "span", "panel-value", "")?;
            append(&row, &caption)?;
            append(&root, &row)?;

            let store_in = store.clone();
            let input_in = input.clone();
            dom::add_listener(&input, "input", move |_: web::Event| {
                let value = input_in.value_as_number() as f32;
                let result = store_in
                    .borrow_mut()
                    .apply(SignalUpdate::Manual { field, value });
                log_rejected(field.key(), result);
            })?;
            sliders.insert(field, SliderRow { input, caption });
        }

        let row: web::HtmlElement = dom::create(document, "div")?;
        row.set_class_name("panel-row");
        append(
            &row,
            &text_element(document, "label", "panel-label", layout::EMOTION_FIELD_LABEL)?,
        )?;
        let emotion: web::HtmlSelectElement = dom::create(document, "select")?;
        for e in Emotion::ALL {
            let option: web::Element = dom::create(document, "option")?;
            let _ = option.set_attribute("value", e.as_str());
            option.set_text_content(Some(e.display_name()));
            append(&emotion, &option)?;
        }
        append(&row, &emotion)?;
        append(&root, &row)?;
        {
            let store_in = store.clone();
            let select_in = emotion.clone();
            dom::add_listener(&emotion, "change", move |_: web::Event| {
                match select_in.value().parse::<Emotion>() {
                    Ok(e) => {
                        let result = store_in.borrow_mut().apply(SignalUpdate::ManualEmotion(e));
                        log_rejected("emotion", result);
                    }
                    Err(e) => log::warn!("[panel] {e}"),
                }
            })?;
        }

        let mode_button = text_element(document, "button", "panel-button mode", "")?;
        append(&root, &mode_button)?;
        {
            let store_in = store.clone();
            dom::add_click_listener(&mode_button, move || {
                let mode = {
                    let mut s = store_in.borrow_mut();
                    log_rejected("mode toggle", s.apply(SignalUpdate::ToggleMode));
                    s.mode()
                };
                log::info!("[panel] control mode {:?}", mode);
                on_mode(mode);
            })?;
        }

        let break_button =
            text_element(document, "button", "panel-button break", layout::BREAK_BUTTON_TEXT)?;
        append(&root, &break_button)?;
        {
            let store_in = store.clone();
            dom::add_click_listener(&break_button, move || {
                log_rejected("break", store_in.borrow_mut().apply(SignalUpdate::TakeBreak));
            })?;
        }

        let guide: web::HtmlElement = dom::create(document, "div")?;
        guide.set_class_name("panel-guide");
        append(&guide, &text_element(document, "h3", "", layout::GUIDE_TITLE)?)?;
        let list: web::HtmlElement = dom::create(document, "ul")?;
        for line in layout::GUIDE_LINES {
            append(&list, &text_element(document, "li", "", line)?)?;
        }
        append(&guide, &list)?;
        append(&root, &guide)?;

        let panel = Rc::new(RefCell::new(Self {
            condition,
            sliders,
            emotion,
            mode_button,
            synced_revision: None,
        }));
        panel.borrow_mut().sync(&store.borrow());
        Ok(panel)
    }

    /// Mirror the store into the controls. Cheap when nothing changed.
    pub fn sync(&mut self, store: &SignalStore) {
        if self.synced_revision == Some(store.revision()) {
            return;
        }
        self.synced_revision = Some(store.revision());

        let signals = store.signals();
        let locked = store.is_auto();
        for (field, row) in &self.sliders {
            let v = signals.get(*field);
            row.input
                .set_value(&layout::display_value(v).to_string());
            row.input.set_disabled(locked);
            row.caption
                .set_text_content(Some(&layout::value_caption(v)));
        }
        self.emotion.set_value(signals.emotion.as_str());
        self.emotion.set_disabled(locked);
        self.mode_button
            .set_text_content(Some(layout::mode_button_text(store.mode())));
        self.condition
            .set_text_content(Some(&layout::condition_heading(condition_label(signals))));
    }
}
