#![cfg(target_arch = "wasm32")]
use crate::config::DialOptions;
use crate::widget::DialWidget;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod config;
mod constants;
mod dom;
mod events;
mod input;
mod view;
mod widget;

thread_local! {
    // Dial mounted from page markup at startup; lives as long as the page.
    static AUTO_DIAL: RefCell<Option<DialWidget>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dial-web starting");

    if let Err(e) = auto_mount() {
        log::error!("auto-mount error: {:?}", e);
    }
    Ok(())
}

fn auto_mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(region) = document.get_element_by_id(constants::REGION_ID) else {
        log::info!("no #{} in page, waiting for DialHandle.mount", constants::REGION_ID);
        return Ok(());
    };
    let options = dom::read_options(&region)?;
    let widget = DialWidget::mount(&document, region, options, |index| {
        log::info!("[dial] selected {}", dial_core::note_for_index(index).name);
    })?;
    AUTO_DIAL.with(|slot| *slot.borrow_mut() = Some(widget));
    Ok(())
}

#[inline]
fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// Script-facing handle to a mounted dial.
#[wasm_bindgen]
pub struct DialHandle {
    widget: Option<DialWidget>,
}

#[wasm_bindgen]
impl DialHandle {
    /// Bind a dial to the element with `region_id`. `on_selection` receives
    /// the section index after every release.
    pub fn mount(
        region_id: &str,
        section_count: usize,
        initial_rotation_degrees: f64,
        on_selection: js_sys::Function,
    ) -> Result<DialHandle, JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let region = dom::element_by_id(&document, region_id).map_err(to_js)?;
        let options = DialOptions {
            section_count,
            initial_rotation_degrees,
        };
        let widget = DialWidget::mount(&document, region, options, move |index| {
            if let Err(e) = on_selection.call1(&JsValue::NULL, &JsValue::from(index as u32)) {
                log::error!("selection callback failed: {:?}", e);
            }
        })
        .map_err(to_js)?;
        Ok(DialHandle {
            widget: Some(widget),
        })
    }

    #[wasm_bindgen(js_name = rotationDegrees)]
    pub fn rotation_degrees(&self) -> f64 {
        self.widget
            .as_ref()
            .map(DialWidget::rotation_degrees)
            .unwrap_or(0.0)
    }

    #[wasm_bindgen(js_name = isEngaged)]
    pub fn is_engaged(&self) -> bool {
        self.widget
            .as_ref()
            .map(DialWidget::is_engaged)
            .unwrap_or(false)
    }

    #[wasm_bindgen(js_name = activeIndex)]
    pub fn active_index(&self) -> usize {
        self.widget
            .as_ref()
            .map(DialWidget::active_index)
            .unwrap_or(0)
    }

    /// Advance the overlay to the next pattern mask; returns its name.
    #[wasm_bindgen(js_name = cycleMask)]
    pub fn cycle_mask(&self) -> Option<String> {
        self.widget.as_ref().map(|w| w.cycle_mask().to_string())
    }

    /// Remove every listener. Later calls report the resting defaults.
    pub fn destroy(&mut self) {
        self.widget.take();
    }
}
