pub mod canvas;
pub mod error;
pub mod field;
pub mod listener;
pub mod runner;
pub mod slider;

use std::cell::RefCell;

use ember_engine::EmberConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub use error::MountError;
pub use runner::PageRunner;

/// Id of the optional `<script type="application/json">` element holding
/// an [`EmberConfig`].
pub const CONFIG_ELEMENT_ID: &str = "ember-config";

thread_local! {
    static PAGE: RefCell<Option<PageRunner>> = RefCell::new(None);
}

fn with_page<R>(f: impl FnOnce(&PageRunner) -> R) -> Option<R> {
    PAGE.with(|cell| cell.borrow().as_ref().map(f))
}

/// Read the page config. A missing element yields the defaults.
fn load_config(document: &Document) -> Result<EmberConfig, serde_json::Error> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) => EmberConfig::from_json(&json),
        None => Ok(EmberConfig::default()),
    }
}

fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let (config, config_error) = match load_config(&document) {
        Ok(config) => (config, None),
        Err(e) => (EmberConfig::default(), Some(e)),
    };
    let _ = console_log::init_with_level(config.level());
    if let Some(e) = config_error {
        log::warn!("#{}: invalid config, using defaults: {}", CONFIG_ELEMENT_ID, e);
    }

    if PAGE.with(|cell| cell.borrow().is_some()) {
        log::warn!("ember: already initialized");
        return;
    }
    let runner = PageRunner::mount(&window, &document, &config);
    PAGE.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("ember: initialized");
}

/// Entry point: mount everything once the DOM content is available.
#[wasm_bindgen(start)]
pub fn ember_start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window()
        .ok_or_else(|| JsValue::from_str(&MountError::NoWindow.to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str(&MountError::NoDocument.to_string()))?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(boot);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        boot();
    }
    Ok(())
}

/// Stop the particle animation loop.
#[wasm_bindgen]
pub fn ember_stop() {
    with_page(|page| page.stop());
}

/// Number of live particles; 0 when the field is not mounted.
#[wasm_bindgen]
pub fn ember_particle_count() -> u32 {
    with_page(|page| page.particle_count()).unwrap_or(0)
}

/// Last applied reveal percentage of the comparison slider.
#[wasm_bindgen]
pub fn ember_reveal_percentage() -> Option<f32> {
    with_page(|page| page.reveal_percentage()).flatten()
}
