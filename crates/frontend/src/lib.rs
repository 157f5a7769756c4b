pub mod shared;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::shared::config::{load_config, InterceptorConfig};
use crate::shared::form_interceptor;

/// Bind the configured form once the document is parsed.
fn install_when_ready(document: Document, config: InterceptorConfig) {
    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();

    if ready_state != "loading" {
        install_logged(&document, &config);
        return;
    }

    let target = document.clone();
    let callback = Closure::once_into_js(move |_event: web_sys::Event| {
        install_logged(&target, &config);
    });
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        log::error!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
}

fn install_logged(document: &Document, config: &InterceptorConfig) -> bool {
    match form_interceptor::install(document, config) {
        Ok(installed) => installed,
        Err(e) => {
            log::error!("Failed to intercept {}: {}", config.form_selector, e);
            false
        }
    }
}

/// Intercept another form on the page. Returns whether a listener was attached.
#[wasm_bindgen]
pub fn intercept_form(form_selector: String, indicator_selector: String) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    install_logged(
        &document,
        &InterceptorConfig {
            form_selector,
            indicator_selector,
        },
    )
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            _ = console_log::init_with_level(log::Level::Debug);
            log::error!("Invalid embedded config: {}", e);
            return;
        }
    };
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        install_when_ready(document, config.interceptor);
    }
}
