//! Wires a [`FormInterceptor`] to a live form in the document.

use std::rc::Rc;

use contracts::shared::form_submit::{SubmissionIntent, SubmitError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement};

use super::busy::BusyGuard;
use super::controls::gather_fields;
use super::interceptor::FormInterceptor;
use super::navigator::WindowNavigator;
use super::transport::GlooTransport;
use crate::shared::config::InterceptorConfig;

fn dom_error(e: JsValue) -> SubmitError {
    SubmitError::Dom(format!("{:?}", e))
}

/// Attach the submit listener to the form matching `config.form_selector`.
///
/// Returns `Ok(false)` when no such form exists; that is not an error.
pub fn install(document: &Document, config: &InterceptorConfig) -> Result<bool, SubmitError> {
    let Some(element) = document
        .query_selector(&config.form_selector)
        .map_err(dom_error)?
    else {
        log::debug!("No form matches {}, nothing to intercept", config.form_selector);
        return Ok(false);
    };
    let form = element.dyn_into::<HtmlFormElement>().map_err(|_| {
        SubmitError::Dom(format!("{} is not a form element", config.form_selector))
    })?;

    let interceptor = Rc::new(FormInterceptor::new(GlooTransport, WindowNavigator));
    let indicator_selector = config.indicator_selector.clone();
    let target = form.clone();

    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();

        let indicator = match find_indicator(&target, &indicator_selector) {
            Ok(indicator) => indicator,
            Err(e) => {
                log::error!("Form submission aborted: {}", e);
                return;
            }
        };
        let busy = BusyGuard::show(indicator);
        let intent = read_intent(&target);

        let interceptor = Rc::clone(&interceptor);
        spawn_local(async move {
            match interceptor.submit(intent, busy).await {
                Ok(outcome) => log::debug!("Form submission settled: {:?}", outcome),
                Err(e) => log::error!("Form submission failed: {}", e),
            }
        });
    }) as Box<dyn FnMut(_)>);

    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget(); // Keep the listener alive for the page lifetime

    log::info!("Intercepting submissions of {}", config.form_selector);
    Ok(true)
}

fn find_indicator(form: &HtmlFormElement, selector: &str) -> Result<HtmlElement, SubmitError> {
    form.query_selector(selector)
        .map_err(dom_error)?
        .ok_or_else(|| SubmitError::Dom(format!("indicator {} not found in form", selector)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SubmitError::Dom(format!("indicator {} is not an HTML element", selector)))
}

/// Snapshot the form as it is right now.
fn read_intent(form: &HtmlFormElement) -> SubmissionIntent {
    let elements = form.elements();
    let inputs: Vec<HtmlInputElement> = (0..elements.length())
        .filter_map(|i| elements.item(i))
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .collect();

    SubmissionIntent::new(form.action(), form.method(), gather_fields(&inputs))
}
