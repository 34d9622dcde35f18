//! Mounting the page handlers on `document.body`

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::DocumentReadyState;

use super::BrowserWindow;
use crate::api::{ClientError, VenueClient};
use crate::config::Config;
use crate::dom::{Delegator, CLICK};
use crate::page::bind_page_handlers;
use crate::runtime::{PageRuntime, Step};
use crate::telemetry::init_tracing;

/// Error type for mounting the handlers
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("window is unavailable")]
    NoWindow,

    #[error("document has no body")]
    NoBody,

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Js(format!("{value:?}"))
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<PageBinding>> = const { RefCell::new(None) };
}

/// The click listener installed on `document.body`.
///
/// Dropping the binding removes the listener.
pub struct PageBinding {
    body: web_sys::HtmlElement,
    listener: Closure<dyn FnMut(web_sys::Event)>,
}

impl PageBinding {
    /// Remove the listener from the body.
    ///
    /// Same as dropping the binding; the work happens in `Drop`.
    pub fn unmount(self) {}
}

impl Drop for PageBinding {
    fn drop(&mut self) {
        if let Err(e) = self
            .body
            .remove_event_listener_with_callback(CLICK, self.listener.as_ref().unchecked_ref())
        {
            warn!(error = ?e, "failed to remove page click listener");
            return;
        }
        debug!("page handlers unmounted");
    }
}

/// Register the page handlers against `document.body`.
///
/// Requests go to `config.base_url`.
pub fn mount(config: &Config) -> Result<PageBinding, MountError> {
    let window = BrowserWindow::current().ok_or(MountError::NoWindow)?;
    let body = window
        .document()
        .and_then(|document| document.body())
        .ok_or(MountError::NoBody)?;

    let api = VenueClient::from_config(config)?;
    let runtime = Rc::new(PageRuntime::new(window, api));

    let mut delegator = Delegator::new(web_sys::Element::from(body.clone()));
    bind_page_handlers(&mut delegator);

    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };

        for command in delegator.dispatch(CLICK, &target) {
            match runtime.start(command) {
                Step::Done(outcome) => debug!(?outcome, "command finished"),
                Step::AwaitDelete(pending) => {
                    let runtime = Rc::clone(&runtime);
                    spawn_local(async move {
                        let outcome = runtime.finish_delete(pending).await;
                        debug!(?outcome, "venue delete finished");
                    });
                }
            }
        }
    });

    body.add_event_listener_with_callback(CLICK, listener.as_ref().unchecked_ref())?;
    info!(base_url = %config.base_url, "page handlers mounted");

    Ok(PageBinding { body, listener })
}

/// Mount once, keeping the binding alive until [`unmount`] is called
fn mount_global(config: &Config) {
    match mount(config) {
        Ok(binding) => MOUNTED.with(|slot| *slot.borrow_mut() = Some(binding)),
        Err(e) => error!(error = %e, "failed to mount page handlers"),
    }
}

/// Remove the handlers installed on page ready
#[wasm_bindgen]
pub fn unmount() {
    MOUNTED.with(|slot| slot.borrow_mut().take());
}

/// Entry point: bind the handlers once the document is ready
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = BrowserWindow::current().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let config = Config::for_origin(window.origin()?);
    if let Err(e) = init_tracing(&config.log_filter) {
        web_sys::console::warn_1(&format!("logging unavailable: {e}").into());
    }

    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;

    if document.ready_state() == DocumentReadyState::Loading {
        let on_ready = Closure::once_into_js(move || mount_global(&config));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        mount_global(&config);
    }

    Ok(())
}
