//! Browser entry point for the clinic booking front-end.
//!
//! Builds a [`dom::DomSurface`] over the loaded page, boots the core
//! controller once the DOM is parsed and attaches the listeners it asks for.
//! Configuration comes from an optional
//! `<script type="application/json" id="clinic-config">` element.

pub mod dom;
pub mod wiring;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use clinic_booking_core::{Clinic, ClinicConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::dom::DomSurface;
use crate::wiring::{attach, js_error};

/// Id of the optional configuration element.
pub const CONFIG_ELEMENT: &str = "clinic-config";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    schedule_boot().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Boot now if the DOM is parsed, otherwise on `DOMContentLoaded`.
fn schedule_boot() -> Result<()> {
    let window = web_sys::window().context("no window")?;
    let document = window.document().context("no document")?;

    if document.ready_state() != "loading" {
        return boot(window, document);
    }

    let target = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = boot(window, document) {
            log::error!("boot failed: {:#}", e);
        }
    });
    target
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(js_error)
}

fn load_config(document: &Document) -> ClinicConfig {
    let json = document
        .get_element_by_id(CONFIG_ELEMENT)
        .and_then(|e| e.text_content());
    ClinicConfig::from_json_or_default(json.as_deref())
}

fn boot(window: Window, document: Document) -> Result<()> {
    // Open the logger before parsing so config errors reach the console.
    let _ = console_log::init_with_level(log::Level::Trace);
    let config = load_config(&document);
    log::set_max_level(config.log_level().to_level_filter());
    log::info!("clinic booking front-end starting");

    let surface = DomSurface::new(window, document.clone());
    let clinic = Rc::new(RefCell::new(Clinic::new(surface, config)));
    log::debug!("config: {:?}", clinic.borrow().config());
    let listeners = clinic.borrow_mut().boot()?;

    for listener in listeners {
        let description = format!("{:?}", listener);
        if let Err(e) = attach(&document, &clinic, listener) {
            log::error!("could not attach {}: {:#}", description, e);
        }
    }
    Ok(())
}
