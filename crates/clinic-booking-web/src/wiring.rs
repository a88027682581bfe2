//! Attaching DOM listeners that feed events into the shared controller.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use clinic_booking_core::{Clinic, ClinicEvent, Listener};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

use crate::dom::DomSurface;

/// Controller shared by every listener on the UI thread.
pub type SharedClinic = Rc<RefCell<Clinic<DomSurface>>>;

pub(crate) fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

/// Selector of the "Select Doctor" buttons inside a card container.
const SELECT_BUTTON: &str = ".select-btn[data-doctor-id]";

/// Parse a button's `data-doctor-id`.
pub(crate) fn parse_doctor_id(attribute: Option<&str>) -> Option<u32> {
    attribute?.trim().parse().ok()
}

/// Run one event through the controller, logging the outcome.
pub fn dispatch(clinic: &SharedClinic, event: ClinicEvent) {
    let Ok(mut clinic) = clinic.try_borrow_mut() else {
        log::warn!("dropping {:?}: controller busy", event);
        return;
    };
    match clinic.handle(event) {
        Ok(outcome) => log::debug!("outcome: {:?}", outcome),
        Err(e) => log::error!("handler failed: {}", e),
    }
}

fn listen<F>(target: &Element, kind: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn element(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .with_context(|| format!("element #{} not found", id))
}

/// Attach one listener requested by [`Clinic::boot`].
pub fn attach(document: &Document, clinic: &SharedClinic, listener: Listener) -> Result<()> {
    let shared = clinic.clone();
    match listener {
        Listener::DateChange { field } => {
            let target = element(document, &field)?;
            listen(&target, "change", move |_| {
                dispatch(&shared, ClinicEvent::DateChanged { field: field.clone() })
            })
        }
        Listener::DoctorCardClicks { container } => {
            // Delegated, so the handler survives re-rendering of the cards.
            let target = element(document, container)?;
            listen(&target, "click", move |event| {
                let button = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|e| e.closest(SELECT_BUTTON).ok().flatten());
                let Some(button) = button else { return };

                match parse_doctor_id(button.get_attribute("data-doctor-id").as_deref()) {
                    Some(doctor_id) => dispatch(&shared, ClinicEvent::DoctorSelected { doctor_id }),
                    None => log::warn!("select button without a valid doctor id"),
                }
            })
        }
        Listener::Submit { form, event } => {
            let target = element(document, form)?;
            listen(&target, "submit", move |e| {
                e.prevent_default();
                dispatch(&shared, event.clone())
            })
        }
        Listener::Click { target, event } => {
            let target = element(document, target)?;
            listen(&target, "click", move |_| dispatch(&shared, event.clone()))
        }
        Listener::Change { target, event } => {
            let target = element(document, target)?;
            listen(&target, "change", move |_| dispatch(&shared, event.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_doctor_id() {
        assert_eq!(parse_doctor_id(Some("101")), Some(101));
        assert_eq!(parse_doctor_id(Some(" 102 ")), Some(102));
        assert_eq!(parse_doctor_id(Some("abc")), None);
        assert_eq!(parse_doctor_id(Some("-1")), None);
        assert_eq!(parse_doctor_id(None), None);
    }
}
