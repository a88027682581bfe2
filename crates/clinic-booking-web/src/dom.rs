//! [`Surface`] implementation over the browser DOM.

use clinic_booking_core::{Card, ClinicError, ClinicResult, Surface, TimerHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};

/// Value given to `setCustomValidity` for a failed field.
const INVALID: &str = "Invalid";

/// Id assigned to the `index`-th date input when the markup gives it none.
pub(crate) fn generated_date_id(index: u32) -> String {
    format!("clinic-date-{}", index)
}

pub(crate) fn surface_error(value: JsValue) -> ClinicError {
    ClinicError::Surface(format!("{:?}", value))
}

/// The live page.
pub struct DomSurface {
    window: Window,
    document: Document,
}

impl DomSurface {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn element(&self, id: &str) -> ClinicResult<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| ClinicError::MissingElement(id.to_string()))
    }

    fn html_element(&self, id: &str) -> ClinicResult<HtmlElement> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ClinicError::Surface(format!("#{} is not an HTML element", id)))
    }

    fn form(&self, id: &str) -> ClinicResult<HtmlFormElement> {
        self.element(id)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| ClinicError::Surface(format!("#{} is not a form", id)))
    }

    fn input(&self, id: &str) -> ClinicResult<HtmlInputElement> {
        self.element(id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| ClinicError::Surface(format!("#{} is not an input", id)))
    }

    /// Direct children of `container` carrying a card key.
    fn cards(&self, container: &str) -> ClinicResult<Vec<Element>> {
        let children = self.element(container)?.children();
        Ok((0..children.length())
            .filter_map(|i| children.item(i))
            .filter(|child| child.has_attribute("data-key"))
            .collect())
    }
}

fn set_display(element: &HtmlElement, display: &str) -> ClinicResult<()> {
    element
        .style()
        .set_property("display", display)
        .map_err(surface_error)
}

impl Surface for DomSurface {
    fn exists(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn date_inputs(&self) -> Vec<String> {
        let nodes = match self.document.query_selector_all("input[type=\"date\"]") {
            Ok(nodes) => nodes,
            Err(e) => {
                log::error!("date input query failed: {:?}", e);
                return Vec::new();
            }
        };

        let mut ids = Vec::new();
        for i in 0..nodes.length() {
            let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let mut id = element.id();
            if id.is_empty() {
                id = generated_date_id(i);
                element.set_id(&id);
                log::debug!("date input {} has no id, assigned #{}", i, id);
            }
            ids.push(id);
        }
        ids
    }

    fn replace_cards(&mut self, container: &str, cards: &[Card]) -> ClinicResult<()> {
        let target = self.element(container)?;
        target.set_inner_html("");
        for card in cards {
            let element = self.document.create_element("div").map_err(surface_error)?;
            element.set_class_name(card.class);
            element
                .set_attribute("data-key", &card.key)
                .map_err(surface_error)?;
            element.set_inner_html(&card.markup);
            target.append_child(&element).map_err(surface_error)?;
        }
        Ok(())
    }

    fn clear_card_class(&mut self, container: &str, class: &str) -> ClinicResult<()> {
        for card in self.cards(container)? {
            card.class_list().remove_1(class).map_err(surface_error)?;
        }
        Ok(())
    }

    fn add_card_class(&mut self, container: &str, key: &str, class: &str) -> ClinicResult<()> {
        let card = self
            .cards(container)?
            .into_iter()
            .find(|c| c.get_attribute("data-key").as_deref() == Some(key))
            .ok_or_else(|| ClinicError::Surface(format!("no card {} in #{}", key, container)))?;
        card.class_list().add_1(class).map_err(surface_error)
    }

    fn value(&self, id: &str) -> ClinicResult<String> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Ok(input.value())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Ok(select.value())
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            Ok(area.value())
        } else {
            Err(ClinicError::Surface(format!("#{} is not a form control", id)))
        }
    }

    fn set_value(&mut self, id: &str, value: &str) -> ClinicResult<()> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else {
            return Err(ClinicError::Surface(format!("#{} is not a form control", id)));
        }
        Ok(())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> ClinicResult<()> {
        self.element(id)?
            .set_attribute(name, value)
            .map_err(surface_error)
    }

    fn set_field_error(&mut self, field: &str, error: Option<&str>) -> ClinicResult<()> {
        let input = self.input(field)?;
        let slot = input
            .closest(".form-group")
            .map_err(surface_error)?
            .map(|group| group.query_selector(".error-message"))
            .transpose()
            .map_err(surface_error)?
            .flatten();

        match slot {
            Some(slot) => slot.set_text_content(Some(error.unwrap_or(""))),
            None => log::debug!("#{} has no error slot", field),
        }
        input.set_custom_validity(if error.is_some() { INVALID } else { "" });
        Ok(())
    }

    fn form_is_valid(&self, form: &str) -> ClinicResult<bool> {
        Ok(self.form(form)?.check_validity())
    }

    fn reset_form(&mut self, form: &str) -> ClinicResult<()> {
        self.form(form)?.reset();
        Ok(())
    }

    fn show_panel(&mut self, panel: &str, markup: &str) -> ClinicResult<()> {
        let element = self.html_element(panel)?;
        element.set_inner_html(markup);
        set_display(&element, "block")
    }

    fn scroll_into_view(&mut self, id: &str) -> ClinicResult<()> {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.element(id)?
            .scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("alert failed: {:?}", e);
        }
    }

    fn schedule_hide(&mut self, panel: &str, delay_ms: u32) -> ClinicResult<TimerHandle> {
        // Fail now rather than inside the callback.
        self.html_element(panel)?;

        let document = self.document.clone();
        let panel = panel.to_string();
        let callback = Closure::once_into_js(move || {
            let hidden = document
                .get_element_by_id(&panel)
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
                .map(|e| set_display(&e, "none"));
            if !matches!(hidden, Some(Ok(()))) {
                log::warn!("could not hide #{}", panel);
            }
        });

        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay,
            )
            .map_err(surface_error)?;
        Ok(TimerHandle(handle))
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.window.clear_timeout_with_handle(handle.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_date_ids_are_distinct() {
        assert_eq!(generated_date_id(0), "clinic-date-0");
        assert_ne!(generated_date_id(1), generated_date_id(2));
    }
}
