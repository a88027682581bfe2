//! In-memory surface.
//!
//! Models just enough of a page for the handlers: containers of cards, form
//! controls with required/min/custom-validity constraints, message panels,
//! alerts and a manual clock for scheduled hides.

use std::collections::BTreeSet;

use super::bindings::{
    APPOINTMENT, DOCTORS, HOME, NETWORK, STATUS_CHECK, TEST_BOOKING, TEST_STATUS,
};
use super::surface::{Card, Surface, TimerHandle};
use crate::bootstrap::PageKind;
use crate::error::{ClinicError, ClinicResult};

/// Kind of form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Date,
    /// Hidden inputs keep their value on reset and skip constraint checks.
    Hidden,
    Select,
}

/// A card as held by a container, with its current CSS classes.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryCard {
    pub card: Card,
    pub classes: BTreeSet<String>,
}

#[derive(Debug, Clone, Default)]
struct Element {
    control: Option<ControlKind>,
    form: Option<String>,
    required: bool,
    value: String,
    default_value: String,
    attributes: Vec<(String, String)>,
    error: Option<String>,
    invalid: bool,
    cards: Vec<MemoryCard>,
    markup: String,
    visible: bool,
}

impl Element {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn satisfies_constraints(&self) -> bool {
        if self.control == Some(ControlKind::Hidden) {
            return true;
        }
        if self.invalid || (self.required && self.value.is_empty()) {
            return false;
        }
        if self.control == Some(ControlKind::Date) && !self.value.is_empty() {
            // ISO dates order lexicographically.
            if let Some(min) = self.attribute("min") {
                return self.value.as_str() >= min;
            }
        }
        true
    }
}

#[derive(Debug, Clone)]
struct PendingHide {
    handle: TimerHandle,
    panel: String,
    due_ms: u64,
}

/// In-memory [`Surface`] with document-ordered elements.
#[derive(Debug, Default)]
pub struct MemorySurface {
    elements: Vec<(String, Element)>,
    alerts: Vec<String>,
    scrolled: Vec<String>,
    timers: Vec<PendingHide>,
    now_ms: u64,
    next_handle: i32,
}

impl MemorySurface {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page containing the elements of each listed page.
    pub fn for_pages(pages: &[PageKind]) -> Self {
        pages
            .iter()
            .fold(Self::new(), |surface, page| surface.with_page(*page))
    }

    /// Add every element a page's markup declares.
    pub fn with_page(self, page: PageKind) -> Self {
        match page {
            PageKind::Home => self.with_element(HOME.doctors),
            PageKind::Appointment => self
                .with_element(APPOINTMENT.doctors)
                .with_element(APPOINTMENT.booking_section)
                .with_element(APPOINTMENT.form)
                .with_control(APPOINTMENT.selected_doctor, ControlKind::Text, Some(APPOINTMENT.form), false)
                .with_control(APPOINTMENT.doctor_id, ControlKind::Hidden, Some(APPOINTMENT.form), false)
                .with_control(APPOINTMENT.date, ControlKind::Date, Some(APPOINTMENT.form), true)
                .with_control(APPOINTMENT.time, ControlKind::Select, Some(APPOINTMENT.form), true)
                .with_element(APPOINTMENT.cancel)
                .with_element(APPOINTMENT.message),
            PageKind::Doctors => self
                .with_control(DOCTORS.specialty, ControlKind::Select, None, false)
                .with_default(DOCTORS.specialty, "all")
                .with_element(DOCTORS.doctors),
            PageKind::StatusCheck => self
                .with_element(STATUS_CHECK.form)
                .with_control(STATUS_CHECK.appointment_id, ControlKind::Text, Some(STATUS_CHECK.form), true)
                .with_control(STATUS_CHECK.contact, ControlKind::Text, Some(STATUS_CHECK.form), true)
                .with_element(STATUS_CHECK.result)
                .with_element(STATUS_CHECK.recent),
            PageKind::TestBooking => self
                .with_element(TEST_BOOKING.form)
                .with_control(TEST_BOOKING.date, ControlKind::Date, Some(TEST_BOOKING.form), true)
                .with_element(TEST_BOOKING.result),
            PageKind::TestStatus => self
                .with_element(TEST_STATUS.form)
                .with_control(TEST_STATUS.reference, ControlKind::Text, Some(TEST_STATUS.form), true)
                .with_element(TEST_STATUS.result)
                .with_element(TEST_STATUS.recent),
            PageKind::Network => self.with_element(NETWORK.hospitals),
        }
    }

    /// Add a plain element (container, panel, button, form).
    pub fn with_element(mut self, id: &str) -> Self {
        self.insert(id, Element::default());
        self
    }

    /// Add a form control.
    pub fn with_control(
        mut self,
        id: &str,
        kind: ControlKind,
        form: Option<&str>,
        required: bool,
    ) -> Self {
        self.insert(
            id,
            Element {
                control: Some(kind),
                form: form.map(str::to_string),
                required,
                ..Element::default()
            },
        );
        self
    }

    /// Set a control's default (and current) value.
    pub fn with_default(mut self, id: &str, value: &str) -> Self {
        if let Some(el) = self.get_mut(id) {
            el.default_value = value.to_string();
            el.value = value.to_string();
        }
        self
    }

    fn insert(&mut self, id: &str, element: Element) {
        match self.get_mut(id) {
            Some(existing) => *existing = element,
            None => self.elements.push((id.to_string(), element)),
        }
    }

    fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|(i, _)| i == id).map(|(_, e)| e)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements
            .iter_mut()
            .find(|(i, _)| i == id)
            .map(|(_, e)| e)
    }

    fn element(&self, id: &str) -> ClinicResult<&Element> {
        self.get(id)
            .ok_or_else(|| ClinicError::MissingElement(id.to_string()))
    }

    fn element_mut(&mut self, id: &str) -> ClinicResult<&mut Element> {
        self.get_mut(id)
            .ok_or_else(|| ClinicError::MissingElement(id.to_string()))
    }

    fn control_mut(&mut self, id: &str) -> ClinicResult<&mut Element> {
        let el = self.element_mut(id)?;
        if el.control.is_none() {
            return Err(ClinicError::Surface(format!("#{} is not a form control", id)));
        }
        Ok(el)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Cards currently in a container (empty if the container is missing).
    pub fn cards(&self, container: &str) -> &[MemoryCard] {
        self.get(container).map(|e| e.cards.as_slice()).unwrap_or(&[])
    }

    /// Keys of the cards in a container, in order.
    pub fn card_keys(&self, container: &str) -> Vec<String> {
        self.cards(container)
            .iter()
            .map(|c| c.card.key.clone())
            .collect()
    }

    /// Keys of the cards in a container carrying `class`.
    pub fn keys_with_class(&self, container: &str, class: &str) -> Vec<String> {
        self.cards(container)
            .iter()
            .filter(|c| c.classes.contains(class))
            .map(|c| c.card.key.clone())
            .collect()
    }

    /// Concatenated outer HTML of a container's cards.
    pub fn container_html(&self, container: &str) -> String {
        self.cards(container).iter().map(|c| c.card.to_html()).collect()
    }

    pub fn field_error(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|e| e.error.as_deref())
    }

    pub fn is_invalid(&self, id: &str) -> bool {
        self.get(id).map(|e| e.invalid).unwrap_or(false)
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.get(id).and_then(|e| e.attribute(name))
    }

    /// Markup of a panel, if it has ever been shown.
    pub fn panel_markup(&self, id: &str) -> Option<&str> {
        self.get(id)
            .map(|e| e.markup.as_str())
            .filter(|m| !m.is_empty())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.get(id).map(|e| e.visible).unwrap_or(false)
    }

    /// Alerts raised so far, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// Ids scrolled into view, oldest first.
    pub fn scrolled(&self) -> &[String] {
        &self.scrolled
    }

    /// Number of scheduled hides that have not fired or been cancelled.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Advance the manual clock, firing every hide that falls due.
    /// Returns the number of hides fired.
    pub fn advance(&mut self, ms: u64) -> usize {
        self.now_ms += ms;
        let now = self.now_ms;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.timers)
                .into_iter()
                .partition(|t| t.due_ms <= now);
        self.timers = pending;
        due.sort_by_key(|t| t.due_ms);

        for timer in &due {
            if let Some(el) = self.get_mut(&timer.panel) {
                el.visible = false;
            }
        }
        due.len()
    }
}

impl Surface for MemorySurface {
    fn exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn date_inputs(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter(|(_, e)| e.control == Some(ControlKind::Date))
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn replace_cards(&mut self, container: &str, cards: &[Card]) -> ClinicResult<()> {
        let el = self.element_mut(container)?;
        el.cards = cards
            .iter()
            .map(|card| MemoryCard {
                card: card.clone(),
                classes: BTreeSet::from([card.class.to_string()]),
            })
            .collect();
        Ok(())
    }

    fn clear_card_class(&mut self, container: &str, class: &str) -> ClinicResult<()> {
        for card in &mut self.element_mut(container)?.cards {
            card.classes.remove(class);
        }
        Ok(())
    }

    fn add_card_class(&mut self, container: &str, key: &str, class: &str) -> ClinicResult<()> {
        let card = self
            .element_mut(container)?
            .cards
            .iter_mut()
            .find(|c| c.card.key == key)
            .ok_or_else(|| ClinicError::Surface(format!("no card {} in #{}", key, container)))?;
        card.classes.insert(class.to_string());
        Ok(())
    }

    fn value(&self, id: &str) -> ClinicResult<String> {
        let el = self.element(id)?;
        if el.control.is_none() {
            return Err(ClinicError::Surface(format!("#{} is not a form control", id)));
        }
        Ok(el.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) -> ClinicResult<()> {
        self.control_mut(id)?.value = value.to_string();
        Ok(())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> ClinicResult<()> {
        let el = self.element_mut(id)?;
        match el.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => el.attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn set_field_error(&mut self, field: &str, error: Option<&str>) -> ClinicResult<()> {
        let el = self.control_mut(field)?;
        el.error = error.map(str::to_string);
        el.invalid = error.is_some();
        Ok(())
    }

    fn form_is_valid(&self, form: &str) -> ClinicResult<bool> {
        self.element(form)?;
        Ok(self
            .elements
            .iter()
            .filter(|(_, e)| e.form.as_deref() == Some(form))
            .all(|(_, e)| e.satisfies_constraints()))
    }

    fn reset_form(&mut self, form: &str) -> ClinicResult<()> {
        self.element(form)?;
        for (_, el) in self
            .elements
            .iter_mut()
            .filter(|(_, e)| e.form.as_deref() == Some(form))
        {
            if el.control != Some(ControlKind::Hidden) {
                el.value = el.default_value.clone();
            }
        }
        Ok(())
    }

    fn show_panel(&mut self, panel: &str, markup: &str) -> ClinicResult<()> {
        let el = self.element_mut(panel)?;
        el.markup = markup.to_string();
        el.visible = true;
        Ok(())
    }

    fn scroll_into_view(&mut self, id: &str) -> ClinicResult<()> {
        self.element(id)?;
        self.scrolled.push(id.to_string());
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn schedule_hide(&mut self, panel: &str, delay_ms: u32) -> ClinicResult<TimerHandle> {
        self.element(panel)?;
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.timers.push(PendingHide {
            handle,
            panel: panel.to_string(),
            due_ms: self.now_ms + u64::from(delay_ms),
        });
        Ok(handle)
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_page() -> MemorySurface {
        MemorySurface::new()
            .with_element("f")
            .with_control("name", ControlKind::Text, Some("f"), true)
            .with_control("when", ControlKind::Date, Some("f"), false)
            .with_control("secret", ControlKind::Hidden, Some("f"), true)
            .with_element("panel")
    }

    #[test]
    fn test_missing_element() {
        let mut surface = MemorySurface::new();
        assert!(!surface.exists("nope"));
        let err = surface.set_value("nope", "x").unwrap_err();
        assert!(matches!(err, ClinicError::MissingElement(id) if id == "nope"));
    }

    #[test]
    fn test_required_and_min_constraints() {
        let mut surface = form_page();
        assert!(!surface.form_is_valid("f").unwrap());

        surface.set_value("name", "Jane").unwrap();
        assert!(surface.form_is_valid("f").unwrap());

        surface.set_attribute("when", "min", "2026-01-10").unwrap();
        surface.set_value("when", "2026-01-09").unwrap();
        assert!(!surface.form_is_valid("f").unwrap());
        surface.set_value("when", "2026-01-10").unwrap();
        assert!(surface.form_is_valid("f").unwrap());

        surface.set_field_error("when", Some("bad")).unwrap();
        assert!(!surface.form_is_valid("f").unwrap());
    }

    #[test]
    fn test_reset_keeps_hidden_values() {
        let mut surface = form_page();
        surface.set_value("name", "Jane").unwrap();
        surface.set_value("secret", "42").unwrap();
        surface.reset_form("f").unwrap();
        assert_eq!(surface.value("name").unwrap(), "");
        assert_eq!(surface.value("secret").unwrap(), "42");
    }

    #[test]
    fn test_timers_fire_and_cancel() {
        let mut surface = form_page();
        surface.show_panel("panel", "hello").unwrap();
        let first = surface.schedule_hide("panel", 100).unwrap();
        surface.cancel_timer(first);
        surface.schedule_hide("panel", 100).unwrap();

        assert_eq!(surface.advance(99), 0);
        assert!(surface.is_visible("panel"));
        assert_eq!(surface.advance(1), 1);
        assert!(!surface.is_visible("panel"));
        assert_eq!(surface.pending_timers(), 0);
    }

    #[test]
    fn test_card_classes() {
        let mut surface = MemorySurface::new().with_element("c");
        let card = |key: &str| Card {
            key: key.into(),
            class: "doctor-card",
            markup: String::new(),
        };
        surface.replace_cards("c", &[card("1"), card("2")]).unwrap();
        surface.add_card_class("c", "2", "selected").unwrap();
        assert_eq!(surface.keys_with_class("c", "selected"), vec!["2"]);
        assert_eq!(surface.keys_with_class("c", "doctor-card").len(), 2);

        surface.clear_card_class("c", "selected").unwrap();
        assert!(surface.keys_with_class("c", "selected").is_empty());
        assert!(surface.add_card_class("c", "9", "selected").is_err());
    }

    #[test]
    fn test_page_presets_carry_markers() {
        let surface = MemorySurface::for_pages(&PageKind::ALL);
        for page in PageKind::ALL {
            assert!(surface.exists(page.marker()), "{:?}", page);
        }
        assert_eq!(
            surface.date_inputs(),
            vec![APPOINTMENT.date.to_string(), TEST_BOOKING.date.to_string()]
        );
    }
}
