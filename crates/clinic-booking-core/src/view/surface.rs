//! The surface trait and the values that cross it.

use serde::Serialize;

use crate::error::ClinicResult;

/// One rendered record: a keyed block with a CSS class and inner markup.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Card {
    /// Record key (doctor ID, reference ID, ...), unique within a container
    pub key: String,
    /// CSS class of the card element (e.g., "doctor-card")
    pub class: &'static str,
    /// Inner HTML
    pub markup: String,
}

impl Card {
    /// Outer HTML of the card, as a container would hold it.
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"{}\" data-key=\"{}\">{}</div>",
            self.class,
            crate::render::escape_html(&self.key),
            self.markup
        )
    }
}

/// Opaque handle of a scheduled panel hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimerHandle(pub i32);

/// Everything the handlers need from a page.
///
/// Element ids refer to [`super::bindings`]. Operations on an id the page
/// does not contain fail with [`crate::ClinicError::MissingElement`], except
/// [`Surface::exists`] which is how page markers are probed.
pub trait Surface {
    /// Whether an element with this id is present.
    fn exists(&self, id: &str) -> bool;

    /// Ids of every date-typed input on the page. An input without an id
    /// is given one.
    fn date_inputs(&self) -> Vec<String>;

    /// Replace the children of `container` with `cards`.
    fn replace_cards(&mut self, container: &str, cards: &[Card]) -> ClinicResult<()>;

    /// Remove `class` from every card in `container`.
    fn clear_card_class(&mut self, container: &str, class: &str) -> ClinicResult<()>;

    /// Add `class` to the card with `key` in `container`.
    fn add_card_class(&mut self, container: &str, key: &str, class: &str) -> ClinicResult<()>;

    /// Current value of a form control.
    fn value(&self, id: &str) -> ClinicResult<String>;

    fn set_value(&mut self, id: &str, value: &str) -> ClinicResult<()>;

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> ClinicResult<()>;

    /// Show (`Some`) or clear (`None`) the inline error next to a field and
    /// mark the field invalid or valid accordingly.
    fn set_field_error(&mut self, field: &str, error: Option<&str>) -> ClinicResult<()>;

    /// The form's built-in constraint check (required fields, custom validity).
    fn form_is_valid(&self, form: &str) -> ClinicResult<bool>;

    /// Restore the form's controls to their default values.
    fn reset_form(&mut self, form: &str) -> ClinicResult<()>;

    /// Set a message panel's markup and make it visible.
    fn show_panel(&mut self, panel: &str, markup: &str) -> ClinicResult<()>;

    fn scroll_into_view(&mut self, id: &str) -> ClinicResult<()>;

    /// Blocking user notice.
    fn alert(&mut self, message: &str);

    /// Hide `panel` once `delay_ms` has elapsed.
    fn schedule_hide(&mut self, panel: &str, delay_ms: u32) -> ClinicResult<TimerHandle>;

    /// Cancel a pending hide. Unknown or already fired handles are ignored.
    fn cancel_timer(&mut self, handle: TimerHandle);
}
