//! Appointment and lab test booking forms.
//!
//! A successful booking only produces a confirmation with a fresh reference
//! id. Nothing is recorded, so the reference cannot be looked up later.

use crate::clinic::{Clinic, Outcome, Rejection};
use crate::error::ClinicResult;
use crate::reference::ReferenceId;
use crate::render::escape_html;
use crate::validate::validate_date_field;
use crate::view::bindings::{APPOINTMENT, TEST_BOOKING};
use crate::view::Surface;

pub const NO_DOCTOR_ALERT: &str = "Please select a doctor first.";
pub const INVALID_APPOINTMENT_ALERT: &str = "Please fix the errors in the form.";
pub const INVALID_TEST_ALERT: &str = "Please ensure the test date is valid.";

/// Confirmation shown after booking an appointment.
pub fn appointment_confirmation(
    doctor: &str,
    date: &str,
    time: &str,
    reference: &ReferenceId,
) -> String {
    format!(
        "✅ **Confirmed!** Appointment booked with {} on {} at {}. Ref ID: {}",
        escape_html(doctor),
        escape_html(date),
        escape_html(time),
        reference
    )
}

/// Confirmation shown after booking a lab test.
pub fn test_confirmation(date: &str, reference: &ReferenceId) -> String {
    format!(
        "✅ **Success!** Test booked for {}. Ref ID: {}",
        escape_html(date),
        reference
    )
}

impl<S: Surface> Clinic<S> {
    pub(crate) fn submit_appointment(&mut self) -> ClinicResult<Outcome> {
        let view = APPOINTMENT;

        if self.surface.value(view.doctor_id)?.is_empty() {
            self.surface.alert(NO_DOCTOR_ALERT);
            return Ok(Outcome::Rejected(Rejection::NoDoctorSelected));
        }

        let today = self.today();
        let date_check = validate_date_field(&mut self.surface, view.date, today)?;
        if !date_check.is_ok() || !self.surface.form_is_valid(view.form)? {
            self.surface.alert(INVALID_APPOINTMENT_ALERT);
            return Ok(Outcome::Rejected(Rejection::InvalidForm));
        }

        let doctor = self.surface.value(view.selected_doctor)?;
        let date = self.surface.value(view.date)?;
        let time = self.surface.value(view.time)?;
        let reference = ReferenceId::generate(
            &self.config.appointment_prefix,
            self.config.max_reference_number,
            &mut self.rng,
        );

        let message = appointment_confirmation(&doctor, &date, &time, &reference);
        self.show_transient(view.message, &message)?;
        self.surface.reset_form(view.form)?;
        self.clear_selection()?;

        log::info!("appointment {} booked with {} on {} at {}", reference, doctor, date, time);
        Ok(Outcome::Booked { reference })
    }

    pub(crate) fn cancel_appointment(&mut self) -> ClinicResult<Outcome> {
        self.surface.reset_form(APPOINTMENT.form)?;
        self.clear_selection()?;
        Ok(Outcome::SelectionCleared)
    }

    pub(crate) fn submit_test_booking(&mut self) -> ClinicResult<Outcome> {
        let view = TEST_BOOKING;

        let today = self.today();
        let date_check = validate_date_field(&mut self.surface, view.date, today)?;
        if !date_check.is_ok() || !self.surface.form_is_valid(view.form)? {
            self.surface.alert(INVALID_TEST_ALERT);
            return Ok(Outcome::Rejected(Rejection::InvalidForm));
        }

        let date = self.surface.value(view.date)?;
        let reference = ReferenceId::generate(
            &self.config.test_prefix,
            self.config.max_reference_number,
            &mut self.rng,
        );

        self.show_transient(view.result, &test_confirmation(&date, &reference))?;
        self.surface.reset_form(view.form)?;

        log::info!("lab test {} booked for {}", reference, date);
        Ok(Outcome::Booked { reference })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointment_confirmation() {
        let reference = ReferenceId::parse("CC42", "CC").unwrap();
        assert_eq!(
            appointment_confirmation("Dr. Anya Sharma", "2026-01-02", "10:00", &reference),
            "✅ **Confirmed!** Appointment booked with Dr. Anya Sharma on 2026-01-02 at 10:00. Ref ID: CC42"
        );
    }

    #[test]
    fn test_confirmation_escapes_field_values() {
        let reference = ReferenceId::parse("LAB7", "LAB").unwrap();
        assert_eq!(
            test_confirmation("<i>2026-01-02</i>", &reference),
            "✅ **Success!** Test booked for &lt;i&gt;2026-01-02&lt;/i&gt;. Ref ID: LAB7"
        );
    }
}
