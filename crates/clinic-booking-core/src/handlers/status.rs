//! Appointment and lab test status lookups.
//!
//! Input references are uppercased and matched exactly. For appointments an
//! unknown id and a wrong contact produce the same failure message.

use crate::clinic::{Clinic, Outcome};
use crate::dataset::{find_appointment, find_test_order};
use crate::error::ClinicResult;
use crate::models::{AppointmentRecord, TestOrderRecord};
use crate::render::escape_html;
use crate::view::bindings::{STATUS_CHECK, TEST_STATUS};
use crate::view::Surface;

pub fn appointment_found_message(id: &str, appointment: &AppointmentRecord) -> String {
    format!(
        "✅ **Success!** Status for Appointment ID {}: {}. Scheduled with {} on {}.",
        escape_html(id),
        appointment.status,
        escape_html(appointment.doctor),
        appointment.date
    )
}

pub fn appointment_not_found_message(id: &str) -> String {
    format!(
        "❌ **Error!** Appointment ID {} not found or contact number incorrect.",
        escape_html(id)
    )
}

pub fn test_found_message(order: &TestOrderRecord) -> String {
    format!(
        "✅ **Status Found:** {} is currently <strong>{}</strong>.",
        escape_html(order.test),
        order.status
    )
}

pub fn test_not_found_message(reference: &str) -> String {
    format!(
        "❌ **Error!** Test reference {} not found.",
        escape_html(reference)
    )
}

impl<S: Surface> Clinic<S> {
    pub(crate) fn check_appointment_status(&mut self) -> ClinicResult<Outcome> {
        let view = STATUS_CHECK;
        let id = self.surface.value(view.appointment_id)?.to_uppercase();
        let contact = self.surface.value(view.contact)?;

        let outcome = match find_appointment(&id, &contact) {
            Some(appointment) => {
                self.surface
                    .show_panel(view.result, &appointment_found_message(&id, appointment))?;
                Outcome::StatusFound {
                    reference: id,
                    status: appointment.status.to_string(),
                }
            }
            None => {
                self.surface
                    .show_panel(view.result, &appointment_not_found_message(&id))?;
                Outcome::StatusNotFound { reference: id }
            }
        };

        log::info!("appointment status lookup: {:?}", outcome);
        Ok(outcome)
    }

    pub(crate) fn check_test_status(&mut self) -> ClinicResult<Outcome> {
        let view = TEST_STATUS;
        let reference = self.surface.value(view.reference)?.to_uppercase();

        let outcome = match find_test_order(&reference) {
            Some(order) => {
                self.surface.show_panel(view.result, &test_found_message(order))?;
                Outcome::StatusFound {
                    reference,
                    status: order.status.to_string(),
                }
            }
            None => {
                self.surface
                    .show_panel(view.result, &test_not_found_message(&reference))?;
                Outcome::StatusNotFound { reference }
            }
        };

        log::info!("test status lookup: {:?}", outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{APPOINTMENTS, TEST_ORDERS};

    #[test]
    fn test_appointment_messages() {
        assert_eq!(
            appointment_found_message("CC1001A", &APPOINTMENTS[0]),
            "✅ **Success!** Status for Appointment ID CC1001A: Confirmed. Scheduled with Dr. Anya Sharma on 2025-11-05."
        );
        assert_eq!(
            appointment_not_found_message("<X>"),
            "❌ **Error!** Appointment ID &lt;X&gt; not found or contact number incorrect."
        );
    }

    #[test]
    fn test_test_messages() {
        assert_eq!(
            test_found_message(&TEST_ORDERS[1]),
            "✅ **Status Found:** Thyroid Profile is currently <strong>Pending</strong>."
        );
        assert_eq!(
            test_not_found_message("LAB0"),
            "❌ **Error!** Test reference LAB0 not found."
        );
    }
}
