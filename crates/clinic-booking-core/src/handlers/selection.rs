//! Doctor selection on the appointment page.

use crate::clinic::{Clinic, Outcome};
use crate::dataset::find_doctor;
use crate::error::ClinicResult;
use crate::view::bindings::APPOINTMENT;
use crate::view::Surface;

pub(crate) const SELECTED_CLASS: &str = "selected";

impl<S: Surface> Clinic<S> {
    /// Mark one doctor card selected and fill the booking form's doctor fields.
    pub(crate) fn select_doctor(&mut self, doctor_id: u32) -> ClinicResult<Outcome> {
        let Some(doctor) = find_doctor(doctor_id) else {
            log::warn!("ignoring selection of unknown doctor {}", doctor_id);
            return Ok(Outcome::Ignored);
        };

        let view = APPOINTMENT;
        self.surface.clear_card_class(view.doctors, SELECTED_CLASS)?;
        self.surface
            .add_card_class(view.doctors, &doctor.id.to_string(), SELECTED_CLASS)?;
        self.surface.set_value(view.selected_doctor, doctor.name)?;
        self.surface.set_value(view.doctor_id, &doctor.id.to_string())?;
        self.state.selection.select(doctor);
        self.surface.scroll_into_view(view.booking_section)?;

        log::debug!("selected doctor {} ({})", doctor.id, doctor.name);
        Ok(Outcome::DoctorSelected { id: doctor.id })
    }

    /// Put the doctor fields back to "nothing selected".
    pub(crate) fn clear_selection(&mut self) -> ClinicResult<()> {
        let view = APPOINTMENT;
        self.surface
            .set_value(view.selected_doctor, &self.config.doctor_placeholder)?;
        self.surface.set_value(view.doctor_id, "")?;
        self.surface.clear_card_class(view.doctors, SELECTED_CLASS)?;
        self.state.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::PageKind;
    use crate::config::ClinicConfig;
    use crate::view::MemorySurface;

    fn booted() -> Clinic<MemorySurface> {
        let mut clinic = Clinic::new(
            MemorySurface::for_pages(&[PageKind::Appointment]),
            ClinicConfig::default(),
        );
        clinic.boot().unwrap();
        clinic
    }

    #[test]
    fn test_select_then_reselect() {
        let mut clinic = booted();
        clinic.select_doctor(101).unwrap();
        let outcome = clinic.select_doctor(103).unwrap();
        assert_eq!(outcome, Outcome::DoctorSelected { id: 103 });

        let surface = clinic.surface();
        assert_eq!(surface.keys_with_class(APPOINTMENT.doctors, SELECTED_CLASS), vec!["103"]);
        assert_eq!(surface.value(APPOINTMENT.selected_doctor).unwrap(), "Dr. Leena Singh");
        assert_eq!(surface.value(APPOINTMENT.doctor_id).unwrap(), "103");
        assert_eq!(clinic.state().selection.selected().unwrap().id, 103);
        assert_eq!(surface.scrolled().last().map(String::as_str), Some(APPOINTMENT.booking_section));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut clinic = booted();
        clinic.select_doctor(102).unwrap();
        clinic.select_doctor(102).unwrap();
        assert_eq!(
            clinic.surface().keys_with_class(APPOINTMENT.doctors, SELECTED_CLASS),
            vec!["102"]
        );
    }

    #[test]
    fn test_unknown_doctor_ignored() {
        let mut clinic = booted();
        assert_eq!(clinic.select_doctor(999).unwrap(), Outcome::Ignored);
        assert!(clinic.surface().value(APPOINTMENT.doctor_id).unwrap().is_empty());
    }

    #[test]
    fn test_clear_selection() {
        let mut clinic = booted();
        clinic.select_doctor(101).unwrap();
        clinic.clear_selection().unwrap();

        let surface = clinic.surface();
        assert!(surface.keys_with_class(APPOINTMENT.doctors, SELECTED_CLASS).is_empty());
        assert_eq!(
            surface.value(APPOINTMENT.selected_doctor).unwrap(),
            "Please select a doctor above"
        );
        assert_eq!(surface.value(APPOINTMENT.doctor_id).unwrap(), "");
        assert!(clinic.state().selection.selected().is_none());
    }
}
