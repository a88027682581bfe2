//! Specialty selector on the doctors page.
//!
//! In the default `notice` mode the full list is re-rendered and only the
//! matching count is reported; the cards themselves are not filtered.

use crate::clinic::{Clinic, Outcome};
use crate::config::FilterMode;
use crate::dataset::{doctors_by_specialty, DOCTORS};
use crate::error::ClinicResult;
use crate::render::render_doctors;
use crate::view::bindings::DOCTORS as VIEW;
use crate::view::Surface;

impl<S: Surface> Clinic<S> {
    pub(crate) fn change_specialty(&mut self) -> ClinicResult<Outcome> {
        let specialty = self.surface.value(VIEW.specialty)?;
        let matching = doctors_by_specialty(&specialty);

        let notice = match self.config.filter_mode {
            FilterMode::Notice => {
                let all: Vec<_> = DOCTORS.iter().collect();
                render_doctors(
                    &mut self.surface,
                    VIEW.doctors,
                    &all,
                    false,
                    &self.config.doctor_detail_page,
                )?;
                format!(
                    "Filter applied: Showing {} doctor(s) for {}. (Demo filter, actual cards remain the same).",
                    matching.len(),
                    specialty
                )
            }
            FilterMode::Apply => {
                render_doctors(
                    &mut self.surface,
                    VIEW.doctors,
                    &matching,
                    false,
                    &self.config.doctor_detail_page,
                )?;
                format!(
                    "Filter applied: Showing {} doctor(s) for {}.",
                    matching.len(),
                    specialty
                )
            }
        };
        self.surface.alert(&notice);

        Ok(Outcome::FilterNotice {
            matches: matching.len(),
            specialty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::PageKind;
    use crate::config::ClinicConfig;
    use crate::view::MemorySurface;

    fn booted(mode: FilterMode) -> Clinic<MemorySurface> {
        let config = ClinicConfig {
            filter_mode: mode,
            ..ClinicConfig::default()
        };
        let mut clinic = Clinic::new(MemorySurface::for_pages(&[PageKind::Doctors]), config);
        clinic.boot().unwrap();
        clinic
    }

    #[test]
    fn test_notice_mode_keeps_every_card() {
        let mut clinic = booted(FilterMode::Notice);
        clinic.surface_mut().set_value(VIEW.specialty, "Cardiology").unwrap();

        let outcome = clinic.change_specialty().unwrap();
        assert_eq!(
            outcome,
            Outcome::FilterNotice { specialty: "Cardiology".into(), matches: 1 }
        );
        assert_eq!(clinic.surface().card_keys(VIEW.doctors), vec!["101", "102", "103"]);
        assert_eq!(
            clinic.surface().alerts(),
            ["Filter applied: Showing 1 doctor(s) for Cardiology. (Demo filter, actual cards remain the same)."]
        );
    }

    #[test]
    fn test_notice_mode_all() {
        let mut clinic = booted(FilterMode::Notice);
        let outcome = clinic.change_specialty().unwrap();
        assert!(matches!(outcome, Outcome::FilterNotice { matches: 3, .. }));
    }

    #[test]
    fn test_apply_mode_filters_cards() {
        let mut clinic = booted(FilterMode::Apply);
        clinic.surface_mut().set_value(VIEW.specialty, "Pediatrics").unwrap();
        clinic.change_specialty().unwrap();
        assert_eq!(clinic.surface().card_keys(VIEW.doctors), vec!["103"]);

        clinic.surface_mut().set_value(VIEW.specialty, "Neurology").unwrap();
        clinic.change_specialty().unwrap();
        assert!(clinic.surface().card_keys(VIEW.doctors).is_empty());
    }
}
