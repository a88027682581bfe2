//! The page controller: owns the surface and page state and dispatches events.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::ClinicConfig;
use crate::error::ClinicResult;
use crate::reference::ReferenceId;
use crate::state::PageState;
use crate::validate::{validate_date_field, Clock, DateCheck, SystemClock};
use crate::view::Surface;

/// A user interaction, already decoded from the DOM event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClinicEvent {
    /// A date input changed.
    DateChanged { field: String },
    /// A "Select Doctor" button was clicked.
    DoctorSelected { doctor_id: u32 },
    AppointmentSubmitted,
    AppointmentCancelled,
    SpecialtyChanged,
    AppointmentStatusRequested,
    TestBookingSubmitted,
    TestStatusRequested,
}

/// Why a booking submission was refused.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Rejection {
    NoDoctorSelected,
    InvalidForm,
}

/// What handling an event did.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum Outcome {
    DateChecked(DateCheck),
    DoctorSelected { id: u32 },
    SelectionCleared,
    /// Specialty filter ran; `matches` doctors fit the chosen value.
    FilterNotice { specialty: String, matches: usize },
    Booked { reference: ReferenceId },
    Rejected(Rejection),
    StatusFound { reference: String, status: String },
    StatusNotFound { reference: String },
    /// The event did not apply (e.g. an unknown doctor id).
    Ignored,
}

/// Front-end controller for one loaded page.
pub struct Clinic<S: Surface> {
    pub(crate) surface: S,
    pub(crate) state: PageState,
    pub(crate) config: ClinicConfig,
    clock: Box<dyn Clock>,
    pub(crate) rng: StdRng,
}

impl<S: Surface> Clinic<S> {
    /// Create a controller using the local clock and an entropy-seeded RNG.
    pub fn new(surface: S, config: ClinicConfig) -> Self {
        Self {
            surface,
            state: PageState::default(),
            config,
            clock: Box::new(SystemClock),
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the RNG (deterministic reference ids in tests).
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn config(&self) -> &ClinicConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Handle one user interaction.
    pub fn handle(&mut self, event: ClinicEvent) -> ClinicResult<Outcome> {
        log::debug!("handling {:?}", event);
        match event {
            ClinicEvent::DateChanged { field } => {
                let today = self.today();
                let check = validate_date_field(&mut self.surface, &field, today)?;
                Ok(Outcome::DateChecked(check))
            }
            ClinicEvent::DoctorSelected { doctor_id } => self.select_doctor(doctor_id),
            ClinicEvent::AppointmentSubmitted => self.submit_appointment(),
            ClinicEvent::AppointmentCancelled => self.cancel_appointment(),
            ClinicEvent::SpecialtyChanged => self.change_specialty(),
            ClinicEvent::AppointmentStatusRequested => self.check_appointment_status(),
            ClinicEvent::TestBookingSubmitted => self.submit_test_booking(),
            ClinicEvent::TestStatusRequested => self.check_test_status(),
        }
    }

    /// Show `markup` in `panel` and hide it after the configured delay,
    /// cancelling any hide still pending for that panel.
    pub(crate) fn show_transient(&mut self, panel: &str, markup: &str) -> ClinicResult<()> {
        if let Some(previous) = self.state.timers.take(panel) {
            self.surface.cancel_timer(previous);
        }
        self.surface.show_panel(panel, markup)?;
        let handle = self.surface.schedule_hide(panel, self.config.hide_delay_ms)?;
        self.state.timers.replace(panel, handle);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::PageKind;
    use crate::validate::{FixedClock, PAST_DATE_MESSAGE};
    use crate::view::bindings::{APPOINTMENT, TEST_BOOKING};
    use crate::view::MemorySurface;

    fn clinic() -> Clinic<MemorySurface> {
        let surface = MemorySurface::for_pages(&[PageKind::TestBooking]);
        Clinic::new(surface, ClinicConfig::default())
            .with_clock(FixedClock(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()))
            .with_rng(StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_date_changed_sets_inline_error() {
        let mut clinic = clinic();
        clinic
            .surface_mut()
            .set_value(TEST_BOOKING.date, "2026-04-30")
            .unwrap();

        let outcome = clinic
            .handle(ClinicEvent::DateChanged { field: TEST_BOOKING.date.into() })
            .unwrap();
        assert!(matches!(outcome, Outcome::DateChecked(DateCheck::Past(_))));
        assert_eq!(clinic.surface().field_error(TEST_BOOKING.date), Some(PAST_DATE_MESSAGE));
        assert!(clinic.surface().is_invalid(TEST_BOOKING.date));

        clinic
            .surface_mut()
            .set_value(TEST_BOOKING.date, "2026-05-01")
            .unwrap();
        clinic
            .handle(ClinicEvent::DateChanged { field: TEST_BOOKING.date.into() })
            .unwrap();
        assert_eq!(clinic.surface().field_error(TEST_BOOKING.date), None);
        assert!(!clinic.surface().is_invalid(TEST_BOOKING.date));
    }

    #[test]
    fn test_config_is_kept() {
        let config = ClinicConfig::from_json_or_default(Some(r#"{"hide_delay_ms": 100}"#));
        let clinic = Clinic::new(MemorySurface::new(), config.clone());
        assert_eq!(clinic.config(), &config);
        assert_eq!(clinic.config().hide_delay_ms, 100);
    }

    #[test]
    fn test_unparseable_date_clears_inline_error() {
        let mut clinic = clinic();
        clinic
            .surface_mut()
            .set_value(TEST_BOOKING.date, "2026-04-30")
            .unwrap();
        clinic
            .handle(ClinicEvent::DateChanged { field: TEST_BOOKING.date.into() })
            .unwrap();

        clinic
            .surface_mut()
            .set_value(TEST_BOOKING.date, "not-a-date")
            .unwrap();
        let outcome = clinic
            .handle(ClinicEvent::DateChanged { field: TEST_BOOKING.date.into() })
            .unwrap();
        assert_eq!(outcome, Outcome::DateChecked(DateCheck::NoDate));
        assert_eq!(clinic.surface().field_error(TEST_BOOKING.date), None);
        assert!(!clinic.surface().is_invalid(TEST_BOOKING.date));
    }

    #[test]
    fn test_show_transient_cancels_previous_hide() {
        let mut clinic = clinic();
        clinic.show_transient(TEST_BOOKING.result, "first").unwrap();
        clinic.surface_mut().advance(4000);
        clinic.show_transient(TEST_BOOKING.result, "second").unwrap();

        assert_eq!(clinic.surface().pending_timers(), 1);
        // The first hide would have fired here.
        clinic.surface_mut().advance(1000);
        assert!(clinic.surface().is_visible(TEST_BOOKING.result));
        assert_eq!(clinic.surface().panel_markup(TEST_BOOKING.result), Some("second"));

        clinic.surface_mut().advance(4000);
        assert!(!clinic.surface().is_visible(TEST_BOOKING.result));
    }

    #[test]
    fn test_event_on_absent_page_is_an_error() {
        let mut clinic = clinic();
        let err = clinic.handle(ClinicEvent::AppointmentSubmitted).unwrap_err();
        assert!(err.to_string().contains(APPOINTMENT.doctor_id));
    }
}
