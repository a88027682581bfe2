//! Page start-up: marker detection, initial renders and listener wiring.
//!
//! Detection does not enforce exclusivity. If several markers are present,
//! every matching page is wired.

use serde::Serialize;

use crate::clinic::{Clinic, ClinicEvent};
use crate::dataset::DOCTORS;
use crate::error::ClinicResult;
use crate::render::{render_doctors, render_hospitals, render_statuses, StatusSource};
use crate::validate::min_date;
use crate::view::bindings::{
    APPOINTMENT, DOCTORS as DOCTORS_VIEW, HOME, NETWORK, STATUS_CHECK, TEST_BOOKING, TEST_STATUS,
};
use crate::view::Surface;

/// The seven page layouts of the site.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Appointment,
    Doctors,
    StatusCheck,
    TestBooking,
    TestStatus,
    Network,
}

impl PageKind {
    /// Probe order.
    pub const ALL: [PageKind; 7] = [
        PageKind::Home,
        PageKind::Appointment,
        PageKind::Doctors,
        PageKind::StatusCheck,
        PageKind::TestBooking,
        PageKind::TestStatus,
        PageKind::Network,
    ];

    /// Element whose presence identifies the page.
    pub fn marker(&self) -> &'static str {
        match self {
            PageKind::Home => HOME.doctors,
            PageKind::Appointment => APPOINTMENT.doctors,
            PageKind::Doctors => DOCTORS_VIEW.doctors,
            PageKind::StatusCheck => STATUS_CHECK.form,
            PageKind::TestBooking => TEST_BOOKING.form,
            PageKind::TestStatus => TEST_STATUS.form,
            PageKind::Network => NETWORK.hospitals,
        }
    }
}

/// A DOM listener the host must attach, with the event it feeds back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listener {
    /// `change` on a date input.
    DateChange { field: String },
    /// Delegated `click` on a card container's "Select Doctor" buttons.
    DoctorCardClicks { container: &'static str },
    /// `submit` on a form; the default submission must be prevented.
    Submit { form: &'static str, event: ClinicEvent },
    Click { target: &'static str, event: ClinicEvent },
    Change { target: &'static str, event: ClinicEvent },
}

/// Pages whose marker element is present, in probe order.
pub fn detect_pages<S: Surface>(surface: &S) -> Vec<PageKind> {
    PageKind::ALL
        .into_iter()
        .filter(|page| surface.exists(page.marker()))
        .collect()
}

impl<S: Surface> Clinic<S> {
    /// Prepare the loaded page and return the listeners to attach.
    pub fn boot(&mut self) -> ClinicResult<Vec<Listener>> {
        let mut listeners = Vec::new();

        let min = min_date(self.today());
        for field in self.surface.date_inputs() {
            self.surface.set_attribute(&field, "min", &min)?;
            listeners.push(Listener::DateChange { field });
        }

        let pages = detect_pages(&self.surface);
        log::info!("booting pages {:?}", pages);

        for page in &pages {
            listeners.extend(self.boot_page(*page)?);
        }
        self.state.pages = pages;

        Ok(listeners)
    }

    fn boot_page(&mut self, page: PageKind) -> ClinicResult<Vec<Listener>> {
        let all: Vec<_> = DOCTORS.iter().collect();
        let detail_page = self.config.doctor_detail_page.clone();

        let listeners = match page {
            PageKind::Home => {
                render_doctors(&mut self.surface, HOME.doctors, &all, false, &detail_page)?;
                vec![]
            }
            PageKind::Appointment => {
                render_doctors(&mut self.surface, APPOINTMENT.doctors, &all, true, &detail_page)?;
                vec![
                    Listener::DoctorCardClicks { container: APPOINTMENT.doctors },
                    Listener::Submit {
                        form: APPOINTMENT.form,
                        event: ClinicEvent::AppointmentSubmitted,
                    },
                    Listener::Click {
                        target: APPOINTMENT.cancel,
                        event: ClinicEvent::AppointmentCancelled,
                    },
                ]
            }
            PageKind::Doctors => {
                render_doctors(&mut self.surface, DOCTORS_VIEW.doctors, &all, false, &detail_page)?;
                vec![Listener::Change {
                    target: DOCTORS_VIEW.specialty,
                    event: ClinicEvent::SpecialtyChanged,
                }]
            }
            PageKind::StatusCheck => {
                render_statuses(&mut self.surface, STATUS_CHECK.recent, StatusSource::Appointments)?;
                vec![Listener::Submit {
                    form: STATUS_CHECK.form,
                    event: ClinicEvent::AppointmentStatusRequested,
                }]
            }
            PageKind::TestBooking => vec![Listener::Submit {
                form: TEST_BOOKING.form,
                event: ClinicEvent::TestBookingSubmitted,
            }],
            PageKind::TestStatus => {
                render_statuses(&mut self.surface, TEST_STATUS.recent, StatusSource::TestOrders)?;
                vec![Listener::Submit {
                    form: TEST_STATUS.form,
                    event: ClinicEvent::TestStatusRequested,
                }]
            }
            PageKind::Network => {
                render_hospitals(&mut self.surface, NETWORK.hospitals)?;
                vec![]
            }
        };

        log::debug!("wired {:?} with {} listeners", page, listeners.len());
        Ok(listeners)
    }
}
