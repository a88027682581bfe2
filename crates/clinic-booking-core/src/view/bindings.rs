//! Element ids of the seven pages, one record per page.

/// `index.html`: featured doctors.
#[derive(Debug, Clone, Copy)]
pub struct HomeView {
    pub doctors: &'static str,
}

/// `appointment.html`: doctor selection and booking form.
#[derive(Debug, Clone, Copy)]
pub struct AppointmentView {
    pub doctors: &'static str,
    pub form: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    /// Read-only text field showing the selected doctor's name
    pub selected_doctor: &'static str,
    /// Hidden field holding the selected doctor's id
    pub doctor_id: &'static str,
    pub booking_section: &'static str,
    pub message: &'static str,
    pub cancel: &'static str,
}

/// `doctors.html`: full doctor list with specialty selector.
#[derive(Debug, Clone, Copy)]
pub struct DoctorsView {
    pub doctors: &'static str,
    pub specialty: &'static str,
}

/// `check_status.html`: appointment status lookup.
#[derive(Debug, Clone, Copy)]
pub struct StatusCheckView {
    pub form: &'static str,
    pub appointment_id: &'static str,
    pub contact: &'static str,
    pub result: &'static str,
    pub recent: &'static str,
}

/// `test_booking.html`: lab test booking form.
#[derive(Debug, Clone, Copy)]
pub struct TestBookingView {
    pub form: &'static str,
    pub date: &'static str,
    pub result: &'static str,
}

/// `test_status.html`: lab test status lookup.
#[derive(Debug, Clone, Copy)]
pub struct TestStatusView {
    pub form: &'static str,
    pub reference: &'static str,
    pub result: &'static str,
    pub recent: &'static str,
}

/// `network.html`: hospital network.
#[derive(Debug, Clone, Copy)]
pub struct NetworkView {
    pub hospitals: &'static str,
}

pub const HOME: HomeView = HomeView {
    doctors: "featured-doctors-container",
};

pub const APPOINTMENT: AppointmentView = AppointmentView {
    doctors: "doctor-selection-container",
    form: "appointment-form",
    date: "appointment-date",
    time: "appointment-time",
    selected_doctor: "selected-doctor",
    doctor_id: "booking-doctor-id",
    booking_section: "booking-section",
    message: "booking-success-message",
    cancel: "cancel-button",
};

pub const DOCTORS: DoctorsView = DoctorsView {
    doctors: "all-doctors-container",
    specialty: "specialty-filter",
};

pub const STATUS_CHECK: StatusCheckView = StatusCheckView {
    form: "status-check-form",
    appointment_id: "appt-id",
    contact: "patient-contact",
    result: "status-result",
    recent: "recent-bookings-demo",
};

pub const TEST_BOOKING: TestBookingView = TestBookingView {
    form: "test-booking-form",
    date: "test-date",
    result: "test-booking-result",
};

pub const TEST_STATUS: TestStatusView = TestStatusView {
    form: "test-status-form",
    reference: "test-ref",
    result: "test-status-result",
    recent: "recent-test-orders",
};

pub const NETWORK: NetworkView = NetworkView {
    hospitals: "hospital-network-list",
};
