//! Compiled-in demo dataset and its lookups.
//!
//! Every collection is a static slice. Nothing is ever appended: bookings made
//! through the forms are not visible to the status lookups.

use crate::models::{
    AppointmentRecord, AppointmentStatus, Doctor, Hospital, TestOrderRecord, TestStatus,
};

pub static DOCTORS: &[Doctor] = &[
    Doctor {
        id: 101,
        name: "Dr. Anya Sharma",
        specialization: "Cardiology",
        experience: 12,
        rating: 4.8,
        location: "Main City Hospital",
    },
    Doctor {
        id: 102,
        name: "Dr. Vivek Kumar",
        specialization: "Dermatology",
        experience: 8,
        rating: 4.5,
        location: "Skin & Care Clinic",
    },
    Doctor {
        id: 103,
        name: "Dr. Leena Singh",
        specialization: "Pediatrics",
        experience: 15,
        rating: 4.9,
        location: "Children's Health Center",
    },
];

pub static HOSPITALS: &[Hospital] = &[
    Hospital {
        id: 201,
        name: "Apex Multi-Speciality",
        address: "45 Grand Avenue",
        phone: "555-0101",
        rating: 4.7,
    },
    Hospital {
        id: 202,
        name: "City Diagnostic Center",
        address: "123 Main Street",
        phone: "555-0102",
        rating: 4.3,
    },
    Hospital {
        id: 203,
        name: "Wellness Clinic",
        address: "789 Park Lane",
        phone: "555-0103",
        rating: 4.9,
    },
];

pub static APPOINTMENTS: &[AppointmentRecord] = &[
    AppointmentRecord {
        id: "CC1001A",
        patient: "Jane Doe",
        doctor: "Dr. Anya Sharma",
        date: "2025-11-05",
        time: "09:00 AM",
        status: AppointmentStatus::Confirmed,
        contact: "4321",
    },
    AppointmentRecord {
        id: "CC1002A",
        patient: "Jane Doe",
        doctor: "Dr. Vivek Kumar",
        date: "2025-11-20",
        time: "11:00 AM",
        status: AppointmentStatus::Pending,
        contact: "4321",
    },
];

pub static TEST_ORDERS: &[TestOrderRecord] = &[
    TestOrderRecord {
        reference: "LAB1001X",
        test: "Complete Blood Count",
        date: "2025-10-15",
        lab: "Central Lab Network",
        status: TestStatus::Complete,
    },
    TestOrderRecord {
        reference: "LAB1002X",
        test: "Thyroid Profile",
        date: "2025-11-10",
        lab: "Northside Diagnostics",
        status: TestStatus::Pending,
    },
];

/// Find a doctor by ID.
pub fn find_doctor(id: u32) -> Option<&'static Doctor> {
    DOCTORS.iter().find(|d| d.id == id)
}

/// Doctors matching a specialty filter value (`"all"` keeps everyone).
pub fn doctors_by_specialty(specialty: &str) -> Vec<&'static Doctor> {
    DOCTORS
        .iter()
        .filter(|d| d.matches_specialty(specialty))
        .collect()
}

/// Find an appointment by exact ID and contact.
///
/// An unknown ID and a wrong contact both yield `None`.
pub fn find_appointment(id: &str, contact: &str) -> Option<&'static AppointmentRecord> {
    APPOINTMENTS
        .iter()
        .find(|a| a.id == id && a.contact == contact)
}

/// Find a test order by exact reference.
pub fn find_test_order(reference: &str) -> Option<&'static TestOrderRecord> {
    TEST_ORDERS.iter().find(|t| t.reference == reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let doctors: HashSet<_> = DOCTORS.iter().map(|d| d.id).collect();
        assert_eq!(doctors.len(), DOCTORS.len());

        let hospitals: HashSet<_> = HOSPITALS.iter().map(|h| h.id).collect();
        assert_eq!(hospitals.len(), HOSPITALS.len());

        let appointments: HashSet<_> = APPOINTMENTS.iter().map(|a| a.id).collect();
        assert_eq!(appointments.len(), APPOINTMENTS.len());

        let tests: HashSet<_> = TEST_ORDERS.iter().map(|t| t.reference).collect();
        assert_eq!(tests.len(), TEST_ORDERS.len());
    }

    #[test]
    fn test_ratings_in_range() {
        assert!(DOCTORS.iter().all(|d| (0.0..=5.0).contains(&d.rating)));
        assert!(HOSPITALS.iter().all(|h| (0.0..=5.0).contains(&h.rating)));
    }

    #[test]
    fn test_find_appointment() {
        let appt = find_appointment("CC1001A", "4321").unwrap();
        assert_eq!(appt.status, AppointmentStatus::Confirmed);
        assert_eq!(appt.doctor, "Dr. Anya Sharma");

        assert!(find_appointment("CC1001A", "0000").is_none());
        assert!(find_appointment("CC9999Z", "4321").is_none());
        // Exact match only; callers uppercase the input first.
        assert!(find_appointment("cc1001a", "4321").is_none());
    }

    #[test]
    fn test_find_test_order() {
        assert_eq!(find_test_order("LAB1002X").unwrap().status, TestStatus::Pending);
        assert!(find_test_order("LAB0000X").is_none());
    }

    #[test]
    fn test_doctors_by_specialty() {
        assert_eq!(doctors_by_specialty("all").len(), 3);
        let cardio = doctors_by_specialty("Cardiology");
        assert_eq!(cardio.len(), 1);
        assert_eq!(cardio[0].id, 101);
        assert!(doctors_by_specialty("Neurology").is_empty());
    }

    #[test]
    fn test_find_doctor() {
        assert_eq!(find_doctor(103).unwrap().name, "Dr. Leena Singh");
        assert!(find_doctor(999).is_none());
    }
}
