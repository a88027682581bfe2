//! Appointment and test order records (read-only lookup data).

use std::fmt;

use serde::Serialize;

/// Appointment status.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
}

/// Test order status.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TestStatus {
    Complete,
    Pending,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
        }
    }
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status tag CSS class for a status label: `status-<lowercase label>`.
pub fn status_class(label: &str) -> String {
    format!("status-{}", label.to_lowercase())
}

/// An existing appointment.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct AppointmentRecord {
    /// Reference ID (e.g., "CC1001A")
    pub id: &'static str,
    pub patient: &'static str,
    /// Doctor display name
    pub doctor: &'static str,
    /// ISO date (YYYY-MM-DD)
    pub date: &'static str,
    /// Display time (e.g., "09:00 AM")
    pub time: &'static str,
    pub status: AppointmentStatus,
    /// Contact digits the patient must quote when checking status
    pub contact: &'static str,
}

/// An existing lab test order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TestOrderRecord {
    /// Reference ID (e.g., "LAB1001X")
    pub reference: &'static str,
    /// Test name
    pub test: &'static str,
    /// ISO date (YYYY-MM-DD)
    pub date: &'static str,
    /// Lab performing the test
    pub lab: &'static str,
    pub status: TestStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(AppointmentStatus::Confirmed.as_str()), "status-confirmed");
        assert_eq!(status_class(TestStatus::Complete.as_str()), "status-complete");
        assert_eq!(status_class(TestStatus::Pending.as_str()), "status-pending");
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&AppointmentStatus::Pending).unwrap();
        assert_eq!(json, "\"Pending\"");
    }
}
