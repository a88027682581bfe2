//! Doctor and hospital directory models.

use serde::Serialize;

/// A doctor listed on the site.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Doctor {
    /// Unique doctor ID (used in detail links and the booking form)
    pub id: u32,
    /// Display name, including title
    pub name: &'static str,
    /// Specialization (e.g., "Cardiology")
    pub specialization: &'static str,
    /// Years of experience
    pub experience: u32,
    /// Rating between 0 and 5
    pub rating: f32,
    /// Practice location
    pub location: &'static str,
}

impl Doctor {
    /// Check whether this doctor matches a specialty filter value.
    /// `"all"` matches every doctor.
    pub fn matches_specialty(&self, specialty: &str) -> bool {
        specialty == "all" || self.specialization == specialty
    }
}

/// A hospital in the partner network.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Hospital {
    pub id: u32,
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    /// Rating between 0 and 5
    pub rating: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(specialization: &'static str) -> Doctor {
        Doctor {
            id: 1,
            name: "Dr. Test",
            specialization,
            experience: 3,
            rating: 4.0,
            location: "Somewhere",
        }
    }

    #[test]
    fn test_matches_specialty() {
        let d = doctor("Cardiology");
        assert!(d.matches_specialty("Cardiology"));
        assert!(d.matches_specialty("all"));
        assert!(!d.matches_specialty("cardiology"));
        assert!(!d.matches_specialty("Pediatrics"));
    }
}
