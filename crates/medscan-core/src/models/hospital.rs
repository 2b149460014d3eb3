//! Hospital directory models.

use serde::{Deserialize, Serialize};

/// A hospital listing from the directory CSV.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hospital {
    /// Unique id from the CSV
    pub id: u32,
    /// Hospital name
    pub name: String,
    /// City
    pub city: String,
    /// Total bed capacity
    pub bed_capacity: u32,
    /// ICU seat count
    pub icu_seats: u32,
    /// Whether the hospital accepts the Ayushman scheme
    pub ayushman_enabled: bool,
    /// Average rating (0.0 - 5.0)
    pub rating: f64,
    /// Contact number
    pub contact: String,
    /// Street address
    pub address: String,
    /// Facility/specialty tags (split on '|' in the CSV)
    pub facilities: Vec<String>,
}

impl Hospital {
    /// Case-insensitive substring test over name, city, and facilities.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.city.to_lowercase().contains(&term)
            || self
                .facilities
                .iter()
                .any(|f| f.to_lowercase().contains(&term))
    }

    /// Check whether this hospital carries a facility tag (exact match).
    pub fn has_facility(&self, facility: &str) -> bool {
        self.facilities.iter().any(|f| f == facility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Hospital {
        Hospital {
            id: 1,
            name: "City Care Hospital".into(),
            city: "Pune".into(),
            bed_capacity: 250,
            icu_seats: 40,
            ayushman_enabled: true,
            rating: 4.3,
            contact: "020-1234567".into(),
            address: "12 MG Road".into(),
            facilities: vec!["Cardiology".into(), "Neurology".into()],
        }
    }

    #[test]
    fn test_matches_term() {
        let hospital = sample();
        assert!(hospital.matches_term("city care"));
        assert!(hospital.matches_term("pune"));
        assert!(hospital.matches_term("cardio"));
        assert!(!hospital.matches_term("oncology"));
    }

    #[test]
    fn test_has_facility_is_exact() {
        let hospital = sample();
        assert!(hospital.has_facility("Cardiology"));
        assert!(!hospital.has_facility("Cardio"));
    }
}
