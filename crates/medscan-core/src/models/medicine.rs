//! Medicine catalog models.

use serde::{Deserialize, Serialize};

/// A single medicine in the catalog.
///
/// All textual fields may be empty; an empty field simply contributes
/// nothing to match scoring instead of being an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicineRecord {
    /// Unique positive id, assigned in catalog load order (1-based)
    pub id: u32,
    /// Brand/product name
    pub name: String,
    /// Generic (INN) name
    pub generic_name: String,
    /// Form/kind (e.g., "Tablet", "Oral suspension")
    pub kind: String,
    /// Dosage strength (e.g., "500mg")
    pub dosage: String,
    /// Manufacturer name
    pub manufacturer: String,
    /// Active composition (e.g., "Paracetamol 500mg")
    pub composition: String,
    /// Whether a prescription is required
    pub prescription_required: bool,
}

impl MedicineRecord {
    /// Create a record with required fields; everything else empty.
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            generic_name: String::new(),
            kind: String::new(),
            dosage: String::new(),
            manufacturer: String::new(),
            composition: String::new(),
            prescription_required: false,
        }
    }

    /// Case-insensitive substring test over name, generic name, and kind.
    ///
    /// This is the quick-search predicate, not the fuzzy matcher.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.generic_name.to_lowercase().contains(&term)
            || self.kind.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let record = MedicineRecord::new(1, "Paracetamol".into());
        assert_eq!(record.id, 1);
        assert_eq!(record.name, "Paracetamol");
        assert!(record.generic_name.is_empty());
        assert!(!record.prescription_required);
    }

    #[test]
    fn test_matches_term() {
        let mut record = MedicineRecord::new(1, "Crocin Advance".into());
        record.generic_name = "Paracetamol".into();
        record.kind = "Tablet".into();

        assert!(record.matches_term("crocin"));
        assert!(record.matches_term("PARACETAMOL"));
        assert!(record.matches_term("tab"));
        assert!(!record.matches_term("ibuprofen"));
    }
}
