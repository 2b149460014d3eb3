//! Medicine catalog: CSV ingestion and read-only lookups.
//!
//! The catalog is loaded once and treated as read-only for the lifetime of
//! the process; the matcher only ever borrows it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::csv;
use crate::models::MedicineRecord;

/// Catalog loading errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Aggregate catalog statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogStats {
    /// Total medicine count
    pub medicines: usize,
    /// Unique (non-empty) manufacturer count
    pub manufacturers: usize,
    /// Unique (non-empty) kind count
    pub kinds: usize,
}

/// The in-memory medicine catalog.
#[derive(Debug, Clone, Default)]
pub struct MedicineCatalog {
    records: Vec<MedicineRecord>,
}

impl MedicineCatalog {
    /// Build a catalog from already-constructed records.
    pub fn new(records: Vec<MedicineRecord>) -> Self {
        Self { records }
    }

    /// Load from CSV text with columns
    /// `name, generic_name, type, dosage, manufacturer, composition,
    /// prescription_required` (first line is a header and is skipped).
    ///
    /// Ids are assigned 1-based in file order. Short rows degrade to empty
    /// fields rather than failing the load.
    pub fn from_csv(text: &str) -> Self {
        let table = csv::Table::parse(text);

        let records = table
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| MedicineRecord {
                id: index as u32 + 1,
                name: csv::col(row, 0).to_string(),
                generic_name: csv::col(row, 1).to_string(),
                kind: csv::col(row, 2).to_string(),
                dosage: csv::col(row, 3).to_string(),
                manufacturer: csv::col(row, 4).to_string(),
                composition: csv::col(row, 5).to_string(),
                prescription_required: csv::parse_bool(csv::col(row, 6)),
            })
            .collect::<Vec<_>>();

        info!(medicines = records.len(), "medicine catalog loaded");

        Self { records }
    }

    /// Load from a CSV file on disk.
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_csv(&text))
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[MedicineRecord] {
        &self.records
    }

    /// Number of medicines.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a medicine by id.
    pub fn get(&self, id: u32) -> Option<&MedicineRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Look up a medicine by exact name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&MedicineRecord> {
        self.records
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Quick-search by substring over name, generic name, and kind.
    ///
    /// A blank term returns every record (the UI falls back to the quick
    /// list in that case).
    pub fn search(&self, term: &str) -> Vec<&MedicineRecord> {
        if term.trim().is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|r| r.matches_term(term))
            .collect()
    }

    /// First `n` records, for the quick-access list.
    pub fn quick_list(&self, n: usize) -> &[MedicineRecord] {
        &self.records[..self.records.len().min(n)]
    }

    /// Aggregate statistics over the catalog.
    pub fn stats(&self) -> CatalogStats {
        let manufacturers: HashSet<&str> = self
            .records
            .iter()
            .map(|r| r.manufacturer.as_str())
            .filter(|m| !m.is_empty())
            .collect();
        let kinds: HashSet<&str> = self
            .records
            .iter()
            .map(|r| r.kind.as_str())
            .filter(|k| !k.is_empty())
            .collect();

        CatalogStats {
            medicines: self.records.len(),
            manufacturers: manufacturers.len(),
            kinds: kinds.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
name,generic_name,type,dosage,manufacturer,composition,prescription_required
Crocin,Paracetamol,Tablet,500mg,GSK,Paracetamol 500mg,false
Brufen,Ibuprofen,Tablet,400mg,Abbott,Ibuprofen 400mg,true
Cetzine,Cetirizine,Tablet,10mg,GSK,Cetirizine Hydrochloride 10mg,false
";

    #[test]
    fn test_from_csv() {
        let catalog = MedicineCatalog::from_csv(SAMPLE);
        assert_eq!(catalog.len(), 3);

        let first = &catalog.records()[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Crocin");
        assert_eq!(first.generic_name, "Paracetamol");
        assert_eq!(first.kind, "Tablet");
        assert_eq!(first.dosage, "500mg");
        assert_eq!(first.manufacturer, "GSK");
        assert!(!first.prescription_required);

        assert!(catalog.records()[1].prescription_required);
    }

    #[test]
    fn test_short_rows_degrade() {
        let catalog = MedicineCatalog::from_csv("name,generic_name\nDolo\n");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].name, "Dolo");
        assert_eq!(catalog.records()[0].generic_name, "");
        assert!(!catalog.records()[0].prescription_required);
    }

    #[test]
    fn test_get_and_find_by_name() {
        let catalog = MedicineCatalog::from_csv(SAMPLE);
        assert_eq!(catalog.get(2).map(|r| r.name.as_str()), Some("Brufen"));
        assert!(catalog.get(99).is_none());
        assert_eq!(catalog.find_by_name("cetzine").map(|r| r.id), Some(3));
    }

    #[test]
    fn test_search() {
        let catalog = MedicineCatalog::from_csv(SAMPLE);

        let hits = catalog.search("cetirizine");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Cetzine");

        // Kind matches too
        assert_eq!(catalog.search("tablet").len(), 3);

        // Blank term returns everything
        assert_eq!(catalog.search("  ").len(), 3);
    }

    #[test]
    fn test_quick_list() {
        let catalog = MedicineCatalog::from_csv(SAMPLE);
        assert_eq!(catalog.quick_list(2).len(), 2);
        assert_eq!(catalog.quick_list(10).len(), 3);
    }

    #[test]
    fn test_stats() {
        let catalog = MedicineCatalog::from_csv(SAMPLE);
        let stats = catalog.stats();
        assert_eq!(stats.medicines, 3);
        assert_eq!(stats.manufacturers, 2); // GSK, Abbott
        assert_eq!(stats.kinds, 1); // Tablet
    }

    #[test]
    fn test_empty_input() {
        let catalog = MedicineCatalog::from_csv("");
        assert!(catalog.is_empty());
        assert_eq!(catalog.stats().medicines, 0);
    }
}
