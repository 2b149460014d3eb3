//! Downloadable scan reports.

use serde::{Deserialize, Serialize};

use crate::models::{MatchStrength, MedicineRecord, ScanRecord};

/// A saved report for a single scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanReport {
    /// Report generation timestamp
    pub generated_at: String,
    /// The underlying scan history entry
    pub scan: ScanRecord,
    /// Strength bucket for the stored score
    pub strength: MatchStrength,
    /// Full catalog record, when the medicine is still in the catalog
    pub medicine: Option<MedicineRecord>,
}

impl ScanReport {
    /// Build a report from a stored scan and (if available) its catalog
    /// record.
    pub fn new(scan: ScanRecord, medicine: Option<&MedicineRecord>) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            strength: MatchStrength::from_score(scan.score),
            medicine: medicine.cloned(),
            scan,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Batch export of the scan history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryExport {
    /// Export timestamp
    pub exported_at: String,
    /// Scan entries, newest first
    pub scans: Vec<ScanRecord>,
    /// Total entry count
    pub total_scans: usize,
}

impl HistoryExport {
    /// Build an export from history entries (expected newest first).
    pub fn new(scans: Vec<ScanRecord>) -> Self {
        Self {
            exported_at: chrono::Utc::now().to_rfc3339(),
            total_scans: scans.len(),
            scans,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str("scan_id,medicine_id,medicine_name,score,strength,extracted_excerpt,scanned_at\n");

        // Lines
        for scan in &self.scans {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                escape_csv(&scan.scan_id),
                scan.medicine_id,
                escape_csv(&scan.medicine_name),
                scan.score,
                MatchStrength::from_score(scan.score).as_str(),
                escape_csv(&scan.extracted_excerpt),
                escape_csv(&scan.scanned_at),
            ));
        }

        csv
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
