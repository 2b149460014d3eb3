//! Medscan Core Library
//!
//! Catalog-backed medicine identification from OCR text, plus the hospital
//! directory data layer behind the same app.
//!
//! # Architecture
//!
//! ```text
//! Image → OCR (external) → lower-cased free text
//!                                │
//!                          MatchEngine
//!                  tokenize → fuzzy field scoring
//!                  (name 40 / generic 30 / composition 20 / kind 10)
//!                                │
//!                    ranked MatchResult candidates
//!                                │
//!               ┌────────────────┼────────────────┐
//!               │                │                │
//!               ▼                ▼                ▼
//!          Presentation    Scan History      Scan Report
//!          (best match)    (SQLite, last N)  (JSON/CSV export)
//! ```
//!
//! # Core Principle
//!
//! The matcher is a pure function over the recognized text and the read-only
//! catalog. "No candidate above threshold" is an empty result, not an error;
//! callers branch on emptiness to render a distinct no-match state.
//!
//! # Modules
//!
//! - [`catalog`]: CSV-backed medicine catalog (lookups, quick search, stats)
//! - [`csv`]: minimal lenient CSV reading
//! - [`db`]: SQLite layer for scan history and hospital feedback
//! - [`directory`]: hospital directory (filtering, statistics)
//! - [`export`]: scan report and history export
//! - [`matcher`]: fuzzy match engine
//! - [`models`]: domain types (MedicineRecord, MatchResult, Hospital, etc.)

pub mod catalog;
pub mod csv;
pub mod db;
pub mod directory;
pub mod export;
pub mod matcher;
pub mod models;

// Re-export commonly used types
pub use catalog::{CatalogStats, MedicineCatalog};
pub use db::Database;
pub use directory::{DirectoryStats, HospitalDirectory, HospitalFilter};
pub use export::{HistoryExport, ScanReport};
pub use matcher::{fuzzy_match, MatchEngine};
pub use models::{
    Feedback, FieldScores, Hospital, MatchResult, MatchStrength, MedicineRecord, ScanRecord,
};

use thiserror::Error;
use tracing::info;

// =========================================================================
// Errors
// =========================================================================

/// Text extraction failure from the OCR collaborator.
#[derive(Error, Debug)]
#[error("text extraction failed: {0}")]
pub struct ExtractError(pub String);

/// Scanner pipeline errors.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Database error: {0}")]
    Database(#[from] db::DbError),
}

pub type ScanResult<T> = Result<T, ScanError>;

/// Unified error for library consumers.
#[derive(Error, Debug)]
pub enum MedScanError {
    #[error("Database error: {0}")]
    Database(#[from] db::DbError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),

    #[error("Directory error: {0}")]
    Directory(#[from] directory::DirectoryError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =========================================================================
// OCR collaborator contract
// =========================================================================

/// The OCR black box: image bytes in, recognized free text out.
///
/// Implementations live outside this crate; the scanner lower-cases and
/// trims whatever they produce before matching.
pub trait TextExtractor {
    fn extract_text(&self, image: &[u8]) -> Result<String, ExtractError>;
}

// =========================================================================
// Scanner facade
// =========================================================================

/// Scanner tuning knobs.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// How many history entries to retain
    pub history_limit: usize,
    /// Length of the quick-access medicine list
    pub quick_list_len: usize,
    /// Characters of recognized text kept in each history entry
    pub excerpt_len: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            history_limit: 10,
            quick_list_len: 5,
            excerpt_len: 100,
        }
    }
}

/// Outcome of one scan pass.
#[derive(Debug)]
pub struct ScanOutcome<'a> {
    /// Ranked candidates, best first; empty means no match found
    pub matches: Vec<MatchResult<'a>>,
    /// The history entry recorded for the best match, if any
    pub scan: Option<ScanRecord>,
}

impl ScanOutcome<'_> {
    /// The best candidate, if any.
    pub fn best(&self) -> Option<&MatchResult<'_>> {
        self.matches.first()
    }
}

/// A history entry rehydrated against the current catalog.
#[derive(Debug)]
pub struct HistoryView<'a> {
    /// The stored scan
    pub scan: ScanRecord,
    /// Strength bucket for the stored score
    pub strength: MatchStrength,
    /// The catalog record, when the medicine is still present
    pub medicine: Option<&'a MedicineRecord>,
}

/// Fixed score assigned to manual quick-picks.
const MANUAL_SELECT_SCORE: u8 = 95;

/// Main scanner object: read-only catalog, match engine, and history store.
pub struct MedicineScanner {
    catalog: MedicineCatalog,
    engine: MatchEngine,
    db: Database,
    config: ScannerConfig,
}

impl MedicineScanner {
    /// Create a scanner with default configuration.
    pub fn new(catalog: MedicineCatalog, db: Database) -> Self {
        Self::with_config(catalog, db, ScannerConfig::default())
    }

    /// Create a scanner with explicit configuration.
    pub fn with_config(catalog: MedicineCatalog, db: Database, config: ScannerConfig) -> Self {
        info!(
            medicines = catalog.len(),
            history_limit = config.history_limit,
            "scanner initialized"
        );
        Self {
            catalog,
            engine: MatchEngine::new(),
            db,
            config,
        }
    }

    /// The read-only catalog.
    pub fn catalog(&self) -> &MedicineCatalog {
        &self.catalog
    }

    /// Match recognized text against the catalog and record the best match
    /// in history.
    ///
    /// An empty `matches` vec is the no-match state; nothing is recorded
    /// for it.
    pub fn scan_text(&self, text: &str) -> ScanResult<ScanOutcome<'_>> {
        let matches = self.engine.find_matches(text, self.catalog.records());

        let scan = match matches.first() {
            Some(best) => {
                let record = ScanRecord::new(
                    best.record.id,
                    best.record.name.clone(),
                    best.score,
                    text,
                    self.config.excerpt_len,
                );
                self.db.insert_scan(&record, self.config.history_limit)?;
                Some(record)
            }
            None => None,
        };

        info!(candidates = matches.len(), "scan complete");
        Ok(ScanOutcome { matches, scan })
    }

    /// Run the full pipeline: extract text from image bytes, normalize it,
    /// then match.
    ///
    /// Extraction failures surface before the matcher runs; the matcher
    /// itself never errors.
    pub fn scan_image<E: TextExtractor>(
        &self,
        extractor: &E,
        image: &[u8],
    ) -> ScanResult<ScanOutcome<'_>> {
        let raw = extractor.extract_text(image)?;
        let text = raw.trim().to_lowercase();
        self.scan_text(&text)
    }

    /// Manual quick-pick of a catalog medicine, bypassing OCR.
    ///
    /// Gets a fixed strong score; not recorded in history.
    pub fn select_medicine(&self, id: u32) -> Option<MatchResult<'_>> {
        self.catalog.get(id).map(|record| MatchResult {
            record,
            score: MANUAL_SELECT_SCORE,
            matched_keywords: Vec::new(),
            breakdown: FieldScores::default(),
            strength: MatchStrength::from_score(MANUAL_SELECT_SCORE),
        })
    }

    /// Rehydrate a stored scan against the current catalog.
    pub fn rescan_history(&self, scan_id: &str) -> ScanResult<Option<HistoryView<'_>>> {
        let Some(scan) = self.db.get_scan(scan_id)? else {
            return Ok(None);
        };
        Ok(Some(HistoryView {
            strength: MatchStrength::from_score(scan.score),
            medicine: self.catalog.get(scan.medicine_id),
            scan,
        }))
    }

    /// Stored history, newest first.
    pub fn history(&self) -> ScanResult<Vec<ScanRecord>> {
        Ok(self.db.list_scans(self.config.history_limit)?)
    }

    /// Build a report for a stored scan.
    pub fn report(&self, scan_id: &str) -> ScanResult<Option<ScanReport>> {
        let Some(scan) = self.db.get_scan(scan_id)? else {
            return Ok(None);
        };
        let medicine = self.catalog.get(scan.medicine_id);
        Ok(Some(ScanReport::new(scan, medicine)))
    }

    /// Export the full history for download.
    pub fn export_history(&self) -> ScanResult<HistoryExport> {
        Ok(HistoryExport::new(
            self.db.list_scans(self.config.history_limit)?,
        ))
    }

    /// The quick-access medicine list.
    pub fn quick_list(&self) -> &[MedicineRecord] {
        self.catalog.quick_list(self.config.quick_list_len)
    }

    /// Quick-search the catalog by substring.
    pub fn search_medicines(&self, term: &str) -> Vec<&MedicineRecord> {
        self.catalog.search(term)
    }

    /// Catalog statistics for the dashboard.
    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }
}
