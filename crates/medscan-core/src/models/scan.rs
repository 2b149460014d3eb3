//! Scan history models.

use serde::{Deserialize, Serialize};

/// A persisted scan history entry.
///
/// Stores only what the history list needs: which medicine matched, how
/// confidently, and a short excerpt of the recognized text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanRecord {
    /// Unique scan id (UUID)
    pub scan_id: String,
    /// Matched medicine id
    pub medicine_id: u32,
    /// Matched medicine name (denormalized for display)
    pub medicine_name: String,
    /// Final match score [0, 100]
    pub score: u8,
    /// Excerpt of the OCR text, truncated for storage
    pub extracted_excerpt: String,
    /// Scan timestamp (RFC 3339)
    pub scanned_at: String,
}

impl ScanRecord {
    /// Create a new scan record, truncating the extracted text to
    /// `excerpt_len` characters.
    pub fn new(
        medicine_id: u32,
        medicine_name: String,
        score: u8,
        extracted_text: &str,
        excerpt_len: usize,
    ) -> Self {
        Self {
            scan_id: uuid::Uuid::new_v4().to_string(),
            medicine_id,
            medicine_name,
            score,
            extracted_excerpt: excerpt(extracted_text, excerpt_len),
            scanned_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Truncate to `len` characters, marking elision with "...".
fn excerpt(text: &str, len: usize) -> String {
    if text.chars().count() <= len {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(len).collect();
        out.push_str("...");
        out
    }
}
