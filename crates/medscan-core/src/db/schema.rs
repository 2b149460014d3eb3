//! SQLite schema definition.

/// Complete database schema for medscan.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Scan History (bounded, newest-first)
-- ============================================================================

CREATE TABLE IF NOT EXISTS scan_history (
    scan_id TEXT PRIMARY KEY,
    medicine_id INTEGER NOT NULL,
    medicine_name TEXT NOT NULL,
    score INTEGER NOT NULL CHECK (score BETWEEN 0 AND 100),
    extracted_excerpt TEXT NOT NULL DEFAULT '',
    scanned_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_scan_history_time ON scan_history(scanned_at);
CREATE INDEX IF NOT EXISTS idx_scan_history_medicine ON scan_history(medicine_id);

-- ============================================================================
-- Hospital Feedback
-- ============================================================================

CREATE TABLE IF NOT EXISTS hospital_feedback (
    feedback_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    hospital_id INTEGER NOT NULL,
    rating INTEGER NOT NULL DEFAULT 0 CHECK (rating BETWEEN 0 AND 5),
    message TEXT NOT NULL DEFAULT '',
    submitted_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_feedback_hospital ON hospital_feedback(hospital_id);
"#;
