//! Scan history database operations.

use rusqlite::{params, OptionalExtension};
use tracing::debug;

use super::{Database, DbResult};
use crate::models::ScanRecord;

impl Database {
    /// Insert a scan, then trim the table to the newest `limit` entries.
    pub fn insert_scan(&self, scan: &ScanRecord, limit: usize) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO scan_history (
                scan_id, medicine_id, medicine_name, score, extracted_excerpt, scanned_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                scan.scan_id,
                scan.medicine_id,
                scan.medicine_name,
                scan.score,
                scan.extracted_excerpt,
                scan.scanned_at,
            ],
        )?;

        // rowid breaks ties between scans sharing a timestamp
        let trimmed = self.conn.execute(
            r#"
            DELETE FROM scan_history WHERE scan_id NOT IN (
                SELECT scan_id FROM scan_history
                ORDER BY scanned_at DESC, rowid DESC
                LIMIT ?1
            )
            "#,
            params![limit as i64],
        )?;

        debug!(scan_id = %scan.scan_id, trimmed, "scan recorded");
        Ok(())
    }

    /// List scans, newest first.
    pub fn list_scans(&self, limit: usize) -> DbResult<Vec<ScanRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT scan_id, medicine_id, medicine_name, score, extracted_excerpt, scanned_at
            FROM scan_history
            ORDER BY scanned_at DESC, rowid DESC
            LIMIT ?1
            "#,
        )?;

        let scans = stmt
            .query_map(params![limit as i64], row_to_scan)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(scans)
    }

    /// Look up a single scan by id.
    pub fn get_scan(&self, scan_id: &str) -> DbResult<Option<ScanRecord>> {
        let scan = self
            .conn
            .query_row(
                r#"
                SELECT scan_id, medicine_id, medicine_name, score, extracted_excerpt, scanned_at
                FROM scan_history WHERE scan_id = ?1
                "#,
                params![scan_id],
                row_to_scan,
            )
            .optional()?;
        Ok(scan)
    }

    /// Total scans currently stored.
    pub fn scan_count(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM scan_history", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete all history.
    pub fn clear_history(&self) -> DbResult<()> {
        self.conn.execute("DELETE FROM scan_history", [])?;
        Ok(())
    }
}

fn row_to_scan(row: &rusqlite::Row<'_>) -> rusqlite::Result<ScanRecord> {
    Ok(ScanRecord {
        scan_id: row.get(0)?,
        medicine_id: row.get(1)?,
        medicine_name: row.get(2)?,
        score: row.get(3)?,
        extracted_excerpt: row.get(4)?,
        scanned_at: row.get(5)?,
    })
}
