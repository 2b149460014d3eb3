//! Hospital feedback database operations.

use rusqlite::params;

use super::{Database, DbResult};
use crate::models::Feedback;

impl Database {
    /// Insert a feedback submission.
    pub fn insert_feedback(&self, feedback: &Feedback) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO hospital_feedback (
                feedback_id, name, email, hospital_id, rating, message, submitted_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                feedback.feedback_id,
                feedback.name,
                feedback.email,
                feedback.hospital_id,
                feedback.rating,
                feedback.message,
                feedback.submitted_at,
            ],
        )?;
        Ok(())
    }

    /// List all feedback, newest first.
    pub fn list_feedback(&self) -> DbResult<Vec<Feedback>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT feedback_id, name, email, hospital_id, rating, message, submitted_at
            FROM hospital_feedback
            ORDER BY submitted_at DESC, rowid DESC
            "#,
        )?;

        let feedback = stmt
            .query_map([], row_to_feedback)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(feedback)
    }

    /// List feedback for a single hospital, newest first.
    pub fn feedback_for_hospital(&self, hospital_id: u32) -> DbResult<Vec<Feedback>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT feedback_id, name, email, hospital_id, rating, message, submitted_at
            FROM hospital_feedback
            WHERE hospital_id = ?1
            ORDER BY submitted_at DESC, rowid DESC
            "#,
        )?;

        let feedback = stmt
            .query_map(params![hospital_id], row_to_feedback)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(feedback)
    }
}

fn row_to_feedback(row: &rusqlite::Row<'_>) -> rusqlite::Result<Feedback> {
    Ok(Feedback {
        feedback_id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        hospital_id: row.get(3)?,
        rating: row.get(4)?,
        message: row.get(5)?,
        submitted_at: row.get(6)?,
    })
}
