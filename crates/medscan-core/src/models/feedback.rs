//! Hospital feedback models.

use serde::{Deserialize, Serialize};

/// A user feedback submission for a hospital.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    /// Unique feedback id (UUID)
    pub feedback_id: String,
    /// Submitter name
    pub name: String,
    /// Submitter email
    pub email: String,
    /// The hospital this feedback is about
    pub hospital_id: u32,
    /// Star rating, 0-5 (0 means not rated)
    pub rating: u8,
    /// Free-text message
    pub message: String,
    /// Submission timestamp (RFC 3339)
    pub submitted_at: String,
}

impl Feedback {
    /// Create a new feedback entry. Ratings above 5 are clamped.
    pub fn new(name: String, email: String, hospital_id: u32, rating: u8, message: String) -> Self {
        Self {
            feedback_id: uuid::Uuid::new_v4().to_string(),
            name,
            email,
            hospital_id,
            rating: rating.min(5),
            message,
            submitted_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
