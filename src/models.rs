use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One journaled anger episode.
///
/// `id` and `date` are fixed at creation; nothing edits a record afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AngerRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub reason: String,
}

impl AngerRecord {
    pub fn new(reason: impl Into<String>) -> Self {
        Self::new_at(reason, Utc::now())
    }

    pub fn new_at(reason: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddRecordRequest {
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct AddRecordForm {
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrackerResponse {
    pub total_count: u64,
    pub progress: f64,
    /// Newest first.
    pub records: Vec<AngerRecord>,
}
