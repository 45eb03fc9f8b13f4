use crate::models::AngerRecord;
use crate::storage::{ANGER_COUNT_KEY, ANGER_LOGS_KEY, Defaults};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};

/// The anger journal and its running total.
///
/// `total_count` is stored under its own key and is not derived from
/// `records.len()`, so the two can disagree after a partial wipe of storage.
#[derive(Debug)]
pub struct RecordStore {
    storage: Defaults,
    records: Vec<AngerRecord>,
    total_count: u64,
}

impl RecordStore {
    pub fn initialize(storage: Defaults) -> Self {
        let records = decode_records(storage.value(ANGER_LOGS_KEY));
        let total_count = storage.integer(ANGER_COUNT_KEY);

        if total_count < records.len() as u64 {
            warn!(
                "stored count {total_count} is below the {} stored records",
                records.len()
            );
        }
        info!(
            "loaded {} records (count {total_count}) from {}",
            records.len(),
            storage.path().display()
        );

        Self {
            storage,
            records,
            total_count,
        }
    }

    /// Oldest first.
    pub fn records(&self) -> &[AngerRecord] {
        &self.records
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Appends a record, bumps the counter and saves both.
    ///
    /// The reason is stored as given. Persistence failures are logged by
    /// `save` and never reach the caller.
    pub async fn add_record(&mut self, reason: impl Into<String>) {
        self.add_record_at(reason, Utc::now()).await
    }

    pub async fn add_record_at(&mut self, reason: impl Into<String>, date: DateTime<Utc>) {
        let record = AngerRecord::new_at(reason, date);
        info!("logged record {}", record.id);
        self.records.push(record);
        self.total_count = self.total_count.saturating_add(1);
        self.save().await
    }

    /// Rewrites both storage keys in full and flushes to disk.
    ///
    /// If the records cannot be encoded their key keeps its previous value;
    /// the counter is written regardless. A failed flush is logged and the file
    /// keeps its previous contents.
    pub async fn save(&mut self) {
        match serde_json::to_value(&self.records) {
            Ok(encoded) => self.storage.set(ANGER_LOGS_KEY, encoded),
            Err(err) => error!("failed to encode records, skipping write: {err}"),
        }
        self.storage.set_integer(ANGER_COUNT_KEY, self.total_count);
        if let Err(err) = self.storage.flush().await {
            error!(
                "failed to write {}, keeping changes in memory: {}",
                self.storage.path().display(),
                err.message
            );
        }
    }
}

fn decode_records(value: Option<&Value>) -> Vec<AngerRecord> {
    let Some(value) = value else {
        return Vec::new();
    };

    match Vec::<AngerRecord>::deserialize(value) {
        Ok(records) => records,
        Err(err) => {
            warn!("stored records are unreadable, starting empty: {err}");
            Vec::new()
        }
    }
}
