use crate::models::{AngerRecord, TrackerResponse};
use crate::record_store::RecordStore;

/// Count at which the progress ring is full.
pub const PROGRESS_GOAL: u64 = 50;

pub fn progress(total_count: u64) -> f64 {
    (total_count as f64 / PROGRESS_GOAL as f64).min(1.0)
}

pub fn build_tracker(store: &RecordStore) -> TrackerResponse {
    build_tracker_from(store.records(), store.total_count())
}

pub fn build_tracker_from(records: &[AngerRecord], total_count: u64) -> TrackerResponse {
    TrackerResponse {
        total_count,
        progress: progress(total_count),
        records: records.iter().rev().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_capped_at_one() {
        assert_eq!(progress(75), 1.0);
        assert_eq!(progress(PROGRESS_GOAL), 1.0);
    }

    #[test]
    fn progress_scales_below_goal() {
        assert_eq!(progress(0), 0.0);
        assert!((progress(10) - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn tracker_lists_newest_first() {
        let records = vec![AngerRecord::new("first"), AngerRecord::new("second")];
        let tracker = build_tracker_from(&records, 2);

        assert_eq!(tracker.total_count, 2);
        assert_eq!(tracker.records[0].reason, "second");
        assert_eq!(tracker.records[1].reason, "first");
    }
}
