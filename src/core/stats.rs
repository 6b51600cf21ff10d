use crate::models::{AnalyticsSnapshot, PredictionRecord};
use chrono::{DateTime, Duration, Utc};

/// Width of the "Last 24 Hours" stat window in milliseconds
pub const DAY_MS: i64 = 86_400_000;

/// Count history records newer than 24 hours before `now`.
///
/// Strictly greater-than: a record sitting exactly on the window boundary
/// does not count.
pub fn recent_count(history: &[PredictionRecord], now: DateTime<Utc>) -> usize {
    let cutoff = now - Duration::milliseconds(DAY_MS);
    history
        .iter()
        .filter(|record| record.timestamp > cutoff)
        .count()
}

/// History in chronological order for trend rendering
///
/// The service returns records newest-first.
pub fn trend_points(history: &[PredictionRecord]) -> Vec<&PredictionRecord> {
    history.iter().rev().collect()
}

/// Stat-card values derived from a snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotStats {
    pub total_predictions: u64,
    pub average_price: f64,
    pub last_24h: usize,
}

impl SnapshotStats {
    pub fn compute(snapshot: &AnalyticsSnapshot, now: DateTime<Utc>) -> Self {
        Self {
            total_predictions: snapshot.total_predictions,
            average_price: snapshot.average_price,
            last_24h: recent_count(&snapshot.history, now),
        }
    }
}
