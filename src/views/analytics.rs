use crate::core::format::{format_inr, format_lakhs};
use crate::core::refresh::RefreshListener;
use crate::core::stats::{trend_points, SnapshotStats};
use crate::models::AnalyticsSnapshot;
use crate::services::{ServiceClient, ServiceError};
use chrono::Utc;
use std::sync::Arc;

/// Aggregate analytics controller
///
/// Holds the most recent snapshot as-is. The service recomputes aggregates
/// wholesale, so local state is only ever replaced, never merged or patched.
pub struct AnalyticsView {
    client: Arc<ServiceClient>,
    listener: RefreshListener,
    snapshot: AnalyticsSnapshot,
    loading: bool,
    deleting_id: Option<String>,
}

impl AnalyticsView {
    pub fn new(client: Arc<ServiceClient>, listener: RefreshListener) -> Self {
        Self {
            client,
            listener,
            snapshot: AnalyticsSnapshot::default(),
            loading: true,
            deleting_id: None,
        }
    }

    /// Replace the snapshot with a fresh fetch
    ///
    /// On failure the previous snapshot is kept and the error is logged.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.client.get_analytics().await {
            Ok(snapshot) => self.snapshot = snapshot,
            Err(e) => tracing::error!("Error fetching analytics: {}", e),
        }
        self.loading = false;
    }

    /// Re-fetch once per pending refresh event
    ///
    /// Events are never coalesced: two queued events mean two fetches, even
    /// when the second changes nothing.
    pub async fn drain_refresh_events(&mut self) -> usize {
        let mut fetches = 0;
        while let Some(event) = self.listener.try_next() {
            tracing::debug!("Refresh event received: {:?}", event);
            self.refresh().await;
            fetches += 1;
        }
        fetches
    }

    /// Delete one prediction record by id, then re-fetch the snapshot.
    ///
    /// A failed delete leaves the local list untouched. One in-flight delete
    /// is tracked at a time; `is_deleting` lets the renderer disable that
    /// row while the request runs.
    pub async fn delete(&mut self, id: &str) -> Result<(), ServiceError> {
        if id.is_empty() {
            tracing::error!("No id provided for deletion");
            return Ok(());
        }

        self.deleting_id = Some(id.to_string());
        let result = self.client.delete_prediction(id).await;
        match &result {
            Ok(()) => self.refresh().await,
            Err(e) => tracing::error!("Error deleting prediction {}: {}", id, e),
        }
        self.deleting_id = None;

        result
    }

    pub fn snapshot(&self) -> &AnalyticsSnapshot {
        &self.snapshot
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting_id.as_deref() == Some(id)
    }

    pub fn stats(&self) -> SnapshotStats {
        SnapshotStats::compute(&self.snapshot, Utc::now())
    }

    /// Plain-text rendering of the stat cards, both charts and the history
    /// table
    pub fn render(&self) -> String {
        let stats = self.stats();
        let mut out = String::new();

        out.push_str(&format!("Total Predictions: {}\n", stats.total_predictions));
        out.push_str(&format!(
            "Average Price:     {}\n",
            format_inr(stats.average_price)
        ));
        out.push_str(&format!("Last 24 Hours:     {}\n", stats.last_24h));

        out.push_str("\nPrice Trends\n");
        for record in trend_points(&self.snapshot.history) {
            out.push_str(&format!(
                "  {}  {}\n",
                record.timestamp.format("%Y-%m-%d %H:%M"),
                format_lakhs(record.price_inr)
            ));
        }

        out.push_str("\nPrice Distribution\n");
        let max_count = self
            .snapshot
            .price_ranges
            .iter()
            .map(|bucket| bucket.count)
            .max()
            .unwrap_or(0);
        for bucket in &self.snapshot.price_ranges {
            out.push_str(&format!(
                "  {:>8}  {:<30} {}\n",
                bucket.range,
                bar(bucket.count, max_count, 30),
                bucket.count
            ));
        }

        out.push_str("\nRecent Predictions\n");
        for record in &self.snapshot.history {
            let marker = if self.is_deleting(&record.id) {
                "  (deleting...)"
            } else {
                ""
            };
            out.push_str(&format!(
                "  {}  {}  {:>8} sq ft  {:>14}{}\n",
                record.id,
                record.timestamp.format("%Y-%m-%d %H:%M"),
                record.area,
                format_inr(record.price_inr),
                marker
            ));
        }

        out
    }
}

fn bar(count: u64, max_count: u64, width: usize) -> String {
    if max_count == 0 {
        return String::new();
    }
    let filled = ((count as f64 / max_count as f64) * width as f64).round() as usize;
    "#".repeat(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(4, 4, 30).len(), 30);
        assert_eq!(bar(2, 4, 30).len(), 15);
        assert_eq!(bar(0, 4, 30), "");
        assert_eq!(bar(0, 0, 30), "");
    }
}
