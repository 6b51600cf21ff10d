// Unit tests for houseboard

use chrono::{Duration, TimeZone, Utc};
use houseboard::core::format::{
    format_inr, format_lakhs, format_price_per_area, price_per_area, usd_to_inr,
};
use houseboard::core::stats::{recent_count, trend_points, SnapshotStats, DAY_MS};
use houseboard::models::{AnalyticsSnapshot, PredictRequest, PredictionRecord, SubmitPhase};

fn create_record(id: &str, timestamp: chrono::DateTime<Utc>, price_inr: f64) -> PredictionRecord {
    PredictionRecord {
        id: id.to_string(),
        timestamp,
        area: 1000.0,
        bedrooms: Some(3.0),
        bathrooms: Some(2.0),
        price_inr,
    }
}

#[test]
fn test_average_price_display() {
    // totalPredictions 5, averagePrice 4500000 renders with Indian grouping
    let snapshot = AnalyticsSnapshot {
        history: vec![],
        average_price: 4_500_000.0,
        total_predictions: 5,
        price_ranges: vec![],
    };

    let stats = SnapshotStats::compute(&snapshot, Utc::now());
    assert_eq!(stats.total_predictions, 5);
    assert_eq!(format_inr(stats.average_price), "₹45,00,000");
}

#[test]
fn test_price_per_area_display() {
    assert_eq!(price_per_area(8_300_000.0, 1000.0), 8_300);
    assert_eq!(format_price_per_area(8_300_000.0, 1000.0), "₹8,300/sq ft");
}

#[test]
fn test_catalog_usd_conversion_display() {
    let price_inr = usd_to_inr(100_000.0);
    assert_eq!(format_inr(price_inr), "₹83,00,000");
    assert_eq!(format_price_per_area(price_inr, 1000.0), "₹8,300/sq ft");
}

#[test]
fn test_lakh_axis_labels() {
    assert_eq!(format_lakhs(8_300_000.0), "₹83.0L");
    assert_eq!(format_lakhs(450_000.0), "₹4.5L");
}

#[test]
fn test_last_24_hours_is_strictly_greater_than() {
    let now = Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap();
    let boundary = now - Duration::milliseconds(DAY_MS);

    let history = vec![
        create_record("just-inside", boundary + Duration::milliseconds(1), 1.0),
        create_record("exact-boundary", boundary, 1.0),
        create_record("just-outside", boundary - Duration::milliseconds(1), 1.0),
    ];

    // The record exactly 86,400,000 ms old is excluded.
    assert_eq!(recent_count(&history, now), 1);
}

#[test]
fn test_feature_vector_is_positional() {
    let request = PredictRequest::new(1200.0, 4.0, 3.0);
    let body = serde_json::to_string(&request).unwrap();
    assert_eq!(body, r#"{"features":[1200.0,4.0,3.0]}"#);
}

#[test]
fn test_snapshot_parses_service_payload() {
    let snapshot: AnalyticsSnapshot = serde_json::from_str(
        r#"{
            "history": [
                {
                    "id": "67c3f1",
                    "area": 1000.0,
                    "bedrooms": 3,
                    "bathrooms": 2,
                    "price_inr": 8300000.0,
                    "timestamp": "2025-03-01T10:15:30.123456"
                },
                {
                    "id": "67c3f0",
                    "area": 1500.0,
                    "bedrooms": 4,
                    "bathrooms": 2,
                    "price_inr": 12450000.0,
                    "timestamp": "2025-03-01T09:15:30+00:00"
                }
            ],
            "averagePrice": 10375000.0,
            "totalPredictions": 2,
            "priceRanges": [
                {"range": "0-20L", "count": 0},
                {"range": "20L-50L", "count": 0},
                {"range": "50L-1Cr", "count": 1},
                {"range": "1Cr+", "count": 1}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(snapshot.history.len(), 2);
    assert_eq!(snapshot.total_predictions, 2);
    assert_eq!(snapshot.price_ranges.len(), 4);
    assert_eq!(snapshot.price_ranges[2].range, "50L-1Cr");
    // Naive and offset timestamps both land in UTC.
    let delta = snapshot.history[0].timestamp - snapshot.history[1].timestamp;
    assert_eq!(delta.num_minutes(), 60);
}

#[test]
fn test_snapshot_rejects_missing_aggregates() {
    let result: Result<AnalyticsSnapshot, _> = serde_json::from_str(r#"{"history": []}"#);
    assert!(result.is_err());
}

#[test]
fn test_trend_points_are_chronological() {
    let now = Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap();
    let history = vec![
        create_record("newest", now, 3.0),
        create_record("oldest", now - Duration::hours(5), 1.0),
    ];

    let points = trend_points(&history);
    assert_eq!(points[0].id, "oldest");
    assert_eq!(points[1].id, "newest");
}

#[test]
fn test_submit_phase_lifecycle_default() {
    assert_eq!(SubmitPhase::default(), SubmitPhase::Idle);
}
