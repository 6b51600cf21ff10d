use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored prediction, as returned in the analytics history
///
/// Records are immutable once created; the only mutation the service
/// supports is deletion by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: String,
    #[serde(with = "service_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub area: f64,
    #[serde(default)]
    pub bedrooms: Option<f64>,
    #[serde(default)]
    pub bathrooms: Option<f64>,
    pub price_inr: f64,
}

/// Aggregate analytics as computed by the service
///
/// The service recomputes this wholesale on every fetch. The client replaces
/// its copy instead of merging, so the two can never drift. `history` is
/// ordered newest-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub history: Vec<PredictionRecord>,
    #[serde(rename = "averagePrice")]
    pub average_price: f64,
    #[serde(rename = "totalPredictions")]
    pub total_predictions: u64,
    #[serde(rename = "priceRanges")]
    pub price_ranges: Vec<PriceBucket>,
}

/// One bucket of the price distribution histogram
///
/// Labels come from the service ("0-20L", "20L-50L", "50L-1Cr", "1Cr+").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBucket {
    pub range: String,
    pub count: u64,
}

/// One house from the catalog; `price` is in USD
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseListing {
    pub area: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub price: f64,
}

/// Submission lifecycle shared by the predictor, feedback and contact forms
///
/// Idle -> Submitting -> Succeeded | Failed; the next attempt moves straight
/// back to Submitting. No retries, no timeout beyond the transport's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitPhase::Submitting)
    }
}

/// Timestamp codec for the service wire format
///
/// The service emits naive ISO-8601 instants (UTC without an offset);
/// RFC 3339 with an offset is accepted too.
pub(crate) mod service_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
    }

    pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_naive_timestamp_as_utc() {
        let parsed = service_timestamp::parse("2025-03-01T10:15:30.123456").unwrap();
        assert_eq!(parsed.hour(), 10);
    }

    #[test]
    fn test_parse_rfc3339_timestamp() {
        let parsed = service_timestamp::parse("2025-03-01T10:15:30+05:30").unwrap();
        assert_eq!(parsed.hour(), 4);
        assert_eq!(parsed.minute(), 45);
    }

    #[test]
    fn test_reject_garbage_timestamp() {
        assert!(service_timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn test_record_deserializes_without_optional_rooms() {
        let record: PredictionRecord = serde_json::from_str(
            r#"{"id": "7", "timestamp": "2025-03-01T10:15:30", "area": 1000.0, "price_inr": 8300000.0}"#,
        )
        .unwrap();
        assert_eq!(record.id, "7");
        assert!(record.bedrooms.is_none());
    }

    #[test]
    fn test_submit_phase_starts_idle() {
        assert_eq!(SubmitPhase::default(), SubmitPhase::Idle);
        assert!(!SubmitPhase::default().is_submitting());
        assert!(SubmitPhase::Submitting.is_submitting());
    }
}
