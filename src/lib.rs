//! Houseboard - terminal dashboard for the house price prediction service
//!
//! This library provides the pieces behind the dashboard binary: a typed
//! client for the prediction service, validated wire schemas, INR currency
//! formatting, derived analytics, and the refresh-event contract between
//! the predictor and analytics views.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod views;

// Re-export commonly used types
pub use crate::core::format::{format_inr, format_price_per_area};
pub use crate::core::refresh::{RefreshBus, RefreshEvent};
pub use crate::core::stats::SnapshotStats;
pub use crate::models::{
    AnalyticsSnapshot, ContactMessage, FeedbackEntry, HouseListing, PredictRequest,
    PredictionRecord, PriceBucket, SubmitPhase,
};
pub use crate::services::{ServiceClient, ServiceError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(format_inr(4_500_000.0), "₹45,00,000");
    }
}
