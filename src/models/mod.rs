// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AnalyticsSnapshot, HouseListing, PredictionRecord, PriceBucket, SubmitPhase};
pub use requests::{ContactMessage, FeedbackEntry, PredictRequest};
pub use responses::{AckBody, EchoedFeatures, ErrorBody, HealthResponse, PredictResponse};
