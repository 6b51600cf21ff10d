use serde::{Deserialize, Serialize};

/// Response for the predict endpoint
///
/// `price_inr` is the contract; the USD figure and the echoed features are
/// informational and not relied on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub price_inr: f64,
    #[serde(default)]
    pub price_usd: Option<f64>,
    #[serde(default)]
    pub features: Option<EchoedFeatures>,
}

/// Features echoed back by the predict endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EchoedFeatures {
    pub area: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
}

/// Error payload the service attaches to non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Acknowledgement payload for write-only submissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
