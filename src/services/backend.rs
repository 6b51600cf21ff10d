use crate::config::ServiceSettings;
use crate::models::{
    AckBody, AnalyticsSnapshot, ContactMessage, ErrorBody, FeedbackEntry, HealthResponse,
    HouseListing, PredictRequest, PredictResponse,
};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the prediction service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Api(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Prediction service client
///
/// Handles all communication with the remote service:
/// - price predictions and the house catalog
/// - analytics snapshots and record deletion
/// - feedback and contact submissions
///
/// The deployed frontend talked to two hosts (predictions and catalog on
/// one, analytics and forms on the other), so two base URLs are kept.
pub struct ServiceClient {
    predictor_url: String,
    analytics_url: String,
    client: Client,
}

impl ServiceClient {
    /// Create a new service client
    pub fn new(predictor_url: String, analytics_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            predictor_url: predictor_url.trim_end_matches('/').to_string(),
            analytics_url: analytics_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn from_settings(settings: &ServiceSettings) -> Self {
        Self::new(
            settings.predictor_url.clone(),
            settings.analytics_url.clone(),
            settings.timeout(),
        )
    }

    /// Probe the service root
    pub async fn health(&self) -> Result<HealthResponse, ServiceError> {
        let url = format!("{}/", self.predictor_url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(service_error(response, "Service is not reachable").await);
        }

        response
            .json()
            .await
            .map_err(|e| ServiceError::InvalidResponse(format!("Failed to parse health: {}", e)))
    }

    /// Request a price for the given feature vector
    pub async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ServiceError> {
        let url = format!("{}/predict", self.predictor_url);

        tracing::debug!(
            "Requesting prediction: area={}, bedrooms={}, bathrooms={}",
            request.area(),
            request.bedrooms(),
            request.bathrooms()
        );

        let response = self.client.post(&url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(service_error(response, "Error predicting price").await);
        }

        let predicted: PredictResponse = response.json().await.map_err(|e| {
            ServiceError::InvalidResponse(format!("Failed to parse prediction: {}", e))
        })?;

        if !predicted.price_inr.is_finite() || predicted.price_inr <= 0.0 {
            return Err(ServiceError::InvalidResponse(format!(
                "non-positive predicted price: {}",
                predicted.price_inr
            )));
        }

        Ok(predicted)
    }

    /// Fetch the house catalog
    pub async fn list_houses(&self) -> Result<Vec<HouseListing>, ServiceError> {
        let url = format!("{}/get_houses", self.predictor_url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(service_error(response, "Failed to fetch houses").await);
        }

        let houses: Vec<HouseListing> = response.json().await.map_err(|e| {
            ServiceError::InvalidResponse(format!("Failed to parse house list: {}", e))
        })?;

        tracing::debug!("Fetched {} houses", houses.len());

        Ok(houses)
    }

    /// Fetch the aggregate analytics snapshot
    ///
    /// The snapshot is validated before being handed out; a malformed body
    /// is rejected rather than rendered.
    pub async fn get_analytics(&self) -> Result<AnalyticsSnapshot, ServiceError> {
        let url = format!("{}/get_analytics", self.analytics_url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(service_error(response, "Failed to fetch analytics").await);
        }

        let snapshot: AnalyticsSnapshot = response.json().await.map_err(|e| {
            ServiceError::InvalidResponse(format!("Failed to parse analytics: {}", e))
        })?;

        validate_snapshot(&snapshot).map_err(ServiceError::InvalidResponse)?;

        tracing::debug!(
            "Fetched snapshot: {} records, {} total predictions",
            snapshot.history.len(),
            snapshot.total_predictions
        );

        Ok(snapshot)
    }

    /// Delete one stored prediction by id
    pub async fn delete_prediction(&self, id: &str) -> Result<(), ServiceError> {
        let url = format!(
            "{}/delete_prediction/{}",
            self.predictor_url,
            urlencoding::encode(id)
        );

        tracing::debug!("Deleting prediction: {}", id);

        let response = self.client.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(service_error(response, "Failed to delete prediction").await);
        }

        log_ack(response).await;

        Ok(())
    }

    /// Submit a feedback entry; nothing is read back
    pub async fn submit_feedback(&self, entry: &FeedbackEntry) -> Result<(), ServiceError> {
        let url = format!("{}/submit_feedback", self.analytics_url);

        let response = self.client.post(&url).json(entry).send().await?;
        if !response.status().is_success() {
            return Err(service_error(response, "Failed to submit feedback").await);
        }

        log_ack(response).await;

        Ok(())
    }

    /// Submit a contact message; nothing is read back
    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<(), ServiceError> {
        let url = format!("{}/submit_contact", self.analytics_url);

        let response = self.client.post(&url).json(message).send().await?;
        if !response.status().is_success() {
            return Err(service_error(response, "Failed to send message").await);
        }

        log_ack(response).await;

        Ok(())
    }
}

/// Map a non-2xx response to an error, surfacing the service-provided
/// message verbatim when the body carries one.
async fn service_error(response: Response, fallback: &str) -> ServiceError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => fallback.to_string(),
    };

    tracing::debug!("Service returned {}: {}", status, message);

    if status == StatusCode::NOT_FOUND {
        ServiceError::NotFound(message)
    } else {
        ServiceError::Api(message)
    }
}

/// Acknowledgement bodies only carry a human-readable message
async fn log_ack(response: Response) {
    if let Ok(ack) = response.json::<AckBody>().await {
        if let Some(message) = ack.message {
            tracing::debug!("Service acknowledged: {}", message);
        }
    }
}

/// Shape checks beyond what deserialization enforces
///
/// Aggregates come from an external service; a snapshot that violates the
/// data model is discarded, never merged into local state.
fn validate_snapshot(snapshot: &AnalyticsSnapshot) -> Result<(), String> {
    if !snapshot.average_price.is_finite() || snapshot.average_price < 0.0 {
        return Err(format!("invalid averagePrice: {}", snapshot.average_price));
    }

    for record in &snapshot.history {
        if record.id.is_empty() {
            return Err("history record with empty id".to_string());
        }
        if !record.price_inr.is_finite() || record.price_inr <= 0.0 {
            return Err(format!("non-positive price_inr for record {}", record.id));
        }
        if !record.area.is_finite() || record.area <= 0.0 {
            return Err(format!("non-positive area for record {}", record.id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PredictionRecord;
    use chrono::Utc;

    #[test]
    fn test_client_creation_trims_trailing_slashes() {
        let client = ServiceClient::new(
            "http://localhost:5000/".to_string(),
            "https://demo-house.test/".to_string(),
            Duration::from_secs(5),
        );

        assert_eq!(client.predictor_url, "http://localhost:5000");
        assert_eq!(client.analytics_url, "https://demo-house.test");
    }

    #[test]
    fn test_snapshot_validation_rejects_bad_prices() {
        let snapshot = AnalyticsSnapshot {
            history: vec![PredictionRecord {
                id: "7".to_string(),
                timestamp: Utc::now(),
                area: 1000.0,
                bedrooms: None,
                bathrooms: None,
                price_inr: -1.0,
            }],
            average_price: 100.0,
            total_predictions: 1,
            price_ranges: vec![],
        };

        assert!(validate_snapshot(&snapshot).is_err());
    }

    #[test]
    fn test_snapshot_validation_accepts_empty_history() {
        assert!(validate_snapshot(&AnalyticsSnapshot::default()).is_ok());
    }
}
