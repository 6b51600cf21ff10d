use crate::core::format::{format_inr, format_price_per_area};
use crate::core::refresh::{RefreshBus, RefreshEvent};
use crate::models::{PredictRequest, PredictResponse, SubmitPhase};
use crate::services::ServiceClient;
use crate::views::FormError;
use std::sync::Arc;

/// Input labels, in feature-vector order
pub const FIELD_LABELS: [&str; 3] = ["Area (sq ft)", "Bedrooms", "Bathrooms"];

/// Prediction form controller
///
/// Keeps the three raw field values, submits them as a positional feature
/// vector and reports the predicted price. A successful submission clears
/// the fields and notifies listeners through the refresh bus; the event
/// carries no payload.
pub struct PredictorView {
    client: Arc<ServiceClient>,
    refresh: RefreshBus,
    fields: [String; 3],
    phase: SubmitPhase,
    error: Option<String>,
    last_prediction: Option<PredictResponse>,
    last_area: Option<f64>,
}

impl PredictorView {
    pub fn new(client: Arc<ServiceClient>, refresh: RefreshBus) -> Self {
        Self {
            client,
            refresh,
            fields: Default::default(),
            phase: SubmitPhase::Idle,
            error: None,
            last_prediction: None,
            last_area: None,
        }
    }

    /// Update one field; editing clears a stale error
    pub fn set_field(&mut self, index: usize, value: &str) {
        if let Some(field) = self.fields.get_mut(index) {
            self.error = None;
            *field = value.trim().to_string();
        }
    }

    pub fn fields(&self) -> &[String; 3] {
        &self.fields
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the current fields for prediction.
    ///
    /// Validation failures never reach the network. On success the fields
    /// are cleared and exactly one refresh event is emitted; on failure the
    /// service-provided message is kept verbatim.
    pub async fn submit(&mut self) -> Result<f64, FormError> {
        let [area, bedrooms, bathrooms] = match self.parse_fields() {
            Ok(values) => values,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        self.phase = SubmitPhase::Submitting;
        self.error = None;

        let request = PredictRequest::new(area, bedrooms, bathrooms);
        match self.client.predict(&request).await {
            Ok(prediction) => {
                let price_inr = prediction.price_inr;
                self.last_prediction = Some(prediction);
                self.last_area = Some(area);
                self.fields = Default::default();
                self.phase = SubmitPhase::Succeeded;
                self.refresh.emit(RefreshEvent::PredictionRecorded);
                Ok(price_inr)
            }
            Err(e) => {
                self.phase = SubmitPhase::Failed;
                self.error = Some(e.to_string());
                self.last_prediction = None;
                Err(e.into())
            }
        }
    }

    fn parse_fields(&self) -> Result<[f64; 3], FormError> {
        if self.fields.iter().any(|field| field.is_empty()) {
            return Err(FormError::Validation(
                "Please fill in all fields".to_string(),
            ));
        }

        let mut values = [0.0; 3];
        for (index, field) in self.fields.iter().enumerate() {
            let value: f64 = field.parse().map_err(|_| {
                FormError::Validation(format!("{} must be a number", FIELD_LABELS[index]))
            })?;
            if !value.is_finite() || value <= 0.0 {
                return Err(FormError::Validation(format!(
                    "{} must be a positive number",
                    FIELD_LABELS[index]
                )));
            }
            values[index] = value;
        }

        Ok(values)
    }

    /// Estimated-price block for the last successful prediction
    pub fn render_result(&self) -> Option<String> {
        let prediction = self.last_prediction.as_ref()?;
        let area = self.last_area?;

        Some(format!(
            "Estimated Price: {}\n                 {}",
            format_inr(prediction.price_inr),
            format_price_per_area(prediction.price_inr, area)
        ))
    }
}
