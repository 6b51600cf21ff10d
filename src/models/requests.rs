use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to predict a house price
///
/// The service takes a positional feature vector: index 0 is area in sq ft,
/// index 1 bedrooms, index 2 bathrooms. The order is part of the wire
/// contract and must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    features: [f64; 3],
}

impl PredictRequest {
    pub fn new(area: f64, bedrooms: f64, bathrooms: f64) -> Self {
        Self {
            features: [area, bedrooms, bathrooms],
        }
    }

    pub fn area(&self) -> f64 {
        self.features[0]
    }

    pub fn bedrooms(&self) -> f64 {
        self.features[1]
    }

    pub fn bathrooms(&self) -> f64 {
        self.features[2]
    }
}

/// Feedback submission; write-only from the client's perspective
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackEntry {
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[validate(length(min = 1))]
    pub comment: String,
}

/// Contact form submission; write-only
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_position_order() {
        let request = PredictRequest::new(1000.0, 3.0, 2.0);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "features": [1000.0, 3.0, 2.0] })
        );
        assert_eq!(request.area(), 1000.0);
        assert_eq!(request.bedrooms(), 3.0);
        assert_eq!(request.bathrooms(), 2.0);
    }

    #[test]
    fn test_feedback_rating_bounds() {
        let low = FeedbackEntry {
            rating: 0,
            comment: "meh".to_string(),
        };
        assert!(low.validate().is_err());

        let high = FeedbackEntry {
            rating: 6,
            comment: "great".to_string(),
        };
        assert!(high.validate().is_err());

        let ok = FeedbackEntry {
            rating: 5,
            comment: "great".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_contact_requires_well_formed_email() {
        let bad = ContactMessage {
            name: "Asha".to_string(),
            email: "not-an-email".to_string(),
            message: "hello".to_string(),
        };
        assert!(bad.validate().is_err());

        let ok = ContactMessage {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            message: "hello".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
