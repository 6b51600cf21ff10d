// View controller exports
pub mod analytics;
pub mod catalog;
pub mod contact;
pub mod feedback;
pub mod predictor;

pub use analytics::AnalyticsView;
pub use catalog::CatalogView;
pub use contact::ContactView;
pub use feedback::FeedbackView;
pub use predictor::PredictorView;

use crate::services::ServiceError;
use thiserror::Error;

/// Errors surfaced by form-style views
#[derive(Debug, Error)]
pub enum FormError {
    /// Local validation failure; no request was made.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl FormError {
    pub fn is_validation(&self) -> bool {
        matches!(self, FormError::Validation(_))
    }
}
