use crate::models::{FeedbackEntry, SubmitPhase};
use crate::services::ServiceClient;
use crate::views::FormError;
use std::sync::Arc;
use validator::Validate;

/// Rating labels, indexed by rating minus one
pub const RATING_LABELS: [&str; 5] = ["Poor", "Fair", "Good", "Great", "Excellent"];

/// Feedback form controller; write-only, nothing is read back
pub struct FeedbackView {
    client: Arc<ServiceClient>,
    rating: u8,
    comment: String,
    phase: SubmitPhase,
}

impl FeedbackView {
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self {
            client,
            // 0 means no rating selected yet
            rating: 0,
            comment: String::new(),
            phase: SubmitPhase::Idle,
        }
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating;
    }

    pub fn set_comment(&mut self, comment: &str) {
        self.comment = comment.to_string();
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn rating_label(rating: u8) -> Option<&'static str> {
        let index = (rating as usize).checked_sub(1)?;
        RATING_LABELS.get(index).copied()
    }

    /// Validate and submit; success resets the form
    pub async fn submit(&mut self) -> Result<(), FormError> {
        let entry = FeedbackEntry {
            rating: self.rating,
            comment: self.comment.trim().to_string(),
        };
        if let Err(errors) = entry.validate() {
            return Err(FormError::Validation(errors.to_string()));
        }

        self.phase = SubmitPhase::Submitting;
        match self.client.submit_feedback(&entry).await {
            Ok(()) => {
                self.rating = 0;
                self.comment.clear();
                self.phase = SubmitPhase::Succeeded;
                Ok(())
            }
            Err(e) => {
                self.phase = SubmitPhase::Failed;
                Err(e.into())
            }
        }
    }
}
