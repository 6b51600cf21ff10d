use crate::models::{ContactMessage, SubmitPhase};
use crate::services::ServiceClient;
use crate::views::FormError;
use std::sync::Arc;
use validator::Validate;

/// Contact form controller; write-only, nothing is read back
pub struct ContactView {
    client: Arc<ServiceClient>,
    name: String,
    email: String,
    message: String,
    phase: SubmitPhase,
}

impl ContactView {
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self {
            client,
            name: String::new(),
            email: String::new(),
            message: String::new(),
            phase: SubmitPhase::Idle,
        }
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.trim().to_string();
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.trim().to_string();
    }

    pub fn set_message(&mut self, message: &str) {
        self.message = message.trim().to_string();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Validate and submit; success clears the form
    pub async fn submit(&mut self) -> Result<(), FormError> {
        let message = ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        };
        if let Err(errors) = message.validate() {
            return Err(FormError::Validation(errors.to_string()));
        }

        self.phase = SubmitPhase::Submitting;
        match self.client.submit_contact(&message).await {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
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
