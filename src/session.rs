//! Per-run session state: credential, email text and the last report
//!
//! The session is an explicit value owned by the form and handed to the
//! classifier; nothing here is global or persisted.

use crate::classify::{ClassifyError, CompletionRequest, CompletionResult, PromptTemplate};
use crate::credentials::CredentialHolder;

/// Lifecycle of the classification result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultPhase {
    #[default]
    Empty,
    Pending,
    Success,
    /// Shown once, then dropped; never stored as the report
    Failure(String),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub api_key: CredentialHolder,
    pub email_text: String,
    last_result: Option<String>,
    phase: ResultPhase,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    pub fn phase(&self) -> &ResultPhase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == ResultPhase::Pending
    }

    /// Validate the session and build the request for one classification.
    ///
    /// Checks run in order and stop at the first failure: credential, email
    /// text, then the in-flight guard.
    pub fn prepare(
        &self,
        template: PromptTemplate,
        model: &str,
    ) -> Result<CompletionRequest, ClassifyError> {
        let api_key = self.api_key.get().ok_or(ClassifyError::MissingApiKey)?;

        if self.email_text.trim().is_empty() {
            return Err(ClassifyError::MissingEmail);
        }

        if self.is_pending() {
            return Err(ClassifyError::AlreadyPending);
        }

        Ok(CompletionRequest {
            prompt: template.build(&self.email_text),
            model: model.to_string(),
            api_key: api_key.clone(),
        })
    }

    /// Mark a request as dispatched.
    pub fn begin(&mut self) {
        self.phase = ResultPhase::Pending;
    }

    /// Record the outcome of a request.
    ///
    /// Success overwrites the stored report. Failure leaves any previous
    /// report untouched.
    pub fn finish(&mut self, result: &CompletionResult) {
        match result {
            CompletionResult::Success { text } => {
                self.last_result = Some(text.clone());
                self.phase = ResultPhase::Success;
            }
            CompletionResult::Failure { message } => {
                self.phase = ResultPhase::Failure(message.clone());
            }
        }
    }

    /// Report a local validation failure without touching the pending state.
    pub fn reject(&mut self, error: &ClassifyError) {
        if !self.is_pending() {
            self.phase = ResultPhase::Failure(error.to_string());
        }
    }

    /// Dismiss a displayed failure.
    pub fn acknowledge_failure(&mut self) {
        if matches!(self.phase, ResultPhase::Failure(_)) {
            self.phase = self.settled_phase();
        }
    }

    /// Drop the stored report. No-op when nothing is stored.
    pub fn clear(&mut self) {
        if self.is_pending() {
            return;
        }
        self.last_result = None;
        self.phase = ResultPhase::Empty;
    }

    fn settled_phase(&self) -> ResultPhase {
        if self.last_result.is_some() {
            ResultPhase::Success
        } else {
            ResultPhase::Empty
        }
    }
}
