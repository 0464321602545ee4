//! Email classification through a hosted chat-completion model
//!
//! This module covers everything between the form and the remote service:
//! - Instruction templates and prompt building
//! - The completion client and its error taxonomy
//! - Orchestration that validates a session and stores the outcome
//! - An actor that keeps network calls off the UI loop

mod actor;
mod client;
mod error;
mod prompts;
mod request;
#[cfg(test)]
pub mod testing;

use std::sync::Arc;

pub use actor::{ClassifyActorHandle, ClassifyCommand, ClassifyEvent, spawn_classify_actor};
pub use client::{CompletionClient, GroqClient};
pub use error::ClassifyError;
pub use prompts::PromptTemplate;
pub use request::{CompletionRequest, CompletionResult};

use crate::session::Session;

/// Ties a completion client to the template and model used for a session
#[derive(Clone)]
pub struct Classifier {
    client: Arc<dyn CompletionClient>,
    template: PromptTemplate,
    model: String,
}

impl Classifier {
    pub fn new(client: Arc<dyn CompletionClient>, template: PromptTemplate, model: String) -> Self {
        Self {
            client,
            template,
            model,
        }
    }

    pub fn template(&self) -> PromptTemplate {
        self.template
    }

    pub fn set_template(&mut self, template: PromptTemplate) {
        self.template = template;
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn client(&self) -> Arc<dyn CompletionClient> {
        Arc::clone(&self.client)
    }

    /// Validate `session` and mark it pending.
    ///
    /// Returns the request to send. A validation failure is recorded on the
    /// session and nothing is marked pending.
    pub fn start(&self, session: &mut Session) -> Result<CompletionRequest, ClassifyError> {
        match session.prepare(self.template, &self.model) {
            Ok(request) => {
                tracing::info!(
                    "Classifying email ({} chars) with {} / {}",
                    session.email_text.chars().count(),
                    self.model,
                    self.template.label()
                );
                session.begin();
                Ok(request)
            }
            Err(e) => {
                tracing::debug!("Classification rejected: {}", e);
                session.reject(&e);
                Err(e)
            }
        }
    }

    /// Validate, call the service and store the outcome in `session`.
    ///
    /// Validation failures return without touching the network. No failure
    /// clears a previously stored report.
    pub async fn classify(&self, session: &mut Session) -> CompletionResult {
        let request = match self.start(session) {
            Ok(request) => request,
            Err(e) => return e.into(),
        };

        let result = self.client.invoke(&request).await;
        session.finish(&result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedClient;
    use super::*;
    use crate::report::ReportExport;
    use crate::samples::SampleEmail;
    use crate::session::ResultPhase;

    fn classifier(client: Arc<ScriptedClient>) -> Classifier {
        Classifier::new(client, PromptTemplate::SpamNonSpam, "test-model".to_string())
    }

    fn session(key: &str, email: &str) -> Session {
        let mut session = Session::new();
        session.api_key.set(key);
        session.email_text = email.to_string();
        session
    }

    #[test]
    fn test_start_marks_pending_only_when_valid() {
        let client = Arc::new(ScriptedClient::new(vec![]));
        let classifier = classifier(client.clone());

        let mut blank = session("valid-key", "  ");
        assert_eq!(
            classifier.start(&mut blank).unwrap_err(),
            ClassifyError::MissingEmail
        );
        assert!(!blank.is_pending());

        let mut ready = session("valid-key", "lunch on friday?");
        let request = classifier.start(&mut ready).unwrap();
        assert!(ready.is_pending());
        assert_eq!(request.model, "test-model");
        assert_eq!(
            classifier.start(&mut ready).unwrap_err(),
            ClassifyError::AlreadyPending
        );
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_key_never_calls_client() {
        let client = Arc::new(ScriptedClient::new(vec![CompletionResult::from_text(
            "unused".to_string(),
        )]));
        let mut session = session("", "Any non-empty email");

        let result = classifier(client.clone()).classify(&mut session).await;

        assert_eq!(
            result,
            CompletionResult::Failure {
                message: "missing API key".to_string()
            }
        );
        assert_eq!(client.calls(), 0);
        assert!(session.last_result().is_none());
    }

    #[tokio::test]
    async fn test_blank_email_never_calls_client() {
        for email in ["", "   ", "\n\t"] {
            let client = Arc::new(ScriptedClient::new(vec![]));
            let mut session = session("valid-key", email);

            let result = classifier(client.clone()).classify(&mut session).await;

            assert_eq!(
                result,
                CompletionResult::Failure {
                    message: "missing email content".to_string()
                }
            );
            assert_eq!(client.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_pending_session_is_not_reentered() {
        let client = Arc::new(ScriptedClient::new(vec![]));
        let mut session = session("valid-key", "hello there");
        session.begin();

        let result = classifier(client.clone()).classify(&mut session).await;

        assert!(!result.is_success());
        assert_eq!(client.calls(), 0);
        assert!(session.is_pending());
    }

    #[tokio::test]
    async fn test_success_is_stored_and_never_empty() {
        let client = Arc::new(ScriptedClient::new(vec![
            CompletionResult::from_text("SPAM: asks for card details".to_string()),
            CompletionResult::from_text("".to_string()),
        ]));
        let classifier = classifier(client.clone());
        let mut session = session("valid-key", "send your CVV");

        let first = classifier.classify(&mut session).await;
        assert!(first.is_success());
        assert_eq!(session.last_result(), Some("SPAM: asks for card details"));

        let second = classifier.classify(&mut session).await;
        match second {
            CompletionResult::Failure { message } => assert!(!message.is_empty()),
            CompletionResult::Success { text } => panic!("empty success: {:?}", text),
        }
        assert_eq!(session.last_result(), Some("SPAM: asks for card details"));
    }

    #[tokio::test]
    async fn test_failure_after_success_keeps_report() {
        let client = Arc::new(ScriptedClient::new(vec![
            CompletionResult::from_text("NON-SPAM report".to_string()),
            CompletionResult::Failure {
                message: "request to completion service failed: timed out".to_string(),
            },
        ]));
        let classifier = classifier(client);
        let mut session = session("valid-key", "meeting at 10");

        classifier.classify(&mut session).await;
        let result = classifier.classify(&mut session).await;

        assert!(!result.is_success());
        assert_eq!(session.last_result(), Some("NON-SPAM report"));
        assert!(matches!(session.phase(), ResultPhase::Failure(_)));
    }

    #[tokio::test]
    async fn test_prompt_uses_configured_template() {
        let client = Arc::new(ScriptedClient::new(vec![CompletionResult::from_text(
            "GENUINE".to_string(),
        )]));
        let mut classifier = classifier(client.clone());
        classifier.set_template(PromptTemplate::GenuineFraud);
        let mut session = session("valid-key", "unique-email-body-42");

        classifier.classify(&mut session).await;

        let prompts = client.prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], PromptTemplate::GenuineFraud.build("unique-email-body-42"));
    }

    #[tokio::test]
    async fn test_end_to_end_legitimate_email_export() {
        let report = "NON-SPAM\nThe sender asks for a presentation on a topic shared earlier.";
        let client = Arc::new(ScriptedClient::new(vec![CompletionResult::from_text(
            report.to_string(),
        )]));
        let mut session = session("valid-key", SampleEmail::Legitimate.text());

        let result = classifier(client).classify(&mut session).await;

        assert_eq!(
            result,
            CompletionResult::Success {
                text: report.to_string()
            }
        );
        assert_eq!(session.last_result(), Some(report));

        let export = ReportExport::from_session(&session).unwrap();
        assert_eq!(export.file_name, "email_classification_report.txt");
        assert_eq!(export.mime, "text/plain");
        assert_eq!(export.contents, report);
        assert!(!export.contents.contains("valid-key"));
    }
}
