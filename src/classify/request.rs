//! Request and result values exchanged with the completion service

use secrecy::SecretString;

use super::error::ClassifyError;

/// One single-turn completion request, built fresh per classification
#[derive(Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub api_key: SecretString,
}

impl std::fmt::Debug for CompletionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionRequest")
            .field("model", &self.model)
            .field("prompt_len", &self.prompt.len())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Outcome of a classification attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResult {
    Success { text: String },
    Failure { message: String },
}

impl CompletionResult {
    /// Wrap generated text. Blank output is a failure, never an empty report.
    pub fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            Self::Failure {
                message: "empty response from completion service".to_string(),
            }
        } else {
            Self::Success { text }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<ClassifyError> for CompletionResult {
    fn from(e: ClassifyError) -> Self {
        Self::Failure {
            message: e.to_string(),
        }
    }
}

impl From<Result<String, ClassifyError>> for CompletionResult {
    fn from(result: Result<String, ClassifyError>) -> Self {
        match result {
            Ok(text) => Self::from_text(text),
            Err(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_failure() {
        assert!(!CompletionResult::from_text("   \n".to_string()).is_success());
        assert!(!CompletionResult::from_text(String::new()).is_success());
    }

    #[test]
    fn test_text_is_kept_verbatim() {
        let result = CompletionResult::from_text("  NON-SPAM\n".to_string());
        assert_eq!(
            result,
            CompletionResult::Success {
                text: "  NON-SPAM\n".to_string()
            }
        );
    }

    #[test]
    fn test_error_becomes_failure_message() {
        let result: CompletionResult = Err(ClassifyError::MissingApiKey).into();
        assert_eq!(
            result,
            CompletionResult::Failure {
                message: "missing API key".to_string()
            }
        );
    }

    #[test]
    fn test_debug_hides_key_and_prompt() {
        let request = CompletionRequest {
            prompt: "private email body".to_string(),
            model: "m".to_string(),
            api_key: SecretString::new("gsk_hidden".to_string()),
        };
        let debug = format!("{:?}", request);
        assert!(!debug.contains("gsk_hidden"));
        assert!(!debug.contains("private email body"));
        assert!(debug.contains("prompt_len"));
    }
}
