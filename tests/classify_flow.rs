use std::sync::Arc;

use mailsift::classify::{Classifier, CompletionResult, GroqClient, PromptTemplate};
use mailsift::config::CompletionConfig;
use mailsift::report::ReportExport;
use mailsift::samples::SampleEmail;
use mailsift::session::{ResultPhase, Session};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "gsk_integration_key";

fn classifier_for(server: &MockServer) -> Classifier {
    let client = GroqClient::new(&CompletionConfig {
        base_url: server.uri(),
        ..CompletionConfig::default()
    });
    Classifier::new(
        Arc::new(client),
        PromptTemplate::SpamNonSpam,
        "test-model".to_string(),
    )
}

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    }))
}

#[tokio::test]
async fn classify_and_export_legitimate_email() {
    let server = MockServer::start().await;
    let report = "NON-SPAM\nThe sender asks for a presentation. Sentiment: neutral.";
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", format!("Bearer {KEY}").as_str()))
        .respond_with(completion(report))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = Session::new();
    session.api_key.set(KEY);
    session.email_text = SampleEmail::Legitimate.text().to_string();

    let result = classifier_for(&server).classify(&mut session).await;
    assert!(result.is_success());
    assert_eq!(session.last_result(), Some(report));

    let dir = tempfile::tempdir().unwrap();
    let path = ReportExport::from_session(&session)
        .unwrap()
        .write_to(dir.path())
        .unwrap();
    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(written, report);
    assert!(!written.contains(KEY));
}

#[tokio::test]
async fn validation_failures_never_reach_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(completion("unused"))
        .expect(0)
        .mount(&server)
        .await;
    let classifier = classifier_for(&server);

    let mut session = Session::new();
    session.email_text = "Any non-empty email".to_string();
    assert_eq!(
        classifier.classify(&mut session).await,
        CompletionResult::Failure {
            message: "missing API key".to_string()
        }
    );

    session.api_key.set(KEY);
    session.email_text = "   ".to_string();
    assert_eq!(
        classifier.classify(&mut session).await,
        CompletionResult::Failure {
            message: "missing email content".to_string()
        }
    );
}

#[tokio::test]
async fn rejected_key_keeps_previous_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("authorization", "Bearer good-key"))
        .respond_with(completion("SPAM: requests card details"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(header("authorization", "Bearer revoked-key"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {"message": "Invalid API Key"}
        })))
        .mount(&server)
        .await;
    let classifier = classifier_for(&server);

    let mut session = Session::new();
    session.api_key.set("good-key");
    session.email_text = SampleEmail::Suspicious.text().to_string();
    assert!(classifier.classify(&mut session).await.is_success());

    session.api_key.set("revoked-key");
    let result = classifier.classify(&mut session).await;

    assert_eq!(
        result,
        CompletionResult::Failure {
            message: "Invalid API Key".to_string()
        }
    );
    assert_eq!(session.last_result(), Some("SPAM: requests card details"));
    assert_eq!(
        session.phase(),
        &ResultPhase::Failure("Invalid API Key".to_string())
    );
}
