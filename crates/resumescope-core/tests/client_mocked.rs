//! Upload workflow against a mocked analysis backend.
use std::io::Write;
use std::time::Duration;

use resumescope_core::Analyzer;
use resumescope_core::client::{BackendClient, ClientConfig, ClientError, ContactMessage};
use resumescope_core::report::model::ToolInfo;
use resumescope_core::upload::session::SessionState;
use resumescope_core::upload::validate::ValidationError;
use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tool() -> ToolInfo {
    ToolInfo {
        name: "resumescope".into(),
        version: "0.1.0-test".into(),
        commit: None,
    }
}

fn client_for(server: &MockServer) -> BackendClient {
    let config = ClientConfig::new(&server.uri()).expect("mock server URI is http");
    BackendClient::new(config).expect("client builds")
}

fn temp_resume(suffix: &str, data: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn analyze_uploads_multipart_and_normalizes_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("%PDF-1.7 fake resume"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "overall_score": 77,
            "skills_proficiency": [{"skill": "rust", "confidence": 88}, "go"],
            "job_recommendations": [{"role": "Systems Engineer", "score": 91, "jsx": "<b/>"}],
            "jsx": {"component": "Card"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resume = temp_resume(".pdf", b"%PDF-1.7 fake resume");
    let mut analyzer = Analyzer::new(client_for(&server), tool());

    let report = analyzer
        .analyze(resume.path(), None)
        .await
        .expect("analysis succeeds");

    assert_eq!(report.analysis.ats_score, 77);
    assert_eq!(report.analysis.overall_score, 77);
    assert_eq!(report.analysis.skills_proficiency[1].skill, "go");
    assert_eq!(report.analysis.skills_proficiency[1].confidence, 75.0);
    assert_eq!(report.analysis.job_recommendations[0].role, "Systems Engineer");
    assert_eq!(report.backend.as_deref(), Some(server.uri().as_str()));
    assert_eq!(report.artifact.content_type.as_deref(), Some("application/pdf"));
    assert!(report.artifact.file_name.ends_with(".pdf"));

    assert!(matches!(analyzer.session().state(), SessionState::Ready { .. }));
    assert_eq!(analyzer.session().analysis(), Some(&report.analysis));
}

#[tokio::test]
async fn unaccepted_declared_type_uploads_with_suffix_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("application/pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ats_score": 61})))
        .expect(1)
        .mount(&server)
        .await;

    let resume = temp_resume(".pdf", b"%PDF-1.7 fake resume");
    let mut analyzer = Analyzer::new(client_for(&server), tool());

    let report = analyzer
        .analyze(resume.path(), Some("not a mime"))
        .await
        .expect("suffix decides the uploaded type");

    assert_eq!(report.analysis.ats_score, 61);
    assert_eq!(report.artifact.content_type.as_deref(), Some("application/pdf"));
    assert!(matches!(analyzer.session().state(), SessionState::Ready { .. }));
}

#[tokio::test]
async fn non_success_status_fails_the_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let resume = temp_resume(".docx", b"PK fake docx");
    let mut analyzer = Analyzer::new(client_for(&server), tool());

    let err = analyzer.analyze(resume.path(), None).await.unwrap_err();

    match err.downcast_ref::<ClientError>() {
        Some(ClientError::Status { status, body }) => {
            assert_eq!(*status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(matches!(
        analyzer.session().state(),
        SessionState::Failed { message, .. } if message == "Backend error: 500"
    ));

    analyzer.reset();
    assert_eq!(analyzer.session().state(), &SessionState::Idle);
}

#[tokio::test]
async fn invalid_files_never_reach_the_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let resume = temp_resume(".txt", b"plain text");
    let mut analyzer = Analyzer::new(client_for(&server), tool());

    let err = analyzer.analyze(resume.path(), None).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ValidationError>(),
        Some(ValidationError::UnsupportedType { .. })
    ));
    assert_eq!(analyzer.session().state(), &SessionState::Idle);
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let resume = temp_resume(".pdf", b"%PDF");
    let mut analyzer = Analyzer::new(client_for(&server), tool());

    let err = analyzer.analyze(resume.path(), None).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ClientError>(),
        Some(ClientError::Decode(_))
    ));
}

#[tokio::test]
async fn scalar_json_body_still_produces_a_report() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;

    let resume = temp_resume(".pdf", b"%PDF");
    let mut analyzer = Analyzer::new(client_for(&server), tool());

    let report = analyzer.analyze(resume.path(), None).await.unwrap();
    assert_eq!(report.analysis.ats_score, 0);
    assert_eq!(report.analysis.key_metrics.formatting_clarity, 0.8);
}

#[tokio::test]
async fn second_analysis_replaces_the_first() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ats_score": 40})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ats_score": 90})))
        .mount(&server)
        .await;

    let resume = temp_resume(".pdf", b"%PDF");
    let mut analyzer = Analyzer::new(client_for(&server), tool());

    let first = analyzer.analyze(resume.path(), None).await.unwrap();
    let second = analyzer.analyze(resume.path(), None).await.unwrap();

    assert_eq!(first.analysis.ats_score, 40);
    assert_eq!(second.analysis.ats_score, 90);
    assert_eq!(analyzer.session().analysis().map(|a| a.ats_score), Some(90));
}

#[tokio::test]
async fn contact_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send_email"))
        .and(body_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Love the tool"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "message": "Email sent successfully"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .send_contact(&ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Love the tool".into(),
        })
        .await
        .unwrap();

    assert_eq!(response["success"], true);
}

#[tokio::test]
async fn health_probe_returns_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;

    let health = client_for(&server).health().await.unwrap();
    assert_eq!(health["status"], "healthy");
}

#[tokio::test]
async fn configured_timeout_turns_hung_request_into_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "healthy"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new(&server.uri())
        .unwrap()
        .with_timeout(Duration::from_millis(100));
    let client = BackendClient::new(config).unwrap();

    let err = client.health().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
}
