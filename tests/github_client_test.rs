//! GitHub client tests against a mock HTTP server

mod common;

use common::{issue_body, repository_body, TEST_TOKEN};
use mockito::{Matcher, Server};
use wiki_publisher::{
    Credential, GitHubClient, GitHubClientConfig, IssueDraft, IssueTracker, RepositoryHandle,
    RepositoryRef, TrackerError,
};

fn client_for(server: &Server) -> GitHubClient {
    let config = GitHubClientConfig {
        api_url: server.url(),
        timeout_secs: 5,
    };
    let credential = Credential::new(TEST_TOKEN).expect("token is non-empty");
    GitHubClient::new(config, &credential).expect("Failed to create client")
}

fn handbook() -> RepositoryRef {
    "octo/handbook".parse().expect("valid repository")
}

fn handle() -> RepositoryHandle {
    RepositoryHandle {
        full_name: "octo/handbook".to_string(),
        html_url: "https://github.com/octo/handbook".to_string(),
    }
}

fn draft() -> IssueDraft {
    IssueDraft {
        title: "Wiki Page: getting started".to_string(),
        body: "# getting started\n\nHello".to_string(),
        labels: vec!["wiki".to_string(), "documentation".to_string()],
    }
}

#[tokio::test]
async fn test_get_repository_sends_auth_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/octo/handbook")
        .match_header("authorization", format!("Bearer {TEST_TOKEN}").as_str())
        .match_header("accept", "application/vnd.github+json")
        .match_header("x-github-api-version", "2022-11-28")
        .match_header("user-agent", Matcher::Regex("^wiki-publisher/".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(repository_body())
        .create_async()
        .await;

    let handle = client_for(&server)
        .get_repository(&handbook())
        .await
        .expect("lookup should succeed");

    assert_eq!(handle.full_name, "octo/handbook");
    assert_eq!(handle.wiki_url(), "https://github.com/octo/handbook/wiki");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_repository_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/octo/handbook")
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .get_repository(&handbook())
        .await
        .expect_err("lookup should fail");

    assert!(matches!(err, TrackerError::NotFound(body) if body.contains("Not Found")));
}

#[tokio::test]
async fn test_get_repository_bad_credentials() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/octo/handbook")
        .with_status(401)
        .with_body(r#"{"message":"Bad credentials"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .get_repository(&handbook())
        .await
        .expect_err("lookup should fail");

    assert!(matches!(err, TrackerError::AuthenticationFailed(_)));
}

#[tokio::test]
async fn test_create_issue_posts_title_body_and_labels() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/repos/octo/handbook/issues")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "title": "Wiki Page: getting started",
            "body": "# getting started\n\nHello",
            "labels": ["wiki", "documentation"]
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(issue_body(12))
        .create_async()
        .await;

    let issue = client_for(&server)
        .create_issue(&handle(), &draft())
        .await
        .expect("issue should be created");

    assert_eq!(issue.number, 12);
    assert_eq!(issue.html_url, "https://github.com/octo/handbook/issues/12");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_issue_validation_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/repos/octo/handbook/issues")
        .with_status(422)
        .with_body(r#"{"message":"Validation Failed"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .create_issue(&handle(), &draft())
        .await
        .expect_err("creation should fail");

    assert!(matches!(err, TrackerError::ValidationFailed(_)));
}

#[tokio::test]
async fn test_create_issue_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/repos/octo/handbook/issues")
        .with_status(503)
        .with_body("Service Unavailable")
        .expect(1)
        .create_async()
        .await;

    let err = client_for(&server)
        .create_issue(&handle(), &draft())
        .await
        .expect_err("creation should fail");

    assert!(matches!(err, TrackerError::ServerError { status: 503, .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_body_is_scrubbed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/repos/octo/handbook/issues")
        .with_status(400)
        .with_body(format!("rejected token {TEST_TOKEN}"))
        .create_async()
        .await;

    let err = client_for(&server)
        .create_issue(&handle(), &draft())
        .await
        .expect_err("creation should fail");

    let message = err.to_string();
    assert!(!message.contains(TEST_TOKEN));
    assert!(message.contains("[TOKEN_REDACTED]"));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = GitHubClientConfig {
        api_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
    };
    let credential = Credential::new(TEST_TOKEN).expect("token is non-empty");
    let client = GitHubClient::new(config, &credential).expect("Failed to create client");

    let err = client
        .get_repository(&handbook())
        .await
        .expect_err("lookup should fail");

    assert!(matches!(err, TrackerError::Network(_)));
}
