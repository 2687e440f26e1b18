//! HTTP-level tests for the API client.
//!
//! Each test stands up a mock server and checks the exact request a client
//! call produces (method, path, body placement) and that failures are
//! forwarded to the caller unmodified.

use docqa_core::{ApiClient, ApiError, ClientConfig, Error};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::new(server.base_url())).expect("valid config")
}

#[tokio::test]
async fn send_message_posts_to_chat() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat")
                .json_body(json!({ "sender": "alice", "message": "hello there" }));
            then.status(200).json_body(json!({
                "code": 0,
                "results": [{
                    "question_id": 0,
                    "question": "hello there",
                    "title": "Greetings",
                    "answer": "hi",
                    "final_prob": 0.91
                }]
            }));
        })
        .await;

    let envelope = client_for(&server)
        .send_message("alice", "hello there")
        .await
        .expect("chat reply");

    mock.assert_async().await;
    assert!(envelope.is_ok());
    assert_eq!(envelope.results[0].answer, "hi");
    assert_eq!(envelope.results[0].final_prob, Some(0.91));
}

#[tokio::test]
async fn upload_doc_strips_whitespace_and_keeps_title_verbatim() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/doc")
                .json_body(json!({ "title": "Title A", "text": "helloworldfoo" }));
            then.status(200).json_body(json!({ "code": 0, "results": [] }));
        })
        .await;

    client_for(&server)
        .upload_doc("Title A", "hello  world\nfoo")
        .await
        .expect("upload accepted");

    mock.assert_async().await;
}

#[tokio::test]
async fn upload_doc_title_may_contain_whitespace() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/doc")
                .json_body(json!({ "title": " spaced\ttitle ", "text": "body" }));
            then.status(200).json_body(json!({ "code": 0, "results": [] }));
        })
        .await;

    client_for(&server)
        .upload_doc(" spaced\ttitle ", "b o d y")
        .await
        .expect("upload accepted");

    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_docs_gets_doc_listing() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/doc");
            then.status(200).json_body(json!({
                "code": 0,
                "results": [
                    { "_id": "6061a8", "title": "Manual", "text": "sometext" },
                    { "_id": "6061a9", "title": "Notes" }
                ]
            }));
        })
        .await;

    let envelope = client_for(&server).fetch_docs().await.expect("doc listing");

    mock.assert_async().await;
    assert_eq!(envelope.results.len(), 2);
    assert_eq!(envelope.results[0].id, "6061a8");
    assert_eq!(envelope.results[1].text, "");
}

#[tokio::test]
async fn remove_doc_sends_id_in_request_body() {
    let server = MockServer::start_async().await;
    // The path match is exact, so the id reaching the server any way other
    // than the body would not satisfy this mock.
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/doc")
                .json_body(json!({ "_id": "abc123" }));
            then.status(200).json_body(json!({ "code": 0, "results": [] }));
        })
        .await;

    client_for(&server)
        .remove_doc("abc123")
        .await
        .expect("delete accepted");

    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_faqs_gets_faq_listing() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/faq");
            then.status(200).json_body(json!({
                "code": 0,
                "results": [
                    { "question": "How do I upload?", "answer": "Use the docs page." }
                ]
            }));
        })
        .await;

    let envelope = client_for(&server).fetch_faqs().await.expect("faq listing");

    mock.assert_async().await;
    assert_eq!(envelope.results[0].question, "How do I upload?");
}

#[tokio::test]
async fn doc_ask_posts_id_and_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/doc_qa")
                .json_body(json!({ "_id": "abc123", "query": "who wrote this?" }));
            then.status(200).json_body(json!({
                "code": 0,
                "results": [
                    { "question_id": 0, "question": "who wrote this?", "answer": "the author" }
                ]
            }));
        })
        .await;

    let envelope = client_for(&server)
        .doc_ask("abc123", "who wrote this?")
        .await
        .expect("answers");

    mock.assert_async().await;
    assert_eq!(envelope.results[0].answer, "the author");
    assert_eq!(envelope.results[0].title, None);
}

#[tokio::test]
async fn repeated_calls_issue_one_request_each() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/faq");
            then.status(200).json_body(json!({ "code": 0, "results": [] }));
        })
        .await;

    let client = client_for(&server);
    client.fetch_faqs().await.expect("first call");
    client.fetch_faqs().await.expect("second call");

    mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn non_success_status_is_surfaced_with_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/doc");
            then.status(500).body("index exploded");
        })
        .await;

    let err = client_for(&server).fetch_docs().await.expect_err("error");

    match err {
        Error::Api(ApiError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "index exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_is_surfaced_as_network_error() {
    // nothing listens on port 1
    let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:1")).expect("valid config");

    let err = client.fetch_docs().await.expect_err("error");
    assert!(matches!(err, Error::Api(ApiError::Network { .. })));
}

#[tokio::test]
async fn undecodable_body_is_surfaced_as_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/faq");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let err = client_for(&server).fetch_faqs().await.expect_err("error");
    assert!(matches!(err, Error::Api(ApiError::Decode { .. })));
}

#[tokio::test]
async fn server_failure_codes_are_returned_not_interpreted() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat");
            then.status(200)
                .json_body(json!({ "code": 1, "messge": "model not loaded" }));
        })
        .await;

    let envelope = client_for(&server)
        .send_message("alice", "hi")
        .await
        .expect("envelope is returned even for server-side failures");

    assert!(!envelope.is_ok());
    assert_eq!(envelope.message.as_deref(), Some("model not loaded"));
}
