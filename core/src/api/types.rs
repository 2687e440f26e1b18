//! Request payloads and response shapes for the Q&A service

use serde::{Deserialize, Serialize};

/// A chat message sent to the `/chat` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub message: String,
}

impl ChatMessage {
    pub fn new(sender: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            message: message.into(),
        }
    }
}

/// A document upload payload for the `/doc` endpoint.
///
/// The body text is stripped of ALL whitespace before transmission. The
/// strip is unconditional and lossy ("hello world" becomes "helloworld");
/// the title is forwarded verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocUpload {
    pub title: String,
    pub text: String,
}

impl DocUpload {
    pub fn new(title: impl Into<String>, text: &str) -> Self {
        Self {
            title: title.into(),
            text: text.chars().filter(|c| !c.is_whitespace()).collect(),
        }
    }
}

/// A reference to a stored document, sent in the body of `/doc` deletes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocRef {
    #[serde(rename = "_id")]
    pub id: String,
}

impl DocRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A question about a specific stored document, for the `/doc_qa` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocQuery {
    #[serde(rename = "_id")]
    pub id: String,
    pub query: String,
}

impl DocQuery {
    pub fn new(id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            query: query.into(),
        }
    }
}

/// The reply envelope the service wraps every response in.
///
/// `code` 0 means success; nonzero codes carry a server-side failure
/// message. The client returns the envelope as-is and never interprets
/// `code` itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub results: Vec<T>,
    // the server spells this field "messge" on failure replies
    #[serde(default, alias = "messge")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Whether the server reported success
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

/// One candidate answer produced by the service.
///
/// `/chat` replies carry the full field set including the source page the
/// answer was extracted from; `/doc_qa` replies only fill the question and
/// answer fields, so everything else is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Answer {
    pub question_id: Option<i64>,
    pub question: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub summary: Option<String>,
    pub source_link: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub answer: String,
    pub final_prob: Option<f64>,
}

/// A stored document as returned by `/doc` listings
#[derive(Debug, Clone, Deserialize)]
pub struct Doc {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub text: String,
}

/// A frequently asked question as returned by `/faq`
#[derive(Debug, Clone, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_strips_all_whitespace() {
        let upload = DocUpload::new("Title A", "hello  world\nfoo");
        assert_eq!(upload.title, "Title A");
        assert_eq!(upload.text, "helloworldfoo");
    }

    #[test]
    fn test_upload_strips_tabs_and_fullwidth_spaces() {
        let upload = DocUpload::new("t", "a\tb\r\nc\u{3000}d");
        assert_eq!(upload.text, "abcd");
    }

    #[test]
    fn test_upload_title_kept_verbatim() {
        let upload = DocUpload::new("  My  Title\t", "body");
        assert_eq!(upload.title, "  My  Title\t");
    }

    #[test]
    fn test_doc_ref_serializes_underscore_id() {
        let json = serde_json::to_value(DocRef::new("abc123")).unwrap();
        assert_eq!(json, serde_json::json!({ "_id": "abc123" }));
    }

    #[test]
    fn test_doc_query_serializes_underscore_id() {
        let json = serde_json::to_value(DocQuery::new("abc123", "who?")).unwrap();
        assert_eq!(json, serde_json::json!({ "_id": "abc123", "query": "who?" }));
    }

    #[test]
    fn test_envelope_success_decode() {
        let envelope: Envelope<Answer> = serde_json::from_str(
            r#"{"code": 0, "results": [{"question_id": 1, "question": "q", "answer": "a", "final_prob": 0.7}]}"#,
        )
        .unwrap();
        assert!(envelope.is_ok());
        assert_eq!(envelope.results.len(), 1);
        assert_eq!(envelope.results[0].answer, "a");
    }

    #[test]
    fn test_envelope_failure_decode_with_server_spelling() {
        let envelope: Envelope<Answer> =
            serde_json::from_str(r#"{"code": 1, "messge": "model not loaded"}"#).unwrap();
        assert!(!envelope.is_ok());
        assert!(envelope.results.is_empty());
        assert_eq!(envelope.message.as_deref(), Some("model not loaded"));
    }
}
