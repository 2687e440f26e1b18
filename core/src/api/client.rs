//! HTTP client for the document Q&A service
//!
//! Each method translates one application intent into exactly one HTTP
//! request against the configured base host and returns the decoded reply.
//! There are no retries, no timeouts beyond the transport defaults, and no
//! interpretation of server-side result codes; every failure is forwarded
//! to the caller unchanged.

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::types::{Answer, ChatMessage, Doc, DocQuery, DocRef, DocUpload, Envelope, Faq};

/// Client for the Q&A service HTTP API
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new client for the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            http: Client::new(),
            config,
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a chat message and get back ranked candidate answers
    pub async fn send_message(&self, sender: &str, message: &str) -> Result<Envelope<Answer>> {
        let url = self.endpoint("chat");
        debug!(%url, "POST chat message");

        let response = self
            .http
            .post(&url)
            .json(&ChatMessage::new(sender, message))
            .send()
            .await
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;

        self.decode(response).await
    }

    /// Upload a document; all whitespace is stripped from the body text
    /// before transmission, while the title is passed through verbatim
    pub async fn upload_doc(&self, title: &str, text: &str) -> Result<Envelope<Value>> {
        let url = self.endpoint("doc");
        debug!(%url, "POST document upload");

        let response = self
            .http
            .post(&url)
            .json(&DocUpload::new(title, text))
            .send()
            .await
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;

        self.decode(response).await
    }

    /// List the stored documents
    pub async fn fetch_docs(&self) -> Result<Envelope<Doc>> {
        let url = self.endpoint("doc");
        debug!(%url, "GET document list");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;

        self.decode(response).await
    }

    /// Remove a stored document. The id travels in the request body, not
    /// as a path segment or query parameter.
    pub async fn remove_doc(&self, id: &str) -> Result<Envelope<Value>> {
        let url = self.endpoint("doc");
        debug!(%url, "DELETE document");

        let response = self
            .http
            .delete(&url)
            .json(&DocRef::new(id))
            .send()
            .await
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;

        self.decode(response).await
    }

    /// List the frequently asked questions
    pub async fn fetch_faqs(&self) -> Result<Envelope<Faq>> {
        let url = self.endpoint("faq");
        debug!(%url, "GET faq list");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;

        self.decode(response).await
    }

    /// Ask a question about one stored document
    pub async fn doc_ask(&self, id: &str, query: &str) -> Result<Envelope<Answer>> {
        let url = self.endpoint("doc_qa");
        debug!(%url, "POST document question");

        let response = self
            .http
            .post(&url)
            .json(&DocQuery::new(id, query))
            .send()
            .await
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
            })?;

        self.decode(response).await
    }

    /// Resolve a resource name against the configured base host
    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.config.api_host.trim_end_matches('/'), resource)
    }

    /// Check the response status and decode the JSON body
    async fn decode<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "request rejected by server");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        response.json().await.map_err(|e| {
            ApiError::Decode {
                message: e.to_string(),
            }
            .into()
        })
    }
}
