//! External LLM completion calls.
//!
//! One non-streaming request per call, no retries. OpenAI and Groq share the
//! chat-completions format; Anthropic uses the Messages API.

use async_trait::async_trait;
use ideaproof_core::{Error, Result};
use reqwest::Client;
use serde_json::json;
use tracing::{debug, error};

use crate::config::ResolvedProvider;
use crate::types::{ChatMessage, LLMProvider};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: usize = 2048;

/// Longest slice of an error body kept in `Error::Upstream`.
const ERROR_BODY_LIMIT: usize = 300;

/// Text-generation collaborator: system instruction + prompt in, text out.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;

    /// Human-readable `provider/model` label.
    fn describe(&self) -> String;
}

/// `ModelClient` backed by a provider's HTTP API.
pub struct HttpModelClient {
    client: Client,
    resolved: ResolvedProvider,
}

impl HttpModelClient {
    pub fn new(resolved: ResolvedProvider) -> Self {
        Self {
            client: Client::new(),
            resolved,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved.base_url.trim_end_matches('/'), path)
    }

    async fn complete_openai_compat(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = self.endpoint("/v1/chat/completions");
        let msgs: Vec<serde_json::Value> = messages
            .iter()
            .map(|m| json!({"role": m.role, "content": m.content}))
            .collect();
        let body = json!({
            "model": self.resolved.model,
            "messages": msgs,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        debug!("Completing via {} with model {}", url, self.resolved.model);

        let request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.resolved.api_key))
            .header("Content-Type", "application/json")
            .json(&body);
        let parsed = send(request).await?;

        parsed["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::Upstream("response carried no message content".into()))
    }

    async fn complete_anthropic(&self, system: &str, prompt: &str) -> Result<String> {
        let url = self.endpoint("/v1/messages");
        let body = json!({
            "model": self.resolved.model,
            "system": system,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        debug!("Completing via Anthropic with model {}", self.resolved.model);

        let request = self
            .client
            .post(&url)
            .header("x-api-key", &self.resolved.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&body);
        let parsed = send(request).await?;

        let text: String = parsed["content"]
            .as_array()
            .map(|blocks| {
                blocks
                    .iter()
                    .filter(|b| b["type"].as_str() == Some("text"))
                    .filter_map(|b| b["text"].as_str())
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(Error::Upstream("response carried no text content".into()));
        }
        Ok(text)
    }
}

#[async_trait]
impl ModelClient for HttpModelClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        match self.resolved.provider {
            LLMProvider::Anthropic => self.complete_anthropic(system, prompt).await,
            LLMProvider::OpenAI | LLMProvider::Groq => {
                let messages = [
                    ChatMessage {
                        role: "system".into(),
                        content: system.to_string(),
                    },
                    ChatMessage {
                        role: "user".into(),
                        content: prompt.to_string(),
                    },
                ];
                self.complete_openai_compat(&messages).await
            }
        }
    }

    fn describe(&self) -> String {
        format!("{}/{}", self.resolved.provider, self.resolved.model)
    }
}

/// Send a request and decode the JSON body, mapping every failure to `Upstream`.
async fn send(request: reqwest::RequestBuilder) -> Result<serde_json::Value> {
    let response = request
        .send()
        .await
        .map_err(|e| Error::Upstream(format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let snippet: String = body.chars().take(ERROR_BODY_LIMIT).collect();
        error!("Model API returned {}: {}", status, snippet);
        return Err(Error::Upstream(format!("API error {}: {}", status, snippet)));
    }

    response
        .json()
        .await
        .map_err(|e| Error::Upstream(format!("Unreadable response body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn resolved(provider: LLMProvider, base_url: String) -> ResolvedProvider {
        ResolvedProvider {
            provider,
            model: "test-model".into(),
            api_key: "test-key".into(),
            base_url,
        }
    }

    #[tokio::test]
    async fn test_anthropic_completion() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .match_header("x-api-key", "test-key")
            .match_header("anthropic-version", ANTHROPIC_VERSION)
            .match_body(Matcher::PartialJson(json!({
                "model": "test-model",
                "system": "be brief",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": "msg_1",
                    "type": "message",
                    "content": [
                        {"type": "text", "text": "{\"a\":"},
                        {"type": "text", "text": "1}"}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = HttpModelClient::new(resolved(LLMProvider::Anthropic, server.url()));
        let text = client.complete("be brief", "hello").await.unwrap();
        assert_eq!(text, "{\"a\":1}");
        assert_eq!(client.describe(), "anthropic/test-model");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_openai_compat_completion() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "choices": [{"message": {"role": "assistant", "content": "hi there"}}]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = HttpModelClient::new(resolved(LLMProvider::Groq, server.url()));
        assert_eq!(client.complete("sys", "prompt").await.unwrap(), "hi there");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_upstream() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/messages")
            .with_status(429)
            .with_body("{\"error\":{\"message\":\"rate limited\"}}")
            .create_async()
            .await;

        let client = HttpModelClient::new(resolved(LLMProvider::Anthropic, server.url()));
        let err = client.complete("sys", "prompt").await.unwrap_err();
        assert_eq!(err.kind(), "upstream_error");
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_missing_content_is_upstream() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_body("{\"choices\":[]}")
            .create_async()
            .await;

        let client = HttpModelClient::new(resolved(LLMProvider::OpenAI, server.url()));
        let err = client.complete("sys", "prompt").await.unwrap_err();
        assert_eq!(err.kind(), "upstream_error");
    }

    #[tokio::test]
    async fn test_connection_refused_is_upstream() {
        // Port 9 (discard) is not expected to be listening.
        let client = HttpModelClient::new(resolved(
            LLMProvider::Anthropic,
            "http://127.0.0.1:9".into(),
        ));
        let err = client.complete("sys", "prompt").await.unwrap_err();
        assert_eq!(err.kind(), "upstream_error");
    }
}
