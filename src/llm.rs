//! Minimal blocking client for the Ollama chat API.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3:latest";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Message,
}

/// Body Ollama sends with non-2xx statuses, e.g. for an unknown model.
#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

pub struct ChatClient {
    host: String,
    http: reqwest::blocking::Client,
}

impl ChatClient {
    pub fn new(host: &str) -> Result<Self> {
        // Generation can take minutes; never time out locally.
        let http = reqwest::blocking::Client::builder().timeout(None::<Duration>).build()?;
        Ok(ChatClient {
            host: normalize_host(host),
            http,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Send `messages` to `model` and wait for the complete reply.
    pub fn chat(&self, model: &str, messages: &[Message]) -> Result<String> {
        let url = format!("{}/api/chat", self.host);
        log::info!("sending {} message(s) to {} at {}", messages.len(), model, url);

        let request = ChatRequest {
            model,
            messages,
            stream: false,
        };
        let response = self.http.post(&url).json(&request).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let response: ChatResponse = response.json()?;

        log::debug!("received {} bytes of content", response.message.content.len());
        Ok(response.message.content)
    }
}

fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(err) => err.error,
        Err(_) => body.trim().to_string(),
    }
}

/// Accept `host:port`, `http://host:port` or `https://host/`, the forms
/// `OLLAMA_HOST` is commonly set to.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}
