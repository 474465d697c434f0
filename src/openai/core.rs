use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use crate::chat::Role;

/// A transcript entry as the completion API sees it, without ids.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

impl From<&crate::chat::Message> for Message {
    fn from(msg: &crate::chat::Message) -> Self {
        Message::new(msg.role.clone(), &msg.content)
    }
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request to completion API failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("completion API did not respond within {0:?}")]
    Timeout(Duration),

    #[error("completion API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed completion response: {0}")]
    Malformed(String),
}

impl CompletionError {
    fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            CompletionError::Timeout(timeout)
        } else {
            CompletionError::Request(err)
        }
    }
}

/// Connection settings for an OpenAI compatible chat completions
/// endpoint.
#[derive(Clone, Debug)]
pub struct CompletionParams<'a> {
    pub api_hostname: &'a str,
    pub api_key: &'a str,
    pub model: &'a str,
    pub temperature: f64,
    pub timeout: Duration,
}

pub async fn completion(
    messages: &[Message],
    params: &CompletionParams<'_>,
) -> Result<Value, CompletionError> {
    let payload = json!({
        "model": params.model,
        "messages": messages,
        "temperature": params.temperature,
    });
    let url = format!(
        "{}/v1/chat/completions",
        params.api_hostname.trim_end_matches("/")
    );

    tracing::debug!("Sending {} messages to {}", messages.len(), url);

    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(params.api_key)
        .header("Content-Type", "application/json")
        .timeout(params.timeout)
        .json(&payload)
        .send()
        .await
        .map_err(|e| CompletionError::from_reqwest(e, params.timeout))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| CompletionError::from_reqwest(e, params.timeout))?;

    if !status.is_success() {
        return Err(CompletionError::Status { status, body });
    }

    serde_json::from_str(&body).map_err(|e| CompletionError::Malformed(format!("{}: {}", e, body)))
}
