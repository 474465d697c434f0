use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::openai::CompletionParams;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub history_path: String,
    pub static_path: String,
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub temperature: f64,
    pub completion_timeout: Duration,
    pub system_message: String,
    // Reject roles other than system, user, and assistant
    pub strict_roles: bool,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(val) => val.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid value for {}: {}", key, val);
            default
        }),
        Err(_) => default,
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let history_path =
            env::var("CHATPAD_HISTORY_PATH").unwrap_or_else(|_| "./history.json".to_string());
        let static_path =
            env::var("CHATPAD_STATIC_PATH").unwrap_or_else(|_| "./web-ui".to_string());
        let openai_api_hostname = env::var("CHATPAD_LLM_HOST")
            .unwrap_or_else(|_| "https://api.deepseek.com".to_string());
        // Not checked here. A missing key shows up as an auth failure
        // from the remote on the first chat turn.
        let openai_api_key =
            env::var("DEEPSEEK_API_KEY").unwrap_or_else(|_| "thiswontworkfordeepseek".to_string());
        let openai_model =
            env::var("CHATPAD_LLM_MODEL").unwrap_or_else(|_| "deepseek-chat".to_string());
        let temperature = env_or("CHATPAD_TEMPERATURE", 0.7);
        let completion_timeout =
            Duration::from_secs(env_or("CHATPAD_COMPLETION_TIMEOUT_SECS", 60));
        let system_message =
            env::var("CHATPAD_SYSTEM_MESSAGE").unwrap_or_else(|_| "Output markdown.".to_string());
        let strict_roles = env_or("CHATPAD_STRICT_ROLES", true);

        Self {
            history_path,
            static_path,
            openai_api_hostname,
            openai_api_key,
            openai_model,
            temperature,
            completion_timeout,
            system_message,
            strict_roles,
        }
    }
}

impl AppConfig {
    pub fn completion_params(&self) -> CompletionParams<'_> {
        CompletionParams {
            api_hostname: &self.openai_api_hostname,
            api_key: &self.openai_api_key,
            model: &self.openai_model,
            temperature: self.temperature,
            timeout: self.completion_timeout,
        }
    }
}
