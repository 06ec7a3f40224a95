use crate::constants::*;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub completion: CompletionConfig,
}

/// Settings for the hosted chat-completion provider.
#[derive(Clone)]
pub struct CompletionConfig {
    /// Base URL; `/chat/completions` is appended per request
    pub base_url: String,

    /// Bearer credential, never logged
    pub api_key: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Sampling temperature (0.0-2.0)
    pub temperature: f32,

    /// Maximum number of output tokens
    pub max_tokens: u32,

    /// Upper bound on one completion call, enforced by the HTTP client and by
    /// the generator before it falls back
    pub timeout_secs: u64,
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl CompletionConfig {
    pub fn new(api_key: String) -> Self {
        CompletionConfig {
            base_url: DEFAULT_COMPLETION_BASE_URL.to_string(),
            api_key,
            model: DEFAULT_COMPLETION_MODEL.to_string(),
            temperature: DEFAULT_COMPLETION_TEMPERATURE,
            max_tokens: DEFAULT_COMPLETION_MAX_TOKENS,
            timeout_secs: DEFAULT_COMPLETION_TIMEOUT_SECONDS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| "OPENAI_API_KEY must be set")?;
        let defaults = Self::new(api_key);

        let temperature: f32 = env::var("COMPLETION_TEMPERATURE")
            .unwrap_or_else(|_| defaults.temperature.to_string())
            .parse()
            .map_err(|_| "Invalid COMPLETION_TEMPERATURE")?;

        if !(0.0..=2.0).contains(&temperature) {
            return Err("COMPLETION_TEMPERATURE must be between 0 and 2".to_string());
        }

        let max_tokens: u32 = env::var("COMPLETION_MAX_TOKENS")
            .unwrap_or_else(|_| defaults.max_tokens.to_string())
            .parse()
            .map_err(|_| "Invalid COMPLETION_MAX_TOKENS")?;

        if max_tokens == 0 {
            return Err("COMPLETION_MAX_TOKENS must be greater than 0".to_string());
        }

        let timeout_secs: u64 = env::var("COMPLETION_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults.timeout_secs.to_string())
            .parse()
            .map_err(|_| "Invalid COMPLETION_TIMEOUT_SECS")?;

        if timeout_secs == 0 {
            return Err("COMPLETION_TIMEOUT_SECS must be greater than 0".to_string());
        }

        Ok(CompletionConfig {
            base_url: env::var("COMPLETION_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            model: env::var("COMPLETION_MODEL").unwrap_or(defaults.model),
            temperature,
            max_tokens,
            timeout_secs,
            api_key: defaults.api_key,
        })
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            completion: CompletionConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
