use async_trait::async_trait;
use genmaps::config::CompletionConfig;
use genmaps::services::completion::CompletionClient;
use genmaps::services::profile_generator::ProfileGenerator;
use genmaps::{AppError, AppState, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// What the stub provider does when called
#[allow(dead_code)]
pub enum StubBehavior {
    Answer(String),
    NetworkError,
}

/// In-process stand-in for the completion provider
pub struct StubCompletionClient {
    behavior: StubBehavior,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl StubCompletionClient {
    pub fn answering(text: &str) -> Arc<Self> {
        Arc::new(StubCompletionClient {
            behavior: StubBehavior::Answer(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(StubCompletionClient {
            behavior: StubBehavior::NetworkError,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for StubCompletionClient {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            StubBehavior::Answer(text) => Ok(text.clone()),
            StubBehavior::NetworkError => {
                Err(AppError::CompletionApi("Request failed: connection refused".to_string()))
            }
        }
    }

    fn model(&self) -> &str {
        "stub"
    }
}

/// Generator wired to the given provider with a short timeout
#[allow(dead_code)]
pub fn generator_with(client: Arc<dyn CompletionClient>) -> ProfileGenerator {
    ProfileGenerator::new(client, Duration::from_secs(2))
}

/// Router wired to the given provider
#[allow(dead_code)]
pub fn app_with(client: Arc<dyn CompletionClient>) -> axum::Router {
    let state = Arc::new(AppState {
        profile_generator: generator_with(client),
    });
    genmaps::routes::create_router(state)
}

/// Completion settings pointing at a local mock server
#[allow(dead_code)]
pub fn mock_completion_config(base_url: &str) -> CompletionConfig {
    let mut config = CompletionConfig::new("test-key".to_string());
    config.base_url = base_url.trim_end_matches('/').to_string();
    config.timeout_secs = 5;
    config
}

/// A well-formed completion body, as the model would write it
#[allow(dead_code)]
pub const MODEL_DASHBOARD_JSON: &str = r#"{
  "map": {"type": "heatmap", "data": [{"lat": 13.0827, "lng": 80.2707, "label": "Anna Salai"}]},
  "charts": [{"type": "area", "title": "Congestion", "data": [{"label": "9 AM", "value": 70, "unit": "%"}]}],
  "stats": [{"label": "Average Commute", "value": "41 min"}]
}"#;
