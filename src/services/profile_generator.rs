use crate::constants::COMPLETION_SYSTEM_PROMPT;
use crate::error::{AppError, Result};
use crate::models::{ProfileRequest, ProfileResult};
use crate::services::completion::CompletionClient;
use crate::services::fallback::fallback_result;
use crate::services::prompt::{build_prompt, profile_description};
use crate::services::response_parser::parse_profile_result;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

/// Produces dashboard data through the completion provider, falling back to
/// deterministic templates on any failure.
pub struct ProfileGenerator {
    completion_client: Arc<dyn CompletionClient>,
    timeout: Duration,
}

impl ProfileGenerator {
    pub fn new(completion_client: Arc<dyn CompletionClient>, timeout: Duration) -> Self {
        ProfileGenerator {
            completion_client,
            timeout,
        }
    }

    /// Always returns a complete result. Errors, timeouts and panics on the
    /// completion path are logged and replaced by the fallback for the same
    /// inputs.
    pub async fn generate(&self, request: &ProfileRequest) -> ProfileResult {
        let Some(description) = profile_description(&request.profile_type, request.vehicle_type)
        else {
            tracing::debug!(
                profile = %request.profile_type,
                "No prompt template for profile {} (vehicle: {:?}), using fallback data",
                request.profile_type, request.vehicle_type
            );
            return self.fallback(request);
        };

        let attempt = AssertUnwindSafe(self.generate_with_description(request, description))
            .catch_unwind()
            .await;

        match attempt {
            Ok(Ok(result)) => {
                tracing::info!(
                    profile = %request.profile_type,
                    model = %self.completion_client.model(),
                    charts = result.charts.len(),
                    stats = result.stats.len(),
                    "Generated {} dashboard with {}",
                    request.profile_type, self.completion_client.model()
                );
                result
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    profile = %request.profile_type,
                    error = %e,
                    "Completion path failed, using fallback data: {}",
                    e
                );
                self.fallback(request)
            }
            Err(_) => {
                tracing::error!(
                    profile = %request.profile_type,
                    "Completion path panicked, using fallback data"
                );
                self.fallback(request)
            }
        }
    }

    /// The completion path alone: prompt, remote call under the timeout, parse.
    pub async fn try_generate(&self, request: &ProfileRequest) -> Result<ProfileResult> {
        let description = profile_description(&request.profile_type, request.vehicle_type)
            .ok_or_else(|| {
                AppError::InvalidRequest(format!(
                    "No prompt template for profile '{}' with vehicle {:?}",
                    request.profile_type, request.vehicle_type
                ))
            })?;

        self.generate_with_description(request, description).await
    }

    async fn generate_with_description(
        &self,
        request: &ProfileRequest,
        description: &str,
    ) -> Result<ProfileResult> {
        let prompt = build_prompt(request, description);

        let raw = tokio::time::timeout(
            self.timeout,
            self.completion_client
                .complete(COMPLETION_SYSTEM_PROMPT, &prompt),
        )
        .await
        .map_err(|_| {
            AppError::CompletionApi(format!(
                "No completion within {}ms",
                self.timeout.as_millis()
            ))
        })??;

        parse_profile_result(&raw)
    }

    fn fallback(&self, request: &ProfileRequest) -> ProfileResult {
        fallback_result(&request.profile_type, request.vehicle_type, request.location)
    }
}
