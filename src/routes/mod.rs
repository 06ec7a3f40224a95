pub mod health;
pub mod profile;

use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/profile", post(profile::create_profile))
        .route("/api/profile/{profile_type}", get(profile::get_profile))
        .route("/health", get(health::health_check))
        .with_state(state)
}
