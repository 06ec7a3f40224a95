use crate::error::{AppError, Result};
use crate::models::{Coordinates, ProfileRequest, ProfileResult, ProfileType, VehicleType};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for GET /api/profile/{profile_type}
#[derive(Debug, Deserialize)]
pub struct ProfileQueryParams {
    /// Required when the profile type is "driver"
    #[serde(default)]
    pub vehicle_type: Option<String>,
    /// Latitude; used only together with `lng`
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude; used only together with `lat`
    #[serde(default)]
    pub lng: Option<f64>,
}

impl ProfileQueryParams {
    /// Build a validated request for `profile_type`
    pub fn into_request(self, profile_type: &str) -> Result<ProfileRequest> {
        let profile_type = ProfileType::from(profile_type);
        if !profile_type.is_recognized() {
            return Err(AppError::InvalidRequest(
                "Invalid profile type. Must be 'commuter', 'tourist', or 'driver'".to_string(),
            ));
        }

        // Only drivers have a vehicle; other profiles ignore the parameter
        let vehicle_type = match self.vehicle_type.as_deref() {
            Some(raw) if profile_type == ProfileType::Driver && !raw.is_empty() => {
                Some(raw.parse::<VehicleType>().map_err(AppError::InvalidRequest)?)
            }
            _ => None,
        };

        let location = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => {
                Some(Coordinates::new(lat, lng).map_err(AppError::InvalidRequest)?)
            }
            _ => None,
        };

        let request = ProfileRequest::new(profile_type, vehicle_type, location);
        request.validate().map_err(AppError::InvalidRequest)?;
        Ok(request)
    }
}

/// POST /api/profile
/// Generate dashboard data from a JSON profile request
pub async fn create_profile(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<ProfileResult>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    Ok(generate(&state, request).await)
}

/// GET /api/profile/{profile_type}
/// Same as POST, with the profile in the path and options in the query string
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(profile_type): Path<String>,
    Query(params): Query<ProfileQueryParams>,
) -> Result<Json<ProfileResult>> {
    let request = params.into_request(&profile_type)?;

    Ok(generate(&state, request).await)
}

async fn generate(state: &AppState, request: ProfileRequest) -> Json<ProfileResult> {
    tracing::info!(
        profile = %request.profile_type,
        vehicle = ?request.vehicle_type,
        has_location = request.location.is_some(),
        "Profile request: {} (vehicle: {:?}), location: {:?}",
        request.profile_type, request.vehicle_type, request.location
    );

    Json(state.profile_generator.generate(&request).await)
}
