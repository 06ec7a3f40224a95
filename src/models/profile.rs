use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User persona driving which dashboard shape is generated.
///
/// Names match exactly (lowercase, no surrounding whitespace). Anything else
/// is kept as [`ProfileType::Unrecognized`] instead of failing
/// deserialization, so the generator can still answer it with its
/// error-stat result. Handlers reject it during validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ProfileType {
    Commuter,
    Tourist,
    Driver,
    Unrecognized(String),
}

impl ProfileType {
    pub fn as_str(&self) -> &str {
        match self {
            ProfileType::Commuter => "commuter",
            ProfileType::Tourist => "tourist",
            ProfileType::Driver => "driver",
            ProfileType::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ProfileType::Unrecognized(_))
    }
}

impl From<String> for ProfileType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "commuter" => ProfileType::Commuter,
            "tourist" => ProfileType::Tourist,
            "driver" => ProfileType::Driver,
            _ => ProfileType::Unrecognized(s),
        }
    }
}

impl From<&str> for ProfileType {
    fn from(s: &str) -> Self {
        ProfileType::from(s.to_string())
    }
}

impl From<ProfileType> for String {
    fn from(profile: ProfileType) -> Self {
        profile.as_str().to_string()
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-category of the driver profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Ev,
    Car,
    Bike,
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleType::Ev => write!(f, "ev"),
            VehicleType::Car => write!(f, "car"),
            VehicleType::Bike => write!(f, "bike"),
        }
    }
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ev" => Ok(VehicleType::Ev),
            "car" => Ok(VehicleType::Car),
            "bike" => Ok(VehicleType::Bike),
            _ => Err("Invalid vehicle type. Must be 'ev', 'car', or 'bike'".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRequest {
    pub profile_type: ProfileType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
}

impl ProfileRequest {
    pub fn new(
        profile_type: ProfileType,
        vehicle_type: Option<VehicleType>,
        location: Option<Coordinates>,
    ) -> Self {
        ProfileRequest {
            profile_type,
            vehicle_type,
            location,
        }
    }

    /// Caller location, or the fixed default anchor
    pub fn anchor(&self) -> Coordinates {
        self.location.unwrap_or_else(Coordinates::default_anchor)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.profile_type.is_recognized() {
            return Err(
                "Invalid profile type. Must be 'commuter', 'tourist', or 'driver'".to_string(),
            );
        }
        if self.profile_type == ProfileType::Driver && self.vehicle_type.is_none() {
            return Err("Vehicle type is required for driver profile".to_string());
        }
        if let Some(location) = &self.location {
            location.validate()?;
        }
        Ok(())
    }
}
