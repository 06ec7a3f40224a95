use crate::constants::{DEFAULT_ANCHOR_LAT, DEFAULT_ANCHOR_LNG};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Anchor used when the caller does not share a location
    pub fn default_anchor() -> Self {
        Coordinates {
            lat: DEFAULT_ANCHOR_LAT,
            lng: DEFAULT_ANCHOR_LNG,
        }
    }

    /// Same range check as [`Coordinates::new`], for values built by deserialization
    pub fn validate(&self) -> Result<(), String> {
        Coordinates::new(self.lat, self.lng).map(|_| ())
    }

    /// Shift by a fixed number of degrees. No wrapping at the poles or antimeridian.
    pub fn offset(&self, dlat: f64, dlng: f64) -> Self {
        Coordinates {
            lat: self.lat + dlat,
            lng: self.lng + dlng,
        }
    }
}
