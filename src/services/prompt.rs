//! Prompt construction for the completion provider.

use crate::models::{ProfileRequest, ProfileType, VehicleType};

const COMMUTER_DESCRIPTION: &str = "A user who regularly travels between home and work, interested in travel time stats and congestion heatmaps.";
const TOURIST_DESCRIPTION: &str = "A visitor exploring new places, interested in points of interest, walking tours, and cost breakdowns.";
const EV_DRIVER_DESCRIPTION: &str =
    "An electric vehicle driver interested in charging stations and range planning.";
const CAR_DRIVER_DESCRIPTION: &str =
    "A car driver interested in fuel stations and parking options.";
const BIKE_DRIVER_DESCRIPTION: &str =
    "A cyclist interested in cycling routes and bike-friendly paths.";

const RESPONSE_SHAPE: &str = r#"Follow this exact JSON structure:
{
  "map": { "type": "pins" or "heatmap", "data": [{"lat": number, "lng": number, "label": "Point label"}] },
  "charts": [
    {
      "type": "bar" or "line" or "pie" or "area",
      "title": "Chart title",
      "data": [
        {"label": "Label 1", "value": numeric_value, "unit": "optional unit such as km, %, min"},
        {"label": "Label 2", "value": numeric_value, "unit": "optional unit such as km, %, min"}
      ]
    }
  ],
  "stats": [
    {"label": "Stat 1", "value": "Value 1"},
    {"label": "Stat 2", "value": "Value 2"}
  ]
}"#;

/// Human-readable persona text, or `None` when the combination has no
/// template (driver without a vehicle, unrecognized profile).
pub fn profile_description(
    profile_type: &ProfileType,
    vehicle_type: Option<VehicleType>,
) -> Option<&'static str> {
    match (profile_type, vehicle_type) {
        (ProfileType::Commuter, _) => Some(COMMUTER_DESCRIPTION),
        (ProfileType::Tourist, _) => Some(TOURIST_DESCRIPTION),
        (ProfileType::Driver, Some(VehicleType::Ev)) => Some(EV_DRIVER_DESCRIPTION),
        (ProfileType::Driver, Some(VehicleType::Car)) => Some(CAR_DRIVER_DESCRIPTION),
        (ProfileType::Driver, Some(VehicleType::Bike)) => Some(BIKE_DRIVER_DESCRIPTION),
        (ProfileType::Driver, None) | (ProfileType::Unrecognized(_), _) => None,
    }
}

/// Render the user message sent to the completion provider.
pub fn build_prompt(request: &ProfileRequest, description: &str) -> String {
    let anchor = request.anchor();
    let profile = &request.profile_type;

    let mut prompt = format!(
        "Generate a JSON schema for a {} user interface. {}\n\n",
        profile, description
    );

    prompt.push_str(
        "The schema should include:\n\
         1. Map data with pins or heatmap based on the user profile\n\
         2. Relevant charts with appropriate data\n\
         3. Key statistics that would be useful for this user type\n\n",
    );

    prompt.push_str(&format!(
        "Center all map data on latitude {:?} and longitude {:?}.\n",
        anchor.lat, anchor.lng
    ));

    if request.location.is_some() {
        prompt.push_str(&format!(
            "IMPORTANT: The user is currently at latitude {:?} and longitude {:?}. \
             Use these EXACT coordinates as the center point and place every generated \
             point of interest, traffic reading or service location within 1-2 kilometers of them. \
             Do not use placeholder coordinates.\n",
            anchor.lat, anchor.lng
        ));
    }

    prompt.push('\n');
    prompt.push_str(RESPONSE_SHAPE);
    prompt.push_str(&format!(
        "\n\nEnsure the data is realistic and relevant to a {} user at this location. \
         Respond with the JSON object only.",
        profile
    ));

    prompt
}
