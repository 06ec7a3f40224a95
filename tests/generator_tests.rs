use genmaps::models::{
    ChartKind, Coordinates, MapKind, ProfileRequest, ProfileType, Stat, VehicleType,
};
use genmaps::services::fallback::fallback_result;

mod common;

use common::StubCompletionClient;

const EPSILON: f64 = 1e-9;

fn assert_point(actual: (f64, f64), expected: (f64, f64)) {
    assert!(
        (actual.0 - expected.0).abs() < EPSILON && (actual.1 - expected.1).abs() < EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[tokio::test]
async fn test_tourist_scenario_with_remote_failure() {
    let generator = common::generator_with(StubCompletionClient::failing());
    let request = ProfileRequest::new(
        ProfileType::Tourist,
        None,
        Some(Coordinates::new(10.0, 20.0).unwrap()),
    );

    let result = generator.generate(&request).await;

    let map = result.map.expect("tourist result should carry a map");
    assert_eq!(map.kind, MapKind::Pins);
    assert_eq!(map.data.len(), 4);
    let expected = [(10.0, 20.0), (10.005, 20.005), (9.995, 19.995), (10.008, 19.997)];
    for (point, expected) in map.data.iter().zip(expected) {
        assert_point((point.lat, point.lng), expected);
    }

    assert_eq!(result.charts.len(), 1);
    let chart = &result.charts[0];
    assert_eq!(chart.kind, ChartKind::Pie);
    assert_eq!(chart.title, "Cost Breakdown");
    let values: Vec<(&str, f64)> = chart.data.iter().map(|p| (p.label.as_str(), p.value)).collect();
    assert_eq!(values, [("Food", 30.0), ("Attractions", 45.0), ("Transport", 25.0)]);

    assert_eq!(
        result.stats,
        vec![
            Stat::new("Top Attraction", "City Museum"),
            Stat::new("Walking Tour", "2.5 hours • $25"),
        ]
    );
}

#[tokio::test]
async fn test_car_driver_scenario_defaults_anchor() {
    let generator = common::generator_with(StubCompletionClient::failing());
    let request = ProfileRequest::new(ProfileType::Driver, Some(VehicleType::Car), None);

    let result = generator.generate(&request).await;

    let map = result.map.unwrap();
    assert_point((map.data[0].lat, map.data[0].lng), (13.0827, 80.2707));

    let chart = &result.charts[0];
    assert_eq!(chart.kind, ChartKind::Bar);
    assert_eq!(chart.title, "Fuel Types Available");
    assert_eq!(chart.data[0].label, "Petrol");
    assert_eq!(chart.data[0].value, 60.0);
    assert_eq!(chart.data[0].unit.as_deref(), Some("%"));
    assert_eq!(chart.data[1].label, "Diesel");
    assert_eq!(chart.data[1].value, 40.0);
}

#[tokio::test]
async fn test_failures_match_direct_fallback() {
    let combinations = [
        (ProfileType::Commuter, None),
        (ProfileType::Tourist, None),
        (ProfileType::Driver, Some(VehicleType::Ev)),
        (ProfileType::Driver, Some(VehicleType::Car)),
        (ProfileType::Driver, Some(VehicleType::Bike)),
    ];
    let location = Some(Coordinates::new(51.5074, -0.1278).unwrap());

    for (profile, vehicle) in combinations {
        let request = ProfileRequest::new(profile.clone(), vehicle, location);
        let expected = fallback_result(&profile, vehicle, location);

        let network = common::generator_with(StubCompletionClient::failing())
            .generate(&request)
            .await;
        let parse = common::generator_with(StubCompletionClient::answering("Here is your dashboard!"))
            .generate(&request)
            .await;

        assert_eq!(network, expected, "network failure for {}", profile);
        assert_eq!(parse, expected, "parse failure for {}", profile);
    }
}

#[tokio::test]
async fn test_unrecognized_profile_yields_error_stat() {
    let client = StubCompletionClient::answering(common::MODEL_DASHBOARD_JSON);
    let generator = common::generator_with(client.clone());
    let request = ProfileRequest::new(ProfileType::from("astronaut"), None, None);

    let result = generator.generate(&request).await;

    assert_eq!(result.stats, vec![Stat::new("Error", "Invalid profile type")]);
    assert!(result.charts.is_empty());
    assert!(result.map.unwrap().data.is_empty());
    assert_eq!(client.calls(), 0);
}
