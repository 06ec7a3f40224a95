//! Deterministic dashboard data used whenever the completion path fails.
//!
//! Every (profile, vehicle) combination maps to a hand-authored template laid
//! out on fixed offsets around the anchor, so identical inputs always yield
//! identical output and no input can fail.

use crate::constants::FALLBACK_POINT_OFFSETS;
use crate::models::{
    ChartKind, ChartPoint, ChartSeries, Coordinates, MapKind, MapLayer, MapPoint, ProfileResult,
    ProfileType, Stat, VehicleType,
};

/// The five fallback points around `anchor`, anchor first.
pub fn nearby_points(anchor: Coordinates) -> [Coordinates; 5] {
    FALLBACK_POINT_OFFSETS.map(|(dlat, dlng)| anchor.offset(dlat, dlng))
}

pub fn fallback_result(
    profile_type: &ProfileType,
    vehicle_type: Option<VehicleType>,
    location: Option<Coordinates>,
) -> ProfileResult {
    let points = nearby_points(location.unwrap_or_else(Coordinates::default_anchor));

    match (profile_type, vehicle_type) {
        (ProfileType::Commuter, _) => commuter(&points),
        (ProfileType::Tourist, _) => tourist(&points),
        (ProfileType::Driver, Some(VehicleType::Ev)) => ev_driver(&points),
        (ProfileType::Driver, Some(VehicleType::Car)) => car_driver(&points),
        (ProfileType::Driver, Some(VehicleType::Bike)) => bike_driver(&points),
        (ProfileType::Driver, None) => ProfileResult::error("Please select a vehicle type"),
        (ProfileType::Unrecognized(_), _) => ProfileResult::error("Invalid profile type"),
    }
}

fn layer(kind: MapKind, points: &[Coordinates], labels: &[&str]) -> Option<MapLayer> {
    let data = points
        .iter()
        .zip(labels)
        .map(|(at, label)| MapPoint::new(*at, label))
        .collect();
    Some(MapLayer::new(kind, data))
}

fn chart(kind: ChartKind, title: &str, data: &[(&str, f64, &str)]) -> ChartSeries {
    ChartSeries {
        kind,
        title: title.to_string(),
        data: data
            .iter()
            .map(|(label, value, unit)| ChartPoint::new(label, *value, unit))
            .collect(),
    }
}

fn stats(pairs: &[(&str, &str)]) -> Vec<Stat> {
    pairs
        .iter()
        .map(|(label, value)| Stat::new(label, value))
        .collect()
}

fn commuter(points: &[Coordinates]) -> ProfileResult {
    ProfileResult {
        map: layer(
            MapKind::Heatmap,
            points,
            &["High Traffic", "Medium Traffic", "Low Traffic"],
        ),
        charts: vec![chart(
            ChartKind::Bar,
            "Travel Time by Hour",
            &[("8 AM", 45.0, "min"), ("12 PM", 25.0, "min"), ("5 PM", 50.0, "min")],
        )],
        stats: stats(&[("Average Commute", "32 min"), ("Time Saved", "15 min")]),
        message: None,
    }
}

fn tourist(points: &[Coordinates]) -> ProfileResult {
    ProfileResult {
        map: layer(
            MapKind::Pins,
            points,
            &["You Are Here", "Museum", "Park", "Historic Site"],
        ),
        charts: vec![chart(
            ChartKind::Pie,
            "Cost Breakdown",
            &[("Food", 30.0, "%"), ("Attractions", 45.0, "%"), ("Transport", 25.0, "%")],
        )],
        stats: stats(&[
            ("Top Attraction", "City Museum"),
            ("Walking Tour", "2.5 hours • $25"),
        ]),
        message: None,
    }
}

fn ev_driver(points: &[Coordinates]) -> ProfileResult {
    ProfileResult {
        map: layer(
            MapKind::Pins,
            points,
            &["You Are Here", "Fast Charger", "Level 2 Charger"],
        ),
        charts: vec![chart(
            ChartKind::Bar,
            "Charging Stations by Type",
            &[("Fast Charger", 3.0, "stations"), ("Level 2", 8.0, "stations")],
        )],
        stats: stats(&[
            ("Nearest Station", "Fast Charger - 1.2 km"),
            ("Est. Range", "142 miles"),
        ]),
        message: None,
    }
}

fn car_driver(points: &[Coordinates]) -> ProfileResult {
    ProfileResult {
        map: layer(
            MapKind::Pins,
            points,
            &["You Are Here", "Gas Station - ₹103/L", "Gas Station - ₹104/L"],
        ),
        charts: vec![chart(
            ChartKind::Bar,
            "Fuel Types Available",
            &[("Petrol", 60.0, "%"), ("Diesel", 40.0, "%")],
        )],
        stats: stats(&[
            ("Nearest Station", "Indian Oil - 1.5 km"),
            ("Average Price", "₹103/L"),
        ]),
        message: None,
    }
}

fn bike_driver(points: &[Coordinates]) -> ProfileResult {
    ProfileResult {
        map: layer(
            MapKind::Pins,
            points,
            &["You Are Here", "Bike Path Start", "Bike Rental"],
        ),
        charts: vec![chart(
            ChartKind::Line,
            "Elevation Profile",
            &[("0 km", 10.0, "m"), ("2 km", 25.0, "m"), ("4 km", 15.0, "m")],
        )],
        stats: stats(&[("Route Length", "5.2 km"), ("Bike Friendly Places", "3 nearby")]),
        message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn all_valid_combinations() -> Vec<(ProfileType, Option<VehicleType>)> {
        vec![
            (ProfileType::Commuter, None),
            (ProfileType::Tourist, None),
            (ProfileType::Driver, Some(VehicleType::Ev)),
            (ProfileType::Driver, Some(VehicleType::Car)),
            (ProfileType::Driver, Some(VehicleType::Bike)),
        ]
    }

    #[test]
    fn test_valid_combinations_are_populated() {
        for (profile, vehicle) in all_valid_combinations() {
            let result = fallback_result(&profile, vehicle, None);
            let map = result.map.expect("map should be present");

            assert!(!map.data.is_empty(), "{} map should have points", profile);
            assert!(!result.charts.is_empty(), "{} should have charts", profile);
            assert!(!result.stats.is_empty(), "{} should have stats", profile);
            assert!(result.charts.iter().all(|c| !c.data.is_empty()));
        }
    }

    #[test]
    fn test_degenerate_cases() {
        let no_vehicle = fallback_result(&ProfileType::Driver, None, None);
        assert_eq!(no_vehicle.map, Some(MapLayer::empty()));
        assert!(no_vehicle.charts.is_empty());
        assert_eq!(no_vehicle.stats, vec![Stat::new("Error", "Please select a vehicle type")]);

        let unknown = fallback_result(&ProfileType::from("pilot"), Some(VehicleType::Car), None);
        assert_eq!(unknown.map, Some(MapLayer::empty()));
        assert!(unknown.charts.is_empty());
        assert_eq!(unknown.stats, vec![Stat::new("Error", "Invalid profile type")]);
    }

    #[test]
    fn test_nearby_points_offsets() {
        let points = nearby_points(Coordinates { lat: 10.0, lng: 20.0 });
        let expected = [
            (10.0, 20.0),
            (10.005, 20.005),
            (9.995, 19.995),
            (10.008, 19.997),
            (9.997, 20.007),
        ];

        for (point, (lat, lng)) in points.iter().zip(expected) {
            assert!((point.lat - lat).abs() < EPSILON);
            assert!((point.lng - lng).abs() < EPSILON);
        }
    }

    #[test]
    fn test_commuter_heatmap() {
        let result = fallback_result(&ProfileType::Commuter, None, None);
        let map = result.map.unwrap();

        assert_eq!(map.kind, MapKind::Heatmap);
        let labels: Vec<&str> = map.data.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["High Traffic", "Medium Traffic", "Low Traffic"]);

        assert_eq!(result.charts[0].title, "Travel Time by Hour");
        assert_eq!(result.charts[0].data.len(), 3);
        assert!(result.charts[0].data.iter().all(|p| p.unit.as_deref() == Some("min")));
        assert_eq!(result.stats.len(), 2);
    }

    #[test]
    fn test_driver_templates() {
        let ev = fallback_result(&ProfileType::Driver, Some(VehicleType::Ev), None);
        assert_eq!(ev.charts[0].title, "Charging Stations by Type");
        assert_eq!(ev.map.as_ref().unwrap().data.len(), 3);

        let bike = fallback_result(&ProfileType::Driver, Some(VehicleType::Bike), None);
        assert_eq!(bike.charts[0].kind, ChartKind::Line);
        assert_eq!(bike.charts[0].title, "Elevation Profile");

        let car = fallback_result(&ProfileType::Driver, Some(VehicleType::Car), None);
        assert_eq!(car.stats[1], Stat::new("Average Price", "₹103/L"));
    }

    #[test]
    fn test_output_is_repeatable() {
        let location = Some(Coordinates { lat: -33.8688, lng: 151.2093 });
        for (profile, vehicle) in all_valid_combinations() {
            let first = serde_json::to_string(&fallback_result(&profile, vehicle, location)).unwrap();
            let second = serde_json::to_string(&fallback_result(&profile, vehicle, location)).unwrap();
            assert_eq!(first, second);
        }
    }
}
