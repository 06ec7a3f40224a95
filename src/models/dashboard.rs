use crate::models::Coordinates;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MapKind {
    #[default]
    Pins,
    Heatmap,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Area,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapPoint {
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub lat: f64,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub lng: f64,
    #[serde(default)]
    pub label: String,
}

impl MapPoint {
    pub fn new(at: Coordinates, label: &str) -> Self {
        MapPoint {
            lat: at.lat,
            lng: at.lng,
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MapLayer {
    #[serde(rename = "type", default)]
    pub kind: MapKind,
    #[serde(default)]
    pub data: Vec<MapPoint>,
}

impl MapLayer {
    pub fn new(kind: MapKind, data: Vec<MapPoint>) -> Self {
        MapLayer { kind, data }
    }

    /// Pins layer with no points, used by the error-stat results
    pub fn empty() -> Self {
        MapLayer::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ChartPoint {
    pub fn new(label: &str, value: f64, unit: &str) -> Self {
        ChartPoint {
            label: label.to_string(),
            value,
            unit: Some(unit.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub title: String,
    #[serde(default)]
    pub data: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stat {
    pub label: String,
    /// Free text; may embed units or currency
    #[serde(deserialize_with = "scalar_as_string")]
    pub value: String,
}

impl Stat {
    pub fn new(label: &str, value: &str) -> Self {
        Stat {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Dashboard payload returned by both profile endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<MapLayer>,
    #[serde(default)]
    pub charts: Vec<ChartSeries>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProfileResult {
    /// Empty map, no charts, one `Error` stat
    pub fn error(message: &str) -> Self {
        ProfileResult {
            map: Some(MapLayer::empty()),
            charts: Vec::new(),
            stats: vec![Stat::new("Error", message)],
            message: None,
        }
    }
}

// Models sometimes answer `"value": 45` for stats or `"value": "45"` for chart
// points and coordinates; both are accepted.

fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string, number or boolean, found {}",
            other
        ))),
    }
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    value
        .filter(|v| v.is_finite())
        .ok_or_else(|| serde::de::Error::custom("expected a finite numeric value"))
}
