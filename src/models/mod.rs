pub mod coordinates;
pub mod dashboard;
pub mod profile;

pub use coordinates::Coordinates;
pub use dashboard::{ChartKind, ChartPoint, ChartSeries, MapKind, MapLayer, MapPoint, ProfileResult, Stat};
pub use profile::{ProfileRequest, ProfileType, VehicleType};
