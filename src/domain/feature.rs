//! Feature and geometry value types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Object id field in the feature service schema.
pub const FIELD_OBJECT_ID: &str = "objectid";
/// Display name field for city features.
pub const FIELD_AREA_NAME: &str = "areaname";
/// Census population field for city features.
pub const FIELD_POPULATION: &str = "pop2000";
/// Feature class discriminator field ("city", "town", ...).
pub const FIELD_CLASS: &str = "class";

/// A coordinate in map space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Stable identifier of a feature within its service (the `objectid`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct FeatureId(pub i64);

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Feature geometry, carried opaquely.
///
/// The workflow never interprets coordinates; geometry only travels from
/// a query result or hit test into a graphic handed back to the graphics
/// layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates", rename_all = "lowercase")]
pub enum Geometry {
    Point(MapPoint),
    Polyline(Vec<MapPoint>),
}

/// A feature as returned by the external data source. Read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    pub geometry: Geometry,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl Feature {
    /// Look up a raw attribute value.
    pub fn attr(&self, field: &str) -> Option<&Value> {
        self.attributes.get(field)
    }

    /// The feature's display name (`areaname`), if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.attr(FIELD_AREA_NAME).and_then(Value::as_str)
    }

    /// The feature's population count (`pop2000`), if present and numeric.
    pub fn population(&self) -> Option<f64> {
        self.attr(FIELD_POPULATION).and_then(Value::as_f64)
    }
}
