//! Feature source abstraction and the spatial query description.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::QUERY_DISTANCE_KM;
use crate::domain::{
    Feature, MapPoint, FIELD_AREA_NAME, FIELD_CLASS, FIELD_OBJECT_ID, FIELD_POPULATION,
};
use crate::error::QueryError;

/// Spatial relation between the query envelope and candidate geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpatialRelation {
    Intersects,
    Contains,
    Within,
}

/// A proximity query against a feature collection.
///
/// Describes an envelope centered on `center` expanded by `distance_km`,
/// matched with `relation`, optionally filtered by a where clause, with
/// attribute projection via `out_fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialQuery {
    pub center: MapPoint,
    pub distance_km: f64,
    pub relation: SpatialRelation,
    pub out_fields: Vec<String>,
    pub where_clause: Option<String>,
    pub return_geometry: bool,
}

impl SpatialQuery {
    /// Envelope-intersects query within `distance_km` of `center`, carrying
    /// the deployment defaults: city class filter and the projected fields
    /// the popup and renderer need.
    pub fn within_km(center: MapPoint, distance_km: f64) -> Self {
        Self {
            center,
            distance_km,
            relation: SpatialRelation::Intersects,
            out_fields: vec![
                FIELD_OBJECT_ID.to_string(),
                FIELD_AREA_NAME.to_string(),
                FIELD_POPULATION.to_string(),
                FIELD_CLASS.to_string(),
            ],
            where_clause: Some(format!("{FIELD_CLASS}='city'")),
            return_geometry: true,
        }
    }

    /// The standard city proximity query issued after a road click.
    pub fn nearby_cities(center: MapPoint) -> Self {
        Self::within_km(center, QUERY_DISTANCE_KM)
    }
}

/// An external collection of queryable features.
#[async_trait]
pub trait FeatureSource: Send + Sync {
    /// Run a spatial query and return the matching features.
    ///
    /// Zero matches is a successful, empty result; `Err` means the service
    /// failed or was unreachable.
    async fn query_features(&self, query: &SpatialQuery) -> Result<Vec<Feature>, QueryError>;
}
