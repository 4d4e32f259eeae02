//! Domain value types shared by the workflow and the collaborator traits.
//!
//! These are plain data objects. Features are owned by the external data
//! source and read-only here; the workflow only inspects ids and attributes
//! and echoes geometry back to the graphics layer.

pub mod feature;
pub mod layer;

pub use feature::{
    Feature, FeatureId, Geometry, MapPoint, FIELD_AREA_NAME, FIELD_CLASS, FIELD_OBJECT_ID,
    FIELD_POPULATION,
};
pub use layer::{ClickContext, Hit, LayerKind};
