//! Map surface abstraction: hit testing against rendered layers.

use crate::domain::{Hit, MapPoint};

/// The rendered map view, as far as the workflow is concerned.
///
/// `hit_test` returns the candidates under a point ordered by rendering
/// z-order, topmost first. An empty result is the valid "clicked empty
/// space" case, not an error.
pub trait MapSurface: Send + Sync {
    fn hit_test(&self, point: MapPoint) -> Vec<Hit>;
}
