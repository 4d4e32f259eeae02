//! Layer identity, hit candidates, and the per-click context.

use serde::{Deserialize, Serialize};

use super::feature::{Feature, MapPoint};

/// The interactive layers of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Road,
    City,
}

/// One hit-test candidate: a rendered feature and the layer it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub feature: Feature,
    pub layer: LayerKind,
}

/// Ephemeral per-click value: where the click landed and which layer won
/// the hit, if any. Created per click event and discarded once the
/// workflow step completes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickContext {
    pub point: MapPoint,
    pub hit_layer: Option<LayerKind>,
}

impl ClickContext {
    /// Derive the context from hit candidates ordered topmost-first.
    ///
    /// A road hit wins over a city hit even when the city is rendered on
    /// top; the tie-break is deliberate so that clicking a road running
    /// through a city always starts the proximity flow.
    pub fn from_hits(point: MapPoint, hits: &[Hit]) -> Self {
        let hit_layer = if hits.iter().any(|hit| hit.layer == LayerKind::Road) {
            Some(LayerKind::Road)
        } else if hits.iter().any(|hit| hit.layer == LayerKind::City) {
            Some(LayerKind::City)
        } else {
            None
        };
        Self { point, hit_layer }
    }

    /// Topmost hit on the given layer, if any.
    pub fn topmost<'a>(hits: &'a [Hit], layer: LayerKind) -> Option<&'a Feature> {
        hits.iter()
            .find(|hit| hit.layer == layer)
            .map(|hit| &hit.feature)
    }
}
