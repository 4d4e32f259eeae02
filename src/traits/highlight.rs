//! Highlight and graphics layer abstractions.

use uuid::Uuid;

use crate::config::{BreakpointTable, MarkerSymbol};
use crate::domain::{Feature, FeatureId, Geometry, LayerKind, MapPoint, FIELD_POPULATION};

/// A releasable emphasis handle.
///
/// Dropping the handle removes the emphasis from the view. The workflow
/// holds at most one live handle per layer slot; replacing a selection
/// drops the old handle before acquiring the new one.
pub trait HighlightHandle: Send {}

/// The view's highlight facility.
pub trait HighlightLayer: Send + Sync {
    /// Emphasize the given features on a layer as one selection.
    fn highlight(&self, layer: LayerKind, ids: &[FeatureId]) -> Box<dyn HighlightHandle>;
}

/// Identifier of a graphic added to the graphics layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphicId(pub Uuid);

impl GraphicId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GraphicId {
    fn default() -> Self {
        Self::new()
    }
}

/// An ad-hoc graphic: geometry plus a marker symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Graphic {
    pub id: GraphicId,
    pub geometry: Geometry,
    pub symbol: MarkerSymbol,
}

impl Graphic {
    /// Cross marker dropped at a click coordinate.
    pub fn clicked_point(point: MapPoint) -> Self {
        Self {
            id: GraphicId::new(),
            geometry: Geometry::Point(point),
            symbol: MarkerSymbol::clicked_point(),
        }
    }

    /// Emphasis graphic for a query-result feature, sized through the
    /// breakpoint table from the feature's population.
    pub fn highlight_for(feature: &Feature, stops: &BreakpointTable) -> Self {
        let size = stops.classify_attribute(feature.attr(FIELD_POPULATION));
        Self {
            id: GraphicId::new(),
            geometry: feature.geometry.clone(),
            symbol: MarkerSymbol::highlight(size),
        }
    }
}

/// The view's scratch graphics layer for transient markers.
pub trait GraphicsLayer: Send + Sync {
    /// Add a graphic, returning its id.
    fn add(&self, graphic: Graphic) -> GraphicId;

    /// Remove every graphic previously added.
    fn remove_all(&self);
}
