//! Click-query-highlight workflow.
//!
//! A click runs through `Idle → HitTesting → { RoadSelected | CitySelected
//! | NoneSelected } → Idle`. The synchronous phase
//! ([`handle_click`](ClickWorkflow::handle_click)) hit-tests, tears down
//! the previous selection, and installs the new highlight and marker; the
//! asynchronous phase
//! ([`apply_city_results`](ClickWorkflow::apply_city_results)) applies the
//! city proximity results when they arrive, guarded by a per-click token
//! so a slow query can never clobber a later click.
//!
//! The workflow owns every piece of mutable interaction state: the road
//! and city highlight handles, the click marker, and the click sequence.
//! Collaborators are injected as trait objects.

mod state;

use std::sync::Arc;

pub use state::{ClickOutcome, ClickToken, PendingQuery, SelectionState};

use crate::domain::{ClickContext, Feature, LayerKind, MapPoint};
use crate::error::QueryError;
use crate::popup;
use crate::traits::{
    FeatureSource, Graphic, GraphicId, GraphicsLayer, HighlightHandle, HighlightLayer,
    MapSurface, PopupHost, SpatialQuery,
};

/// Controller for the click-driven selection workflow.
///
/// Lifecycle is tied to the view: construct on mount, [`clear`](Self::clear)
/// (or drop) on unmount.
pub struct ClickWorkflow {
    surface: Arc<dyn MapSurface>,
    cities: Arc<dyn FeatureSource>,
    highlights: Arc<dyn HighlightLayer>,
    graphics: Arc<dyn GraphicsLayer>,
    popup: Arc<dyn PopupHost>,

    road_highlight: Option<Box<dyn HighlightHandle>>,
    city_highlight: Option<Box<dyn HighlightHandle>>,
    marker: Option<GraphicId>,
    click_seq: u64,
    state: SelectionState,
}

impl ClickWorkflow {
    pub fn new(
        surface: Arc<dyn MapSurface>,
        cities: Arc<dyn FeatureSource>,
        highlights: Arc<dyn HighlightLayer>,
        graphics: Arc<dyn GraphicsLayer>,
        popup: Arc<dyn PopupHost>,
    ) -> Self {
        Self {
            surface,
            cities,
            highlights,
            graphics,
            popup,
            road_highlight: None,
            city_highlight: None,
            marker: None,
            click_seq: 0,
            state: SelectionState::Idle,
        }
    }

    /// Synchronous phase of a click.
    ///
    /// Hit-tests the point, tears down all prior artifacts, then branches
    /// on the winning layer. For a road hit the returned outcome carries a
    /// [`PendingQuery`]; run it against the feature source and pass the
    /// result to [`apply_city_results`](Self::apply_city_results). Callers
    /// without their own event loop can use [`click`](Self::click) instead.
    pub fn handle_click(&mut self, point: MapPoint) -> ClickOutcome {
        self.click_seq += 1;
        let token = ClickToken(self.click_seq);

        let hits = self.surface.hit_test(point);
        let context = ClickContext::from_hits(point, &hits);

        // Teardown precedes any new acquisition: at most one highlight set
        // per layer and one marker exist at any time.
        self.teardown();

        let road = ClickContext::topmost(&hits, LayerKind::Road).cloned();
        let city = ClickContext::topmost(&hits, LayerKind::City).cloned();

        match (context.hit_layer, road, city) {
            (Some(LayerKind::Road), Some(feature), _) => {
                self.road_highlight =
                    Some(self.highlights.highlight(LayerKind::Road, &[feature.id]));
                self.marker = Some(self.graphics.add(Graphic::clicked_point(point)));
                self.state = SelectionState::RoadSelected {
                    feature: feature.id,
                };
                tracing::debug!(feature = %feature.id, "road selected, city query pending");
                ClickOutcome::RoadSelected {
                    feature: feature.id,
                    pending: PendingQuery {
                        token,
                        query: SpatialQuery::nearby_cities(point),
                    },
                }
            }
            (Some(LayerKind::City), _, Some(feature)) => {
                self.city_highlight =
                    Some(self.highlights.highlight(LayerKind::City, &[feature.id]));
                self.state = SelectionState::CitySelected {
                    feature: feature.id,
                };
                tracing::debug!(feature = %feature.id, "city selected");
                ClickOutcome::CitySelected {
                    feature: feature.id,
                }
            }
            _ => {
                self.state = SelectionState::Idle;
                tracing::debug!("empty click, selection cleared");
                ClickOutcome::Cleared
            }
        }
    }

    /// Asynchronous completion phase: apply (or discard) city proximity
    /// results for the click identified by `token`.
    ///
    /// Stale tokens are discarded outright. A query error is logged and
    /// leaves the marker and road highlight untouched; the city highlight
    /// simply is not updated. On success the entire result set becomes one
    /// city highlight selection and the road popup content is rewritten.
    pub fn apply_city_results(
        &mut self,
        token: ClickToken,
        result: Result<Vec<Feature>, QueryError>,
    ) {
        if token.0 != self.click_seq {
            tracing::debug!(
                token = token.0,
                latest = self.click_seq,
                "discarding stale city query result"
            );
            return;
        }
        match result {
            Err(error) => {
                tracing::warn!(%error, retryable = error.is_retryable(),
                    "city query failed, keeping current selection");
            }
            Ok(features) => {
                self.city_highlight = None;
                if !features.is_empty() {
                    let ids: Vec<_> = features.iter().map(|f| f.id).collect();
                    self.city_highlight =
                        Some(self.highlights.highlight(LayerKind::City, &ids));
                }
                self.popup
                    .set_content(LayerKind::Road, popup::city_table(&features));
                tracing::debug!(count = features.len(), "city query results applied");
            }
        }
    }

    /// Run both phases back-to-back and return the resulting state.
    pub async fn click(&mut self, point: MapPoint) -> SelectionState {
        if let ClickOutcome::RoadSelected { pending, .. } = self.handle_click(point) {
            let result = self.cities.query_features(&pending.query).await;
            self.apply_city_results(pending.token, result);
        }
        self.state
    }

    /// The current resting state of the selection.
    pub fn selection_state(&self) -> SelectionState {
        self.state
    }

    /// Number of live highlight selections (0..=2, one per layer slot).
    pub fn active_highlights(&self) -> usize {
        usize::from(self.road_highlight.is_some()) + usize::from(self.city_highlight.is_some())
    }

    /// Whether a click marker is currently placed.
    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }

    /// Tear everything down and return to `Idle` (view unmount path).
    ///
    /// Advances the click sequence so tokens minted before the clear go
    /// stale; an in-flight query resolving afterwards is discarded rather
    /// than re-acquiring a highlight on the torn-down view.
    pub fn clear(&mut self) {
        self.click_seq += 1;
        self.teardown();
        self.state = SelectionState::Idle;
    }

    fn teardown(&mut self) {
        // Dropping the handles releases the highlights host-side.
        self.road_highlight = None;
        self.city_highlight = None;
        self.marker = None;
        self.graphics.remove_all();
    }
}

impl Drop for ClickWorkflow {
    fn drop(&mut self) {
        self.teardown();
    }
}
