//! Shared mock collaborators for workflow integration tests.
//!
//! Mocks record every call and expose a live-handle counter so tests can
//! assert the "at most one highlight set per layer, one marker" invariant
//! directly.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Map};

use popmap::domain::{
    Feature, FeatureId, Geometry, Hit, LayerKind, MapPoint, FIELD_AREA_NAME, FIELD_CLASS,
    FIELD_POPULATION,
};
use popmap::error::QueryError;
use popmap::traits::{
    FeatureSource, Graphic, GraphicId, GraphicsLayer, HighlightHandle, HighlightLayer,
    MapSurface, PopupHost, SpatialQuery,
};
use popmap::workflow::ClickWorkflow;

pub fn road_feature(id: i64) -> Feature {
    Feature {
        id: FeatureId(id),
        geometry: Geometry::Polyline(vec![MapPoint::new(0.0, 0.0), MapPoint::new(1.0, 1.0)]),
        attributes: Map::new(),
    }
}

pub fn city_feature(id: i64, name: &str, population: i64) -> Feature {
    let mut attributes = Map::new();
    attributes.insert(FIELD_AREA_NAME.to_string(), json!(name));
    attributes.insert(FIELD_POPULATION.to_string(), json!(population));
    attributes.insert(FIELD_CLASS.to_string(), json!("city"));
    Feature {
        id: FeatureId(id),
        geometry: Geometry::Point(MapPoint::new(0.0, 0.0)),
        attributes,
    }
}

/// Map surface returning whatever hits were configured last.
#[derive(Default)]
pub struct MockSurface {
    hits: Mutex<Vec<Hit>>,
}

impl MockSurface {
    pub fn set_hits(&self, hits: Vec<Hit>) {
        *self.hits.lock().unwrap() = hits;
    }
}

impl MapSurface for MockSurface {
    fn hit_test(&self, _point: MapPoint) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }
}

/// Feature source returning a preconfigured result.
pub struct MockSource {
    result: Mutex<Result<Vec<Feature>, QueryError>>,
    pub queries: Mutex<Vec<SpatialQuery>>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self {
            result: Mutex::new(Ok(Vec::new())),
            queries: Mutex::new(Vec::new()),
        }
    }
}

impl MockSource {
    pub fn set_result(&self, result: Result<Vec<Feature>, QueryError>) {
        *self.result.lock().unwrap() = result;
    }
}

#[async_trait]
impl FeatureSource for MockSource {
    async fn query_features(&self, query: &SpatialQuery) -> Result<Vec<Feature>, QueryError> {
        self.queries.lock().unwrap().push(query.clone());
        self.result.lock().unwrap().clone()
    }
}

struct MockHandle {
    live: Arc<AtomicUsize>,
}

impl HighlightHandle for MockHandle {}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Highlight layer counting live handles and recording calls.
#[derive(Default)]
pub struct MockHighlights {
    live: Arc<AtomicUsize>,
    pub calls: Mutex<Vec<(LayerKind, Vec<FeatureId>)>>,
}

impl MockHighlights {
    pub fn live_handles(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl HighlightLayer for MockHighlights {
    fn highlight(&self, layer: LayerKind, ids: &[FeatureId]) -> Box<dyn HighlightHandle> {
        self.live.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push((layer, ids.to_vec()));
        Box::new(MockHandle {
            live: Arc::clone(&self.live),
        })
    }
}

/// Graphics layer keeping the current graphics in a vec.
#[derive(Default)]
pub struct MockGraphics {
    pub graphics: Mutex<Vec<Graphic>>,
}

impl MockGraphics {
    pub fn count(&self) -> usize {
        self.graphics.lock().unwrap().len()
    }
}

impl GraphicsLayer for MockGraphics {
    fn add(&self, graphic: Graphic) -> GraphicId {
        let id = graphic.id;
        self.graphics.lock().unwrap().push(graphic);
        id
    }

    fn remove_all(&self) {
        self.graphics.lock().unwrap().clear();
    }
}

/// Popup host recording the last content written per call.
#[derive(Default)]
pub struct MockPopup {
    pub contents: Mutex<Vec<(LayerKind, String)>>,
}

impl MockPopup {
    pub fn last_content(&self) -> Option<(LayerKind, String)> {
        self.contents.lock().unwrap().last().cloned()
    }
}

impl PopupHost for MockPopup {
    fn set_content(&self, layer: LayerKind, content: String) {
        self.contents.lock().unwrap().push((layer, content));
    }
}

/// Everything a test needs: the workflow plus handles to its mocks.
pub struct Fixture {
    pub workflow: ClickWorkflow,
    pub surface: Arc<MockSurface>,
    pub source: Arc<MockSource>,
    pub highlights: Arc<MockHighlights>,
    pub graphics: Arc<MockGraphics>,
    pub popup: Arc<MockPopup>,
}

/// Install a test subscriber once; `RUST_LOG` controls verbosity.
fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn fixture() -> Fixture {
    init_tracing();
    let surface = Arc::new(MockSurface::default());
    let source = Arc::new(MockSource::default());
    let highlights = Arc::new(MockHighlights::default());
    let graphics = Arc::new(MockGraphics::default());
    let popup = Arc::new(MockPopup::default());
    let workflow = ClickWorkflow::new(
        surface.clone(),
        source.clone(),
        highlights.clone(),
        graphics.clone(),
        popup.clone(),
    );
    Fixture {
        workflow,
        surface,
        source,
        highlights,
        graphics,
        popup,
    }
}
