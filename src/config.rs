//! Immutable view configuration: symbol styles, breakpoint stops, highlight
//! options, and spatial query defaults.
//!
//! Everything in this module is plain data validated once at construction.
//! The map host consumes these descriptions to build its renderers; the
//! click workflow consumes the query defaults and marker symbols. Nothing
//! here holds live handles.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// City marker fill (orange).
pub const CITY_MARKER_COLOR: Rgb = Rgb(226, 119, 40);
/// City marker outline (white).
pub const CITY_OUTLINE_COLOR: Rgb = Rgb(255, 255, 255);
/// Highlight fill (yellow).
pub const HIGHLIGHT_COLOR: Rgb = Rgb(255, 255, 0);
/// Highlight marker outline (cyan).
pub const HIGHLIGHT_OUTLINE_COLOR: Rgb = Rgb(0, 255, 255);
/// Road line color (green).
pub const ROAD_LINE_COLOR: Rgb = Rgb(0, 128, 0);
/// Clicked-point cross outline (black).
pub const CLICKED_POINT_OUTLINE_COLOR: Rgb = Rgb(0, 0, 0);

/// Search radius for the city proximity query, in kilometers.
pub const QUERY_DISTANCE_KM: f64 = 50.0;

/// Popup title template for the city layer; `{field}` placeholders are
/// substituted by the popup host.
pub const CITY_POPUP_TITLE: &str = "{areaname}";
/// Default popup content template for the city layer.
pub const CITY_POPUP_CONTENT: &str = "{pop2000}";

/// Marker shape understood by the graphics layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    Circle,
    Cross,
}

/// Outline stroke shared by marker and line symbols.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub color: Rgb,
    pub width: f32,
}

/// A point symbol description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerSymbol {
    pub style: MarkerStyle,
    pub color: Option<Rgb>,
    /// Fixed size in points; `None` when size comes from a visual variable.
    pub size: Option<f32>,
    pub outline: Outline,
}

impl MarkerSymbol {
    /// Base symbol for city features; size is driven by the population
    /// visual variable, not fixed here.
    pub fn city() -> Self {
        Self {
            style: MarkerStyle::Circle,
            color: Some(CITY_MARKER_COLOR),
            size: None,
            outline: Outline {
                color: CITY_OUTLINE_COLOR,
                width: 1.0,
            },
        }
    }

    /// Emphasis symbol for query-result graphics, sized per feature.
    pub fn highlight(size: f32) -> Self {
        Self {
            style: MarkerStyle::Circle,
            color: Some(HIGHLIGHT_COLOR),
            size: Some(size),
            outline: Outline {
                color: HIGHLIGHT_OUTLINE_COLOR,
                width: 1.0,
            },
        }
    }

    /// Cross marker dropped at the click coordinate.
    pub fn clicked_point() -> Self {
        Self {
            style: MarkerStyle::Cross,
            color: None,
            size: Some(15.0),
            outline: Outline {
                color: CLICKED_POINT_OUTLINE_COLOR,
                width: 4.0,
            },
        }
    }
}

/// A line symbol description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSymbol {
    pub color: Rgb,
    pub width: f32,
}

impl LineSymbol {
    /// Renderer symbol for the road layer.
    pub fn road() -> Self {
        Self {
            color: ROAD_LINE_COLOR,
            width: 2.0,
        }
    }
}

/// View-level highlight appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightOptions {
    pub color: Rgb,
    pub fill_opacity: f32,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            color: HIGHLIGHT_COLOR,
            fill_opacity: 0.4,
        }
    }
}

/// One entry of a [`BreakpointTable`].
///
/// Values strictly below `threshold` (and at or above the previous
/// threshold) render at `size`. The last entry doubles as the open-ended
/// overflow bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub threshold: f64,
    pub size: f32,
    pub label: String,
}

impl Breakpoint {
    pub fn new(threshold: f64, size: f32, label: impl Into<String>) -> Self {
        Self {
            threshold,
            size,
            label: label.into(),
        }
    }
}

/// Ordered, validated size stops for value-driven symbol sizing.
///
/// Invariants, enforced by [`BreakpointTable::new`]: non-empty, thresholds
/// finite and strictly increasing, sizes positive. See
/// [`classify`](BreakpointTable::classify) for the lookup semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")]
pub struct BreakpointTable {
    stops: Vec<Breakpoint>,
}

impl BreakpointTable {
    /// Validate and build a table.
    pub fn new(stops: Vec<Breakpoint>) -> Result<Self, ConfigError> {
        if stops.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        let mut previous: Option<f64> = None;
        for (index, stop) in stops.iter().enumerate() {
            if !stop.threshold.is_finite() {
                return Err(ConfigError::NonFiniteThreshold { index });
            }
            if stop.size <= 0.0 || !stop.size.is_finite() {
                return Err(ConfigError::NonPositiveSize {
                    index,
                    size: stop.size,
                });
            }
            if let Some(prev) = previous {
                if stop.threshold <= prev {
                    return Err(ConfigError::NonIncreasingThresholds {
                        index,
                        previous: prev,
                        current: stop.threshold,
                    });
                }
            }
            previous = Some(stop.threshold);
        }
        Ok(Self { stops })
    }

    /// The validated stops, ascending by threshold.
    pub fn stops(&self) -> &[Breakpoint] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        // Always false by construction; kept for API symmetry with len().
        self.stops.is_empty()
    }

    /// Size of the smallest bucket.
    pub fn first_size(&self) -> f32 {
        self.stops[0].size
    }

    /// Size of the open-ended overflow bucket.
    pub fn overflow_size(&self) -> f32 {
        self.stops[self.stops.len() - 1].size
    }
}

impl TryFrom<Vec<Breakpoint>> for BreakpointTable {
    type Error = ConfigError;

    fn try_from(stops: Vec<Breakpoint>) -> Result<Self, Self::Error> {
        Self::new(stops)
    }
}

impl From<BreakpointTable> for Vec<Breakpoint> {
    fn from(table: BreakpointTable) -> Self {
        table.stops
    }
}

/// Population stops used by the US cities deployment.
pub static POPULATION_STOPS: Lazy<BreakpointTable> = Lazy::new(|| {
    BreakpointTable::new(vec![
        Breakpoint::new(10_000.0, 4.0, "<10000"),
        Breakpoint::new(20_000.0, 8.0, "<20000"),
        Breakpoint::new(30_000.0, 12.0, "<30000"),
        Breakpoint::new(40_000.0, 14.0, ">40000"),
    ])
    .expect("population stops are valid")
});

/// Size-by-value renderer variable: which attribute drives the size and
/// through which stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeVisualVariable {
    pub field: String,
    pub legend_title: String,
    pub stops: BreakpointTable,
}

impl SizeVisualVariable {
    /// The deployment's population-driven sizing for the city layer.
    pub fn population() -> Self {
        Self {
            field: crate::domain::FIELD_POPULATION.to_string(),
            legend_title: "population for city".to_string(),
            stops: POPULATION_STOPS.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rejects_empty() {
        assert_eq!(BreakpointTable::new(vec![]), Err(ConfigError::EmptyTable));
    }

    #[test]
    fn test_table_rejects_non_increasing_thresholds() {
        let stops = vec![
            Breakpoint::new(10_000.0, 4.0, "a"),
            Breakpoint::new(10_000.0, 8.0, "b"),
        ];
        assert_eq!(
            BreakpointTable::new(stops),
            Err(ConfigError::NonIncreasingThresholds {
                index: 1,
                previous: 10_000.0,
                current: 10_000.0,
            })
        );

        let stops = vec![
            Breakpoint::new(20_000.0, 4.0, "a"),
            Breakpoint::new(10_000.0, 8.0, "b"),
        ];
        assert!(matches!(
            BreakpointTable::new(stops),
            Err(ConfigError::NonIncreasingThresholds { index: 1, .. })
        ));
    }

    #[test]
    fn test_table_rejects_non_finite_threshold() {
        let stops = vec![Breakpoint::new(f64::NAN, 4.0, "a")];
        assert_eq!(
            BreakpointTable::new(stops),
            Err(ConfigError::NonFiniteThreshold { index: 0 })
        );

        let stops = vec![
            Breakpoint::new(10.0, 4.0, "a"),
            Breakpoint::new(f64::INFINITY, 8.0, "b"),
        ];
        assert_eq!(
            BreakpointTable::new(stops),
            Err(ConfigError::NonFiniteThreshold { index: 1 })
        );
    }

    #[test]
    fn test_table_rejects_non_positive_size() {
        let stops = vec![Breakpoint::new(10.0, 0.0, "a")];
        assert!(matches!(
            BreakpointTable::new(stops),
            Err(ConfigError::NonPositiveSize { index: 0, .. })
        ));

        let stops = vec![Breakpoint::new(10.0, -4.0, "a")];
        assert!(matches!(
            BreakpointTable::new(stops),
            Err(ConfigError::NonPositiveSize { index: 0, .. })
        ));
    }

    #[test]
    fn test_default_population_stops() {
        let table = &*POPULATION_STOPS;
        assert_eq!(table.len(), 4);
        assert_eq!(table.first_size(), 4.0);
        assert_eq!(table.overflow_size(), 14.0);
        assert_eq!(table.stops()[2].label, "<30000");
    }

    #[test]
    fn test_population_visual_variable() {
        let var = SizeVisualVariable::population();
        assert_eq!(var.field, "pop2000");
        assert_eq!(var.legend_title, "population for city");
        assert_eq!(var.stops, *POPULATION_STOPS);
    }

    #[test]
    fn test_symbol_constructors() {
        let city = MarkerSymbol::city();
        assert_eq!(city.style, MarkerStyle::Circle);
        assert_eq!(city.color, Some(CITY_MARKER_COLOR));
        assert_eq!(city.size, None);

        let clicked = MarkerSymbol::clicked_point();
        assert_eq!(clicked.style, MarkerStyle::Cross);
        assert_eq!(clicked.size, Some(15.0));
        assert_eq!(clicked.outline.width, 4.0);

        let highlight = MarkerSymbol::highlight(8.0);
        assert_eq!(highlight.color, Some(HIGHLIGHT_COLOR));
        assert_eq!(highlight.size, Some(8.0));

        let road = LineSymbol::road();
        assert_eq!(road.color, ROAD_LINE_COLOR);
        assert_eq!(road.width, 2.0);
    }

    #[test]
    fn test_highlight_options_default() {
        let opts = HighlightOptions::default();
        assert_eq!(opts.color, HIGHLIGHT_COLOR);
        assert_eq!(opts.fill_opacity, 0.4);
    }

    #[test]
    fn test_table_serde_round_trip_validates() {
        let json = serde_json::to_string(&*POPULATION_STOPS).unwrap();
        let back: BreakpointTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, *POPULATION_STOPS);

        // Deserialization runs the same validation as the constructor.
        let bad = r#"[{"threshold":20.0,"size":4.0,"label":"a"},
                      {"threshold":10.0,"size":8.0,"label":"b"}]"#;
        assert!(serde_json::from_str::<BreakpointTable>(bad).is_err());
    }
}
