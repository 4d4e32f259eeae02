//! Trait abstractions for the external map collaborators.
//!
//! Everything the workflow needs from the mapping host lives behind these
//! traits, enabling dependency injection and mocking in tests. The real
//! implementations wrap the mapping SDK; this crate ships none of them.
//!
//! # Traits
//!
//! - [`MapSurface`] - hit testing against the rendered layer stack
//! - [`FeatureSource`] - asynchronous spatial queries
//! - [`HighlightLayer`] - releasable feature emphasis handles
//! - [`GraphicsLayer`] - ad-hoc marker graphics
//! - [`PopupHost`] - popup content replacement

pub mod highlight;
pub mod popup;
pub mod source;
pub mod surface;

pub use highlight::{Graphic, GraphicId, GraphicsLayer, HighlightHandle, HighlightLayer};
pub use popup::PopupHost;
pub use source::{FeatureSource, SpatialQuery, SpatialRelation};
pub use surface::MapSurface;
