//! popmap - interaction core for a feature-layer map view
//!
//! The map host (basemap, tiles, pan/zoom, popups, highlight rendering) is
//! an external collaborator reached through the traits in [`traits`]. This
//! crate owns what sits above it: the validated view configuration
//! ([`config`]), value-to-size classification ([`classify`]), the
//! click-driven spatial query/highlight workflow ([`workflow`]), and popup
//! content generation ([`popup`]).

pub mod classify;
pub mod config;
pub mod domain;
pub mod error;
pub mod popup;
pub mod traits;
pub mod workflow;
