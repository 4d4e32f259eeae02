//! Popup host abstraction.

use crate::domain::LayerKind;

/// The view's popup widget.
///
/// The host owns templating and display; the workflow only replaces the
/// content string of a layer's popup. Content may embed generated markup
/// (see [`crate::popup::city_table`]). Title templates with field
/// placeholders such as `{areaname}` stay host-side configuration
/// ([`crate::config::CITY_POPUP_TITLE`]).
pub trait PopupHost: Send + Sync {
    fn set_content(&self, layer: LayerKind, content: String);
}
