//! Popup content generation for city proximity results.
//!
//! Output is a content string the popup host renders as markup: a header
//! stating the total count, then one table row per city with its name and
//! population. Zero results is a normal rendering with an empty table, not
//! an error.

use crate::domain::Feature;

/// Placeholder rendered for an absent or malformed attribute.
const MISSING_VALUE: &str = "—";

/// Build the popup content for a set of city features.
///
/// Input order is preserved; the output is deterministic.
pub fn city_table(features: &[Feature]) -> String {
    let mut content = format!("There are {} cities in total", features.len());
    content.push_str("<br><table>");
    for feature in features {
        let name = feature.name().unwrap_or(MISSING_VALUE);
        content.push_str("<tr><td>");
        content.push_str(name);
        content.push_str("</td><td>");
        content.push_str(&format_population(feature.population()));
        content.push_str("</td></tr>");
    }
    content.push_str("</table>");
    content
}

fn format_population(population: Option<f64>) -> String {
    match population {
        Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
            format!("{}", value as i64)
        }
        Some(value) => format!("{value}"),
        None => MISSING_VALUE.to_string(),
    }
}
