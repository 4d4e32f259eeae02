//! Value-to-size classification over a [`BreakpointTable`].
//!
//! The lookup is total: every input resolves to some bucket. A value equal
//! to a threshold falls into the *next* bucket (strict `<`), and values at
//! or above the largest threshold land in the open-ended overflow bucket.
//! Missing or non-numeric attribute values classify as below the first
//! threshold; that default is deliberate, so that features with no
//! population on record render at the smallest size rather than the
//! largest.

use serde_json::Value;

use crate::config::BreakpointTable;

impl BreakpointTable {
    /// Map a numeric value to a symbol size.
    ///
    /// Scans the stops in ascending threshold order and returns the size of
    /// the first stop whose threshold strictly exceeds `value`; if none
    /// does, returns the overflow size. NaN classifies into the first
    /// bucket.
    pub fn classify(&self, value: f64) -> f32 {
        if value.is_nan() {
            return self.first_size();
        }
        for stop in self.stops() {
            if value < stop.threshold {
                return stop.size;
            }
        }
        self.overflow_size()
    }

    /// Classify a raw attribute value as read off a feature.
    ///
    /// `None`, JSON null, and non-numeric values all resolve to the first
    /// bucket.
    pub fn classify_attribute(&self, value: Option<&Value>) -> f32 {
        match value.and_then(Value::as_f64) {
            Some(number) => self.classify(number),
            None => self.first_size(),
        }
    }
}
