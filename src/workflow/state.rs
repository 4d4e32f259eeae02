//! Workflow state, click tokens, and outcomes.

use crate::domain::FeatureId;
use crate::traits::SpatialQuery;

/// Monotonic per-click token used to discard stale query completions.
///
/// Minted by the workflow at the start of each click; a completion whose
/// token no longer matches the latest click is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClickToken(pub(crate) u64);

impl ClickToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A city proximity query the caller still has to run.
///
/// Returned from the synchronous phase of a road click; feed the query to
/// the feature source, then hand the result back together with the token
/// via [`ClickWorkflow::apply_city_results`](super::ClickWorkflow::apply_city_results).
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuery {
    pub token: ClickToken,
    pub query: SpatialQuery,
}

/// The resting state of the selection after a click completes.
///
/// `NoneSelected` collapses into `Idle`: clicking empty space clears
/// everything and is indistinguishable from never having clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    RoadSelected { feature: FeatureId },
    CitySelected { feature: FeatureId },
}

/// What a single click produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// A road was hit; its highlight and the click marker are in place and
    /// the city proximity query is pending.
    RoadSelected {
        feature: FeatureId,
        pending: PendingQuery,
    },
    /// A city was hit (and no road); it is highlighted, nothing else.
    CitySelected { feature: FeatureId },
    /// Empty space; all artifacts were cleared.
    Cleared,
}
