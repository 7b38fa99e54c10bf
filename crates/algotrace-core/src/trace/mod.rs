//! Step log protocol shared by every engine
//!
//! An engine run produces a finite, ordered [`StepLog`] whose last step is
//! always [`StepKind::Complete`]. Every step carries a full snapshot of the
//! state it describes, so a consumer never needs history beyond the step it
//! is currently showing.

pub mod log;
pub mod player;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TraceError;

pub use log::{StepLog, StepRecorder};
pub use player::Player;

/// Closed set of step tags emitted across all engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Start,
    SelectKey,
    Compare,
    Shift,
    Insert,
    IterationComplete,
    Complete,
    Divide,
    MergeStart,
    Copy,
    MergeComplete,
    Subarray,
    PivotSelect,
    Swap,
    PivotPlace,
    Visit,
    ActivateEdge,
    Relax,
    PathFound,
    NoPath,
    Found,
    NotFound,
    Delete,
    Reverse,
}

impl StepKind {
    pub const ALL: [StepKind; 24] = [
        StepKind::Start,
        StepKind::SelectKey,
        StepKind::Compare,
        StepKind::Shift,
        StepKind::Insert,
        StepKind::IterationComplete,
        StepKind::Complete,
        StepKind::Divide,
        StepKind::MergeStart,
        StepKind::Copy,
        StepKind::MergeComplete,
        StepKind::Subarray,
        StepKind::PivotSelect,
        StepKind::Swap,
        StepKind::PivotPlace,
        StepKind::Visit,
        StepKind::ActivateEdge,
        StepKind::Relax,
        StepKind::PathFound,
        StepKind::NoPath,
        StepKind::Found,
        StepKind::NotFound,
        StepKind::Delete,
        StepKind::Reverse,
    ];

    /// The snake_case tag used on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Start => "start",
            StepKind::SelectKey => "select_key",
            StepKind::Compare => "compare",
            StepKind::Shift => "shift",
            StepKind::Insert => "insert",
            StepKind::IterationComplete => "iteration_complete",
            StepKind::Complete => "complete",
            StepKind::Divide => "divide",
            StepKind::MergeStart => "merge_start",
            StepKind::Copy => "copy",
            StepKind::MergeComplete => "merge_complete",
            StepKind::Subarray => "subarray",
            StepKind::PivotSelect => "pivot_select",
            StepKind::Swap => "swap",
            StepKind::PivotPlace => "pivot_place",
            StepKind::Visit => "visit",
            StepKind::ActivateEdge => "activate_edge",
            StepKind::Relax => "relax",
            StepKind::PathFound => "path_found",
            StepKind::NoPath => "no_path",
            StepKind::Found => "found",
            StepKind::NotFound => "not_found",
            StepKind::Delete => "delete",
            StepKind::Reverse => "reverse",
        }
    }

    /// Only `complete` ends a log
    pub fn is_terminal(self) -> bool {
        self == StepKind::Complete
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepKind {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TraceError::invalid_value("step kind", s))
    }
}

/// Values the sorting, list and tree engines can trace
pub trait TraceValue: Ord + Clone + fmt::Display + fmt::Debug {}

impl<T: Ord + Clone + fmt::Display + fmt::Debug> TraceValue for T {}

/// Common view of a step, independent of the engine that produced it
pub trait TraceStep {
    /// Tag identifying the kind of event
    fn kind(&self) -> StepKind;

    /// Human-readable description of the event
    fn message(&self) -> &str;
}
