//! Sorting engines
//!
//! Each engine works on its own copy of the caller's slice and returns the
//! full step log, the comparison/swap counters and the sorted array.
//! - [`InsertionSort`]: shifts larger predecessors right, one step per shift
//! - [`MergeSort`]: top-down, stable (`<=` comparator)
//! - [`QuickSort`]: Lomuto partition, last element as pivot

pub mod insertion;
pub mod merge;
pub mod quick;

use serde::Serialize;

use crate::error::Result;
use crate::trace::{StepKind, StepLog, StepRecorder, TraceStep, TraceValue};

pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;

/// Event payload of a sorting step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SortEvent<T> {
    Start,
    SelectKey {
        key_index: usize,
        key: T,
    },
    /// `position` is set by merge sort: the slot the winner was written to
    Compare {
        comparing: [usize; 2],
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<T>,
        #[serde(skip_serializing_if = "Option::is_none")]
        position: Option<usize>,
    },
    Shift {
        from: usize,
        to: usize,
    },
    Insert {
        position: usize,
        key: T,
    },
    IterationComplete {
        sorted_until: usize,
    },
    Divide {
        left: usize,
        mid: usize,
        right: usize,
    },
    MergeStart {
        left: usize,
        mid: usize,
        right: usize,
        left_run: Vec<T>,
        right_run: Vec<T>,
    },
    Copy {
        position: usize,
        value: T,
    },
    MergeComplete {
        left: usize,
        right: usize,
    },
    Subarray {
        low: usize,
        high: usize,
    },
    PivotSelect {
        pivot_index: usize,
        pivot: T,
    },
    Swap {
        swapping: [usize; 2],
    },
    PivotPlace {
        swapping: [usize; 2],
        pivot_final_index: usize,
    },
    Complete,
}

impl<T> SortEvent<T> {
    pub fn kind(&self) -> StepKind {
        match self {
            SortEvent::Start => StepKind::Start,
            SortEvent::SelectKey { .. } => StepKind::SelectKey,
            SortEvent::Compare { .. } => StepKind::Compare,
            SortEvent::Shift { .. } => StepKind::Shift,
            SortEvent::Insert { .. } => StepKind::Insert,
            SortEvent::IterationComplete { .. } => StepKind::IterationComplete,
            SortEvent::Divide { .. } => StepKind::Divide,
            SortEvent::MergeStart { .. } => StepKind::MergeStart,
            SortEvent::Copy { .. } => StepKind::Copy,
            SortEvent::MergeComplete { .. } => StepKind::MergeComplete,
            SortEvent::Subarray { .. } => StepKind::Subarray,
            SortEvent::PivotSelect { .. } => StepKind::PivotSelect,
            SortEvent::Swap { .. } => StepKind::Swap,
            SortEvent::PivotPlace { .. } => StepKind::PivotPlace,
            SortEvent::Complete => StepKind::Complete,
        }
    }
}

/// One sorting step: the event plus a snapshot of the whole array after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortStep<T> {
    #[serde(flatten)]
    pub event: SortEvent<T>,
    pub array: Vec<T>,
    pub message: String,
}

impl<T> TraceStep for SortStep<T> {
    fn kind(&self) -> StepKind {
        self.event.kind()
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Running counters for a sort
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
}

/// Everything a sort run hands back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOutcome<T> {
    pub algorithm: &'static str,
    pub steps: StepLog<SortStep<T>>,
    #[serde(flatten)]
    pub stats: SortStats,
    pub sorted_array: Vec<T>,
}

impl<T> SortOutcome<T> {
    pub fn comparisons(&self) -> u64 {
        self.stats.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.stats.swaps
    }
}

/// Working state of one sort invocation
pub(crate) struct SortRun<T> {
    pub(crate) array: Vec<T>,
    pub(crate) stats: SortStats,
    recorder: StepRecorder<SortStep<T>>,
}

impl<T: TraceValue> SortRun<T> {
    /// Copy the input and record the `start` step
    pub(crate) fn start(input: &[T], message: impl Into<String>) -> Self {
        let mut run = Self {
            array: input.to_vec(),
            stats: SortStats::default(),
            recorder: StepRecorder::new(),
        };
        run.emit(SortEvent::Start, message);
        run
    }

    pub(crate) fn emit(&mut self, event: SortEvent<T>, message: impl Into<String>) {
        self.recorder.push(SortStep {
            event,
            array: self.array.clone(),
            message: message.into(),
        });
    }

    /// Record the `complete` step and seal the log
    pub(crate) fn complete(
        mut self,
        algorithm: &'static str,
        message: impl Into<String>,
    ) -> Result<SortOutcome<T>> {
        self.emit(SortEvent::Complete, message);
        let steps = self.recorder.finish()?;
        tracing::debug!(
            algorithm,
            len = self.array.len(),
            steps = steps.len(),
            comparisons = self.stats.comparisons,
            swaps = self.stats.swaps,
            "sort_complete"
        );
        Ok(SortOutcome {
            algorithm,
            steps,
            stats: self.stats,
            sorted_array: self.array,
        })
    }
}
