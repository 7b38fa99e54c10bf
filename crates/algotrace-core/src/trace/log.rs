//! Append-only recording and the finished, immutable step log

use serde::Serialize;

use super::{Player, StepKind, TraceStep};
use crate::error::{Result, TraceError};

/// Finished, ordered sequence of steps ending with `complete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StepLog<S> {
    steps: Vec<S>,
}

impl<S> StepLog<S> {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&S> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }

    /// Cursor for stepping through the log
    pub fn player(&self) -> Player<'_, S> {
        Player::new(self)
    }
}

impl<S: TraceStep> StepLog<S> {
    /// Tags of every step in order
    pub fn kinds(&self) -> Vec<StepKind> {
        self.steps.iter().map(TraceStep::kind).collect()
    }

    /// Number of steps with the given tag
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind() == kind).count()
    }
}

impl<'a, S> IntoIterator for &'a StepLog<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Builder owned by a single engine run
#[derive(Debug)]
pub struct StepRecorder<S> {
    steps: Vec<S>,
}

impl<S> Default for StepRecorder<S> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<S: TraceStep> StepRecorder<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: S) {
        tracing::trace!(kind = %step.kind(), message = step.message(), "step");
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the log. The last step must be the only terminal one.
    pub fn finish(self) -> Result<StepLog<S>> {
        let Some(last) = self.steps.last() else {
            return Err(TraceError::Invariant("step log is empty".to_string()));
        };
        if !last.kind().is_terminal() {
            return Err(TraceError::Invariant(format!(
                "step log ends with '{}' instead of 'complete'",
                last.kind()
            )));
        }
        let early = self.steps[..self.steps.len() - 1]
            .iter()
            .position(|s| s.kind().is_terminal());
        if let Some(index) = early {
            return Err(TraceError::Invariant(format!(
                "terminal step at index {} is followed by more steps",
                index
            )));
        }
        Ok(StepLog { steps: self.steps })
    }
}
