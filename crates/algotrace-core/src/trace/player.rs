//! Cursor over a finished step log
//!
//! The player only tracks position. Pacing between steps belongs to
//! whoever drives it.

use super::StepLog;

/// Forward/backward cursor, positioned before the first step on creation
#[derive(Debug, Clone)]
pub struct Player<'a, S> {
    log: &'a StepLog<S>,
    cursor: Option<usize>,
}

impl<'a, S> Player<'a, S> {
    pub fn new(log: &'a StepLog<S>) -> Self {
        Self { log, cursor: None }
    }

    /// Index of the step currently shown, `None` before the first advance
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&'a S> {
        self.cursor.and_then(|i| self.log.get(i))
    }

    /// Move to the next step. Stays on the last step once reached.
    pub fn advance(&mut self) -> Option<&'a S> {
        let next = self.cursor.map_or(0, |i| i + 1);
        if next >= self.log.len() {
            return None;
        }
        self.cursor = Some(next);
        self.log.get(next)
    }

    /// Move to the previous step
    pub fn back(&mut self) -> Option<&'a S> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.log.get(i - 1)
            }
            _ => None,
        }
    }

    /// Jump to an absolute step index
    pub fn seek(&mut self, index: usize) -> Option<&'a S> {
        let step = self.log.get(index)?;
        self.cursor = Some(index);
        Some(step)
    }

    pub fn rewind(&mut self) {
        self.cursor = None;
    }

    pub fn is_finished(&self) -> bool {
        !self.log.is_empty() && self.cursor == Some(self.log.len() - 1)
    }

    /// Steps not yet shown
    pub fn remaining(&self) -> usize {
        match self.cursor {
            Some(i) => self.log.len() - i - 1,
            None => self.log.len(),
        }
    }
}

impl<'a, S> Iterator for Player<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }
}
