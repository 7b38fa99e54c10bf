//! Singly linked list with traced search, insert, delete and reverse
//!
//! Each traced operation records one step per node it walks past. Every step
//! carries the whole list as it stands at that moment plus the index being
//! looked at.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, TraceError};
use crate::trace::{StepKind, StepLog, StepRecorder, TraceStep, TraceValue};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let tail = self.link_at(self.len);
        *tail = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Insert so that `value` ends up at `position` (0 = head, len = tail)
    pub fn insert_at(&mut self, position: usize, value: T) -> Result<()> {
        if position > self.len {
            return Err(TraceError::invalid_value(
                "position",
                format!("{} (list has {} nodes)", position, self.len),
            ));
        }
        let link = self.link_at(position);
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Remove and return the value at `position`
    pub fn delete_at(&mut self, position: usize) -> Result<T> {
        if position >= self.len {
            return Err(TraceError::invalid_value(
                "position",
                format!("{} (list has {} nodes)", position, self.len),
            ));
        }
        let link = self.link_at(position);
        let Some(node) = link.take() else {
            return Err(TraceError::Invariant(format!(
                "list shorter than its length at {}",
                position
            )));
        };
        let Node { value, next } = *node;
        *link = next;
        self.len -= 1;
        Ok(value)
    }

    /// Reverse the links in place
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    /// The link slot that holds the node at `position`, or the tail slot
    fn link_at(&mut self, position: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        let mut remaining = position;
        while remaining > 0 {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
            remaining -= 1;
        }
        link
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Index of the first node holding `value`
    pub fn search(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Remove the first node holding `value`
    pub fn delete(&mut self, value: &T) -> bool {
        match self.search(value) {
            Some(position) => self.delete_at(position).is_ok(),
            None => false,
        }
    }
}

impl<T: Clone> LinkedList<T> {
    pub fn from_values(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = LinkedList::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        f.write_str("NULL")
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListEvent<T> {
    Start,
    Visit { index: usize, value: T },
    Found { index: usize, value: T },
    NotFound { value: T },
    Insert { index: usize, value: T },
    Delete { index: usize, value: T },
    Reverse,
    Complete,
}

impl<T> ListEvent<T> {
    pub fn kind(&self) -> StepKind {
        match self {
            ListEvent::Start => StepKind::Start,
            ListEvent::Visit { .. } => StepKind::Visit,
            ListEvent::Found { .. } => StepKind::Found,
            ListEvent::NotFound { .. } => StepKind::NotFound,
            ListEvent::Insert { .. } => StepKind::Insert,
            ListEvent::Delete { .. } => StepKind::Delete,
            ListEvent::Reverse => StepKind::Reverse,
            ListEvent::Complete => StepKind::Complete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListStep<T> {
    #[serde(flatten)]
    pub event: ListEvent<T>,
    /// Node values head to tail after this step
    pub nodes: Vec<T>,
    pub highlight: Option<usize>,
    pub message: String,
}

impl<T> TraceStep for ListStep<T> {
    fn kind(&self) -> StepKind {
        self.event.kind()
    }

    fn message(&self) -> &str {
        &self.message
    }
}

struct ListTrace<T> {
    recorder: StepRecorder<ListStep<T>>,
}

impl<T: TraceValue> ListTrace<T> {
    fn new() -> Self {
        Self {
            recorder: StepRecorder::new(),
        }
    }

    fn emit(
        &mut self,
        list: &LinkedList<T>,
        event: ListEvent<T>,
        highlight: Option<usize>,
        message: String,
    ) {
        self.recorder.push(ListStep {
            event,
            nodes: list.to_vec(),
            highlight,
            message,
        });
    }

    fn finish(mut self, list: &LinkedList<T>, operation: &str) -> Result<StepLog<ListStep<T>>> {
        self.emit(
            list,
            ListEvent::Complete,
            None,
            format!("{} completed: {}", operation, list),
        );
        let steps = self.recorder.finish()?;
        tracing::debug!(operation, nodes = list.len(), steps = steps.len(), "list_trace_complete");
        Ok(steps)
    }
}

impl<T: TraceValue> LinkedList<T> {
    /// Walk from the head until `value` is found or the list ends
    pub fn search_traced(&self, value: &T) -> Result<StepLog<ListStep<T>>> {
        let mut trace = ListTrace::new();
        trace.emit(
            self,
            ListEvent::Start,
            None,
            format!("Searching for {} from the head", value),
        );

        let mut found = None;
        for (index, current) in self.iter().enumerate() {
            trace.emit(
                self,
                ListEvent::Visit {
                    index,
                    value: current.clone(),
                },
                Some(index),
                format!("Checking node {} (value {})", index, current),
            );
            if current == value {
                found = Some(index);
                break;
            }
        }

        match found {
            Some(index) => trace.emit(
                self,
                ListEvent::Found {
                    index,
                    value: value.clone(),
                },
                Some(index),
                format!("Found {} at position {}", value, index),
            ),
            None => trace.emit(
                self,
                ListEvent::NotFound {
                    value: value.clone(),
                },
                None,
                format!("{} is not in the list", value),
            ),
        }
        trace.finish(self, "Search")
    }

    /// Walk to `position`, then link a new node there
    pub fn insert_traced(&mut self, position: usize, value: T) -> Result<StepLog<ListStep<T>>> {
        if position > self.len {
            return Err(TraceError::invalid_value(
                "position",
                format!("{} (list has {} nodes)", position, self.len),
            ));
        }

        let mut trace = ListTrace::new();
        trace.emit(
            self,
            ListEvent::Start,
            None,
            format!("Inserting {} at position {}", value, position),
        );
        let walked: Vec<T> = self.iter().take(position).cloned().collect();
        for (index, current) in walked.into_iter().enumerate() {
            let message = format!("Traversing node {} (value {})", index, current);
            trace.emit(
                self,
                ListEvent::Visit {
                    index,
                    value: current,
                },
                Some(index),
                message,
            );
        }

        self.insert_at(position, value.clone())?;
        let message = format!("Linked new node {} at position {}", value, position);
        trace.emit(
            self,
            ListEvent::Insert {
                index: position,
                value,
            },
            Some(position),
            message,
        );
        trace.finish(self, "Insert")
    }

    /// Find the first node holding `value` and unlink it
    pub fn delete_traced(&mut self, value: &T) -> Result<StepLog<ListStep<T>>> {
        let mut trace = ListTrace::new();
        trace.emit(
            self,
            ListEvent::Start,
            None,
            format!("Deleting {}", value),
        );

        let values = self.to_vec();
        let mut found = None;
        for (index, current) in values.into_iter().enumerate() {
            let hit = &current == value;
            let message = format!("Checking node {} (value {})", index, current);
            trace.emit(
                self,
                ListEvent::Visit {
                    index,
                    value: current,
                },
                Some(index),
                message,
            );
            if hit {
                found = Some(index);
                break;
            }
        }

        match found {
            Some(index) => {
                trace.emit(
                    self,
                    ListEvent::Found {
                        index,
                        value: value.clone(),
                    },
                    Some(index),
                    format!("Found {} at position {}", value, index),
                );
                let removed = self.delete_at(index)?;
                let message = format!("Unlinked node {} from position {}", removed, index);
                trace.emit(
                    self,
                    ListEvent::Delete {
                        index,
                        value: removed,
                    },
                    None,
                    message,
                );
            }
            None => trace.emit(
                self,
                ListEvent::NotFound {
                    value: value.clone(),
                },
                None,
                format!("{} is not in the list; nothing deleted", value),
            ),
        }
        trace.finish(self, "Delete")
    }

    /// Flip every next pointer, one node at a time
    pub fn reverse_traced(&mut self) -> Result<StepLog<ListStep<T>>> {
        let mut trace = ListTrace::new();
        trace.emit(self, ListEvent::Start, None, "Reversing the list".to_string());

        let values = self.to_vec();
        for (index, current) in values.into_iter().enumerate() {
            let message = format!("Pointing node {} (value {}) back at its predecessor", index, current);
            trace.emit(
                self,
                ListEvent::Visit {
                    index,
                    value: current,
                },
                Some(index),
                message,
            );
        }

        self.reverse();
        trace.emit(
            self,
            ListEvent::Reverse,
            None,
            "Head now points at the former tail".to_string(),
        );
        trace.finish(self, "Reverse")
    }
}
