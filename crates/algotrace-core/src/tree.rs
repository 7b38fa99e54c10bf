//! Binary search tree with traced insert, search, delete and traversals
//!
//! Keys are unique. Every traced step carries the tree's preorder sequence,
//! which is enough to rebuild its exact shape, plus the values accumulated
//! by the operation so far.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::bail_unsupported;
use crate::error::{Result, TraceError};
use crate::trace::{StepKind, StepLog, StepRecorder, TraceStep, TraceValue};

type Subtree<T> = Option<Box<TreeNode<T>>>;

struct TreeNode<T> {
    value: T,
    left: Subtree<T>,
    right: Subtree<T>,
}

impl<T> TreeNode<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn of(ordering: Ordering) -> Option<Side> {
        match ordering {
            Ordering::Less => Some(Side::Left),
            Ordering::Greater => Some(Side::Right),
            Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Structural case a deletion fell into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteCase {
    Leaf,
    SingleChild,
    /// Replaced by the inorder successor
    TwoChildren,
}

impl fmt::Display for DeleteCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteCase::Leaf => f.write_str("leaf"),
            DeleteCase::SingleChild => f.write_str("single_child"),
            DeleteCase::TwoChildren => f.write_str("two_children"),
        }
    }
}

/// Depth-first visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeOrder {
    Inorder,
    Preorder,
    Postorder,
}

impl TreeOrder {
    pub const ALL: [TreeOrder; 3] = [TreeOrder::Inorder, TreeOrder::Preorder, TreeOrder::Postorder];

    pub fn name(self) -> &'static str {
        match self {
            TreeOrder::Inorder => "inorder",
            TreeOrder::Preorder => "preorder",
            TreeOrder::Postorder => "postorder",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            TreeOrder::Inorder => "left, root, right",
            TreeOrder::Preorder => "root, left, right",
            TreeOrder::Postorder => "left, right, root",
        }
    }
}

impl fmt::Display for TreeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TreeOrder {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        match TreeOrder::ALL.into_iter().find(|order| order.name() == wanted) {
            Some(order) => Ok(order),
            None => bail_unsupported!("tree order", s, "inorder, preorder, postorder"),
        }
    }
}

/// Values compared on the way down plus whether the key was there
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPath<T> {
    pub path: Vec<T>,
    pub found: bool,
}

pub struct BinarySearchTree<T> {
    root: Subtree<T>,
    len: usize,
}

impl<T> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels; an empty tree has height 0
    pub fn height(&self) -> usize {
        let mut level: Vec<&TreeNode<T>> = self.root.as_deref().into_iter().collect();
        let mut height = 0;
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    fn inorder_nodes(&self) -> Vec<&TreeNode<T>> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                out.push(node);
                current = node.right.as_deref();
            }
        }
        out
    }

    fn preorder_nodes(&self) -> Vec<&TreeNode<T>> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&TreeNode<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    fn postorder_nodes(&self) -> Vec<&TreeNode<T>> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&TreeNode<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        out.reverse();
        out
    }

    fn nodes(&self, order: TreeOrder) -> Vec<&TreeNode<T>> {
        match order {
            TreeOrder::Inorder => self.inorder_nodes(),
            TreeOrder::Preorder => self.preorder_nodes(),
            TreeOrder::Postorder => self.postorder_nodes(),
        }
    }

    /// Follow `sides` from the root and return that slot
    fn slot_mut(&mut self, sides: &[Side]) -> Option<&mut Subtree<T>> {
        let mut slot = &mut self.root;
        for side in sides {
            slot = match slot {
                Some(node) => match side {
                    Side::Left => &mut node.left,
                    Side::Right => &mut node.right,
                },
                None => return None,
            };
        }
        Some(slot)
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Comparisons made walking down towards `value`, as (node, side taken)
    fn descend(&self, value: &T) -> Vec<(&T, Option<Side>)> {
        let mut steps = Vec::new();
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            let side = Side::of(value.cmp(&node.value));
            steps.push((&node.value, side));
            current = match side {
                Some(Side::Left) => node.left.as_deref(),
                Some(Side::Right) => node.right.as_deref(),
                None => None,
            };
        }
        steps
    }

    pub fn contains(&self, value: &T) -> bool {
        self.descend(value)
            .last()
            .is_some_and(|(_, side)| side.is_none())
    }

    /// Insert a new key; an existing key is rejected and the tree is unchanged
    pub fn insert(&mut self, value: T) -> Result<()>
    where
        T: fmt::Display,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(TraceError::already_exists("key", &value)),
            };
        }
        *slot = Some(TreeNode::leaf(value));
        self.len += 1;
        Ok(())
    }

    /// Remove `value`; returns the case applied, or `None` if absent
    fn remove(&mut self, value: &T) -> Option<DeleteCase> {
        let path = self.descend(value);
        if !path.last().is_some_and(|(_, side)| side.is_none()) {
            return None;
        }
        let sides: Vec<Side> = path.iter().filter_map(|(_, side)| *side).collect();

        let slot = self.slot_mut(&sides)?;
        let mut node = slot.take()?;
        let case = match (node.left.take(), node.right.take()) {
            (None, None) => DeleteCase::Leaf,
            (Some(child), None) | (None, Some(child)) => {
                *slot = Some(child);
                DeleteCase::SingleChild
            }
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                let successor = take_min(&mut right)?;
                node.value = successor;
                node.left = Some(left);
                node.right = right;
                *slot = Some(node);
                DeleteCase::TwoChildren
            }
        };
        self.len -= 1;
        Some(case)
    }

    pub fn delete(&mut self, value: &T) -> bool {
        self.remove(value).is_some()
    }
}

/// Unlink the leftmost node of `subtree` and return its value
fn take_min<T>(subtree: &mut Subtree<T>) -> Option<T> {
    let mut depth = 0;
    let mut current = subtree.as_deref();
    while let Some(left) = current.and_then(|node| node.left.as_deref()) {
        depth += 1;
        current = Some(left);
    }

    let mut slot = subtree;
    for _ in 0..depth {
        slot = match slot {
            Some(node) => &mut node.left,
            None => return None,
        };
    }
    let node = slot.take()?;
    let TreeNode { value, right, .. } = *node;
    *slot = right;
    Some(value)
}

impl<T: Clone> BinarySearchTree<T> {
    pub fn inorder(&self) -> Vec<T> {
        self.traverse(TreeOrder::Inorder)
    }

    pub fn preorder(&self) -> Vec<T> {
        self.traverse(TreeOrder::Preorder)
    }

    pub fn postorder(&self) -> Vec<T> {
        self.traverse(TreeOrder::Postorder)
    }

    pub fn traverse(&self, order: TreeOrder) -> Vec<T> {
        self.nodes(order)
            .into_iter()
            .map(|node| node.value.clone())
            .collect()
    }
}

impl<T: Ord + Clone + fmt::Display> BinarySearchTree<T> {
    /// Build by inserting `values` in order
    pub fn from_values(values: &[T]) -> Result<Self> {
        let mut tree = BinarySearchTree::new();
        for value in values {
            tree.insert(value.clone())?;
        }
        Ok(tree)
    }

    pub fn search(&self, value: &T) -> SearchPath<T> {
        let steps = self.descend(value);
        SearchPath {
            found: steps.last().is_some_and(|(_, side)| side.is_none()),
            path: steps.into_iter().map(|(v, _)| v.clone()).collect(),
        }
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: Ord + Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        // Re-inserting the preorder sequence rebuilds the same shape
        let mut tree = BinarySearchTree::new();
        for node in self.preorder_nodes() {
            let mut slot = &mut tree.root;
            while let Some(existing) = slot {
                slot = if node.value < existing.value {
                    &mut existing.left
                } else {
                    &mut existing.right
                };
            }
            *slot = Some(TreeNode::leaf(node.value.clone()));
        }
        tree.len = self.len;
        tree
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.preorder_nodes().into_iter().map(|node| &node.value))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeEvent<T> {
    Start,
    /// `value` compared against `node`; `next` is the side taken, absent on a match
    Compare {
        value: T,
        node: T,
        #[serde(skip_serializing_if = "Option::is_none")]
        next: Option<Side>,
    },
    Visit {
        value: T,
    },
    Found {
        value: T,
    },
    NotFound {
        value: T,
    },
    Insert {
        value: T,
        parent: Option<T>,
        side: Option<Side>,
    },
    Delete {
        value: T,
        case: DeleteCase,
        successor: Option<T>,
    },
    Complete,
}

impl<T> TreeEvent<T> {
    pub fn kind(&self) -> StepKind {
        match self {
            TreeEvent::Start => StepKind::Start,
            TreeEvent::Compare { .. } => StepKind::Compare,
            TreeEvent::Visit { .. } => StepKind::Visit,
            TreeEvent::Found { .. } => StepKind::Found,
            TreeEvent::NotFound { .. } => StepKind::NotFound,
            TreeEvent::Insert { .. } => StepKind::Insert,
            TreeEvent::Delete { .. } => StepKind::Delete,
            TreeEvent::Complete => StepKind::Complete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeStep<T> {
    #[serde(flatten)]
    pub event: TreeEvent<T>,
    /// Values accumulated so far: the search path or the traversal output
    pub sequence: Vec<T>,
    pub highlighted: Option<T>,
    /// Preorder keys of the tree after this step
    pub shape: Vec<T>,
    pub message: String,
}

impl<T> TraceStep for TreeStep<T> {
    fn kind(&self) -> StepKind {
        self.event.kind()
    }

    fn message(&self) -> &str {
        &self.message
    }
}

struct TreeTrace<T> {
    sequence: Vec<T>,
    recorder: StepRecorder<TreeStep<T>>,
}

impl<T: TraceValue> TreeTrace<T> {
    fn new() -> Self {
        Self {
            sequence: Vec::new(),
            recorder: StepRecorder::new(),
        }
    }

    fn emit(
        &mut self,
        tree: &BinarySearchTree<T>,
        event: TreeEvent<T>,
        highlighted: Option<T>,
        message: String,
    ) {
        self.recorder.push(TreeStep {
            event,
            sequence: self.sequence.clone(),
            highlighted,
            shape: tree.preorder(),
            message,
        });
    }

    /// Record the walk from the root towards `value`
    fn descend(&mut self, tree: &BinarySearchTree<T>, value: &T) -> Option<(T, Side)> {
        let mut last = None;
        for (node, next) in tree.descend(value) {
            self.sequence.push(node.clone());
            let message = match next {
                Some(Side::Left) => format!("{} < {}, going left", value, node),
                Some(Side::Right) => format!("{} > {}, going right", value, node),
                None => format!("{} = {}", value, node),
            };
            self.emit(
                tree,
                TreeEvent::Compare {
                    value: value.clone(),
                    node: node.clone(),
                    next,
                },
                Some(node.clone()),
                message,
            );
            last = next.map(|side| (node.clone(), side));
        }
        last
    }

    fn finish(mut self, tree: &BinarySearchTree<T>, operation: &str) -> Result<StepLog<TreeStep<T>>> {
        self.emit(
            tree,
            TreeEvent::Complete,
            None,
            format!("{} completed", operation),
        );
        let steps = self.recorder.finish()?;
        tracing::debug!(
            operation,
            keys = tree.len(),
            height = tree.height(),
            steps = steps.len(),
            "tree_trace_complete"
        );
        Ok(steps)
    }
}

impl<T: TraceValue> BinarySearchTree<T> {
    /// Walk down to the empty slot for `value` and attach a new leaf
    pub fn insert_traced(&mut self, value: T) -> Result<StepLog<TreeStep<T>>> {
        if self.contains(&value) {
            return Err(TraceError::already_exists("key", &value));
        }

        let mut trace = TreeTrace::new();
        trace.emit(self, TreeEvent::Start, None, format!("Inserting {}", value));
        let parent = trace.descend(self, &value);
        self.insert(value.clone())?;

        let message = match &parent {
            Some((parent, side)) => format!("Inserted {} as the {} child of {}", value, side, parent),
            None => format!("Inserted {} as the root", value),
        };
        let (parent, side) = parent.map_or((None, None), |(p, s)| (Some(p), Some(s)));
        trace.emit(
            self,
            TreeEvent::Insert {
                value: value.clone(),
                parent,
                side,
            },
            Some(value),
            message,
        );
        trace.finish(self, "Insert")
    }

    pub fn search_traced(&self, value: &T) -> Result<StepLog<TreeStep<T>>> {
        let mut trace = TreeTrace::new();
        trace.emit(self, TreeEvent::Start, None, format!("Searching for {}", value));
        trace.descend(self, value);

        if self.contains(value) {
            trace.emit(
                self,
                TreeEvent::Found {
                    value: value.clone(),
                },
                Some(value.clone()),
                format!("Found {}", value),
            );
        } else {
            trace.emit(
                self,
                TreeEvent::NotFound {
                    value: value.clone(),
                },
                None,
                format!("{} is not in the tree", value),
            );
        }
        trace.finish(self, "Search")
    }

    pub fn delete_traced(&mut self, value: &T) -> Result<StepLog<TreeStep<T>>> {
        let mut trace = TreeTrace::new();
        trace.emit(self, TreeEvent::Start, None, format!("Deleting {}", value));
        trace.descend(self, value);

        if !self.contains(value) {
            trace.emit(
                self,
                TreeEvent::NotFound {
                    value: value.clone(),
                },
                None,
                format!("{} is not in the tree; nothing deleted", value),
            );
            return trace.finish(self, "Delete");
        }

        trace.emit(
            self,
            TreeEvent::Found {
                value: value.clone(),
            },
            Some(value.clone()),
            format!("Found {}", value),
        );

        let successor = self.successor_walk(value);
        for (i, node) in successor.iter().enumerate() {
            let message = if i == 0 {
                format!("Looking for the inorder successor in the right subtree: {}", node)
            } else {
                format!("Moving left to {}", node)
            };
            trace.emit(
                self,
                TreeEvent::Visit {
                    value: node.clone(),
                },
                Some(node.clone()),
                message,
            );
        }

        let Some(case) = self.remove(value) else {
            return Err(TraceError::Invariant(format!(
                "key {} vanished during delete",
                value
            )));
        };
        let successor = match case {
            DeleteCase::TwoChildren => successor.last().cloned(),
            DeleteCase::Leaf | DeleteCase::SingleChild => None,
        };
        let message = match (&case, &successor) {
            (DeleteCase::TwoChildren, Some(s)) => {
                format!("Replaced {} with its inorder successor {}", value, s)
            }
            (DeleteCase::SingleChild, _) => {
                format!("Removed {} and linked its only child to its parent", value)
            }
            _ => format!("Removed leaf {}", value),
        };
        trace.emit(
            self,
            TreeEvent::Delete {
                value: value.clone(),
                case,
                successor: successor.clone(),
            },
            successor,
            message,
        );
        trace.finish(self, "Delete")
    }

    /// Right child then leftmost path, when the node has two children
    fn successor_walk(&self, value: &T) -> Vec<T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => break,
            };
        }
        let Some(node) = current else {
            return Vec::new();
        };
        if node.left.is_none() {
            return Vec::new();
        }
        let mut walk = Vec::new();
        let mut next = node.right.as_deref();
        while let Some(step) = next {
            walk.push(step.value.clone());
            next = step.left.as_deref();
        }
        walk
    }

    /// Emit one visit per node in `order`, accumulating the output
    pub fn traverse_traced(&self, order: TreeOrder) -> Result<StepLog<TreeStep<T>>> {
        let mut trace = TreeTrace::new();
        trace.emit(
            self,
            TreeEvent::Start,
            None,
            format!("Starting {} traversal ({})", order, order.describe()),
        );
        for node in self.nodes(order) {
            trace.sequence.push(node.value.clone());
            trace.emit(
                self,
                TreeEvent::Visit {
                    value: node.value.clone(),
                },
                Some(node.value.clone()),
                format!("Visiting {}", node.value),
            );
        }
        let joined = trace
            .sequence
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        trace.finish(self, &format!("{} traversal: [{}]", order, joined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> BinarySearchTree<i64> {
        BinarySearchTree::from_values(&[50, 30, 70, 20, 40, 60, 80]).unwrap()
    }

    #[test]
    fn test_traversals() {
        let tree = sample();
        assert_eq!(tree.inorder(), vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(tree.preorder(), vec![50, 30, 20, 40, 70, 60, 80]);
        assert_eq!(tree.postorder(), vec![20, 40, 30, 60, 80, 70, 50]);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.min(), Some(&20));
        assert_eq!(tree.max(), Some(&80));
    }

    #[test]
    fn test_empty_tree() {
        let tree = BinarySearchTree::<i64>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.min(), None);
        assert!(tree.inorder().is_empty());
        assert!(!tree.search(&1).found);
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut tree = sample();
        let err = tree.insert(40).unwrap_err();
        assert!(matches!(err, TraceError::AlreadyExists { .. }));
        assert_eq!(tree.len(), 7);

        let err = BinarySearchTree::from_values(&[1, 2, 1]).unwrap_err();
        assert!(matches!(err, TraceError::AlreadyExists { .. }));
    }

    #[test]
    fn test_search_path() {
        let tree = sample();
        assert_eq!(
            tree.search(&60),
            SearchPath {
                path: vec![50, 70, 60],
                found: true
            }
        );
        assert_eq!(
            tree.search(&65),
            SearchPath {
                path: vec![50, 70, 60],
                found: false
            }
        );
    }

    #[test]
    fn test_delete_two_children_uses_successor() {
        let mut tree = sample();
        assert!(tree.delete(&50));
        assert_eq!(tree.inorder(), vec![20, 30, 40, 60, 70, 80]);
        assert_eq!(tree.preorder(), vec![60, 30, 20, 40, 70, 80]);
        assert!(!tree.contains(&50));
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_delete_leaf_and_single_child() {
        let mut tree = sample();
        assert_eq!(tree.remove(&20), Some(DeleteCase::Leaf));
        assert_eq!(tree.remove(&30), Some(DeleteCase::SingleChild));
        assert_eq!(tree.preorder(), vec![50, 40, 70, 60, 80]);
        assert_eq!(tree.remove(&99), None);
        assert!(!tree.delete(&99));
    }

    #[test]
    fn test_successor_with_right_subtree() {
        // 70's successor 75 has a right child that must be kept
        let mut tree = BinarySearchTree::from_values(&[50, 70, 60, 90, 75, 80]).unwrap();
        assert_eq!(tree.remove(&70), Some(DeleteCase::TwoChildren));
        assert_eq!(tree.preorder(), vec![50, 75, 60, 90, 80]);
    }

    #[test]
    fn test_insert_traced() {
        let mut tree = sample();
        let steps = tree.insert_traced(65).unwrap();

        use StepKind::*;
        assert_eq!(steps.kinds(), vec![Start, Compare, Compare, Compare, Insert, Complete]);
        let insert = steps.get(4).unwrap();
        assert_eq!(
            insert.event,
            TreeEvent::Insert {
                value: 65,
                parent: Some(60),
                side: Some(Side::Right)
            }
        );
        assert_eq!(insert.sequence, vec![50, 70, 60]);
        assert_eq!(insert.shape, vec![50, 30, 20, 40, 70, 60, 65, 80]);
        assert_eq!(insert.message, "Inserted 65 as the right child of 60");

        let mut empty = BinarySearchTree::new();
        let steps = empty.insert_traced(1).unwrap();
        assert_eq!(steps.kinds(), vec![Start, Insert, Complete]);
    }

    #[test]
    fn test_insert_traced_rejects_duplicate_before_tracing() {
        let mut tree = sample();
        assert!(tree.insert_traced(30).is_err());
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_search_traced() {
        let tree = sample();

        use StepKind::*;
        let hit = tree.search_traced(&40).unwrap();
        assert_eq!(hit.kinds(), vec![Start, Compare, Compare, Compare, Found, Complete]);
        assert_eq!(hit.get(1).unwrap().message, "40 < 50, going left");
        assert_eq!(hit.get(3).unwrap().sequence, vec![50, 30, 40]);

        let miss = tree.search_traced(&45).unwrap();
        assert_eq!(miss.count(NotFound), 1);
    }

    #[test]
    fn test_delete_traced_two_children() {
        let mut tree = sample();
        let steps = tree.delete_traced(&50).unwrap();

        use StepKind::*;
        assert_eq!(steps.kinds(), vec![Start, Compare, Found, Visit, Visit, Delete, Complete]);
        let delete = steps.get(5).unwrap();
        assert_eq!(
            delete.event,
            TreeEvent::Delete {
                value: 50,
                case: DeleteCase::TwoChildren,
                successor: Some(60)
            }
        );
        assert_eq!(delete.shape, vec![60, 30, 20, 40, 70, 80]);
        assert_eq!(tree.inorder(), vec![20, 30, 40, 60, 70, 80]);
    }

    #[test]
    fn test_delete_traced_leaf_and_missing() {
        let mut tree = sample();
        let steps = tree.delete_traced(&20).unwrap();
        assert_eq!(
            steps.get(steps.len() - 2).unwrap().event,
            TreeEvent::Delete {
                value: 20,
                case: DeleteCase::Leaf,
                successor: None
            }
        );

        let steps = tree.delete_traced(&99).unwrap();
        assert_eq!(steps.count(StepKind::NotFound), 1);
        assert_eq!(steps.count(StepKind::Delete), 0);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn test_traverse_traced_accumulates() {
        let tree = sample();
        let steps = tree.traverse_traced(TreeOrder::Postorder).unwrap();
        assert_eq!(steps.count(StepKind::Visit), 7);
        let last_visit = steps.get(steps.len() - 2).unwrap();
        assert_eq!(last_visit.sequence, vec![20, 40, 30, 60, 80, 70, 50]);
        assert_eq!(last_visit.highlighted, Some(50));
        assert_eq!(
            steps.last().unwrap().message,
            "postorder traversal: [20, 40, 30, 60, 80, 70, 50] completed"
        );
    }

    #[test]
    fn test_tree_order_from_str() {
        assert_eq!("Preorder".parse::<TreeOrder>().unwrap(), TreeOrder::Preorder);
        let err = "levelorder".parse::<TreeOrder>().unwrap_err();
        assert!(matches!(err, TraceError::Unsupported { .. }));
    }

    #[test]
    fn test_clone_keeps_shape() {
        let tree = sample();
        let copy = tree.clone();
        assert_eq!(copy.preorder(), tree.preorder());
        assert_eq!(copy.len(), tree.len());
    }

    #[test]
    fn test_degenerate_tree_is_handled_iteratively() {
        let values: Vec<u32> = (0..5_000).collect();
        let mut tree = BinarySearchTree::from_values(&values).unwrap();
        assert_eq!(tree.height(), 5_000);
        assert!(tree.delete(&4_999));
        assert_eq!(tree.max(), Some(&4_998));
    }

    proptest! {
        #[test]
        fn prop_inorder_is_sorted_set(
            values in prop::collection::btree_set(-100i64..100, 0..40),
            removals in prop::collection::vec(-100i64..100, 0..20),
        ) {
            let mut insert_order: Vec<i64> = values.iter().copied().collect();
            // scramble deterministically so the tree is not degenerate
            insert_order.sort_by_key(|v| (v.wrapping_mul(7919)).rem_euclid(101));
            let mut tree = BinarySearchTree::from_values(&insert_order).unwrap();
            let mut model = values.clone();

            for value in removals {
                prop_assert_eq!(tree.delete(&value), model.remove(&value));
                prop_assert_eq!(tree.inorder(), model.iter().copied().collect::<Vec<_>>());
                prop_assert_eq!(tree.len(), model.len());
            }
        }
    }
}
