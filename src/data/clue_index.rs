//! The investigation notebook: an ordered, deduplicated set of clues
//!
//! Backed by an unbalanced binary search tree keyed on byte-wise
//! lexicographic order, exactly like the notebook of the classic console
//! version. Insertion recursion is O(distinct clues) deep, which is bounded
//! by the handful of clues a mansion can hold.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClueNode {
    clue: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

/// Ordered set of collected clue texts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClueIndex {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a clue. Empty clues are ignored, duplicates are ignored, and
    /// new entries become leaves; the tree is never rebalanced.
    pub fn insert(&mut self, clue: &str) {
        if clue.is_empty() {
            return;
        }
        insert_node(&mut self.root, clue, &mut self.len);
    }

    pub fn contains(&self, clue: &str) -> bool {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match clue.cmp(n.clue.as_str()) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Greater => n.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// In-order walk over the clues, ascending. The iterator borrows the
    /// index without touching it, so it can be restarted any number of
    /// times.
    pub fn iter(&self) -> ClueIter<'_> {
        ClueIter::new(self.root.as_deref())
    }
}

fn insert_node(node: &mut Option<Box<ClueNode>>, clue: &str, len: &mut usize) {
    match node {
        None => {
            *node = Some(Box::new(ClueNode {
                clue: clue.to_string(),
                left: None,
                right: None,
            }));
            *len += 1;
        }
        Some(n) => match clue.cmp(n.clue.as_str()) {
            Ordering::Less => insert_node(&mut n.left, clue, len),
            Ordering::Greater => insert_node(&mut n.right, clue, len),
            // Already filed; the notebook keeps one copy of each clue.
            Ordering::Equal => {}
        },
    }
}

/// Lazy in-order iterator over a [`ClueIndex`]
///
/// Keeps the left spine of the remaining subtree on an explicit stack, so
/// the walk costs no call-stack depth.
pub struct ClueIter<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> ClueIter<'a> {
    fn new(root: Option<&'a ClueNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for ClueIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.clue)
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = ClueIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
