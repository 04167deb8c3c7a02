use std::cmp::Ordering;
use std::collections::HashSet;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::sequence::verify_postorder;

/// Binary search tree node stored in the arena.
#[derive(Debug)]
pub struct BstNode {
    /// Key of this node
    pub value: i64,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Subtree with smaller keys
    pub left: Option<Index>,
    /// Subtree with greater keys
    pub right: Option<Index>,
}

impl BstNode {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-based binary search tree without duplicate keys.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
#[derive(Debug)]
pub struct BstArena {
    /// Arena storage for all tree nodes
    arena: Arena<BstNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for BstArena {
    fn default() -> Self {
        Self::new()
    }
}

impl BstArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Builds a tree by inserting `values` in order. Duplicates are skipped.
    pub fn from_values<I: IntoIterator<Item = i64>>(values: I) -> Self {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value);
        }
        tree
    }

    /// Rebuilds the unique tree whose post-order traversal is `sequence`.
    ///
    /// Reverse post-order visits a node, then its right subtree, then its left
    /// subtree. `path` holds the nodes that can still receive children; a value
    /// smaller than the top becomes the left child of the last larger node popped.
    #[instrument(level = "debug", skip(sequence), fields(len = sequence.len()))]
    pub fn from_postorder(sequence: &[i64]) -> DomainResult<Self> {
        verify_postorder(sequence)?;
        let mut tree = Self::new();
        let mut seen = HashSet::with_capacity(sequence.len());
        let mut path: Vec<Index> = Vec::new();

        for &value in sequence.iter().rev() {
            if !seen.insert(value) {
                return Err(DomainError::DuplicateValue(value));
            }
            let idx = tree.arena.insert(BstNode {
                value,
                parent: None,
                left: None,
                right: None,
            });

            let mut parent = path.last().copied();
            while let Some(&top) = path.last() {
                if tree.get_node(top).is_some_and(|node| node.value > value) {
                    parent = path.pop();
                } else {
                    break;
                }
            }
            match parent {
                Some(parent) => tree.attach(parent, idx, value),
                None => tree.root = Some(idx),
            }
            path.push(idx);
        }
        debug!("rebuilt tree with depth {}", tree.depth());
        Ok(tree)
    }

    fn attach(&mut self, parent: Index, child: Index, value: i64) {
        if let Some(node) = self.arena.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.arena.get_mut(parent) {
            if value < node.value {
                node.left = Some(child);
            } else {
                node.right = Some(child);
            }
        }
    }

    /// Inserts `value`, returning its index, or `None` if it is already present.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, value: i64) -> Option<Index> {
        let Some(mut current) = self.root else {
            let idx = self.arena.insert(BstNode {
                value,
                parent: None,
                left: None,
                right: None,
            });
            self.root = Some(idx);
            return Some(idx);
        };

        loop {
            let node = self.arena.get(current)?;
            let next = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return None,
            };
            match next {
                Some(child) => current = child,
                None => break,
            }
        }

        let idx = self.arena.insert(BstNode {
            value,
            parent: Some(current),
            left: None,
            right: None,
        });
        let parent = self.arena.get_mut(current)?;
        if value < parent.value {
            parent.left = Some(idx);
        } else {
            parent.right = Some(idx);
        }
        Some(idx)
    }

    pub fn contains(&self, value: i64) -> bool {
        let mut current = self.root;
        while let Some(node) = current.and_then(|idx| self.arena.get(idx)) {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn get_node(&self, idx: Index) -> Option<&BstNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    /// Keys in post-order: left subtree, right subtree, root.
    pub fn postorder(&self) -> Vec<i64> {
        self.iter_postorder().map(|(_, node)| node.value).collect()
    }

    /// Number of levels, 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = Vec::new();
        if let Some(root) = self.root {
            pending.push((root, 1));
        }
        while let Some((idx, level)) = pending.pop() {
            if let Some(node) = self.get_node(idx) {
                deepest = deepest.max(level);
                for child in [node.left, node.right].into_iter().flatten() {
                    pending.push((child, level + 1));
                }
            }
        }
        deepest
    }

    /// Keys of all leaf nodes, left to right. Empty trees return an empty vector.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_values(&self) -> Vec<i64> {
        self.iter_postorder()
            .filter(|(_, node)| node.is_leaf())
            .map(|(_, node)| node.value)
            .collect()
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a BstArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a BstArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a BstNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if visited {
                    return Some((current_idx, node));
                }
                self.stack.push((current_idx, true));
                // right first so the left subtree pops first
                for child in [node.right, node.left].into_iter().flatten() {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}
