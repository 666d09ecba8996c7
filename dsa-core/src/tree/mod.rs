pub mod traversal;

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::error::{DsaError, Result};

pub use traversal::Iter;

/// Ordered set of distinct elements
pub trait BinarySearchTree<T: Ord> {
    /// Insert an element, returning `false` if an equal element is already stored
    fn insert(&mut self, element: T) -> bool;

    fn contains(&self, element: &T) -> bool;

    fn size(&self) -> usize;

    /// Number of edges on the longest root-to-leaf path
    fn depth(&self) -> usize;

    /// Visit every element in ascending order
    fn in_order_traversal<F>(&self, visit: F)
    where
        F: FnMut(&T);
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Unbalanced binary search tree over linked nodes.
///
/// Lookups and inserts walk down from the root in O(h). Nothing rebalances
/// the tree, so inserting sorted input degrades it into a chain of height n.
/// Operations whose natural form is recursive (`depth`, `in_order_traversal`)
/// come with an explicit-stack twin for trees too deep to recurse over.
pub struct RecursiveBinarySearchTree<T> {
    root: Link<T>,
    size: usize,
}

impl<T: Ord> RecursiveBinarySearchTree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Build a tree by inserting every element in order
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        tree.extend(elements);
        tree
    }

    /// Insert an element that may be absent.
    ///
    /// `None` fails with [`DsaError::InvalidArgument`] before the tree is touched.
    pub fn try_insert(&mut self, element: Option<T>) -> Result<bool> {
        let element = element.ok_or_else(|| {
            DsaError::InvalidArgument("cannot insert an absent element".to_string())
        })?;
        Ok(self.insert(element))
    }

    pub fn try_contains(&self, element: Option<&T>) -> Result<bool> {
        let element = element.ok_or_else(|| {
            DsaError::InvalidArgument("cannot look up an absent element".to_string())
        })?;
        Ok(self.contains(element))
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Same result as [`BinarySearchTree::depth`] without recursing
    pub fn depth_iterative(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node<T>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, 0));
        }

        while let Some((node, edges)) = pending.pop() {
            deepest = deepest.max(edges);
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                pending.push((child, edges + 1));
            }
        }

        deepest
    }

    /// In-order traversal driven by an explicit stack instead of the call stack
    pub fn in_order_traversal_iterative<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for value in self.iter() {
            visit(value);
        }
    }

    /// Ascending iterator over the stored elements
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }
}

impl<T: Ord> BinarySearchTree<T> for RecursiveBinarySearchTree<T> {
    fn insert(&mut self, element: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match element.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    trace!("Ignored duplicate insert at tree size {}", self.size);
                    return false;
                },
            };
        }

        *link = Some(Node::leaf(element));
        self.size += 1;
        true
    }

    fn contains(&self, element: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match element.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    fn size(&self) -> usize {
        self.size
    }

    fn depth(&self) -> usize {
        depth_of(self.root.as_deref())
    }

    fn in_order_traversal<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        visit_in_order(self.root.as_deref(), &mut visit);
    }
}

fn depth_of<T>(node: Option<&Node<T>>) -> usize {
    match node {
        None => 0,
        Some(node) if node.is_leaf() => 0,
        Some(node) => {
            1 + depth_of(node.left.as_deref()).max(depth_of(node.right.as_deref()))
        },
    }
}

fn visit_in_order<T, F>(node: Option<&Node<T>>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(node) = node {
        visit_in_order(node.left.as_deref(), visit);
        visit(&node.value);
        visit_in_order(node.right.as_deref(), visit);
    }
}

impl<T> Drop for RecursiveBinarySearchTree<T> {
    fn drop(&mut self) {
        // Detach children before each node drops so a degenerate chain cannot overflow
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: Ord> Default for RecursiveBinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for RecursiveBinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> FromIterator<T> for RecursiveBinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<'a, T: Ord> IntoIterator for &'a RecursiveBinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for RecursiveBinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tests;
