use std::fmt;

use tracing::trace;

use crate::error::{DsaError, Result};

/// Last-in, first-out container
pub trait Stack<T> {
    /// Push an element onto the top of the stack
    fn push(&mut self, element: T);

    /// Remove and return the top element, failing on an empty stack
    fn pop(&mut self) -> Result<T>;

    /// Number of elements in the stack
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

/// Stack backed by singly linked nodes.
///
/// The stack owns its head node and every node owns the next one, so the
/// whole chain is released together with the stack. `size` always equals the
/// number of nodes reachable from `head`.
pub struct LinkedStack<T> {
    head: Link<T>,
    size: usize,
}

impl<T> LinkedStack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            head: None,
            size: 0,
        }
    }

    /// Build a stack by pushing every element in order, so the last one ends up on top
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut stack = Self::new();
        stack.extend(elements);
        stack
    }

    /// Push an element that may be absent.
    ///
    /// `None` is rejected with [`DsaError::InvalidArgument`] and leaves the
    /// stack untouched.
    pub fn try_push(&mut self, element: Option<T>) -> Result<()> {
        let element = element.ok_or_else(|| {
            DsaError::InvalidArgument("cannot push an absent element".to_string())
        })?;
        self.push(element);
        Ok(())
    }

    /// Top element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Iterate from the top of the stack to the bottom
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, element: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { element, next }));
        self.size += 1;
    }

    fn pop(&mut self) -> Result<T> {
        let node = self
            .head
            .take()
            .ok_or_else(|| DsaError::EmptyStructure("cannot pop an empty stack".to_string()))?;
        let Node { element, next } = *node;
        self.head = next;
        self.size -= 1;
        Ok(element)
    }

    fn size(&self) -> usize {
        self.size
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        // Unlink node by node; the default recursive drop overflows on long chains
        let released = self.size;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        if released > 0 {
            trace!("Released {} stack nodes", released);
        }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`LinkedStack`], top first
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.element
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
