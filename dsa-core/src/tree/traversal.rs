use super::Node;

/// In-order iterator over a binary search tree.
///
/// Keeps the path of not-yet-visited ancestors on a heap-allocated stack, so
/// memory grows with tree height but the call stack stays flat.
pub struct Iter<'a, T> {
    pending: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            pending: Vec::new(),
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.pending.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.descend_left(node.right.as_deref());
        Some(&node.value)
    }
}
