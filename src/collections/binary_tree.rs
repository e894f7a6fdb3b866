//! A [binary search tree] with owned, heap-allocated nodes.
//!
//! [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree

use std::fmt;

use core::cmp::Ordering;
use core::marker::PhantomData;
use core::ptr;

/// A [binary search tree] with owned, heap-allocated nodes.
///
/// Values strictly less than a node go into its left subtree; values greater
/// than or equal to it go into the right subtree, so duplicates are kept.
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
pub struct BinaryTree<T> {
    /// Pointer to the root of the tree.
    root: *const Node<T>,
    /// Number of allocated nodes in the tree.
    len: usize,
    /// In order to tell the drop checker that we do own values of type `T`,
    /// and therefore may drop some `T`'s when we drop.
    _marker: PhantomData<T>,
}

pub(crate) struct Node<T> {
    /// Pointer to the left child.
    pub(crate) left: *const Node<T>,
    /// Pointer to the right child.
    pub(crate) right: *const Node<T>,
    /// Data the node owns.
    pub(crate) data: T,
}

impl<T> BinaryTree<T> {
    /// Creates a new, empty `BinaryTree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let tree: BinaryTree<i32> = BinaryTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            root: ptr::null(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Performs an in-order traversal, invoking `visit` on each value in
    /// sorted order (for a valid search tree).
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time; every node is visited exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut tree = BinaryTree::new();
    /// for value in [10, 5, 15] {
    ///     tree.insert(value);
    /// }
    ///
    /// let mut values = Vec::new();
    /// tree.in_order(|value| values.push(*value));
    /// assert_eq!(values, [5, 10, 15]);
    /// ```
    pub fn in_order<F: FnMut(&T)>(&self, mut visit: F) {
        unsafe { Self::in_order_node(self.root, &mut visit) }
    }

    /// Performs a pre-order traversal, invoking `visit` on each node's value
    /// before either of its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut tree = BinaryTree::new();
    /// for value in [10, 5, 15] {
    ///     tree.insert(value);
    /// }
    ///
    /// let mut values = Vec::new();
    /// tree.pre_order(|value| values.push(*value));
    /// assert_eq!(values, [10, 5, 15]);
    /// ```
    pub fn pre_order<F: FnMut(&T)>(&self, mut visit: F) {
        unsafe { Self::pre_order_node(self.root, &mut visit) }
    }

    /// Performs a post-order traversal, invoking `visit` on each node's
    /// value after both of its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut tree = BinaryTree::new();
    /// for value in [10, 5, 15] {
    ///     tree.insert(value);
    /// }
    ///
    /// let mut values = Vec::new();
    /// tree.post_order(|value| values.push(*value));
    /// assert_eq!(values, [5, 15, 10]);
    /// ```
    pub fn post_order<F: FnMut(&T)>(&self, mut visit: F) {
        unsafe { Self::post_order_node(self.root, &mut visit) }
    }

    /// Returns the number of nodes in the tree.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree contains no nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the raw root pointer for crate-internal pointer walks.
    #[inline]
    pub(crate) fn root_ptr(&self) -> *const Node<T> {
        self.root
    }

    unsafe fn in_order_node<F: FnMut(&T)>(node: *const Node<T>, visit: &mut F) {
        if !node.is_null() {
            unsafe {
                Self::in_order_node((*node).left, visit);
                visit(&(*node).data);
                Self::in_order_node((*node).right, visit);
            }
        }
    }

    unsafe fn pre_order_node<F: FnMut(&T)>(node: *const Node<T>, visit: &mut F) {
        if !node.is_null() {
            unsafe {
                visit(&(*node).data);
                Self::pre_order_node((*node).left, visit);
                Self::pre_order_node((*node).right, visit);
            }
        }
    }

    unsafe fn post_order_node<F: FnMut(&T)>(node: *const Node<T>, visit: &mut F) {
        if !node.is_null() {
            unsafe {
                Self::post_order_node((*node).left, visit);
                Self::post_order_node((*node).right, visit);
                visit(&(*node).data);
            }
        }
    }

    /// Frees `node` and its subtrees.
    unsafe fn drop_subtree(node: *const Node<T>) {
        if !node.is_null() {
            unsafe {
                let boxed_node = Box::from_raw(node.cast_mut());
                Self::drop_subtree(boxed_node.left);
                Self::drop_subtree(boxed_node.right);

                // `boxed_node` handles it's deallocation...
            }
        }
    }
}

impl<T: Ord> BinaryTree<T> {
    /// Inserts a value into the tree, keeping the search ordering: lesser
    /// values descend left, greater-or-equal values descend right.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*height*) time, which degrades to *O*(*n*) when insertions
    /// arrive in sorted order; the tree performs no balancing.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(10);
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert!(tree.contains(&5));
    /// ```
    pub fn insert(&mut self, data: T) {
        let new_node: *const Node<T> = Box::into_raw(Box::new(Node {
            left: ptr::null(),
            right: ptr::null(),
            data,
        }));

        if self.root.is_null() {
            self.root = new_node;
            self.len += 1;
            return;
        }

        unsafe {
            let mut curr = self.root.cast_mut();

            loop {
                let branch = if (*new_node).data < (*curr).data {
                    &mut (*curr).left
                } else {
                    &mut (*curr).right
                };

                if branch.is_null() {
                    *branch = new_node;
                    break;
                }

                curr = branch.cast_mut();
            }
        }

        self.len += 1;
    }

    /// Returns `true` if the tree contains `value`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*height*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut tree = BinaryTree::new();
    /// for value in [10, 5, 15] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert!(tree.contains(&15));
    /// assert!(!tree.contains(&12));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let mut curr = self.root;

        unsafe {
            while !curr.is_null() {
                match value.cmp(&(*curr).data) {
                    Ordering::Less => curr = (*curr).left,
                    Ordering::Greater => curr = (*curr).right,
                    Ordering::Equal => return true,
                }
            }
        }

        false
    }
}

#[cfg(test)]
impl<T> BinaryTree<T> {
    /// Assembles a tree directly from raw nodes, bypassing search-order
    /// insertion, so tests can build trees that violate the BST property.
    pub(crate) fn from_root(root: *const Node<T>, len: usize) -> Self {
        Self {
            root,
            len,
            _marker: PhantomData,
        }
    }
}

#[cfg(test)]
impl<T> Node<T> {
    /// Allocates a childless node.
    pub(crate) fn leaf(data: T) -> *const Node<T> {
        Self::branch(data, ptr::null(), ptr::null())
    }

    /// Allocates a node with the given children.
    pub(crate) fn branch(data: T, left: *const Node<T>, right: *const Node<T>) -> *const Node<T> {
        Box::into_raw(Box::new(Node { left, right, data }))
    }
}

impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        unsafe {
            Self::drop_subtree(self.root);
        }
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_list();
        self.in_order(|value| {
            entries.entry(value);
        });
        entries.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_in_order(tree: &BinaryTree<i32>) -> Vec<i32> {
        let mut values = Vec::new();
        tree.in_order(|value| values.push(*value));
        values
    }

    #[test]
    fn test_new_tree_is_empty() {
        let tree: BinaryTree<i32> = BinaryTree::new();

        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(collect_in_order(&tree), Vec::<i32>::new());
    }

    #[test]
    fn test_insert_and_contains() {
        let mut tree = BinaryTree::new();
        for value in [10, 5, 15, 1, 6, 13, 20] {
            tree.insert(value);
        }

        assert_eq!(tree.len(), 7);
        for value in [10, 5, 15, 1, 6, 13, 20] {
            assert!(tree.contains(&value));
        }
        assert!(!tree.contains(&11));
    }

    #[test]
    fn test_in_order_is_sorted() {
        let mut tree = BinaryTree::new();
        for value in [10, 5, 15, 1, 6, 13, 20] {
            tree.insert(value);
        }

        assert_eq!(collect_in_order(&tree), [1, 5, 6, 10, 13, 15, 20]);
    }

    #[test]
    fn test_pre_order() {
        let mut tree = BinaryTree::new();
        for value in [10, 5, 15, 1] {
            tree.insert(value);
        }

        let mut values = Vec::new();
        tree.pre_order(|value| values.push(*value));
        assert_eq!(values, [10, 5, 1, 15]);
    }

    #[test]
    fn test_post_order() {
        let mut tree = BinaryTree::new();
        for value in [10, 5, 15, 1] {
            tree.insert(value);
        }

        let mut values = Vec::new();
        tree.post_order(|value| values.push(*value));
        assert_eq!(values, [1, 5, 15, 10]);
    }

    #[test]
    fn test_duplicates_go_right() {
        let mut tree = BinaryTree::new();
        tree.insert(10);
        tree.insert(10);
        tree.insert(10);

        assert_eq!(tree.len(), 3);
        assert_eq!(collect_in_order(&tree), [10, 10, 10]);
    }

    #[test]
    fn test_sorted_insertion_degenerates_but_works() {
        let mut tree = BinaryTree::new();
        for value in 1..=50 {
            tree.insert(value);
        }

        assert_eq!(tree.len(), 50);
        assert_eq!(collect_in_order(&tree), (1..=50).collect::<Vec<_>>());
    }

    #[test]
    fn test_debug_print() {
        let mut tree = BinaryTree::new();
        for value in [2, 1, 3] {
            tree.insert(value);
        }

        assert_eq!(format!("{tree:?}"), "[1, 2, 3]");
    }
}
