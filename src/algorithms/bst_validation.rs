//! Binary search tree validation via [Morris traversal].
//!
//! [Morris traversal]: https://en.wikipedia.org/wiki/Tree_traversal#Morris_in-order_traversal_using_threading

use core::ptr;

use crate::collections::binary_tree::{BinaryTree, Node};

/// Returns `true` if the tree satisfies the binary-search ordering: an
/// in-order walk yields a strictly increasing sequence. Duplicate values
/// fail the check.
///
/// The walk is a Morris traversal: instead of recursion or an explicit
/// stack, each node with a left subtree is temporarily threaded to its
/// in-order predecessor's `right` pointer, then unthreaded when revisited.
/// The traversal always runs to completion, even after a violation is
/// found, so every thread is removed and the tree's structure is exactly as
/// before the call. Threading is why the tree is borrowed mutably.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time and *O*(1) space. Each edge is walked at most three
/// times: once to find the predecessor, once to thread, once to unthread.
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
/// assert!(is_valid_bst(&mut tree));
/// ```
pub fn is_valid_bst<T: Ord>(tree: &mut BinaryTree<T>) -> bool {
    let mut curr = tree.root_ptr().cast_mut();
    let mut prev: *const Node<T> = ptr::null();
    let mut valid = true;

    unsafe {
        while !curr.is_null() {
            if (*curr).left.is_null() {
                // No left subtree: visit the node and move right.
                if !prev.is_null() && (*prev).data >= (*curr).data {
                    valid = false;
                }
                prev = curr;
                curr = (*curr).right.cast_mut();
            } else {
                // Find the in-order predecessor: the rightmost node of the
                // left subtree, stopping early at an existing thread.
                let mut pred = (*curr).left.cast_mut();
                while !(*pred).right.is_null() && (*pred).right != curr.cast_const() {
                    pred = (*pred).right.cast_mut();
                }

                if (*pred).right.is_null() {
                    // Thread the predecessor back to the current node and
                    // descend left.
                    (*pred).right = curr;
                    curr = (*curr).left.cast_mut();
                } else {
                    // Second arrival through the thread: remove it, visit
                    // the node, and move right.
                    (*pred).right = ptr::null();

                    if !prev.is_null() && (*prev).data >= (*curr).data {
                        valid = false;
                    }
                    prev = curr;
                    curr = (*curr).right.cast_mut();
                }
            }
        }
    }

    valid
}
