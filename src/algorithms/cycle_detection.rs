//! [Floyd's cycle detection] (tortoise and hare) for linked lists.
//!
//! [Floyd's cycle detection]: https://en.wikipedia.org/wiki/Cycle_detection#Floyd's_tortoise_and_hare

use crate::collections::singly_linked_list::SinglyLinked;

/// Returns `true` if following `next` pointers from the list's head ever
/// revisits a node.
///
/// Two cursors walk the list, one advancing a single node per step and the
/// other two; if the list is cyclic the fast cursor eventually laps the slow
/// one and they meet, otherwise the fast cursor runs off the end.
///
/// A list built through the safe API is always acyclic; this guards against
/// externally corrupted node links.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time and *O*(1) space; no visited set is kept.
///
/// # Examples
///
/// ```
/// use classic_dsa::prelude::*;
///
/// let list = list![1 => 2 => 3];
/// assert!(!has_cycle(&list));
/// ```
pub fn has_cycle<T>(list: &SinglyLinked<T>) -> bool {
    let head = list.head_ptr();

    // An empty list cannot contain a cycle.
    if head.is_null() {
        return false;
    }

    let mut slow = head;
    let mut fast = head;

    unsafe {
        while !fast.is_null() && !(*fast).next.is_null() {
            slow = (*slow).next;
            fast = (*(*fast).next).next;

            // The fast cursor lapped the slow one.
            if slow == fast {
                return true;
            }
        }
    }

    false
}
