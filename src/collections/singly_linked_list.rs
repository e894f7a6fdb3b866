//! A [singly-linked list] with owned nodes.
//!
//! [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list

use std::fmt;

use core::marker::PhantomData;
use core::ptr;

/// Creates a `SinglyLinked` containing the arguments.
///
/// # Examples
///
/// ```
/// use classic_dsa::prelude::*;
///
/// let list = list![1 => 2 => 3];
/// assert_eq!(list.len(), 3);
/// assert!(list.iter().eq([&1, &2, &3]));
/// ```
#[macro_export]
macro_rules! list {
    ($($elem:expr)=>*) => {{
        let mut list = $crate::collections::singly_linked_list::SinglyLinked::new();
        $(list.push_back($elem);)*
        list
    }};
}

/// A [singly-linked list] with owned nodes.
///
/// Elements are appended at the back and removed either from the front or by
/// value (first occurrence).
///
/// [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list
pub struct SinglyLinked<T> {
    /// Pointer to the head of the list.
    head: *const Node<T>,
    /// Pointer to the tail of the list.
    tail: *const Node<T>,
    /// Number of allocated nodes in the list.
    len: usize,
    /// In order to tell the drop checker that we do own values of type `T`,
    /// and therefore may drop some `T`'s when we drop.
    _marker: PhantomData<T>,
}

pub(crate) struct Node<T> {
    /// Pointer to the next node.
    pub(crate) next: *const Node<T>,
    /// Data the node owns.
    pub(crate) data: T,
}

/// An iterator that references a `SinglyLinked<T>`.
///
/// The iterator follows `next` pointers and assumes the list is acyclic.
#[derive(Debug)]
pub struct Iter<'a, T> {
    curr: *const Node<T>,
    _marker: PhantomData<&'a T>,
}

impl<T> SinglyLinked<T> {
    /// Creates a new, empty `SinglyLinked`.
    ///
    /// The list will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let list: SinglyLinked<i32> = SinglyLinked::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: ptr::null(),
            tail: ptr::null(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Appends an element to the back of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The list maintains a reference to the `tail`, so
    /// no traversal is needed to reach the insertion point.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut list = SinglyLinked::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_back(&mut self, data: T) {
        unsafe {
            let new_node: *const Node<T> = Box::into_raw(Box::new(Node {
                next: ptr::null(),
                data,
            }));

            if !self.tail.is_null() {
                (*self.tail.cast_mut()).next = new_node;
            } else {
                self.head = new_node;
            }

            self.tail = new_node;
            self.len += 1;
        }
    }

    /// Removes the first element from the list and returns it, or [`None`]
    /// if it is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. Only the `head` pointer is manipulated.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut list = list![1 => 2];
    ///
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }

        unsafe {
            let boxed_node = Box::from_raw(self.head.cast_mut());
            let data = boxed_node.data;

            self.head = boxed_node.next;

            if self.head.is_null() {
                self.tail = ptr::null();
            }

            self.len -= 1;

            Some(data)

            // `boxed_node` handles it's deallocation...
        }
    }

    /// Returns an immutable reference to the first element of the list, or
    /// [`None`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let list = list![4 => 3];
    /// assert_eq!(list.front(), Some(&4));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.head.is_null() {
            None
        } else {
            unsafe { Some(&(*self.head).data) }
        }
    }

    /// Returns an iterator over the list's elements, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let list = list![1 => 2 => 3];
    /// let collected: Vec<i32> = list.iter().copied().collect();
    ///
    /// assert_eq!(collected, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            curr: self.head,
            _marker: PhantomData,
        }
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list contains no nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the raw head pointer for crate-internal pointer walks.
    #[inline]
    pub(crate) fn head_ptr(&self) -> *const Node<T> {
        self.head
    }
}

impl<T: PartialEq> SinglyLinked<T> {
    /// Removes the first node holding `key` from the list, returning its
    /// data, or [`None`] if no node matched.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time to locate the node; unlinking it is *constant*
    /// time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut list = list![1 => 2 => 3 => 2];
    ///
    /// assert_eq!(list.remove(&2), Some(2));
    /// assert!(list.iter().eq([&1, &3, &2]));
    ///
    /// assert_eq!(list.remove(&4), None);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let mut curr = self.head;
        // So we don't fall in the case where `prev` and `curr` alias.
        let mut prev: *const Node<T> = ptr::null();

        // NOTE: Logical operators are short-circuiting, meaning the
        // dereference should always be safe.
        unsafe {
            while !curr.is_null() && (*curr).data != *key {
                prev = curr;
                curr = (*curr).next;
            }
        }

        if curr.is_null() {
            return None;
        }

        unsafe {
            let boxed_node = Box::from_raw(curr.cast_mut());
            let data = boxed_node.data;

            if prev.is_null() {
                // Removing the head.
                self.head = boxed_node.next;

                if self.head.is_null() {
                    self.tail = ptr::null();
                }
            } else {
                (*prev.cast_mut()).next = boxed_node.next;

                if boxed_node.next.is_null() {
                    // Removing the tail.
                    self.tail = prev;
                }
            }

            self.len -= 1;

            Some(data)

            // `boxed_node` handles it's deallocation...
        }
    }

    /// Returns `true` if any node in the list holds `key`.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time in the worst case.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let list = list![1 => 2 => 3];
    ///
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&4));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.iter().any(|data| data == key)
    }
}

#[cfg(test)]
impl<T> SinglyLinked<T> {
    /// Points the tail node at the node at `idx`, forming a cycle.
    ///
    /// # Safety
    ///
    /// The cycle must be undone with [`unlink_tail`] before the list is
    /// dropped or iterated, or the drop loop will never terminate.
    ///
    /// [`unlink_tail`]: SinglyLinked::unlink_tail
    pub(crate) unsafe fn link_tail_to(&mut self, idx: usize) {
        let mut target = self.head;
        for _ in 0..idx {
            target = unsafe { (*target).next };
        }

        unsafe {
            (*self.tail.cast_mut()).next = target;
        }
    }

    /// Restores the tail node's null `next` pointer, breaking any cycle.
    ///
    /// # Safety
    ///
    /// The list must be non-empty.
    pub(crate) unsafe fn unlink_tail(&mut self) {
        unsafe {
            (*self.tail.cast_mut()).next = ptr::null();
        }
    }
}

impl<T> Drop for SinglyLinked<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Default for SinglyLinked<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr.is_null() {
            None
        } else {
            unsafe {
                let data = &(*self.curr).data;
                self.curr = (*self.curr).next;
                Some(data)
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinked<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
