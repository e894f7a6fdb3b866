//! A [Queue] operating on the First-In-First-Out (FIFO) principle.
//!
//! [Queue]: https://en.wikipedia.org/wiki/Queue_(abstract_data_type)

use crate::collections::singly_linked_list::SinglyLinked;

/// A [Queue] operating on the First-In-First-Out (FIFO) principle.
///
/// Backed by a [`SinglyLinked`] list, which tracks both head and tail, so
/// enqueue and dequeue are both *constant* time.
///
/// [Queue]: https://en.wikipedia.org/wiki/Queue_(abstract_data_type)
#[derive(Debug, Default)]
pub struct Queue<T> {
    items: SinglyLinked<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty `Queue`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let queue: Queue<i32> = Queue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            items: SinglyLinked::new(),
        }
    }

    /// Adds an element to the back of the queue.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    ///
    /// assert_eq!(queue.peek(), Some(&1));
    /// ```
    #[inline]
    pub fn enqueue(&mut self, element: T) {
        self.items.push_back(element);
    }

    /// Removes and returns the element at the front of the queue, or
    /// [`None`] if it is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    ///
    /// assert_eq!(queue.dequeue(), Some(1));
    /// assert_eq!(queue.dequeue(), Some(2));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the element at the front of the queue without removing it,
    /// or [`None`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue(7);
    ///
    /// assert_eq!(queue.peek(), Some(&7));
    /// assert_eq!(queue.len(), 1);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_and_dequeue_fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = Queue::new();
        queue.enqueue(5);

        assert_eq!(queue.peek(), Some(&5));
        assert_eq!(queue.peek(), Some(&5));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_empty_queue() {
        let mut queue: Queue<i32> = Queue::new();

        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn test_interleaved_operations() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);

        assert_eq!(queue.dequeue(), Some(1));

        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert!(queue.is_empty());
    }
}
