//! A [Stack] operating on the Last-In-First-Out (LIFO) principle.
//!
//! [Stack]: https://en.wikipedia.org/wiki/Stack_(abstract_data_type)

/// A [Stack] operating on the Last-In-First-Out (LIFO) principle.
///
/// Backed by a growable array; the top of the stack is the end of the
/// array, so pushes and pops are amortized *constant* time.
///
/// [Stack]: https://en.wikipedia.org/wiki/Stack_(abstract_data_type)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty `Stack`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let stack: Stack<i32> = Stack::new();
    /// assert!(stack.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes an element onto the top of the stack.
    ///
    /// # Time Complexity
    ///
    /// Takes amortized *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    ///
    /// assert_eq!(stack.peek(), Some(&2));
    /// ```
    #[inline]
    pub fn push(&mut self, element: T) {
        self.items.push(element);
    }

    /// Removes and returns the top element of the stack, or [`None`] if it
    /// is empty.
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
    /// let mut stack = Stack::new();
    /// stack.push(1);
    ///
    /// assert_eq!(stack.pop(), Some(1));
    /// assert_eq!(stack.pop(), None);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top element of the stack without removing it, or
    /// [`None`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(7);
    ///
    /// assert_eq!(stack.peek(), Some(&7));
    /// assert_eq!(stack.len(), 1);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the number of elements in the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
