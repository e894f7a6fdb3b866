//! A stack that tracks its minimum and maximum elements in *O*(1) time and
//! *O*(1) extra space.
//!
//! Instead of keeping auxiliary stacks, the structure stores a transformed
//! value (`2 * x - extreme`) whenever a push sets a new minimum or maximum;
//! popping the transformed value recovers the previous extreme by inverting
//! the transformation.

/// A stack of integers that reports its minimum and maximum in *O*(1) time
/// with *O*(1) extra space.
///
/// The value-transformation encoding stores `2 * x - extreme` in place of a
/// new extreme `x`, so pushed values must stay within roughly
/// `i64::MIN / 2 ..= i64::MAX / 2` to avoid overflowing the encoded entry.
/// This is not checked.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MinMaxStack {
    /// Element storage; extremes are stored in transformed form.
    stack: Vec<i64>,
    /// Current maximum, or [`None`] when empty.
    max: Option<i64>,
    /// Current minimum, or [`None`] when empty.
    min: Option<i64>,
}

impl MinMaxStack {
    /// Creates a new, empty `MinMaxStack`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let stack = MinMaxStack::new();
    /// assert!(stack.is_empty());
    /// assert_eq!(stack.max(), None);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            stack: Vec::new(),
            max: None,
            min: None,
        }
    }

    /// Pushes an element onto the stack, updating the tracked extremes.
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
    /// let mut stack = MinMaxStack::new();
    /// stack.push(3);
    /// stack.push(7);
    /// stack.push(1);
    ///
    /// assert_eq!(stack.max(), Some(7));
    /// assert_eq!(stack.min(), Some(1));
    /// ```
    pub fn push(&mut self, x: i64) {
        let (Some(max), Some(min)) = (self.max, self.min) else {
            // First element is both extremes and is stored untransformed.
            self.stack.push(x);
            self.max = Some(x);
            self.min = Some(x);
            return;
        };

        if x > max {
            // Encode the new maximum; the stored value decodes back to the
            // previous maximum on pop.
            self.stack.push(2 * x - max);
            self.max = Some(x);
        } else if x < min {
            self.stack.push(2 * x - min);
            self.min = Some(x);
        } else {
            self.stack.push(x);
        }
    }

    /// Removes and returns the top element of the stack, or [`None`] if it
    /// is empty. The tracked extremes roll back to their previous values.
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
    /// let mut stack = MinMaxStack::new();
    /// stack.push(3);
    /// stack.push(7);
    ///
    /// assert_eq!(stack.pop(), Some(7));
    /// assert_eq!(stack.max(), Some(3));
    /// ```
    pub fn pop(&mut self) -> Option<i64> {
        let top = self.stack.pop()?;

        // Both extremes are set whenever the stack is non-empty.
        let max = self.max?;
        let min = self.min?;

        let result = if top > max {
            // A transformed entry: the element was the current maximum.
            self.max = Some(2 * max - top);
            max
        } else if top < min {
            self.min = Some(2 * min - top);
            min
        } else {
            top
        };

        if self.stack.is_empty() {
            self.max = None;
            self.min = None;
        }

        Some(result)
    }

    /// Returns the maximum element in the stack, or [`None`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut stack = MinMaxStack::new();
    /// assert_eq!(stack.max(), None);
    ///
    /// stack.push(4);
    /// assert_eq!(stack.max(), Some(4));
    /// ```
    #[inline]
    pub const fn max(&self) -> Option<i64> {
        self.max
    }

    /// Returns the minimum element in the stack, or [`None`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut stack = MinMaxStack::new();
    /// assert_eq!(stack.min(), None);
    ///
    /// stack.push(4);
    /// assert_eq!(stack.min(), Some(4));
    /// ```
    #[inline]
    pub const fn min(&self) -> Option<i64> {
        self.min
    }

    /// Returns the number of elements in the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
