//! Data Structures & Algorithms

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod algorithms;
pub mod collections;

/// Data Structures & Algorithms Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::list;

    #[doc(no_inline)]
    pub use super::collections::binary_tree::BinaryTree;
    #[doc(no_inline)]
    pub use super::collections::graph::{Graph, GraphError, Weight};
    #[doc(no_inline)]
    pub use super::collections::hash_table::{CapacityError, HashTable};
    #[doc(no_inline)]
    pub use super::collections::min_max_stack::MinMaxStack;
    #[doc(no_inline)]
    pub use super::collections::queue::Queue;
    #[doc(no_inline)]
    pub use super::collections::singly_linked_list::SinglyLinked;
    #[doc(no_inline)]
    pub use super::collections::stack::Stack;

    #[doc(no_inline)]
    pub use super::algorithms::bst_validation::*;
    #[doc(no_inline)]
    pub use super::algorithms::cycle_detection::*;
    #[doc(no_inline)]
    pub use super::algorithms::shortest_path::*;
}
