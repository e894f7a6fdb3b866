//! Collection Types.

pub mod binary_tree;
pub mod graph;
pub mod hash_table;
pub mod min_max_stack;
pub mod queue;
pub mod singly_linked_list;
pub mod stack;

/// Collection Types Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::list;

    #[doc(no_inline)]
    pub use super::binary_tree::BinaryTree;
    #[doc(no_inline)]
    pub use super::graph::{Graph, GraphError, Weight};
    #[doc(no_inline)]
    pub use super::hash_table::{CapacityError, HashTable};
    #[doc(no_inline)]
    pub use super::min_max_stack::MinMaxStack;
    #[doc(no_inline)]
    pub use super::queue::Queue;
    #[doc(no_inline)]
    pub use super::singly_linked_list::SinglyLinked;
    #[doc(no_inline)]
    pub use super::stack::Stack;
}
