//! Classic Algorithms.

pub mod bst_validation;
pub mod cycle_detection;
pub mod shortest_path;

/// Classic Algorithms Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::bst_validation::*;
    #[doc(no_inline)]
    pub use super::cycle_detection::*;
    #[doc(no_inline)]
    pub use super::shortest_path::*;
}
