//! Searching and sorting over slices.

pub mod search;
pub mod sort;

pub use search::binary_search;
pub use sort::bubble_sort;
