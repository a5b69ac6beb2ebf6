//! Binary search.

use std::cmp::Ordering;

/// Index of `needle` in ascending `sorted`, or `None` if absent.
///
/// Searches the half-open range `[low, high)`; with duplicates, any
/// matching index may be returned.
pub fn binary_search<T: Ord>(sorted: &[T], needle: &T) -> Option<usize> {
    let (mut low, mut high) = (0, sorted.len());

    while low < high {
        let middle = low + (high - low) / 2;
        match needle.cmp(&sorted[middle]) {
            Ordering::Equal => return Some(middle),
            Ordering::Less => high = middle,
            Ordering::Greater => low = middle + 1,
        }
    }
    None
}
