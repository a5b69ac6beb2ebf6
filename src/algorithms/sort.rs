//! Bubble sort.

/// Sort `items` ascending in place. Stable; stops early once a pass makes
/// no swaps.
pub fn bubble_sort<T: PartialOrd>(items: &mut [T]) {
    let n = items.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
