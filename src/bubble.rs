//! Adjacent-pair exchange sort. O(N^2) worst and average case, O(N) on
//! already sorted input thanks to the early exit, stable, no allocation.

use std::cmp::Ordering;

sort_impl!("rust_bubble");

pub fn sort<T: Ord>(arr: &mut [T]) {
    bubble_sort(arr, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(arr: &mut [T], mut compare: F) {
    bubble_sort(arr, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // After each pass the largest unsettled element has bubbled to `end`, so
    // the scanned prefix shrinks by one. A pass without swaps means the whole
    // slice is already sorted, one pass (len - 1 comparisons) in the best case.
    for end in (1..len).rev() {
        let mut swapped = false;

        for i in 0..end {
            // Strictly-less keeps equal elements in their original order.
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                swapped = true;
            }
        }

        if !swapped {
            return;
        }
    }
}
