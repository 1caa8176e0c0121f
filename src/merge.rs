//! Top-down merge sort. O(N x log(N)) comparisons regardless of input order,
//! O(N) auxiliary space during each merge, stable.

use std::cmp::Ordering;
use std::ptr;

sort_impl!("rust_merge");

pub fn sort<T: Ord>(arr: &mut [T]) {
    merge_sort(arr, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(arr: &mut [T], mut compare: F) {
    merge_sort(arr, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    // Odd lengths leave the extra element in the right half.
    let mid = len / 2;
    let (left, right) = v.split_at_mut(mid);
    merge_sort(left, is_less);
    merge_sort(right, is_less);

    merge(v, mid, is_less);
}

/// Merges the two sorted runs `v[..mid]` and `v[mid..]` through a scratch
/// buffer that is freed before returning.
fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut scratch: Vec<T> = Vec::with_capacity(len);
    let scratch_ptr = scratch.as_mut_ptr();

    // SAFETY: `i` and `j` stay within their runs and every source index is
    // consumed exactly once, so each element is moved into the scratch buffer
    // bitwise exactly once and moved back afterwards. `scratch` keeps length
    // zero throughout, it only ever owns raw capacity, which means a panicking
    // comparison cannot lead to a double drop: the elements are still dropped
    // through `v` by its owner.
    unsafe {
        let base = v.as_ptr();
        let mut i = 0; // head of the left run
        let mut j = mid; // head of the right run

        for k in 0..len {
            // On equal heads the left run wins, which keeps the sort stable.
            let take_right =
                i == mid || (j < len && is_less(&*base.add(j), &*base.add(i)));

            let src = if take_right {
                let src = j;
                j += 1;
                src
            } else {
                let src = i;
                i += 1;
                src
            };

            ptr::copy_nonoverlapping(base.add(src), scratch_ptr.add(k), 1);
        }

        ptr::copy_nonoverlapping(scratch_ptr, v.as_mut_ptr(), len);
    }
}
