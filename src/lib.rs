//! Testbed comparing a quadratic comparison sort against a guaranteed
//! O(N x log(N)) divide-and-conquer sort across several input patterns.
//!
//! The sorts themselves live in [`bubble`] and [`merge`], the input pattern
//! generators in [`patterns`], and the timing/averaging harness in [`bench`].

/// Generates the `SortImpl` type wiring a sort module's free `sort`/`sort_by`
/// functions into the [`Sort`] trait.
#[macro_export]
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                self::sort(arr);
            }

            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                self::sort_by(arr, compare);
            }
        }
    };
}

pub mod bench;
pub mod bubble;
pub mod config;
pub mod merge;
pub mod patterns;
pub mod tests;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}
