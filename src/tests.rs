//! Shared correctness battery for sort implementations, instantiated per
//! implementation via [`instantiate_sort_tests`](crate::instantiate_sort_tests).
//!
//! Every check compares against the stdlib sort as the known-good oracle.

use std::fmt::Debug;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::patterns;
use crate::Sort;

pub const TEST_SIZES: [usize; 17] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 16, 24, 50, 100, 500, 2048,
];

/// Sorts `v` with `S` and asserts it matches what the stdlib stable sort
/// produces for the same input.
pub fn sort_comp<S: Sort, T>(v: &mut [T])
where
    T: Ord + Clone + Debug,
{
    let mut expected = v.to_vec();
    expected.sort();

    S::sort(v);

    assert_eq!(
        v,
        expected.as_slice(),
        "{} disagrees with the stdlib sort. Seed: {}",
        S::name(),
        patterns::random_init_seed()
    );
}

pub fn test_pattern<S: Sort>(pattern_fn: impl Fn(usize) -> Vec<i32>) {
    for test_size in TEST_SIZES {
        let mut test_data = pattern_fn(test_size);
        sort_comp::<S, i32>(test_data.as_mut_slice());
    }
}

// Pattern shims with the per-size determinism the battery needs.

pub fn random(len: usize) -> Vec<i32> {
    // Mix in the length so each test size sees its own sequence.
    let mut rng = StdRng::seed_from_u64(patterns::random_init_seed() ^ len as u64);
    patterns::random_uniform(len, &mut rng)
}

pub fn ascending(len: usize) -> Vec<i32> {
    patterns::ascending(len)
}

pub fn descending(len: usize) -> Vec<i32> {
    patterns::descending(len)
}

pub fn all_equal(len: usize) -> Vec<i32> {
    patterns::all_equal(len, patterns::ALL_EQUAL_VALUE)
}

pub fn check_basic<S: Sort>() {
    sort_comp::<S, i32>(&mut []);
    sort_comp::<S, i32>(&mut [77]);
    sort_comp::<S, _>(&mut [2, 3]);
    sort_comp::<S, _>(&mut [3, 2]);
    sort_comp::<S, _>(&mut [2, 3, 99, 6]);
    sort_comp::<S, _>(&mut [2, 7709, 400, 90932]);
    sort_comp::<S, _>(&mut [15, -1, 3, -1, -3, -1, 7]);

    let mut v = patterns::all_equal(5, 19);
    S::sort(&mut v);
    assert_eq!(v, [19, 19, 19, 19, 19]);

    let mut v = patterns::descending(5);
    assert_eq!(v, [4, 3, 2, 1, 0]);
    S::sort(&mut v);
    assert_eq!(v, [0, 1, 2, 3, 4]);

    let mut v = patterns::ascending(0);
    S::sort(&mut v);
    assert!(v.is_empty());
}

/// Keys are drawn from a narrow range so most of them collide; origin indices
/// of equal keys must come out in their original order.
pub fn check_stability<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut rng = StdRng::seed_from_u64(patterns::random_init_seed() ^ test_size as u64);
        let keys: Vec<i32> = if test_size == 0 {
            Vec::new()
        } else {
            patterns::random_uniform(test_size, &mut rng)
                .into_iter()
                .map(|val| val % ((test_size as i32 / 4).max(1)))
                .collect()
        };

        let mut tagged: Vec<(i32, usize)> =
            keys.into_iter().enumerate().map(|(i, key)| (key, i)).collect();

        S::sort_by(&mut tagged, |a, b| a.0.cmp(&b.0));

        for pair in tagged.windows(2) {
            assert!(pair[0].0 <= pair[1].0, "{} not sorted", S::name());
            if pair[0].0 == pair[1].0 {
                assert!(
                    pair[0].1 < pair[1].1,
                    "{} reordered equal keys. Seed: {}",
                    S::name(),
                    patterns::random_init_seed()
                );
            }
        }
    }
}

/// A sorted sequence must come back byte-for-byte unchanged, however often it
/// is re-sorted.
pub fn check_idempotent<S: Sort>() {
    for test_size in TEST_SIZES {
        let mut v = random(test_size);
        S::sort(&mut v);
        let once = v.clone();

        S::sort(&mut v);
        assert_eq!(v, once);

        S::sort(&mut v);
        assert_eq!(v, once);
    }
}

/// Counts how many comparisons one `sort_by` call on `v` performs.
pub fn count_comparisons<S: Sort>(v: &mut [i32]) -> u64 {
    let mut comps = 0u64;
    S::sort_by(v, |a, b| {
        comps += 1;
        a.cmp(b)
    });
    comps
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        #[test]
        fn basic() {
            $crate::tests::check_basic::<$sort_impl>();
        }

        #[test]
        fn fixed_seed() {
            let fixed_seed_a = $crate::patterns::random_init_seed();
            let fixed_seed_b = $crate::patterns::random_init_seed();

            assert_eq!(fixed_seed_a, fixed_seed_b);
        }

        #[test]
        fn stability() {
            $crate::tests::check_stability::<$sort_impl>();
        }

        #[test]
        fn idempotent() {
            $crate::tests::check_idempotent::<$sort_impl>();
        }

        $crate::instantiate_pattern_tests!($sort_impl => random, ascending, descending, all_equal);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_pattern_tests {
    ($sort_impl:ty => $($pattern:ident),+) => {
        ::paste::paste! {
            $(
                #[test]
                fn [<pattern_ $pattern>]() {
                    $crate::tests::test_pattern::<$sort_impl>($crate::tests::$pattern);
                }
            )+
        }
    };
}
