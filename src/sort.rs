//! The four sorting algorithms.
//!
//! Every function sorts the slice in place into non-decreasing order and is total over
//! any finite input. None of them allocate except [`merge_sort`], which needs a scratch
//! buffer the size of the input.

/// Repeatedly select the minimum of the unsorted tail and swap it to the front.
///
/// Not stable: the swap can move an element past one equal to it.
pub fn selection_sort<T: Ord>(slice: &mut [T]) {
    let len = slice.len();
    if len < 2 {
        return;
    }
    for i in 0..len - 1 {
        let mut min = i;
        for j in i + 1..len {
            if slice[j] < slice[min] {
                min = j;
            }
        }
        if min != i {
            slice.swap(i, min);
        }
    }
}

/// Swap adjacent out-of-order pairs until a whole pass makes no swap.
///
/// After pass `k` the last `k` elements are in their final place, so each pass can
/// stop one element earlier. An already sorted input finishes after a single pass.
pub fn bubble_sort<T: Ord>(slice: &mut [T]) {
    let mut unsorted = slice.len();
    while unsorted > 1 {
        let mut swapped = false;
        for i in 1..unsorted {
            if slice[i - 1] > slice[i] {
                slice.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        unsorted -= 1;
    }
}

/// Top-down merge sort. Stable.
pub fn merge_sort<T: Ord + Clone>(slice: &mut [T]) {
    if slice.len() < 2 {
        return;
    }
    let mut scratch = slice.to_vec();
    merge_sort_into(&mut scratch, slice);
}

/// Sorts `src` and leaves the result in `dst`. Both slices hold the same elements on
/// entry; halves alternate roles on the way down so no copy-back is needed.
fn merge_sort_into<T: Ord + Clone>(src: &mut [T], dst: &mut [T]) {
    let len = src.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    {
        let (src_left, src_right) = src.split_at_mut(mid);
        let (dst_left, dst_right) = dst.split_at_mut(mid);
        merge_sort_into(dst_left, src_left);
        merge_sort_into(dst_right, src_right);
    }
    let (left, right) = src.split_at(mid);
    merge(left, right, dst);
}

fn merge<T: Ord + Clone>(left: &[T], right: &[T], out: &mut [T]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // Ties go to the left run to keep equal elements in order.
        let take_left = j >= right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Quick sort with the last element of each range as pivot.
///
/// Elements less than the pivot end up on its left, greater-or-equal on its right.
/// Sorted or all-equal inputs degrade to O(n²). The smaller side is recursed into and
/// the larger one is handled by the loop, so the stack stays O(log n) deep.
pub fn quick_sort<T: Ord>(mut slice: &mut [T]) {
    while slice.len() > 1 {
        let pivot = partition(slice);
        let (left, rest) = std::mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quick_sort(left);
            slice = right;
        } else {
            quick_sort(right);
            slice = left;
        }
    }
}

/// Lomuto partition around the last element. Returns the pivot's final index.
fn partition<T: Ord>(slice: &mut [T]) -> usize {
    let last = slice.len() - 1;
    let mut store = 0;
    for i in 0..last {
        if slice[i] < slice[last] {
            slice.swap(i, store);
            store += 1;
        }
    }
    slice.swap(store, last);
    store
}

pub fn is_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const SORTS: [(&str, fn(&mut [i64])); 4] = [
        ("selection", selection_sort),
        ("bubble", bubble_sort),
        ("merge", merge_sort),
        ("quick", quick_sort),
    ];

    fn random_input(len: usize, seed: u64) -> Vec<i64> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..len).map(|_| rng.gen_range(-50..=50)).collect()
    }

    fn check(name: &str, sort: fn(&mut [i64]), input: &[i64]) {
        let mut expected = input.to_vec();
        expected.sort();
        let mut actual = input.to_vec();
        sort(&mut actual);
        assert_eq!(actual, expected, "{name} sort failed on {input:?}");
    }

    #[test]
    fn sorts_edge_cases() {
        let inputs: &[&[i64]] = &[
            &[],
            &[7],
            &[2, 1],
            &[1, 2],
            &[3, 3, 3, 3],
            &[5, 4, 3, 2, 1],
            &[i64::MAX, i64::MIN, 0, -1, 1],
        ];
        for (name, sort) in SORTS {
            for input in inputs {
                check(name, sort, input);
            }
        }
    }

    #[test]
    fn sorts_random_inputs() {
        for (name, sort) in SORTS {
            for (seed, len) in [(1, 10), (2, 97), (3, 256), (4, 1000)] {
                check(name, sort, &random_input(len, seed));
            }
        }
    }

    #[test]
    fn sorting_sorted_input_is_identity() {
        for (name, sort) in SORTS {
            let mut once = random_input(300, 9);
            sort(&mut once);
            let mut twice = once.clone();
            sort(&mut twice);
            assert_eq!(once, twice, "{name}");
        }
    }

    #[test]
    fn quick_sort_survives_sorted_input() {
        let mut v = (0..20_000).collect::<Vec<i64>>();
        quick_sort(&mut v);
        assert!(is_sorted(&v));
        let mut v = (0..20_000).rev().collect::<Vec<i64>>();
        quick_sort(&mut v);
        assert!(is_sorted(&v));
    }

    #[derive(Debug, Clone)]
    struct Keyed(i64, usize);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn merge_sort_is_stable() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut v = (0..500)
            .map(|i| Keyed(rng.gen_range(0..10), i))
            .collect::<Vec<_>>();
        merge_sort(&mut v);
        for w in v.windows(2) {
            assert!(w[0].0 <= w[1].0);
            if w[0].0 == w[1].0 {
                assert!(w[0].1 < w[1].1, "equal keys reordered: {:?}", w);
            }
        }
    }
}
