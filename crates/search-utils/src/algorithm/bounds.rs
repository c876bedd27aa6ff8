// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{
    monitor::{
        no_op::NoOperationMonitor,
        probe_monitor::{ProbeMonitor, SearchOperation, SearchOutcome},
    },
    sequence::RandomAccess,
    window::SearchWindow,
};
use std::{borrow::Borrow, ops::Range};

/// Returns the first index whose element is not less than `value`.
///
/// This is the first position where `value` could be inserted without
/// breaking the order, placed before any elements equal to it. The result
/// lies in `[0, seq.len()]`: `0` if `value` is not greater than every
/// element (or the sequence is empty), `seq.len()` if it is greater than
/// all of them.
///
/// # Invariants
///
/// - `seq` must be sorted in ascending order.
///
/// # Examples
///
/// ```rust
/// # use search_utils::algorithm::lower_bound_index;
///
/// let data = [1, 2, 2, 2, 5, 7];
/// assert_eq!(lower_bound_index(&data, &2), 1);
/// assert_eq!(lower_bound_index(&data, &3), 4);
/// assert_eq!(lower_bound_index(&data, &0), 0);
/// assert_eq!(lower_bound_index(&data, &9), 6);
/// ```
#[inline]
pub fn lower_bound_index<S, Q>(seq: &S, value: &Q) -> usize
where
    S: RandomAccess + ?Sized,
    S::Item: Borrow<Q>,
    Q: Ord + ?Sized,
{
    lower_bound_index_monitored(seq, value, &mut NoOperationMonitor)
}

/// Like [`lower_bound_index`], reporting every probe to `monitor`.
///
/// # Examples
///
/// ```rust
/// # use search_utils::algorithm::lower_bound_index_monitored;
/// # use search_utils::monitor::statistics::StatisticsMonitor;
///
/// let data = [1, 2, 2, 2, 5, 7];
/// let mut stats = StatisticsMonitor::new();
/// assert_eq!(lower_bound_index_monitored(&data, &2, &mut stats), 1);
/// assert_eq!(stats.statistics().searches, 1);
/// ```
#[inline]
pub fn lower_bound_index_monitored<S, Q, M>(seq: &S, value: &Q, monitor: &mut M) -> usize
where
    S: RandomAccess + ?Sized,
    S::Item: Borrow<Q>,
    Q: Ord + ?Sized,
    M: ProbeMonitor + ?Sized,
{
    // Elements strictly less than `value` lie below the answer.
    let index = partition_index(seq, SearchOperation::LowerBound, monitor, |probe: &Q| {
        probe < value
    });
    monitor.on_exit_search(SearchOperation::LowerBound, SearchOutcome::Bound(index));
    index
}

/// Returns the first index whose element is greater than `value`.
///
/// This is the first position where `value` could be inserted without
/// breaking the order, placed after any elements equal to it. The result
/// lies in `[0, seq.len()]`.
///
/// # Invariants
///
/// - `seq` must be sorted in ascending order.
///
/// # Examples
///
/// ```rust
/// # use search_utils::algorithm::upper_bound_index;
///
/// let data = [1, 2, 2, 2, 5, 7];
/// assert_eq!(upper_bound_index(&data, &2), 4);
/// assert_eq!(upper_bound_index(&data, &7), 6);
/// assert_eq!(upper_bound_index(&data, &0), 0);
/// ```
#[inline]
pub fn upper_bound_index<S, Q>(seq: &S, value: &Q) -> usize
where
    S: RandomAccess + ?Sized,
    S::Item: Borrow<Q>,
    Q: Ord + ?Sized,
{
    upper_bound_index_monitored(seq, value, &mut NoOperationMonitor)
}

/// Like [`upper_bound_index`], reporting every probe to `monitor`.
#[inline]
pub fn upper_bound_index_monitored<S, Q, M>(seq: &S, value: &Q, monitor: &mut M) -> usize
where
    S: RandomAccess + ?Sized,
    S::Item: Borrow<Q>,
    Q: Ord + ?Sized,
    M: ProbeMonitor + ?Sized,
{
    // Elements less than or equal to `value` lie below the answer.
    let index = partition_index(seq, SearchOperation::UpperBound, monitor, |probe: &Q| {
        probe <= value
    });
    monitor.on_exit_search(SearchOperation::UpperBound, SearchOutcome::Bound(index));
    index
}

/// Returns the index range of the elements equal to `value`.
///
/// The range is `lower_bound_index(seq, value)..upper_bound_index(seq, value)`
/// and is empty (but still positioned at the insertion point) if `value`
/// does not occur.
///
/// # Invariants
///
/// - `seq` must be sorted in ascending order.
///
/// # Examples
///
/// ```rust
/// # use search_utils::algorithm::equal_range;
///
/// let data = [1, 2, 2, 2, 5, 7];
/// assert_eq!(equal_range(&data, &2), 1..4);
/// assert_eq!(equal_range(&data, &3), 4..4);
/// ```
#[inline]
pub fn equal_range<S, Q>(seq: &S, value: &Q) -> Range<usize>
where
    S: RandomAccess + ?Sized,
    S::Item: Borrow<Q>,
    Q: Ord + ?Sized,
{
    equal_range_monitored(seq, value, &mut NoOperationMonitor)
}

/// Like [`equal_range`], reporting both underlying searches to `monitor`.
#[inline]
pub fn equal_range_monitored<S, Q, M>(seq: &S, value: &Q, monitor: &mut M) -> Range<usize>
where
    S: RandomAccess + ?Sized,
    S::Item: Borrow<Q>,
    Q: Ord + ?Sized,
    M: ProbeMonitor + ?Sized,
{
    let lower = lower_bound_index_monitored(seq, value, monitor);
    let upper = upper_bound_index_monitored(seq, value, monitor);
    // `upper < lower` can only happen on unsorted input.
    lower..upper.max(lower)
}

/// Returns how many elements are equal to `value`.
///
/// # Invariants
///
/// - `seq` must be sorted in ascending order.
///
/// # Examples
///
/// ```rust
/// # use search_utils::algorithm::count;
///
/// assert_eq!(count(&[1, 2, 2, 2, 5, 7], &2), 3);
/// assert_eq!(count(&[1, 2, 2, 2, 5, 7], &4), 0);
/// ```
#[inline]
pub fn count<S, Q>(seq: &S, value: &Q) -> usize
where
    S: RandomAccess + ?Sized,
    S::Item: Borrow<Q>,
    Q: Ord + ?Sized,
{
    equal_range(seq, value).len()
}

/// Returns the first index whose element does not satisfy `is_below`.
///
/// `is_below` must hold for a (possibly empty) prefix of the sequence and
/// fail for the rest. Reports `on_enter_search` and every probe; the caller
/// reports the outcome.
#[inline(always)]
fn partition_index<S, Q, M, F>(
    seq: &S,
    operation: SearchOperation,
    monitor: &mut M,
    mut is_below: F,
) -> usize
where
    S: RandomAccess + ?Sized,
    S::Item: Borrow<Q>,
    Q: Ord + ?Sized,
    M: ProbeMonitor + ?Sized,
    F: FnMut(&Q) -> bool,
{
    let len = seq.len();
    monitor.on_enter_search(operation, len);

    let mut window = SearchWindow::full(len);
    while !window.is_empty() {
        let mid = window.midpoint();
        monitor.on_probe(window, mid);

        // SAFETY: mid is always in bounds because left < right <= len,
        // therefore mid < len.
        let probe: &Q = unsafe { seq.at_unchecked(mid) }.borrow();
        if is_below(probe) {
            window.discard_lower(mid);
        } else {
            window.discard_upper(mid);
        }
    }
    window.left()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::statistics::StatisticsMonitor;
    use std::collections::VecDeque;

    #[test]
    fn test_lower_bound_basic() {
        let v = vec![1, 2, 2, 2, 5, 7];
        assert_eq!(lower_bound_index(&v, &0), 0);
        assert_eq!(lower_bound_index(&v, &1), 0);
        assert_eq!(lower_bound_index(&v, &2), 1);
        assert_eq!(lower_bound_index(&v, &3), 4);
        assert_eq!(lower_bound_index(&v, &5), 4);
        assert_eq!(lower_bound_index(&v, &6), 5);
        assert_eq!(lower_bound_index(&v, &7), 5);
        assert_eq!(lower_bound_index(&v, &8), 6);
    }

    #[test]
    fn test_upper_bound_basic() {
        let v = vec![1, 2, 2, 2, 5, 7];
        assert_eq!(upper_bound_index(&v, &0), 0);
        assert_eq!(upper_bound_index(&v, &1), 1);
        assert_eq!(upper_bound_index(&v, &2), 4);
        assert_eq!(upper_bound_index(&v, &3), 4);
        assert_eq!(upper_bound_index(&v, &5), 5);
        assert_eq!(upper_bound_index(&v, &7), 6);
        assert_eq!(upper_bound_index(&v, &8), 6);
    }

    #[test]
    fn test_bounds_of_duplicate_run() {
        let v = [1, 2, 2, 2, 4, 6];
        assert_eq!(lower_bound_index(&v, &2), 1);
        assert_eq!(upper_bound_index(&v, &2), 4);
    }

    #[test]
    fn test_bounds_empty_sequence() {
        let v: Vec<i32> = vec![];
        assert_eq!(lower_bound_index(&v, &42), 0);
        assert_eq!(upper_bound_index(&v, &42), 0);
        assert_eq!(equal_range(&v, &42), 0..0);
        assert_eq!(count(&v, &42), 0);
    }

    #[test]
    fn test_bounds_single_element() {
        let v = [5];
        assert_eq!(lower_bound_index(&v, &4), 0);
        assert_eq!(lower_bound_index(&v, &5), 0);
        assert_eq!(lower_bound_index(&v, &6), 1);
        assert_eq!(upper_bound_index(&v, &4), 0);
        assert_eq!(upper_bound_index(&v, &5), 1);
        assert_eq!(upper_bound_index(&v, &6), 1);
    }

    #[test]
    fn test_bounds_all_equal() {
        let v = [3; 9];
        assert_eq!(lower_bound_index(&v, &3), 0);
        assert_eq!(upper_bound_index(&v, &3), 9);
        assert_eq!(count(&v, &3), 9);
        assert_eq!(equal_range(&v, &2), 0..0);
        assert_eq!(equal_range(&v, &4), 9..9);
    }

    #[test]
    fn test_equal_range_and_count() {
        let v = [1, 2, 2, 2, 5, 7];
        assert_eq!(equal_range(&v, &2), 1..4);
        assert_eq!(equal_range(&v, &5), 4..5);
        assert_eq!(equal_range(&v, &6), 5..5);
        assert_eq!(count(&v, &2), 3);
        assert_eq!(count(&v, &7), 1);
        assert_eq!(count(&v, &0), 0);
        assert!(v[equal_range(&v, &2)].iter().all(|&x| x == 2));
    }

    #[test]
    fn test_bounds_agree_with_partition_point() {
        let v: Vec<i64> = vec![-8, -3, -3, 0, 0, 0, 1, 4, 4, 9, 12, 12, 12, 30];
        for value in -10..=32 {
            assert_eq!(
                lower_bound_index(&v, &value),
                v.partition_point(|&x| x < value),
                "lower bound mismatch for {}",
                value
            );
            assert_eq!(
                upper_bound_index(&v, &value),
                v.partition_point(|&x| x <= value),
                "upper bound mismatch for {}",
                value
            );
        }
    }

    #[test]
    fn test_bounds_on_vec_deque() {
        let mut ring: VecDeque<i32> = VecDeque::with_capacity(8);
        for x in [4, 6, 6, 8] {
            ring.push_back(x);
        }
        for x in [2, 1] {
            ring.push_front(x);
        }
        // ring = [1, 2, 4, 6, 6, 8], stored wrapped around.
        assert_eq!(lower_bound_index(&ring, &6), 3);
        assert_eq!(upper_bound_index(&ring, &6), 5);
        assert_eq!(equal_range(&ring, &3), 2..2);
    }

    #[test]
    fn test_bounds_borrowed_str() {
        let words: Vec<String> = ["ant", "bee", "bee", "cat"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(lower_bound_index(&words, "bee"), 1);
        assert_eq!(upper_bound_index(&words, "bee"), 3);
        assert_eq!(lower_bound_index(&words, "zebra"), 4);
        assert_eq!(count(&words, "ant"), 1);
    }

    #[test]
    fn test_bounds_unsorted_input_terminates_in_range() {
        let v = [9, 1, 8, 2, 7, 3, 6, 4, 5];
        for value in 0..=10 {
            let lower = lower_bound_index(&v, &value);
            let upper = upper_bound_index(&v, &value);
            assert!(lower <= v.len());
            assert!(upper <= v.len());
            let range = equal_range(&v, &value);
            assert!(range.start <= range.end && range.end <= v.len());
        }
    }

    #[test]
    fn test_probe_count_is_logarithmic() {
        for len in [1usize, 2, 3, 7, 8, 100, 1000, 4096] {
            let v: Vec<usize> = (0..len).collect();
            let max_probes = (usize::BITS - len.leading_zeros()) as u64; // floor(log2(len)) + 1
            for value in [0, len / 2, len] {
                let mut stats = StatisticsMonitor::new();
                let _ = lower_bound_index_monitored(&v, &value, &mut stats);
                let _ = upper_bound_index_monitored(&v, &value, &mut stats);
                assert!(
                    stats.statistics().max_probes_per_search <= max_probes,
                    "len {} value {} needed {} probes",
                    len,
                    value,
                    stats.statistics().max_probes_per_search
                );
            }
        }
    }
}
