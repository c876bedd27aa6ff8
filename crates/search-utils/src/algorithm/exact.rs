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
use std::{borrow::Borrow, cmp::Ordering};

/// Searches a sorted sequence for an element equal to `value`.
///
/// Returns `Some(index)` with `seq[index] == value` if such an element
/// exists, otherwise `None`. If several elements are equal to `value`, any
/// of their indices may be returned: the search stops at the first match
/// its narrowing path probes. Use `lower_bound_index` for the first one.
///
/// # Invariants
///
/// - `seq` must be sorted in ascending order.
///
/// # Examples
///
/// ```rust
/// # use search_utils::algorithm::binary_search_index;
///
/// let data = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search_index(&data, &5), Some(2));
/// assert_eq!(binary_search_index(&data, &4), None);
/// ```
#[inline]
pub fn binary_search_index<S, Q>(seq: &S, value: &Q) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    S::Item: Borrow<Q>,
    Q: Ord + ?Sized,
{
    binary_search_index_monitored(seq, value, &mut NoOperationMonitor)
}

/// Like [`binary_search_index`], reporting every probe to `monitor`.
pub fn binary_search_index_monitored<S, Q, M>(
    seq: &S,
    value: &Q,
    monitor: &mut M,
) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    S::Item: Borrow<Q>,
    Q: Ord + ?Sized,
    M: ProbeMonitor + ?Sized,
{
    let len = seq.len();
    monitor.on_enter_search(SearchOperation::BinarySearch, len);

    let mut window = SearchWindow::full(len);
    while !window.is_empty() {
        let mid = window.midpoint();
        monitor.on_probe(window, mid);

        // SAFETY: mid is always in bounds because left < right <= len,
        // therefore mid < len.
        let probe: &Q = unsafe { seq.at_unchecked(mid) }.borrow();
        match probe.cmp(value) {
            Ordering::Less => window.discard_lower(mid),
            Ordering::Greater => window.discard_upper(mid),
            Ordering::Equal => {
                monitor.on_exit_search(SearchOperation::BinarySearch, SearchOutcome::Found(mid));
                return Some(mid);
            }
        }
    }

    monitor.on_exit_search(SearchOperation::BinarySearch, SearchOutcome::NotFound);
    None
}

/// Returns `true` if the sorted sequence contains an element equal to `value`.
///
/// # Invariants
///
/// - `seq` must be sorted in ascending order.
///
/// # Examples
///
/// ```rust
/// # use search_utils::algorithm::contains;
///
/// let data = vec![5, 10, 15, 20];
/// assert!(contains(&data, &15));
/// assert!(!contains(&data, &17));
/// ```
#[inline]
pub fn contains<S, Q>(seq: &S, value: &Q) -> bool
where
    S: RandomAccess + ?Sized,
    S::Item: Borrow<Q>,
    Q: Ord + ?Sized,
{
    binary_search_index(seq, value).is_some()
}

/// Like [`contains`], reporting every probe to `monitor`.
#[inline]
pub fn contains_monitored<S, Q, M>(seq: &S, value: &Q, monitor: &mut M) -> bool
where
    S: RandomAccess + ?Sized,
    S::Item: Borrow<Q>,
    Q: Ord + ?Sized,
    M: ProbeMonitor + ?Sized,
{
    binary_search_index_monitored(seq, value, monitor).is_some()
}
