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

use crate::sequence::RandomAccess;

/// Checks whether the sequence is sorted in ascending (non-decreasing) order.
///
/// The search routines never call this; it is meant for callers that want
/// to validate untrusted input once before searching it many times. Runs in
/// `O(n)`.
///
/// # Examples
///
/// ```rust
/// # use search_utils::algorithm::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2, 5]));
/// assert!(!is_sorted(&[3, 1, 2]));
/// assert!(is_sorted::<[i32; 0]>(&[]));
/// ```
pub fn is_sorted<S>(seq: &S) -> bool
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    first_unsorted_index(seq).is_none()
}

/// Returns the index `i` of the first element that is smaller than its
/// predecessor at `i - 1`, or `None` if the sequence is sorted.
///
/// # Examples
///
/// ```rust
/// # use search_utils::algorithm::first_unsorted_index;
///
/// assert_eq!(first_unsorted_index(&[1, 4, 3, 5]), Some(2));
/// assert_eq!(first_unsorted_index(&[1, 4, 4, 5]), None);
/// ```
pub fn first_unsorted_index<S>(seq: &S) -> Option<usize>
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    let len = seq.len();
    (1..len).find(|&i| {
        // SAFETY: 1 <= i < len, so both i - 1 and i are in bounds.
        let (previous, current) = unsafe { (seq.at_unchecked(i - 1), seq.at_unchecked(i)) };
        current < previous
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_is_sorted_empty_and_single() {
        let empty: Vec<i32> = vec![];
        assert!(is_sorted(&empty));
        assert!(is_sorted(&[42]));
    }

    #[test]
    fn test_is_sorted_with_duplicates() {
        assert!(is_sorted(&[1, 2, 2, 2, 5, 7]));
        assert!(is_sorted(&[3, 3, 3]));
    }

    #[test]
    fn test_is_sorted_rejects_descending_pair() {
        assert!(!is_sorted(&[1, 2, 3, 2]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn test_first_unsorted_index() {
        assert_eq!(first_unsorted_index(&[5, 1]), Some(1));
        assert_eq!(first_unsorted_index(&[1, 2, 3, 0, -1]), Some(3));
        assert_eq!(first_unsorted_index::<[u8; 0]>(&[]), None);
    }

    #[test]
    fn test_is_sorted_vec_deque() {
        let ring: VecDeque<&str> = ["a", "b", "c"].into_iter().collect();
        assert!(is_sorted(&ring));
        let ring: VecDeque<&str> = ["b", "a"].into_iter().collect();
        assert!(!is_sorted(&ring));
    }
}
