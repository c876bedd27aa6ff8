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

//! Search routines over sorted `int64_t` buffers.

use crate::buffer::{sequence_from_raw, write_found};
use search_utils::algorithm;

/// Returns the first index whose element is not less than `value`.
///
/// # Aborts
///
/// Aborts the process if `ptr` is null and `len > 0`. The failed assertion
/// cannot unwind across the C boundary.
///
/// # Safety
///
/// The caller must ensure that `ptr` points to an array of `len` valid `i64`
/// values sorted in ascending order (or that `len` is zero).
#[no_mangle]
pub unsafe extern "C" fn search_utils_i64_lower_bound(
    ptr: *const i64,
    len: usize,
    value: i64,
) -> usize {
    let seq = sequence_from_raw(ptr, len, "search_utils_i64_lower_bound");
    algorithm::lower_bound_index(seq, &value)
}

/// Returns the first index whose element is greater than `value`.
///
/// # Aborts
///
/// Aborts the process if `ptr` is null and `len > 0`. The failed assertion
/// cannot unwind across the C boundary.
///
/// # Safety
///
/// The caller must ensure that `ptr` points to an array of `len` valid `i64`
/// values sorted in ascending order (or that `len` is zero).
#[no_mangle]
pub unsafe extern "C" fn search_utils_i64_upper_bound(
    ptr: *const i64,
    len: usize,
    value: i64,
) -> usize {
    let seq = sequence_from_raw(ptr, len, "search_utils_i64_upper_bound");
    algorithm::upper_bound_index(seq, &value)
}

/// Searches for an element equal to `value`.
///
/// Returns `true` and writes the index of a matching element to `out_index`
/// if one exists. Returns `false` and leaves `out_index` untouched otherwise.
///
/// # Aborts
///
/// Aborts the process if `out_index` is null, or if `ptr` is null and
/// `len > 0`. The failed assertion cannot unwind across the C boundary.
///
/// # Safety
///
/// The caller must ensure that `ptr` points to an array of `len` valid `i64`
/// values sorted in ascending order (or that `len` is zero), and that
/// `out_index` is valid for writes.
#[no_mangle]
pub unsafe extern "C" fn search_utils_i64_binary_search(
    ptr: *const i64,
    len: usize,
    value: i64,
    out_index: *mut usize,
) -> bool {
    let seq = sequence_from_raw(ptr, len, "search_utils_i64_binary_search");
    write_found(
        algorithm::binary_search_index(seq, &value),
        out_index,
        "search_utils_i64_binary_search",
    )
}

/// Returns `true` if the buffer contains an element equal to `value`.
///
/// # Aborts
///
/// Aborts the process if `ptr` is null and `len > 0`. The failed assertion
/// cannot unwind across the C boundary.
///
/// # Safety
///
/// The caller must ensure that `ptr` points to an array of `len` valid `i64`
/// values sorted in ascending order (or that `len` is zero).
#[no_mangle]
pub unsafe extern "C" fn search_utils_i64_contains(
    ptr: *const i64,
    len: usize,
    value: i64,
) -> bool {
    let seq = sequence_from_raw(ptr, len, "search_utils_i64_contains");
    algorithm::contains(seq, &value)
}

/// Returns `true` if the buffer is sorted in ascending order.
///
/// # Aborts
///
/// Aborts the process if `ptr` is null and `len > 0`. The failed assertion
/// cannot unwind across the C boundary.
///
/// # Safety
///
/// The caller must ensure that `ptr` points to an array of `len` valid `i64`
/// values (or that `len` is zero).
#[no_mangle]
pub unsafe extern "C" fn search_utils_i64_is_sorted(ptr: *const i64, len: usize) -> bool {
    let seq = sequence_from_raw(ptr, len, "search_utils_i64_is_sorted");
    algorithm::is_sorted(seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let data = [-7_i64, -2, -2, -2, 5, 9];
        unsafe {
            assert_eq!(search_utils_i64_lower_bound(data.as_ptr(), data.len(), -2), 1);
            assert_eq!(search_utils_i64_upper_bound(data.as_ptr(), data.len(), -2), 4);
            assert_eq!(search_utils_i64_lower_bound(data.as_ptr(), data.len(), i64::MIN), 0);
            assert_eq!(search_utils_i64_upper_bound(data.as_ptr(), data.len(), i64::MAX), 6);
        }
    }

    #[test]
    fn test_binary_search() {
        let data = [-9_i64, -3, 0, 4, 12];
        let mut index = usize::MAX;
        unsafe {
            assert!(search_utils_i64_binary_search(data.as_ptr(), data.len(), 4, &mut index));
            assert_eq!(index, 3);

            index = usize::MAX;
            assert!(!search_utils_i64_binary_search(data.as_ptr(), data.len(), 5, &mut index));
            assert_eq!(index, usize::MAX);
        }
    }

    #[test]
    fn test_contains() {
        let data = [-20_i64, -10, 0, 10, 20];
        unsafe {
            assert!(search_utils_i64_contains(data.as_ptr(), data.len(), -10));
            assert!(!search_utils_i64_contains(data.as_ptr(), data.len(), -15));
        }
    }

    #[test]
    fn test_empty_buffer_from_null() {
        let mut index = 0usize;
        unsafe {
            assert_eq!(search_utils_i64_lower_bound(std::ptr::null(), 0, 1), 0);
            assert_eq!(search_utils_i64_upper_bound(std::ptr::null(), 0, 1), 0);
            assert!(!search_utils_i64_contains(std::ptr::null(), 0, 1));
            assert!(!search_utils_i64_binary_search(std::ptr::null(), 0, 1, &mut index));
            assert!(search_utils_i64_is_sorted(std::ptr::null(), 0));
        }
    }

    #[test]
    fn test_is_sorted() {
        let sorted = [-1_i64, 0, 0, 3];
        let unsorted = [3_i64, -1];
        unsafe {
            assert!(search_utils_i64_is_sorted(sorted.as_ptr(), sorted.len()));
            assert!(!search_utils_i64_is_sorted(unsorted.as_ptr(), unsorted.len()));
        }
    }
}
