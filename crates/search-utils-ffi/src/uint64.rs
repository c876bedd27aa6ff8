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

//! Search routines over sorted `uint64_t` buffers.

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
/// The caller must ensure that `ptr` points to an array of `len` valid `u64`
/// values sorted in ascending order (or that `len` is zero).
#[no_mangle]
pub unsafe extern "C" fn search_utils_u64_lower_bound(
    ptr: *const u64,
    len: usize,
    value: u64,
) -> usize {
    let seq = sequence_from_raw(ptr, len, "search_utils_u64_lower_bound");
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
/// The caller must ensure that `ptr` points to an array of `len` valid `u64`
/// values sorted in ascending order (or that `len` is zero).
#[no_mangle]
pub unsafe extern "C" fn search_utils_u64_upper_bound(
    ptr: *const u64,
    len: usize,
    value: u64,
) -> usize {
    let seq = sequence_from_raw(ptr, len, "search_utils_u64_upper_bound");
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
/// The caller must ensure that `ptr` points to an array of `len` valid `u64`
/// values sorted in ascending order (or that `len` is zero), and that
/// `out_index` is valid for writes.
#[no_mangle]
pub unsafe extern "C" fn search_utils_u64_binary_search(
    ptr: *const u64,
    len: usize,
    value: u64,
    out_index: *mut usize,
) -> bool {
    let seq = sequence_from_raw(ptr, len, "search_utils_u64_binary_search");
    write_found(
        algorithm::binary_search_index(seq, &value),
        out_index,
        "search_utils_u64_binary_search",
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
/// The caller must ensure that `ptr` points to an array of `len` valid `u64`
/// values sorted in ascending order (or that `len` is zero).
#[no_mangle]
pub unsafe extern "C" fn search_utils_u64_contains(
    ptr: *const u64,
    len: usize,
    value: u64,
) -> bool {
    let seq = sequence_from_raw(ptr, len, "search_utils_u64_contains");
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
/// The caller must ensure that `ptr` points to an array of `len` valid `u64`
/// values (or that `len` is zero).
#[no_mangle]
pub unsafe extern "C" fn search_utils_u64_is_sorted(ptr: *const u64, len: usize) -> bool {
    let seq = sequence_from_raw(ptr, len, "search_utils_u64_is_sorted");
    algorithm::is_sorted(seq)
}
