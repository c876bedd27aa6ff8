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

/// Reinterprets a host buffer as a slice.
///
/// # Panics
///
/// Panics if `ptr` is null while `len > 0`.
/// Called from an `extern "C"` function, the panic aborts the process.
///
/// # Safety
///
/// If `len > 0`, `ptr` must point to `len` initialized, properly aligned
/// values of `T` that stay valid and unmodified for `'a`.
#[inline]
pub(crate) unsafe fn sequence_from_raw<'a, T>(
    ptr: *const T,
    len: usize,
    caller: &str,
) -> &'a [T] {
    if len == 0 {
        return &[];
    }
    assert!(
        !ptr.is_null(),
        "called `{}` with `ptr` as null pointer and a length of {}",
        caller,
        len
    );
    std::slice::from_raw_parts(ptr, len)
}

/// Writes `index` through `out_index` if the search found a match.
///
/// # Panics
///
/// Panics if `out_index` is null.
/// Called from an `extern "C"` function, the panic aborts the process.
///
/// # Safety
///
/// `out_index` must be valid for a write of one `usize`.
#[inline]
pub(crate) unsafe fn write_found(
    found: Option<usize>,
    out_index: *mut usize,
    caller: &str,
) -> bool {
    assert!(
        !out_index.is_null(),
        "called `{}` with `out_index` as null pointer",
        caller
    );
    match found {
        Some(index) => {
            *out_index = index;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_pointer_with_zero_length_is_empty() {
        let slice: &[i64] = unsafe { sequence_from_raw(std::ptr::null(), 0, "test") };
        assert!(slice.is_empty());
    }

    #[test]
    #[should_panic(expected = "called `test` with `ptr` as null pointer")]
    fn test_null_pointer_with_length_panics() {
        let _: &[i64] = unsafe { sequence_from_raw(std::ptr::null(), 3, "test") };
    }

    #[test]
    fn test_write_found_leaves_out_untouched_on_miss() {
        let mut out = 77usize;
        assert!(!unsafe { write_found(None, &mut out, "test") });
        assert_eq!(out, 77);
        assert!(unsafe { write_found(Some(3), &mut out, "test") });
        assert_eq!(out, 3);
    }

    #[test]
    #[should_panic(expected = "called `test` with `out_index` as null pointer")]
    fn test_write_found_null_out_panics() {
        unsafe { write_found(Some(1), std::ptr::null_mut(), "test") };
    }
}
