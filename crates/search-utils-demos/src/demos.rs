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

//! Fixed walkthroughs of the three core routines. Each writes its report to
//! the given writer so the binaries print to stdout and the tests can check
//! the exact text.

use search_utils::algorithm::{binary_search_index, contains, lower_bound_index, upper_bound_index};
use std::io::Write;

/// Looks up `6` in `[2, 4, 6, 8, 10]`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn binary_search_demo<W: Write>(out: &mut W) -> std::io::Result<()> {
    let data = vec![2, 4, 6, 8, 10];

    match binary_search_index(&data, &6) {
        Some(index) => writeln!(out, "Value found at index: {}", index),
        None => writeln!(out, "Value not found"),
    }
}

/// Brackets the run of `2`s in `[1, 2, 2, 2, 5, 7]`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn bounds_demo<W: Write>(out: &mut W) -> std::io::Result<()> {
    let data = vec![1, 2, 2, 2, 5, 7];

    let lower = lower_bound_index(&data, &2);
    let upper = upper_bound_index(&data, &2);

    writeln!(out, "Lower bound index: {}", lower)?;
    writeln!(out, "Upper bound index: {}", upper)
}

/// Checks `15` and `17` against `[5, 10, 15, 20]`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn contains_demo<W: Write>(out: &mut W) -> std::io::Result<()> {
    let data = vec![5, 10, 15, 20];

    let exists = contains(&data, &15);
    let missing = contains(&data, &17);

    writeln!(out, "15 exists: {}", exists)?;
    writeln!(out, "17 exists: {}", missing)
}
