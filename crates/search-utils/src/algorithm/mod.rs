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

//! # Sorted-Sequence Search
//!
//! Binary narrowing over a half-open window `[left, right)`: probe the
//! midpoint, discard the half that cannot hold the answer, repeat until the
//! window collapses. All routines take any `RandomAccess` sequence and a
//! borrowed target, run in `O(log n)` comparisons and allocate nothing.
//!
//! - `bounds`: `lower_bound_index`, `upper_bound_index`, `equal_range`, `count`.
//! - `exact`: `binary_search_index`, `contains`.
//! - `order`: `is_sorted` and `first_unsorted_index`, for callers that want
//!   to validate input first.
//!
//! Every narrowing routine has a `*_monitored` variant reporting each probe
//! to a `ProbeMonitor`; the plain variants run with `NoOperationMonitor`.
//!
//! # Invariants
//!
//! - The sequence must be sorted in ascending order. This is not checked.
//!   On unsorted input the results are unspecified, but every call still
//!   terminates after at most `floor(log2(n)) + 1` probes and never reads
//!   outside the sequence.

mod bounds;
mod exact;
mod order;

pub use bounds::{
    count, equal_range, equal_range_monitored, lower_bound_index, lower_bound_index_monitored,
    upper_bound_index, upper_bound_index_monitored,
};
pub use exact::{binary_search_index, binary_search_index_monitored, contains, contains_monitored};
pub use order::{first_unsorted_index, is_sorted};
