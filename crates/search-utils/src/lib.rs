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

//! # Search Utils
//!
//! Deterministic search primitives over sorted, randomly-indexable sequences.
//! Every routine narrows a half-open index window `[left, right)` by probing
//! its midpoint, so each call performs `O(log n)` comparisons, allocates
//! nothing, and never fails.
//!
//! ## Modules
//!
//! - `algorithm`: `binary_search_index`, `lower_bound_index`,
//!   `upper_bound_index`, `contains`, plus `equal_range`, `count`,
//!   `is_sorted` and `first_unsorted_index`. Each narrowing routine also
//!   has a `*_monitored` variant.
//! - `sequence`: the `RandomAccess` abstraction over slices, arrays, `Vec`
//!   and `VecDeque`, and the `SortedSearch` extension trait.
//! - `window`: the `SearchWindow` type describing the candidate range while
//!   a search narrows.
//! - `monitor`: `ProbeMonitor` hooks for observing searches (statistics,
//!   `tracing` output, fan-out). `LogMonitor` sits behind the default
//!   `tracing` feature; without it the crate has no dependencies.
//!
//! ## Usage
//!
//! ```rust
//! use search_utils::prelude::*;
//!
//! let data = vec![1, 2, 2, 2, 5, 7];
//!
//! assert_eq!(lower_bound_index(&data, &2), 1);
//! assert_eq!(upper_bound_index(&data, &2), 4);
//! assert_eq!(data.equal_range(&2), 1..4);
//! assert!(contains(&data, &5));
//! assert_eq!(binary_search_index(&data, &3), None);
//! ```
//!
//! All routines assume the sequence is sorted in ascending order. Unsorted
//! input is not detected; results are then unspecified, but every call still
//! terminates and never indexes out of bounds.

pub mod algorithm;
pub mod monitor;
pub mod sequence;
pub mod window;

/// Re-exports of the commonly used items.
pub mod prelude {
    pub use crate::algorithm::{
        binary_search_index, binary_search_index_monitored, contains, contains_monitored, count,
        equal_range, equal_range_monitored, first_unsorted_index, is_sorted, lower_bound_index,
        lower_bound_index_monitored, upper_bound_index, upper_bound_index_monitored,
    };
    pub use crate::monitor::{
        composite::CompositeProbeMonitor,
        no_op::NoOperationMonitor,
        probe_monitor::{ProbeMonitor, SearchOperation, SearchOutcome},
        statistics::{SearchStatistics, StatisticsMonitor},
    };
    #[cfg(feature = "tracing")]
    pub use crate::monitor::log::LogMonitor;
    pub use crate::sequence::{RandomAccess, SortedSearch};
    pub use crate::window::SearchWindow;
}
