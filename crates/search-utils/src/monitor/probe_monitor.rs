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

//! Probe monitoring interface
//!
//! Declares the `ProbeMonitor` trait together with `SearchOperation` and
//! `SearchOutcome`. Every monitored search reports the same lifecycle:
//!
//! - enter → probe (zero or more times) → exit
//!
//! `on_probe` receives the window as it was *before* the probe narrowed it,
//! so `window.len()` shrinks by at least half between consecutive probes of
//! the same search.

use crate::window::SearchWindow;

/// The search routine that is reporting to a monitor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SearchOperation {
    /// Exact-match search (`binary_search_index`).
    BinarySearch,
    /// First index whose element is not less than the target.
    LowerBound,
    /// First index whose element is greater than the target.
    UpperBound,
}

impl SearchOperation {
    /// Returns a short, stable name for the operation.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SearchOperation::BinarySearch => "binary_search",
            SearchOperation::LowerBound => "lower_bound",
            SearchOperation::UpperBound => "upper_bound",
        }
    }
}

impl std::fmt::Display for SearchOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result a search reported when it finished.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SearchOutcome {
    /// A bound query settled on this insertion index.
    Bound(usize),
    /// An exact-match search found the target at this index.
    Found(usize),
    /// An exact-match search exhausted the window without a match.
    NotFound,
}

impl SearchOutcome {
    /// Returns the index carried by the outcome, if any.
    #[inline]
    pub const fn index(&self) -> Option<usize> {
        match self {
            SearchOutcome::Bound(index) | SearchOutcome::Found(index) => Some(*index),
            SearchOutcome::NotFound => None,
        }
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::Bound(index) => write!(f, "Bound({})", index),
            SearchOutcome::Found(index) => write!(f, "Found({})", index),
            SearchOutcome::NotFound => write!(f, "NotFound"),
        }
    }
}

/// Trait for observing searches over sorted sequences.
pub trait ProbeMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once when a search starts, with the length of the sequence.
    fn on_enter_search(&mut self, operation: SearchOperation, len: usize);
    /// Called for every midpoint comparison. `window` is the candidate
    /// window before narrowing and `mid` the probed index inside it.
    fn on_probe(&mut self, window: SearchWindow, mid: usize);
    /// Called once when a search finishes.
    fn on_exit_search(&mut self, operation: SearchOperation, outcome: SearchOutcome);
}

impl<M> ProbeMonitor for &mut M
where
    M: ProbeMonitor + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_search(&mut self, operation: SearchOperation, len: usize) {
        (**self).on_enter_search(operation, len);
    }

    #[inline(always)]
    fn on_probe(&mut self, window: SearchWindow, mid: usize) {
        (**self).on_probe(window, mid);
    }

    #[inline(always)]
    fn on_exit_search(&mut self, operation: SearchOperation, outcome: SearchOutcome) {
        (**self).on_exit_search(operation, outcome);
    }
}

impl std::fmt::Debug for dyn ProbeMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProbeMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn ProbeMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProbeMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names() {
        assert_eq!(SearchOperation::BinarySearch.to_string(), "binary_search");
        assert_eq!(SearchOperation::LowerBound.to_string(), "lower_bound");
        assert_eq!(SearchOperation::UpperBound.to_string(), "upper_bound");
    }

    #[test]
    fn test_outcome_index() {
        assert_eq!(SearchOutcome::Bound(3).index(), Some(3));
        assert_eq!(SearchOutcome::Found(0).index(), Some(0));
        assert_eq!(SearchOutcome::NotFound.index(), None);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(SearchOutcome::Bound(4).to_string(), "Bound(4)");
        assert_eq!(SearchOutcome::Found(2).to_string(), "Found(2)");
        assert_eq!(SearchOutcome::NotFound.to_string(), "NotFound");
    }

    struct Named;

    impl ProbeMonitor for Named {
        fn name(&self) -> &str {
            "Named"
        }
        fn on_enter_search(&mut self, _operation: SearchOperation, _len: usize) {}
        fn on_probe(&mut self, _window: SearchWindow, _mid: usize) {}
        fn on_exit_search(&mut self, _operation: SearchOperation, _outcome: SearchOutcome) {}
    }

    #[test]
    fn test_dyn_monitor_formatting() {
        let monitor: Box<dyn ProbeMonitor> = Box::new(Named);
        assert_eq!(format!("{:?}", monitor), "ProbeMonitor(Named)");
        assert_eq!(format!("{}", monitor), "ProbeMonitor(Named)");
    }

    #[test]
    fn test_mut_reference_forwards_name() {
        let mut inner = Named;
        let by_ref = &mut inner;
        assert_eq!(ProbeMonitor::name(&by_ref), "Named");
    }
}
