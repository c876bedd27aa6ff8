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
    monitor::probe_monitor::{ProbeMonitor, SearchOperation, SearchOutcome},
    window::SearchWindow,
};

/// A no-operation monitor that implements the `ProbeMonitor` trait
/// but does nothing on any of the events.
///
/// The plain search functions run their monitored counterparts with this
/// monitor; every callback inlines away.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub const fn new() -> Self {
        Self
    }
}

impl ProbeMonitor for NoOperationMonitor {
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, _operation: SearchOperation, _len: usize) {}

    #[inline(always)]
    fn on_probe(&mut self, _window: SearchWindow, _mid: usize) {}

    #[inline(always)]
    fn on_exit_search(&mut self, _operation: SearchOperation, _outcome: SearchOutcome) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{binary_search_index, binary_search_index_monitored};

    #[test]
    fn test_name() {
        assert_eq!(NoOperationMonitor::new().name(), "NoOperationMonitor");
    }

    #[test]
    fn test_monitored_search_matches_plain_search() {
        let data = [1, 3, 5, 7, 9];
        let mut monitor = NoOperationMonitor::new();
        for value in 0..=10 {
            assert_eq!(
                binary_search_index_monitored(&data, &value, &mut monitor),
                binary_search_index(&data, &value)
            );
        }
    }
}
