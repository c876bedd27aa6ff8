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

//! Monitoring combinators for searches
//!
//! Provides `CompositeProbeMonitor`, a fan‑out monitor that forwards every
//! event to its children. This lets you mix logging and statistics without
//! coupling them to the search routines.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.

use crate::{
    monitor::probe_monitor::{ProbeMonitor, SearchOperation, SearchOutcome},
    window::SearchWindow,
};

/// A probe monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeProbeMonitor<'a> {
    monitors: Vec<Box<dyn ProbeMonitor + 'a>>,
}

impl Default for CompositeProbeMonitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeProbeMonitor<'a> {
    /// Creates a new empty `CompositeProbeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeProbeMonitor` with the specified capacity.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: ProbeMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn ProbeMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn ProbeMonitor + 'a>] {
        &self.monitors
    }

    /// Clears all monitors from the composite monitor.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl std::fmt::Debug for CompositeProbeMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeProbeMonitor")
            .field("monitors", &self.monitors)
            .finish()
    }
}

impl<'a> FromIterator<Box<dyn ProbeMonitor + 'a>> for CompositeProbeMonitor<'a> {
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn ProbeMonitor + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl ProbeMonitor for CompositeProbeMonitor<'_> {
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeProbeMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, operation: SearchOperation, len: usize) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(operation, len);
        }
    }

    #[inline(always)]
    fn on_probe(&mut self, window: SearchWindow, mid: usize) {
        for monitor in &mut self.monitors {
            monitor.on_probe(window, mid);
        }
    }

    #[inline(always)]
    fn on_exit_search(&mut self, operation: SearchOperation, outcome: SearchOutcome) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(operation, outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{binary_search_index_monitored, upper_bound_index_monitored};
    use crate::monitor::{no_op::NoOperationMonitor, statistics::StatisticsMonitor};

    /// Records every callback so ordering can be asserted.
    #[derive(Default)]
    struct RecordingMonitor {
        tag: &'static str,
        events: Vec<String>,
    }

    impl ProbeMonitor for RecordingMonitor {
        fn name(&self) -> &str {
            self.tag
        }

        fn on_enter_search(&mut self, operation: SearchOperation, len: usize) {
            self.events.push(format!("enter {} {}", operation, len));
        }

        fn on_probe(&mut self, window: SearchWindow, mid: usize) {
            self.events.push(format!("probe {} {}", window, mid));
        }

        fn on_exit_search(&mut self, operation: SearchOperation, outcome: SearchOutcome) {
            self.events.push(format!("exit {} {}", operation, outcome));
        }
    }

    #[test]
    fn test_empty_composite() {
        let composite = CompositeProbeMonitor::new();
        assert!(composite.is_empty());
        assert_eq!(composite.len(), 0);
        assert_eq!(composite.name(), "CompositeProbeMonitor");
    }

    #[test]
    fn test_forwards_to_all_children() {
        let data = [2, 4, 6, 8, 10];
        let mut first = StatisticsMonitor::new();
        let mut second = StatisticsMonitor::new();

        {
            let mut composite = CompositeProbeMonitor::with_capacity(3);
            composite.add_monitor(&mut first);
            composite.add_monitor(&mut second);
            composite.add_monitor(NoOperationMonitor::new());
            assert_eq!(composite.len(), 3);

            assert_eq!(
                binary_search_index_monitored(&data, &8, &mut composite),
                Some(3)
            );
        }

        assert_eq!(first.statistics(), second.statistics());
        assert_eq!(first.statistics().searches, 1);
        assert_eq!(first.statistics().hits, 1);
    }

    #[test]
    fn test_event_sequence() {
        let data = [1, 3, 5];
        let mut recorder = RecordingMonitor {
            tag: "recorder",
            ..Default::default()
        };

        {
            let mut composite: CompositeProbeMonitor<'_> =
                std::iter::once(Box::new(&mut recorder) as Box<dyn ProbeMonitor + '_>).collect();
            assert_eq!(upper_bound_index_monitored(&data, &3, &mut composite), 2);
        }

        assert_eq!(
            recorder.events,
            vec![
                "enter upper_bound 3".to_string(),
                "probe [0, 3) 1".to_string(),
                "probe [2, 3) 2".to_string(),
                "exit upper_bound Bound(2)".to_string(),
            ]
        );
    }

    #[test]
    fn test_debug_lists_children() {
        let mut composite = CompositeProbeMonitor::new();
        composite.add_monitor_boxed(Box::new(NoOperationMonitor::new()));
        assert_eq!(
            format!("{:?}", composite),
            "CompositeProbeMonitor { monitors: [ProbeMonitor(NoOperationMonitor)] }"
        );
        composite.clear();
        assert!(composite.monitors().is_empty());
    }
}
