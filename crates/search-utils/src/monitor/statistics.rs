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

//! Search statistics
//!
//! `StatisticsMonitor` tallies what the searches it observes actually did:
//! how many searches ran, how many midpoint probes they needed in total and
//! at most, and how exact-match searches ended. Counters saturate instead of
//! wrapping.

use crate::{
    monitor::probe_monitor::{ProbeMonitor, SearchOperation, SearchOutcome},
    window::SearchWindow,
};

/// Counters collected by a `StatisticsMonitor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Total searches started.
    pub searches: u64,
    /// Total midpoint comparisons across all searches.
    pub probes: u64,
    /// The largest number of probes a single search needed.
    pub max_probes_per_search: u64,
    /// Exact-match searches that found the target.
    pub hits: u64,
    /// Exact-match searches that did not find the target.
    pub misses: u64,
}

impl SearchStatistics {
    #[inline]
    pub fn on_search(&mut self) {
        self.searches = self.searches.saturating_add(1);
    }

    #[inline]
    pub fn on_probe(&mut self) {
        self.probes = self.probes.saturating_add(1);
    }

    #[inline]
    pub fn on_probe_count(&mut self, probes: u64) {
        self.max_probes_per_search = self.max_probes_per_search.max(probes);
    }

    #[inline]
    pub fn on_hit(&mut self) {
        self.hits = self.hits.saturating_add(1);
    }

    #[inline]
    pub fn on_miss(&mut self) {
        self.misses = self.misses.saturating_add(1);
    }

    /// Returns the average number of probes per search, or `0.0` if no
    /// search has run yet.
    #[inline]
    pub fn average_probes(&self) -> f64 {
        if self.searches == 0 {
            return 0.0;
        }
        self.probes as f64 / self.searches as f64
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Searches:             {}", self.searches)?;
        writeln!(f, "  Probes:               {}", self.probes)?;
        writeln!(f, "  Max probes / search:  {}", self.max_probes_per_search)?;
        writeln!(f, "  Avg probes / search:  {:.2}", self.average_probes())?;
        writeln!(f, "  Hits:                 {}", self.hits)?;
        writeln!(f, "  Misses:               {}", self.misses)?;
        Ok(())
    }
}

/// A monitor that accumulates `SearchStatistics` over every search it
/// observes.
#[derive(Debug, Clone, Default)]
pub struct StatisticsMonitor {
    statistics: SearchStatistics,
    current_probes: u64,
}

impl StatisticsMonitor {
    /// Creates a new `StatisticsMonitor` with all counters at zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the statistics collected so far.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Resets all counters to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.statistics = SearchStatistics::default();
        self.current_probes = 0;
    }
}

impl ProbeMonitor for StatisticsMonitor {
    fn name(&self) -> &str {
        "StatisticsMonitor"
    }

    #[inline]
    fn on_enter_search(&mut self, _operation: SearchOperation, _len: usize) {
        self.statistics.on_search();
        self.current_probes = 0;
    }

    #[inline]
    fn on_probe(&mut self, _window: SearchWindow, _mid: usize) {
        self.statistics.on_probe();
        self.current_probes = self.current_probes.saturating_add(1);
    }

    #[inline]
    fn on_exit_search(&mut self, _operation: SearchOperation, outcome: SearchOutcome) {
        self.statistics.on_probe_count(self.current_probes);
        match outcome {
            SearchOutcome::Found(_) => self.statistics.on_hit(),
            SearchOutcome::NotFound => self.statistics.on_miss(),
            SearchOutcome::Bound(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{
        binary_search_index_monitored, contains_monitored, equal_range_monitored,
        lower_bound_index_monitored,
    };

    #[test]
    fn test_fresh_monitor_is_zeroed() {
        let monitor = StatisticsMonitor::new();
        assert_eq!(*monitor.statistics(), SearchStatistics::default());
        assert_eq!(monitor.statistics().average_probes(), 0.0);
    }

    #[test]
    fn test_counts_hits_and_misses() {
        let data = [1, 3, 5, 7, 9];
        let mut monitor = StatisticsMonitor::new();

        assert_eq!(binary_search_index_monitored(&data, &5, &mut monitor), Some(2));
        assert_eq!(binary_search_index_monitored(&data, &4, &mut monitor), None);
        assert!(contains_monitored(&data, &9, &mut monitor));

        let stats = monitor.statistics();
        assert_eq!(stats.searches, 3);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_exact_match_on_first_probe() {
        let data = [2, 4, 6, 8, 10];
        let mut monitor = StatisticsMonitor::new();
        assert_eq!(binary_search_index_monitored(&data, &6, &mut monitor), Some(2));
        assert_eq!(monitor.statistics().probes, 1);
        assert_eq!(monitor.statistics().max_probes_per_search, 1);
    }

    #[test]
    fn test_bound_searches_probe_logarithmically() {
        let data: Vec<u32> = (0..1024).collect();
        let mut monitor = StatisticsMonitor::new();

        let _ = lower_bound_index_monitored(&data, &700, &mut monitor);
        let stats = *monitor.statistics();
        assert_eq!(stats.searches, 1);
        // A window of 1024 collapses after exactly 10 or 11 halvings.
        assert!(stats.probes <= 11);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_equal_range_counts_two_searches() {
        let data = [1, 2, 2, 2, 5, 7];
        let mut monitor = StatisticsMonitor::new();
        assert_eq!(equal_range_monitored(&data, &2, &mut monitor), 1..4);
        assert_eq!(monitor.statistics().searches, 2);
    }

    #[test]
    fn test_empty_sequence_needs_no_probes() {
        let data: [i32; 0] = [];
        let mut monitor = StatisticsMonitor::new();
        assert_eq!(binary_search_index_monitored(&data, &1, &mut monitor), None);
        assert_eq!(monitor.statistics().probes, 0);
        assert_eq!(monitor.statistics().misses, 1);
    }

    #[test]
    fn test_reset() {
        let data = [1, 2, 3];
        let mut monitor = StatisticsMonitor::new();
        let _ = binary_search_index_monitored(&data, &2, &mut monitor);
        monitor.reset();
        assert_eq!(*monitor.statistics(), SearchStatistics::default());
    }

    #[test]
    fn test_display() {
        let stats = SearchStatistics {
            searches: 2,
            probes: 6,
            max_probes_per_search: 4,
            hits: 1,
            misses: 1,
        };
        let text = stats.to_string();
        assert!(text.starts_with("Search Statistics:"));
        assert!(text.contains("Probes:               6"));
        assert!(text.contains("Avg probes / search:  3.00"));
    }
}
