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

//! Search logging
//!
//! `LogMonitor` turns the monitor callbacks into `tracing` events: one event
//! when a search starts, one per probe, and one with the outcome. The crate
//! never installs a subscriber; binaries decide where the events go.

use crate::{
    monitor::probe_monitor::{ProbeMonitor, SearchOperation, SearchOutcome},
    window::SearchWindow,
};
use tracing::Level;

// `tracing` macros need the level at compile time.
macro_rules! event_at {
    ($level:expr, $($arg:tt)+) => {
        match $level {
            Level::TRACE => tracing::trace!($($arg)+),
            Level::DEBUG => tracing::debug!($($arg)+),
            Level::INFO => tracing::info!($($arg)+),
            Level::WARN => tracing::warn!($($arg)+),
            Level::ERROR => tracing::error!($($arg)+),
        }
    };
}

/// A monitor that emits a `tracing` event for every search callback.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    level: Level,
    probes: u64,
}

impl LogMonitor {
    /// Creates a new `LogMonitor` that emits its events at `level`.
    #[inline]
    pub fn new(level: Level) -> Self {
        Self { level, probes: 0 }
    }

    /// Returns the level the events are emitted at.
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(level: {})", self.level)
    }
}

impl ProbeMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, operation: SearchOperation, len: usize) {
        self.probes = 0;
        event_at!(self.level, %operation, len, "search started");
    }

    fn on_probe(&mut self, window: SearchWindow, mid: usize) {
        self.probes += 1;
        event_at!(
            self.level,
            probe = self.probes,
            left = window.left(),
            right = window.right(),
            mid,
            "probing midpoint"
        );
    }

    fn on_exit_search(&mut self, operation: SearchOperation, outcome: SearchOutcome) {
        event_at!(
            self.level,
            %operation,
            %outcome,
            probes = self.probes,
            "search finished"
        );
    }
}
