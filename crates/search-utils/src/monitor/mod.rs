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

//! Monitoring utilities for sorted-sequence searches
//!
//! Defines the `ProbeMonitor` trait plus lightweight implementations to
//! observe the binary narrowing of a search without touching its logic.
//!
//! Components
//! - `probe_monitor`: the monitoring interface, `SearchOperation` and `SearchOutcome`.
//! - `composite`: fan‑out monitor; forwards every event in insertion order.
//! - `log`: `tracing` events for every search and probe.
//! - `no_op`: zero‑overhead placeholder used by the plain search functions.
//! - `statistics`: counts searches, probes, hits and misses.
//!
//! Notes
//! - Callbacks take `&mut self`; keep handlers fast and non‑blocking.
//! - Monitors observe only; they can never change the result of a search.

pub mod composite;
#[cfg(feature = "tracing")]
pub mod log;
pub mod no_op;
pub mod probe_monitor;
pub mod statistics;
