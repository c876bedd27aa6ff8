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

//! Command-line front end: `search <operation> <value> [elements...]`.
//!
//! The library leaves sortedness as an unchecked precondition; input typed
//! on a command line is untrusted, so `run` validates it up front.

use crate::error::SearchCliError;
use clap::{Parser, ValueEnum};
use search_utils::prelude::*;
use std::io::Write;
use tracing::Level;

/// The search routine to run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Operation {
    /// Index of any element equal to the value.
    BinarySearch,
    /// First index whose element is not less than the value.
    LowerBound,
    /// First index whose element is greater than the value.
    UpperBound,
    /// Whether an element equal to the value exists.
    Contains,
    /// Index range of the elements equal to the value.
    EqualRange,
    /// Number of elements equal to the value.
    Count,
}

#[derive(Parser, Debug)]
#[command(name = "search")]
#[command(version)]
#[command(about = "Search a sorted list of integers", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct SearchArgs {
    /// Search routine to run
    #[arg(value_enum)]
    pub operation: Operation,

    /// Value to search for
    pub value: i64,

    /// Elements of the sequence, in ascending order
    pub elements: Vec<i64>,

    /// Log every probe of the search through `tracing`
    #[arg(long)]
    pub trace: bool,

    /// Level of the probe events emitted with `--trace`
    #[arg(long, default_value = "debug")]
    pub log_level: Level,

    /// Print probe statistics after the result
    #[arg(long)]
    pub stats: bool,
}

/// What a single search produced, ready to be printed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SearchReport {
    Index(Option<usize>),
    LowerBound(usize),
    UpperBound(usize),
    Contains { value: i64, exists: bool },
    EqualRange(std::ops::Range<usize>),
    Count(usize),
}

impl std::fmt::Display for SearchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchReport::Index(Some(index)) => write!(f, "Value found at index: {}", index),
            SearchReport::Index(None) => write!(f, "Value not found"),
            SearchReport::LowerBound(index) => write!(f, "Lower bound index: {}", index),
            SearchReport::UpperBound(index) => write!(f, "Upper bound index: {}", index),
            SearchReport::Contains { value, exists } => write!(f, "{} exists: {}", value, exists),
            SearchReport::EqualRange(range) => {
                write!(f, "Equal range: [{}, {})", range.start, range.end)
            }
            SearchReport::Count(count) => write!(f, "Count: {}", count),
        }
    }
}

/// Runs `operation` for `value` over the sorted `elements`.
pub fn execute<M>(operation: Operation, value: i64, elements: &[i64], monitor: &mut M) -> SearchReport
where
    M: ProbeMonitor + ?Sized,
{
    match operation {
        Operation::BinarySearch => {
            SearchReport::Index(binary_search_index_monitored(elements, &value, monitor))
        }
        Operation::LowerBound => {
            SearchReport::LowerBound(lower_bound_index_monitored(elements, &value, monitor))
        }
        Operation::UpperBound => {
            SearchReport::UpperBound(upper_bound_index_monitored(elements, &value, monitor))
        }
        Operation::Contains => SearchReport::Contains {
            value,
            exists: contains_monitored(elements, &value, monitor),
        },
        Operation::EqualRange => {
            SearchReport::EqualRange(equal_range_monitored(elements, &value, monitor))
        }
        Operation::Count => {
            SearchReport::Count(equal_range_monitored(elements, &value, monitor).len())
        }
    }
}

/// Validates the input, runs the search and writes the report to `out`.
///
/// # Errors
///
/// Returns `SearchCliError::UnsortedInput` if the elements are not in
/// ascending order, or `SearchCliError::Io` if writing fails.
pub fn run<W: Write>(args: &SearchArgs, out: &mut W) -> Result<SearchReport, SearchCliError> {
    if let Some(index) = first_unsorted_index(args.elements.as_slice()) {
        return Err(SearchCliError::UnsortedInput {
            index,
            previous: args.elements[index - 1],
            current: args.elements[index],
        });
    }

    let mut statistics = StatisticsMonitor::new();
    let report = {
        let mut monitor = CompositeProbeMonitor::with_capacity(2);
        monitor.add_monitor(&mut statistics);
        if args.trace {
            monitor.add_monitor(LogMonitor::new(args.log_level));
        }
        execute(args.operation, args.value, &args.elements, &mut monitor)
    };

    writeln!(out, "{}", report)?;
    if args.stats {
        write!(out, "{}", statistics.statistics())?;
    }
    Ok(report)
}
