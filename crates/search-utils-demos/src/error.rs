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

use thiserror::Error;

/// Errors reported by the demo binaries.
#[derive(Debug, Error)]
pub enum SearchCliError {
    /// The elements passed on the command line are not in ascending order.
    #[error(
        "elements must be sorted in ascending order: element {index} ({current}) is smaller than its predecessor ({previous})"
    )]
    UnsortedInput {
        index: usize,
        previous: i64,
        current: i64,
    },
    /// The global `tracing` subscriber could not be installed.
    #[error("failed to install tracing subscriber: {0}")]
    Logging(String),
    /// Writing the report failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
