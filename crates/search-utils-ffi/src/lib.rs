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

//! # Search Utils FFI
//!
//! **C-Compatible Bindings for the Search Utils Routines.**
//!
//! This crate exposes the sorted-sequence search routines to C, C++ and any
//! other environment that can call a C ABI. Sequences are passed as a raw
//! element pointer plus a length; nothing is ever copied, allocated or
//! retained past the call.
//!
//! ## Core Design Principles
//!
//! 1.  **Borrowed Buffers**: The host keeps ownership of every buffer. A call only
//!     reads `len` elements starting at `ptr` and returns.
//! 2.  **Plain Results**: Bound queries return a `size_t` in `[0, len]`. Exact
//!     searches return `bool` and write the index through an out pointer.
//! 3.  **Fail-Fast Safety**: Passing `NULL` for a non-empty buffer or for an out
//!     pointer fails an assertion rather than causing undefined behavior. The
//!     panic cannot unwind out of an `extern "C"` function, so the process aborts.
//!     A `NULL` buffer with `len == 0` is accepted as the empty sequence.
//!
//! The buffers must be sorted in ascending order, exactly as for the Rust API.

pub mod int64;
pub mod uint64;

mod buffer;
