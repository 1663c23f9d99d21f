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

//! # Sextant Core
//!
//! Foundational interval math for the Sextant event-search ecosystem. This
//! crate holds the numeric-agnostic building blocks the search engine consumes
//! and produces: closed time intervals and the ordered, disjoint interval sets
//! ("windows") that describe where a condition holds.
//!
//! ## Modules
//!
//! - `math`: Closed interval `[start, end]` primitives over `num_traits::Float`
//!   with validation, set operations (intersection/hull/difference/gap/split),
//!   and measurements, plus the `Window` interval set with capacity bounds and
//!   the complete window arithmetic (insert, remove, union, intersection,
//!   difference, complement, contract, expand, gap filling, filtering,
//!   summaries, and validity checks).
//! - `utils`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`) used to
//!   address intervals within a window and monitors within a composite.
//!
//! ## Purpose
//!
//! Event search turns a boolean condition over time into a set of intervals.
//! Keeping that set normalized at all times (sorted, disjoint, never touching)
//! lets every consumer rely on the invariant instead of re-checking it.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod utils;
