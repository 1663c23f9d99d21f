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

//! # Math Primitives
//!
//! Foundational structures for time-window logic over continuous time.
//!
//! ## Submodules
//!
//! - `interval`: A generic closed `[start, end]` interval over floating-point
//!   time with validation, predicates (intersection, containment), set
//!   operations (intersection/hull/difference/gap/split), and measurements.
//!   Includes conversions to/from `std::ops::RangeInclusive` and `RangeBounds`.
//! - `window`: An ordered set of pairwise disjoint closed intervals with an
//!   optional capacity bound. Every mutation keeps the set sorted and merged.
//!
//! ## Motivation
//!
//! Event search confines its sampling to a window and reports its findings as
//! a window. Closed intervals match the semantics of "the condition holds at
//! both endpoints", and a normalized set makes measure and cardinality
//! well-defined.

pub mod interval;
pub mod window;
