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

//! # Sextant Search
//!
//! Step-and-bisect search for the time windows where a boolean condition
//! holds.
//!
//! Given a confinement window, a sampling step, and a condition over time,
//! the engine samples each confinement interval at the step, brackets every
//! change of the condition between consecutive samples, refines it by
//! bisection to the convergence tolerance, and returns the intervals where
//! the condition holds as a normalized `Window`.
//!
//! ## Modules
//!
//! - `engine`: `EventSearch` and the `search` convenience function.
//! - `predicate`: the `EventCondition` capability trait, closure adapters,
//!   scalar-backed conditions, and the evaluation-counting `PredicateAdapter`.
//! - `sampler`, `transition`, `refine`, `accumulator`: the stages of the
//!   search pipeline.
//! - `config`: `SearchConfig` and its builder.
//! - `tolerance`: the process-wide default convergence tolerance.
//! - `monitor`: lifecycle observers (no-op, composite, `tracing` logger).
//! - `stats`: counters returned by every successful search.
//! - `error`: `SearchError` and the opaque `PredicateError`.
//! - `num`: the `SearchNumeric` bound (`f32`, `f64`).

pub mod accumulator;
pub mod config;
pub mod engine;
pub mod error;
pub mod monitor;
pub mod num;
pub mod predicate;
pub mod refine;
pub mod sampler;
pub mod stats;
pub mod tolerance;
pub mod transition;

pub use engine::{EventSearch, search};
pub use error::{PredicateError, SearchError};
