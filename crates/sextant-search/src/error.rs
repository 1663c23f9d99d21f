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

//! # Search Errors
//!
//! Every failure of an event search is fatal to that call and is reported as
//! a `SearchError`. Nothing is retried internally; callers retry with a
//! smaller step, a larger capacity, or a looser tolerance.
//!
//! Floating-point values carried by errors are widened to `f64` so the error
//! type does not depend on the search numeric.

use sextant_core::math::window::WindowError;

/// An opaque failure raised by a caller-supplied condition or scalar function.
pub type PredicateError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The step size was zero, negative, or not finite.
    #[error("step size must be positive and finite, got {step}")]
    InvalidStep { step: f64 },

    /// The step is too small to advance time at the magnitude of the confinement.
    #[error("step size {step} cannot advance time at magnitude {magnitude}")]
    StepBelowResolution { step: f64, magnitude: f64 },

    /// The convergence tolerance was zero, negative, or not finite.
    #[error("convergence tolerance must be positive and finite, got {tolerance}")]
    InvalidTolerance { tolerance: f64 },

    /// The result capacity cannot hold a single interval.
    #[error("result capacity must allow at least one interval")]
    InvalidDimension,

    /// The search found more intervals than the result window can hold.
    #[error("result window capacity of {capacity} intervals exceeded")]
    CapacityExceeded { capacity: usize },

    /// The confinement window storage is malformed.
    #[error("malformed window: {0}")]
    TypeMismatch(#[source] WindowError),

    /// The caller's condition failed while being evaluated.
    #[error("condition evaluation failed at t = {time}")]
    PredicateFailure {
        time: f64,
        #[source]
        source: PredicateError,
    },

    /// Bisection hit its iteration cap or could no longer shrink the bracket.
    #[error(
        "refinement did not converge after {iterations} iterations, bracket [{lower}, {upper}]"
    )]
    RefinementExhausted {
        iterations: usize,
        lower: f64,
        upper: f64,
    },

    /// The interval accumulator saw an onset or offset out of order.
    #[error("interval accumulator invariant violated: {0}")]
    AccumulatorViolation(&'static str),

    /// A configuration value could not be represented in the search numeric.
    #[error("value cannot be represented in the search numeric type")]
    NumericConversion,
}

impl From<WindowError> for SearchError {
    fn from(err: WindowError) -> Self {
        match err {
            WindowError::InvalidDimension => SearchError::InvalidDimension,
            WindowError::CapacityExceeded { capacity } => SearchError::CapacityExceeded { capacity },
            other => SearchError::TypeMismatch(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_window_error_mapping() {
        assert!(matches!(
            SearchError::from(WindowError::InvalidDimension),
            SearchError::InvalidDimension
        ));
        assert!(matches!(
            SearchError::from(WindowError::CapacityExceeded { capacity: 3 }),
            SearchError::CapacityExceeded { capacity: 3 }
        ));
        assert!(matches!(
            SearchError::from(WindowError::Unordered { index: 1 }),
            SearchError::TypeMismatch(WindowError::Unordered { index: 1 })
        ));
    }

    #[test]
    fn test_predicate_failure_keeps_source() {
        let err = SearchError::PredicateFailure {
            time: 2.5,
            source: "no data for body 399".into(),
        };
        assert_eq!(err.to_string(), "condition evaluation failed at t = 2.5");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("no data for body 399"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SearchError::InvalidStep { step: -1.0 }.to_string(),
            "step size must be positive and finite, got -1"
        );
        assert_eq!(
            SearchError::CapacityExceeded { capacity: 1 }.to_string(),
            "result window capacity of 1 intervals exceeded"
        );
    }
}
