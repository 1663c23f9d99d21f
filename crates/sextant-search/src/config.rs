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

//! # Search Configuration
//!
//! `SearchConfig` holds the per-call parameters of an event search: the
//! sampling step, an optional convergence tolerance overriding the
//! process-wide default, and the refinement iteration cap.
//!
//! ## Usage
//!
//! ```rust
//! use sextant_search::config::SearchConfigBuilder;
//!
//! let config = SearchConfigBuilder::new(0.5)
//!     .tolerance(1e-9)
//!     .max_refinement_iterations(256)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.step(), 0.5);
//! assert_eq!(config.tolerance(), Some(1e-9));
//! ```

use crate::{
    error::SearchError,
    num::{SearchNumeric, to_f64},
    tolerance,
};

/// Default cap on bisection iterations per refined transition.
pub const DEFAULT_MAX_REFINEMENT_ITERATIONS: usize = 1024;

/// Validated parameters of one event search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig<T> {
    step: T,
    tolerance: Option<T>,
    max_refinement_iterations: usize,
}

impl<T> SearchConfig<T>
where
    T: SearchNumeric,
{
    /// Creates a configuration with the given step and default everything else.
    #[inline]
    pub fn new(step: T) -> Result<Self, SearchError> {
        SearchConfigBuilder::new(step).build()
    }

    /// Returns the sampling step.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Returns the explicit tolerance, if one was configured.
    #[inline]
    pub fn tolerance(&self) -> Option<T> {
        self.tolerance
    }

    /// Returns the bisection iteration cap.
    #[inline]
    pub fn max_refinement_iterations(&self) -> usize {
        self.max_refinement_iterations
    }

    /// Returns the tolerance a search started now would use.
    ///
    /// Falls back to the process-wide default when no tolerance is configured.
    pub fn resolved_tolerance(&self) -> Result<T, SearchError> {
        if let Some(tolerance) = self.tolerance {
            return Ok(tolerance);
        }

        let global = tolerance::convergence_tolerance();
        let value = T::from_f64(global).ok_or(SearchError::NumericConversion)?;
        // An f64 default may underflow to zero in a narrower type.
        if !(value.is_finite() && value > T::zero()) {
            return Err(SearchError::InvalidTolerance { tolerance: global });
        }
        Ok(value)
    }
}

impl<T> std::fmt::Display for SearchConfig<T>
where
    T: SearchNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.tolerance {
            Some(tolerance) => write!(
                f,
                "SearchConfig(step: {}, tolerance: {}, max_refinement_iterations: {})",
                self.step, tolerance, self.max_refinement_iterations
            ),
            None => write!(
                f,
                "SearchConfig(step: {}, tolerance: default, max_refinement_iterations: {})",
                self.step, self.max_refinement_iterations
            ),
        }
    }
}

/// Builder for `SearchConfig`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfigBuilder<T> {
    step: T,
    tolerance: Option<T>,
    max_refinement_iterations: usize,
}

impl<T> SearchConfigBuilder<T>
where
    T: SearchNumeric,
{
    /// Creates a builder for a search sampling every `step` time units.
    #[inline]
    pub fn new(step: T) -> Self {
        Self {
            step,
            tolerance: None,
            max_refinement_iterations: DEFAULT_MAX_REFINEMENT_ITERATIONS,
        }
    }

    /// Sets the sampling step.
    #[inline]
    pub fn step(mut self, step: T) -> Self {
        self.step = step;
        self
    }

    /// Overrides the process-wide convergence tolerance for this search.
    #[inline]
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Sets the bisection iteration cap. A cap of zero is raised to one.
    #[inline]
    pub fn max_refinement_iterations(mut self, iterations: usize) -> Self {
        self.max_refinement_iterations = iterations.max(1);
        self
    }

    /// Validates and builds the `SearchConfig`.
    pub fn build(self) -> Result<SearchConfig<T>, SearchError> {
        if !(self.step.is_finite() && self.step > T::zero()) {
            return Err(SearchError::InvalidStep {
                step: to_f64(self.step),
            });
        }
        if let Some(tolerance) = self.tolerance {
            if !(tolerance.is_finite() && tolerance > T::zero()) {
                return Err(SearchError::InvalidTolerance {
                    tolerance: to_f64(tolerance),
                });
            }
        }

        Ok(SearchConfig {
            step: self.step,
            tolerance: self.tolerance,
            max_refinement_iterations: self.max_refinement_iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_constructs_expected_config() {
        let config = SearchConfigBuilder::new(1.0)
            .step(2.0)
            .tolerance(1e-4)
            .max_refinement_iterations(10)
            .build()
            .unwrap();

        assert_eq!(config.step(), 2.0);
        assert_eq!(config.tolerance(), Some(1e-4));
        assert_eq!(config.max_refinement_iterations(), 10);
        assert_eq!(config.resolved_tolerance().unwrap(), 1e-4);
    }

    #[test]
    fn test_defaults() {
        let config = SearchConfig::new(1.0f64).unwrap();
        assert_eq!(config.tolerance(), None);
        assert_eq!(
            config.max_refinement_iterations(),
            DEFAULT_MAX_REFINEMENT_ITERATIONS
        );
    }

    #[test]
    fn test_invalid_step_is_rejected() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SearchConfig::new(step),
                Err(SearchError::InvalidStep { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_tolerance_is_rejected() {
        let err = SearchConfigBuilder::new(1.0).tolerance(0.0).build();
        assert!(matches!(
            err,
            Err(SearchError::InvalidTolerance { tolerance }) if tolerance == 0.0
        ));
    }

    #[test]
    fn test_zero_iteration_cap_is_raised() {
        let config = SearchConfigBuilder::new(1.0)
            .max_refinement_iterations(0)
            .build()
            .unwrap();
        assert_eq!(config.max_refinement_iterations(), 1);
    }

    #[test]
    fn test_display() {
        let config = SearchConfigBuilder::new(0.5)
            .tolerance(0.25)
            .max_refinement_iterations(8)
            .build()
            .unwrap();
        assert_eq!(
            config.to_string(),
            "SearchConfig(step: 0.5, tolerance: 0.25, max_refinement_iterations: 8)"
        );
    }
}
