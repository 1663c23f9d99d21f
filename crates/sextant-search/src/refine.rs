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

//! # Root Refinement
//!
//! Bisects a `Bracket` until its width is at most the convergence tolerance.
//!
//! The reported transition instant is always the endpoint on the "true" side
//! of the final bracket: the upper endpoint for a rising edge and the lower
//! endpoint for a falling edge. The condition therefore holds at every
//! reported refined endpoint, and the true change point lies within one
//! tolerance of it.
//!
//! When the condition changes exactly at a midpoint, the value evaluated at
//! that midpoint decides which half is kept.

use crate::{
    error::SearchError,
    num::{SearchNumeric, to_f64},
    predicate::{EventCondition, PredicateAdapter},
    transition::{Bracket, Edge},
};

/// A refined transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refinement<T> {
    pub edge: Edge,
    pub time: T,
    /// Midpoint evaluations spent on this transition.
    pub iterations: usize,
}

/// Bracketed bisection with an iteration cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootRefiner<T> {
    tolerance: T,
    max_iterations: usize,
}

impl<T> RootRefiner<T>
where
    T: SearchNumeric,
{
    /// Creates a refiner.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `tolerance` is not positive.
    #[inline]
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        debug_assert!(
            tolerance > T::zero(),
            "called `RootRefiner::new` with non-positive tolerance {}",
            tolerance
        );
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Narrows `bracket` and returns the transition instant.
    ///
    /// Fails with `RefinementExhausted` when the iteration cap is hit or the
    /// bracket can no longer be split at this magnitude, and propagates any
    /// condition failure.
    pub fn refine<C>(
        &self,
        bracket: Bracket<T>,
        adapter: &mut PredicateAdapter<'_, C>,
    ) -> Result<Refinement<T>, SearchError>
    where
        C: EventCondition<T> + ?Sized,
    {
        let edge = bracket.edge();
        let lower_value = bracket.lower().value;
        let mut lower = bracket.lower().time;
        let mut upper = bracket.upper().time;
        let two = T::one() + T::one();
        let mut iterations = 0;

        while upper - lower > self.tolerance {
            let midpoint = lower + (upper - lower) / two;
            if iterations >= self.max_iterations || !(lower < midpoint && midpoint < upper) {
                return Err(SearchError::RefinementExhausted {
                    iterations,
                    lower: to_f64(lower),
                    upper: to_f64(upper),
                });
            }

            iterations += 1;
            if adapter.evaluate(midpoint)? == lower_value {
                lower = midpoint;
            } else {
                upper = midpoint;
            }
        }

        let time = match edge {
            Edge::Rising => upper,
            Edge::Falling => lower,
        };

        Ok(Refinement {
            edge,
            time,
            iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::PredicateError,
        predicate::{ConditionFn, TryConditionFn},
        sampler::Sample,
    };

    fn bracket(t0: f64, v0: bool, t1: f64) -> Bracket<f64> {
        Bracket::new(Sample::new(t0, v0), Sample::new(t1, !v0)).unwrap()
    }

    #[test]
    fn test_rising_edge_returns_true_side_within_tolerance() {
        let onset = 3.3;
        let mut c = ConditionFn::new(|t: f64| t >= onset);
        let mut adapter = PredicateAdapter::new(&mut c);
        let refiner = RootRefiner::new(1e-6, 1024);

        let r = refiner.refine(bracket(3.0, false, 4.0), &mut adapter).unwrap();
        assert_eq!(r.edge, Edge::Rising);
        assert!(r.time >= onset);
        assert!(r.time - onset <= 1e-6);
        assert_eq!(adapter.evaluations() as usize, r.iterations);
    }

    #[test]
    fn test_falling_edge_returns_true_side_within_tolerance() {
        let offset = 7.77;
        let mut c = ConditionFn::new(|t: f64| t < offset);
        let mut adapter = PredicateAdapter::new(&mut c);
        let refiner = RootRefiner::new(1e-6, 1024);

        let r = refiner.refine(bracket(7.0, true, 8.0), &mut adapter).unwrap();
        assert_eq!(r.edge, Edge::Falling);
        assert!(r.time < offset);
        assert!(offset - r.time <= 1e-6);
    }

    #[test]
    fn test_change_at_bracket_end_converges_on_it() {
        // True from exactly 10 on: every midpoint is false, so the upper end
        // never moves.
        let mut c = ConditionFn::new(|t: f64| t >= 10.0);
        let mut adapter = PredicateAdapter::new(&mut c);
        let refiner = RootRefiner::new(1e-6, 1024);

        let r = refiner.refine(bracket(9.0, false, 10.0), &mut adapter).unwrap();
        assert_eq!(r.time, 10.0);
    }

    #[test]
    fn test_midpoint_value_is_authoritative() {
        // Changes exactly at the first midpoint; the midpoint reads true, so
        // the upper half is discarded and the onset converges on 0.5.
        let mut c = ConditionFn::new(|t: f64| t >= 0.5);
        let mut adapter = PredicateAdapter::new(&mut c);
        let refiner = RootRefiner::new(1e-3, 1024);

        let r = refiner.refine(bracket(0.0, false, 1.0), &mut adapter).unwrap();
        assert_eq!(r.time, 0.5);
    }

    #[test]
    fn test_narrow_bracket_needs_no_evaluations() {
        let mut c = ConditionFn::new(|_: f64| -> bool { panic!("must not be evaluated") });
        let mut adapter = PredicateAdapter::new(&mut c);
        let refiner = RootRefiner::new(1.0, 1024);

        let r = refiner.refine(bracket(0.0, true, 0.5), &mut adapter).unwrap();
        assert_eq!(r.time, 0.0);
        assert_eq!(r.iterations, 0);
    }

    #[test]
    fn test_iteration_cap() {
        let mut c = ConditionFn::new(|t: f64| t > 0.3);
        let mut adapter = PredicateAdapter::new(&mut c);
        let refiner = RootRefiner::new(1e-12, 4);

        let err = refiner
            .refine(bracket(0.0, false, 1.0), &mut adapter)
            .unwrap_err();
        assert!(matches!(
            err,
            SearchError::RefinementExhausted { iterations: 4, .. }
        ));
    }

    #[test]
    fn test_tolerance_below_resolution_terminates() {
        let mut c = ConditionFn::new(|t: f64| t > 1e9 + 0.3);
        let mut adapter = PredicateAdapter::new(&mut c);
        // Far below the spacing of doubles near 1e9.
        let refiner = RootRefiner::new(1e-30, usize::MAX);

        let err = refiner
            .refine(bracket(1e9, false, 1e9 + 1.0), &mut adapter)
            .unwrap_err();
        assert!(matches!(err, SearchError::RefinementExhausted { .. }));
    }

    #[test]
    fn test_condition_failure_propagates() {
        let mut c = TryConditionFn::new(|_: f64| -> Result<bool, PredicateError> {
            Err("no coverage".into())
        });
        let mut adapter = PredicateAdapter::new(&mut c);
        let refiner = RootRefiner::new(1e-6, 1024);

        let err = refiner
            .refine(bracket(0.0, false, 1.0), &mut adapter)
            .unwrap_err();
        assert!(matches!(err, SearchError::PredicateFailure { time, .. } if time == 0.5));
    }
}
