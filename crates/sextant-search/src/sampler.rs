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

//! # Step Sampler
//!
//! Walks one confinement interval `[a, b]` left to right at a fixed step,
//! producing the sample times `a, a + h, a + 2h, ...` with the last time
//! clamped to `b`. Every interval yields at least one sample and always
//! ends exactly at `b`.

use crate::{
    error::SearchError,
    num::{SearchNumeric, to_f64},
    predicate::{EventCondition, PredicateAdapter},
};
use num_traits::Float;
use sextant_core::math::interval::ClosedInterval;

/// A condition value observed at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T> {
    pub time: T,
    pub value: bool,
}

impl<T> Sample<T> {
    #[inline]
    pub fn new(time: T, value: bool) -> Self {
        Self { time, value }
    }
}

impl<T> std::fmt::Display for Sample<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.time, self.value)
    }
}

/// Checks that `step` is positive and finite.
#[inline]
pub fn check_step<T>(step: T) -> Result<(), SearchError>
where
    T: SearchNumeric,
{
    if step.is_finite() && step > T::zero() {
        Ok(())
    } else {
        Err(SearchError::InvalidStep {
            step: to_f64(step),
        })
    }
}

/// Checks that `step` advances time everywhere in `interval`.
///
/// Adding `step` to the endpoint of largest magnitude must change it;
/// otherwise the sampler could never reach the end. Degenerate intervals are
/// sampled once and always pass.
pub fn check_step_resolution<T>(interval: ClosedInterval<T>, step: T) -> Result<(), SearchError>
where
    T: SearchNumeric,
{
    if interval.is_degenerate() {
        return Ok(());
    }

    let magnitude = interval.start().abs().max(interval.end().abs());
    if magnitude + step == magnitude {
        return Err(SearchError::StepBelowResolution {
            step: to_f64(step),
            magnitude: to_f64(magnitude),
        });
    }
    Ok(())
}

/// Produces the sample times of one confinement interval.
#[derive(Debug, Clone)]
pub struct StepSampler<T>
where
    T: Float,
{
    interval: ClosedInterval<T>,
    step: T,
    cursor: Option<T>,
}

impl<T> StepSampler<T>
where
    T: SearchNumeric,
{
    /// Creates a sampler over `interval` with the given step.
    pub fn new(interval: ClosedInterval<T>, step: T) -> Result<Self, SearchError> {
        check_step(step)?;
        check_step_resolution(interval, step)?;
        Ok(Self {
            interval,
            step,
            cursor: None,
        })
    }

    /// Returns `true` once the end of the interval has been produced.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_some_and(|t| t >= self.interval.end())
    }

    /// Advances to the next sample time.
    pub fn next_time(&mut self) -> Result<Option<T>, SearchError> {
        if self.is_exhausted() {
            return Ok(None);
        }

        let next = match self.cursor {
            None => self.interval.start(),
            Some(t) => {
                let next = (t + self.step).min(self.interval.end());
                if next <= t {
                    return Err(SearchError::StepBelowResolution {
                        step: to_f64(self.step),
                        magnitude: to_f64(t.abs()),
                    });
                }
                next
            }
        };

        self.cursor = Some(next);
        Ok(Some(next))
    }

    /// Advances to the next sample time and evaluates the condition there.
    pub fn next_sample<C>(
        &mut self,
        adapter: &mut PredicateAdapter<'_, C>,
    ) -> Result<Option<Sample<T>>, SearchError>
    where
        C: EventCondition<T> + ?Sized,
    {
        match self.next_time()? {
            Some(time) => Ok(Some(Sample::new(time, adapter.evaluate(time)?))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::ConditionFn;

    fn times(interval: ClosedInterval<f64>, step: f64) -> Vec<f64> {
        let mut sampler = StepSampler::new(interval, step).unwrap();
        let mut out = Vec::new();
        while let Some(t) = sampler.next_time().unwrap() {
            out.push(t);
        }
        out
    }

    #[test]
    fn test_samples_cover_interval_and_end_exactly() {
        let ts = times(ClosedInterval::new(0.0, 1.0), 0.25);
        assert_eq!(ts, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_last_step_is_clamped() {
        let ts = times(ClosedInterval::new(0.0, 1.0), 0.4);
        assert_eq!(ts, vec![0.0, 0.4, 0.8, 1.0]);
    }

    #[test]
    fn test_step_larger_than_interval() {
        let ts = times(ClosedInterval::new(2.0, 3.0), 20.0);
        assert_eq!(ts, vec![2.0, 3.0]);
    }

    #[test]
    fn test_degenerate_interval_is_sampled_once() {
        let ts = times(ClosedInterval::point(7.0), 1.0);
        assert_eq!(ts, vec![7.0]);
    }

    #[test]
    fn test_exhaustion() {
        let mut sampler = StepSampler::new(ClosedInterval::new(0.0, 1.0), 1.0).unwrap();
        assert!(!sampler.is_exhausted());
        assert_eq!(sampler.next_time().unwrap(), Some(0.0));
        assert_eq!(sampler.next_time().unwrap(), Some(1.0));
        assert!(sampler.is_exhausted());
        assert_eq!(sampler.next_time().unwrap(), None);
        assert!(sampler.is_exhausted());
    }

    #[test]
    fn test_clone_resumes_independently() {
        let mut sampler = StepSampler::new(ClosedInterval::new(0.0, 2.0), 1.0).unwrap();
        assert_eq!(sampler.next_time().unwrap(), Some(0.0));

        let mut fork = sampler.clone();
        assert_eq!(fork.next_time().unwrap(), Some(1.0));
        assert_eq!(fork.next_time().unwrap(), Some(2.0));
        assert!(fork.is_exhausted());

        assert!(!sampler.is_exhausted());
        assert_eq!(sampler.next_time().unwrap(), Some(1.0));
        assert!(format!("{:?}", sampler).starts_with("StepSampler"));
    }

    #[test]
    fn test_invalid_step() {
        let iv = ClosedInterval::new(0.0, 1.0);
        assert!(matches!(
            StepSampler::new(iv, 0.0),
            Err(SearchError::InvalidStep { .. })
        ));
        assert!(matches!(
            StepSampler::new(iv, -0.5),
            Err(SearchError::InvalidStep { .. })
        ));
    }

    #[test]
    fn test_step_below_resolution() {
        // Adjacent doubles at 1e16 are 2.0 apart.
        let iv = ClosedInterval::new(1e16, 1e16 + 4.0);
        assert!(matches!(
            StepSampler::new(iv, 0.5),
            Err(SearchError::StepBelowResolution { .. })
        ));
        assert!(StepSampler::new(iv, 2.0).is_ok());
    }

    #[test]
    fn test_next_sample_evaluates_condition() {
        let mut condition = ConditionFn::new(|t: f64| t >= 0.5);
        let mut adapter = PredicateAdapter::new(&mut condition);
        let mut sampler = StepSampler::new(ClosedInterval::new(0.0, 1.0), 0.5).unwrap();

        let mut samples = Vec::new();
        while let Some(s) = sampler.next_sample(&mut adapter).unwrap() {
            samples.push(s);
        }

        assert_eq!(
            samples,
            vec![
                Sample::new(0.0, false),
                Sample::new(0.5, true),
                Sample::new(1.0, true)
            ]
        );
        assert_eq!(adapter.evaluations(), 3);
    }
}
