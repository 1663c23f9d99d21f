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

use crate::{
    config::SearchConfig, refine::Refinement, sampler::Sample, stats::SearchStatistics,
};
use num_traits::Float;
use sextant_core::math::{
    interval::ClosedInterval,
    window::{IntervalIndex, Window},
};

/// Receives event-search lifecycle events.
pub trait SearchMonitor<T>
where
    T: Float,
{
    fn name(&self) -> &str;

    /// Called once before the first sample.
    fn on_enter_search(&mut self, confinement: &Window<T>, config: &SearchConfig<T>);

    /// Called before the first sample of each confinement interval.
    fn on_enter_interval(&mut self, index: IntervalIndex, interval: ClosedInterval<T>);

    /// Called after every step sample. Refinement midpoints are not reported.
    fn on_sample(&mut self, sample: Sample<T>, statistics: &SearchStatistics);

    /// Called after a transition has been refined.
    fn on_transition(&mut self, refinement: &Refinement<T>, statistics: &SearchStatistics);

    /// Called after an interval has been written to the result.
    fn on_interval_found(&mut self, interval: ClosedInterval<T>, statistics: &SearchStatistics);

    /// Called once after a successful search.
    fn on_exit_search(&mut self, result: &Window<T>, statistics: &SearchStatistics);
}

impl<T, M> SearchMonitor<T> for &mut M
where
    T: Float,
    M: SearchMonitor<T> + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn on_enter_search(&mut self, confinement: &Window<T>, config: &SearchConfig<T>) {
        (**self).on_enter_search(confinement, config);
    }

    #[inline]
    fn on_enter_interval(&mut self, index: IntervalIndex, interval: ClosedInterval<T>) {
        (**self).on_enter_interval(index, interval);
    }

    #[inline]
    fn on_sample(&mut self, sample: Sample<T>, statistics: &SearchStatistics) {
        (**self).on_sample(sample, statistics);
    }

    #[inline]
    fn on_transition(&mut self, refinement: &Refinement<T>, statistics: &SearchStatistics) {
        (**self).on_transition(refinement, statistics);
    }

    #[inline]
    fn on_interval_found(&mut self, interval: ClosedInterval<T>, statistics: &SearchStatistics) {
        (**self).on_interval_found(interval, statistics);
    }

    #[inline]
    fn on_exit_search(&mut self, result: &Window<T>, statistics: &SearchStatistics) {
        (**self).on_exit_search(result, statistics);
    }
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: Float,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T>
where
    T: Float,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
