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
    config::SearchConfig, monitor::search_monitor::SearchMonitor, refine::Refinement,
    sampler::Sample, stats::SearchStatistics,
};
use num_traits::Float;
use sextant_core::math::{
    interval::ClosedInterval,
    window::{IntervalIndex, Window},
};

/// A monitor that ignores every event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOpMonitor;

impl NoOpMonitor {
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl<T> SearchMonitor<T> for NoOpMonitor
where
    T: Float,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOpMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, _confinement: &Window<T>, _config: &SearchConfig<T>) {}

    #[inline(always)]
    fn on_enter_interval(&mut self, _index: IntervalIndex, _interval: ClosedInterval<T>) {}

    #[inline(always)]
    fn on_sample(&mut self, _sample: Sample<T>, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn on_transition(&mut self, _refinement: &Refinement<T>, _statistics: &SearchStatistics) {}

    #[inline(always)]
    fn on_interval_found(&mut self, _interval: ClosedInterval<T>, _statistics: &SearchStatistics) {
    }

    #[inline(always)]
    fn on_exit_search(&mut self, _result: &Window<T>, _statistics: &SearchStatistics) {}
}
