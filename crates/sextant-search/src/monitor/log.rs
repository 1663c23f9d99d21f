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
    config::SearchConfig,
    monitor::search_monitor::SearchMonitor,
    num::{SearchNumeric, to_f64},
    refine::Refinement,
    sampler::Sample,
    stats::SearchStatistics,
};
use sextant_core::math::{
    interval::ClosedInterval,
    window::{IntervalIndex, Window},
};
use std::time::Instant;

/// Reports search progress through `tracing` at `INFO` level.
///
/// A progress line is emitted whenever the sample count masked with
/// `sample_mask` is zero, so a mask of `2^k - 1` logs every `2^k` samples.
/// Intervals found and the final summary are always logged.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    sample_mask: u64,
}

impl LogMonitor {
    pub fn new(sample_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            sample_mask,
        }
    }

    /// Returns the sample cadence mask.
    #[inline]
    pub fn sample_mask(&self) -> u64 {
        self.sample_mask
    }

    #[inline]
    fn should_log(&self, samples: u64) -> bool {
        samples & self.sample_mask == 0
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(4095)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(sample_mask: {})", self.sample_mask)
    }
}

impl<T> SearchMonitor<T> for LogMonitor
where
    T: SearchNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, confinement: &Window<T>, config: &SearchConfig<T>) {
        self.start_time = Instant::now();
        tracing::info!(
            confinement_intervals = confinement.cardinality(),
            confinement_measure = to_f64(confinement.measure()),
            %config,
            "event search started"
        );
    }

    fn on_enter_interval(&mut self, index: IntervalIndex, interval: ClosedInterval<T>) {
        tracing::debug!(%index, %interval, "entering confinement interval");
    }

    fn on_sample(&mut self, sample: Sample<T>, statistics: &SearchStatistics) {
        if self.should_log(statistics.samples) {
            tracing::info!(
                elapsed = ?self.start_time.elapsed(),
                samples = statistics.samples,
                evaluations = statistics.evaluations,
                time = to_f64(sample.time),
                intervals = statistics.intervals_recorded,
                "event search progress"
            );
        }
    }

    fn on_transition(&mut self, _refinement: &Refinement<T>, _statistics: &SearchStatistics) {}

    fn on_interval_found(&mut self, interval: ClosedInterval<T>, statistics: &SearchStatistics) {
        tracing::info!(
            %interval,
            measure = to_f64(interval.measure()),
            intervals = statistics.intervals_recorded,
            "interval found"
        );
    }

    fn on_exit_search(&mut self, result: &Window<T>, statistics: &SearchStatistics) {
        tracing::info!(
            elapsed = ?self.start_time.elapsed(),
            intervals = result.cardinality(),
            measure = to_f64(result.measure()),
            samples = statistics.samples,
            evaluations = statistics.evaluations,
            transitions = statistics.transitions,
            "event search finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadence_mask() {
        let monitor = LogMonitor::new(3);
        assert!(monitor.should_log(0));
        assert!(!monitor.should_log(1));
        assert!(!monitor.should_log(3));
        assert!(monitor.should_log(4));
        assert!(monitor.should_log(8));
    }

    #[test]
    fn test_default_and_display() {
        let monitor = LogMonitor::default();
        assert_eq!(monitor.sample_mask(), 4095);
        assert_eq!(format!("{}", monitor), "LogMonitor(sample_mask: 4095)");
        assert_eq!(SearchMonitor::<f64>::name(&monitor), "LogMonitor");
    }

    #[test]
    fn test_events_without_subscriber() {
        let mut monitor = LogMonitor::new(0);
        let stats = SearchStatistics::default();
        let config = SearchConfig::new(1.0).unwrap();
        let window = Window::from_interval(ClosedInterval::new(0.0, 2.0));

        monitor.on_enter_search(&window, &config);
        monitor.on_enter_interval(IntervalIndex::new(0), ClosedInterval::new(0.0_f64, 2.0));
        monitor.on_sample(Sample::new(1.0_f64, true), &stats);
        monitor.on_interval_found(ClosedInterval::new(0.5_f64, 2.0), &stats);
        monitor.on_exit_search(&window, &stats);
    }
}
