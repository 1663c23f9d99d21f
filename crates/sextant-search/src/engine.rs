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

//! # Event Search Engine
//!
//! Turns a boolean condition over time into the window of instants where it
//! holds, within a confinement window.
//!
//! For every confinement interval the engine walks the interval at a fixed
//! step, brackets each change of the condition between consecutive samples,
//! bisects the bracket down to the convergence tolerance, and pairs onsets
//! with offsets into result intervals. Intervals that are already open at the
//! start of a confinement interval, or still open at its end, are clipped to
//! the confinement boundary; the engine never evaluates the condition outside
//! the confinement window.
//!
//! Transitions between samples closer together than the step may be missed.
//! That is a completeness limit of fixed-step sampling and is not reported as
//! an error.
//!
//! ## Usage
//!
//! ```rust
//! use sextant_core::math::{interval::ClosedInterval, window::Window};
//! use sextant_search::{engine::search, predicate::ConditionFn};
//!
//! let confinement = Window::from_interval(ClosedInterval::new(0.0, 30.0));
//! let mut condition = ConditionFn::new(|t: f64| t % 10.0 < 5.0);
//!
//! let result = search(&mut condition, 1.0, &confinement, 8).unwrap();
//! assert_eq!(result.cardinality(), 3);
//! ```

use crate::{
    accumulator::IntervalAccumulator,
    config::SearchConfig,
    error::SearchError,
    monitor::{no_op::NoOpMonitor, search_monitor::SearchMonitor},
    num::{SearchNumeric, to_f64},
    predicate::{EventCondition, PredicateAdapter},
    refine::RootRefiner,
    sampler::{StepSampler, check_step_resolution},
    stats::SearchStatistics,
    transition::{Edge, TransitionDetector},
};
use sextant_core::math::{
    interval::ClosedInterval,
    window::{IntervalIndex, Window},
};
use std::time::Instant;

/// Searches `confinement` for the intervals where `condition` holds.
///
/// Samples every `step` time units, refines transitions to the process-wide
/// convergence tolerance, and returns a window holding at most `capacity`
/// intervals.
///
/// # Errors
///
/// - `InvalidStep` if `step` is not positive and finite.
/// - `InvalidDimension` if `capacity` is zero.
/// - `StepBelowResolution` if `step` cannot advance time within `confinement`.
/// - `TypeMismatch` if `confinement` violates the window invariants.
/// - `CapacityExceeded` if more than `capacity` intervals are found.
/// - `PredicateFailure` if the condition fails.
pub fn search<T, C>(
    condition: &mut C,
    step: T,
    confinement: &Window<T>,
    capacity: usize,
) -> Result<Window<T>, SearchError>
where
    T: SearchNumeric,
    C: EventCondition<T> + ?Sized,
{
    let config = SearchConfig::new(step)?;
    let mut result = Window::bounded(capacity)?;
    EventSearch::new(config).run(condition, confinement, &mut result, &mut NoOpMonitor::new())?;
    Ok(result)
}

/// A configured event search that can be run repeatedly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventSearch<T> {
    config: SearchConfig<T>,
}

impl<T> EventSearch<T>
where
    T: SearchNumeric,
{
    #[inline]
    pub fn new(config: SearchConfig<T>) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig<T> {
        &self.config
    }

    /// Runs the search, writing the intervals where `condition` holds into `result`.
    ///
    /// Any previous contents of `result` are discarded, and its capacity bounds
    /// the number of intervals found. The tolerance is resolved once, before
    /// the first evaluation.
    ///
    /// On failure `result` holds the intervals recorded so far; it remains a
    /// valid window but is otherwise unspecified.
    pub fn run<C, M>(
        &self,
        condition: &mut C,
        confinement: &Window<T>,
        result: &mut Window<T>,
        monitor: &mut M,
    ) -> Result<SearchStatistics, SearchError>
    where
        C: EventCondition<T> + ?Sized,
        M: SearchMonitor<T> + ?Sized,
    {
        let start_time = Instant::now();
        result.clear();

        confinement.check_valid().map_err(SearchError::TypeMismatch)?;
        let step = self.config.step();
        for interval in confinement {
            check_step_resolution(interval, step)?;
        }

        let tolerance = self.config.resolved_tolerance()?;
        let refiner = RootRefiner::new(tolerance, self.config.max_refinement_iterations());

        tracing::debug!(
            step = to_f64(step),
            tolerance = to_f64(tolerance),
            confinement_intervals = confinement.cardinality(),
            capacity = result.capacity(),
            "starting event search"
        );

        let mut stats = SearchStatistics::default();
        let mut adapter = PredicateAdapter::new(condition);
        monitor.on_enter_search(confinement, &self.config);

        for (index, interval) in confinement.iter().enumerate() {
            stats.on_confinement_interval();
            monitor.on_enter_interval(IntervalIndex::new(index), interval);

            let outcome = self.search_interval(
                interval,
                &refiner,
                &mut adapter,
                result,
                monitor,
                &mut stats,
            );
            stats.set_evaluations(adapter.evaluations());

            if let Err(err) = outcome {
                tracing::debug!(error = %err, interval = %interval, "event search failed");
                return Err(err);
            }
        }

        stats.set_total_time(start_time.elapsed());
        monitor.on_exit_search(result, &stats);

        tracing::debug!(
            intervals = result.cardinality(),
            samples = stats.samples,
            evaluations = stats.evaluations,
            elapsed = ?stats.time_total,
            "event search finished"
        );

        Ok(stats)
    }

    /// Traverses one confinement interval.
    fn search_interval<C, M>(
        &self,
        interval: ClosedInterval<T>,
        refiner: &RootRefiner<T>,
        adapter: &mut PredicateAdapter<'_, C>,
        result: &mut Window<T>,
        monitor: &mut M,
        stats: &mut SearchStatistics,
    ) -> Result<(), SearchError>
    where
        C: EventCondition<T> + ?Sized,
        M: SearchMonitor<T> + ?Sized,
    {
        let mut sampler = StepSampler::new(interval, self.config.step())?;
        let mut detector = TransitionDetector::new();
        let mut accumulator = IntervalAccumulator::new();

        while let Some(sample) = sampler.next_sample(adapter)? {
            stats.on_sample();
            stats.set_evaluations(adapter.evaluations());
            monitor.on_sample(sample, stats);

            let first = detector.previous().is_none();
            match detector.observe(sample) {
                None if first && sample.value => accumulator.open_clipped(sample.time)?,
                None => {}
                Some(bracket) => {
                    let refinement = refiner.refine(bracket, adapter)?;
                    stats.on_transition(refinement.iterations);
                    stats.set_evaluations(adapter.evaluations());

                    tracing::trace!(
                        edge = %refinement.edge,
                        time = to_f64(refinement.time),
                        lower = to_f64(bracket.lower().time),
                        upper = to_f64(bracket.upper().time),
                        iterations = refinement.iterations,
                        "refined transition"
                    );
                    monitor.on_transition(&refinement, stats);

                    match refinement.edge {
                        Edge::Rising => accumulator.open_refined(refinement.time)?,
                        Edge::Falling => {
                            let found = accumulator.close_refined(refinement.time, result)?;
                            stats.on_interval_recorded();
                            monitor.on_interval_found(found, stats);
                        }
                    }
                }
            }
        }

        if let Some(found) = accumulator.close_clipped(interval.end(), result)? {
            stats.on_interval_recorded();
            monitor.on_interval_found(found, stats);
        }
        debug_assert!(!accumulator.is_open());

        debug_assert!(result.check_valid().is_ok());
        Ok(())
    }
}
