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
    monitor::{index::MonitorIndex, search_monitor::SearchMonitor},
    refine::Refinement,
    sampler::Sample,
    stats::SearchStatistics,
};
use num_traits::Float;
use sextant_core::math::{
    interval::ClosedInterval,
    window::{IntervalIndex, Window},
};

/// A composite monitor that forwards every event to each of its monitors, in
/// insertion order.
pub struct CompositeMonitor<'a, T>
where
    T: Float,
{
    monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>,
}

impl<'a, T> std::fmt::Debug for CompositeMonitor<'a, T>
where
    T: Float,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeMonitor")
            .field("monitors", &self.names().join(", "))
            .finish()
    }
}

impl<'a, T> std::fmt::Display for CompositeMonitor<'a, T>
where
    T: Float,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeMonitor([{}])", self.names().join(", "))
    }
}

impl<'a, T> Default for CompositeMonitor<'a, T>
where
    T: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: Float,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with room for `capacity` monitors.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new `CompositeMonitor` from a vector of boxed monitors.
    #[inline]
    pub fn from_vec(monitors: Vec<Box<dyn SearchMonitor<T> + 'a>>) -> Self {
        Self { monitors }
    }

    /// Adds a monitor and returns its index.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M) -> MonitorIndex
    where
        M: SearchMonitor<T> + 'a,
    {
        self.add_monitor_boxed(Box::new(monitor))
    }

    /// Adds a boxed monitor and returns its index.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor<T> + 'a>) -> MonitorIndex {
        let index = MonitorIndex::new(self.monitors.len());
        self.monitors.push(monitor);
        index
    }

    /// Returns the number of monitors.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite holds no monitors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Returns the monitor at `monitor_index`, or `None` if out of bounds.
    #[inline]
    pub fn monitor(&self, monitor_index: MonitorIndex) -> Option<&(dyn SearchMonitor<T> + 'a)> {
        self.monitors.get(monitor_index.get()).map(|m| m.as_ref())
    }

    /// Returns the monitor at `monitor_index` mutably, or `None` if out of bounds.
    #[inline]
    pub fn monitor_mut(
        &mut self,
        monitor_index: MonitorIndex,
    ) -> Option<&mut (dyn SearchMonitor<T> + 'a)> {
        match self.monitors.get_mut(monitor_index.get()) {
            Some(monitor) => Some(monitor.as_mut()),
            None => None,
        }
    }

    fn names(&self) -> Vec<&str> {
        self.monitors.iter().map(|m| m.name()).collect()
    }
}

impl<'a, T> FromIterator<Box<dyn SearchMonitor<T> + 'a>> for CompositeMonitor<'a, T>
where
    T: Float,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchMonitor<T> + 'a>>,
    {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> SearchMonitor<T> for CompositeMonitor<'a, T>
where
    T: Float,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, confinement: &Window<T>, config: &SearchConfig<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(confinement, config);
        }
    }

    fn on_enter_interval(&mut self, index: IntervalIndex, interval: ClosedInterval<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_interval(index, interval);
        }
    }

    fn on_sample(&mut self, sample: Sample<T>, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_sample(sample, statistics);
        }
    }

    fn on_transition(&mut self, refinement: &Refinement<T>, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_transition(refinement, statistics);
        }
    }

    fn on_interval_found(&mut self, interval: ClosedInterval<T>, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_interval_found(interval, statistics);
        }
    }

    fn on_exit_search(&mut self, result: &Window<T>, statistics: &SearchStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(result, statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{monitor::no_op::NoOpMonitor, transition::Edge};
    use std::{cell::RefCell, rc::Rc};

    struct Recorder {
        name: &'static str,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl SearchMonitor<f64> for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        fn on_enter_search(&mut self, confinement: &Window<f64>, _config: &SearchConfig<f64>) {
            self.events
                .borrow_mut()
                .push(format!("{}:enter:{}", self.name, confinement.cardinality()));
        }

        fn on_enter_interval(&mut self, index: IntervalIndex, _interval: ClosedInterval<f64>) {
            self.events
                .borrow_mut()
                .push(format!("{}:interval:{}", self.name, index.get()));
        }

        fn on_sample(&mut self, sample: Sample<f64>, _statistics: &SearchStatistics) {
            self.events
                .borrow_mut()
                .push(format!("{}:sample:{}", self.name, sample.time));
        }

        fn on_transition(&mut self, refinement: &Refinement<f64>, _statistics: &SearchStatistics) {
            self.events
                .borrow_mut()
                .push(format!("{}:transition:{}", self.name, refinement.edge));
        }

        fn on_interval_found(
            &mut self,
            interval: ClosedInterval<f64>,
            _statistics: &SearchStatistics,
        ) {
            self.events
                .borrow_mut()
                .push(format!("{}:found:{}", self.name, interval));
        }

        fn on_exit_search(&mut self, _result: &Window<f64>, _statistics: &SearchStatistics) {
            self.events.borrow_mut().push(format!("{}:exit", self.name));
        }
    }

    #[test]
    fn test_forwards_to_all_in_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeMonitor::new();
        composite.add_monitor(Recorder {
            name: "a",
            events: events.clone(),
        });
        composite.add_monitor(Recorder {
            name: "b",
            events: events.clone(),
        });

        let stats = SearchStatistics::default();
        let config = SearchConfig::new(1.0).unwrap();
        let confinement = Window::from_interval(ClosedInterval::new(0.0, 1.0));

        composite.on_enter_search(&confinement, &config);
        composite.on_enter_interval(IntervalIndex::new(0), ClosedInterval::new(0.0, 1.0));
        composite.on_sample(Sample::new(0.5, true), &stats);
        composite.on_transition(
            &Refinement {
                edge: Edge::Rising,
                time: 0.25,
                iterations: 3,
            },
            &stats,
        );
        composite.on_interval_found(ClosedInterval::new(0.25, 1.0), &stats);
        composite.on_exit_search(&confinement, &stats);

        assert_eq!(
            *events.borrow(),
            vec![
                "a:enter:1",
                "b:enter:1",
                "a:interval:0",
                "b:interval:0",
                "a:sample:0.5",
                "b:sample:0.5",
                "a:transition:Rising",
                "b:transition:Rising",
                "a:found:[0.25, 1]",
                "b:found:[0.25, 1]",
                "a:exit",
                "b:exit",
            ]
        );
    }

    #[test]
    fn test_indexing_and_display() {
        let mut composite: CompositeMonitor<'_, f64> = CompositeMonitor::with_capacity(2);
        assert!(composite.is_empty());

        let first = composite.add_monitor(NoOpMonitor::new());
        let events = Rc::new(RefCell::new(Vec::new()));
        let second = composite.add_monitor(Recorder {
            name: "rec",
            events,
        });

        assert_eq!(composite.len(), 2);
        assert_eq!(composite.monitor(first).map(|m| m.name()), Some("NoOpMonitor"));
        assert_eq!(
            composite.monitor_mut(second).map(|m| m.name().to_owned()),
            Some("rec".to_owned())
        );
        assert!(composite.monitor(MonitorIndex::new(2)).is_none());
        assert_eq!(
            format!("{}", composite),
            "CompositeMonitor([NoOpMonitor, rec])"
        );
    }

    #[test]
    fn test_from_iterator() {
        let monitors: Vec<Box<dyn SearchMonitor<f64>>> =
            vec![Box::new(NoOpMonitor::new()), Box::new(NoOpMonitor::new())];
        let composite: CompositeMonitor<'_, f64> = monitors.into_iter().collect();
        assert_eq!(composite.len(), 2);
    }
}
