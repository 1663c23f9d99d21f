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

use std::time::Duration;

/// Statistics collected during one event search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Confinement intervals traversed.
    pub confinement_intervals: u64,
    /// Step samples taken.
    pub samples: u64,
    /// Condition evaluations, including those spent on refinement.
    pub evaluations: u64,
    /// Condition changes detected between consecutive samples.
    pub transitions: u64,
    /// Bisection steps across all refinements.
    pub refinement_iterations: u64,
    /// Intervals written to the result window.
    pub intervals_recorded: u64,
    /// Total time spent in the search.
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_confinement_interval(&mut self) {
        self.confinement_intervals = self.confinement_intervals.saturating_add(1);
    }

    #[inline]
    pub fn on_sample(&mut self) {
        self.samples = self.samples.saturating_add(1);
    }

    /// Records a refined transition and the bisection steps it took.
    #[inline]
    pub fn on_transition(&mut self, iterations: usize) {
        self.transitions = self.transitions.saturating_add(1);
        self.refinement_iterations = self
            .refinement_iterations
            .saturating_add(iterations as u64);
    }

    #[inline]
    pub fn on_interval_recorded(&mut self) {
        self.intervals_recorded = self.intervals_recorded.saturating_add(1);
    }

    #[inline]
    pub fn set_evaluations(&mut self, evaluations: u64) {
        self.evaluations = evaluations;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Event Search Statistics:")?;
        writeln!(f, "  Confinement intervals: {}", self.confinement_intervals)?;
        writeln!(f, "  Samples:               {}", self.samples)?;
        writeln!(f, "  Evaluations:           {}", self.evaluations)?;
        writeln!(f, "  Transitions:           {}", self.transitions)?;
        writeln!(f, "  Refinement iterations: {}", self.refinement_iterations)?;
        writeln!(f, "  Intervals recorded:    {}", self.intervals_recorded)?;
        writeln!(f, "  Total time:            {:.2?}", self.time_total)?;
        Ok(())
    }
}
