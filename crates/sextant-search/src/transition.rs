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

//! # Transition Detection
//!
//! Compares consecutive samples and reports a `Bracket` whenever the
//! condition changes value between them.

use crate::sampler::Sample;
use num_traits::Float;

/// Direction of a condition change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// false → true: an interval starts.
    Rising,
    /// true → false: an interval ends.
    Falling,
}

impl Edge {
    /// Classifies the change from `before` to `after`, if any.
    #[inline]
    pub fn between(before: bool, after: bool) -> Option<Self> {
        match (before, after) {
            (false, true) => Some(Edge::Rising),
            (true, false) => Some(Edge::Falling),
            _ => None,
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edge::Rising => write!(f, "Rising"),
            Edge::Falling => write!(f, "Falling"),
        }
    }
}

/// Two samples known to straddle a condition change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    lower: Sample<T>,
    upper: Sample<T>,
    edge: Edge,
}

impl<T> Bracket<T>
where
    T: Float,
{
    /// Creates a bracket, or `None` unless `lower.time < upper.time` and the
    /// values differ.
    #[inline]
    pub fn new(lower: Sample<T>, upper: Sample<T>) -> Option<Self> {
        if lower.time < upper.time {
            Edge::between(lower.value, upper.value).map(|edge| Self { lower, upper, edge })
        } else {
            None
        }
    }

    #[inline]
    pub fn lower(&self) -> Sample<T> {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> Sample<T> {
        self.upper
    }

    #[inline]
    pub fn edge(&self) -> Edge {
        self.edge
    }
}

/// Remembers the previous sample and reports changes.
#[derive(Debug, Clone, Default)]
pub struct TransitionDetector<T> {
    previous: Option<Sample<T>>,
}

impl<T> TransitionDetector<T>
where
    T: Float,
{
    #[inline]
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Returns the last observed sample.
    #[inline]
    pub fn previous(&self) -> Option<Sample<T>> {
        self.previous
    }

    /// Observes `sample`, returning the bracket it closes with the previous
    /// sample if the condition changed.
    #[inline]
    pub fn observe(&mut self, sample: Sample<T>) -> Option<Bracket<T>> {
        let bracket = self
            .previous
            .and_then(|previous| Bracket::new(previous, sample));
        self.previous = Some(sample);
        bracket
    }
}
