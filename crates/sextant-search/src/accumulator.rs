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

//! # Interval Accumulator
//!
//! Pairs onsets and offsets into result intervals while one confinement
//! interval is being traversed.
//!
//! Onsets are either *clipped* (the condition already held at the start of
//! the confinement interval) or *refined* (located by bisection). Offsets are
//! either refined or clipped to the end of the confinement interval. An
//! interval opened by a refined onset and clipped at the very same instant
//! lies entirely on the confinement boundary and is discarded.

use crate::error::SearchError;
use num_traits::Float;
use sextant_core::math::{interval::ClosedInterval, window::Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Onset {
    Clipped,
    Refined,
}

/// Tracks the pending interval of one confinement interval.
#[derive(Debug, Clone, Default)]
pub struct IntervalAccumulator<T> {
    pending: Option<(T, Onset)>,
}

impl<T> IntervalAccumulator<T>
where
    T: Float,
{
    #[inline]
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Returns `true` while an interval is open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Opens an interval at the start of the confinement interval.
    #[inline]
    pub fn open_clipped(&mut self, start: T) -> Result<(), SearchError> {
        self.open(start, Onset::Clipped)
    }

    /// Opens an interval at a refined onset.
    #[inline]
    pub fn open_refined(&mut self, start: T) -> Result<(), SearchError> {
        self.open(start, Onset::Refined)
    }

    fn open(&mut self, start: T, onset: Onset) -> Result<(), SearchError> {
        if self.pending.is_some() {
            return Err(SearchError::AccumulatorViolation(
                "onset while an interval is already open",
            ));
        }
        self.pending = Some((start, onset));
        Ok(())
    }

    /// Closes the open interval at a refined offset and records it.
    ///
    /// Returns the recorded interval.
    pub fn close_refined(
        &mut self,
        end: T,
        result: &mut Window<T>,
    ) -> Result<ClosedInterval<T>, SearchError> {
        let (start, _) = self.pending.take().ok_or(SearchError::AccumulatorViolation(
            "offset without an open interval",
        ))?;
        Self::record(start, end, result)
    }

    /// Closes any open interval at the end of the confinement interval.
    ///
    /// Returns the recorded interval, or `None` if nothing was open or the
    /// interval was discarded for lying on the boundary.
    pub fn close_clipped(
        &mut self,
        boundary: T,
        result: &mut Window<T>,
    ) -> Result<Option<ClosedInterval<T>>, SearchError> {
        match self.pending.take() {
            None => Ok(None),
            Some((start, Onset::Refined)) if start >= boundary => Ok(None),
            Some((start, _)) => Self::record(start, boundary, result).map(Some),
        }
    }

    fn record(
        start: T,
        end: T,
        result: &mut Window<T>,
    ) -> Result<ClosedInterval<T>, SearchError> {
        let interval = ClosedInterval::try_new(start, end).ok_or(
            SearchError::AccumulatorViolation("offset precedes its onset"),
        )?;
        result.insert(interval)?;
        Ok(interval)
    }
}
