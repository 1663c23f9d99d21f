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

//! # Windows
//!
//! A `Window<T>` is an ordered set of closed intervals over continuous time.
//! It is the currency of event search: the caller confines a search to a
//! window, and the search reports the instants where its condition holds as
//! another window.
//!
//! ## Invariants
//!
//! - Intervals are sorted ascending by start.
//! - Intervals are pairwise disjoint with a strictly positive gap between
//!   neighbours. Touching or overlapping intervals are merged on insertion.
//! - The number of intervals never exceeds the window's capacity. Operations
//!   that would exceed it fail with `WindowError::CapacityExceeded` and leave
//!   the window unchanged.
//!
//! Every public mutation preserves these invariants, so a window observed
//! after a failed operation is still valid.
//!
//! ## Highlights
//!
//! - Construction: `new` (unbounded), `bounded`, `from_endpoints` (validated
//!   flat endpoint array), and `FromIterator`.
//! - Accessors: `cardinality`, `measure`, `fetch` by `IntervalIndex`, `iter`.
//! - Arithmetic: `insert`, `remove`, `union`, `intersection`, `difference`,
//!   `complement`, `contract`, `expand`, `fill_gaps`, `filter_short`.
//! - Queries: `contains_point`, `includes_interval`, `summary`, `check_valid`.
//!
//! ## Usage
//!
//! ```rust
//! use sextant_core::math::{interval::ClosedInterval, window::Window};
//!
//! let mut w = Window::bounded(4).unwrap();
//! w.insert(ClosedInterval::new(0.0, 5.0)).unwrap();
//! w.insert(ClosedInterval::new(10.0, 15.0)).unwrap();
//! w.insert(ClosedInterval::new(5.0, 7.0)).unwrap(); // touches [0, 5]
//!
//! assert_eq!(w.cardinality(), 2);
//! assert_eq!(w.measure(), 12.0);
//! ```

use crate::{
    math::interval::ClosedInterval,
    utils::index::{TypedIndex, TypedIndexTag},
};
use num_traits::Float;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct IntervalIndexTag;

impl TypedIndexTag for IntervalIndexTag {
    const NAME: &'static str = "IntervalIndex";
}

/// A typed index addressing an interval within a `Window`.
pub type IntervalIndex = TypedIndex<IntervalIndexTag>;

/// The error type for window construction and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// The requested capacity cannot hold a single interval.
    #[error("window capacity must allow at least one interval")]
    InvalidDimension,
    /// The operation would leave more intervals than the window can hold.
    #[error("window capacity of {capacity} intervals exceeded")]
    CapacityExceeded { capacity: usize },
    /// An interval had its start after its end.
    #[error("invalid interval [{start}, {end}]: start exceeds end")]
    InvalidInterval { start: f64, end: f64 },
    /// An endpoint was NaN or infinite.
    #[error("window endpoints must be finite")]
    NonFinite,
    /// A flat endpoint array did not describe whole intervals.
    #[error("endpoint array of length {len} does not describe whole intervals")]
    OddEndpointCount { len: usize },
    /// The interval at `index` overlaps, touches, or precedes its predecessor.
    #[error("window intervals are not sorted and separated at index {index}")]
    Unordered { index: usize },
}

#[inline]
fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Builds a checked interval from raw endpoints, classifying the failure.
fn checked_interval<T: Float>(start: T, end: T) -> Result<ClosedInterval<T>, WindowError> {
    if !start.is_finite() || !end.is_finite() {
        return Err(WindowError::NonFinite);
    }
    ClosedInterval::try_new(start, end).ok_or(WindowError::InvalidInterval {
        start: as_f64(start),
        end: as_f64(end),
    })
}

/// Appends `iv` to a list sorted by start, merging it into the last interval
/// if the two touch or overlap.
#[inline]
fn push_merging<T: Float>(intervals: &mut Vec<ClosedInterval<T>>, iv: ClosedInterval<T>) {
    if let Some(last) = intervals.last_mut() {
        debug_assert!(
            last.start() <= iv.start(),
            "called `push_merging` with out-of-order interval: last starts at {}, new starts at {}",
            as_f64(last.start()),
            as_f64(iv.start())
        );
        if let Some(merged) = last.union(iv) {
            *last = merged;
            return;
        }
    }
    intervals.push(iv);
}

/// Summary statistics of a non-empty window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSummary<T> {
    /// Sum of all interval measures.
    pub measure: T,
    /// Mean interval measure.
    pub average: T,
    /// The first interval with the smallest measure.
    pub shortest: IntervalIndex,
    /// The first interval with the largest measure.
    pub longest: IntervalIndex,
}

/// An ordered set of disjoint closed intervals with a capacity bound.
#[derive(Debug, Clone)]
pub struct Window<T>
where
    T: Float,
{
    intervals: Vec<ClosedInterval<T>>,
    capacity: usize,
}

impl<T> Default for Window<T>
where
    T: Float,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Window<T>
where
    T: Float,
{
    /// Creates an empty window without a capacity bound.
    #[inline]
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
            capacity: usize::MAX,
        }
    }

    /// Creates an empty window that holds at most `capacity` intervals.
    ///
    /// Returns `WindowError::InvalidDimension` if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::window::{Window, WindowError};
    ///
    /// assert!(Window::<f64>::bounded(2).is_ok());
    /// assert_eq!(Window::<f64>::bounded(0).unwrap_err(), WindowError::InvalidDimension);
    /// ```
    #[inline]
    pub fn bounded(capacity: usize) -> Result<Self, WindowError> {
        if capacity == 0 {
            return Err(WindowError::InvalidDimension);
        }
        Ok(Self {
            intervals: Vec::with_capacity(capacity.min(1024)),
            capacity,
        })
    }

    /// Creates an unbounded window holding the single interval `iv`.
    #[inline]
    pub fn from_interval(iv: ClosedInterval<T>) -> Self {
        Self {
            intervals: vec![iv],
            capacity: usize::MAX,
        }
    }

    /// Builds an unbounded window from a flat `[l0, r0, l1, r1, ...]` array.
    ///
    /// Pairs may arrive in any order and may overlap; they are sorted and
    /// merged. Each pair must satisfy `l <= r` with finite endpoints.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::window::Window;
    ///
    /// let w = Window::from_endpoints(&[10.0, 12.0, 0.0, 3.0, 2.0, 5.0]).unwrap();
    /// assert_eq!(w.endpoints(), vec![0.0, 5.0, 10.0, 12.0]);
    /// ```
    pub fn from_endpoints(endpoints: &[T]) -> Result<Self, WindowError> {
        if endpoints.len() % 2 != 0 {
            return Err(WindowError::OddEndpointCount {
                len: endpoints.len(),
            });
        }

        let mut pairs = endpoints
            .chunks_exact(2)
            .map(|pair| checked_interval(pair[0], pair[1]))
            .collect::<Result<Vec<_>, _>>()?;

        // Endpoints are finite, so the comparison is total.
        pairs.sort_by(|a, b| {
            a.start()
                .partial_cmp(&b.start())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut intervals = Vec::with_capacity(pairs.len());
        for iv in pairs {
            push_merging(&mut intervals, iv);
        }

        Ok(Self {
            intervals,
            capacity: usize::MAX,
        })
    }

    /// Wraps intervals that are expected to be sorted and separated, without
    /// checking.
    ///
    /// Nothing is verified here. Every other operation assumes the
    /// invariants hold, so windows built this way should pass `check_valid`
    /// before use; the search engine rejects those that do not.
    #[inline]
    pub fn from_sorted_unchecked(intervals: Vec<ClosedInterval<T>>) -> Self {
        Self {
            intervals,
            capacity: usize::MAX,
        }
    }

    /// Returns the maximum number of intervals this window can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the window has a finite capacity.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.capacity != usize::MAX
    }

    /// Changes the capacity bound.
    ///
    /// Fails if `capacity` is zero or smaller than the current cardinality.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), WindowError> {
        if capacity == 0 {
            return Err(WindowError::InvalidDimension);
        }
        if self.intervals.len() > capacity {
            return Err(WindowError::CapacityExceeded { capacity });
        }
        self.capacity = capacity;
        Ok(())
    }

    /// Returns the number of intervals in the window.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the window holds no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the total measure (sum of interval lengths) of the window.
    #[inline]
    pub fn measure(&self) -> T {
        self.intervals
            .iter()
            .fold(T::zero(), |acc, iv| acc + iv.measure())
    }

    /// Fetches the interval at `index`, or `None` if out of bounds.
    #[inline]
    pub fn fetch(&self, index: IntervalIndex) -> Option<ClosedInterval<T>> {
        self.intervals.get(index.get()).copied()
    }

    /// Returns the earliest interval.
    #[inline]
    pub fn first(&self) -> Option<ClosedInterval<T>> {
        self.intervals.first().copied()
    }

    /// Returns the latest interval.
    #[inline]
    pub fn last(&self) -> Option<ClosedInterval<T>> {
        self.intervals.last().copied()
    }

    /// Iterates over the intervals in ascending order.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, ClosedInterval<T>>> {
        self.intervals.iter().copied()
    }

    /// Returns the intervals as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[ClosedInterval<T>] {
        &self.intervals
    }

    /// Returns the window as a flat `[l0, r0, l1, r1, ...]` endpoint array.
    pub fn endpoints(&self) -> Vec<T> {
        self.intervals
            .iter()
            .flat_map(|iv| [iv.start(), iv.end()])
            .collect()
    }

    /// Removes all intervals, keeping the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// Inserts `iv`, merging it with every interval it touches or overlaps.
    ///
    /// Fails with `CapacityExceeded` if the merged window would hold more
    /// intervals than its capacity; the window is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::{interval::ClosedInterval, window::Window};
    ///
    /// let mut w = Window::new();
    /// w.insert(ClosedInterval::new(0.0, 2.0)).unwrap();
    /// w.insert(ClosedInterval::new(4.0, 6.0)).unwrap();
    /// w.insert(ClosedInterval::new(1.0, 5.0)).unwrap();
    /// assert_eq!(w.endpoints(), vec![0.0, 6.0]);
    /// ```
    pub fn insert(&mut self, iv: ClosedInterval<T>) -> Result<(), WindowError> {
        // Intervals in `lo..hi` touch or overlap `iv`.
        let lo = self.intervals.partition_point(|x| x.end() < iv.start());
        let hi = self.intervals.partition_point(|x| x.start() <= iv.end());

        if lo == hi {
            if self.intervals.len() >= self.capacity {
                return Err(WindowError::CapacityExceeded {
                    capacity: self.capacity,
                });
            }
            self.intervals.insert(lo, iv);
            return Ok(());
        }

        let merged = ClosedInterval::new_unchecked(
            iv.start().min(self.intervals[lo].start()),
            iv.end().max(self.intervals[hi - 1].end()),
        );
        self.intervals.splice(lo..hi, std::iter::once(merged));
        Ok(())
    }

    /// Inserts the interval `[start, end]` after validating its endpoints.
    #[inline]
    pub fn insert_endpoints(&mut self, start: T, end: T) -> Result<(), WindowError> {
        self.insert(checked_interval(start, end)?)
    }

    /// Removes the points of `iv` from the window.
    ///
    /// Remaining pieces are closed, so the endpoints of `iv` stay covered
    /// where the window extended past them. Removing a degenerate interval
    /// leaves the window unchanged. Splitting an interval in two can fail with
    /// `CapacityExceeded`, in which case the window is unchanged.
    pub fn remove(&mut self, iv: ClosedInterval<T>) -> Result<(), WindowError> {
        if iv.is_degenerate() {
            return Ok(());
        }

        let lo = self.intervals.partition_point(|x| x.end() < iv.start());
        let hi = self.intervals.partition_point(|x| x.start() <= iv.end());
        if lo == hi {
            return Ok(());
        }

        let mut pieces = Vec::with_capacity(2);
        for existing in &self.intervals[lo..hi] {
            pieces.extend(existing.difference(iv));
        }

        let new_len = self.intervals.len() - (hi - lo) + pieces.len();
        if new_len > self.capacity {
            return Err(WindowError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.intervals.splice(lo..hi, pieces);
        Ok(())
    }

    /// Returns `true` if `t` lies within one of the intervals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::window::Window;
    ///
    /// let w = Window::from_endpoints(&[0.0, 1.0, 3.0, 4.0]).unwrap();
    /// assert!(w.contains_point(3.0));
    /// assert!(!w.contains_point(2.0));
    /// ```
    pub fn contains_point(&self, t: T) -> bool {
        let i = self.intervals.partition_point(|x| x.end() < t);
        self.intervals
            .get(i)
            .is_some_and(|iv| iv.contains_point(t))
    }

    /// Returns `true` if `iv` lies entirely within a single interval.
    pub fn includes_interval(&self, iv: ClosedInterval<T>) -> bool {
        let i = self.intervals.partition_point(|x| x.end() < iv.start());
        self.intervals
            .get(i)
            .is_some_and(|container| container.contains_interval(iv))
    }

    /// Returns the union of `self` and `other`, with the capacity of `self`.
    pub fn union(&self, other: &Self) -> Result<Self, WindowError> {
        let mut merged = Vec::with_capacity(self.intervals.len() + other.intervals.len());
        let (mut a, mut b) = (self.intervals.iter().peekable(), other.intervals.iter().peekable());

        loop {
            let next = match (a.peek(), b.peek()) {
                (Some(x), Some(y)) if x.start() <= y.start() => a.next(),
                (Some(_), Some(_)) => b.next(),
                (Some(_), None) => a.next(),
                (None, Some(_)) => b.next(),
                (None, None) => break,
            };
            if let Some(iv) = next {
                push_merging(&mut merged, *iv);
            }
        }

        self.with_intervals(merged)
    }

    /// Returns the intersection of `self` and `other`, with the capacity of `self`.
    ///
    /// Intervals that merely touch intersect in a degenerate interval.
    pub fn intersection(&self, other: &Self) -> Result<Self, WindowError> {
        let mut result = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < self.intervals.len() && j < other.intervals.len() {
            let (a, b) = (self.intervals[i], other.intervals[j]);
            if let Some(common) = a.intersection(b) {
                result.push(common);
            }
            if a.end() < b.end() {
                i += 1;
            } else {
                j += 1;
            }
        }

        self.with_intervals(result)
    }

    /// Returns `self` minus `other`, with the capacity of `self`.
    ///
    /// Like `remove`, the remaining pieces are closed and degenerate
    /// intervals of `other` remove nothing.
    pub fn difference(&self, other: &Self) -> Result<Self, WindowError> {
        let mut result = Vec::with_capacity(self.intervals.len());
        let mut j = 0;

        for &a in &self.intervals {
            while j < other.intervals.len() && other.intervals[j].end() < a.start() {
                j += 1;
            }

            let mut rest = Some(a);
            let mut k = j;
            while let Some(current) = rest {
                let Some(&b) = other.intervals.get(k) else {
                    break;
                };
                if b.start() > current.end() {
                    break;
                }
                k += 1;
                if b.is_degenerate() {
                    continue;
                }

                let pieces = current.difference(b);
                rest = None;
                for piece in pieces {
                    if piece.end() <= b.start() {
                        result.push(piece);
                    } else {
                        rest = Some(piece);
                    }
                }
            }
            if let Some(current) = rest {
                result.push(current);
            }
        }

        self.with_intervals(result)
    }

    /// Returns the complement of the window relative to `bounds`.
    ///
    /// The gaps between intervals are returned as closed intervals sharing
    /// their endpoints with the window, clipped to `bounds`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::{interval::ClosedInterval, window::Window};
    ///
    /// let w = Window::from_endpoints(&[1.0, 2.0, 5.0, 6.0]).unwrap();
    /// let c = w.complement(ClosedInterval::new(0.0, 10.0)).unwrap();
    /// assert_eq!(c.endpoints(), vec![0.0, 1.0, 2.0, 5.0, 6.0, 10.0]);
    /// ```
    pub fn complement(&self, bounds: ClosedInterval<T>) -> Result<Self, WindowError> {
        let mut result = Vec::new();
        let mut cursor = bounds.start();

        for iv in self.intervals.iter().filter(|iv| iv.intersects(bounds)) {
            if iv.start() > cursor {
                push_merging(&mut result, ClosedInterval::new_unchecked(cursor, iv.start()));
            }
            cursor = cursor.max(iv.end());
        }
        if cursor < bounds.end() {
            push_merging(&mut result, ClosedInterval::new_unchecked(cursor, bounds.end()));
        }

        self.with_intervals(result)
    }

    /// Moves every left endpoint left by `left` and every right endpoint right by `right`.
    ///
    /// Intervals that grow into each other are merged. Negative amounts
    /// shrink intervals; any interval that would invert is dropped. Fails with
    /// `NonFinite` if an endpoint would overflow, leaving the window unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::window::Window;
    ///
    /// let mut w = Window::from_endpoints(&[0.0, 1.0, 3.0, 4.0]).unwrap();
    /// w.expand(1.0, 1.0).unwrap();
    /// assert_eq!(w.endpoints(), vec![-1.0, 5.0]);
    /// ```
    pub fn expand(&mut self, left: T, right: T) -> Result<(), WindowError> {
        let mut result = Vec::with_capacity(self.intervals.len());
        for iv in &self.intervals {
            let (start, end) = (iv.start() - left, iv.end() + right);
            if !start.is_finite() || !end.is_finite() {
                return Err(WindowError::NonFinite);
            }
            if start <= end {
                push_merging(&mut result, ClosedInterval::new_unchecked(start, end));
            }
        }
        self.intervals = result;
        Ok(())
    }

    /// Moves every left endpoint right by `left` and every right endpoint left by `right`.
    ///
    /// Intervals that would invert are dropped. Equivalent to
    /// `expand(-left, -right)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::window::Window;
    ///
    /// let mut w = Window::from_endpoints(&[0.0, 10.0, 20.0, 21.0]).unwrap();
    /// w.contract(1.0, 1.0).unwrap();
    /// assert_eq!(w.endpoints(), vec![1.0, 9.0]);
    /// ```
    #[inline]
    pub fn contract(&mut self, left: T, right: T) -> Result<(), WindowError> {
        self.expand(-left, -right)
    }

    /// Merges neighbouring intervals separated by a gap of measure `<= small`.
    pub fn fill_gaps(&mut self, small: T) {
        let mut result: Vec<ClosedInterval<T>> = Vec::with_capacity(self.intervals.len());
        for &iv in &self.intervals {
            match result.last_mut() {
                Some(last) if iv.start() - last.end() <= small => {
                    *last = ClosedInterval::new_unchecked(last.start(), iv.end());
                }
                _ => result.push(iv),
            }
        }
        self.intervals = result;
    }

    /// Drops intervals of measure `<= small`.
    #[inline]
    pub fn filter_short(&mut self, small: T) {
        self.intervals.retain(|iv| iv.measure() > small);
    }

    /// Summarizes the window, or returns `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::window::{Window, IntervalIndex};
    ///
    /// let w = Window::from_endpoints(&[0.0, 1.0, 3.0, 7.0, 9.0, 10.0]).unwrap();
    /// let s = w.summary().unwrap();
    /// assert_eq!(s.measure, 6.0);
    /// assert_eq!(s.average, 2.0);
    /// assert_eq!(s.shortest, IntervalIndex::new(0));
    /// assert_eq!(s.longest, IntervalIndex::new(1));
    /// ```
    pub fn summary(&self) -> Option<WindowSummary<T>> {
        let first = self.intervals.first()?;
        let mut shortest = (0, first.measure());
        let mut longest = (0, first.measure());
        let mut measure = T::zero();

        for (i, iv) in self.intervals.iter().enumerate() {
            let m = iv.measure();
            measure = measure + m;
            if m < shortest.1 {
                shortest = (i, m);
            }
            if m > longest.1 {
                longest = (i, m);
            }
        }

        let count = <T as num_traits::NumCast>::from(self.intervals.len())?;
        Some(WindowSummary {
            measure,
            average: measure / count,
            shortest: IntervalIndex::new(shortest.0),
            longest: IntervalIndex::new(longest.0),
        })
    }

    /// Checks every window invariant.
    ///
    /// Windows built through the public API always pass; this exists for
    /// windows assembled with `from_sorted_unchecked` and as a precondition
    /// check for consumers that must reject malformed input.
    pub fn check_valid(&self) -> Result<(), WindowError> {
        if self.intervals.len() > self.capacity {
            return Err(WindowError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        for (index, iv) in self.intervals.iter().enumerate() {
            if !iv.start().is_finite() || !iv.end().is_finite() {
                return Err(WindowError::NonFinite);
            }
            if iv.start() > iv.end() {
                return Err(WindowError::InvalidInterval {
                    start: as_f64(iv.start()),
                    end: as_f64(iv.end()),
                });
            }
            if index > 0 && self.intervals[index - 1].end() >= iv.start() {
                return Err(WindowError::Unordered { index });
            }
        }
        Ok(())
    }

    /// Replaces nothing in `self`; wraps `intervals` with `self`'s capacity.
    fn with_intervals(&self, intervals: Vec<ClosedInterval<T>>) -> Result<Self, WindowError> {
        if intervals.len() > self.capacity {
            return Err(WindowError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(Self {
            intervals,
            capacity: self.capacity,
        })
    }
}

impl<T> PartialEq for Window<T>
where
    T: Float,
{
    /// Windows compare as interval sets; capacity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.intervals == other.intervals
    }
}

impl<T> std::fmt::Display for Window<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, iv) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", iv)?;
        }
        write!(f, "}}")
    }
}

impl<T> FromIterator<ClosedInterval<T>> for Window<T>
where
    T: Float,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = ClosedInterval<T>>,
    {
        let mut window = Self::new();
        for iv in iter {
            // An unbounded window never runs out of capacity.
            let _ = window.insert(iv);
        }
        window
    }
}

impl<'a, T> IntoIterator for &'a Window<T>
where
    T: Float,
{
    type Item = ClosedInterval<T>;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, ClosedInterval<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
