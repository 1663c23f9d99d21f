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

use num_traits::Float;
use smallvec::SmallVec;
use std::ops::{BitAnd, BitOr};

/// A closed interval `[start, end]` of continuous time.
///
/// Both endpoints belong to the interval. Degenerate intervals
/// (`start == end`) are valid and describe a single instant.
///
/// # Invariants
/// `start` must always be less than or equal to `end`, and both endpoints
/// must be finite.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct ClosedInterval<T>
where
    T: Float,
{
    start: T,
    end: T,
}

impl<T> ClosedInterval<T>
where
    T: Float,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or if either endpoint is not finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0.0, 10.0);
    /// assert_eq!(iv.measure(), 10.0);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start.is_finite() && end.is_finite() && start <= end,
            "Invalid interval: endpoints must be finite and start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `start > end` or if either endpoint is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0.0, 10.0).is_some());
    /// assert!(ClosedInterval::try_new(10.0, 0.0).is_none());
    /// assert!(ClosedInterval::try_new(f64::NAN, 0.0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start.is_finite() && end.is_finite() && start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval` without checking invariants in release builds.
    ///
    /// The caller must ensure `start <= end` and that both endpoints are finite.
    /// This function contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start.is_finite() && end.is_finite() && start <= end,
            "Invalid interval: endpoints must be finite and start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates the degenerate interval `[t, t]`.
    #[inline]
    pub fn point(t: T) -> Self {
        Self::new(t, t)
    }

    /// Returns the left endpoint of the interval.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the right endpoint of the interval.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns the length of the interval (`end - start`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(10.0, 20.5).measure(), 10.5);
    /// ```
    #[inline]
    pub fn measure(&self) -> T {
        self.end - self.start
    }

    /// Returns `true` if the interval is a single instant (`start == end`).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// Touching intervals intersect, since both endpoints are included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0.0, 10.0);
    /// assert!(a.intersects(ClosedInterval::new(5.0, 15.0)));
    /// assert!(a.intersects(ClosedInterval::new(10.0, 20.0))); // Touching
    /// assert!(!a.intersects(ClosedInterval::new(10.5, 20.0)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns `true` if `value` lies in `[start, end]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0.0, 10.0);
    /// assert!(iv.contains_point(0.0));
    /// assert!(iv.contains_point(10.0));
    /// assert!(!iv.contains_point(10.000001));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Touching intervals intersect in a degenerate interval. Returns `None`
    /// if the intervals are separated by a gap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0.0, 10.0);
    /// let b = ClosedInterval::new(5.0, 15.0);
    /// assert_eq!(a.intersection(b), Some(ClosedInterval::new(5.0, 10.0)));
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let new_start = self.start.max(other.start);
        let new_end = self.end.min(other.end);

        if new_start <= new_end {
            Some(Self::new_unchecked(new_start, new_end))
        } else {
            None
        }
    }

    /// Calculates the smallest interval covering both intervals, provided
    /// they intersect or touch.
    ///
    /// Returns `None` if the intervals are separated by a gap, since their
    /// union is not a single interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0.0, 10.0);
    /// let b = ClosedInterval::new(10.0, 20.0);
    /// assert_eq!(a.union(b), Some(ClosedInterval::new(0.0, 20.0)));
    /// ```
    #[inline]
    pub fn union(&self, other: Self) -> Option<Self> {
        if self.intersects(other) {
            Some(Self::new_unchecked(
                self.start.min(other.start),
                self.end.max(other.end),
            ))
        } else {
            None
        }
    }

    /// Calculates the set difference `self - other`.
    ///
    /// The remaining pieces are closed: subtracting `[4, 6]` from `[0, 10]`
    /// yields `[0, 4]` and `[6, 10]`, keeping the shared endpoints.
    ///
    /// # Returns
    ///
    /// A `SmallVec` containing:
    /// * 0 intervals: If `other` fully covers `self`.
    /// * 1 interval: If `other` clips one side of `self` or is disjoint.
    /// * 2 intervals: If `other` lies strictly inside `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0.0, 10.0);
    /// let diff = a.difference(ClosedInterval::new(4.0, 6.0));
    /// assert_eq!(diff.len(), 2);
    /// assert_eq!(diff[0], ClosedInterval::new(0.0, 4.0));
    /// assert_eq!(diff[1], ClosedInterval::new(6.0, 10.0));
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<[Self; 2]> {
        if !self.intersects(other) {
            return smallvec::smallvec![*self];
        }

        let mut result = SmallVec::new();
        if self.start < other.start {
            result.push(Self::new_unchecked(self.start, other.start));
        }
        if other.end < self.end {
            result.push(Self::new_unchecked(other.end, self.end));
        }
        result
    }

    /// Calculates the midpoint of the interval.
    ///
    /// Computed as `start + (end - start) / 2`, which stays finite for
    /// endpoints of large magnitude.
    #[inline]
    pub fn midpoint(&self) -> T {
        let two = T::one() + T::one();
        self.start + (self.end - self.start) / two
    }

    /// Returns the open gap between two separated intervals as a closed interval.
    ///
    /// Returns `None` if the intervals intersect or touch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0.0, 5.0);
    /// let b = ClosedInterval::new(10.0, 15.0);
    /// assert_eq!(a.gap(b), Some(ClosedInterval::new(5.0, 10.0)));
    /// ```
    #[inline]
    pub fn gap(&self, other: Self) -> Option<Self> {
        if self.end < other.start {
            Some(Self::new_unchecked(self.end, other.start))
        } else if other.end < self.start {
            Some(Self::new_unchecked(other.end, self.start))
        } else {
            None
        }
    }

    /// Splits the interval into two at the given `value`.
    ///
    /// Both halves contain `value`. Returns `None` unless
    /// `start < value < end`.
    #[inline]
    pub fn split_at(&self, value: T) -> Option<(Self, Self)> {
        if self.start < value && value < self.end {
            Some((
                Self::new_unchecked(self.start, value),
                Self::new_unchecked(value, self.end),
            ))
        } else {
            None
        }
    }

    /// Clamps `value` into `[start, end]`.
    #[inline]
    pub fn clamp(&self, value: T) -> T {
        value.max(self.start).min(self.end)
    }

    /// Moves the left endpoint right by `left` and the right endpoint left by `right`.
    ///
    /// Returns `None` if the interval would invert or become non-finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sextant_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0.0, 10.0);
    /// assert_eq!(iv.contract(2.0, 3.0), Some(ClosedInterval::new(2.0, 7.0)));
    /// assert_eq!(iv.contract(6.0, 6.0), None);
    /// ```
    #[inline]
    pub fn contract(&self, left: T, right: T) -> Option<Self> {
        Self::try_new(self.start + left, self.end - right)
    }

    /// Moves the left endpoint left by `left` and the right endpoint right by `right`.
    ///
    /// Negative amounts shrink the interval; returns `None` if it would invert
    /// or become non-finite.
    #[inline]
    pub fn expand(&self, left: T, right: T) -> Option<Self> {
        Self::try_new(self.start - left, self.end + right)
    }
}

impl<T> BitAnd for ClosedInterval<T>
where
    T: Float,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> BitOr for ClosedInterval<T>
where
    T: Float,
{
    type Output = Option<Self>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> Default for ClosedInterval<T>
where
    T: Float,
{
    #[inline]
    fn default() -> Self {
        Self {
            start: T::zero(),
            end: T::zero(),
        }
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T> std::ops::RangeBounds<T> for ClosedInterval<T>
where
    T: Float,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.end)
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for ClosedInterval<T>
where
    T: Float,
{
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl<T> From<ClosedInterval<T>> for std::ops::RangeInclusive<T>
where
    T: Float,
{
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.start..=iv.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::{Bound, RangeBounds};

    #[test]
    fn test_construction_valid() {
        let iv = ClosedInterval::new(10.0, 20.0);
        assert_eq!(iv.start(), 10.0);
        assert_eq!(iv.end(), 20.0);
        assert_eq!(iv.measure(), 10.0);
        assert!(!iv.is_degenerate());
    }

    #[test]
    fn test_construction_degenerate() {
        let iv = ClosedInterval::point(3.5);
        assert_eq!(iv.start(), 3.5);
        assert_eq!(iv.end(), 3.5);
        assert_eq!(iv.measure(), 0.0);
        assert!(iv.is_degenerate());
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedInterval::try_new(5.0, 10.0).is_some());
        assert!(ClosedInterval::try_new(5.0, 5.0).is_some());
        assert!(ClosedInterval::try_new(10.0, 5.0).is_none());
        assert!(ClosedInterval::try_new(0.0, f64::INFINITY).is_none());
        assert!(ClosedInterval::try_new(f64::NAN, f64::NAN).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        ClosedInterval::new(10.0, 5.0);
    }

    #[test]
    fn test_default() {
        let iv: ClosedInterval<f64> = Default::default();
        assert!(iv.is_degenerate());
        assert_eq!(iv.start(), 0.0);
    }

    #[test]
    fn test_intersects() {
        let a = ClosedInterval::new(0.0, 10.0);

        // Disjoint left
        assert!(!a.intersects(ClosedInterval::new(-5.0, -0.5)));
        // Touching left
        assert!(a.intersects(ClosedInterval::new(-5.0, 0.0)));
        // Overlap left
        assert!(a.intersects(ClosedInterval::new(-5.0, 5.0)));
        // Contained
        assert!(a.intersects(ClosedInterval::new(2.0, 8.0)));
        // Identity
        assert!(a.intersects(a));
        // Touching right
        assert!(a.intersects(ClosedInterval::new(10.0, 15.0)));
        // Disjoint right
        assert!(!a.intersects(ClosedInterval::new(11.0, 15.0)));
    }

    #[test]
    fn test_contains_point() {
        let a = ClosedInterval::new(0.0, 10.0);
        assert!(a.contains_point(0.0));
        assert!(a.contains_point(5.0));
        assert!(a.contains_point(10.0));
        assert!(!a.contains_point(-0.1));
        assert!(!a.contains_point(10.1));
        assert!(!a.contains_point(f64::NAN));
    }

    #[test]
    fn test_contains_interval() {
        let main = ClosedInterval::new(0.0, 10.0);
        assert!(main.contains_interval(main));
        assert!(main.contains_interval(ClosedInterval::new(2.0, 8.0)));
        assert!(main.contains_interval(ClosedInterval::point(10.0)));
        assert!(!main.contains_interval(ClosedInterval::new(-1.0, 5.0)));
        assert!(!main.contains_interval(ClosedInterval::new(5.0, 11.0)));
    }

    #[test]
    fn test_intersection() {
        let a = ClosedInterval::new(0.0, 10.0);

        assert_eq!(
            a.intersection(ClosedInterval::new(5.0, 15.0)),
            Some(ClosedInterval::new(5.0, 10.0))
        );

        let c = ClosedInterval::new(2.0, 8.0);
        assert_eq!(a & c, Some(c));

        // Touching yields the shared instant
        assert_eq!(
            a.intersection(ClosedInterval::new(10.0, 20.0)),
            Some(ClosedInterval::point(10.0))
        );

        assert_eq!(a.intersection(ClosedInterval::new(12.0, 20.0)), None);
    }

    #[test]
    fn test_union() {
        let a = ClosedInterval::new(0.0, 10.0);

        assert_eq!(
            a.union(ClosedInterval::new(5.0, 15.0)),
            Some(ClosedInterval::new(0.0, 15.0))
        );
        assert_eq!(
            a | ClosedInterval::new(10.0, 20.0),
            Some(ClosedInterval::new(0.0, 20.0))
        );
        assert_eq!(a.union(ClosedInterval::new(2.0, 8.0)), Some(a));
        assert_eq!(a.union(ClosedInterval::new(12.0, 20.0)), None);
    }

    #[test]
    fn test_difference() {
        let base = ClosedInterval::new(0.0, 10.0);

        // Disjoint (no effect)
        let diff = base.difference(ClosedInterval::new(12.0, 15.0));
        assert_eq!(diff.as_slice(), &[base]);

        // Full cover
        let diff = base.difference(ClosedInterval::new(-5.0, 15.0));
        assert!(diff.is_empty());

        // Clip right
        let diff = base.difference(ClosedInterval::new(8.0, 15.0));
        assert_eq!(diff.as_slice(), &[ClosedInterval::new(0.0, 8.0)]);

        // Clip left
        let diff = base.difference(ClosedInterval::new(-5.0, 2.0));
        assert_eq!(diff.as_slice(), &[ClosedInterval::new(2.0, 10.0)]);

        // Hole
        let diff = base.difference(ClosedInterval::new(4.0, 6.0));
        assert_eq!(
            diff.as_slice(),
            &[ClosedInterval::new(0.0, 4.0), ClosedInterval::new(6.0, 10.0)]
        );
    }

    #[test]
    fn test_gap() {
        let a = ClosedInterval::new(0.0, 5.0);
        let b = ClosedInterval::new(10.0, 15.0);

        assert_eq!(a.gap(b), Some(ClosedInterval::new(5.0, 10.0)));
        assert_eq!(b.gap(a), Some(ClosedInterval::new(5.0, 10.0)));
        assert!(a.gap(ClosedInterval::new(5.0, 10.0)).is_none());
        assert!(a.gap(ClosedInterval::new(4.0, 6.0)).is_none());
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(ClosedInterval::new(0.0, 10.0).midpoint(), 5.0);
        assert_eq!(ClosedInterval::new(-10.0, -4.0).midpoint(), -7.0);

        // Naive (a + b) / 2 overflows to infinity here.
        let wide = ClosedInterval::new(f64::MAX / 2.0, f64::MAX);
        assert!(wide.midpoint().is_finite());
    }

    #[test]
    fn test_split_at() {
        let a = ClosedInterval::new(0.0, 10.0);
        assert!(a.split_at(0.0).is_none());
        assert!(a.split_at(10.0).is_none());
        let (l, r) = a.split_at(4.0).unwrap();
        assert_eq!(l, ClosedInterval::new(0.0, 4.0));
        assert_eq!(r, ClosedInterval::new(4.0, 10.0));
    }

    #[test]
    fn test_clamp() {
        let a = ClosedInterval::new(0.0, 10.0);
        assert_eq!(a.clamp(-3.0), 0.0);
        assert_eq!(a.clamp(3.0), 3.0);
        assert_eq!(a.clamp(13.0), 10.0);
    }

    #[test]
    fn test_contract_and_expand() {
        let a = ClosedInterval::new(0.0, 10.0);
        assert_eq!(a.contract(1.0, 1.0), Some(ClosedInterval::new(1.0, 9.0)));
        assert_eq!(a.contract(5.0, 5.0), Some(ClosedInterval::point(5.0)));
        assert_eq!(a.contract(5.0, 5.5), None);
        assert_eq!(a.expand(1.0, 2.0), Some(ClosedInterval::new(-1.0, 12.0)));
        assert_eq!(a.expand(-6.0, -6.0), None);
    }

    #[test]
    fn test_traits_display_debug() {
        let a = ClosedInterval::new(10.0, 20.5);
        assert_eq!(format!("{}", a), "[10, 20.5]");
        assert_eq!(
            format!("{:?}", a),
            "ClosedInterval { start: 10.0, end: 20.5 }"
        );
    }

    #[test]
    fn test_range_conversions() {
        let iv = ClosedInterval::from(1.0..=4.0);
        assert_eq!(iv.start(), 1.0);
        assert_eq!(iv.end(), 4.0);

        let range: std::ops::RangeInclusive<f64> = iv.into();
        assert_eq!(range, 1.0..=4.0);
    }

    #[test]
    fn test_range_bounds() {
        let iv = ClosedInterval::new(5.0f32, 10.0);

        match iv.start_bound() {
            Bound::Included(&x) => assert_eq!(x, 5.0),
            _ => panic!("Wrong start bound"),
        }

        match iv.end_bound() {
            Bound::Included(&x) => assert_eq!(x, 10.0),
            _ => panic!("Wrong end bound"),
        }
    }
}
