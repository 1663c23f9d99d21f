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

//! # Event Conditions
//!
//! The capability interface between the search engine and the caller's
//! condition. A condition answers "does the event hold at time `t`?" and may
//! optionally expose the scalar quantity it is built on.
//!
//! ## Provided conditions
//!
//! - `ConditionFn`: an infallible `FnMut(T) -> bool`.
//! - `TryConditionFn`: a fallible `FnMut(T) -> Result<bool, PredicateError>`.
//! - `UserDefinedBoolean`: a scalar function paired with a boolean test that
//!   receives the scalar function and the time, for conditions such as
//!   "altitude is positive and increasing" that sample the scalar at several
//!   instants. Plain `FnMut(T) -> T` closures serve as scalar functions;
//!   `TryScalarFn` wraps fallible ones.
//!
//! The engine only ever talks to conditions through `PredicateAdapter`, which
//! counts evaluations and turns caller failures into
//! `SearchError::PredicateFailure`.
//!
//! ## Usage
//!
//! ```rust
//! use sextant_search::predicate::{ConditionFn, EventCondition};
//!
//! let mut positive = ConditionFn::new(|t: f64| t.sin() > 0.0);
//! assert!(positive.evaluate_boolean(1.0).unwrap());
//! assert_eq!(positive.evaluate_scalar(1.0).unwrap(), None);
//! ```

use crate::{
    error::{PredicateError, SearchError},
    num::{SearchNumeric, to_f64},
};

/// A boolean condition over time, optionally backed by a scalar function.
pub trait EventCondition<T> {
    /// Evaluates the scalar quantity behind the condition, if there is one.
    #[inline]
    fn evaluate_scalar(&mut self, _t: T) -> Result<Option<T>, PredicateError> {
        Ok(None)
    }

    /// Evaluates the condition at `t`.
    fn evaluate_boolean(&mut self, t: T) -> Result<bool, PredicateError>;
}

impl<T, C> EventCondition<T> for &mut C
where
    C: EventCondition<T> + ?Sized,
{
    #[inline]
    fn evaluate_scalar(&mut self, t: T) -> Result<Option<T>, PredicateError> {
        (**self).evaluate_scalar(t)
    }

    #[inline]
    fn evaluate_boolean(&mut self, t: T) -> Result<bool, PredicateError> {
        (**self).evaluate_boolean(t)
    }
}

impl<T, C> EventCondition<T> for Box<C>
where
    C: EventCondition<T> + ?Sized,
{
    #[inline]
    fn evaluate_scalar(&mut self, t: T) -> Result<Option<T>, PredicateError> {
        (**self).evaluate_scalar(t)
    }

    #[inline]
    fn evaluate_boolean(&mut self, t: T) -> Result<bool, PredicateError> {
        (**self).evaluate_boolean(t)
    }
}

/// An infallible condition closure.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct ConditionFn<F> {
    function: F,
}

impl<F> ConditionFn<F> {
    #[inline]
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> std::fmt::Debug for ConditionFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ConditionFn")
    }
}

impl<T, F> EventCondition<T> for ConditionFn<F>
where
    F: FnMut(T) -> bool,
{
    #[inline]
    fn evaluate_boolean(&mut self, t: T) -> Result<bool, PredicateError> {
        Ok((self.function)(t))
    }
}

/// A fallible condition closure. Its errors abort the search.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct TryConditionFn<F> {
    function: F,
}

impl<F> TryConditionFn<F> {
    #[inline]
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> std::fmt::Debug for TryConditionFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TryConditionFn")
    }
}

impl<T, F> EventCondition<T> for TryConditionFn<F>
where
    F: FnMut(T) -> Result<bool, PredicateError>,
{
    #[inline]
    fn evaluate_boolean(&mut self, t: T) -> Result<bool, PredicateError> {
        (self.function)(t)
    }
}

/// A scalar function of time.
///
/// Implemented for every `FnMut(T) -> T` closure. Wrap fallible closures in
/// `TryScalarFn`.
pub trait ScalarFunction<T> {
    fn evaluate(&mut self, t: T) -> Result<T, PredicateError>;
}

impl<T, F> ScalarFunction<T> for F
where
    F: FnMut(T) -> T,
{
    #[inline]
    fn evaluate(&mut self, t: T) -> Result<T, PredicateError> {
        Ok(self(t))
    }
}

/// A fallible scalar closure. Its errors surface through the boolean test.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct TryScalarFn<F> {
    function: F,
}

impl<F> TryScalarFn<F> {
    #[inline]
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> std::fmt::Debug for TryScalarFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TryScalarFn")
    }
}

impl<T, F> ScalarFunction<T> for TryScalarFn<F>
where
    F: FnMut(T) -> Result<T, PredicateError>,
{
    #[inline]
    fn evaluate(&mut self, t: T) -> Result<T, PredicateError> {
        (self.function)(t)
    }
}

/// A scalar function that ignores its input and returns zero.
///
/// Pairs with boolean tests that need no scalar quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpScalar;

impl<T> ScalarFunction<T> for NoOpScalar
where
    T: num_traits::Zero,
{
    #[inline(always)]
    fn evaluate(&mut self, _t: T) -> Result<T, PredicateError> {
        Ok(T::zero())
    }
}

/// A boolean test built on top of a scalar function.
///
/// The test receives the scalar function itself so it can sample it at any
/// instant it needs, e.g. `t` and `t + dt` for a sign-of-derivative test.
pub struct UserDefinedBoolean<S, B> {
    scalar: S,
    boolean: B,
}

impl<S, B> UserDefinedBoolean<S, B> {
    #[inline]
    pub fn new(scalar: S, boolean: B) -> Self {
        Self { scalar, boolean }
    }
}

impl<S, B> std::fmt::Debug for UserDefinedBoolean<S, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("UserDefinedBoolean")
    }
}

impl<T, S, B> EventCondition<T> for UserDefinedBoolean<S, B>
where
    S: ScalarFunction<T>,
    B: FnMut(&mut dyn ScalarFunction<T>, T) -> Result<bool, PredicateError>,
{
    #[inline]
    fn evaluate_scalar(&mut self, t: T) -> Result<Option<T>, PredicateError> {
        self.scalar.evaluate(t).map(Some)
    }

    #[inline]
    fn evaluate_boolean(&mut self, t: T) -> Result<bool, PredicateError> {
        (self.boolean)(&mut self.scalar, t)
    }
}

/// Uniform `evaluate(t) -> bool` access to a caller condition.
///
/// Counts evaluations and maps caller failures to
/// `SearchError::PredicateFailure`, keeping the caller's error as the source.
pub struct PredicateAdapter<'a, C>
where
    C: ?Sized,
{
    condition: &'a mut C,
    evaluations: u64,
}

impl<'a, C> PredicateAdapter<'a, C>
where
    C: ?Sized,
{
    #[inline]
    pub fn new(condition: &'a mut C) -> Self {
        Self {
            condition,
            evaluations: 0,
        }
    }

    /// Returns the number of boolean evaluations performed so far.
    #[inline]
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Evaluates the condition at `t`.
    #[inline]
    pub fn evaluate<T>(&mut self, t: T) -> Result<bool, SearchError>
    where
        T: SearchNumeric,
        C: EventCondition<T>,
    {
        self.evaluations = self.evaluations.saturating_add(1);
        self.condition
            .evaluate_boolean(t)
            .map_err(|source| SearchError::PredicateFailure {
                time: to_f64(t),
                source,
            })
    }
}

impl<C> std::fmt::Debug for PredicateAdapter<'_, C>
where
    C: ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateAdapter")
            .field("evaluations", &self.evaluations)
            .finish()
    }
}
