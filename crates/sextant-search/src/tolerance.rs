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

//! # Convergence Tolerance
//!
//! The process-wide default bracket width accepted by the root refiner.
//!
//! A search reads the default exactly once, when it starts, unless its
//! `SearchConfig` carries an explicit tolerance. Changing the default affects
//! subsequent searches only. Loads and stores are atomic, so concurrent
//! searches never observe a torn value, but changing the default while
//! searches run makes their effective tolerance depend on timing.

use crate::error::SearchError;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default convergence tolerance, in seconds.
pub const DEFAULT_CONVERGENCE_TOLERANCE: f64 = 1e-6;

static CONVERGENCE_TOLERANCE: AtomicU64 = AtomicU64::new(DEFAULT_CONVERGENCE_TOLERANCE.to_bits());

/// Sets the process-wide convergence tolerance.
///
/// Returns `SearchError::InvalidTolerance` unless `tolerance` is positive and
/// finite; the current value is kept in that case.
pub fn set_convergence_tolerance(tolerance: f64) -> Result<(), SearchError> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(SearchError::InvalidTolerance { tolerance });
    }
    CONVERGENCE_TOLERANCE.store(tolerance.to_bits(), Ordering::Relaxed);
    Ok(())
}

/// Returns the process-wide convergence tolerance.
#[inline]
pub fn convergence_tolerance() -> f64 {
    f64::from_bits(CONVERGENCE_TOLERANCE.load(Ordering::Relaxed))
}

/// Restores `DEFAULT_CONVERGENCE_TOLERANCE`.
#[inline]
pub fn reset_convergence_tolerance() {
    CONVERGENCE_TOLERANCE.store(DEFAULT_CONVERGENCE_TOLERANCE.to_bits(), Ordering::Relaxed);
}

