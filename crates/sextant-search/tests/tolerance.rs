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

use sextant_core::math::{interval::ClosedInterval, window::Window};
use sextant_search::{
    SearchError, predicate::ConditionFn, search,
    tolerance::{
        DEFAULT_CONVERGENCE_TOLERANCE, convergence_tolerance, reset_convergence_tolerance,
        set_convergence_tolerance,
    },
};

// Kept in one test so nothing else in this binary reads the global while it changes.
#[test]
fn process_wide_tolerance_applies_to_subsequent_searches() {
    let offset = 2.718_281_828_459_045;
    let confinement = Window::from_interval(ClosedInterval::new(0.0, 10.0));
    let mut condition = ConditionFn::new(|t: f64| t <= offset);

    assert_eq!(convergence_tolerance(), DEFAULT_CONVERGENCE_TOLERANCE);
    let end = search(&mut condition, 1.0, &confinement, 2)
        .unwrap()
        .first()
        .unwrap()
        .end();
    assert!(offset - end <= DEFAULT_CONVERGENCE_TOLERANCE);

    set_convergence_tolerance(0.1).unwrap();
    let end = search(&mut condition, 1.0, &confinement, 2)
        .unwrap()
        .first()
        .unwrap()
        .end();
    assert!(end <= offset && offset - end <= 0.1);

    for bad in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            set_convergence_tolerance(bad),
            Err(SearchError::InvalidTolerance { .. })
        ));
    }
    assert_eq!(convergence_tolerance(), 0.1);

    // The default is not representable as a positive f32.
    set_convergence_tolerance(1e-300).unwrap();
    let mut narrow = ConditionFn::new(|t: f32| t <= 2.5);
    let narrow_confinement = Window::from_interval(ClosedInterval::new(0.0f32, 10.0));
    assert!(matches!(
        search(&mut narrow, 1.0f32, &narrow_confinement, 2),
        Err(SearchError::InvalidTolerance { .. }) | Err(SearchError::NumericConversion)
    ));

    reset_convergence_tolerance();
    assert_eq!(convergence_tolerance(), DEFAULT_CONVERGENCE_TOLERANCE);
}
