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

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sextant_core::math::{interval::ClosedInterval, window::Window};
use sextant_search::{
    EventSearch, config::SearchConfigBuilder, monitor::no_op::NoOpMonitor,
    predicate::ConditionFn,
};

const TOL: f64 = 1e-6;
const HORIZON: f64 = 1000.0;

/// Random disjoint pulses in `[5, HORIZON - 5]`, each at least 2 wide and at
/// least 2 apart, so a unit step never misses one.
fn pulse_train(seed: u64) -> Vec<ClosedInterval<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pulses = Vec::new();
    let mut cursor = 5.0;
    loop {
        let start = cursor + rng.gen_range(2.0..40.0);
        let end = start + rng.gen_range(2.0..40.0);
        if end > HORIZON - 5.0 {
            break;
        }
        pulses.push(ClosedInterval::new(start, end));
        cursor = end;
    }
    pulses
}

/// Random confinement window over `[0, HORIZON]`.
fn random_confinement(seed: u64) -> Window<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut window = Window::new();
    let mut cursor = 0.0;
    while cursor < HORIZON {
        let end = (cursor + rng.gen_range(1.0..120.0)).min(HORIZON);
        window.insert(ClosedInterval::new(cursor, end)).unwrap();
        cursor = end + rng.gen_range(0.5..60.0);
    }
    window
}

fn run(pulses: &[ClosedInterval<f64>], confinement: &Window<f64>) -> Window<f64> {
    let mut condition = ConditionFn::new(|t: f64| pulses.iter().any(|p| p.contains_point(t)));
    let config = SearchConfigBuilder::new(1.0).tolerance(TOL).build().unwrap();
    let mut result = Window::new();
    EventSearch::new(config)
        .run(&mut condition, confinement, &mut result, &mut NoOpMonitor::new())
        .unwrap();
    result
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32, .. ProptestConfig::default()
    })]

    #[test]
    fn pulses_are_found_within_tolerance(seed in any::<u64>()) {
        let pulses = pulse_train(seed);
        let result = run(&pulses, &Window::from_interval(ClosedInterval::new(0.0, HORIZON)));

        prop_assert!(result.check_valid().is_ok());
        prop_assert_eq!(result.cardinality(), pulses.len());
        for (found, pulse) in result.iter().zip(&pulses) {
            prop_assert!(found.start() >= pulse.start() && found.start() - pulse.start() <= TOL,
                "onset {} vs {}", found.start(), pulse.start());
            prop_assert!(found.end() <= pulse.end() && pulse.end() - found.end() <= TOL,
                "offset {} vs {}", found.end(), pulse.end());
        }
    }

    #[test]
    fn results_stay_inside_confinement(seed in any::<u64>(), confinement_seed in any::<u64>()) {
        let pulses = pulse_train(seed);
        let confinement = random_confinement(confinement_seed);
        let result = run(&pulses, &confinement);

        prop_assert!(result.check_valid().is_ok());
        for found in &result {
            prop_assert!(confinement.includes_interval(found), "{} escapes confinement", found);
        }
    }

    #[test]
    fn search_is_deterministic_and_idempotent(seed in any::<u64>()) {
        let pulses = pulse_train(seed);
        let confinement = Window::from_interval(ClosedInterval::new(0.0, HORIZON));

        let first = run(&pulses, &confinement);
        let second = run(&pulses, &confinement);
        let bits = |w: &Window<f64>| w.endpoints().iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(bits(&first), bits(&second));

        let again = run(&pulses, &first);
        prop_assert_eq!(again, first);
    }
}
