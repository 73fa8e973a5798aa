use approx::assert_relative_eq;

use riesz_core::{DegenerateError, Exponent, Geometry, Line, OrderingError, ParetoFront, energy};

use super::{Action, Error, Event, minimize, minimize_unobserved};

/// Points from the 1-D reference example.
const SPREAD: [f64; 10] = [0.0, 0.1, 0.2, 0.4, 2.0, 4.0, 7.0, 8.1, 8.2, 9.0];

fn s(value: f64) -> Exponent {
    Exponent::new(value).unwrap()
}

/// A line that skips ordering checks, so solvers can meet coincident points.
struct Unchecked<'a>(&'a [f64]);

impl Geometry for Unchecked<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn distance(&self, i: usize, j: usize) -> f64 {
        (self.0[j] - self.0[i]).abs()
    }

    fn validate(&self) -> Result<(), OrderingError> {
        Ok(())
    }
}

#[test]
fn picks_the_farthest_pair() {
    let xs = [0.0, 1.0, 3.0, 7.0];

    let solution = minimize_unobserved(&Line::new(&xs), 2, s(1.0)).expect("should solve");

    assert_eq!(solution.subset.as_slice(), &[0, 3]);
    assert_relative_eq!(solution.energy, 1.0 / 7.0);
    // Every pair is one extension from a singleton.
    assert_eq!(solution.transitions, 6);
}

#[test]
fn matches_reference_selection() {
    let line = Line::new(&SPREAD);

    let solution = minimize_unobserved(&line, 7, s(1.0)).expect("should solve");

    assert_eq!(solution.subset.as_slice(), &[0, 3, 4, 5, 6, 7, 9]);
    assert_relative_eq!(solution.energy, 9.232_096_534_668_607, max_relative = 1e-12);
}

#[test]
fn selections_for_every_size() {
    let line = Line::new(&SPREAD);
    let expected: [&[usize]; 6] = [
        &[0],
        &[0, 9],
        &[0, 5, 9],
        &[0, 5, 6, 9],
        &[0, 4, 5, 6, 9],
        &[0, 4, 5, 6, 7, 9],
    ];

    for (size, ranks) in (1..).zip(expected) {
        let solution = minimize_unobserved(&line, size, s(1.0)).expect("should solve");
        assert_eq!(solution.subset.as_slice(), ranks, "k = {size}");
    }
}

#[test]
fn larger_exponents_keep_the_spread() {
    let line = Line::new(&SPREAD);

    let solution = minimize_unobserved(&line, 5, s(2.0)).expect("should solve");

    assert_eq!(solution.subset.as_slice(), &[0, 4, 5, 6, 9]);
    assert_relative_eq!(solution.energy, 1.056_773_116_654_069_3, max_relative = 1e-12);
}

#[test]
fn single_point_has_zero_energy() {
    for xs in [&[3.0][..], &SPREAD[..]] {
        let solution = minimize_unobserved(&Line::new(xs), 1, s(1.5)).expect("should solve");

        assert_eq!(solution.subset.as_slice(), &[0]);
        assert_eq!(solution.energy, 0.0);
        assert_eq!(solution.transitions, 0);
    }
}

#[test]
fn full_selection_matches_evaluator() {
    let line = Line::new(&SPREAD);
    let all: Vec<usize> = (0..SPREAD.len()).collect();

    let solution = minimize_unobserved(&line, SPREAD.len(), s(1.0)).expect("should solve");

    assert_eq!(solution.subset.as_slice(), all.as_slice());
    assert_eq!(solution.energy, energy(&line, &all, s(1.0)).unwrap());
    assert_relative_eq!(solution.energy, 57.917_765_948_468_8, max_relative = 1e-12);
}

#[test]
fn energy_grows_with_subset_size() {
    let line = Line::new(&SPREAD);

    for exponent in [0.5, 1.0, 2.0] {
        let energies: Vec<f64> = (1..=SPREAD.len())
            .map(|k| minimize_unobserved(&line, k, s(exponent)).unwrap().energy)
            .collect();

        assert!(
            energies.windows(2).all(|pair| pair[0] <= pair[1]),
            "s = {exponent}: {energies:?}"
        );
    }
}

#[test]
fn scaling_rescales_energy_and_keeps_selection() {
    let line = Line::new(&SPREAD);
    let factor: f64 = 2.5;
    let scaled: Vec<f64> = SPREAD.iter().map(|x| x * factor).collect();
    let scaled_line = Line::new(&scaled);

    for exponent in [1.0, 2.0] {
        for k in 1..=SPREAD.len() {
            let original = minimize_unobserved(&line, k, s(exponent)).unwrap();
            let rescaled = minimize_unobserved(&scaled_line, k, s(exponent)).unwrap();

            assert_eq!(rescaled.subset, original.subset, "k = {k}, s = {exponent}");
            assert_relative_eq!(
                rescaled.energy,
                original.energy * factor.powf(-exponent),
                max_relative = 1e-12
            );
        }
    }
}

#[test]
fn ties_prefer_smaller_predecessor() {
    // {0, 1, 3} and {0, 2, 3} are mirror images with identical energy.
    let xs = [0.0, 1.0, 3.0, 4.0];

    let solution = minimize_unobserved(&Line::new(&xs), 3, s(1.0)).expect("should solve");

    assert_eq!(solution.subset.as_slice(), &[0, 1, 3]);
    assert_relative_eq!(solution.energy, 1.0 + 0.25 + 1.0 / 3.0, max_relative = 1e-12);
}

#[test]
fn solves_pareto_fronts() {
    let points = [
        [1.0, 15.0],
        [5.0, 10.0],
        [8.0, 4.0],
        [13.0, 3.0],
        [15.0, 2.0],
        [17.0, 1.0],
    ];
    let front = ParetoFront::new(&points);

    let solution = minimize_unobserved(&front, 3, s(1.0)).expect("should solve");

    assert_eq!(solution.subset.as_slice(), &[0, 2, 5]);
    assert_relative_eq!(solution.energy, 0.229_141_797_642_862_85, max_relative = 1e-12);
}

#[test]
fn rejects_unordered_sequence() {
    let xs = [0.0, 2.0, 1.0, 3.0];

    let result = minimize_unobserved(&Line::new(&xs), 2, s(1.0));

    assert_eq!(
        result,
        Err(Error::InvalidOrdering(OrderingError::NotIncreasing {
            rank: 2
        }))
    );
}

#[test]
fn rejects_dominated_pareto_point() {
    let points = [[0.0, 5.0], [1.0, 6.0]];

    let result = minimize_unobserved(&ParetoFront::new(&points), 1, s(1.0));

    assert!(matches!(result, Err(Error::InvalidOrdering(_))));
}

#[test]
fn rejects_infeasible_sizes() {
    let xs = [0.0, 1.0, 2.0];
    let line = Line::new(&xs);

    assert_eq!(
        minimize_unobserved(&line, 0, s(1.0)),
        Err(Error::InfeasibleSelection { k: 0, n: 3 })
    );
    assert_eq!(
        minimize_unobserved(&line, 4, s(1.0)),
        Err(Error::InfeasibleSelection { k: 4, n: 3 })
    );
    assert_eq!(
        minimize_unobserved(&Line::new(&[]), 1, s(1.0)),
        Err(Error::InfeasibleSelection { k: 1, n: 0 })
    );
}

#[test]
fn overflowing_layers_are_an_error() {
    let xs = [0.0, 0.1, 0.2];

    // 0.1^400 underflows, so only the outer pair has finite energy.
    let line = Line::new(&xs);
    let pair = minimize_unobserved(&line, 2, s(400.0)).expect("should solve");
    assert_eq!(pair.subset.as_slice(), &[0, 2]);

    let result = minimize_unobserved(&line, 3, s(400.0));
    assert_eq!(result, Err(Error::NoFiniteSelection { size: 3 }));
}

#[test]
fn wide_lines_are_not_degenerate() {
    // The outer pair is 2e308 apart, which overflows to infinity.
    let xs = [-1e308, 0.0, 1e308];
    let line = Line::new(&xs);

    let pair = minimize_unobserved(&line, 2, s(1.0)).expect("should solve");
    assert_eq!(pair.subset.as_slice(), &[0, 2]);
    assert_eq!(pair.energy, 0.0);

    let all = minimize_unobserved(&line, 3, s(1.0)).expect("should solve");
    assert_eq!(all.subset.as_slice(), &[0, 1, 2]);
    assert!(all.energy > 0.0 && all.energy < 1e-307);
}

#[test]
fn coincident_points_are_degenerate() {
    let xs = [0.0, 1.0, 1.0, 3.0];

    let result = minimize_unobserved(&Unchecked(&xs), 2, s(1.0));

    assert_eq!(
        result,
        Err(Error::DegenerateSequence(DegenerateError {
            i: 1,
            j: 2,
            distance: 0.0
        }))
    );
}

#[test]
fn observer_sees_every_layer() {
    let line = Line::new(&SPREAD);
    let mut events = Vec::new();

    let observer = |event: &Event| {
        events.push(*event);
        None::<Action>
    };
    let solution = minimize(&line, 4, s(1.0), observer).expect("should solve");

    let sizes: Vec<usize> = events.iter().map(|event| event.size).collect();
    assert_eq!(sizes, vec![1, 2, 3, 4]);
    assert!(events.iter().all(|event| event.target == 4));
    assert!(events[3].is_last());

    // The last layer's cheapest cell is the answer.
    assert_eq!(events[3].best_last, 9);
    assert_relative_eq!(events[3].best_energy, solution.energy, max_relative = 1e-12);
    assert_eq!(events[0].best_energy, 0.0);
}

#[test]
fn observer_can_stop_early() {
    let line = Line::new(&SPREAD);
    let mut calls = 0;

    let observer = |event: &Event| {
        calls += 1;
        (event.size == 2).then_some(Action::StopEarly)
    };
    let result = minimize(&line, 5, s(1.0), observer);

    assert_eq!(result, Err(Error::StoppedByObserver { size: 2 }));
    assert_eq!(calls, 2);
}
