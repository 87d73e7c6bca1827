//! Property-based tests for the alignment recurrence.
//!
//! Radii are kept large enough that every generated pair fits inside the band,
//! except in the band-starvation property which deliberately shrinks it.

use proptest::prelude::*;

use tempo_dtw::{
    AlignError, Aligner, AlignerConfig, CostGrid, ScalarAligner, Variance, VectorAligner,
};

fn arb_scalar_seq(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-100.0f64..100.0, 1..=max_len)
}

fn arb_frames(dim: usize, max_len: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    proptest::collection::vec(proptest::collection::vec(-10.0f64..10.0, dim), 1..=max_len)
}

fn arb_vector_pair() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<Vec<f64>>, Vec<f64>)> {
    (1usize..5).prop_flat_map(|dim| {
        (
            arb_frames(dim, 12),
            arb_frames(dim, 12),
            proptest::collection::vec(0.1f64..10.0, dim),
        )
    })
}

/// Every filled interior cell equals the cheapest admissible weighted step,
/// and is never cheaper than its cheapest admissible predecessor.
fn assert_grid_is_consistent(grid: &CostGrid, config: &AlignerConfig, local: impl Fn(usize, usize) -> f64) {
    for i in 1..grid.rows() {
        for j in 1..grid.cols() {
            if !grid.is_filled(i, j) {
                continue;
            }
            let c = local(i, j);
            let mut best = f64::INFINITY;
            let mut best_pred = f64::INFINITY;
            for step in &config.steps() {
                if !step.admits(i, j) {
                    continue;
                }
                let (pi, pj) = step.predecessor(i, j);
                let pred = grid.get(pi, pj);
                best_pred = best_pred.min(pred);
                best = best.min(pred + step.weight() * c);
            }
            let value = grid.get(i, j);
            assert_eq!(value, best, "cell ({i}, {j})");
            assert!(value >= best_pred, "cell ({i}, {j}) cheaper than its predecessors");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn scalar_identity(seq in arb_scalar_seq(30)) {
        let a = ScalarAligner::new(seq.clone(), seq).unwrap();
        prop_assert_eq!(a.distance().unwrap().value(), 0.0);
    }

    #[test]
    fn vector_identity(frames in arb_frames(3, 30)) {
        let a = VectorAligner::new(frames.clone(), frames).unwrap();
        prop_assert_eq!(a.distance().unwrap().value(), 0.0);
    }

    #[test]
    fn scalar_is_deterministic(a in arb_scalar_seq(20), b in arb_scalar_seq(20)) {
        let first = ScalarAligner::new(a.clone(), b.clone()).unwrap().with_radius(64);
        let second = ScalarAligner::new(a, b).unwrap().with_radius(64);
        let d1 = first.distance().unwrap().value();
        prop_assert_eq!(d1.to_bits(), first.distance().unwrap().value().to_bits());
        prop_assert_eq!(d1.to_bits(), second.distance().unwrap().value().to_bits());
    }

    #[test]
    fn scalar_distance_is_finite_and_non_negative(a in arb_scalar_seq(20), b in arb_scalar_seq(20)) {
        let d = ScalarAligner::new(a, b).unwrap().with_radius(64).distance().unwrap().value();
        prop_assert!(d.is_finite());
        prop_assert!(d >= 0.0);
    }

    #[test]
    fn scalar_single_elements_give_absolute_difference(x in -1e6f64..1e6, y in -1e6f64..1e6) {
        let d = ScalarAligner::new(vec![x], vec![y]).unwrap().distance().unwrap().value();
        prop_assert_eq!(d, (x - y).abs());
    }

    #[test]
    fn vector_single_frames_give_weighted_norm((test, reference, var) in arb_vector_pair()) {
        let (x, y) = (test[0].clone(), reference[0].clone());
        let expected: f64 = x
            .iter()
            .zip(&y)
            .zip(&var)
            .map(|((a, b), v)| (a - b).powi(2) / v)
            .sum::<f64>()
            .sqrt();
        let a = VectorAligner::with_variance(vec![x], vec![y], Variance::new(var).unwrap()).unwrap();
        prop_assert!((a.raw_cost().unwrap() - expected).abs() < 1e-9);
        prop_assert!((a.distance().unwrap().value() - expected / 2.0).abs() < 1e-9);
    }

    #[test]
    fn vector_distance_is_raw_cost_over_total_length((test, reference, var) in arb_vector_pair()) {
        let total_len = (test.len() + reference.len()) as f64;
        let a = VectorAligner::with_variance(test, reference, Variance::new(var).unwrap()).unwrap();
        let raw = a.raw_cost().unwrap();
        let d = a.distance().unwrap().value();
        prop_assert!((d * total_len - raw).abs() <= 1e-9 * raw.max(1.0));
    }

    #[test]
    fn scalar_grid_is_consistent(a in arb_scalar_seq(15), b in arb_scalar_seq(15), radius in 0usize..32) {
        let aligner = ScalarAligner::new(a.clone(), b.clone()).unwrap().with_radius(radius);
        let grid = aligner.cost_grid().unwrap();
        assert_grid_is_consistent(&grid, aligner.config(), |i, j| (a[i] - b[j]).abs());
    }

    #[test]
    fn vector_grid_is_consistent((test, reference, var) in arb_vector_pair(), radius in 0usize..16) {
        let variance = Variance::new(var.clone()).unwrap();
        let aligner = VectorAligner::with_variance(test.clone(), reference.clone(), variance)
            .unwrap()
            .with_radius(radius);
        let grid = aligner.cost_grid().unwrap();
        let local = |i: usize, j: usize| -> f64 {
            test[i]
                .iter()
                .zip(&reference[j])
                .zip(&var)
                .map(|((a, b), v)| (a - b).powi(2) / v)
                .sum::<f64>()
                .sqrt()
        };
        assert_grid_is_consistent(&grid, aligner.config(), local);
    }

    #[test]
    fn starved_band_is_an_error_not_a_distance(a in arb_scalar_seq(15), b in arb_scalar_seq(15), radius in 0usize..6) {
        let aligner = ScalarAligner::new(a, b).unwrap().with_radius(radius);
        let grid = aligner.cost_grid().unwrap();
        match aligner.distance() {
            Ok(d) => {
                prop_assert!(d.value().is_finite());
                prop_assert_eq!(Some(d.value()), grid.final_cost());
            }
            Err(AlignError::BandStarvation { .. }) => prop_assert!(!grid.is_filled(grid.rows() - 1, grid.cols() - 1)),
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }
}
