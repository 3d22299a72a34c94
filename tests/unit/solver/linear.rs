//! Tests for the iterative sparse solver

use chromafill::ColorizeError;
use chromafill::solver::linear::{SolverOptions, solve};
use sprs::{CsMat, TriMat};

fn csr_from(triplets: &[(usize, usize, f64)], size: usize) -> CsMat<f64> {
    let mut builder = TriMat::new((size, size));
    for &(row, column, value) in triplets {
        builder.add_triplet(row, column, value);
    }
    builder.to_csr()
}

#[test]
fn test_identity_solve_returns_rhs() {
    let matrix = csr_from(&[(0, 0, 1.0), (1, 1, 1.0), (2, 2, 1.0)], 3);
    let rhs = [0.3, -0.2, 0.9];

    let solution = solve(&matrix, &rhs, SolverOptions::default()).unwrap();

    for (solved, expected) in solution.iter().zip(&rhs) {
        assert!((solved - expected).abs() < 1e-10);
    }
}

#[test]
fn test_small_nonsymmetric_system() {
    // [[2, 1], [1, 3]] x = [4, 7] has the solution [1, 2]
    let matrix = csr_from(&[(0, 0, 2.0), (0, 1, 1.0), (1, 0, 1.0), (1, 1, 3.0)], 2);

    let solution = solve(&matrix, &[4.0, 7.0], SolverOptions::default()).unwrap();

    assert!((solution[0] - 1.0).abs() < 1e-8);
    assert!((solution[1] - 2.0).abs() < 1e-8);
}

#[test]
fn test_smoothness_style_system() {
    // A 1D colorization-shaped system: ends pinned, middle averages its
    // neighbors; the solution interpolates linearly
    let matrix = csr_from(
        &[
            (0, 0, 1.0),
            (1, 0, -0.5),
            (1, 1, 1.0),
            (1, 2, -0.5),
            (2, 2, 1.0),
        ],
        3,
    );

    let solution = solve(&matrix, &[0.4, 0.0, -0.4], SolverOptions::default()).unwrap();

    assert!((solution[0] - 0.4).abs() < 1e-9);
    assert!(solution[1].abs() < 1e-9);
    assert!((solution[2] + 0.4).abs() < 1e-9);
}

#[test]
fn test_zero_rhs_returns_zero_vector() {
    // Homogeneous smoothness-only system: the zero vector is exact even
    // though the matrix itself is singular
    let matrix = csr_from(&[(0, 0, 1.0), (0, 1, -1.0), (1, 0, -1.0), (1, 1, 1.0)], 2);

    let solution = solve(&matrix, &[0.0, 0.0], SolverOptions::default()).unwrap();
    assert_eq!(solution, vec![0.0, 0.0]);
}

#[test]
fn test_inconsistent_system_is_reported() {
    // Both rows constrain the same unknown to different values
    let matrix = csr_from(&[(0, 0, 1.0), (1, 0, 1.0)], 2);
    let options = SolverOptions {
        tolerance: 1e-12,
        max_iterations: 50,
    };

    let result = solve(&matrix, &[1.0, 2.0], options);
    assert!(result.is_err());
}

#[test]
fn test_mismatched_rhs_is_rejected() {
    let matrix = csr_from(&[(0, 0, 1.0), (1, 1, 1.0)], 2);

    let result = solve(&matrix, &[1.0, 2.0, 3.0], SolverOptions::default());
    assert!(matches!(result, Err(ColorizeError::Computation { .. })));
}
