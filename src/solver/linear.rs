//! Iterative solution of the assembled sparse system
//!
//! The constraint matrix is square and nonsymmetric, so the solve uses
//! `BiCGSTAB` over the compressed-row storage. The iteration is
//! deterministic for fixed inputs; numerical breakdown and exhaustion of the
//! iteration cap surface as errors rather than silently wrong results.

use crate::io::configuration::{DEFAULT_SOLVER_MAX_ITERATIONS, SOLVER_TOLERANCE};
use crate::io::error::{ColorizeError, Result, computation_error};
use sprs::CsMat;

/// Convergence settings for a single channel solve
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// Relative residual at which the solve is accepted
    pub tolerance: f64,
    /// Hard cap on iterations before reporting divergence
    pub max_iterations: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: SOLVER_TOLERANCE,
            max_iterations: DEFAULT_SOLVER_MAX_ITERATIONS,
        }
    }
}

/// Solve the square sparse system for the given right-hand side
///
/// An all-zero right-hand side returns the zero vector immediately; it is an
/// exact solution of the homogeneous system.
///
/// # Errors
///
/// Returns an error if:
/// - The matrix is not square or the right-hand side length does not match
/// - A solver step breaks down, which indicates a singular or numerically
///   degenerate system
/// - The relative residual has not reached the tolerance within the
///   iteration cap
pub fn solve(matrix: &CsMat<f64>, rhs: &[f64], options: SolverOptions) -> Result<Vec<f64>> {
    let size = matrix.rows();
    if matrix.cols() != size || rhs.len() != size {
        return Err(computation_error(
            "sparse solve",
            &format!(
                "system shape {}x{} incompatible with rhs length {}",
                matrix.rows(),
                matrix.cols(),
                rhs.len()
            ),
        ));
    }

    let mut solution = vec![0.0; size];
    let rhs_norm = norm(rhs);
    if rhs_norm < f64::MIN_POSITIVE {
        return Ok(solution);
    }

    // With x0 = 0 the initial residual is the right-hand side itself
    let mut residual = rhs.to_vec();
    let shadow = rhs.to_vec();

    let mut rho = 1.0;
    let mut alpha = 1.0;
    let mut omega = 1.0;

    let mut direction = vec![0.0; size];
    let mut a_direction = vec![0.0; size];
    let mut intermediate = vec![0.0; size];
    let mut a_intermediate = vec![0.0; size];

    for _ in 0..options.max_iterations {
        let rho_next = dot(&shadow, &residual);
        if rho_next.abs() < f64::MIN_POSITIVE {
            return Err(ColorizeError::SolverBreakdown {
                operation: "residual correlation",
            });
        }

        let beta = (rho_next / rho) * (alpha / omega);
        for ((p, &r), &v) in direction.iter_mut().zip(&residual).zip(&a_direction) {
            *p = beta.mul_add(omega.mul_add(-v, *p), r);
        }

        mat_vec(matrix, &direction, &mut a_direction);
        let projection = dot(&shadow, &a_direction);
        if projection.abs() < f64::MIN_POSITIVE {
            return Err(ColorizeError::SolverBreakdown {
                operation: "search direction",
            });
        }
        alpha = rho_next / projection;

        for ((s, &r), &v) in intermediate.iter_mut().zip(&residual).zip(&a_direction) {
            *s = alpha.mul_add(-v, r);
        }
        if norm(&intermediate) / rhs_norm <= options.tolerance {
            for (x, &p) in solution.iter_mut().zip(&direction) {
                *x = alpha.mul_add(p, *x);
            }
            return Ok(solution);
        }

        mat_vec(matrix, &intermediate, &mut a_intermediate);
        let stabilizer_norm = dot(&a_intermediate, &a_intermediate);
        if stabilizer_norm < f64::MIN_POSITIVE {
            return Err(ColorizeError::SolverBreakdown {
                operation: "stabilization",
            });
        }
        omega = dot(&a_intermediate, &intermediate) / stabilizer_norm;
        if omega.abs() < f64::MIN_POSITIVE {
            return Err(ColorizeError::SolverBreakdown {
                operation: "stabilization",
            });
        }

        for ((x, &p), &s) in solution.iter_mut().zip(&direction).zip(&intermediate) {
            *x = alpha.mul_add(p, omega.mul_add(s, *x));
        }
        for ((r, &s), &t) in residual
            .iter_mut()
            .zip(&intermediate)
            .zip(&a_intermediate)
        {
            *r = omega.mul_add(-t, s);
        }

        if norm(&residual) / rhs_norm <= options.tolerance {
            return Ok(solution);
        }

        rho = rho_next;
    }

    Err(ColorizeError::SolverDiverged {
        iterations: options.max_iterations,
        residual: norm(&residual) / rhs_norm,
    })
}

// Row-major product over the compressed rows; out-of-range columns read as 0
fn mat_vec(matrix: &CsMat<f64>, vector: &[f64], out: &mut [f64]) {
    for (row, out_value) in out.iter_mut().enumerate() {
        let mut sum = 0.0;
        if let Some(row_view) = matrix.outer_view(row) {
            for (column, &value) in row_view.iter() {
                sum = value.mul_add(vector.get(column).copied().unwrap_or(0.0), sum);
            }
        }
        *out_value = sum;
    }
}

fn dot(left: &[f64], right: &[f64]) -> f64 {
    left.iter().zip(right).map(|(x, y)| x * y).sum()
}

fn norm(vector: &[f64]) -> f64 {
    dot(vector, vector).sqrt()
}
