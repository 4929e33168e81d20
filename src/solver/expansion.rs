//! Fixed-point solver for the geometric expansion ratio.
//!
//! Given a domain `[x_start, x_end]`, a volume count `N` and a target first
//! interval width `h_1`, the expansion ratio `alpha` satisfies the
//! geometric-series length constraint
//!
//! ```text
//! h_1 * (1 + alpha + ... + alpha^(N-1)) = x_end - x_start
//! ```
//!
//! which rearranges into the fixed-point form `alpha = f(alpha)` with
//!
//! ```text
//! f(alpha) = alpha^N + (1 - K) * alpha + K - 1,    K = (x_end - x_start) / h_1
//! ```

/// Result of an expansion-ratio solve.
///
/// The solver never fails: non-convergence is signalled through
/// [`converged`](Self::converged), which callers must check before using
/// [`alpha`](Self::alpha).
#[derive(Clone, Copy, Debug)]
pub struct ExpansionRatioSolve {
    /// Last iterate of the expansion ratio.
    pub alpha: f64,
    /// Relative change of the last iteration step.
    pub residual: f64,
    /// Number of iterations performed.
    pub iterations: u32,
    /// Whether the tolerance was met before the iteration budget ran out.
    pub converged: bool,
}

/// Fixed-point iteration recovering a geometric expansion ratio.
///
/// # Known Limitation
///
/// The fixed-point map is only locally convergent. Depending on the initial
/// guess and the target width, the iterate can walk away from the desired
/// root or blow up entirely (overflowing to infinity, after which the
/// residual becomes NaN). No bounds checking or clamping is applied; check
/// [`ExpansionRatioSolve::converged`] and sanity-check the returned ratio
/// before use. Contracting targets (`alpha < 1`) need an initial guess below
/// 1.
///
/// # Example
///
/// ```
/// use fvmesh::ExpansionRatioSolver;
///
/// // First-cell width that a ratio of 0.9 would produce on [0, 1] with N = 4
/// let h_first = 1.0 / (1.0 + 0.9 + 0.9f64.powi(2) + 0.9f64.powi(3));
///
/// let solver = ExpansionRatioSolver {
///     initial_guess: 0.95,
///     ..Default::default()
/// };
/// let solve = solver.solve(4, 0.0, 1.0, h_first);
///
/// assert!(solve.converged);
/// assert!((solve.alpha - 0.9).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ExpansionRatioSolver {
    /// Starting value for the iteration.
    pub initial_guess: f64,
    /// Relative-change stopping tolerance.
    pub tolerance: f64,
    /// Iteration budget.
    pub max_iterations: u32,
}

impl Default for ExpansionRatioSolver {
    fn default() -> Self {
        Self {
            initial_guess: 1.05,
            tolerance: 1e-8,
            max_iterations: 200,
        }
    }
}

impl ExpansionRatioSolver {
    /// Solve for the expansion ratio giving first-cell width `h_first` over
    /// `[x_start, x_end]` split into `n_volumes` intervals.
    pub fn solve(
        &self,
        n_volumes: u32,
        x_start: f64,
        x_end: f64,
        h_first: f64,
    ) -> ExpansionRatioSolve {
        // Coefficient of the fixed-point map, computed once.
        let k_coeff = (x_end - x_start) / h_first;
        let n = n_volumes as i32;
        let f = |alpha: f64| alpha.powi(n) + (1.0 - k_coeff) * alpha + k_coeff - 1.0;

        let mut alpha = self.initial_guess;
        let mut residual = self.tolerance + 1.0;
        let mut iterations = 0;

        while iterations < self.max_iterations && residual > self.tolerance {
            let alpha_next = f(alpha);
            residual = (alpha_next - alpha).abs() / alpha.abs();
            alpha = alpha_next;
            iterations += 1;
        }

        ExpansionRatioSolve {
            alpha,
            residual,
            iterations,
            converged: iterations < self.max_iterations,
        }
    }
}
