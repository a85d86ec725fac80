use faer::Mat;
use faer_core::{mul::matmul, Parallelism};

use crate::{
    grid::GridError,
    problem::Problem,
    solver::{check_grids, Solver},
    Float,
};

/// Finite-difference engine: Crank-Nicolson time marching over the interior
/// points of the space grid.
///
/// Each evaluation builds the implicit and explicit operators for the
/// requested grids, factorizes the implicit one once, and reuses that
/// factorization for every time step.
pub struct CrankNicolson<'pb> {
    problem: Problem<'pb>,
}

impl<'pb> CrankNicolson<'pb> {
    pub fn new(problem: Problem<'pb>) -> Self {
        Self { problem }
    }

    pub fn problem(&self) -> &Problem<'pb> {
        &self.problem
    }
}

// Second-difference operator over the interior points: -2 on the diagonal,
// 1 on both off-diagonals.
fn second_difference(m: usize) -> Mat<Float> {
    Mat::from_fn(m, m, |i, j| {
        if i == j {
            -2.0
        } else if i.abs_diff(j) == 1 {
            1.0
        } else {
            0.0
        }
    })
}

// Forward-sweep factors of the implicit operator `I - (r/2) D`, computed once
// and reused by every solve (Thomas algorithm on a banded matrix). The
// operator is strictly diagonally dominant for every `r > 0`, so no pivoting
// is needed.
struct TridiagFactors {
    off: Float,
    c_prime: Vec<Float>,
    pivot: Vec<Float>,
}

impl TridiagFactors {
    // bands of `I - (r/2) D`: `1 + r` on the diagonal, `-r/2` off it
    fn new(m: usize, r: Float) -> Self {
        let diag = 1.0 + r;
        let off = -0.5 * r;

        let mut c_prime = vec![0.0; m];
        let mut pivot = vec![0.0; m];

        pivot[0] = diag;
        c_prime[0] = off / diag;
        for i in 1..m {
            pivot[i] = diag - off * c_prime[i - 1];
            c_prime[i] = off / pivot[i];
        }

        Self {
            off,
            c_prime,
            pivot,
        }
    }

    // Overwrites the column `d` with the solution of `(I - (r/2) D) x = d`.
    fn solve_in_place(&self, d: &mut Mat<Float>) {
        let m = self.pivot.len();

        d[(0, 0)] /= self.pivot[0];
        for i in 1..m {
            d[(i, 0)] = (d[(i, 0)] - self.off * d[(i - 1, 0)]) / self.pivot[i];
        }
        for i in (0..m - 1).rev() {
            d[(i, 0)] = d[(i, 0)] - self.c_prime[i] * d[(i + 1, 0)];
        }
    }
}

impl Solver for CrankNicolson<'_> {
    fn evaluate(&self, x_grid: &[Float], t_grid: &[Float]) -> Result<Mat<Float>, GridError> {
        let (dx, dt) = check_grids(x_grid, t_grid)?;

        let mut sol = Mat::<Float>::zeros(t_grid.len(), x_grid.len());

        // Interior point count. A two-point grid has none: every row stays at
        // the boundary value and the linear algebra below is skipped.
        let m = x_grid.len() - 2;
        if m == 0 {
            return Ok(sol);
        }

        for (j, &x) in x_grid.iter().enumerate() {
            sol[(0, j)] = (self.problem.u0)(x);
        }

        let Some(dt) = dt else {
            // single time sample, nothing to march
            return Ok(sol);
        };

        // The recurrence `(I - (r/2) D) u_{n+1} = (I + (r/2) D) u_n`. Both
        // operators depend only on `r`, which is constant across steps on a
        // uniform grid.
        let r = self.problem.kappa * dt / (dx * dx);
        let d = second_difference(m);
        let rhs = Mat::from_fn(m, m, |i, j| {
            let eye = if i == j { 1.0 } else { 0.0 };
            eye + 0.5 * r * d[(i, j)]
        });
        let factors = TridiagFactors::new(m, r);

        tracing::event!(
            tracing::Level::DEBUG,
            "marching `{}`: Δx={:e} ({} interior points), Δt={:e} ({} steps), r={:e}",
            self.problem.name,
            dx,
            m,
            dt,
            t_grid.len() - 1,
            r,
        );

        let mut unj = Mat::from_fn(m, 1, |i, _| sol[(0, i + 1)]);
        let mut temp = Mat::<Float>::zeros(m, 1);

        for n in 1..t_grid.len() {
            matmul(
                temp.as_mut(),
                rhs.as_ref(),
                unj.as_ref(),
                None,
                1.0,
                Parallelism::None,
            );
            factors.solve_in_place(&mut temp);
            std::mem::swap(&mut unj, &mut temp);

            for i in 0..m {
                sol[(n, i + 1)] = unj[(i, 0)];
            }

            tracing::event!(tracing::Level::TRACE, "step {}", n);
        }

        Ok(sol)
    }

    fn name(&self) -> &'static str {
        "Crank-Nicolson"
    }
}
