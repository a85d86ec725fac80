use std::f64::consts::PI;

use faer::Mat;
use faer_core::{mul::matmul, Parallelism};

use crate::{
    grid::GridError,
    problem::Problem,
    quadrature,
    solver::{check_grids, Solver},
    Float,
};

/// Default number of Fourier modes kept in the truncated series.
pub const DEFAULT_TERMS: usize = 50;

/// Default sample count handed to the quadrature rule per coefficient.
pub const DEFAULT_QUADRATURE_POINTS: usize = 201;

/// Series engine: truncated Fourier sine expansion of the initial condition,
/// each mode decaying at its own exponential rate.
///
/// The coefficient table is computed once per configuration and never
/// mutated afterwards. More terms track rough initial conditions better at a
/// linear cost increase; the higher modes decay fastest, so the truncation
/// error shrinks rapidly for `t > 0`.
pub struct SineSeries<'pb> {
    problem: Problem<'pb>,
    terms: usize,
    quadrature_points: usize,
    coefficients: Vec<Float>,
}

impl<'pb> SineSeries<'pb> {
    pub fn new(problem: Problem<'pb>) -> Self {
        let mut solver = Self {
            problem,
            terms: DEFAULT_TERMS,
            quadrature_points: DEFAULT_QUADRATURE_POINTS,
            coefficients: Vec::new(),
        };
        solver.compute_coefficients();
        solver
    }

    /// Keeps `terms` modes instead of the default, recomputing the
    /// coefficient table.
    pub fn with_terms(mut self, terms: usize) -> Self {
        self.terms = terms.max(1);
        self.compute_coefficients();
        self
    }

    /// Samples each coefficient integrand at `points` points instead of the
    /// default, recomputing the coefficient table.
    pub fn with_quadrature_points(mut self, points: usize) -> Self {
        self.quadrature_points = points;
        self.compute_coefficients();
        self
    }

    pub fn problem(&self) -> &Problem<'pb> {
        &self.problem
    }

    pub fn coefficients(&self) -> &[Float] {
        &self.coefficients
    }

    // A_n = (2/L) \int_0^L u0(x) sin(n pi x / L) dx
    fn compute_coefficients(&mut self) {
        let length = self.problem.length;
        let u0 = std::rc::Rc::clone(&self.problem.u0);
        let points = self.quadrature_points;

        self.coefficients = (1..=self.terms)
            .map(|n| {
                let omega = n as Float * PI / length;
                let integral =
                    quadrature::simpson(|x| u0(x) * (omega * x).sin(), 0.0, length, points);
                2.0 / length * integral
            })
            .collect();

        tracing::event!(
            tracing::Level::DEBUG,
            "computed {} sine coefficients for `{}` ({} quadrature points each)",
            self.terms,
            self.problem.name,
            self.quadrature_points,
        );
    }
}

impl Solver for SineSeries<'_> {
    fn evaluate(&self, x_grid: &[Float], t_grid: &[Float]) -> Result<Mat<Float>, GridError> {
        check_grids(x_grid, t_grid)?;

        let kappa = self.problem.kappa;
        let length = self.problem.length;

        // (time x mode) decay weights with the coefficients folded in
        let decay = Mat::from_fn(t_grid.len(), self.terms, |i, n| {
            let omega = (n + 1) as Float * PI / length;
            self.coefficients[n] * (-kappa * omega * omega * t_grid[i]).exp()
        });

        // (mode x space) sine basis; the boundary columns are pinned to the
        // zero boundary value rather than evaluated
        let last = x_grid.len() - 1;
        let basis = Mat::from_fn(self.terms, x_grid.len(), |n, j| {
            if j == 0 || j == last {
                0.0
            } else {
                ((n + 1) as Float * PI * x_grid[j] / length).sin()
            }
        });

        let mut sol = Mat::<Float>::zeros(t_grid.len(), x_grid.len());
        matmul(
            sol.as_mut(),
            decay.as_ref(),
            basis.as_ref(),
            None,
            1.0,
            Parallelism::None,
        );

        Ok(sol)
    }

    fn name(&self) -> &'static str {
        "Fourier sine series"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn first_eigenmode_has_a_pure_coefficient_table() {
        let problem = Problem::new("first mode", 1.0, PI, |x: Float| x.sin()).unwrap();
        let solver = SineSeries::new(problem).with_terms(6);

        let coefficients = solver.coefficients();
        assert_abs_diff_eq!(coefficients[0], 1.0, epsilon = 1e-8);
        for &a in &coefficients[1..] {
            assert_abs_diff_eq!(a, 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn term_count_is_at_least_one() {
        let problem = Problem::new("first mode", 1.0, PI, |x: Float| x.sin()).unwrap();
        let solver = SineSeries::new(problem).with_terms(0);

        assert_eq!(solver.coefficients().len(), 1);
    }
}
