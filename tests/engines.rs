use std::f64::consts::PI;

use approx::assert_abs_diff_eq;

use heatrod::{CrankNicolson, Grid, GridError, Problem, SineSeries, Solver};

fn first_mode_problem() -> Problem<'static> {
    Problem::new("first mode", 1.0, PI, |x: f64| x.sin()).unwrap()
}

fn parabolic_problem() -> Problem<'static> {
    Problem::new("parabolic", 1.0, PI, |x: f64| x * (PI - x)).unwrap()
}

// u0 = sin(x) on [0, pi] decays as exp(-t) sin(x).
#[test]
fn both_engines_track_the_analytic_first_mode() {
    let xj = Grid::from_steps(0.0, PI, 64).points();
    let tn = Grid::from_steps(0.0, 0.1, 100).points();

    let fd = CrankNicolson::new(first_mode_problem())
        .evaluate(&xj, &tn)
        .unwrap();
    let series = SineSeries::new(first_mode_problem())
        .with_terms(8)
        .evaluate(&xj, &tn)
        .unwrap();

    let last = xj.len() - 1;
    for (n, &t) in tn.iter().enumerate() {
        for (j, &x) in xj.iter().enumerate() {
            let exact = (-t).exp() * x.sin();
            assert_abs_diff_eq!(fd[(n, j)], exact, epsilon = 1e-2);
            if j == 0 || j == last {
                assert_eq!(series[(n, j)], 0.0);
            } else {
                assert_abs_diff_eq!(series[(n, j)], exact, epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn boundary_columns_hold_the_boundary_value() {
    let xj = Grid::from_steps(0.0, PI, 32).points();
    let tn = Grid::from_steps(0.0, 0.5, 50).points();

    let fd = CrankNicolson::new(parabolic_problem())
        .evaluate(&xj, &tn)
        .unwrap();
    let series = SineSeries::new(parabolic_problem())
        .evaluate(&xj, &tn)
        .unwrap();

    let last = xj.len() - 1;
    for n in 0..tn.len() {
        assert_eq!(fd[(n, 0)], 0.0);
        assert_eq!(fd[(n, last)], 0.0);
        assert_eq!(series[(n, 0)], 0.0);
        assert_eq!(series[(n, last)], 0.0);
    }
}

// diffusivity 0.1, length 1, u0 = sin(2 pi x), 8 space points, two time rows
#[test]
fn engines_agree_on_a_coarse_second_mode_pulse() {
    let problem = Problem::new("second mode", 0.1, 1.0, |x: f64| (2.0 * PI * x).sin()).unwrap();

    let xj = Grid::from_steps(0.0, 1.0, 7).points();
    let tn = [0.0, 0.01];

    let fd = CrankNicolson::new(problem.clone()).evaluate(&xj, &tn).unwrap();
    let series = SineSeries::new(problem).evaluate(&xj, &tn).unwrap();

    let last = xj.len() - 1;
    for n in 0..tn.len() {
        assert_abs_diff_eq!(fd[(n, 0)], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fd[(n, last)], 0.0, epsilon = 1e-12);
        assert_eq!(series[(n, 0)], 0.0);
        assert_eq!(series[(n, last)], 0.0);

        for j in 1..last {
            assert_abs_diff_eq!(fd[(n, j)], series[(n, j)], epsilon = 1e-2);
        }
    }
}

#[test]
fn two_point_grids_stay_at_the_boundary_value() {
    let xj = [0.0, PI];
    let tn = Grid::from_steps(0.0, 0.1, 10).points();

    let fd = CrankNicolson::new(first_mode_problem())
        .evaluate(&xj, &tn)
        .unwrap();
    let series = SineSeries::new(first_mode_problem())
        .evaluate(&xj, &tn)
        .unwrap();

    assert_eq!(fd.nrows(), tn.len());
    assert_eq!(fd.ncols(), 2);
    for n in 0..tn.len() {
        for j in 0..2 {
            assert_eq!(fd[(n, j)], 0.0);
            assert_eq!(series[(n, j)], 0.0);
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let xj = Grid::from_steps(0.0, PI, 24).points();
    let tn = Grid::from_steps(0.0, 0.2, 20).points();

    let fd = CrankNicolson::new(parabolic_problem());
    let series = SineSeries::new(parabolic_problem()).with_terms(12);

    let first = fd.evaluate(&xj, &tn).unwrap();
    let second = fd.evaluate(&xj, &tn).unwrap();
    for n in 0..tn.len() {
        for j in 0..xj.len() {
            assert_eq!(first[(n, j)], second[(n, j)]);
        }
    }

    let first = series.evaluate(&xj, &tn).unwrap();
    let second = series.evaluate(&xj, &tn).unwrap();
    for n in 0..tn.len() {
        for j in 0..xj.len() {
            assert_eq!(first[(n, j)], second[(n, j)]);
        }
    }
}

// u0 = x(pi - x) expands with coefficients 8/(pi n^3) over the odd modes.
fn parabolic_reference(x: f64, t: f64) -> f64 {
    (1..200)
        .step_by(2)
        .map(|n| {
            let n = n as f64;
            8.0 / (PI * n * n * n) * (-n * n * t).exp() * (n * x).sin()
        })
        .sum()
}

#[test]
fn more_terms_shrink_the_series_error() {
    let xj = Grid::from_steps(0.0, PI, 40).points();
    let tn = [0.0, 0.02];

    let mut errors = Vec::new();
    for terms in [1, 3, 5, 9] {
        let surface = SineSeries::new(parabolic_problem())
            .with_terms(terms)
            .evaluate(&xj, &tn)
            .unwrap();

        let mut worst: f64 = 0.0;
        for (n, &t) in tn.iter().enumerate() {
            for (j, &x) in xj.iter().enumerate() {
                worst = worst.max((surface[(n, j)] - parabolic_reference(x, t)).abs());
            }
        }
        errors.push(worst);
    }

    for pair in errors.windows(2) {
        assert!(
            pair[1] < pair[0],
            "error should shrink with more terms: {:?}",
            errors
        );
    }
}

#[test]
fn invalid_grids_are_rejected() {
    let fd = CrankNicolson::new(first_mode_problem());
    let series = SineSeries::new(first_mode_problem());

    assert_eq!(
        fd.evaluate(&[0.0], &[0.0, 0.1]).unwrap_err(),
        GridError::TooFewPoints {
            required: 2,
            got: 1
        }
    );
    assert_eq!(
        fd.evaluate(&[0.0, 0.5, 0.7], &[0.0, 0.1]).unwrap_err(),
        GridError::NonUniform { index: 1 }
    );
    assert_eq!(
        series.evaluate(&[0.0, 1.0], &[0.1, 0.0]).unwrap_err(),
        GridError::NotIncreasing { index: 0 }
    );
    assert_eq!(
        series.evaluate(&[0.0, 1.0], &[]).unwrap_err(),
        GridError::TooFewPoints {
            required: 1,
            got: 0
        }
    );
}
