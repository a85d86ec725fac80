use tracing::info;

use heatrod::{CrankNicolson, Grid, Problem, SineSeries, Solver};

fn main() {
    tracing_subscriber::fmt::init();

    let problem = Problem::new("second mode pulse", 0.1, 1.0, |x: f64| {
        (2.0 * std::f64::consts::PI * x).sin()
    })
    .expect("diffusivity and length are positive");

    let xj = Grid::from_steps(0.0, problem.length(), 64).points();
    let tn = Grid::from_steps(0.0, 0.25, 250).points();

    let fd = CrankNicolson::new(problem.clone());
    let series = SineSeries::new(problem).with_terms(32);

    let a = fd.evaluate(&xj, &tn).expect("grids are uniform");
    let b = series.evaluate(&xj, &tn).expect("grids are uniform");

    let mut max_deviation: f64 = 0.0;
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            max_deviation = max_deviation.max((a[(i, j)] - b[(i, j)]).abs());
        }
    }

    info!(
        "problem `{}`: max deviation between `{}` and `{}` surfaces: {:e}",
        fd.problem().name(),
        fd.name(),
        series.name(),
        max_deviation
    );
}
