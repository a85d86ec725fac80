use std::io::{self, Write};

use tracing::info;

use heatrod::{faer_add::write_mat_to_buffer, CrankNicolson, Grid, Problem, SineSeries, Solver};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();

    info!("setting up problem");

    // pure first eigenmode on a rod of length pi
    let problem = Problem::new("first mode", 1.0, std::f64::consts::PI, |x: f64| x.sin())
        .expect("diffusivity and length are positive");

    let xj = Grid::from_steps(0.0, problem.length(), 200).points();
    let tn = Grid::from_steps(0.0, 1.0, 100).points();

    let solver = CrankNicolson::new(problem.clone());
    info!("solving `{}` with the {} engine", problem.name(), solver.name());
    let surface = solver.evaluate(&xj, &tn).expect("grids are uniform");

    let output = std::fs::File::create("first_mode_fd.csv")?;
    let mut output = io::BufWriter::new(output);
    write_mat_to_buffer(&surface, &mut output)?;
    output.flush()?;

    let solver = SineSeries::new(problem.clone()).with_terms(16);
    info!("solving `{}` with the {} engine", problem.name(), solver.name());
    let surface = solver.evaluate(&xj, &tn).expect("grids are uniform");

    let output = std::fs::File::create("first_mode_series.csv")?;
    let mut output = io::BufWriter::new(output);
    write_mat_to_buffer(&surface, &mut output)?;
    output.flush()?;

    info!("done");

    Ok(())
}
