use faer::Mat;

use crate::{
    grid::{self, GridError},
    Float,
};

/// Common contract of the two solution engines: answer `u(x, t)` over a
/// caller-supplied space/time grid.
///
/// The returned surface is indexed `(time row, space column)`. Row 0 holds
/// the initial state and the first and last column of every row hold the
/// zero boundary value.
pub trait Solver {
    /// Computes the solution surface over `x_grid` and `t_grid`.
    ///
    /// Both grids must be strictly increasing and uniformly spaced, with at
    /// least two space points and one time point. `t_grid[0]` is taken as
    /// the initial time.
    fn evaluate(&self, x_grid: &[Float], t_grid: &[Float]) -> Result<Mat<Float>, GridError>;

    fn name(&self) -> &'static str {
        "Unspecified"
    }
}

// Validates both grids up front and hands back the space step together with
// the time step, if there is more than one time sample.
pub(crate) fn check_grids(
    x_grid: &[Float],
    t_grid: &[Float],
) -> Result<(Float, Option<Float>), GridError> {
    let dx = grid::uniform_step(x_grid)?;

    let dt = match t_grid.len() {
        0 => {
            return Err(GridError::TooFewPoints {
                required: 1,
                got: 0,
            })
        }
        1 => None,
        _ => Some(grid::uniform_step(t_grid)?),
    };

    Ok((dx, dt))
}
