use crate::Float;
use thiserror::Error;

/// Ways a caller-supplied grid can violate the evaluation contract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid needs at least {required} points, got {got}")]
    TooFewPoints { required: usize, got: usize },
    #[error("grid points must be strictly increasing (violated at index {index})")]
    NotIncreasing { index: usize },
    #[error("grid spacing must be uniform (violated at index {index})")]
    NonUniform { index: usize },
}

// Relative slack when comparing consecutive spacings.
const SPACING_TOLERANCE: Float = 1e-9;

/// Checks that `points` is a strictly increasing, uniformly spaced grid and
/// returns its step size.
pub fn uniform_step(points: &[Float]) -> Result<Float, GridError> {
    if points.len() < 2 {
        return Err(GridError::TooFewPoints {
            required: 2,
            got: points.len(),
        });
    }

    let step = points[1] - points[0];
    for (index, pair) in points.windows(2).enumerate() {
        let delta = pair[1] - pair[0];
        if !(delta > 0.0) {
            return Err(GridError::NotIncreasing { index });
        }
        if (delta - step).abs() > SPACING_TOLERANCE * step {
            return Err(GridError::NonUniform { index });
        }
    }

    Ok(step)
}

// grid[0] <-> lower
// grid[i] <-> lower + i * step_size forall i
// grid[steps] <-> upper
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    lower: Float,
    upper: Float,
    steps: usize,
    step_size: Float,
}

impl Grid {
    pub fn from_steps(lower: Float, upper: Float, steps: usize) -> Self {
        let step_size = (upper - lower) / steps as Float;
        Grid {
            lower,
            upper,
            steps,
            step_size,
        }
    }

    pub fn from_step_size(lower: Float, upper: Float, step_size: Float) -> Self {
        let steps = (upper - lower) / step_size;
        Self::from_steps(lower, upper, steps.ceil() as usize)
    }

    pub fn lower(&self) -> Float {
        self.lower
    }

    pub fn upper(&self) -> Float {
        self.upper
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn step_size(&self) -> Float {
        self.step_size
    }

    pub fn iter(self) -> impl Iterator<Item = Float> {
        (0..=self.steps).map(move |i| self.lower + self.step_size * i as Float)
    }

    pub fn points(&self) -> Vec<Float> {
        self.iter().collect()
    }
}
