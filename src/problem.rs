use core::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::Float;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ProblemError {
    #[error("diffusivity must be positive, got {0}")]
    NonPositiveDiffusivity(Float),
    #[error("rod length must be positive, got {0}")]
    NonPositiveLength(Float),
}

/// The heat equation `u_t = kappa * u_xx` on `[0, length]` with both rod ends
/// held at zero temperature and initial state `u(x, 0) = u0(x)`.
#[derive(Clone)]
pub struct Problem<'pb> {
    pub(crate) name: String,
    pub(crate) kappa: Float,
    pub(crate) length: Float,
    pub(crate) u0: Rc<dyn Fn(Float) -> Float + 'pb>,
}

impl<'pb> Problem<'pb> {
    pub fn new(
        name: impl AsRef<str>,
        diffusivity: Float,
        length: Float,
        u0: impl Fn(Float) -> Float + 'pb,
    ) -> Result<Self, ProblemError> {
        if !(diffusivity > 0.0) {
            return Err(ProblemError::NonPositiveDiffusivity(diffusivity));
        }
        if !(length > 0.0) {
            return Err(ProblemError::NonPositiveLength(length));
        }

        Ok(Self {
            name: name.as_ref().to_string(),
            kappa: diffusivity,
            length,
            u0: Rc::new(u0),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn diffusivity(&self) -> Float {
        self.kappa
    }

    pub fn length(&self) -> Float {
        self.length
    }
}

impl fmt::Debug for Problem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("name", &self.name)
            .field("kappa", &self.kappa)
            .field("length", &self.length)
            .field("u0", &"<dyn Fn(Float) -> Float>")
            .finish()
    }
}
