use crate::core::fractals::mandelbrot::errors::EvalParamsError;

pub const DEFAULT_BAILOUT: f64 = 16.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 5000;

/// Escape-time parameters, fixed for the lifetime of a session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EvalParams {
    bailout: f64,
    max_iterations: u32,
}

impl EvalParams {
    pub fn new(bailout: f64, max_iterations: u32) -> Result<Self, EvalParamsError> {
        if !(bailout > 0.0 && bailout.is_finite()) {
            return Err(EvalParamsError::InvalidBailout { bailout });
        }

        if max_iterations == 0 {
            return Err(EvalParamsError::ZeroMaxIterations);
        }

        Ok(Self {
            bailout,
            max_iterations,
        })
    }

    #[must_use]
    pub fn bailout(&self) -> f64 {
        self.bailout
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            bailout: DEFAULT_BAILOUT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}
