use crate::core::data::grid::GridDimsError;
use crate::core::fractals::mandelbrot::errors::EvalParamsError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionConfigError {
    Grid(GridDimsError),
    Eval(EvalParamsError),
    ZeroZoomDuration,
    ZeroFrameInterval,
}

impl fmt::Display for SessionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid grid: {}", e),
            Self::Eval(e) => write!(f, "invalid evaluation parameters: {}", e),
            Self::ZeroZoomDuration => write!(f, "zoom duration must be greater than zero"),
            Self::ZeroFrameInterval => write!(f, "frame interval must be greater than zero"),
        }
    }
}

impl Error for SessionConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::ZeroZoomDuration | Self::ZeroFrameInterval => None,
        }
    }
}

impl From<GridDimsError> for SessionConfigError {
    fn from(error: GridDimsError) -> Self {
        Self::Grid(error)
    }
}

impl From<EvalParamsError> for SessionConfigError {
    fn from(error: EvalParamsError) -> Self {
        Self::Eval(error)
    }
}
