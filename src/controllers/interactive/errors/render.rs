use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderError {
    Algorithm(PixelToComplexCoordsError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(e) => Some(e),
        }
    }
}

impl From<PixelToComplexCoordsError> for RenderError {
    fn from(error: PixelToComplexCoordsError) -> Self {
        Self::Algorithm(error)
    }
}
