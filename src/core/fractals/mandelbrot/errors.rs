use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalParamsError {
    InvalidBailout { bailout: f64 },
    ZeroMaxIterations,
}

impl fmt::Display for EvalParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBailout { bailout } => {
                write!(f, "bailout must be positive and finite, got {}", bailout)
            }
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for EvalParamsError {}
