use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const DEFAULT_UPPER_LEFT: Complex = Complex::new(-2.0, 1.0);
pub const DEFAULT_LOWER_RIGHT: Complex = Complex::new(1.0, -1.0);

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "viewport size must be positive and finite: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Rectangular window of the complex plane mapped onto the grid.
///
/// The imaginary axis decreases downward, so `upper_left.imag` is the
/// largest imaginary value in the window and `lower_right.imag` the smallest.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    upper_left: Complex,
    lower_right: Complex,
}

impl Viewport {
    pub fn new(upper_left: Complex, lower_right: Complex) -> Result<Self, ViewportError> {
        let width = lower_right.real - upper_left.real;
        let height = upper_left.imag - lower_right.imag;

        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            upper_left,
            lower_right,
        })
    }

    /// Window of the given size with `center` in the middle.
    pub fn centered(center: Complex, width: f64, height: f64) -> Result<Self, ViewportError> {
        let half_width = width / 2.0;
        let half_height = height / 2.0;

        Self::new(
            Complex::new(center.real - half_width, center.imag + half_height),
            Complex::new(center.real + half_width, center.imag - half_height),
        )
    }

    /// Interpolated windows are convex combinations of two valid windows, so
    /// they are built without re-validating.
    pub(crate) fn from_corners(upper_left: Complex, lower_right: Complex) -> Self {
        Self {
            upper_left,
            lower_right,
        }
    }

    #[must_use]
    pub fn upper_left(&self) -> Complex {
        self.upper_left
    }

    #[must_use]
    pub fn lower_right(&self) -> Complex {
        self.lower_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.lower_right.real - self.upper_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.upper_left.imag - self.lower_right.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            (self.upper_left.real + self.lower_right.real) / 2.0,
            (self.upper_left.imag + self.lower_right.imag) / 2.0,
        )
    }
}

impl Default for Viewport {
    /// The full-plane window: real in [-2, 1], imag in [-1, 1].
    fn default() -> Self {
        Self::from_corners(DEFAULT_UPPER_LEFT, DEFAULT_LOWER_RIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let upper_left = Complex::new(-2.0, 1.0);
        let lower_right = Complex::new(1.0, -1.0);

        let viewport = Viewport::new(upper_left, lower_right).unwrap();

        assert_eq!(viewport.upper_left(), upper_left);
        assert_eq!(viewport.lower_right(), lower_right);
    }

    #[test]
    fn test_default_matches_validated_window() {
        let validated = Viewport::new(DEFAULT_UPPER_LEFT, DEFAULT_LOWER_RIGHT).unwrap();

        assert_eq!(Viewport::default(), validated);
        assert_eq!(validated.width(), 3.0);
        assert_eq!(validated.height(), 2.0);
    }

    #[test]
    fn test_viewport_dimensions_must_be_positive() {
        let zero_width = Viewport::new(Complex::new(0.0, 1.0), Complex::new(0.0, 0.0));
        let negative_width = Viewport::new(Complex::new(0.0, 1.0), Complex::new(-1.0, 0.0));
        let zero_height = Viewport::new(Complex::new(0.0, 1.0), Complex::new(1.0, 1.0));
        // imaginary axis increasing downward is rejected
        let flipped = Viewport::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0));

        assert_eq!(
            zero_width,
            Err(ViewportError::InvalidSize {
                width: 0.0,
                height: 1.0
            })
        );
        assert_eq!(
            negative_width,
            Err(ViewportError::InvalidSize {
                width: -1.0,
                height: 1.0
            })
        );
        assert_eq!(
            zero_height,
            Err(ViewportError::InvalidSize {
                width: 1.0,
                height: 0.0
            })
        );
        assert_eq!(
            flipped,
            Err(ViewportError::InvalidSize {
                width: 3.0,
                height: -2.0
            })
        );
    }

    #[test]
    fn test_viewport_rejects_non_finite_corners() {
        assert!(Viewport::new(Complex::new(f64::NAN, 1.0), Complex::new(1.0, 0.0)).is_err());
        assert!(Viewport::new(Complex::new(0.0, 1.0), Complex::new(f64::INFINITY, 0.0)).is_err());
    }

    #[test]
    fn test_centered_window() {
        let viewport = Viewport::centered(Complex::new(-0.5, 0.0), 3.0, 2.0).unwrap();

        assert_eq!(viewport.upper_left(), Complex::new(-2.0, 1.0));
        assert_eq!(viewport.lower_right(), Complex::new(1.0, -1.0));
        assert_eq!(viewport.center(), Complex::new(-0.5, 0.0));
    }
}
