use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::grid::{GridCell, GridDims};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::params::EvalParams;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

const HUE_DEGREES: u32 = 360;

/// Classification of a single plane point.
///
/// `Outside` carries the iterations left over when the orbit escaped. An orbit
/// that escapes on the very last permitted iteration has none left and is
/// reported as `Inside`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterationOutcome {
    Inside,
    Outside { iterations_remaining: u32 },
}

impl IterationOutcome {
    #[must_use]
    pub fn from_remaining(iterations_remaining: u32) -> Self {
        if iterations_remaining == 0 {
            Self::Inside
        } else {
            Self::Outside {
                iterations_remaining,
            }
        }
    }

    /// Hue in degrees for an escaped point; `None` for `Inside`.
    #[must_use]
    pub fn hue(&self) -> Option<u32> {
        match self {
            Self::Inside => None,
            Self::Outside {
                iterations_remaining,
            } => Some(iterations_remaining % HUE_DEGREES),
        }
    }
}

/// Escape-time classification of `c` under `z -> z² + c` starting at zero.
///
/// Callers guarantee `bailout > 0` and `max_iterations > 0`; [`EvalParams`]
/// enforces both.
#[must_use]
pub fn evaluate(c: Complex, bailout: f64, max_iterations: u32) -> IterationOutcome {
    let threshold = bailout * bailout;
    let mut z = Complex::ZERO;

    for iteration in 1..=max_iterations {
        z = z.square() + c;
        if z.magnitude_squared() >= threshold {
            return IterationOutcome::from_remaining(max_iterations - iteration);
        }
    }

    IterationOutcome::Inside
}

/// Evaluates every cell of a grid against one fixed viewport.
#[derive(Debug, Clone, Copy)]
pub struct EscapeTimeAlgorithm {
    grid: GridDims,
    viewport: Viewport,
    params: EvalParams,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(grid: GridDims, viewport: Viewport, params: EvalParams) -> Self {
        Self {
            grid,
            viewport,
            params,
        }
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = IterationOutcome;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, cell: GridCell) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(cell, self.grid, self.viewport)?;

        Ok(evaluate(
            c,
            self.params.bailout(),
            self.params.max_iterations(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_near_origin_are_inside() {
        let steps = 20;

        for i in 0..=steps {
            for j in 0..=steps {
                let c = Complex::new(
                    -0.25 + 0.5 * f64::from(i) / f64::from(steps),
                    -0.25 + 0.5 * f64::from(j) / f64::from(steps),
                );
                if c.magnitude_squared() > 0.0625 {
                    continue;
                }

                assert_eq!(evaluate(c, 2.0, 1000), IterationOutcome::Inside, "c = {:?}", c);
            }
        }
    }

    #[test]
    fn origin_is_inside_for_large_bailout() {
        assert_eq!(evaluate(Complex::ZERO, 16.0, 5000), IterationOutcome::Inside);
    }

    #[test]
    fn two_escapes_on_first_iteration() {
        let outcome = evaluate(Complex::new(2.0, 0.0), 2.0, 100);

        assert_eq!(
            outcome,
            IterationOutcome::Outside {
                iterations_remaining: 99
            }
        );
    }

    #[test]
    fn far_point_escapes_on_first_iteration_for_any_max() {
        for max_iterations in [2, 10, 5000] {
            assert_eq!(
                evaluate(Complex::new(10.0, 10.0), 2.0, max_iterations),
                IterationOutcome::from_remaining(max_iterations - 1)
            );
        }
    }

    #[test]
    fn upper_left_default_corner_escapes_after_four_iterations() {
        // (-2 + i) -> (1 - 3i) -> (-10 - 5i) -> (73 + 101i)
        let outcome = evaluate(Complex::new(-2.0, 1.0), 16.0, 5000);

        assert_eq!(
            outcome,
            IterationOutcome::Outside {
                iterations_remaining: 4996
            }
        );
    }

    #[test]
    fn escape_on_last_iteration_counts_as_inside() {
        assert_eq!(evaluate(Complex::new(2.0, 0.0), 2.0, 1), IterationOutcome::Inside);
    }

    #[test]
    fn evaluate_is_deterministic() {
        let c = Complex::new(-0.7436438870371587, 0.1318259042053119);

        assert_eq!(evaluate(c, 16.0, 5000), evaluate(c, 16.0, 5000));
    }

    #[test]
    fn hue_uses_iterations_remaining_modulo_360() {
        assert_eq!(IterationOutcome::Inside.hue(), None);
        assert_eq!(IterationOutcome::from_remaining(4996).hue(), Some(316));
        assert_eq!(IterationOutcome::from_remaining(360).hue(), Some(0));
        assert_eq!(IterationOutcome::from_remaining(17).hue(), Some(17));
    }

    #[test]
    fn from_remaining_zero_is_inside() {
        assert_eq!(IterationOutcome::from_remaining(0), IterationOutcome::Inside);
        assert_eq!(IterationOutcome::from_remaining(0).hue(), None);
    }

    #[test]
    fn algorithm_reports_cells_outside_grid() {
        let grid = GridDims::new(4, 4).unwrap();
        let algorithm = EscapeTimeAlgorithm::new(grid, Viewport::default(), EvalParams::default());

        assert!(algorithm.compute(GridCell::new(4, 0)).is_err());
        assert_eq!(
            algorithm.compute(GridCell::new(0, 0)),
            Ok(IterationOutcome::Outside {
                iterations_remaining: 4996
            })
        );
    }
}
