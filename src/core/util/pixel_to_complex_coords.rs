use crate::core::data::complex::Complex;
use crate::core::data::grid::{GridCell, GridDims};
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    CellOutsideGrid { cell: GridCell, grid: GridDims },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutsideGrid { cell, grid } => {
                write!(
                    f,
                    "cell (row: {}, col: {}) is outside the {}x{} grid",
                    cell.row,
                    cell.col,
                    grid.rows(),
                    grid.cols()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a cell to the plane point at its top-left corner.
///
/// Sampling is half-open: row 0 lands on `upper_left.imag`, the last row one
/// step short of `lower_right.imag`. Columns behave the same way on the real
/// axis.
#[must_use]
pub fn pixel_to_complex(cell: GridCell, grid: GridDims, viewport: Viewport) -> Complex {
    let upper_left = viewport.upper_left();
    let lower_right = viewport.lower_right();

    let delta_real = (lower_right.real - upper_left.real) / f64::from(grid.cols());
    let delta_imag = (lower_right.imag - upper_left.imag) / f64::from(grid.rows());

    Complex {
        real: upper_left.real + f64::from(cell.col) * delta_real,
        imag: upper_left.imag + f64::from(cell.row) * delta_imag,
    }
}

pub fn pixel_to_complex_coords(
    cell: GridCell,
    grid: GridDims,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !grid.contains(cell) {
        return Err(PixelToComplexCoordsError::CellOutsideGrid { cell, grid });
    }

    Ok(pixel_to_complex(cell, grid, viewport))
}
