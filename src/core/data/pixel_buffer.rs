use crate::core::data::colour::Colour;
use crate::core::data::grid::{GridCell, GridDims};
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn grid_to_buffer_size(grid: GridDims) -> usize {
    grid.cell_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    CellOutsideBounds { cell: GridCell, grid: GridDims },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutsideBounds { cell, grid } => {
                write!(
                    f,
                    "cell at row:{}, col:{} outside of grid {}x{}",
                    cell.row,
                    cell.col,
                    grid.rows(),
                    grid.cols()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB, one pixel per grid cell, row-major.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    grid: GridDims,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(grid: GridDims) -> Self {
        Self {
            grid,
            buffer: vec![0; grid_to_buffer_size(grid)],
        }
    }

    #[must_use]
    pub fn grid(&self) -> GridDims {
        self.grid
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    pub fn set_pixel(&mut self, cell: GridCell, colour: Colour) -> Result<(), PixelBufferError> {
        let Some(index) = self.grid.index_of(cell) else {
            return Err(PixelBufferError::CellOutsideBounds {
                cell,
                grid: self.grid,
            });
        };

        let offset = index * BYTES_PER_PIXEL;
        self.buffer[offset] = colour.r;
        self.buffer[offset + 1] = colour.g;
        self.buffer[offset + 2] = colour.b;

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, cell: GridCell) -> Option<Colour> {
        let offset = self.grid.index_of(cell)? * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[offset],
            g: self.buffer[offset + 1],
            b: self.buffer[offset + 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: u32, cols: u32) -> GridDims {
        GridDims::new(rows, cols).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(grid(10, 10));

        assert_eq!(buffer.grid(), grid(10, 10));
        assert_eq!(buffer.buffer().len(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_uses_row_major_layout() {
        let mut buffer = PixelBuffer::new(grid(2, 3));
        let red = Colour { r: 255, g: 0, b: 0 };

        buffer.set_pixel(GridCell::new(1, 2), red).unwrap();

        assert_eq!(&buffer.buffer()[15..18], &[255, 0, 0]);
        assert_eq!(buffer.pixel(GridCell::new(1, 2)), Some(red));
        assert_eq!(buffer.pixel(GridCell::new(0, 2)), Some(Colour::BLACK));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(grid(3, 3));
        let result = buffer.set_pixel(GridCell::new(3, 1), Colour::BLACK);

        assert_eq!(
            result,
            Err(PixelBufferError::CellOutsideBounds {
                cell: GridCell::new(3, 1),
                grid: grid(3, 3)
            })
        );
        assert_eq!(buffer.pixel(GridCell::new(3, 1)), None);
    }
}
