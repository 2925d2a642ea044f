use crate::controllers::interactive::ports::cell_sink::CellSink;
use crate::core::data::colour::Colour;
use crate::core::data::grid::{GridCell, GridDims};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fmt;

const RESET: &str = "\x1b[0m";
const BLOCK: char = ' ';

/// Keeps the latest colour of every cell and prints them as 24-bit
/// background-coloured blocks, one terminal row per grid row.
#[derive(Debug)]
pub struct AnsiGridSink {
    buffer: PixelBuffer,
}

impl AnsiGridSink {
    #[must_use]
    pub fn new(grid: GridDims) -> Self {
        Self {
            buffer: PixelBuffer::new(grid),
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn paint(&mut self, cell: GridCell, colour: Colour) {
        if let Err(e) = self.buffer.set_pixel(cell, colour) {
            log::warn!("dropping mark: {}", e);
        }
    }
}

impl fmt::Display for AnsiGridSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.buffer.grid();

        for row in 0..grid.rows() {
            let mut previous = None;
            for col in 0..grid.cols() {
                let colour = self
                    .buffer
                    .pixel(GridCell::new(row, col))
                    .unwrap_or(Colour::BLACK);

                if previous != Some(colour) {
                    write!(f, "\x1b[48;2;{};{};{}m", colour.r, colour.g, colour.b)?;
                    previous = Some(colour);
                }
                write!(f, "{}", BLOCK)?;
            }
            writeln!(f, "{}", RESET)?;
        }

        Ok(())
    }
}

impl CellSink for AnsiGridSink {
    fn mark_inside(&mut self, cell: GridCell) {
        self.paint(cell, Colour::BLACK);
    }

    fn mark_outside(&mut self, cell: GridCell, hue_degrees: u32) {
        self.paint(cell, Colour::from_hue(hue_degrees));
    }
}
