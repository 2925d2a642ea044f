use crate::controllers::interactive::ports::cell_sink::CellSink;
use crate::core::data::colour::Colour;
use crate::core::data::grid::{GridCell, GridDims};
use crate::core::data::pixel_buffer::PixelBuffer;

/// Paints one pixel per cell: inside points black, escaped points by hue.
#[derive(Debug)]
pub struct PixelBufferSink {
    buffer: PixelBuffer,
    frames: u64,
}

impl PixelBufferSink {
    #[must_use]
    pub fn new(grid: GridDims) -> Self {
        Self {
            buffer: PixelBuffer::new(grid),
            frames: 0,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Number of complete frames painted so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn paint(&mut self, cell: GridCell, colour: Colour) {
        if let Err(e) = self.buffer.set_pixel(cell, colour) {
            log::warn!("dropping mark: {}", e);
        }
    }
}

impl CellSink for PixelBufferSink {
    fn mark_inside(&mut self, cell: GridCell) {
        self.paint(cell, Colour::BLACK);
    }

    fn mark_outside(&mut self, cell: GridCell, hue_degrees: u32) {
        self.paint(cell, Colour::from_hue(hue_degrees));
    }

    fn frame_complete(&mut self) {
        self.frames += 1;
    }
}
