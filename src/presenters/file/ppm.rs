use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;

const BYTES_PER_PIXEL: usize = 3;
pub const DEFAULT_CELL_SIZE: u32 = 8;

/// Writes a cell buffer as binary PPM, every cell blown up to a
/// `cell_size` x `cell_size` block.
pub struct PpmFilePresenter {
    cell_size: u32,
}

impl FilePresenterPort for PpmFilePresenter {
    fn encode(&self, buffer: &PixelBuffer, out: &mut dyn Write) -> std::io::Result<()> {
        let grid = buffer.grid();
        let scale = self.cell_size as usize;
        let width = grid.cols() as usize * scale;
        let height = grid.rows() as usize * scale;

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", width, height)?;
        writeln!(out, "255")?;

        let mut scaled_row = Vec::with_capacity(width * BYTES_PER_PIXEL);
        for cell_row in buffer.buffer().chunks_exact(grid.cols() as usize * BYTES_PER_PIXEL) {
            scaled_row.clear();
            for pixel in cell_row.chunks_exact(BYTES_PER_PIXEL) {
                for _ in 0..scale {
                    scaled_row.extend_from_slice(pixel);
                }
            }

            for _ in 0..scale {
                out.write_all(&scaled_row)?;
            }
        }

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl PpmFilePresenter {
    /// A `cell_size` of zero is treated as one.
    #[must_use]
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.max(1),
        }
    }
}
