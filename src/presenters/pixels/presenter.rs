use crate::core::data::grid::{GridCell, GridDims};
use crate::core::data::pixel_buffer::PixelBuffer;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalPosition;
use winit::window::Window;

/// Owns the `pixels` surface. The framebuffer holds one texel per grid cell
/// and is stretched over the window by the scaling pass.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    grid: GridDims,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, grid: GridDims) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(grid.cols(), grid.rows(), surface_texture)?;

        Ok(Self { pixels, grid })
    }

    /// Copies `buffer` into the framebuffer. Buffers for another grid are
    /// ignored.
    pub fn update(&mut self, buffer: &PixelBuffer) {
        if buffer.grid() != self.grid {
            log::warn!(
                "skipping {}x{} buffer on {}x{} surface",
                buffer.grid().rows(),
                buffer.grid().cols(),
                self.grid.rows(),
                self.grid.cols()
            );
            return;
        }

        copy_rgb_into_rgba(buffer.buffer(), self.pixels.frame_mut());
    }

    pub fn render(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }

    /// The grid cell under a physical window position, if any.
    #[must_use]
    pub fn cell_at(&self, position: PhysicalPosition<f64>) -> Option<GridCell> {
        let (col, row) = self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
            .ok()?;

        let cell = GridCell::new(u32::try_from(row).ok()?, u32::try_from(col).ok()?);
        self.grid.contains(cell).then_some(cell)
    }
}

fn copy_rgb_into_rgba(src: &[u8], dst: &mut [u8]) {
    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }
}
