use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Encodes a finished cell buffer into some image file format.
pub trait FilePresenterPort {
    fn encode(&self, buffer: &PixelBuffer, out: &mut dyn Write) -> std::io::Result<()>;

    /// Writes `buffer` to `filepath`, creating missing parent directories.
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(std::fs::File::create(filepath)?);
        self.encode(buffer, &mut writer)?;
        writer.flush()
    }
}
