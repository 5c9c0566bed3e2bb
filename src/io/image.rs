//! PNG encoding and export of finished textures

use crate::io::error::{Result, TextureError};
use crate::render::canvas::PixelBuffer;
use image::ImageFormat;
use std::io::Cursor;
use std::path::Path;

/// Encode a buffer as PNG bytes
///
/// # Errors
///
/// Returns an error if PNG encoding fails
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    buffer.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Save a buffer as a PNG file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(buffer: &PixelBuffer, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TextureError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| TextureError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Filename for texture `id` (1-based) stamped with milliseconds since the epoch
pub fn texture_filename(prefix: &str, id: usize, stamp_millis: i64) -> String {
    format!("{prefix}_{id}_{stamp_millis}.png")
}
