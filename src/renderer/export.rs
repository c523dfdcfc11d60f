//! PNG export of rendered frames

use std::path::Path;

use super::raster::PixelBuffer;
use crate::error::Result;

/// Encode a pixel buffer as an RGBA PNG
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        buffer.as_bytes(),
        buffer.width,
        buffer.height,
        image::ExtendedColorType::Rgba8,
    )?;
    log::info!(
        "Wrote {}x{} frame to {}",
        buffer.width,
        buffer.height,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::raster::Pixel;

    #[test]
    fn test_save_png_roundtrip() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.pixels[4] = Pixel {
            rgba: [10, 200, 30, 255],
        };

        let path = std::env::temp_dir().join(format!("gradient-flow-{}.png", std::process::id()));
        save_png(&buffer, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(1, 1).0, [10, 200, 30, 255]);
    }
}
