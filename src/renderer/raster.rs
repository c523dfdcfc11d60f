//! Block grid to RGBA8 pixel buffer

use bytemuck::{Pod, Zeroable};

use super::grid::BlockGrid;

/// Opaque 8-bit RGBA pixel
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
    pub rgba: [u8; 4],
}

/// Row-major pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Pixel>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::default(); (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Raw RGBA bytes, ready for upload or encoding
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Paint every block into a `width` x `height` buffer, clipping blocks that
/// hang over the edge
pub fn rasterize(grid: &BlockGrid, width: u32, height: u32) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);

    for block in &grid.blocks {
        let pixel = Pixel {
            rgba: block.color.to_rgba8(),
        };
        let x_end = (block.rect.x + block.rect.width).min(width);
        let y_end = (block.rect.y + block.rect.height).min(height);

        for y in block.rect.y..y_end {
            let row = (y * width) as usize;
            for x in block.rect.x..x_end {
                buffer.pixels[row + x as usize] = pixel;
            }
        }
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::grid::{Block, Rect};
    use crate::sim::Rgb;

    fn grid() -> BlockGrid {
        let block = |x, y, color| Block {
            rect: Rect { x, y, width: 4, height: 4 },
            color,
        };
        BlockGrid {
            block_size: 4,
            columns: 2,
            rows: 1,
            blocks: vec![block(0, 0, Rgb::RED), block(4, 0, Rgb::BLUE)],
        }
    }

    #[test]
    fn test_rasterize_clips_edge_blocks() {
        let buffer = rasterize(&grid(), 6, 3);
        assert_eq!(buffer.pixels.len(), 18);
        assert_eq!(buffer.get(3, 2).unwrap().rgba, [255, 0, 0, 255]);
        assert_eq!(buffer.get(5, 0).unwrap().rgba, [0, 0, 255, 255]);
        assert!(buffer.get(6, 0).is_none());
    }

    #[test]
    fn test_as_bytes_layout() {
        let buffer = rasterize(&grid(), 8, 4);
        let bytes = buffer.as_bytes();
        assert_eq!(bytes.len(), 8 * 4 * 4);
        assert_eq!(&bytes[0..4], &[255, 0, 0, 255]);
        assert_eq!(&bytes[16..20], &[0, 0, 255, 255]);
    }
}
