//! Block grid output
//!
//! The renderer's product is plain data: a list of flat-colored rectangles
//! that a host adapter pushes to whatever drawing surface it owns.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::blend::color_at;
use crate::config::Scale;
use crate::error::{FlowError, Result};
use crate::sim::{Rgb, SimulationState};

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64)
    }
}

/// One flat-colored block of the output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    pub color: Rgb,
}

/// Rendered frame, row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockGrid {
    pub block_size: u32,
    pub columns: u32,
    pub rows: u32,
    pub blocks: Vec<Block>,
}

impl BlockGrid {
    pub fn get(&self, column: u32, row: u32) -> Option<&Block> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.blocks.get((row * self.columns + column) as usize)
    }
}

/// Rasterizes simulation state into a block grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    block_size: u32,
}

impl Renderer {
    pub fn new(block_size: u32) -> Result<Self> {
        if block_size == 0 {
            return Err(FlowError::InvalidConfig(
                "block size must be at least 1 pixel".to_string(),
            ));
        }
        Ok(Self { block_size })
    }

    /// 1px blocks for the preview, 50px otherwise
    pub fn for_scale(scale: Scale) -> Self {
        Self {
            block_size: scale.block_size(),
        }
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Cover the frame with blocks, each colored once at its top-left corner.
    ///
    /// Blocks on the right and bottom edges may extend past the frame.
    pub fn render(&self, state: &SimulationState) -> BlockGrid {
        let size = self.block_size;
        let columns = (state.frame.width / size as f64).ceil() as u32;
        let rows = (state.frame.height / size as f64).ceil() as u32;

        let mut blocks = Vec::with_capacity((columns * rows) as usize);
        for row in 0..rows {
            for column in 0..columns {
                let rect = Rect {
                    x: column * size,
                    y: row * size,
                    width: size,
                    height: size,
                };
                let color = color_at(state, rect.origin());
                blocks.push(Block { rect, color });
            }
        }

        BlockGrid {
            block_size: size,
            columns,
            rows,
            blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FlowConfig, Preset};
    use crate::sim::{Frame, Projectile};

    fn state(width: f64, height: f64, projectiles: Vec<Projectile>) -> SimulationState {
        SimulationState::with_projectiles(
            Frame::new(width, height).unwrap(),
            Scale::Normal,
            FlowConfig::from_preset(Preset::Solo),
            projectiles,
            0,
        )
        .unwrap()
    }

    #[test]
    fn test_render_covers_frame() {
        let p = Projectile::new(DVec2::new(250.0, 250.0), DVec2::ZERO, Rgb::RED);
        let grid = Renderer::new(50).unwrap().render(&state(500.0, 500.0, vec![p]));
        assert_eq!((grid.columns, grid.rows), (10, 10));
        assert_eq!(grid.blocks.len(), 100);

        let last = grid.get(9, 9).unwrap();
        assert_eq!(last.rect, Rect { x: 450, y: 450, width: 50, height: 50 });
        assert!(grid.get(10, 0).is_none());
    }

    #[test]
    fn test_partial_edge_blocks() {
        let p = Projectile::new(DVec2::new(10.0, 10.0), DVec2::ZERO, Rgb::RED);
        let grid = Renderer::new(50).unwrap().render(&state(1280.0, 810.0, vec![p]));
        assert_eq!((grid.columns, grid.rows), (26, 17));
    }

    #[test]
    fn test_block_colored_at_top_left() {
        let p = Projectile::new(DVec2::new(250.0, 250.0), DVec2::ZERO, Rgb::GREEN);
        let grid = Renderer::new(50).unwrap().render(&state(500.0, 500.0, vec![p]));
        // Block (5, 5) starts exactly on the projectile
        assert_eq!(grid.get(5, 5).unwrap().color, Rgb::GREEN);
        // Its neighbor starts 50px away
        assert!(grid.get(4, 5).unwrap().color.g < 1.0);
    }

    #[test]
    fn test_preview_uses_single_pixels() {
        let p = Projectile::new(DVec2::new(25.0, 25.0), DVec2::ZERO, Rgb::BLUE);
        let grid = Renderer::for_scale(Scale::Preview).render(&state(50.0, 40.0, vec![p]));
        assert_eq!(grid.block_size, 1);
        assert_eq!(grid.blocks.len(), 50 * 40);
    }

    #[test]
    fn test_zero_block_rejected() {
        assert!(Renderer::new(0).is_err());
    }
}
