//! Rendering module
//!
//! Pure CPU rendering: simulation state in, block grid out. Host adapters
//! rasterize or draw the grid however their surface wants it.

pub mod blend;
pub mod export;
pub mod grid;
pub mod raster;

pub use blend::{blend, color_at};
pub use export::save_png;
pub use grid::{Block, BlockGrid, Rect, Renderer};
pub use raster::{Pixel, PixelBuffer, rasterize};
