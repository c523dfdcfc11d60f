//! Tick driver
//!
//! Owns the simulation and turns each host timer tick into one update followed
//! by one render.

use crate::config::{FlowConfig, Scale};
use crate::error::Result;
use crate::renderer::{BlockGrid, PixelBuffer, Renderer, rasterize};
use crate::sim::{Frame, SimulationState, update};

/// Simulation plus the renderer sized for its surface
#[derive(Debug, Clone)]
pub struct Driver {
    state: SimulationState,
    renderer: Renderer,
}

impl Driver {
    /// Build a driver for a `width` x `height` surface.
    ///
    /// Fails on a degenerate frame or an invalid config.
    pub fn new(width: f64, height: f64, scale: Scale, config: FlowConfig, seed: u64) -> Result<Self> {
        let frame = Frame::new(width, height)?;
        let state = SimulationState::new(frame, scale, config, seed)?;
        Ok(Self::from_state(state))
    }

    /// Like `new`, picking preview scale from the surface size
    pub fn detect(width: f64, height: f64, config: FlowConfig, seed: u64) -> Result<Self> {
        Self::new(width, height, Scale::detect(width, height), config, seed)
    }

    /// Drive an existing state with the renderer for its scale
    pub fn from_state(state: SimulationState) -> Self {
        let renderer = Renderer::for_scale(state.scale);
        Self { state, renderer }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Advance one tick and render the result
    pub fn tick(&mut self) -> BlockGrid {
        update(&mut self.state);
        self.render()
    }

    /// Render the current state without advancing it
    pub fn render(&self) -> BlockGrid {
        self.renderer.render(&self.state)
    }

    /// Pixel dimensions of the surface
    pub fn surface_size(&self) -> (u32, u32) {
        (
            self.state.frame.width.ceil() as u32,
            self.state.frame.height.ceil() as u32,
        )
    }

    /// Render and rasterize at surface size
    pub fn snapshot(&self) -> PixelBuffer {
        let (width, height) = self.surface_size();
        rasterize(&self.render(), width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::error::FlowError;

    #[test]
    fn test_rejects_degenerate_frame() {
        let config = FlowConfig::default();
        assert!(matches!(
            Driver::new(0.0, 600.0, Scale::Normal, config, 1),
            Err(FlowError::InvalidFrame { .. })
        ));
        assert!(Driver::new(800.0, -5.0, Scale::Normal, config, 1).is_err());
    }

    #[test]
    fn test_detect_preview() {
        let driver = Driver::detect(50.0, 50.0, FlowConfig::from_preset(Preset::Solo), 11).unwrap();
        assert_eq!(driver.state().scale, Scale::Preview);
        assert_eq!(driver.renderer().block_size(), 1);
        let vel = driver.state().projectiles[0].vel;
        assert!((vel.length() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_tick_updates_then_renders() {
        let mut driver = Driver::new(1000.0, 500.0, Scale::Normal, FlowConfig::default(), 5).unwrap();
        let before = driver.state().projectiles.clone();
        let grid = driver.tick();
        assert_eq!(driver.state().time_ticks, 1);
        assert_ne!(driver.state().projectiles, before);
        assert_eq!((grid.columns, grid.rows), (20, 10));
        assert_eq!(grid, driver.render());
    }

    #[test]
    fn test_snapshot_size() {
        let driver = Driver::new(120.5, 80.0, Scale::Preview, FlowConfig::default(), 3).unwrap();
        let buffer = driver.snapshot();
        assert_eq!((buffer.width, buffer.height), (121, 80));
        assert_eq!(buffer.pixels.len(), 121 * 80);
    }
}
