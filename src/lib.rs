//! Gradient Flow - drifting color projectiles blended into a gradient field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (projectile motion, perturbation)
//! - `renderer`: Closeness-weighted color blend and block grid output
//! - `driver`: Owns the simulation and runs update + render per tick
//! - `config`: Count/color/blend policies and variant presets
//! - `error`: Crate error type

pub mod config;
pub mod driver;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{BlendMode, ColorPolicy, CountPolicy, FlowConfig, Preset, Scale};
pub use driver::Driver;
pub use error::{FlowError, Result};

use glam::DVec2;

/// Screensaver configuration constants
pub mod consts {
    /// Ticks between velocity perturbations
    pub const PERTURB_PERIOD_TICKS: u32 = 120;

    /// Frames smaller than this on both axes are treated as the settings preview
    pub const PREVIEW_THRESHOLD: f64 = 200.0;

    /// Block edge length (pixels)
    pub const BLOCK_SIZE: u32 = 50;
    pub const PREVIEW_BLOCK_SIZE: u32 = 1;

    /// Initial projectile speed (pixels/tick)
    pub const INITIAL_SPEED: f64 = 15.0;
    pub const PREVIEW_INITIAL_SPEED: f64 = 1.5;

    /// Range of the initial x velocity magnitude; y is derived from the speed
    pub const INITIAL_X_RANGE: (f64, f64) = (5.5, 10.5);
    pub const PREVIEW_INITIAL_X_RANGE: (f64, f64) = (0.55, 1.05);

    /// Half-width of the uniform velocity noise applied on perturbation
    pub const PERTURB_MAGNITUDE: f64 = 1.0;
    pub const PREVIEW_PERTURB_MAGNITUDE: f64 = 0.1;

    /// Lower bound for random color channels (keeps colors away from black)
    pub const MIN_RANDOM_CHANNEL: f64 = 0.3;
}

/// Length of the diagonal of a `width` x `height` frame
#[inline]
pub fn diagonal(width: f64, height: f64) -> f64 {
    (width * width + height * height).sqrt()
}

/// Closeness of two points relative to the longest distance in the frame.
///
/// 1.0 when the points coincide, 0.0 at opposite corners. Negative only when a
/// point lies outside the frame.
#[inline]
pub fn closeness(a: DVec2, b: DVec2, diagonal: f64) -> f64 {
    1.0 - a.distance(b) / diagonal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal() {
        assert!((diagonal(3.0, 4.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_closeness_extremes() {
        let d = diagonal(500.0, 500.0);
        assert_eq!(closeness(DVec2::new(10.0, 10.0), DVec2::new(10.0, 10.0), d), 1.0);
        let far = closeness(DVec2::ZERO, DVec2::new(500.0, 500.0), d);
        assert!(far.abs() < 1e-12);
    }
}
