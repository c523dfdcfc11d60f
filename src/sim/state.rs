//! Simulation state and core types
//!
//! Everything a run needs to be reproduced from its seed lives here.

use std::ops::{Add, AddAssign, Div, Mul};

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::spawn_projectiles;
use crate::config::{FlowConfig, Scale};
use crate::error::{FlowError, Result};

/// RGB color, channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Pure primary color for channel index 0 (red), 1 (green) or 2 (blue),
    /// wrapping for larger indices
    pub fn channel(index: usize) -> Self {
        match index % 3 {
            0 => Rgb::RED,
            1 => Rgb::GREEN,
            _ => Rgb::BLUE,
        }
    }

    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Quantize to opaque 8-bit RGBA
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), 255]
    }
}

impl Add for Rgb {
    type Output = Rgb;

    fn add(self, other: Rgb) -> Rgb {
        Rgb::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for Rgb {
    fn add_assign(&mut self, other: Rgb) {
        *self = *self + other;
    }
}

impl Mul<f64> for Rgb {
    type Output = Rgb;

    fn mul(self, k: f64) -> Rgb {
        Rgb::new(self.r * k, self.g * k, self.b * k)
    }
}

impl Div<f64> for Rgb {
    type Output = Rgb;

    fn div(self, k: f64) -> Rgb {
        Rgb::new(self.r / k, self.g / k, self.b / k)
    }
}

/// A moving colored point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: DVec2,
    pub vel: DVec2,
    pub color: Rgb,
}

impl Projectile {
    pub fn new(pos: DVec2, vel: DVec2, color: Rgb) -> Self {
        Self { pos, vel, color }
    }
}

/// Frame bounds, fixed for the life of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Rejects frames whose diagonal would be zero or undefined
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(FlowError::InvalidFrame { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn extent(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn diagonal(&self) -> f64 {
        crate::diagonal(self.width, self.height)
    }

    /// Inclusive bounds check
    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// Complete simulation state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub frame: Frame,
    pub scale: Scale,
    pub config: FlowConfig,
    /// Projectiles in spawn order; never added or removed after construction
    pub projectiles: Vec<Projectile>,
    /// Ticks since the last perturbation
    pub ticks_since_perturb: u32,
    /// Total ticks simulated
    pub time_ticks: u64,
    /// Number of perturbations applied
    pub perturbations: u64,
    pub(crate) rng: Pcg32,
}

impl SimulationState {
    /// Spawn a fresh run at the frame center using `config`'s policies
    pub fn new(frame: Frame, scale: Scale, config: FlowConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let projectiles = spawn_projectiles(&frame, scale, &config, &mut rng);

        log::info!(
            "Spawned {} projectiles in {}x{} frame ({:?}, seed {})",
            projectiles.len(),
            frame.width,
            frame.height,
            scale,
            seed
        );

        Ok(Self::assemble(frame, scale, config, projectiles, seed, rng))
    }

    /// Build a run from explicit projectiles (scripted scenes)
    pub fn with_projectiles(
        frame: Frame,
        scale: Scale,
        config: FlowConfig,
        projectiles: Vec<Projectile>,
        seed: u64,
    ) -> Result<Self> {
        if projectiles.is_empty() {
            return Err(FlowError::InvalidConfig(
                "at least one projectile is required".to_string(),
            ));
        }
        let rng = Pcg32::seed_from_u64(seed);
        Ok(Self::assemble(frame, scale, config, projectiles, seed, rng))
    }

    fn assemble(
        frame: Frame,
        scale: Scale,
        config: FlowConfig,
        projectiles: Vec<Projectile>,
        seed: u64,
        rng: Pcg32,
    ) -> Self {
        Self {
            seed,
            frame,
            scale,
            config,
            projectiles,
            ticks_since_perturb: 0,
            time_ticks: 0,
            perturbations: 0,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }
}
