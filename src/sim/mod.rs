//! Deterministic simulation module
//!
//! Projectile motion lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (by projectile index)
//! - No rendering or platform dependencies

pub mod spawn;
pub mod state;
pub mod tick;

pub use spawn::{initial_velocity, random_color, spawn_projectiles};
pub use state::{Frame, Projectile, Rgb, SimulationState};
pub use tick::{perturb, reflect_and_advance, update};
