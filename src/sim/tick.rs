//! Fixed-step simulation tick
//!
//! Advances every projectile one step, bouncing off the frame edges, and
//! applies the periodic random velocity kick.

use glam::DVec2;
use rand::Rng;

use super::spawn::random_color;
use super::state::{Frame, Projectile, SimulationState};
use crate::consts::PERTURB_PERIOD_TICKS;

/// Advance the simulation by one tick
pub fn update(state: &mut SimulationState) {
    let frame = state.frame;
    for projectile in &mut state.projectiles {
        reflect_and_advance(projectile, &frame);
    }

    state.time_ticks += 1;
    state.ticks_since_perturb += 1;
    if state.ticks_since_perturb >= PERTURB_PERIOD_TICKS {
        state.ticks_since_perturb = 0;
        perturb(state);
    }

    log::trace!("tick {}: {:?}", state.time_ticks, state.projectiles);
}

/// Move one projectile a single step.
///
/// Each axis is checked independently: if the position plus velocity would
/// leave `[0, extent]`, that velocity component flips sign before the move.
/// The position itself is never clamped.
pub fn reflect_and_advance(projectile: &mut Projectile, frame: &Frame) {
    let extent = frame.extent();
    let next = projectile.pos + projectile.vel;

    for axis in 0..2 {
        if next[axis] > extent[axis] || next[axis] < 0.0 {
            projectile.vel[axis] = -projectile.vel[axis];
        }
    }

    projectile.pos += projectile.vel;
}

/// Random kick applied every `PERTURB_PERIOD_TICKS` ticks.
///
/// Adds uniform noise in `[-m, m]` to both velocity components of every
/// projectile, then recolors one random projectile if the color policy asks
/// for it.
pub fn perturb(state: &mut SimulationState) {
    let m = state.scale.perturb_magnitude();
    let rng = &mut state.rng;

    for projectile in &mut state.projectiles {
        let noise = DVec2::new(rng.random_range(-m..=m), rng.random_range(-m..=m));
        projectile.vel += noise;
    }

    if state.config.recolors() && !state.projectiles.is_empty() {
        let index = rng.random_range(0..state.projectiles.len());
        let color = random_color(rng);
        state.projectiles[index].color = color;
        log::debug!("Recolored projectile {} to {:?}", index, color);
    }

    state.perturbations += 1;
    log::debug!(
        "Perturbation {} at tick {}",
        state.perturbations,
        state.time_ticks
    );
}
