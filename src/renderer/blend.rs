//! Closeness-weighted color blend
//!
//! Each projectile contributes its color scaled by how close it is to the
//! query point, relative to the frame diagonal.

use glam::DVec2;

use crate::closeness;
use crate::config::BlendMode;
use crate::sim::{Projectile, Rgb, SimulationState};

/// Color of the field at `p` for the current state
pub fn color_at(state: &SimulationState, p: DVec2) -> Rgb {
    blend(
        &state.projectiles,
        p,
        state.frame.diagonal(),
        state.config.blend,
    )
}

/// Blend projectile colors at `p`.
///
/// `Average` divides the weighted sum by the projectile count, not by the sum
/// of weights: the field dims where every projectile is far away and a close
/// projectile dominates its neighborhood.
pub fn blend(projectiles: &[Projectile], p: DVec2, diagonal: f64, mode: BlendMode) -> Rgb {
    if projectiles.is_empty() {
        return Rgb::BLACK;
    }

    let mut sum = Rgb::BLACK;
    for projectile in projectiles {
        sum += projectile.color * closeness(p, projectile.pos, diagonal);
    }

    match mode {
        BlendMode::Average => sum / projectiles.len() as f64,
        BlendMode::ChannelSum => sum.clamped(),
    }
}
