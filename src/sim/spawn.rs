//! Projectile spawning
//!
//! Every projectile starts at the frame center with the same speed and a
//! random heading. Count and color come from the run's `FlowConfig`.

use glam::DVec2;
use rand::Rng;

use super::state::{Frame, Projectile, Rgb};
use crate::config::{ColorPolicy, CountPolicy, FlowConfig, Scale};
use crate::consts::MIN_RANDOM_CHANNEL;

/// Random heading at the scale's fixed initial speed.
///
/// The x magnitude is drawn from the scale's x range and y is derived so the
/// vector length equals the initial speed. Each axis gets an independent sign.
pub fn initial_velocity<R: Rng + ?Sized>(scale: Scale, rng: &mut R) -> DVec2 {
    let speed = scale.initial_speed();
    let (x_min, x_max) = scale.initial_x_range();

    let x = rng.random_range(x_min..=x_max);
    let y = (speed * speed - x * x).sqrt();

    DVec2::new(x * random_sign(rng), y * random_sign(rng))
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Random color with every channel in [0.3, 1.0]
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(
        rng.random_range(MIN_RANDOM_CHANNEL..=1.0),
        rng.random_range(MIN_RANDOM_CHANNEL..=1.0),
        rng.random_range(MIN_RANDOM_CHANNEL..=1.0),
    )
}

/// Channel index (0 red, 1 green, 2 blue) of every projectile to spawn, in
/// spawn order
fn channel_slots<R: Rng + ?Sized>(count: CountPolicy, rng: &mut R) -> Vec<usize> {
    match count {
        CountPolicy::Fixed(n) => (0..n as usize).collect(),
        CountPolicy::Uniform { min, max } => {
            let n = rng.random_range(min..=max) as usize;
            (0..n).collect()
        }
        CountPolicy::PerChannel { min, max } => {
            let mut slots = Vec::new();
            for channel in 0..3 {
                let n = rng.random_range(min..=max) as usize;
                slots.extend(std::iter::repeat_n(channel, n));
            }
            // The field is black without projectiles
            if slots.is_empty() {
                slots.push(rng.random_range(0..3));
            }
            slots
        }
    }
}

/// Spawn the projectiles for a new run
pub fn spawn_projectiles<R: Rng + ?Sized>(
    frame: &Frame,
    scale: Scale,
    config: &FlowConfig,
    rng: &mut R,
) -> Vec<Projectile> {
    let slots = channel_slots(config.count, rng);
    let center = frame.center();

    slots
        .into_iter()
        .map(|channel| {
            let color = match config.color {
                ColorPolicy::ChannelIdentity => Rgb::channel(channel),
                ColorPolicy::Random { .. } => random_color(rng),
            };
            let vel = initial_velocity(scale, rng);
            Projectile::new(center, vel, color)
        })
        .collect()
}
