//! A single particle and its reflecting-boundary kinematics

use glam::Vec2;
use rand::Rng;

use crate::next_below;
use crate::settings::Settings;

/// A point mass drawn as a disk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Canvas-space position
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    /// Disk radius, fixed at creation
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Spawn a particle uniformly inside `bounds` with random size and velocity
    pub fn spawn<R: Rng>(rng: &mut R, bounds: Vec2, settings: &Settings) -> Self {
        let pos = Vec2::new(
            sample(rng, 0.0, bounds.x),
            sample(rng, 0.0, bounds.y),
        );
        let size = sample(rng, settings.min_size, settings.max_size);
        let vel = Vec2::new(
            sample(rng, -settings.max_speed, settings.max_speed),
            sample(rng, -settings.max_speed, settings.max_speed),
        );
        Self { pos, vel, size }
    }

    /// Advance one frame, reflecting off the edges of `bounds`
    pub fn update(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        reflect_axis(&mut self.pos.x, &mut self.vel.x, bounds.x);
        reflect_axis(&mut self.pos.y, &mut self.vel.y, bounds.y);
    }

    /// Pull the particle inside `bounds` without touching its velocity
    pub fn clamp_into(&mut self, bounds: Vec2) {
        self.pos.x = self.pos.x.clamp(0.0, upper_edge(bounds.x));
        self.pos.y = self.pos.y.clamp(0.0, upper_edge(bounds.y));
    }

    /// Whether the particle lies in `[0, w) x [0, h)`
    pub fn is_inside(&self, bounds: Vec2) -> bool {
        let inside = |v: f32, extent: f32| v >= 0.0 && (v < extent || (extent <= 0.0 && v == 0.0));
        inside(self.pos.x, bounds.x) && inside(self.pos.y, bounds.y)
    }
}

/// Uniform sample from `[lo, hi)`; collapses to `lo` on an empty range
fn sample<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if !(hi > lo) {
        return lo;
    }
    let value = if (hi - lo).is_finite() {
        rng.random_range(lo..hi)
    } else {
        // Span overflows f32; sample the halved range instead
        rng.random_range(lo / 2.0..hi / 2.0) * 2.0
    };
    value.clamp(lo, next_below(hi))
}

/// Highest coordinate allowed on an axis of the given extent
#[inline]
fn upper_edge(extent: f32) -> f32 {
    if extent > 0.0 { next_below(extent) } else { 0.0 }
}

/// Negate the velocity component when the step left `[0, extent)` and
/// mirror the position back across the edge it crossed.
fn reflect_axis(pos: &mut f32, vel: &mut f32, extent: f32) {
    if *pos < 0.0 {
        *pos = -*pos;
        *vel = -*vel;
    } else if *pos >= extent {
        *pos = 2.0 * extent - *pos;
        *vel = -*vel;
    }
    // A step longer than the extent can overshoot the mirror
    *pos = pos.clamp(0.0, upper_edge(extent));
}
