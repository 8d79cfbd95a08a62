//! LoomScape - particle loom background
//!
//! Core modules:
//! - `sim`: Deterministic particle field (kinematics, proximity links)
//! - `renderer`: Surface abstraction, frame replay, canvas backend
//! - `loom`: Frame driver tying the field to a surface
//! - `settings`: Field configuration
//! - `error`: Settings and render errors

pub mod error;
pub mod loom;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{RenderError, SettingsError};
pub use loom::{FrameStats, Loom};
pub use settings::{ResizePolicy, Settings};

/// Field configuration constants
pub mod consts {
    /// Particles in the field
    pub const PARTICLE_COUNT: usize = 80;
    /// Maximum distance at which two particles are linked
    pub const LINK_DISTANCE: f32 = 150.0;
    /// Per-axis speed bound (units per frame)
    pub const MAX_SPEED: f32 = 0.25;

    /// Particle radius range [min, max)
    pub const MIN_SIZE: f32 = 1.0;
    pub const MAX_SIZE: f32 = 3.0;

    /// Link stroke width
    pub const LINK_WIDTH: f32 = 0.5;

    /// Canvas element the page glue draws into
    pub const CANVAS_ID: &str = "loomCanvas";
}

/// Largest `f32` strictly below `x` (for turning `[0, x]` into `[0, x)`)
#[inline]
pub fn next_below(x: f32) -> f32 {
    if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f32::from_bits(1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}
