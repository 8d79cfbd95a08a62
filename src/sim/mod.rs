//! Deterministic particle field simulation
//!
//! Everything that moves lives here. This module stays pure:
//! - Randomness comes from an injected `rand::Rng`
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies; a tick yields a [`Frame`]

pub mod field;
pub mod frame;
pub mod link;
pub mod particle;

pub use field::ParticleField;
pub use frame::{DrawCommand, Frame};
pub use link::{link_opacity, linked};
pub use particle::Particle;
