//! The particle field: a fixed-size collection advanced once per frame
//!
//! Each tick moves every particle, then links it to every later particle
//! within the link distance. The all-pairs check is O(n²), which is cheap at
//! the field sizes used on the page.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::frame::{DrawCommand, Frame};
use super::link::linked;
use super::particle::Particle;
use crate::settings::{ResizePolicy, Settings};

/// A particle field bound to a surface size
#[derive(Debug, Clone)]
pub struct ParticleField<R = Pcg32> {
    settings: Settings,
    bounds: Vec2,
    particles: Vec<Particle>,
    rng: R,
    ticks: u64,
}

impl ParticleField<Pcg32> {
    /// Create a field with a PCG generator seeded from `seed`
    pub fn seeded(settings: Settings, width: f32, height: f32, seed: u64) -> Self {
        Self::new(settings, width, height, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    /// Create a field and spawn `settings.particle_count` particles from `rng`
    pub fn new(settings: Settings, width: f32, height: f32, rng: R) -> Self {
        let mut field = Self {
            settings,
            bounds: Vec2::new(width.max(0.0), height.max(0.0)),
            particles: Vec::new(),
            rng,
            ticks: 0,
        };
        field.reinitialize();
        field
    }

    /// Discard every particle and spawn a fresh collection
    pub fn reinitialize(&mut self) {
        let count = self.settings.particle_count;
        let bounds = self.bounds;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle::spawn(&mut self.rng, bounds, &self.settings);
            self.particles.push(particle);
        }
        log::debug!(
            "Spawned {} particles in {}x{}",
            count,
            bounds.x,
            bounds.y
        );
    }

    /// Adopt new surface dimensions, applying the configured resize policy
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
        match self.settings.resize_policy {
            ResizePolicy::Reinitialize => self.reinitialize(),
            ResizePolicy::KeepParticles => {
                for particle in &mut self.particles {
                    particle.clamp_into(self.bounds);
                }
            }
        }
    }

    /// Advance one frame and return what it draws.
    ///
    /// Particles are processed in collection order. Particle `i` is moved,
    /// emitted as a disk, then tested against every `j > i`. Later particles
    /// have not moved yet when `i` is tested against them, so each unordered
    /// pair is checked exactly once.
    pub fn tick(&mut self) -> Frame {
        let bounds = self.bounds;
        let threshold = self.settings.link_distance;
        let mut frame = Frame::with_capacity(bounds.x, bounds.y, self.particles.len() * 2);

        for i in 0..self.particles.len() {
            let (head, rest) = self.particles.split_at_mut(i + 1);
            let particle = &mut head[i];
            particle.update(bounds);
            frame.push(DrawCommand::Disk {
                center: particle.pos,
                radius: particle.size,
            });

            for other in rest.iter() {
                if let Some(opacity) = linked(particle.pos, other.pos, threshold) {
                    frame.push(DrawCommand::Link {
                        from: particle.pos,
                        to: other.pos,
                        opacity,
                    });
                }
            }
        }

        self.ticks += 1;
        frame
    }

    /// Replace the collection wholesale (the next resize or reinitialize
    /// restores the configured count)
    pub fn replace_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Surface size as (width, height)
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Number of ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
