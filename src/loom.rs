//! Frame driver
//!
//! `Loom` owns the particle field and knows nothing about scheduling: the
//! host calls [`Loom::frame`] once per display refresh and [`Loom::resize`]
//! when the viewport changes. Tests drive it by calling `frame` in a loop.

use rand_pcg::Pcg32;

use crate::error::RenderError;
use crate::renderer::{Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::ParticleField;

/// What a single frame drew
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// 1-based frame number
    pub frame: u64,
    pub disks: usize,
    pub links: usize,
}

/// The running particle loom
#[derive(Debug, Clone)]
pub struct Loom {
    field: ParticleField<Pcg32>,
}

impl Loom {
    /// Create a loom for a `width` x `height` surface, seeding its RNG
    pub fn new(settings: Settings, width: f32, height: f32, seed: u64) -> Self {
        log::info!(
            "Loom: {} particles, link distance {}, seed {}",
            settings.particle_count,
            settings.link_distance,
            seed
        );
        Self {
            field: ParticleField::seeded(settings, width, height, seed),
        }
    }

    /// Run one frame: tick the field, then clear and redraw `surface`
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<FrameStats, RenderError> {
        let frame = self.field.tick();
        draw_frame(&frame, &self.field.settings().style, surface)?;
        Ok(FrameStats {
            frame: self.field.ticks(),
            disks: frame.disk_count(),
            links: frame.link_count(),
        })
    }

    /// Surface changed size
    pub fn resize(&mut self, width: f32, height: f32) {
        log::info!(
            "Resize to {}x{} ({})",
            width,
            height,
            self.field.settings().resize_policy.as_str()
        );
        self.field.resize(width, height);
    }

    pub fn field(&self) -> &ParticleField<Pcg32> {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField<Pcg32> {
        &mut self.field
    }
}
