//! Particle field settings
//!
//! Every field is optional in JSON; missing values fall back to the page
//! defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::renderer::Style;

/// What happens to the particles when the surface is resized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Throw the whole collection away and spawn a fresh one
    #[default]
    Reinitialize,
    /// Keep particles, clamped into the new bounds
    KeepParticles,
}

impl ResizePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResizePolicy::Reinitialize => "reinitialize",
            ResizePolicy::KeepParticles => "keep_particles",
        }
    }
}

/// Particle field settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of particles in the field
    pub particle_count: usize,
    /// Pairs closer than this are linked
    pub link_distance: f32,
    /// Per-axis speed bound; velocities are drawn from [-max_speed, max_speed)
    pub max_speed: f32,
    /// Smallest particle radius (inclusive)
    pub min_size: f32,
    /// Largest particle radius (exclusive)
    pub max_size: f32,
    pub resize_policy: ResizePolicy,
    /// Colors and stroke width
    pub style: Style,
    /// Id of the canvas element (browser only)
    pub canvas_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            link_distance: LINK_DISTANCE,
            max_speed: MAX_SPEED,
            min_size: MIN_SIZE,
            max_size: MAX_SIZE,
            resize_policy: ResizePolicy::default(),
            style: Style::default(),
            canvas_id: CANVAS_ID.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the settings describe a drawable field
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.particle_count == 0 {
            return Err(SettingsError::ZeroParticles);
        }
        if !self.link_distance.is_finite() || self.link_distance <= 0.0 {
            return Err(SettingsError::InvalidLinkDistance(self.link_distance));
        }
        // The velocity range spans 2 * max_speed and must stay finite
        if !(2.0 * self.max_speed).is_finite() || self.max_speed < 0.0 {
            return Err(SettingsError::InvalidSpeed(self.max_speed));
        }
        if !(self.max_size - self.min_size).is_finite()
            || self.min_size < 0.0
            || self.min_size >= self.max_size
        {
            return Err(SettingsError::InvalidSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(())
    }

    /// Same settings with a different particle count
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page() {
        let settings = Settings::default();
        assert_eq!(settings.particle_count, 80);
        assert_eq!(settings.link_distance, 150.0);
        assert_eq!(settings.max_speed, 0.25);
        assert_eq!(settings.resize_policy, ResizePolicy::Reinitialize);
        assert_eq!(settings.canvas_id, "loomCanvas");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings =
            Settings::from_json(r#"{"particle_count": 12, "resize_policy": "keep_particles"}"#)
                .unwrap();
        assert_eq!(settings.particle_count, 12);
        assert_eq!(settings.resize_policy, ResizePolicy::KeepParticles);
        assert_eq!(settings.link_distance, LINK_DISTANCE);
        assert_eq!(settings.style, Style::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{"particle_count": 0}"#),
            Err(SettingsError::ZeroParticles)
        ));
        assert!(matches!(
            Settings::from_json(r#"{"link_distance": -1.0}"#),
            Err(SettingsError::InvalidLinkDistance(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"max_speed": -0.5}"#),
            Err(SettingsError::InvalidSpeed(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"min_size": 3.0, "max_size": 3.0}"#),
            Err(SettingsError::InvalidSizeRange { .. })
        ));
        assert!(matches!(
            Settings::from_json("{not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_ranges_that_overflow() {
        assert!(matches!(
            Settings::from_json(r#"{"max_speed": 3.0e38}"#),
            Err(SettingsError::InvalidSpeed(_))
        ));
        let unbounded_size = Settings {
            max_size: f32::INFINITY,
            ..Settings::default()
        };
        assert!(matches!(
            unbounded_size.validate(),
            Err(SettingsError::InvalidSizeRange { .. })
        ));
        // Large but representable spans are still accepted
        let settings = Settings::from_json(r#"{"max_speed": 1.0e38}"#).unwrap();
        let field = crate::sim::ParticleField::seeded(settings, 800.0, 600.0, 1);
        assert_eq!(field.particles().len(), 80);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(ResizePolicy::Reinitialize.as_str(), "reinitialize");
        let json = serde_json::to_string(&ResizePolicy::KeepParticles).unwrap();
        assert_eq!(json, format!("\"{}\"", ResizePolicy::KeepParticles.as_str()));
    }
}
