//! Error types for LoomScape.
//!
//! The simulation itself cannot fail. Errors come from parsing settings and
//! from the host surface refusing a draw call.

use std::fmt;

/// Errors produced while loading or validating [`Settings`](crate::Settings).
#[derive(Debug)]
pub enum SettingsError {
    /// Settings JSON could not be parsed.
    Parse(serde_json::Error),
    /// A field needs at least one particle.
    ZeroParticles,
    /// Link distance must be positive and finite.
    InvalidLinkDistance(f32),
    /// Maximum speed must be non-negative and finite.
    InvalidSpeed(f32),
    /// Size range must satisfy `0 <= min_size < max_size`.
    InvalidSizeRange { min: f32, max: f32 },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "Failed to parse settings: {}", e),
            SettingsError::ZeroParticles => write!(f, "Particle count must be at least 1"),
            SettingsError::InvalidLinkDistance(d) => {
                write!(f, "Link distance must be positive and finite, got {}", d)
            }
            SettingsError::InvalidSpeed(s) => {
                write!(f, "Maximum speed must be non-negative and finite, got {}", s)
            }
            SettingsError::InvalidSizeRange { min, max } => {
                write!(f, "Invalid particle size range [{}, {})", min, max)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Errors reported by a drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The host canvas API rejected a call.
    Canvas(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Canvas(msg) => write!(f, "Canvas error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}
