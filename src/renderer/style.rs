//! Colors and stroke settings

use serde::{Deserialize, Serialize};

use crate::consts::LINK_WIDTH;

/// 8-bit RGB with a 0-1 alpha, as CSS `rgba()` takes it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color, alpha scaled by `factor`
    pub fn fade(self, factor: f32) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS color string, e.g. `rgba(99, 102, 241, 0.5)`
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Indigo used across the page
pub const INDIGO: Rgba = Rgba::new(99, 102, 241, 1.0);

/// How particles and links are painted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Disk fill
    pub particle: Rgba,
    /// Link stroke at full opacity; faded by each link's opacity
    pub link: Rgba,
    pub link_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            particle: INDIGO.fade(0.5),
            link: INDIGO,
            link_width: LINK_WIDTH,
        }
    }
}

impl Style {
    /// Stroke color for a link of the given opacity
    pub fn link_color(&self, opacity: f32) -> Rgba {
        self.link.fade(opacity)
    }
}
