//! Headless surface that records draw calls

use glam::Vec2;

use super::{Rgba, Surface};
use crate::error::RenderError;

/// A recorded surface call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOp {
    Clear {
        width: f32,
        height: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

/// Surface that keeps the calls of the current frame.
///
/// Like a real raster, clearing wipes whatever was drawn before.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Circle { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Line { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) -> Result<(), RenderError> {
        self.ops.clear();
        self.ops.push(SurfaceOp::Clear { width, height });
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), RenderError> {
        self.ops.push(SurfaceOp::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    ) -> Result<(), RenderError> {
        self.ops.push(SurfaceOp::Line {
            from,
            to,
            width,
            color,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::style::INDIGO;

    #[test]
    fn test_clear_wipes_previous_frame() {
        let mut surface = RecordingSurface::new();
        surface.clear(10.0, 10.0).unwrap();
        surface.fill_circle(Vec2::ONE, 2.0, INDIGO).unwrap();
        surface.stroke_line(Vec2::ZERO, Vec2::ONE, 0.5, INDIGO).unwrap();
        assert_eq!(surface.circle_count(), 1);
        assert_eq!(surface.line_count(), 1);

        surface.clear(10.0, 10.0).unwrap();
        assert_eq!(surface.ops().len(), 1);
        assert_eq!(surface.circle_count(), 0);
    }
}
