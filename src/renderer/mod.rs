//! Rendering module
//!
//! The simulation emits a [`Frame`]; [`draw_frame`] replays it onto any
//! [`Surface`]. The browser backend wraps a 2D canvas context, tests and the
//! native binary use [`RecordingSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;
pub mod style;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{RecordingSurface, SurfaceOp};
pub use style::{Rgba, Style};

use glam::Vec2;

use crate::error::RenderError;
use crate::sim::{DrawCommand, Frame};

/// A 2D raster target
pub trait Surface {
    /// Wipe the whole `width` x `height` area
    fn clear(&mut self, width: f32, height: f32) -> Result<(), RenderError>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), RenderError>;

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    ) -> Result<(), RenderError>;
}

/// Clear the surface and draw every command of `frame` in order
pub fn draw_frame<S: Surface + ?Sized>(
    frame: &Frame,
    style: &Style,
    surface: &mut S,
) -> Result<(), RenderError> {
    surface.clear(frame.width, frame.height)?;
    for command in &frame.commands {
        match *command {
            DrawCommand::Disk { center, radius } => {
                surface.fill_circle(center, radius, style.particle)?;
            }
            DrawCommand::Link { from, to, opacity } => {
                surface.stroke_line(from, to, style.link_width, style.link_color(opacity))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_frame_replays_in_order() {
        let mut frame = Frame::new(320.0, 200.0);
        frame.push(DrawCommand::Disk {
            center: Vec2::new(1.0, 2.0),
            radius: 1.5,
        });
        frame.push(DrawCommand::Link {
            from: Vec2::new(1.0, 2.0),
            to: Vec2::new(11.0, 2.0),
            opacity: 0.5,
        });

        let style = Style::default();
        let mut surface = RecordingSurface::new();
        draw_frame(&frame, &style, &mut surface).unwrap();

        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::Clear {
                    width: 320.0,
                    height: 200.0
                },
                SurfaceOp::Circle {
                    center: Vec2::new(1.0, 2.0),
                    radius: 1.5,
                    color: style.particle,
                },
                SurfaceOp::Line {
                    from: Vec2::new(1.0, 2.0),
                    to: Vec2::new(11.0, 2.0),
                    width: 0.5,
                    color: Rgba::new(99, 102, 241, 0.5),
                },
            ]
        );
    }

    struct Broken;

    impl Surface for Broken {
        fn clear(&mut self, _width: f32, _height: f32) -> Result<(), RenderError> {
            Ok(())
        }

        fn fill_circle(&mut self, _: Vec2, _: f32, _: Rgba) -> Result<(), RenderError> {
            Err(RenderError::Canvas("arc failed".into()))
        }

        fn stroke_line(&mut self, _: Vec2, _: Vec2, _: f32, _: Rgba) -> Result<(), RenderError> {
            Ok(())
        }
    }

    #[test]
    fn test_draw_frame_propagates_errors() {
        let mut frame = Frame::new(10.0, 10.0);
        frame.push(DrawCommand::Disk {
            center: Vec2::ZERO,
            radius: 1.0,
        });
        let err = draw_frame(&frame, &Style::default(), &mut Broken).unwrap_err();
        assert_eq!(err, RenderError::Canvas("arc failed".into()));
    }
}
