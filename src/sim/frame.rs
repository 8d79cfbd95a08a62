//! Draw commands produced by one simulation tick

use glam::Vec2;

/// One primitive to draw, in the order the tick produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Filled particle disk
    Disk { center: Vec2, radius: f32 },
    /// Line between two nearby particles
    Link { from: Vec2, to: Vec2, opacity: f32 },
}

/// Everything one tick draws onto a freshly cleared surface
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Surface width the frame was simulated against
    pub width: f32,
    /// Surface height the frame was simulated against
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn with_capacity(width: f32, height: f32, capacity: usize) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn disks(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Disk { center, radius } => Some((center, radius)),
            _ => None,
        })
    }

    pub fn links(&self) -> impl Iterator<Item = (Vec2, Vec2, f32)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Link { from, to, opacity } => Some((from, to, opacity)),
            _ => None,
        })
    }

    pub fn disk_count(&self) -> usize {
        self.disks().count()
    }

    pub fn link_count(&self) -> usize {
        self.links().count()
    }
}
