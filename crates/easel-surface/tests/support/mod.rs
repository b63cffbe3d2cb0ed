//! Shared in-memory backend and draw context for integration tests.
#![allow(dead_code)]

use easel_scene::{DrawContext, DrawError};
use easel_surface::{SurfaceBackend, SurfaceGeometry};
use kurbo::Rect;
use peniko::Color;

/// A draw command recorded by [`MemoryContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Clear(Rect),
    FillRect(Rect),
    StrokeRect(Rect),
    FillEllipse(Rect),
    StrokeEllipse(Rect),
}

/// Records every command; optionally fails all fill commands.
#[derive(Default)]
pub struct MemoryContext {
    pub commands: Vec<Command>,
    /// When set, fill commands fail with this detail message.
    pub fail_fills: Option<String>,
}

impl MemoryContext {
    pub fn clears(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Clear(_)))
            .count()
    }

    pub fn paints(&self) -> usize {
        self.commands.len() - self.clears()
    }
}

impl DrawContext for MemoryContext {
    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(Command::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, _color: Color) -> Result<(), DrawError> {
        if let Some(detail) = &self.fail_fills {
            return Err(DrawError::Command(detail.clone()));
        }
        self.commands.push(Command::FillRect(rect));
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, _color: Color, _width: f64) -> Result<(), DrawError> {
        self.commands.push(Command::StrokeRect(rect));
        Ok(())
    }

    fn fill_ellipse(&mut self, bounds: Rect, _color: Color) -> Result<(), DrawError> {
        if let Some(detail) = &self.fail_fills {
            return Err(DrawError::Command(detail.clone()));
        }
        self.commands.push(Command::FillEllipse(bounds));
        Ok(())
    }

    fn stroke_ellipse(&mut self, bounds: Rect, _color: Color, _width: f64) -> Result<(), DrawError> {
        self.commands.push(Command::StrokeEllipse(bounds));
        Ok(())
    }
}

/// Backend standing in for the host element: fixed bounding box, recorded
/// geometry pushes, last cursor, detach flag.
pub struct MemoryBackend {
    pub bbox: Rect,
    pub ctx: MemoryContext,
    pub cursor: Option<String>,
    pub applied: Vec<SurfaceGeometry>,
    pub detached: bool,
}

impl MemoryBackend {
    pub fn with_bbox(bbox: Rect) -> Self {
        Self {
            bbox,
            ctx: MemoryContext::default(),
            cursor: None,
            applied: Vec::new(),
            detached: false,
        }
    }
}

impl SurfaceBackend for MemoryBackend {
    fn bounding_box(&self) -> Rect {
        self.bbox
    }

    fn draw_context(&mut self) -> &mut dyn DrawContext {
        &mut self.ctx
    }

    fn apply_geometry(&mut self, geometry: &SurfaceGeometry) {
        self.applied.push(*geometry);
    }

    fn set_cursor(&mut self, cursor: &str) {
        self.cursor = Some(cursor.to_string());
    }

    fn detach(&mut self) {
        self.detached = true;
    }
}
