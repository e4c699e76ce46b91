//! 2D drawing surface abstraction
//!
//! Mirrors the subset of a canvas 2D context the play renderer needs. The
//! browser implementation lives in `platform::web`; [`Recorder`] captures
//! calls for headless runs and tests.

use std::cell::RefCell;
use std::rc::Rc;

/// Immediate-mode 2D drawing operations
pub trait Surface {
    /// Resize the drawable area (clears it)
    fn set_size(&mut self, width: f32, height: f32);
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    /// Arc around `(cx, cy)` from `start` to `end` radians
    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetSize { width: f32, height: f32 },
    FillStyle(String),
    StrokeStyle(String),
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    StrokeRect { x: f32, y: f32, w: f32, h: f32 },
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    Arc { cx: f32, cy: f32, radius: f32, start: f32, end: f32 },
    ClosePath,
    Fill,
    Stroke,
}

/// Surface that records every call.
///
/// Clones share one command log, so a clone can be handed to a play and the
/// original kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    commands: Rc<RefCell<Vec<DrawCommand>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain recorded commands
    pub fn take(&self) -> Vec<DrawCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.commands.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }

    fn push(&self, cmd: DrawCommand) {
        self.commands.borrow_mut().push(cmd);
    }
}

impl Surface for Recorder {
    fn set_size(&mut self, width: f32, height: f32) {
        self.push(DrawCommand::SetSize { width, height });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.push(DrawCommand::FillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.push(DrawCommand::StrokeStyle(color.to_string()));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawCommand::FillRect { x, y, w, h });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawCommand::StrokeRect { x, y, w, h });
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::LineTo { x, y });
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32) {
        self.push(DrawCommand::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        });
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }
}
