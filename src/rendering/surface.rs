use macroquad::prelude::*;

use super::BACKGROUND_COLOR;

/// A 2D drawing target with a canvas-style transform stack.
///
/// Coordinates passed to the drawing calls are in the current transformed
/// space; `save`/`restore` bracket transform changes.
pub trait Surface {
    /// Drawable size in surface pixels
    fn size(&self) -> (f32, f32);
    /// Reset a rectangle to the background colour
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn scale(&mut self, factor: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color);
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Transform {
    tx: f32,
    ty: f32,
    scale: f32,
}

impl Transform {
    const IDENTITY: Self = Self { tx: 0.0, ty: 0.0, scale: 1.0 };

    fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (self.tx + x * self.scale, self.ty + y * self.scale)
    }
}

#[derive(Debug)]
struct TransformStack {
    current: Transform,
    saved: Vec<Transform>,
}

impl TransformStack {
    fn new() -> Self {
        Self {
            current: Transform::IDENTITY,
            saved: Vec::new(),
        }
    }

    fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Unbalanced restores are ignored
    fn restore(&mut self) {
        if let Some(previous) = self.saved.pop() {
            self.current = previous;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.current.tx += dx * self.current.scale;
        self.current.ty += dy * self.current.scale;
    }

    fn scale(&mut self, factor: f32) {
        self.current.scale *= factor;
    }
}

/// Surface backed by macroquad's immediate-mode drawing, placed at
/// `origin` in window coordinates.
pub struct MacroquadSurface {
    origin: (f32, f32),
    width: f32,
    height: f32,
    stack: TransformStack,
}

impl MacroquadSurface {
    pub fn new(origin: (f32, f32), width: f32, height: f32) -> Self {
        Self {
            origin,
            width,
            height,
            stack: TransformStack::new(),
        }
    }

    fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        let (sx, sy) = self.stack.current.apply(x, y);
        (self.origin.0 + sx, self.origin.1 + sy)
    }
}

impl Surface for MacroquadSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (sx, sy) = self.to_screen(x, y);
        let s = self.stack.current.scale;
        draw_rectangle(sx, sy, w * s, h * s, BACKGROUND_COLOR);
    }

    fn save(&mut self) {
        self.stack.save();
    }

    fn restore(&mut self) {
        self.stack.restore();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.stack.translate(dx, dy);
    }

    fn scale(&mut self, factor: f32) {
        self.stack.scale(factor);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let (sx, sy) = self.to_screen(x, y);
        let s = self.stack.current.scale;
        draw_rectangle(sx, sy, w * s, h * s, color);
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color) {
        let (sx1, sy1) = self.to_screen(x1, y1);
        let (sx2, sy2) = self.to_screen(x2, y2);
        draw_line(sx1, sy1, sx2, sy2, width * self.stack.current.scale, color);
    }
}

/// One primitive issued to a [`RecordingSurface`], in surface pixels
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    Line { x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color },
}

/// Headless surface that records what would have been drawn
#[derive(Debug)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    stack: TransformStack,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            stack: TransformStack::new(),
            ops: Vec::new(),
        }
    }

    /// Filled rectangles as (x, y, w, h), in draw order
    pub fn filled_cells(&self) -> Vec<(f32, f32, f32, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Rect { x, y, w, h, .. } => Some((x, y, w, h)),
                _ => None,
            })
            .collect()
    }

    /// Number of unmatched `save` calls
    pub fn depth(&self) -> usize {
        self.stack.saved.len()
    }

    /// Ops drawn since the last clear
    pub fn last_frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear { .. }))
            .unwrap_or(0);
        &self.ops[start..]
    }

    pub fn frames(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (x, y) = self.stack.current.apply(x, y);
        let s = self.stack.current.scale;
        self.ops.push(DrawOp::Clear { x, y, w: w * s, h: h * s });
    }

    fn save(&mut self) {
        self.stack.save();
    }

    fn restore(&mut self) {
        self.stack.restore();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.stack.translate(dx, dy);
    }

    fn scale(&mut self, factor: f32) {
        self.stack.scale(factor);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let (x, y) = self.stack.current.apply(x, y);
        let s = self.stack.current.scale;
        self.ops.push(DrawOp::Rect { x, y, w: w * s, h: h * s, color });
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color) {
        let (x1, y1) = self.stack.current.apply(x1, y1);
        let (x2, y2) = self.stack.current.apply(x2, y2);
        let width = width * self.stack.current.scale;
        self.ops.push(DrawOp::Line { x1, y1, x2, y2, width, color });
    }
}
