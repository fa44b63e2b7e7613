use macroquad::prelude::*;

use crate::application::Command;

const FILL: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const FILL_HOVER: Color = Color::new(0.39, 0.58, 0.93, 1.0);
const FONT_SIZE: u16 = 20;

/// Panel button bound to the command it issues.
/// Click detection is fed from the frame's pointer sample, not polled here.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    bounds: (f32, f32, f32, f32),
    text: String,
    command: Command,
}

impl Button {
    pub fn new(bounds: (f32, f32, f32, f32), text: impl Into<String>, command: Command) -> Self {
        Self {
            bounds,
            text: text.into(),
            command,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn command(&self) -> Command {
        self.command
    }

    /// Inclusive on all four edges
    pub fn contains(&self, (px, py): (f32, f32)) -> bool {
        let (x, y, w, h) = self.bounds;
        px >= x && px <= x + w && py >= y && py <= y + h
    }

    /// The command to run if the primary button went down over this button
    pub fn clicked(&self, mouse_pos: (f32, f32), pressed: bool) -> Option<Command> {
        (pressed && self.contains(mouse_pos)).then_some(self.command)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let (x, y, w, h) = self.bounds;
        let fill = if self.contains(mouse_pos) { FILL_HOVER } else { FILL };

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let size = measure_text(&self.text, None, FONT_SIZE, 1.0);
        draw_text(
            &self.text,
            x + (w - size.width) / 2.0,
            y + (h + size.height) / 2.0,
            FONT_SIZE as f32,
            WHITE,
        );
    }
}
