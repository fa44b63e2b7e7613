//! Drawing of the grid and the control panel.
//!
//! Grid drawing goes through the [`Surface`] trait so it works in grid space:
//! the view transform is pushed onto the surface once per frame instead of
//! being applied to every cell.

mod surface;

pub use surface::{DrawOp, MacroquadSurface, RecordingSurface, Surface};

use macroquad::prelude::*;

use crate::application::{Session, ViewTransform};
use crate::domain::Grid;
use crate::ui::{Button, Labels};

pub const BACKGROUND_COLOR: Color = WHITE;
pub const GRID_LINE_COLOR: Color = Color::new(0.8, 0.8, 0.8, 1.0); // #cccccc
pub const ALIVE_COLOR: Color = BLACK;

/// Draw the grid through `view` and publish the population to `labels`.
///
/// Reads only; calling it twice with the same inputs draws the same frame.
pub fn render(
    grid: &Grid,
    view: &ViewTransform,
    surface: &mut dyn Surface,
    labels: &mut Labels,
) {
    let (width, height) = surface.size();
    surface.clear_rect(0.0, 0.0, width, height);
    labels.set_population(grid.population());

    surface.save();
    surface.translate(view.offset_x, view.offset_y);
    surface.scale(view.zoom());

    let cell = view.cell_size();
    let (cols, rows) = grid.dimensions();
    let extent_x = cols as f32 * cell;
    let extent_y = rows as f32 * cell;
    // One screen pixel whatever the zoom
    let line_width = 1.0 / view.zoom();

    for col in 0..=cols {
        let x = col as f32 * cell;
        surface.stroke_line(x, 0.0, x, extent_y, line_width, GRID_LINE_COLOR);
    }
    for row in 0..=rows {
        let y = row as f32 * cell;
        surface.stroke_line(0.0, y, extent_x, y, line_width, GRID_LINE_COLOR);
    }

    for addr in grid.live_cells() {
        surface.fill_rect(
            addr.col as f32 * cell,
            addr.row as f32 * cell,
            cell,
            cell,
            ALIVE_COLOR,
        );
    }

    surface.restore();
}

/// Paint the window background around the canvas so cells panned past
/// its edge are hidden, then outline the canvas.
pub fn draw_canvas_frame(canvas: (f32, f32, f32, f32)) {
    let (x, y, w, h) = canvas;
    let frame = Color::from_rgba(45, 45, 45, 255);
    let (sw, sh) = (screen_width(), screen_height());

    draw_rectangle(0.0, 0.0, sw, y, frame);
    draw_rectangle(0.0, y + h, sw, sh - (y + h), frame);
    draw_rectangle(0.0, y, x, h, frame);
    draw_rectangle(x + w, y, sw - (x + w), h, frame);
    draw_rectangle_lines(x, y, w, h, 1.0, GRAY);
}

/// Draw control panel background
fn draw_panel_background(panel_x: f32) {
    draw_rectangle(
        panel_x,
        0.0,
        screen_width() - panel_x,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons and session info
pub fn draw_controls(
    session: &Session,
    buttons: &[Button],
    panel_x: f32,
    mouse_pos: (f32, f32),
) {
    draw_panel_background(panel_x);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let labels = session.labels();
    let running = session.controller().is_running();
    let info_y = 270.0;

    let status = if running { "Running" } else { "Paused" };
    let status_color = if running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let lines = [
        (labels.population.clone(), 16.0, WHITE),
        (format!("Generation: {}", session.generation()), 16.0, WHITE),
        (status.to_owned(), 16.0, status_color),
        (format!("Zoom: {:.1}x", session.view().zoom()), 14.0, LIGHTGRAY),
        ("Controls:".to_owned(), 14.0, WHITE),
        ("LMB: Draw / Pan".to_owned(), 12.0, GRAY),
        ("RMB: Switch mode".to_owned(), 12.0, GRAY),
        ("Wheel: Zoom".to_owned(), 12.0, GRAY),
        ("Space: Pause  S: Step".to_owned(), 12.0, GRAY),
        ("C: Clear  R: Random".to_owned(), 12.0, GRAY),
        ("M: Mode  H: Reset view".to_owned(), 12.0, GRAY),
    ];

    let mut y = info_y;
    for (text, size, color) in lines {
        draw_text(&text, panel_x, y, size, color);
        y += size + 6.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Mode;

    fn sample_grid() -> Grid {
        let mut grid = Grid::new(4, 3);
        grid.toggle(grid.address(1, 2).unwrap());
        grid.toggle(grid.address(3, 0).unwrap());
        grid
    }

    #[test]
    fn test_render_draws_lines_and_live_cells() {
        let grid = sample_grid();
        let view = ViewTransform::new(10.0);
        let mut surface = RecordingSurface::new(400.0, 300.0);
        let mut labels = Labels::new(true, Mode::Draw);

        render(&grid, &view, &mut surface, &mut labels);

        let lines = surface
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count();
        assert_eq!(lines, (4 + 1) + (3 + 1));
        assert_eq!(
            surface.filled_cells(),
            vec![(30.0, 0.0, 10.0, 10.0), (10.0, 20.0, 10.0, 10.0)]
        );
        assert_eq!(labels.population, "Population: 2");
        assert_eq!(
            surface.ops.first(),
            Some(&DrawOp::Clear { x: 0.0, y: 0.0, w: 400.0, h: 300.0 })
        );
    }

    #[test]
    fn test_render_applies_pan_then_zoom() {
        let grid = sample_grid();
        let mut view = ViewTransform::new(10.0);
        view.pan(5.0, 7.0);
        view.zoom_by(2.0);
        let mut surface = RecordingSurface::new(400.0, 300.0);
        let mut labels = Labels::new(true, Mode::Draw);

        render(&grid, &view, &mut surface, &mut labels);

        // (3,0): 5 + 3*20, 7 + 0*20
        assert_eq!(surface.filled_cells()[0], (65.0, 7.0, 20.0, 20.0));
        let widths: Vec<f32> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { width, .. } => Some(*width),
                _ => None,
            })
            .collect();
        assert!(widths.iter().all(|w| (*w - 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_render_is_idempotent_and_balanced() {
        let grid = sample_grid();
        let view = ViewTransform::new(10.0);
        let mut labels = Labels::new(true, Mode::Draw);

        let mut first = RecordingSurface::new(400.0, 300.0);
        render(&grid, &view, &mut first, &mut labels);
        let mut second = RecordingSurface::new(400.0, 300.0);
        render(&grid, &view, &mut second, &mut labels);

        assert_eq!(first.ops, second.ops);
        assert_eq!(first.depth(), 0);
    }

    #[test]
    fn test_clear_covers_whole_surface_even_when_panned() {
        let grid = sample_grid();
        let mut view = ViewTransform::new(10.0);
        view.pan(-300.0, 40.0);
        view.zoom_by(3.0);
        let mut surface = RecordingSurface::new(250.0, 120.0);
        let mut labels = Labels::new(true, Mode::Draw);

        render(&grid, &view, &mut surface, &mut labels);

        assert_eq!(surface.frames(), 1);
        assert_eq!(
            surface.last_frame().first(),
            Some(&DrawOp::Clear { x: 0.0, y: 0.0, w: 250.0, h: 120.0 })
        );
    }
}
