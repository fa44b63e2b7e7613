pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 5.0;
/// Zoom factor for one wheel-up notch
pub const ZOOM_IN_STEP: f32 = 1.1;
/// Zoom factor for one wheel-down notch
pub const ZOOM_OUT_STEP: f32 = 0.9;

/// ViewTransform holds the pan offset and zoom used both for drawing
/// and for mapping pointer positions back onto grid cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub offset_x: f32,
    pub offset_y: f32,
    zoom: f32, // 1.0 = normal, 2.0 = 2x zoomed in
    cell_size: f32,
}

impl ViewTransform {
    pub fn new(cell_size: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            cell_size,
        }
    }

    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Multiply zoom by `factor`, staying within [MIN_ZOOM, MAX_ZOOM]
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(ZOOM_IN_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(ZOOM_OUT_STEP);
    }

    /// Pan by a pixel delta. No bounds: the grid may leave the view entirely.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Convert a screen position to (col, row).
    /// `origin` is the top-left of the drawing surface in screen space.
    /// The result may lie outside the grid; callers validate it.
    pub fn screen_to_grid(&self, px: f32, py: f32, origin_x: f32, origin_y: f32) -> (i64, i64) {
        let scaled = self.cell_size * self.zoom;
        let col = ((px - origin_x - self.offset_x) / scaled).floor() as i64;
        let row = ((py - origin_y - self.offset_y) / scaled).floor() as i64;
        (col, row)
    }

    /// Screen position of a cell's top-left corner
    pub fn grid_to_screen(&self, col: i64, row: i64, origin_x: f32, origin_y: f32) -> (f32, f32) {
        let scaled = self.cell_size * self.zoom;
        let screen_x = origin_x + self.offset_x + col as f32 * scaled;
        let screen_y = origin_y + self.offset_y + row as f32 * scaled;
        (screen_x, screen_y)
    }

    /// Reset pan and zoom to default
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.offset_y = 0.0;
        self.zoom = 1.0;
    }
}
