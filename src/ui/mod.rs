mod button;

pub use button::Button;

use crate::application::{Command, Mode};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const CELL_SIZE: f32 = 10.0;
/// Gap between the window edge and the canvas
pub const CANVAS_MARGIN: f32 = 10.0;

pub const PAUSE_LABEL: &str = "Pause";
pub const RESUME_LABEL: &str = "Resume";
pub const MODE_DRAW_LABEL: &str = "Mode: Draw";
pub const MODE_MOVE_LABEL: &str = "Mode: Move";

/// Text shown by the control panel. Plain strings so it can be
/// checked without a window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    pub pause: String,
    pub mode: String,
    pub population: String,
}

impl Labels {
    pub fn new(running: bool, mode: Mode) -> Self {
        let mut labels = Self {
            pause: String::new(),
            mode: String::new(),
            population: String::new(),
        };
        labels.set_running(running);
        labels.set_mode(mode);
        labels.set_population(0);
        labels
    }

    /// The pause button names the action it will perform
    pub fn set_running(&mut self, running: bool) {
        self.pause = if running { PAUSE_LABEL } else { RESUME_LABEL }.to_owned();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = match mode {
            Mode::Draw => MODE_DRAW_LABEL,
            Mode::Move => MODE_MOVE_LABEL,
        }
        .to_owned();
    }

    pub fn set_population(&mut self, population: usize) {
        self.population = format!("Population: {population}");
    }
}

/// Canvas rectangle in screen coordinates: (x, y, width, height)
pub fn canvas_rect(canvas_width: f32, canvas_height: f32) -> (f32, f32, f32, f32) {
    (CANVAS_MARGIN, CANVAS_MARGIN, canvas_width, canvas_height)
}

/// X position where the panel starts (right of the canvas)
pub fn panel_x(canvas_width: f32) -> f32 {
    canvas_width + CANVAS_MARGIN * 2.0
}

/// Window size that fits the canvas plus the panel
pub fn window_size(canvas_width: f32, canvas_height: f32) -> (f32, f32) {
    (
        panel_x(canvas_width) + PANEL_WIDTH,
        canvas_height + CANVAS_MARGIN * 2.0,
    )
}

/// Panel buttons, top to bottom
pub fn create_buttons(labels: &Labels, canvas_width: f32) -> Vec<Button> {
    let px = panel_x(canvas_width);
    let width = PANEL_WIDTH - CANVAS_MARGIN;
    let rows = [
        ("Clear", Command::Clear),
        (labels.pause.as_str(), Command::TogglePause),
        (labels.mode.as_str(), Command::ToggleMode),
        ("Step", Command::Step),
        ("Random", Command::Randomize),
    ];
    rows.into_iter()
        .enumerate()
        .map(|(i, (text, command))| {
            let y = CANVAS_MARGIN + i as f32 * (BUTTON_HEIGHT + 10.0);
            Button::new((px, y, width, BUTTON_HEIGHT), text, command)
        })
        .collect()
}
