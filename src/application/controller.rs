//! Pointer and command handling as an explicit state machine.
//!
//! Input arrives as [`InputEvent`] messages so the controller can be driven
//! by the window loop or directly from tests.

use tracing::debug;

use super::ViewTransform;
use crate::domain::{CellAddress, Grid};

/// What a primary-button drag does
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Draw,
    Move,
}

impl Mode {
    pub const fn toggled(self) -> Self {
        match self {
            Mode::Draw => Mode::Move,
            Mode::Move => Mode::Draw,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Away from the user, zooms in
    Up,
    /// Towards the user, zooms out
    Down,
}

/// Pointer input in screen coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { button: PointerButton, x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    PointerLeave,
    Wheel(ScrollDirection),
    ContextMenu,
}

/// Commands issued from buttons or keyboard shortcuts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Clear,
    TogglePause,
    ToggleMode,
    Step,
    Randomize,
    ResetView,
}

/// Whether the host should still run its native handling for an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    PreventDefault,
}

/// Per-session interaction flags. Gesture fields reset on pointer-up/leave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionState {
    pub mode: Mode,
    pub running: bool,
    pub drawing: bool,
    pub moving: bool,
    pub last_toggled: Option<CellAddress>,
    pub last_pointer: Option<(f32, f32)>,
}

impl InteractionState {
    fn end_gesture(&mut self) {
        self.drawing = false;
        self.moving = false;
        self.last_toggled = None;
        self.last_pointer = None;
    }
}

pub struct InputController {
    state: InteractionState,
    origin: (f32, f32),
}

impl InputController {
    /// `origin` is the canvas top-left in screen coordinates
    pub fn new(origin: (f32, f32), running: bool) -> Self {
        Self {
            state: InteractionState {
                mode: Mode::Draw,
                running,
                drawing: false,
                moving: false,
                last_toggled: None,
                last_pointer: None,
            },
            origin,
        }
    }

    pub const fn state(&self) -> &InteractionState {
        &self.state
    }

    pub const fn mode(&self) -> Mode {
        self.state.mode
    }

    pub const fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn toggle_mode(&mut self) {
        self.state.mode = self.state.mode.toggled();
        debug!(mode = ?self.state.mode, "mode switched");
    }

    pub fn toggle_running(&mut self) {
        self.state.running = !self.state.running;
    }

    /// Feed one input event through the state machine
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        grid: &mut Grid,
        view: &mut ViewTransform,
    ) -> Propagation {
        match event {
            InputEvent::PointerDown { button: PointerButton::Primary, x, y } => {
                match self.state.mode {
                    Mode::Draw => {
                        self.state.drawing = true;
                        self.toggle_at(x, y, grid, view);
                    }
                    Mode::Move => {
                        self.state.moving = true;
                        self.state.last_pointer = Some((x, y));
                    }
                }
                Propagation::Continue
            }
            InputEvent::PointerDown { button: PointerButton::Secondary, .. } => {
                self.toggle_mode();
                Propagation::PreventDefault
            }
            InputEvent::PointerDown {
                button: PointerButton::Auxiliary,
                ..
            } => Propagation::Continue,
            InputEvent::PointerMove { x, y } => {
                if self.state.drawing {
                    self.toggle_at(x, y, grid, view);
                } else if self.state.moving {
                    if let Some((last_x, last_y)) = self.state.last_pointer {
                        view.pan(x - last_x, y - last_y);
                    }
                    self.state.last_pointer = Some((x, y));
                }
                Propagation::Continue
            }
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                self.state.end_gesture();
                Propagation::Continue
            }
            InputEvent::Wheel(direction) => {
                match direction {
                    ScrollDirection::Up => view.zoom_in(),
                    ScrollDirection::Down => view.zoom_out(),
                }
                debug!(zoom = view.zoom(), "zoom changed");
                Propagation::PreventDefault
            }
            InputEvent::ContextMenu => Propagation::PreventDefault,
        }
    }

    /// Toggle the cell under the pointer unless it is the one toggled last
    /// in this drag. Only the most recent cell is remembered.
    fn toggle_at(&mut self, x: f32, y: f32, grid: &mut Grid, view: &ViewTransform) {
        let (col, row) = view.screen_to_grid(x, y, self.origin.0, self.origin.1);
        let Some(addr) = grid.address(col, row) else {
            return;
        };
        if self.state.last_toggled == Some(addr) {
            return;
        }
        grid.toggle(addr);
        self.state.last_toggled = Some(addr);
    }
}
