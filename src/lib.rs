// Domain layer - grid, cells and seed patterns
pub mod domain;

// Application layer - view transform, input state machine, session, loop
pub mod application;

// Infrastructure layer - macroquad rendering, input polling, panel UI
pub mod ui;
pub mod rendering;
pub mod input;

pub mod config;

// Re-exports for convenience
pub use domain::{Cell, CellAddress, Grid, GridError, Pattern, presets};
pub use application::{
    Command, InputController, InputEvent, Mode, PointerButton, Propagation, ScrollDirection,
    Session, SimulationLoop, ViewTransform,
};
pub use config::{Config, ConfigError};
