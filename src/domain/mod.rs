mod cell;
mod grid;
mod patterns;

pub use cell::Cell;
pub use grid::{CellAddress, Grid, GridError};
pub use patterns::{Pattern, presets};
