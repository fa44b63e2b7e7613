use std::fmt;
use std::time::Duration;

use clap::Parser;

use crate::domain::{Pattern, presets};
use crate::ui::CELL_SIZE;

pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;
pub const DEFAULT_TICK_MS: u64 = 100;

/// Interactive Game of Life on a wrapping grid.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "life_canvas", version, about)]
pub struct Config {
    /// Canvas width in pixels. Columns = width / cell size.
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,
    /// Canvas height in pixels. Rows = height / cell size.
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,
    /// Milliseconds between generations while running.
    #[arg(
        long = "tick-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    pub tick_ms: u64,
    /// Start paused instead of running.
    #[arg(long)]
    pub paused: bool,
    /// Preset stamped at the grid centre on startup (e.g. glider, pulsar, glider-gun).
    #[arg(long, value_name = "NAME")]
    pub pattern: Option<String>,
    /// Live-cell probability for the Random command; also fills the grid on startup when given.
    #[arg(long, value_name = "FRACTION")]
    pub density: Option<f64>,
    /// Log filter used when RUST_LOG is not set.
    #[arg(long = "log-level", value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    CanvasTooSmall { width: u32, height: u32 },
    InvalidDensity(f64),
    UnknownPattern(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanvasTooSmall { width, height } => write!(
                f,
                "canvas {width}x{height} cannot hold a single {CELL_SIZE}px cell"
            ),
            Self::InvalidDensity(density) => {
                write!(f, "density {density} must be greater than 0 and at most 1")
            }
            Self::UnknownPattern(name) => {
                let known: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
                write!(f, "unknown pattern `{name}` (known: {})", known.join(", "))
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            tick_ms: DEFAULT_TICK_MS,
            paused: false,
            pattern: None,
            density: None,
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Check values clap cannot express as ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (cols, rows) = self.grid_dimensions();
        if cols == 0 || rows == 0 {
            return Err(ConfigError::CanvasTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if let Some(density) = self.density {
            if !(density > 0.0 && density <= 1.0) {
                return Err(ConfigError::InvalidDensity(density));
            }
        }
        self.seed_pattern()?;
        Ok(())
    }

    /// (cols, rows) that fit the canvas
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (
            (self.width as f32 / CELL_SIZE).floor() as usize,
            (self.height as f32 / CELL_SIZE).floor() as usize,
        )
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// The requested startup pattern, if any
    pub fn seed_pattern(&self) -> Result<Option<Pattern>, ConfigError> {
        self.pattern
            .as_deref()
            .map(|name| {
                presets::by_name(name).ok_or_else(|| ConfigError::UnknownPattern(name.to_owned()))
            })
            .transpose()
    }
}
