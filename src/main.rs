use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use life_canvas::{
    Config, Session, SimulationLoop,
    input::{self, PointerFrame, PointerTracker},
    rendering::{self, MacroquadSurface},
    ui,
};

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Parsed once; both the window setup and the main loop read it
fn config() -> &'static Config {
    CONFIG.get_or_init(Config::parse)
}

fn window_conf() -> Conf {
    let config = config();
    let (width, height) = ui::window_size(config.width as f32, config.height as f32);
    Conf {
        window_title: "Life Canvas".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config();
    init_tracing(&config.log_level);

    if let Err(err) = run(config).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> anyhow::Result<()> {
    config.validate().context("invalid configuration")?;

    let (cols, rows) = config.grid_dimensions();
    let canvas = ui::canvas_rect(config.width as f32, config.height as f32);
    let origin = (canvas.0, canvas.1);
    let panel_x = ui::panel_x(config.width as f32);

    let mut session = Session::new(cols, rows, ui::CELL_SIZE, origin, !config.paused);
    if let Some(density) = config.density {
        session = session.with_density(density);
        session.randomize();
    }
    if let Some(pattern) = config.seed_pattern()? {
        session.seed_pattern(&pattern);
    }

    let mut surface = MacroquadSurface::new(origin, canvas.2, canvas.3);
    let mut tracker = PointerTracker::new();
    let mut sim = SimulationLoop::new(config.tick_interval());

    info!(cols, rows, tick = ?sim.interval(), "session started");

    loop {
        clear_background(BLACK);
        let frame = PointerFrame::sample(canvas);

        let buttons = ui::create_buttons(session.labels(), config.width as f32);
        let commands = input::button_commands(&buttons, &frame)
            .into_iter()
            .chain(input::keyboard_commands());
        for command in commands {
            session.command(command, &mut surface);
        }

        for event in tracker.events(frame) {
            session.handle_event(event);
        }

        sim.run_frame(get_frame_time(), &mut session, &mut surface);

        rendering::draw_canvas_frame(canvas);
        let buttons = ui::create_buttons(session.labels(), config.width as f32);
        rendering::draw_controls(&session, &buttons, panel_x, frame.pos);

        next_frame().await;
    }
}
