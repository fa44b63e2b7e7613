use tracing::{debug, info, trace};

use super::{Command, InputController, InputEvent, Propagation, ViewTransform};
use crate::domain::{Grid, Pattern};
use crate::rendering::{self, Surface};
use crate::ui::Labels;

/// Session owns all simulation state for one window.
/// All mutation happens through its methods on the loop's thread.
pub struct Session {
    grid: Grid,
    view: ViewTransform,
    controller: InputController,
    labels: Labels,
    generation: u64,
    density: f64,
}

impl Session {
    /// Create an empty session. `origin` is the canvas top-left on screen.
    pub fn new(
        cols: usize,
        rows: usize,
        cell_size: f32,
        origin: (f32, f32),
        running: bool,
    ) -> Self {
        let controller = InputController::new(origin, running);
        let labels = Labels::new(running, controller.mode());
        Self {
            grid: Grid::new(cols, rows),
            view: ViewTransform::new(cell_size),
            controller,
            labels,
            generation: 0,
            density: 0.3,
        }
    }

    /// Fill probability used by `Command::Randomize`, clamped to [0, 1]
    /// with NaN treated as 0
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stamp a pattern at the grid centre
    pub fn seed_pattern(&mut self, pattern: &Pattern) {
        pattern.place_centered(&mut self.grid);
        debug!(pattern = pattern.name, description = pattern.description, "pattern placed");
    }

    /// Replace the grid contents with random cells at the session density
    pub fn randomize(&mut self) {
        self.grid.randomize(&mut rand::rng(), self.density);
        self.generation = 0;
        info!(population = self.grid.population(), "grid randomized");
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Propagation {
        let propagation = self.controller.handle_event(event, &mut self.grid, &mut self.view);
        self.labels.set_mode(self.controller.mode());
        propagation
    }

    /// Execute a panel or keyboard command. `Step` renders straight away.
    pub fn command(&mut self, command: Command, surface: &mut dyn Surface) {
        match command {
            Command::Clear => {
                self.grid = self.grid.cleared();
                self.generation = 0;
                info!("grid cleared");
            }
            Command::TogglePause => {
                self.controller.toggle_running();
                let running = self.controller.is_running();
                self.labels.set_running(running);
                info!(running, "simulation {}", if running { "resumed" } else { "paused" });
            }
            Command::ToggleMode => {
                self.controller.toggle_mode();
                self.labels.set_mode(self.controller.mode());
            }
            Command::Step => {
                if self.controller.is_running() {
                    debug!("step ignored while running");
                    return;
                }
                self.advance_generation();
                self.render(surface);
                info!(generation = self.generation, "single step");
            }
            Command::Randomize => self.randomize(),
            Command::ResetView => {
                self.view.reset();
                debug!("view reset");
            }
        }
    }

    /// One loop tick: step if running, then always render
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        if self.controller.is_running() {
            self.advance_generation();
        }
        self.render(surface);
    }

    pub fn render(&mut self, surface: &mut dyn Surface) {
        rendering::render(&self.grid, &self.view, surface, &mut self.labels);
    }

    fn advance_generation(&mut self) {
        self.grid = self.grid.step();
        self.generation += 1;
        trace!(generation = self.generation, population = self.grid.population(), "generation");
    }
}
