use std::time::Duration;

use super::Session;
use crate::rendering::Surface;

/// Fixed-cadence driver. Each frame it either runs a full tick
/// (step if running, then render) or just re-renders.
#[derive(Debug, Clone)]
pub struct SimulationLoop {
    interval: f32,
    elapsed: f32,
}

impl SimulationLoop {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32(),
            elapsed: 0.0,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs_f32(self.interval)
    }

    /// Accumulate frame time; true when a tick is due.
    /// Surplus time is dropped, so a slow frame never triggers a burst.
    pub fn advance(&mut self, delta_time: f32) -> bool {
        self.elapsed += delta_time;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    /// Drive one host frame. Rendering happens every frame regardless of
    /// run state so edits made while paused show up immediately.
    pub fn run_frame(&mut self, delta_time: f32, session: &mut Session, surface: &mut dyn Surface) {
        if self.advance(delta_time) {
            session.tick(surface);
        } else {
            session.render(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use crate::rendering::RecordingSurface;

    #[test]
    fn test_advance_fires_on_interval() {
        let mut sim = SimulationLoop::new(Duration::from_millis(100));
        assert!(!sim.advance(0.05));
        assert!(sim.advance(0.06));
        assert!(!sim.advance(0.01));
    }

    #[test]
    fn test_long_frame_yields_single_tick() {
        let mut sim = SimulationLoop::new(Duration::from_millis(100));
        assert!(sim.advance(1.0));
        assert!(!sim.advance(0.0));
    }

    #[test]
    fn test_run_frame_steps_only_on_due_frames() {
        let mut sim = SimulationLoop::new(Duration::from_millis(100));
        let mut session = Session::new(10, 10, 10.0, (0.0, 0.0), true);
        session.seed_pattern(&presets::blinker());
        let mut surface = RecordingSurface::new(100.0, 100.0);

        for _ in 0..3 {
            sim.run_frame(0.04, &mut session, &mut surface);
        }
        assert_eq!(session.generation(), 1);
        assert_eq!(surface.frames(), 3);
    }

    #[test]
    fn test_paused_session_renders_but_never_steps() {
        let mut sim = SimulationLoop::new(Duration::from_millis(100));
        let mut session = Session::new(10, 10, 10.0, (0.0, 0.0), false);
        let mut surface = RecordingSurface::new(100.0, 100.0);
        for _ in 0..10 {
            sim.run_frame(0.1, &mut session, &mut surface);
        }
        assert_eq!(session.generation(), 0);
        assert_eq!(surface.frames(), 10);
    }
}
