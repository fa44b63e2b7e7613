//! Translates macroquad's polled mouse and keyboard state into
//! [`InputEvent`]s and [`Command`]s.
//!
//! macroquad never shows a context menu or scrolls the page, so the
//! `Propagation` returned by the session needs no further handling here.

use macroquad::prelude::*;

use crate::application::{Command, InputEvent, PointerButton, ScrollDirection};
use crate::ui::Button;

/// Mouse state sampled once per frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerFrame {
    pub pos: (f32, f32),
    pub inside: bool,
    pub pressed_primary: bool,
    pub pressed_secondary: bool,
    pub pressed_auxiliary: bool,
    pub released: bool,
    pub wheel: f32,
}

impl PointerFrame {
    /// Read the current mouse state relative to the canvas rectangle
    pub fn sample(canvas: (f32, f32, f32, f32)) -> Self {
        let pos = mouse_position();
        let (x, y, w, h) = canvas;
        Self {
            pos,
            inside: pos.0 >= x && pos.0 < x + w && pos.1 >= y && pos.1 < y + h,
            pressed_primary: is_mouse_button_pressed(MouseButton::Left),
            pressed_secondary: is_mouse_button_pressed(MouseButton::Right),
            pressed_auxiliary: is_mouse_button_pressed(MouseButton::Middle),
            released: is_mouse_button_released(MouseButton::Left)
                || is_mouse_button_released(MouseButton::Right)
                || is_mouse_button_released(MouseButton::Middle),
            wheel: mouse_wheel().1,
        }
    }
}

/// Turns per-frame samples into discrete pointer events.
/// Replaces the global last-position tracking of a polled input loop.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_pos: Option<(f32, f32)>,
    inside: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&mut self, frame: PointerFrame) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let (x, y) = frame.pos;

        if self.inside && !frame.inside {
            events.push(InputEvent::PointerLeave);
        }

        if frame.inside {
            if self.last_pos.is_some_and(|last| last != frame.pos) {
                events.push(InputEvent::PointerMove { x, y });
            }

            let presses = [
                (frame.pressed_primary, PointerButton::Primary),
                (frame.pressed_secondary, PointerButton::Secondary),
                (frame.pressed_auxiliary, PointerButton::Auxiliary),
            ];
            events.extend(
                presses
                    .into_iter()
                    .filter(|(pressed, _)| *pressed)
                    .map(|(_, button)| InputEvent::PointerDown { button, x, y }),
            );
            if frame.pressed_secondary {
                events.push(InputEvent::ContextMenu);
            }

            if frame.released {
                events.push(InputEvent::PointerUp);
            }

            if frame.wheel > 0.0 {
                events.push(InputEvent::Wheel(ScrollDirection::Up));
            } else if frame.wheel < 0.0 {
                events.push(InputEvent::Wheel(ScrollDirection::Down));
            }
        }

        self.inside = frame.inside;
        self.last_pos = Some(frame.pos);
        events
    }
}

/// Keyboard shortcuts pressed this frame
pub fn keyboard_commands() -> Vec<Command> {
    const SHORTCUTS: [(KeyCode, Command); 7] = [
        (KeyCode::Space, Command::TogglePause),
        (KeyCode::C, Command::Clear),
        (KeyCode::M, Command::ToggleMode),
        (KeyCode::S, Command::Step),
        (KeyCode::Right, Command::Step),
        (KeyCode::R, Command::Randomize),
        (KeyCode::H, Command::ResetView),
    ];

    SHORTCUTS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect()
}

/// Commands from panel buttons the primary button went down on this frame
pub fn button_commands(buttons: &[Button], frame: &PointerFrame) -> Vec<Command> {
    buttons
        .iter()
        .filter_map(|btn| btn.clicked(frame.pos, frame.pressed_primary))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Mode;
    use crate::ui::{self, Labels};

    fn at(x: f32, y: f32) -> PointerFrame {
        PointerFrame { pos: (x, y), inside: true, ..Default::default() }
    }

    #[test]
    fn test_panel_click_issues_button_command() {
        let labels = Labels::new(false, Mode::Draw);
        let buttons = ui::create_buttons(&labels, 800.0);
        let resume = &buttons[1];
        let step = &buttons[3];
        assert_eq!(resume.text(), "Resume");

        let click_at = |(x, y, w, h): (f32, f32, f32, f32)| PointerFrame {
            pos: (x + w / 2.0, y + h / 2.0),
            pressed_primary: true,
            ..Default::default()
        };
        let step_center = (ui::panel_x(800.0), 10.0 + 3.0 * 50.0, 170.0, 40.0);
        assert_eq!(step.clicked(click_at(step_center).pos, true), Some(Command::Step));
        assert_eq!(button_commands(&buttons, &click_at(step_center)), vec![Command::Step]);

        let resume_center = (ui::panel_x(800.0), 60.0, 170.0, 40.0);
        assert_eq!(
            button_commands(&buttons, &click_at(resume_center)),
            vec![Command::TogglePause]
        );
    }

    #[test]
    fn test_hover_without_press_issues_nothing() {
        let buttons = ui::create_buttons(&Labels::new(true, Mode::Draw), 800.0);
        let hover = PointerFrame { pos: (ui::panel_x(800.0) + 5.0, 15.0), ..Default::default() };
        assert!(button_commands(&buttons, &hover).is_empty());
    }

    #[test]
    fn test_canvas_click_issues_no_button_command() {
        let buttons = ui::create_buttons(&Labels::new(true, Mode::Draw), 800.0);
        let frame = PointerFrame { pressed_primary: true, ..at(100.0, 100.0) };
        assert!(button_commands(&buttons, &frame).is_empty());
    }

    #[test]
    fn test_first_sample_emits_no_move() {
        let mut tracker = PointerTracker::new();
        assert!(tracker.events(at(5.0, 5.0)).is_empty());
    }

    #[test]
    fn test_move_only_when_position_changes() {
        let mut tracker = PointerTracker::new();
        tracker.events(at(5.0, 5.0));
        assert!(tracker.events(at(5.0, 5.0)).is_empty());
        assert_eq!(
            tracker.events(at(6.0, 5.0)),
            vec![InputEvent::PointerMove { x: 6.0, y: 5.0 }]
        );
    }

    #[test]
    fn test_press_and_release() {
        let mut tracker = PointerTracker::new();
        let down = PointerFrame { pressed_primary: true, ..at(3.0, 4.0) };
        assert_eq!(
            tracker.events(down),
            vec![InputEvent::PointerDown { button: PointerButton::Primary, x: 3.0, y: 4.0 }]
        );
        let up = PointerFrame { released: true, ..at(3.0, 4.0) };
        assert_eq!(tracker.events(up), vec![InputEvent::PointerUp]);
    }

    #[test]
    fn test_secondary_press_requests_context_menu() {
        let mut tracker = PointerTracker::new();
        let events = tracker.events(PointerFrame { pressed_secondary: true, ..at(1.0, 1.0) });
        assert_eq!(events.last(), Some(&InputEvent::ContextMenu));
    }

    #[test]
    fn test_leaving_canvas() {
        let mut tracker = PointerTracker::new();
        tracker.events(at(5.0, 5.0));
        let outside = PointerFrame { pos: (900.0, 5.0), inside: false, ..Default::default() };
        assert_eq!(tracker.events(outside), vec![InputEvent::PointerLeave]);
        assert!(tracker.events(outside).is_empty());
    }

    #[test]
    fn test_wheel_direction() {
        let mut tracker = PointerTracker::new();
        assert_eq!(
            tracker.events(PointerFrame { wheel: 1.0, ..at(0.0, 0.0) }),
            vec![InputEvent::Wheel(ScrollDirection::Up)]
        );
        assert_eq!(
            tracker.events(PointerFrame { wheel: -3.0, ..at(0.0, 0.0) }),
            vec![InputEvent::Wheel(ScrollDirection::Down)]
        );
    }
}
