#[cfg(feature = "gui")]
use sdl2::event::{Event, WindowEvent};
#[cfg(feature = "gui")]
use sdl2::keyboard::Keycode;

use crate::direction::Direction;
use crate::game::TickInput;

/// Tracks held steering keys and touch points between frames.
pub struct InputHandler {
    // Most recent press last; it wins over earlier ones still held.
    pressed_directions: Vec<Direction>,
    // Finger id and x as a fraction of the window width, oldest first.
    touch_targets: Vec<(i64, f32)>,
    restart_requested: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        InputHandler {
            pressed_directions: Vec::new(),
            touch_targets: Vec::new(),
            restart_requested: false,
        }
    }

    pub fn press(&mut self, direction: Direction) {
        if !self.pressed_directions.contains(&direction) {
            self.pressed_directions.push(direction);
        }
    }

    pub fn release(&mut self, direction: Direction) {
        self.pressed_directions.retain(|d| *d != direction);
    }

    pub fn touch(&mut self, finger: i64, fraction_x: f32) {
        let fraction_x = fraction_x.clamp(0.0, 1.0);
        match self.touch_targets.iter_mut().find(|(id, _)| *id == finger) {
            Some(target) => target.1 = fraction_x,
            None => self.touch_targets.push((finger, fraction_x)),
        }
    }

    pub fn lift(&mut self, finger: i64) {
        let before = self.touch_targets.len();
        self.touch_targets.retain(|(id, _)| *id != finger);
        if self.touch_targets.len() == before {
            log::debug!("Ignoring lift of unknown finger {}", finger);
        }
    }

    pub fn request_restart(&mut self) {
        self.restart_requested = true;
    }

    pub fn current_direction(&self) -> Option<Direction> {
        self.pressed_directions.last().copied()
    }

    pub fn current_touch_target(&self) -> Option<f32> {
        self.touch_targets.last().map(|(_, x)| *x)
    }

    /// Input for the next simulation tick. One-shot requests are consumed.
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            steer: self.current_direction(),
            target_x_fraction: self.current_touch_target(),
            restart: std::mem::take(&mut self.restart_requested),
        }
    }

    /// Forget held keys and touches, e.g. after focus loss.
    pub fn clear(&mut self) {
        self.pressed_directions.clear();
        self.touch_targets.clear();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Actions the game loop acts on, beyond steering.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    None,
    Restart,
    TogglePause,
    Resize(u32, u32),
    Exit,
}

#[cfg(feature = "gui")]
pub struct KeyBindings {
    pub left: Vec<Keycode>,
    pub right: Vec<Keycode>,
    pub restart: Vec<Keycode>,
    pub pause: Vec<Keycode>,
    pub quit: Vec<Keycode>,
}

#[cfg(feature = "gui")]
impl KeyBindings {
    pub fn from_settings(controls: &crate::config::ControlSettings) -> anyhow::Result<Self> {
        fn resolve(names: &[String]) -> anyhow::Result<Vec<Keycode>> {
            names
                .iter()
                .map(|name| {
                    Keycode::from_name(name)
                        .ok_or_else(|| anyhow::anyhow!("unknown key name {:?} in [controls]", name))
                })
                .collect()
        }

        Ok(KeyBindings {
            left: resolve(&controls.left)?,
            right: resolve(&controls.right)?,
            restart: resolve(&controls.restart)?,
            pause: resolve(&controls.pause)?,
            quit: resolve(&controls.quit)?,
        })
    }

    /// Labels built from the resolved keycodes, so they use SDL's own names.
    pub fn labels(&self) -> ControlLabels {
        let join = |keys: &[Keycode]| {
            let names: Vec<String> = keys.iter().map(|key| key.name()).collect();
            join_keys(names.iter().map(String::as_str))
        };
        ControlLabels {
            left: join(&self.left),
            right: join(&self.right),
            restart: join(&self.restart),
            pause: join(&self.pause),
            quit: join(&self.quit),
        }
    }

    fn steering(&self, keycode: Keycode) -> Option<Direction> {
        if self.left.contains(&keycode) {
            Some(Direction::Left)
        } else if self.right.contains(&keycode) {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

#[cfg(feature = "gui")]
impl InputHandler {
    pub fn process_event(&mut self, event: &Event, bindings: &KeyBindings) -> InputAction {
        match event {
            Event::Quit { .. } => InputAction::Exit,
            Event::Window {
                win_event: WindowEvent::Resized(width, height),
                ..
            } => InputAction::Resize((*width).max(1) as u32, (*height).max(1) as u32),
            Event::Window {
                win_event: WindowEvent::FocusLost,
                ..
            } => {
                self.clear();
                InputAction::None
            }
            Event::KeyDown {
                keycode: Some(keycode),
                repeat,
                ..
            } => {
                if let Some(direction) = bindings.steering(*keycode) {
                    self.press(direction);
                    return InputAction::None;
                }
                if *repeat {
                    return InputAction::None;
                }
                if bindings.quit.contains(keycode) {
                    InputAction::Exit
                } else if bindings.pause.contains(keycode) {
                    InputAction::TogglePause
                } else if bindings.restart.contains(keycode) {
                    self.request_restart();
                    InputAction::Restart
                } else {
                    InputAction::None
                }
            }
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => {
                if let Some(direction) = bindings.steering(*keycode) {
                    self.release(direction);
                }
                InputAction::None
            }
            Event::FingerDown { finger_id, x, .. } | Event::FingerMotion { finger_id, x, .. } => {
                self.touch(*finger_id, *x);
                InputAction::None
            }
            Event::FingerUp { finger_id, .. } => {
                self.lift(*finger_id);
                InputAction::None
            }
            _ => InputAction::None,
        }
    }
}

/// Human-readable key names for each action, as shown in the help box and HUD.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlLabels {
    pub left: String,
    pub right: String,
    pub restart: String,
    pub pause: String,
    pub quit: String,
}

impl ControlLabels {
    pub fn from_names(controls: &crate::config::ControlSettings) -> Self {
        let join = |names: &[String]| join_keys(names.iter().map(String::as_str));
        ControlLabels {
            left: join(&controls.left),
            right: join(&controls.right),
            restart: join(&controls.restart),
            pause: join(&controls.pause),
            quit: join(&controls.quit),
        }
    }

    /// Rows of the controls box, without the frame.
    pub fn rows(&self) -> Vec<(String, &'static str)> {
        vec![
            (self.left.clone(), "Steer left"),
            (self.right.clone(), "Steer right"),
            ("Touch".to_string(), "Drive to finger"),
            (self.restart.clone(), "Restart after crash"),
            (self.pause.clone(), "Toggle pause"),
            (self.quit.clone(), "Quit"),
        ]
    }

    pub fn restart_hint(&self) -> String {
        format!("Press {} to restart", self.restart)
    }
}

fn join_keys<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        "(unbound)".to_string()
    } else {
        names.join(" / ")
    }
}

pub fn print_controls(labels: &ControlLabels) {
    let rows = labels.rows();
    let key_width = rows.iter().map(|(keys, _)| keys.chars().count()).max().unwrap_or(0).max(13);
    let action_width = 20;
    let inner = key_width + action_width + 5;

    println!("╔{}╗", "═".repeat(inner));
    println!("║{:^inner$}║", "GAME CONTROLS");
    println!("╠{}╣", "═".repeat(inner));
    for (keys, action) in rows {
        println!("║ {:<key_width$} │ {:<action_width$} ║", keys, action);
    }
    println!("╚{}╝", "═".repeat(inner));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_pressed_direction_wins() {
        let mut input = InputHandler::new();
        input.press(Direction::Left);
        input.press(Direction::Right);
        assert_eq!(input.current_direction(), Some(Direction::Right));
        input.release(Direction::Right);
        assert_eq!(input.current_direction(), Some(Direction::Left));
        input.release(Direction::Left);
        assert_eq!(input.current_direction(), None);
    }

    #[test]
    fn repeated_press_does_not_stack() {
        let mut input = InputHandler::new();
        input.press(Direction::Left);
        input.press(Direction::Left);
        input.release(Direction::Left);
        assert_eq!(input.current_direction(), None);
    }

    #[test]
    fn latest_finger_is_the_target() {
        let mut input = InputHandler::new();
        input.touch(1, 0.2);
        input.touch(2, 0.9);
        input.touch(1, 0.3);
        assert_eq!(input.current_touch_target(), Some(0.9));
        input.lift(2);
        assert_eq!(input.current_touch_target(), Some(0.3));
        input.lift(7);
        input.lift(1);
        assert_eq!(input.current_touch_target(), None);
    }

    #[test]
    fn restart_is_one_shot() {
        let mut input = InputHandler::new();
        input.request_restart();
        assert!(input.take_tick_input().restart);
        assert!(!input.take_tick_input().restart);
    }

    #[test]
    fn labels_follow_rebound_keys() {
        let controls = crate::config::ControlSettings {
            restart: vec!["R".to_string()],
            pause: Vec::new(),
            ..crate::config::ControlSettings::default()
        };
        let labels = ControlLabels::from_names(&controls);
        assert_eq!(labels.left, "Left / A");
        assert_eq!(labels.restart_hint(), "Press R to restart");
        assert_eq!(labels.pause, "(unbound)");
        assert!(labels.rows().iter().any(|(keys, action)| keys == "R" && *action == "Restart after crash"));
    }
}
