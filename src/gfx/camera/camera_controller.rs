use log::debug;
use winit::{
    dpi::PhysicalPosition,
    event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta},
    keyboard::{KeyCode, PhysicalKey},
};

use super::fly_camera::{CameraMovement, FlyCamera};
use crate::config::ViewConfig;

/// What a held key asks the view to do this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    Move(CameraMovement),
    ZoomIn,
    ZoomOut,
    Orthographic,
    Perspective,
    Close,
}

impl ViewCommand {
    pub fn for_key(key: KeyCode) -> Option<Self> {
        let command = match key {
            KeyCode::KeyW => ViewCommand::Move(CameraMovement::Forward),
            KeyCode::KeyS => ViewCommand::Move(CameraMovement::Backward),
            KeyCode::KeyA => ViewCommand::Move(CameraMovement::Left),
            KeyCode::KeyD => ViewCommand::Move(CameraMovement::Right),
            KeyCode::KeyQ => ViewCommand::Move(CameraMovement::Up),
            KeyCode::KeyE => ViewCommand::Move(CameraMovement::Down),
            KeyCode::ArrowUp => ViewCommand::ZoomIn,
            KeyCode::ArrowDown => ViewCommand::ZoomOut,
            KeyCode::KeyO => ViewCommand::Orthographic,
            KeyCode::KeyP => ViewCommand::Perspective,
            KeyCode::Escape => ViewCommand::Close,
            _ => return None,
        };
        Some(command)
    }
}

/// Input accumulated between frames
#[derive(Debug, Default, Clone)]
pub struct InputState {
    /// Keys currently down, in press order
    held: Vec<KeyCode>,
    /// `None` until the first cursor position arrives
    last_cursor: Option<(f64, f64)>,
    close_requested: bool,
}

impl InputState {
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    pub fn held_keys(&self) -> &[KeyCode] {
        &self.held
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

pub struct CameraController {
    pub mouse_multiplier: f32,
    pub speed_step: f32,
    input: InputState,
}

impl CameraController {
    pub fn new(mouse_multiplier: f32, speed_step: f32) -> Self {
        Self {
            mouse_multiplier,
            speed_step,
            input: InputState::default(),
        }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(config.mouse_multiplier, config.speed_step)
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Raw mouse motion and wheel events
    pub fn process_events(&mut self, event: &DeviceEvent, camera: &mut FlyCamera) {
        match event {
            DeviceEvent::MouseWheel { delta } => {
                let scroll_amount = match delta {
                    MouseScrollDelta::LineDelta(_, scroll) => *scroll,
                    MouseScrollDelta::PixelDelta(PhysicalPosition { y: scroll, .. }) => {
                        *scroll as f32
                    }
                };
                camera.process_mouse_scroll(scroll_amount * self.speed_step);
                debug!("Movement speed now {}", camera.movement_speed);
            }
            DeviceEvent::MouseMotion { delta } => {
                // screen y grows downwards
                camera.process_mouse_movement(
                    delta.0 as f32 * self.mouse_multiplier,
                    -delta.1 as f32 * self.mouse_multiplier,
                );
            }
            _ => (),
        }
    }

    /// Absolute cursor positions, as from `WindowEvent::CursorMoved`
    ///
    /// The first position only seeds the tracker so the view does not jump.
    pub fn cursor_moved(&mut self, x: f64, y: f64, camera: &mut FlyCamera) {
        if let Some((last_x, last_y)) = self.input.last_cursor {
            let x_offset = (x - last_x) as f32 * self.mouse_multiplier;
            let y_offset = (last_y - y) as f32 * self.mouse_multiplier;
            camera.process_mouse_movement(x_offset, y_offset);
        }
        self.input.last_cursor = Some((x, y));
    }

    pub fn process_keyed_events(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key) = event.physical_key {
            self.key_changed(key, event.state == ElementState::Pressed);
        }
    }

    /// Records a key going down or up
    pub fn key_changed(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            if !self.input.held.contains(&key) {
                self.input.held.push(key);
            }
            if key == KeyCode::Escape {
                self.input.close_requested = true;
            }
        } else {
            self.input.held.retain(|held| *held != key);
        }
    }

    /// Commands for every held key, polled once per frame
    pub fn frame_commands(&self) -> Vec<ViewCommand> {
        self.input
            .held
            .iter()
            .filter_map(|key| ViewCommand::for_key(*key))
            .collect()
    }

    pub fn close_requested(&self) -> bool {
        self.input.close_requested
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_poll_in_press_order() {
        let mut controller = CameraController::default();
        controller.key_changed(KeyCode::KeyW, true);
        controller.key_changed(KeyCode::KeyD, true);
        controller.key_changed(KeyCode::KeyW, true);
        controller.key_changed(KeyCode::KeyZ, true);

        assert_eq!(
            controller.frame_commands(),
            vec![
                ViewCommand::Move(CameraMovement::Forward),
                ViewCommand::Move(CameraMovement::Right)
            ]
        );

        controller.key_changed(KeyCode::KeyW, false);
        assert_eq!(
            controller.frame_commands(),
            vec![ViewCommand::Move(CameraMovement::Right)]
        );
        assert!(controller.input().is_held(KeyCode::KeyZ));
    }

    #[test]
    fn test_escape_latches_close() {
        let mut controller = CameraController::default();
        assert!(!controller.close_requested());
        controller.key_changed(KeyCode::Escape, true);
        controller.key_changed(KeyCode::Escape, false);
        assert!(controller.close_requested());
    }

    #[test]
    fn test_first_cursor_position_does_not_turn() {
        let mut controller = CameraController::default();
        let mut camera = FlyCamera::default();
        let (yaw, pitch) = (camera.yaw, camera.pitch);

        controller.cursor_moved(500.0, 400.0, &mut camera);
        assert_eq!((camera.yaw, camera.pitch), (yaw, pitch));

        // 4 px right, 2 px up: 2.5 multiplier then 0.1 sensitivity
        controller.cursor_moved(504.0, 398.0, &mut camera);
        assert!((camera.yaw - (yaw + 1.0)).abs() < 1e-4);
        assert!((camera.pitch - (pitch + 0.5)).abs() < 1e-4);
    }

    #[test]
    fn test_wheel_scales_speed() {
        let mut controller = CameraController::default();
        let mut camera = FlyCamera::default();
        controller.process_events(
            &DeviceEvent::MouseWheel {
                delta: MouseScrollDelta::LineDelta(0.0, 3.0),
            },
            &mut camera,
        );
        assert_eq!(camera.movement_speed, 4.0);
    }
}
