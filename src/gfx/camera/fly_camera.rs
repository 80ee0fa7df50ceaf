use cgmath::*;

use crate::config::ViewConfig;

/// Directions the camera can be moved in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Free-fly camera driven by keyboard movement and mouse look
///
/// Angles are in degrees. `yaw` is measured from +X towards +Z, so a yaw of
/// -90 looks down -Z.
#[derive(Debug, Clone, Copy)]
pub struct FlyCamera {
    pub position: Vector3<f32>,
    pub front: Vector3<f32>,
    pub up: Vector3<f32>,
    pub right: Vector3<f32>,
    pub world_up: Vector3<f32>,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in degrees
    pub zoom: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub bounds: FlyCameraBounds,
}

impl FlyCamera {
    pub fn new(position: Vector3<f32>, front: Vector3<f32>, up: Vector3<f32>) -> Self {
        let mut camera = Self {
            position,
            front,
            up,
            right: Vector3::unit_x(),
            world_up: up,
            yaw: -90.0,
            pitch: 0.0,
            zoom: 45.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            bounds: FlyCameraBounds::default(),
        };
        camera.set_pose(position, front, up);
        camera
    }

    /// Camera at the configured initial pose, zoom and speeds
    pub fn from_config(config: &ViewConfig) -> Self {
        let mut camera = Self::new(config.position, config.front, config.up);
        camera.set_zoom(config.zoom);
        camera.set_movement_speed(config.movement_speed);
        camera.mouse_sensitivity = config.mouse_sensitivity;
        camera
    }

    /// Places the camera and re-derives yaw and pitch from `front`
    ///
    /// Later mouse look continues from this orientation instead of snapping
    /// back to the previous angles. `up` is kept as given for the view
    /// matrix until the next mouse movement.
    pub fn set_pose(&mut self, position: Vector3<f32>, front: Vector3<f32>, up: Vector3<f32>) {
        self.position = position;
        self.front = front.normalize();
        self.world_up = up;
        self.up = up;
        self.right = self.front.cross(up).normalize();

        self.pitch = Deg::from(Rad(self.front.y.clamp(-1.0, 1.0).asin()))
            .0
            .clamp(self.bounds.min_pitch, self.bounds.max_pitch);
        self.yaw = Deg::from(Rad(self.front.z.atan2(self.front.x))).0;
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::from_vec(self.position),
            Point3::from_vec(self.position + self.front),
            self.up,
        )
    }

    /// Moves the camera by `movement_speed * delta_seconds`
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_seconds: f32) {
        let velocity = self.movement_speed * delta_seconds;
        let offset = match direction {
            CameraMovement::Forward => self.front,
            CameraMovement::Backward => -self.front,
            CameraMovement::Left => -self.right,
            CameraMovement::Right => self.right,
            CameraMovement::Up => self.up.normalize(),
            CameraMovement::Down => -self.up.normalize(),
        };
        self.position += offset * velocity;
    }

    /// Turns the camera by cursor offsets scaled by `mouse_sensitivity`
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.set_pitch(self.pitch + y_offset * self.mouse_sensitivity);
    }

    /// Scroll wheel adjusts the movement speed, not the field of view
    pub fn process_mouse_scroll(&mut self, delta: f32) {
        self.set_movement_speed(self.movement_speed + delta);
    }

    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.bounds.min_pitch, self.bounds.max_pitch);
        self.update();
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.bounds.min_zoom, self.bounds.max_zoom);
    }

    pub fn zoom_in(&mut self, step: f32) {
        self.set_zoom(self.zoom - step);
    }

    pub fn zoom_out(&mut self, step: f32) {
        self.set_zoom(self.zoom + step);
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed.clamp(self.bounds.min_speed, self.bounds.max_speed);
    }

    /// Recomputes the basis after `yaw` or `pitch` changed
    fn update(&mut self) {
        let (yaw_sin, yaw_cos) = Rad::from(Deg(self.yaw)).0.sin_cos();
        let (pitch_sin, pitch_cos) = Rad::from(Deg(self.pitch)).0.sin_cos();
        self.front = Vector3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FlyCameraBounds {
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for FlyCameraBounds {
    fn default() -> Self {
        Self {
            // straight up or down flips the look-at basis
            min_pitch: -89.0,
            max_pitch: 89.0,
            min_zoom: 10.0,
            max_zoom: 160.0,
            min_speed: 1.0,
            max_speed: 45.0,
        }
    }
}
