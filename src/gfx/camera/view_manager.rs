use cgmath::{ortho, perspective, Deg, Matrix4, Vector3};
use log::{debug, info};
use winit::event::{DeviceEvent, KeyEvent};

use super::camera_controller::{CameraController, ViewCommand};
use super::fly_camera::FlyCamera;
use crate::config::ViewConfig;
use crate::gfx::shading::{Uniform, UniformSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

/// View and projection for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewMatrices {
    pub view: Matrix4<f32>,
    pub projection: Matrix4<f32>,
}

/// Front-on pose the camera snaps to when entering orthographic mode
const ORTHO_POSITION: Vector3<f32> = Vector3::new(0.0, 2.0, 10.0);
const ORTHO_FRONT: Vector3<f32> = Vector3::new(0.0, 0.0, -1.0);
const ORTHO_UP: Vector3<f32> = Vector3::new(0.0, 5.0, 0.0);

const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

/// Owns the camera, its input controller and the projection mode
pub struct ViewManager {
    pub camera: FlyCamera,
    pub controller: CameraController,
    mode: ProjectionMode,
    aspect: f32,
    zoom_step: f32,
}

impl ViewManager {
    pub fn new(camera: FlyCamera, controller: CameraController, aspect: f32) -> Self {
        Self {
            camera,
            controller,
            mode: ProjectionMode::Perspective,
            aspect,
            zoom_step: ViewConfig::default().zoom_step,
        }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        let mut manager = Self::new(
            FlyCamera::from_config(config),
            CameraController::from_config(config),
            config.aspect_ratio(),
        );
        manager.zoom_step = config.zoom_step;
        manager
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Zero-area sizes, as sent for a minimized window, are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Switches to orthographic and resets the pose, every time
    ///
    /// The pose before the switch is not remembered.
    pub fn request_orthographic(&mut self) {
        if self.mode != ProjectionMode::Orthographic {
            info!("Switching to orthographic projection");
        }
        self.mode = ProjectionMode::Orthographic;
        self.camera.set_pose(ORTHO_POSITION, ORTHO_FRONT, ORTHO_UP);
    }

    /// Switches to perspective without moving the camera
    pub fn request_perspective(&mut self) {
        if self.mode != ProjectionMode::Perspective {
            info!("Switching to perspective projection");
        }
        self.mode = ProjectionMode::Perspective;
    }

    /// A non-positive or non-finite `aspect` falls back to square
    pub fn compute_matrices(&self, aspect: f32) -> ViewMatrices {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        let projection = match self.mode {
            ProjectionMode::Orthographic => ortho(-9.0, 9.0, -7.0, 7.0, -1.0, 30.0),
            ProjectionMode::Perspective => perspective(Deg(self.camera.zoom), aspect, NEAR, FAR),
        };
        ViewMatrices {
            view: self.camera.view_matrix(),
            projection,
        }
    }

    pub fn process_event(&mut self, event: &DeviceEvent) {
        self.controller.process_events(event, &mut self.camera);
    }

    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        self.controller.process_keyed_events(event);
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.controller.cursor_moved(x, y, &mut self.camera);
    }

    /// Applies every held key once, scaled by `delta_seconds`
    pub fn apply_input(&mut self, delta_seconds: f32) {
        for command in self.controller.frame_commands() {
            match command {
                ViewCommand::Move(direction) => {
                    self.camera.process_keyboard(direction, delta_seconds)
                }
                ViewCommand::ZoomIn => self.camera.zoom_in(self.zoom_step),
                ViewCommand::ZoomOut => self.camera.zoom_out(self.zoom_step),
                ViewCommand::Orthographic => self.request_orthographic(),
                ViewCommand::Perspective => self.request_perspective(),
                ViewCommand::Close => (),
            }
        }
    }

    pub fn close_requested(&self) -> bool {
        self.controller.close_requested()
    }

    /// Per-frame camera update: input, matrices, then the view uniforms
    pub fn prepare_scene_view(
        &mut self,
        delta_seconds: f32,
        sink: &mut dyn UniformSink,
    ) -> ViewMatrices {
        self.apply_input(delta_seconds);

        let matrices = self.compute_matrices(self.aspect);
        sink.set_mat4(Uniform::View, matrices.view);
        sink.set_mat4(Uniform::Projection, matrices.projection);
        sink.set_vec3(Uniform::ViewPosition, self.camera.position);

        debug!(
            "View at {:?} looking {:?}, {:?}",
            self.camera.position, self.camera.front, self.mode
        );
        matrices
    }
}

impl Default for ViewManager {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::recording::{RecordingSink, UniformValue};
    use winit::keyboard::KeyCode;

    #[test]
    fn test_orthographic_resets_pose_every_time() {
        let mut view = ViewManager::default();
        view.camera.position = Vector3::new(7.0, 7.0, 7.0);

        view.request_orthographic();
        let first = (view.camera.position, view.camera.front, view.camera.up);
        view.camera.position = Vector3::new(-3.0, 1.0, 0.0);
        view.request_orthographic();

        assert_eq!(view.mode(), ProjectionMode::Orthographic);
        assert_eq!((view.camera.position, view.camera.front, view.camera.up), first);
        assert_eq!(view.camera.position, ORTHO_POSITION);
        assert_eq!(view.camera.up, ORTHO_UP);
        assert_eq!(
            view.compute_matrices(1.25).projection,
            ortho(-9.0, 9.0, -7.0, 7.0, -1.0, 30.0)
        );
    }

    #[test]
    fn test_perspective_keeps_pose() {
        let mut view = ViewManager::default();
        view.request_orthographic();
        view.camera.position = Vector3::new(1.0, 2.0, 3.0);

        view.request_perspective();
        assert_eq!(view.mode(), ProjectionMode::Perspective);
        assert_eq!(view.camera.position, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(view.camera.front, ORTHO_FRONT);
    }

    #[test]
    fn test_zero_area_resize_keeps_aspect() {
        let mut view = ViewManager::default();
        view.resize(1600, 800);
        view.resize(0, 0);
        view.resize(0, 600);
        view.resize(800, 0);
        assert_eq!(view.aspect(), 2.0);
    }

    #[test]
    fn test_degenerate_aspect_falls_back_to_square() {
        let view = ViewManager::default();
        let square = perspective(Deg(60.0), 1.0, 0.1, 100.0);
        assert_eq!(view.compute_matrices(0.0).projection, square);
        assert_eq!(view.compute_matrices(-2.0).projection, square);
        assert_eq!(view.compute_matrices(f32::NAN).projection, square);
    }

    #[test]
    fn test_perspective_uses_clamped_zoom() {
        let mut view = ViewManager::default();
        view.camera.set_zoom(500.0);
        assert_eq!(
            view.compute_matrices(2.0).projection,
            perspective(Deg(160.0), 2.0, 0.1, 100.0)
        );
    }

    #[test]
    fn test_prepare_scene_view_writes_uniforms() {
        let mut view = ViewManager::default();
        let mut sink = RecordingSink::new();
        view.controller.key_changed(KeyCode::KeyQ, true);

        let matrices = view.prepare_scene_view(0.5, &mut sink);

        // 2.5 units/s up for half a second
        assert!((view.camera.position.y - (5.5 + 1.25)).abs() < 1e-4);
        let names: Vec<String> = sink.writes.iter().map(|(u, _)| u.to_string()).collect();
        assert_eq!(names, vec!["view", "projection", "viewPosition"]);
        assert_eq!(sink.writes[0].1, UniformValue::Mat4(matrices.view.into()));
        assert_eq!(
            sink.last(Uniform::ViewPosition),
            Some(&UniformValue::Vec3(view.camera.position.into()))
        );
    }

    #[test]
    fn test_held_zoom_key_steps_each_frame() {
        let mut view = ViewManager::default();
        let mut sink = RecordingSink::new();
        view.controller.key_changed(KeyCode::ArrowUp, true);
        for _ in 0..100 {
            view.prepare_scene_view(0.016, &mut sink);
        }
        assert!((view.camera.zoom - 59.0).abs() < 1e-3);
    }

    #[test]
    fn test_o_key_switches_mode() {
        let mut view = ViewManager::default();
        let mut sink = RecordingSink::new();
        view.controller.key_changed(KeyCode::KeyO, true);
        view.prepare_scene_view(0.016, &mut sink);
        assert_eq!(view.mode(), ProjectionMode::Orthographic);

        view.controller.key_changed(KeyCode::KeyO, false);
        view.controller.key_changed(KeyCode::KeyP, true);
        view.prepare_scene_view(0.016, &mut sink);
        assert_eq!(view.mode(), ProjectionMode::Perspective);
        assert_eq!(view.camera.position, ORTHO_POSITION);
    }
}
