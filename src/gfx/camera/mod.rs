//! Camera and view state
//!
//! A free-fly camera, the controller turning keyboard and mouse input into
//! camera changes, and the view manager that owns both and switches between
//! perspective and orthographic projection.

pub mod camera_controller;
pub mod fly_camera;
pub mod view_manager;

// Re-export main types
pub use camera_controller::{CameraController, InputState, ViewCommand};
pub use fly_camera::{CameraMovement, FlyCamera, FlyCameraBounds};
pub use view_manager::{ProjectionMode, ViewManager, ViewMatrices};
