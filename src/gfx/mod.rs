//! # Graphics Module
//!
//! Everything the still life draws with, organised by concern:
//!
//! - **Camera System** ([`camera`]) - free-fly camera, input and projection mode
//! - **Geometry** ([`geometry`]) - the closed set of primitive shapes and the
//!   [`MeshProvider`](geometry::MeshProvider) seam
//! - **Resources** ([`resources`]) - textures, materials and lights
//! - **Shading** ([`shading`]) - uniforms, transforms and per-draw attributes
//! - **Scene** ([`scene`]) - composite objects and the ordered draw list
//! - **Recording** ([`recording`]) - in-memory backends for headless runs
//!
//! ## Usage
//!
//! ```no_run
//! use countertop::gfx::{scene::Scene, camera::ViewManager};
//! use countertop::config::{SceneConfig, ViewConfig};
//!
//! let scene = Scene::kitchen(SceneConfig::default());
//! let view = ViewManager::from_config(&ViewConfig::default());
//! ```

pub mod camera;
pub mod geometry;
pub mod recording;
pub mod resources;
pub mod scene;
pub mod shading;

// Re-export commonly used types
pub use camera::ViewManager;
pub use scene::Scene;
