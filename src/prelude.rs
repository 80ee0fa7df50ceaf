//! # Countertop Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use countertop::prelude::*;
//! ```

// Application
pub use crate::app::{FrameClock, FrameOutcome, FrameStats, StillLifeApp};
pub use crate::config::{SceneConfig, ViewConfig};
pub use crate::errors::{Result, SceneError};

// Scene and camera
pub use crate::gfx::camera::{CameraMovement, FlyCamera, ProjectionMode, ViewManager};
pub use crate::gfx::scene::{CompositeObject, FrameContext, PrepareReport, Scene, SceneItem};

// Seams a host implements
pub use crate::gfx::geometry::{CylinderCaps, MeshProvider, ShapeKind, ShapeMesh};
pub use crate::gfx::resources::{DecodedImage, ImageLoader, TextureBackend, TextureHandle};
pub use crate::gfx::shading::{
    Primitive, ShadingAttributes, Transform, TransformComposer, Uniform, UniformSink,
};

// Common external dependencies
pub use cgmath::{InnerSpace, Vector3};
