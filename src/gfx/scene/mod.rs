//! # Scene Module
//!
//! Assembly of the still life from primitives and composite objects.
//!
//! ## Key Components
//!
//! - [`Scene`] - resources, lights and the ordered draw list; one-time setup
//!   through [`Scene::prepare_scene`] and per-frame drawing through
//!   [`Scene::render_scene`]
//! - [`CompositeObject`] - several primitives placed around one anchor
//! - [`objects`] - builders for the jar, cup, cucumber and knife, and the
//!   full kitchen layout
//!
//! ## Usage
//!
//! ```no_run
//! use countertop::config::SceneConfig;
//! use countertop::gfx::recording::{FakeImageLoader, RecordingMeshes, RecordingSink, RecordingTextures};
//! use countertop::gfx::scene::{FrameContext, Scene};
//!
//! let mut scene = Scene::kitchen(SceneConfig::default());
//! let (mut sink, mut meshes, mut textures) =
//!     (RecordingSink::new(), RecordingMeshes::new(), RecordingTextures::new());
//! let mut ctx = FrameContext { sink: &mut sink, meshes: &mut meshes, textures: &mut textures };
//!
//! scene.prepare_scene(&mut ctx, &FakeImageLoader::rgba());
//! let draws = scene.render_scene(&mut ctx);
//! ```

pub mod composite;
pub mod objects;
pub mod scene;

// Re-export main types
pub use composite::CompositeObject;
pub use objects::{cucumber, cup, jar, kitchen_layout, knife, SceneItem, KITCHEN_TEXTURES};
pub use scene::{FrameContext, PrepareReport, Scene};
