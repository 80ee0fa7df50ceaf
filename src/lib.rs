// src/lib.rs
//! Countertop
//!
//! A kitchen-counter still life built from textured primitive shapes, with a
//! free-fly camera, written against abstract mesh, uniform and texture
//! interfaces so it runs with or without a GPU.

pub mod app;
pub mod config;
pub mod errors;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use app::{FrameOutcome, StillLifeApp};
pub use errors::{Result, SceneError};
