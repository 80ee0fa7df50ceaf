//! # Primitive Geometry
//!
//! Shape selection for primitive draws and the provider trait that owns the
//! actual mesh buffers.
//!
//! ## Usage
//!
//! ```rust
//! use countertop::gfx::geometry::{CylinderCaps, ShapeKind, ShapeMesh};
//!
//! // An open tube, e.g. the lip of a cup
//! let lip = ShapeMesh::Cylinder(CylinderCaps::HOLLOW);
//! assert_eq!(lip.kind(), Some(ShapeKind::Cylinder));
//! ```

pub mod shapes;

pub use shapes::*;
