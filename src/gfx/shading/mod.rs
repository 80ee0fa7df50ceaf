//! # Shading Pipeline
//!
//! Everything between "draw this primitive with these attributes" and the
//! shader program:
//!
//! - [`uniforms`] - typed uniform identifiers and the [`UniformSink`] trait
//! - [`transform`] - scale/rotation/position to model matrix
//! - [`attributes`] - per-draw color, texture, UV scale and material
//! - [`composer`] - writes all of the above and issues the draw

pub mod attributes;
pub mod composer;
pub mod transform;
pub mod uniforms;

pub use attributes::{Primitive, ShadingAttributes, NO_TAG};
pub use composer::TransformComposer;
pub use transform::Transform;
pub use uniforms::{LightField, MaterialField, Uniform, UniformSink};
