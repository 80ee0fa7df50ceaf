use cgmath::{Vector2, Vector4};

use super::transform::Transform;
use crate::gfx::geometry::ShapeMesh;

/// Tag meaning "no texture" / "no material" in tag-based calls
pub const NO_TAG: &str = "none";

/// Per-draw color, texture, UV tiling and material
///
/// `uv_scale` is the number of times the texture repeats along U and V.
/// Parts of different size that share a texture need their own UV scale to
/// keep texel density even; nothing adjusts it automatically.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadingAttributes {
    pub color: Vector4<f32>,
    pub texture: Option<String>,
    pub uv_scale: Vector2<f32>,
    pub material: Option<String>,
}

impl Default for ShadingAttributes {
    fn default() -> Self {
        Self {
            color: Vector4::new(1.0, 1.0, 1.0, 1.0),
            texture: None,
            uv_scale: Vector2::new(1.0, 1.0),
            material: None,
        }
    }
}

impl ShadingAttributes {
    /// Untextured, no material, the given RGBA color
    pub fn new(color: [f32; 4]) -> Self {
        Self {
            color: color.into(),
            ..Self::default()
        }
    }

    /// Builds attributes from tags, treating [`NO_TAG`] as absent
    pub fn from_tags(color: [f32; 4], texture: &str, uv_scale: [f32; 2], material: &str) -> Self {
        Self {
            color: color.into(),
            texture: tag(texture),
            uv_scale: uv_scale.into(),
            material: tag(material),
        }
    }

    pub fn with_texture(mut self, texture: &str) -> Self {
        self.texture = tag(texture);
        self
    }

    pub fn with_uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = Vector2::new(u, v);
        self
    }

    pub fn with_material(mut self, material: &str) -> Self {
        self.material = tag(material);
        self
    }
}

fn tag(value: &str) -> Option<String> {
    (value != NO_TAG).then(|| value.to_string())
}

/// One primitive draw: where, how it is shaded, and which mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub label: &'static str,
    pub transform: Transform,
    pub shading: ShadingAttributes,
    pub shape: ShapeMesh,
}

impl Primitive {
    pub fn new(
        label: &'static str,
        shape: ShapeMesh,
        transform: Transform,
        shading: ShadingAttributes,
    ) -> Self {
        Self {
            label,
            transform,
            shading,
            shape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain_white() {
        let attrs = ShadingAttributes::default();
        assert_eq!(attrs.color, Vector4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(attrs.texture, None);
        assert_eq!(attrs.uv_scale, Vector2::new(1.0, 1.0));
        assert_eq!(attrs.material, None);
    }

    #[test]
    fn test_none_tag_is_absent() {
        let attrs = ShadingAttributes::from_tags([1.0, 0.0, 0.0, 1.0], "none", [2.0, 3.0], "none");
        assert_eq!(attrs.texture, None);
        assert_eq!(attrs.material, None);

        let attrs = ShadingAttributes::new([1.0; 4])
            .with_texture("metal")
            .with_material("metal");
        assert_eq!(attrs.texture.as_deref(), Some("metal"));
        assert_eq!(attrs.material.as_deref(), Some("metal"));
    }
}
