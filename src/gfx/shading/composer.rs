//! Per-draw uniform submission
//!
//! [`TransformComposer`] is the single path from a primitive description to
//! the shader: it writes shading uniforms, the model matrix, and then asks
//! the mesh provider to draw. Nothing here assumes a uniform still holds a
//! value from an earlier draw.

use log::{log, trace, Level};

use super::attributes::{Primitive, ShadingAttributes};
use super::transform::Transform;
use super::uniforms::{Uniform, UniformSink};
use crate::gfx::geometry::{MeshProvider, ShapeMesh};
use crate::gfx::resources::SceneResources;

/// Level for tags that do not resolve while drawing
///
/// Misses repeat on every frame; the failure itself is reported once when
/// the scene is prepared.
pub const TAG_MISS_LEVEL: Level = Level::Debug;

pub struct TransformComposer<'a> {
    resources: &'a SceneResources,
    sink: &'a mut dyn UniformSink,
    meshes: &'a mut dyn MeshProvider,
    draw_count: usize,
}

impl<'a> TransformComposer<'a> {
    pub fn new(
        resources: &'a SceneResources,
        sink: &'a mut dyn UniformSink,
        meshes: &'a mut dyn MeshProvider,
    ) -> Self {
        Self {
            resources,
            sink,
            meshes,
            draw_count: 0,
        }
    }

    /// Writes color, texture selection, UV scale and material uniforms
    ///
    /// A texture or material tag that does not resolve is skipped quietly:
    /// the draw renders untextured, or with whatever material values the
    /// shader already holds.
    pub fn apply_shading_attributes(&mut self, attrs: &ShadingAttributes) {
        self.sink.set_vec4(Uniform::ObjectColor, attrs.color);

        let unit = attrs.texture.as_deref().and_then(|tag| {
            let unit = self.resources.resolve_texture_unit(tag);
            if unit.is_none() {
                log!(TAG_MISS_LEVEL, "Texture '{}' not registered, drawing untextured", tag);
            }
            unit
        });
        match unit {
            Some(unit) => {
                self.sink.set_bool(Uniform::UseTexture, true);
                self.sink.set_int(Uniform::ObjectTexture, unit as i32);
            }
            None => self.sink.set_bool(Uniform::UseTexture, false),
        }

        self.sink.set_vec2(Uniform::UvScale, attrs.uv_scale);

        if let Some(tag) = attrs.material.as_deref() {
            match self.resources.resolve_material(tag) {
                Some(material) => material.apply(self.sink),
                None => log!(
                    TAG_MISS_LEVEL,
                    "Material '{}' not defined, keeping previous material",
                    tag
                ),
            }
        }
    }

    /// Writes the model matrix then draws `shape`
    pub fn draw_primitive(&mut self, transform: &Transform, shape: &ShapeMesh) {
        self.sink.set_mat4(Uniform::Model, transform.model_matrix());
        if *shape != ShapeMesh::None {
            self.meshes.draw(shape);
            self.draw_count += 1;
        }
    }

    /// Fully specified draw: shading first, then geometry
    pub fn draw_part(&mut self, part: &Primitive) {
        trace!("Drawing {} as {:?}", part.label, part.shape);
        self.apply_shading_attributes(&part.shading);
        self.draw_primitive(&part.transform, &part.shape);
    }

    /// Mesh draws issued so far
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::CylinderCaps;
    use crate::gfx::recording::{
        FakeImageLoader, RecordingMeshes, RecordingSink, RecordingTextures, UniformValue,
    };
    use crate::gfx::resources::material::Material;
    use crate::gfx::shading::uniforms::MaterialField;
    use std::path::Path;

    fn resources() -> SceneResources {
        let mut resources = SceneResources::default();
        let loader = FakeImageLoader::rgba();
        let mut backend = RecordingTextures::new();
        for tag in ["backdrop", "metal"] {
            resources
                .textures
                .register_texture(Path::new("t.png"), tag, &loader, &mut backend)
                .unwrap();
        }
        resources.materials.add_material(
            Material::new("metal")
                .with_ambient(0.23, 0.23, 0.21, 0.4)
                .with_diffuse(0.3, 0.3, 0.25)
                .with_specular(0.45, 0.45, 0.45, 25.0),
        );
        resources
    }

    #[test]
    fn test_untextured_draw_writes_exactly() {
        let resources = resources();
        let mut sink = RecordingSink::new();
        let mut meshes = RecordingMeshes::new();
        let mut composer = TransformComposer::new(&resources, &mut sink, &mut meshes);

        let attrs = ShadingAttributes::from_tags([1.0, 0.0, 0.0, 1.0], "none", [2.0, 3.0], "none");
        composer.apply_shading_attributes(&attrs);
        composer.draw_primitive(&Transform::default(), &ShapeMesh::Box);
        assert_eq!(composer.draw_count(), 1);

        let names: Vec<String> = sink.writes.iter().map(|(u, _)| u.to_string()).collect();
        assert_eq!(names, vec!["objectColor", "bUseTexture", "UVscale", "model"]);
        assert_eq!(sink.writes[0].1, UniformValue::Vec4([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(sink.writes[1].1, UniformValue::Bool(false));
        assert_eq!(sink.writes[2].1, UniformValue::Vec2([2.0, 3.0]));
        assert_eq!(meshes.draws, vec![ShapeMesh::Box]);
    }

    #[test]
    fn test_textured_material_draw() {
        let resources = resources();
        let mut sink = RecordingSink::new();
        let mut meshes = RecordingMeshes::new();
        let mut composer = TransformComposer::new(&resources, &mut sink, &mut meshes);

        let attrs = ShadingAttributes::new([0.3, 0.3, 0.2, 1.0])
            .with_texture("metal")
            .with_material("metal");
        composer.apply_shading_attributes(&attrs);

        assert_eq!(sink.last(Uniform::UseTexture), Some(&UniformValue::Bool(true)));
        assert_eq!(sink.last(Uniform::ObjectTexture), Some(&UniformValue::Int(1)));
        assert_eq!(
            sink.last(Uniform::Material(MaterialField::Shininess)),
            Some(&UniformValue::Float(25.0))
        );
        assert_eq!(
            sink.last(Uniform::Material(MaterialField::AmbientStrength)),
            Some(&UniformValue::Float(0.4))
        );
    }

    #[test]
    fn test_unknown_tags_skipped() {
        let resources = resources();
        let mut sink = RecordingSink::new();
        let mut meshes = RecordingMeshes::new();
        let mut composer = TransformComposer::new(&resources, &mut sink, &mut meshes);

        let attrs = ShadingAttributes::new([1.0; 4])
            .with_texture("velvet")
            .with_material("velvet");
        composer.apply_shading_attributes(&attrs);

        assert_eq!(sink.last(Uniform::UseTexture), Some(&UniformValue::Bool(false)));
        assert_eq!(sink.last(Uniform::ObjectTexture), None);
        assert!(sink
            .writes
            .iter()
            .all(|(u, _)| !matches!(u, Uniform::Material(_))));
    }

    #[test]
    fn test_tag_misses_stay_below_warn() {
        assert!(TAG_MISS_LEVEL > Level::Warn);
        assert!(TAG_MISS_LEVEL > Level::Info);
    }

    #[test]
    fn test_draw_part_and_none_shape() {
        let resources = resources();
        let mut sink = RecordingSink::new();
        let mut meshes = RecordingMeshes::new();
        let mut composer = TransformComposer::new(&resources, &mut sink, &mut meshes);

        let lip = Primitive::new(
            "lip",
            ShapeMesh::Cylinder(CylinderCaps::HOLLOW),
            Transform::new([1.5, 1.0, 1.5], [0.0; 3], [-3.0, 4.5, -4.2]),
            ShadingAttributes::new([0.6, 0.1, 0.1, 1.0]).with_texture("metal"),
        );
        composer.draw_part(&lip);
        composer.draw_primitive(&Transform::default(), &ShapeMesh::None);

        assert_eq!(composer.draw_count(), 1);
        assert_eq!(meshes.draws, vec![ShapeMesh::Cylinder(CylinderCaps::HOLLOW)]);
        assert_eq!(sink.all(Uniform::Model).len(), 2);
    }
}
