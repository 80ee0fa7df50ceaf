//! Material system for Phong lighting
//!
//! A material is a named set of lighting-response coefficients, independent
//! of any texture. Materials are defined once during scene setup and stored
//! in a [`MaterialCatalog`]; draws reference them by tag.

use cgmath::Vector3;
use log::warn;

use crate::gfx::shading::uniforms::{MaterialField, Uniform, UniformSink};

/// Material ID for referencing materials
pub type MaterialId = String;

/// Lighting-response coefficients for one surface type
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: MaterialId,
    pub ambient_color: Vector3<f32>,
    pub ambient_strength: f32,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    pub shininess: f32,
}

impl Material {
    /// Creates a material that only reflects diffuse white light
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ambient_color: Vector3::new(0.0, 0.0, 0.0),
            ambient_strength: 0.0,
            diffuse_color: Vector3::new(1.0, 1.0, 1.0),
            specular_color: Vector3::new(0.0, 0.0, 0.0),
            shininess: 1.0,
        }
    }

    /// Builder pattern: Set ambient color and its strength
    pub fn with_ambient(mut self, r: f32, g: f32, b: f32, strength: f32) -> Self {
        self.ambient_color = Vector3::new(r, g, b);
        self.ambient_strength = strength;
        self
    }

    /// Builder pattern: Set diffuse color
    pub fn with_diffuse(mut self, r: f32, g: f32, b: f32) -> Self {
        self.diffuse_color = Vector3::new(r, g, b);
        self
    }

    /// Builder pattern: Set specular color and highlight exponent
    pub fn with_specular(mut self, r: f32, g: f32, b: f32, shininess: f32) -> Self {
        self.specular_color = Vector3::new(r, g, b);
        self.shininess = shininess;
        self
    }

    /// Writes all five `material.*` uniforms
    pub fn apply(&self, sink: &mut dyn UniformSink) {
        sink.set_vec3(
            Uniform::Material(MaterialField::AmbientColor),
            self.ambient_color,
        );
        sink.set_float(
            Uniform::Material(MaterialField::AmbientStrength),
            self.ambient_strength,
        );
        sink.set_vec3(
            Uniform::Material(MaterialField::DiffuseColor),
            self.diffuse_color,
        );
        sink.set_vec3(
            Uniform::Material(MaterialField::SpecularColor),
            self.specular_color,
        );
        sink.set_float(Uniform::Material(MaterialField::Shininess), self.shininess);
    }
}

/// Stores every material defined for the scene
///
/// Materials keep their definition order. Lookup is a linear scan where the
/// first material with a matching tag wins, so redefining a tag never
/// replaces the original definition.
#[derive(Debug, Default)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a material to the catalog
    pub fn add_material(&mut self, material: Material) {
        if self.get_material(&material.name).is_some() {
            warn!(
                "Material '{}' already defined, the first definition stays in effect",
                material.name
            );
        }
        self.materials.push(material);
    }

    /// Gets a material by tag
    ///
    /// # Returns
    /// The first material defined with this tag, if any
    pub fn get_material(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.name == tag)
    }

    /// Lists all material tags in definition order
    pub fn list_materials(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn clear(&mut self) {
        self.materials.clear();
    }
}

/// The fixed material set used by the kitchen scene
pub fn kitchen_materials() -> Vec<Material> {
    vec![
        // jar
        Material::new("glass")
            .with_ambient(0.4, 0.4, 0.4, 0.15)
            .with_diffuse(0.32, 0.32, 0.3)
            .with_specular(0.6, 0.6, 0.6, 75.0),
        // knife handle, backdrop ledge
        Material::new("wood")
            .with_ambient(0.25, 0.22, 0.2, 0.2)
            .with_diffuse(0.25, 0.2, 0.15)
            .with_specular(0.2, 0.2, 0.2, 5.0),
        // cup body, cutting board
        Material::new("plastic")
            .with_ambient(0.2, 0.2, 0.23, 0.15)
            .with_diffuse(0.25, 0.255, 0.28)
            .with_specular(0.32, 0.32, 0.3, 7.0),
        // polished stone: countertop, backdrop, coaster
        Material::new("stone")
            .with_ambient(0.39, 0.37, 0.35, 0.25)
            .with_diffuse(0.4, 0.37, 0.35)
            .with_specular(0.27, 0.3, 0.33, 2.0),
        Material::new("metal")
            .with_ambient(0.23, 0.23, 0.21, 0.4)
            .with_diffuse(0.3, 0.3, 0.25)
            .with_specular(0.45, 0.45, 0.45, 25.0),
        // cucumber
        Material::new("organic")
            .with_ambient(0.25, 0.28, 0.25, 0.15)
            .with_diffuse(0.3, 0.34, 0.3)
            .with_specular(0.35, 0.35, 0.3, 12.0),
    ]
}
