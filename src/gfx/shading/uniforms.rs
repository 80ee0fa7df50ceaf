//! Shader uniform identifiers and the sink that receives them
//!
//! The shader program is driven purely through named uniforms. Instead of
//! passing free-form strings around, every uniform the scene writes is a
//! [`Uniform`] variant; its [`fmt::Display`] impl produces the GLSL name the
//! fragment and vertex shaders declare.

use std::fmt;

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

/// Fields of the `material` struct uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialField {
    AmbientColor,
    AmbientStrength,
    DiffuseColor,
    SpecularColor,
    Shininess,
}

impl MaterialField {
    fn glsl_name(self) -> &'static str {
        match self {
            MaterialField::AmbientColor => "ambientColor",
            MaterialField::AmbientStrength => "ambientStrength",
            MaterialField::DiffuseColor => "diffuseColor",
            MaterialField::SpecularColor => "specularColor",
            MaterialField::Shininess => "shininess",
        }
    }
}

/// Fields of one entry in the `lightSources[]` uniform array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightField {
    Position,
    AmbientColor,
    DiffuseColor,
    SpecularColor,
    FocalStrength,
    SpecularIntensity,
}

impl LightField {
    fn glsl_name(self) -> &'static str {
        match self {
            LightField::Position => "position",
            LightField::AmbientColor => "ambientColor",
            LightField::DiffuseColor => "diffuseColor",
            LightField::SpecularColor => "specularColor",
            LightField::FocalStrength => "focalStrength",
            LightField::SpecularIntensity => "specularIntensity",
        }
    }
}

/// Every uniform the scene pipeline writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uniform {
    Model,
    View,
    Projection,
    ViewPosition,
    ObjectColor,
    /// Sampler unit index of the active texture
    ObjectTexture,
    UseTexture,
    UseLighting,
    UvScale,
    Material(MaterialField),
    /// `lightSources[index].field`
    Light(usize, LightField),
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uniform::Model => f.write_str("model"),
            Uniform::View => f.write_str("view"),
            Uniform::Projection => f.write_str("projection"),
            Uniform::ViewPosition => f.write_str("viewPosition"),
            Uniform::ObjectColor => f.write_str("objectColor"),
            Uniform::ObjectTexture => f.write_str("objectTexture"),
            Uniform::UseTexture => f.write_str("bUseTexture"),
            Uniform::UseLighting => f.write_str("bUseLighting"),
            Uniform::UvScale => f.write_str("UVscale"),
            Uniform::Material(field) => write!(f, "material.{}", field.glsl_name()),
            Uniform::Light(index, field) => {
                write!(f, "lightSources[{}].{}", index, field.glsl_name())
            }
        }
    }
}

/// Receives typed uniform writes.
///
/// There is no transaction: the last write to a uniform wins and is consumed
/// by the next draw call. Implementations typically forward to
/// `glUniform*` or pack the values into a uniform buffer.
pub trait UniformSink {
    fn set_mat4(&mut self, uniform: Uniform, value: Matrix4<f32>);
    fn set_vec4(&mut self, uniform: Uniform, value: Vector4<f32>);
    fn set_vec3(&mut self, uniform: Uniform, value: Vector3<f32>);
    fn set_vec2(&mut self, uniform: Uniform, value: Vector2<f32>);
    fn set_float(&mut self, uniform: Uniform, value: f32);
    fn set_int(&mut self, uniform: Uniform, value: i32);
    fn set_bool(&mut self, uniform: Uniform, value: bool);
}
