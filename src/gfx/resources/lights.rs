//! Scene light sources
//!
//! Lights are written to the `lightSources[]` uniform array once during
//! scene setup and stay static for the session.

use cgmath::Vector3;
use log::warn;

use crate::gfx::shading::uniforms::{LightField, Uniform, UniformSink};

/// Size of the `lightSources[]` array in the fragment shader
pub const MAX_LIGHTS: usize = 4;

/// Point light configuration
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vector3<f32>,
    pub ambient_color: Vector3<f32>,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    /// Exponent of the specular highlight
    pub focal_strength: f32,
    pub specular_intensity: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 10.0, 0.0),
            ambient_color: Vector3::new(0.1, 0.1, 0.1),
            diffuse_color: Vector3::new(0.5, 0.5, 0.5),
            specular_color: Vector3::new(0.5, 0.5, 0.5),
            focal_strength: 32.0,
            specular_intensity: 0.1,
        }
    }
}

impl Light {
    fn apply(&self, index: usize, sink: &mut dyn UniformSink) {
        sink.set_vec3(Uniform::Light(index, LightField::Position), self.position);
        sink.set_vec3(
            Uniform::Light(index, LightField::AmbientColor),
            self.ambient_color,
        );
        sink.set_vec3(
            Uniform::Light(index, LightField::DiffuseColor),
            self.diffuse_color,
        );
        sink.set_vec3(
            Uniform::Light(index, LightField::SpecularColor),
            self.specular_color,
        );
        sink.set_float(
            Uniform::Light(index, LightField::FocalStrength),
            self.focal_strength,
        );
        sink.set_float(
            Uniform::Light(index, LightField::SpecularIntensity),
            self.specular_intensity,
        );
    }
}

/// Enables lighting and writes every light to its array slot
///
/// Lights past [`MAX_LIGHTS`] have no slot in the shader and are dropped.
///
/// # Returns
/// Number of lights written
pub fn apply_lights(lights: &[Light], sink: &mut dyn UniformSink) -> usize {
    if lights.len() > MAX_LIGHTS {
        warn!(
            "{} lights configured but the shader supports {}, extra lights are ignored",
            lights.len(),
            MAX_LIGHTS
        );
    }

    sink.set_bool(Uniform::UseLighting, true);
    let count = lights.len().min(MAX_LIGHTS);
    for (index, light) in lights.iter().take(count).enumerate() {
        light.apply(index, sink);
    }
    count
}

/// Two warm ceiling lights in front of the counter plus a soft ambient fill
pub fn kitchen_lights() -> Vec<Light> {
    vec![
        // left, in front of the objects
        Light {
            position: Vector3::new(-6.7, 5.5, 1.0),
            ambient_color: Vector3::new(0.03, 0.01, 0.01),
            diffuse_color: Vector3::new(0.32, 0.32, 0.3),
            specular_color: Vector3::new(0.4, 0.4, 0.39),
            focal_strength: 45.0,
            specular_intensity: 0.05,
        },
        // right, above and in front
        Light {
            position: Vector3::new(8.0, 6.5, 0.5),
            ambient_color: Vector3::new(0.03, 0.02, 0.01),
            diffuse_color: Vector3::new(0.3, 0.3, 0.3),
            specular_color: Vector3::new(0.4, 0.4, 0.4),
            focal_strength: 70.0,
            specular_intensity: 0.2,
        },
        // overhead fill, ambient only
        Light {
            position: Vector3::new(0.0, 15.0, 0.0),
            ambient_color: Vector3::new(0.3, 0.25, 0.25),
            diffuse_color: Vector3::new(0.0, 0.0, 0.0),
            specular_color: Vector3::new(0.0, 0.0, 0.0),
            focal_strength: 0.01,
            specular_intensity: 0.01,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::recording::{RecordingSink, UniformValue};

    #[test]
    fn test_kitchen_lights_written() {
        let mut sink = RecordingSink::new();
        let count = apply_lights(&kitchen_lights(), &mut sink);

        assert_eq!(count, 3);
        assert_eq!(sink.last(Uniform::UseLighting), Some(&UniformValue::Bool(true)));
        assert_eq!(
            sink.last(Uniform::Light(1, LightField::FocalStrength)),
            Some(&UniformValue::Float(70.0))
        );
        assert_eq!(
            sink.last(Uniform::Light(0, LightField::Position)),
            Some(&UniformValue::Vec3([-6.7, 5.5, 1.0]))
        );
        assert_eq!(sink.last(Uniform::Light(3, LightField::Position)), None);
        // bUseLighting + 6 fields per light
        assert_eq!(sink.writes.len(), 1 + 3 * 6);
    }

    #[test]
    fn test_extra_lights_dropped() {
        let mut sink = RecordingSink::new();
        let count = apply_lights(&vec![Light::default(); MAX_LIGHTS + 2], &mut sink);

        assert_eq!(count, MAX_LIGHTS);
        assert_eq!(
            sink.last(Uniform::Light(MAX_LIGHTS, LightField::Position)),
            None
        );
    }
}
