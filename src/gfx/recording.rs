//! Recording backends
//!
//! In-memory implementations of the external interfaces (uniform sink, mesh
//! provider, texture backend, image loader). They capture every call so a
//! frame can be inspected without a GPU: the headless binary prints from
//! them and the tests assert against them.

use std::path::{Path, PathBuf};

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

use super::geometry::{MeshProvider, ShapeKind, ShapeMesh};
use super::resources::image_loader::{DecodedImage, ImageLoader};
use super::resources::texture_registry::{TextureBackend, TextureHandle};
use super::shading::uniforms::{Uniform, UniformSink};
use crate::errors::{Result, SceneError};

/// A value written to a uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Mat4([[f32; 4]; 4]),
    Vec4([f32; 4]),
    Vec3([f32; 3]),
    Vec2([f32; 2]),
    Float(f32),
    Int(i32),
    Bool(bool),
}

/// Uniform sink that keeps every write in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub writes: Vec<(Uniform, UniformValue)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent value written to `uniform`
    pub fn last(&self, uniform: Uniform) -> Option<&UniformValue> {
        self.writes
            .iter()
            .rev()
            .find(|(written, _)| *written == uniform)
            .map(|(_, value)| value)
    }

    /// Every value written to `uniform`, oldest first
    pub fn all(&self, uniform: Uniform) -> Vec<UniformValue> {
        self.writes
            .iter()
            .filter(|(written, _)| *written == uniform)
            .map(|(_, value)| *value)
            .collect()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }

    fn push(&mut self, uniform: Uniform, value: UniformValue) {
        self.writes.push((uniform, value));
    }
}

impl UniformSink for RecordingSink {
    fn set_mat4(&mut self, uniform: Uniform, value: Matrix4<f32>) {
        self.push(uniform, UniformValue::Mat4(value.into()));
    }

    fn set_vec4(&mut self, uniform: Uniform, value: Vector4<f32>) {
        self.push(uniform, UniformValue::Vec4(value.into()));
    }

    fn set_vec3(&mut self, uniform: Uniform, value: Vector3<f32>) {
        self.push(uniform, UniformValue::Vec3(value.into()));
    }

    fn set_vec2(&mut self, uniform: Uniform, value: Vector2<f32>) {
        self.push(uniform, UniformValue::Vec2(value.into()));
    }

    fn set_float(&mut self, uniform: Uniform, value: f32) {
        self.push(uniform, UniformValue::Float(value));
    }

    fn set_int(&mut self, uniform: Uniform, value: i32) {
        self.push(uniform, UniformValue::Int(value));
    }

    fn set_bool(&mut self, uniform: Uniform, value: bool) {
        self.push(uniform, UniformValue::Bool(value));
    }
}

/// Mesh provider that remembers loads and draws
#[derive(Debug, Default)]
pub struct RecordingMeshes {
    pub loaded: Vec<ShapeKind>,
    pub draws: Vec<ShapeMesh>,
}

impl RecordingMeshes {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MeshProvider for RecordingMeshes {
    fn load(&mut self, kind: ShapeKind) {
        self.loaded.push(kind);
    }

    fn draw(&mut self, shape: &ShapeMesh) {
        self.draws.push(*shape);
    }
}

/// Texture backend that hands out sequential handles
#[derive(Debug, Default)]
pub struct RecordingTextures {
    pub uploads: Vec<String>,
    pub bindings: Vec<(u32, TextureHandle)>,
    pub destroyed: Vec<TextureHandle>,
    next_handle: u32,
}

impl RecordingTextures {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextureBackend for RecordingTextures {
    fn upload(&mut self, tag: &str, _image: &DecodedImage) -> Result<TextureHandle> {
        self.next_handle += 1;
        self.uploads.push(tag.to_string());
        Ok(TextureHandle(self.next_handle))
    }

    fn bind(&mut self, unit: u32, handle: TextureHandle) {
        self.bindings.push((unit, handle));
    }

    fn destroy(&mut self, handle: TextureHandle) {
        self.destroyed.push(handle);
    }
}

/// Image loader producing 2x2 images without touching the filesystem
#[derive(Debug, Clone)]
pub struct FakeImageLoader {
    channels: u8,
    missing: Vec<PathBuf>,
    fail_all: bool,
}

impl FakeImageLoader {
    pub fn rgba() -> Self {
        Self::with_channels(4)
    }

    pub fn with_channels(channels: u8) -> Self {
        Self {
            channels,
            missing: Vec::new(),
            fail_all: false,
        }
    }

    /// Every load fails as if the file did not exist
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::rgba()
        }
    }

    /// Loads of any path ending in `file_name` fail
    pub fn with_missing(mut self, file_name: &str) -> Self {
        self.missing.push(PathBuf::from(file_name));
        self
    }
}

impl ImageLoader for FakeImageLoader {
    fn load(&self, path: &Path) -> Result<DecodedImage> {
        if self.fail_all || self.missing.iter().any(|missing| path.ends_with(missing)) {
            return Err(SceneError::ImageLoad {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such file",
                )),
            });
        }

        Ok(DecodedImage {
            pixels: vec![200; 4 * self.channels as usize],
            width: 2,
            height: 2,
            channels: self.channels,
        })
    }
}
