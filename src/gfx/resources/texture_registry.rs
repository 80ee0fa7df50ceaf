//! Tag-addressed texture registry
//!
//! Textures are registered once during scene setup and bound to sequential
//! texture units every frame. The unit a texture is bound to is its
//! registration index, which is what the shader's `objectTexture` sampler
//! receives.

use std::path::Path;

use log::{info, warn};

use super::image_loader::{DecodedImage, ImageLoader};
use crate::errors::{Result, SceneError};

/// Opaque id handed out by a [`TextureBackend`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// GPU side of texture management
pub trait TextureBackend {
    /// Uploads a 2D texture with repeat wrapping, linear filtering and mipmaps.
    fn upload(&mut self, tag: &str, image: &DecodedImage) -> Result<TextureHandle>;
    /// Makes `handle` the texture sampled from `unit`.
    fn bind(&mut self, unit: u32, handle: TextureHandle);
    fn destroy(&mut self, handle: TextureHandle);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureEntry {
    pub tag: String,
    pub handle: TextureHandle,
}

/// Registered textures in registration order
#[derive(Debug)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
    capacity: usize,
}

impl TextureRegistry {
    /// Texture units guaranteed by every OpenGL 3.3 fragment stage
    pub const DEFAULT_CAPACITY: usize = 16;

    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Loads the image at `path` and registers it under `tag`
    ///
    /// Only RGB and RGBA images are accepted. Nothing is registered when
    /// loading, validation or upload fails, or when every unit is taken.
    ///
    /// # Returns
    /// The texture unit the new texture will be bound to
    pub fn register_texture(
        &mut self,
        path: &Path,
        tag: &str,
        loader: &dyn ImageLoader,
        backend: &mut dyn TextureBackend,
    ) -> Result<u32> {
        if self.entries.len() >= self.capacity {
            return Err(SceneError::TextureCapacity {
                tag: tag.to_string(),
                capacity: self.capacity,
            });
        }

        let image = loader.load(path)?;
        if !matches!(image.channels, 3 | 4) {
            return Err(SceneError::UnsupportedChannels {
                path: path.to_path_buf(),
                channels: image.channels,
            });
        }

        let handle = backend.upload(tag, &image)?;

        if self.resolve_texture_unit(tag).is_some() {
            warn!("Texture tag '{}' registered twice, lookups keep the first", tag);
        }

        let unit = self.entries.len() as u32;
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
        });

        info!(
            "Registered texture '{}' from {} ({}x{}, {} channels) on unit {}",
            tag,
            path.display(),
            image.width,
            image.height,
            image.channels,
            unit
        );

        Ok(unit)
    }

    /// Binds every texture to the unit matching its registration index
    pub fn bind_all_for_frame(&self, backend: &mut dyn TextureBackend) {
        for (unit, entry) in self.entries.iter().enumerate() {
            backend.bind(unit as u32, entry.handle);
        }
    }

    /// Texture unit of the first texture registered under `tag`
    pub fn resolve_texture_unit(&self, tag: &str) -> Option<u32> {
        self.entries
            .iter()
            .position(|entry| entry.tag == tag)
            .map(|index| index as u32)
    }

    /// GPU handle of the first texture registered under `tag`
    pub fn texture_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.handle)
    }

    /// Releases every texture; the registry is empty afterwards
    pub fn destroy_all(&mut self, backend: &mut dyn TextureBackend) {
        for entry in self.entries.drain(..) {
            backend.destroy(entry.handle);
        }
    }

    pub fn entries(&self) -> &[TextureEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
