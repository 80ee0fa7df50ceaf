// src/gfx/resources/mod.rs
//! Scene resource management
//!
//! Textures, materials and lights, addressed by string tags.

pub mod image_loader;
pub mod lights;
pub mod material;
pub mod texture_registry;
pub mod texture_resource;

// Re-export main types
pub use image_loader::{DecodedImage, FsImageLoader, ImageLoader};
pub use lights::{apply_lights, Light, MAX_LIGHTS};
pub use material::{Material, MaterialCatalog};
pub use texture_registry::{TextureBackend, TextureEntry, TextureHandle, TextureRegistry};
pub use texture_resource::{TextureResource, UnitTable, WgpuTextures};

/// Registered textures and defined materials
///
/// Written during scene setup, read-only while rendering.
#[derive(Debug, Default)]
pub struct SceneResources {
    pub textures: TextureRegistry,
    pub materials: MaterialCatalog,
}

impl SceneResources {
    pub fn new(max_texture_units: usize) -> Self {
        Self {
            textures: TextureRegistry::new(max_texture_units),
            materials: MaterialCatalog::new(),
        }
    }

    pub fn resolve_texture_unit(&self, tag: &str) -> Option<u32> {
        self.textures.resolve_texture_unit(tag)
    }

    pub fn resolve_material(&self, tag: &str) -> Option<&Material> {
        self.materials.get_material(tag)
    }
}
