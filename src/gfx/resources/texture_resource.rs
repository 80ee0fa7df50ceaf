//! Texture resource management for wgpu
//!
//! Provides the wgpu implementation of [`TextureBackend`]: scene textures are
//! uploaded as mipmapped RGBA textures with repeat wrapping, and bound
//! texture units are tracked so the render pipeline can build its sampler
//! bind group from them.

use image::{imageops, RgbaImage};
use log::debug;

use super::image_loader::DecodedImage;
use super::texture_registry::{TextureBackend, TextureHandle};
use crate::errors::{Result, SceneError};

/// GPU texture resource containing texture, view, and sampler
///
/// Bundles the three main components needed for texture operations:
/// - Texture: The actual GPU memory allocation
/// - View: Interface for shader access
/// - Sampler: Filtering and addressing configuration
#[derive(Clone)]
pub struct TextureResource {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl TextureResource {
    /// Format of every scene texture
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Creates a repeating, linearly filtered 2D texture with a full mip chain
    ///
    /// Mip levels are generated on the CPU by successive halving of the base
    /// image, then each level is written with its own copy.
    ///
    /// # Arguments
    /// * `device` - WGPU device for creating resources
    /// * `queue` - WGPU queue for uploading data
    /// * `rgba` - Raw RGBA8 pixel data (4 bytes per pixel)
    /// * `width` - Width of the base level in pixels
    /// * `height` - Height of the base level in pixels
    /// * `label` - Debug label for the texture
    pub fn create_mipmapped(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: Vec<u8>,
        width: u32,
        height: u32,
        label: &str,
    ) -> Result<Self> {
        let base = RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
            SceneError::TextureUpload {
                tag: label.to_string(),
                reason: format!("pixel buffer does not match {}x{} RGBA", width, height),
            }
        })?;

        let mip_level_count = mip_level_count(width, height);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let mut level_image = base;
        for mip_level in 0..mip_level_count {
            if mip_level > 0 {
                let w = (width >> mip_level).max(1);
                let h = (height >> mip_level).max(1);
                level_image = imageops::resize(&level_image, w, h, imageops::FilterType::Triangle);
            }

            let (w, h) = level_image.dimensions();
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                level_image.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * w),
                    rows_per_image: Some(h),
                },
                wgpu::Extent3d {
                    width: w,
                    height: h,
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("{} Sampler", label)),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Ok(Self {
            texture,
            view,
            sampler,
        })
    }
}

/// Number of levels down to 1x1
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// Scene textures living on a wgpu device
///
/// Handles index into the texture table; destroyed slots stay empty so
/// handles are never reused.
pub struct WgpuTextures {
    device: wgpu::Device,
    queue: wgpu::Queue,
    textures: Vec<Option<TextureResource>>,
    units: UnitTable,
}

/// Which handle each texture unit is bound to
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UnitTable {
    units: Vec<Option<TextureHandle>>,
}

impl UnitTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handle` to `unit`, growing the table as needed
    pub fn bind(&mut self, unit: u32, handle: TextureHandle) {
        let unit = unit as usize;
        if self.units.len() <= unit {
            self.units.resize(unit + 1, None);
        }
        self.units[unit] = Some(handle);
    }

    /// Clears every unit bound to `handle`
    pub fn release(&mut self, handle: TextureHandle) {
        for unit in self.units.iter_mut() {
            if *unit == Some(handle) {
                *unit = None;
            }
        }
    }

    pub fn get(&self, unit: u32) -> Option<TextureHandle> {
        self.units.get(unit as usize).copied().flatten()
    }

    /// Number of units that have been bound at least once
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl WgpuTextures {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            device,
            queue,
            textures: Vec::new(),
            units: UnitTable::new(),
        }
    }

    /// Texture currently bound to `unit`
    pub fn bound(&self, unit: u32) -> Option<&TextureResource> {
        let handle = self.units.get(unit)?;
        self.textures.get(handle.0 as usize)?.as_ref()
    }

    /// Number of units that have been bound at least once
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }
}

impl TextureBackend for WgpuTextures {
    fn upload(&mut self, tag: &str, image: &DecodedImage) -> Result<TextureHandle> {
        let rgba = image.to_rgba8().ok_or_else(|| SceneError::TextureUpload {
            tag: tag.to_string(),
            reason: format!("{} channel images cannot be uploaded", image.channels),
        })?;
        if image.width == 0 || image.height == 0 {
            return Err(SceneError::TextureUpload {
                tag: tag.to_string(),
                reason: "image has no pixels".to_string(),
            });
        }

        let resource = TextureResource::create_mipmapped(
            &self.device,
            &self.queue,
            rgba,
            image.width,
            image.height,
            tag,
        )?;

        let handle = TextureHandle(self.textures.len() as u32);
        self.textures.push(Some(resource));
        debug!("Uploaded texture '{}' as {:?}", tag, handle);
        Ok(handle)
    }

    fn bind(&mut self, unit: u32, handle: TextureHandle) {
        self.units.bind(unit, handle);
    }

    fn destroy(&mut self, handle: TextureHandle) {
        if let Some(slot) = self.textures.get_mut(handle.0 as usize) {
            if let Some(resource) = slot.take() {
                resource.texture.destroy();
            }
        }
        self.units.release(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mip_level_count() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(2, 2), 2);
        assert_eq!(mip_level_count(1024, 512), 11);
        assert_eq!(mip_level_count(300, 17), 9);
    }

    #[test]
    fn test_unit_table_grows_to_highest_unit() {
        let mut units = UnitTable::new();
        assert!(units.is_empty());

        units.bind(2, TextureHandle(7));
        assert_eq!(units.len(), 3);
        assert_eq!(units.get(0), None);
        assert_eq!(units.get(2), Some(TextureHandle(7)));
        assert_eq!(units.get(9), None);

        units.bind(2, TextureHandle(8));
        assert_eq!(units.get(2), Some(TextureHandle(8)));
        assert_eq!(units.len(), 3);
    }

    #[test]
    fn test_unit_table_release_clears_every_binding() {
        let mut units = UnitTable::new();
        units.bind(0, TextureHandle(1));
        units.bind(1, TextureHandle(2));
        units.bind(3, TextureHandle(1));

        units.release(TextureHandle(1));
        assert_eq!(units.get(0), None);
        assert_eq!(units.get(1), Some(TextureHandle(2)));
        assert_eq!(units.get(3), None);
        assert_eq!(units.len(), 4);

        // releasing an unbound handle changes nothing
        let before = units.clone();
        units.release(TextureHandle(42));
        assert_eq!(units, before);
    }
}
