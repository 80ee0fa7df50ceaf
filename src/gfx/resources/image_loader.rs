//! Image decoding for texture registration

use std::path::Path;

use image::DynamicImage;
use log::debug;

use crate::errors::{Result, SceneError};

/// Decoded pixel data, rows ordered bottom to top
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Interleaved channels per pixel
    pub channels: u8,
}

impl DecodedImage {
    /// Expands the pixels to RGBA8 for GPU upload
    ///
    /// Returns `None` for anything other than 3 or 4 channels.
    pub fn to_rgba8(&self) -> Option<Vec<u8>> {
        match self.channels {
            4 => Some(self.pixels.clone()),
            3 => Some(
                self.pixels
                    .chunks_exact(3)
                    .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
                    .collect(),
            ),
            _ => None,
        }
    }
}

/// Turns an image file into pixels
///
/// Images are flipped vertically on load so that the first row is the
/// bottom of the image, matching texture coordinate origin at the bottom
/// left.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<DecodedImage>;
}

/// Loads images from disk with the `image` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<DecodedImage> {
        let image = image::open(path)
            .map_err(|source| SceneError::ImageLoad {
                path: path.to_path_buf(),
                source,
            })?
            .flipv();

        let (width, height) = (image.width(), image.height());
        let channels = image.color().channel_count();

        // 16-bit and float images are narrowed to 8 bits per channel; the
        // channel count is kept so unsupported layouts are still rejected.
        let pixels = match channels {
            3 => image.into_rgb8().into_raw(),
            4 => image.into_rgba8().into_raw(),
            _ => narrow_to_u8(image),
        };

        debug!(
            "Loaded image {}: {}x{}, {} channels",
            path.display(),
            width,
            height,
            channels
        );

        Ok(DecodedImage {
            pixels,
            width,
            height,
            channels,
        })
    }
}

fn narrow_to_u8(image: DynamicImage) -> Vec<u8> {
    match image.color().channel_count() {
        1 => image.into_luma8().into_raw(),
        _ => image.into_luma_alpha8().into_raw(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, LumaA, Rgb};

    #[test]
    fn test_rgb_expands_to_rgba() {
        let image = DecodedImage {
            pixels: vec![1, 2, 3, 4, 5, 6],
            width: 2,
            height: 1,
            channels: 3,
        };
        assert_eq!(image.to_rgba8(), Some(vec![1, 2, 3, 255, 4, 5, 6, 255]));
    }

    #[test]
    fn test_two_channels_not_uploadable() {
        let image = DecodedImage {
            pixels: vec![0; 8],
            width: 2,
            height: 2,
            channels: 2,
        };
        assert_eq!(image.to_rgba8(), None);
    }

    #[test]
    fn test_load_flips_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stripes.png");

        // Top row red, bottom row blue
        let buffer = ImageBuffer::from_fn(1, 2, |_, y| {
            if y == 0 {
                Rgb([255u8, 0, 0])
            } else {
                Rgb([0u8, 0, 255])
            }
        });
        buffer.save(&path).unwrap();

        let image = FsImageLoader.load(&path).unwrap();
        assert_eq!(image.channels, 3);
        assert_eq!((image.width, image.height), (1, 2));
        assert_eq!(image.pixels, vec![0, 0, 255, 255, 0, 0]);
    }

    #[test]
    fn test_load_reports_channel_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray_alpha.png");
        ImageBuffer::from_pixel(2, 2, LumaA([128u8, 255])).save(&path).unwrap();

        let image = FsImageLoader.load(&path).unwrap();
        assert_eq!(image.channels, 2);
        assert_eq!(image.pixels.len(), 8);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = FsImageLoader.load(Path::new("/nonexistent/tile.jpg"));
        assert!(matches!(result, Err(SceneError::ImageLoad { .. })));
    }
}
