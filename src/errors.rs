//! Error types
//!
//! Every failure in the scene pipeline is non-fatal to rendering: callers
//! report the error and carry on without the resource. The enum exists so
//! that reports carry enough context to be useful in a log line.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing scene resources.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The image file could not be opened or decoded.
    #[error("Could not load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Only RGB and RGBA images can be uploaded.
    #[error("Not implemented to handle image {path} with {channels} channels")]
    UnsupportedChannels { path: PathBuf, channels: u8 },

    /// All configured texture units are taken.
    #[error("Cannot register texture '{tag}': all {capacity} texture units are in use")]
    TextureCapacity { tag: String, capacity: usize },

    /// The GPU backend refused the texture data.
    #[error("Texture upload failed for '{tag}': {reason}")]
    TextureUpload { tag: String, reason: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SceneError>;
