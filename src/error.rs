//! Error types for asset loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning an asset file into a texture.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The file could not be read
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not an image raylib can decode
    #[error("failed to decode image {path:?}: {message}")]
    Decode { path: PathBuf, message: String },

    /// The decoded image could not be uploaded as a texture
    #[error("failed to create texture for {path:?}: {message}")]
    Upload { path: PathBuf, message: String },
}
