use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegaError {
    /// Represents an unreadable or corrupt carrier image, for example a broken PNG file
    #[error("Image {path:?} could not be loaded: {source}")]
    ImageLoadError { path: PathBuf, source: ImageError },

    /// Represents a carrier image with fewer color channels than the LSB codec needs
    #[error("Image must have at least 3 channels, but it has {0}")]
    InsufficientChannels(u8),

    /// Represents a message that needs more bits than the carrier image can hold
    #[error(
        "Capacity Error: the message needs {needed} bits, but the image can only hold {capacity} bits"
    )]
    CapacityExceeded { needed: u64, capacity: u64 },

    /// Represents a failure to encode or save a watermarked image
    #[error("Image {path:?} could not be written: {source}")]
    WriteError { path: PathBuf, source: ImageError },

    /// Represents a failure to open, list or create a directory
    #[error("Directory {path:?} is not usable: {source}")]
    DirectoryError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Represents a failure to open or read the identity list file
    #[error("Identity list {path:?} could not be read: {source}")]
    IdentityListError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("API Error: No source set")]
    SourceNotSet,

    #[error("API Error: No target set")]
    TargetNotSet,

    #[error("API Error: No identity list set")]
    IdentityListNotSet,
}
