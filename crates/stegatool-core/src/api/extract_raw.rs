use std::fs;
use std::path::{Path, PathBuf};

use image::ImageError;

use crate::media::image::{extract, PixelGrid};
use crate::{CodecOptions, StegaError};

pub fn prepare() -> ExtractRawApi {
    ExtractRawApi::default()
}

#[derive(Default, Debug)]
pub struct ExtractRawApi {
    secret_image: Option<PathBuf>,
    destination_file: Option<PathBuf>,
    options: CodecOptions,
}

impl ExtractRawApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the image that contains the watermark
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where the whole extraction window will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the extraction and blocks until it is finished
    ///
    /// No interpretation of the data is happening, the file receives exactly
    /// `window_size` bytes as gathered by the LSB algorithm.
    pub fn execute(self) -> Result<(), StegaError> {
        let Some(secret_image) = self.secret_image else {
            return Err(StegaError::SourceNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(StegaError::TargetNotSet);
        };

        let carrier = PixelGrid::open(&secret_image)?;
        let window = extract(&carrier, self.options.window_size)?;

        fs::write(&destination_file, window).map_err(|e| StegaError::WriteError {
            path: destination_file.clone(),
            source: ImageError::IoError(e),
        })
    }
}
