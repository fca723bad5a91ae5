use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::shared::{file_name_of, list_images};
use crate::detection::{detect, Detection};
use crate::media::image::{extract, PixelGrid};
use crate::{CodecOptions, IdentityList, Result, StegaError};

pub fn prepare() -> VerifyApi {
    VerifyApi::default()
}

/// The outcome of scanning one candidate image
#[derive(Debug)]
pub struct VerifyReport {
    pub file_name: String,
    pub outcome: Result<Detection>,
    /// index of the identity matching the detected message, when an identity list was given
    pub identity_index: Option<usize>,
}

#[derive(Default, Debug)]
pub struct VerifyApi {
    candidates_folder: Option<PathBuf>,
    identity_list: Option<PathBuf>,
    options: CodecOptions,
}

impl VerifyApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the folder with the images to scan, only `jpg` and `png` files are used
    pub fn from_candidates_folder(mut self, candidates_folder: impl AsRef<Path>) -> Self {
        self.candidates_folder = Some(candidates_folder.as_ref().to_path_buf());
        self
    }

    /// Match detected messages against this identity list
    /// If `None` is passed, messages are reported without an identity index
    pub fn use_identity_list<P: AsRef<Path>>(mut self, identity_list: Option<P>) -> Self {
        self.identity_list = identity_list.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Execute the scan and blocks until it is finished
    ///
    /// Only an unusable folder or identity list is an error, unreadable images are part of
    /// the reports.
    pub fn execute(self) -> Result<Vec<VerifyReport>> {
        let Some(candidates_folder) = self.candidates_folder else {
            return Err(StegaError::SourceNotSet);
        };

        let images = list_images(&candidates_folder)?;
        let identities = self
            .identity_list
            .as_ref()
            .map(IdentityList::from_file)
            .transpose()?;
        info!("Scanning {} images in {candidates_folder:?}", images.len());

        let reports = images
            .iter()
            .map(|path| {
                let outcome = verify_file(path, &self.options);
                let identity_index = match (&outcome, &identities) {
                    (Ok(detection), Some(identities)) => {
                        detection.message().and_then(|m| identities.position(m))
                    }
                    _ => None,
                };

                VerifyReport {
                    file_name: file_name_of(path),
                    outcome,
                    identity_index,
                }
            })
            .collect();

        Ok(reports)
    }
}

/// Loads `path` and runs the extraction and the detection heuristic on it
pub fn verify_file(path: &Path, options: &CodecOptions) -> Result<Detection> {
    let detection = PixelGrid::open(path)
        .and_then(|carrier| extract(&carrier, options.window_size))
        .map(|window| detect(&window));

    match &detection {
        Ok(Detection::Watermark(text)) => debug!("{path:?} carries {text:?}"),
        Ok(Detection::NoWatermark) => debug!("{path:?} carries no watermark"),
        Err(e) => warn!("Cannot verify {path:?}: {e}"),
    }

    detection
}
