use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::shared::{file_name_of, list_images};
use crate::batch::{watermark_image, BatchReport, ImageReport};
use crate::media::image::PixelGrid;
use crate::media::Persist;
use crate::{CodecOptions, IdentityList, StegaError};

pub fn prepare() -> CreateApi {
    CreateApi::default()
}

#[derive(Default, Debug)]
pub struct CreateApi {
    source_folder: Option<PathBuf>,
    identity_list: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    options: CodecOptions,
}

impl CreateApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the folder with the source images, only `jpg` and `png` files are used
    pub fn from_source_folder(mut self, source_folder: impl AsRef<Path>) -> Self {
        self.source_folder = Some(source_folder.as_ref().to_path_buf());
        self
    }

    /// This is the text file with one identity per line
    pub fn with_identity_list(mut self, identity_list: impl AsRef<Path>) -> Self {
        self.identity_list = Some(identity_list.as_ref().to_path_buf());
        self
    }

    /// This is the folder where all variants will be saved to, it must not exist yet
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    /// Execute the batch and blocks until it is finished
    ///
    /// Errors are only returned for the setup, i.e. the source folder, the identity list
    /// and the output folder. Failures of single images or variants end up in the report.
    pub fn execute(self) -> Result<BatchReport, StegaError> {
        let Some(source_folder) = self.source_folder else {
            return Err(StegaError::SourceNotSet);
        };
        let Some(identity_list) = self.identity_list else {
            return Err(StegaError::IdentityListNotSet);
        };
        let Some(output_folder) = self.output_folder else {
            return Err(StegaError::TargetNotSet);
        };

        let images = list_images(&source_folder)?;
        let identities = IdentityList::from_file(&identity_list)?;
        fs::create_dir(&output_folder).map_err(|source| StegaError::DirectoryError {
            path: output_folder.clone(),
            source,
        })?;
        info!(
            "Watermarking {} images for {} identities into {output_folder:?}",
            images.len(),
            identities.len()
        );

        let mut report = BatchReport::default();
        for (image_index, path) in images.iter().enumerate() {
            let file_name = file_name_of(path);
            let source = match PixelGrid::open(path) {
                Ok(source) => source,
                Err(reason) => {
                    warn!("Skipping {path:?}: {reason}");
                    report.images.push(ImageReport::Skipped {
                        file_name,
                        image_index,
                        reason,
                    });
                    continue;
                }
            };

            let variants = watermark_image(
                &source,
                image_index,
                &file_name,
                &identities,
                &self.options,
                |variant_name, variant| variant.save_as(&output_folder.join(variant_name)),
            );
            report.images.push(ImageReport::Processed(variants));
        }
        info!(
            "{} variants written, {} variants failed, {} images skipped",
            report.written(),
            report.failed(),
            report.skipped_images()
        );

        Ok(report)
    }
}
