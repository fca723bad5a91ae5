use std::path::Path;

use crate::api::verify::VerifyReport;
use crate::batch::BatchReport;
use crate::{CodecOptions, StegaError};

pub fn create_watermarks(
    source_folder: &Path,
    identity_list: &Path,
    output_folder: &Path,
    options: CodecOptions,
) -> Result<BatchReport, StegaError> {
    crate::api::create::prepare()
        .with_options(options)
        .from_source_folder(source_folder)
        .with_identity_list(identity_list)
        .into_output_folder(output_folder)
        .execute()
}

pub fn verify_watermarks(
    candidates_folder: &Path,
    identity_list: Option<&Path>,
    options: CodecOptions,
) -> Result<Vec<VerifyReport>, StegaError> {
    crate::api::verify::prepare()
        .with_options(options)
        .from_candidates_folder(candidates_folder)
        .use_identity_list(identity_list)
        .execute()
}

/// extract the raw window, no content interpretation is happening.
pub fn extract_raw(
    secret_image: &Path,
    destination_file: &Path,
    options: CodecOptions,
) -> Result<(), StegaError> {
    crate::api::extract_raw::prepare()
        .with_options(options)
        .from_secret_file(secret_image)
        .into_raw_file(destination_file)
        .execute()
}
