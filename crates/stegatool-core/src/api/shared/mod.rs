use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::{Result, StegaError};

/// file extensions that are treated as images, compared case sensitive
pub const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "png"];

pub fn is_image_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

/// All image candidates directly inside `folder`, ordered by file name.
///
/// Every other entry is skipped without further notice. A dotfile such as `.png` has no
/// extension and is skipped as well.
pub fn list_images(folder: &Path) -> Result<Vec<PathBuf>> {
    let folder_error = |source: std::io::Error| StegaError::DirectoryError {
        path: folder.to_path_buf(),
        source,
    };

    let mut images = Vec::new();
    for entry in fs::read_dir(folder).map_err(folder_error)? {
        let path = entry.map_err(folder_error)?.path();
        if is_image_candidate(&path) {
            images.push(path);
        } else {
            debug!("Ignoring {path:?}, not a jpg or png file");
        }
    }
    images.sort();

    Ok(images)
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
