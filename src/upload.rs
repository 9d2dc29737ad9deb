use crate::error::UploadError;
use crate::store::LocalStore;
use std::fs;
use std::path::{Path, PathBuf};

/// File types accepted for upload.
pub const UPLOAD_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Check if a path has an extension accepted for upload.
pub fn is_upload_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let ext = e.to_lowercase();
            UPLOAD_EXTENSIONS.iter().any(|&supported| supported == ext)
        })
        .unwrap_or(false)
}

/// Validate a local image file and save a copy into the uploads directory.
///
/// The original bytes are kept; decoding only proves the file is an image.
pub fn upload_file(path: &Path, store: &LocalStore) -> Result<PathBuf, UploadError> {
    if !is_upload_image(path) {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();
        return Err(UploadError::UnsupportedExtension(ext));
    }

    let bytes = fs::read(path).map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    image::load_from_memory(&bytes)?;

    // Extension check above guarantees a file name.
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(store.save_upload(&filename, &bytes)?)
}
