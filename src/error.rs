use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to retrieve or decode a remote wallpaper.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("not a readable image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("failed to encode JPEG: {0}")]
    Encode(image::ImageError),
}

/// Failure to resolve a target directory or write a file into it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} is not set, cannot locate the downloads directory")]
    HomeUnset(&'static str),
    #[error("invalid file name: {0:?}")]
    InvalidFileName(String),
    #[error("failed to create {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Failure to accept a user-supplied image file.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported file type {0:?} (expected jpg, jpeg or png)")]
    UnsupportedExtension(String),
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("not a readable image: {0}")]
    Decode(#[from] image::ImageError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
