use crate::catalog::WallpaperRecord;
use crate::error::StoreError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory for saved uploads, relative to the working directory.
pub const UPLOADS_DIR: &str = "uploaded_wallpapers";

/// Resolve `<home>/Downloads` from the process environment.
pub fn resolve_downloads_dir() -> Result<PathBuf, StoreError> {
    downloads_dir_from(cfg!(windows), |key| std::env::var_os(key))
}

/// Windows reads `USERPROFILE`, everything else reads `HOME`.
fn home_var(windows: bool) -> &'static str {
    if windows {
        "USERPROFILE"
    } else {
        "HOME"
    }
}

fn downloads_dir_from(
    windows: bool,
    lookup: impl Fn(&'static str) -> Option<OsString>,
) -> Result<PathBuf, StoreError> {
    let var = home_var(windows);
    match lookup(var) {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join("Downloads")),
        _ => Err(StoreError::HomeUnset(var)),
    }
}

/// Filesystem side of the browser: downloads and uploads.
#[derive(Debug, Clone)]
pub struct LocalStore {
    /// Resolved once at construction. `None` when the home variable is missing.
    downloads_dir: Option<PathBuf>,
    uploads_dir: PathBuf,
}

impl LocalStore {
    /// An override replaces the environment lookup.
    pub fn new(downloads_override: Option<PathBuf>, uploads_dir: PathBuf) -> Self {
        Self {
            downloads_dir: downloads_override.or_else(|| resolve_downloads_dir().ok()),
            uploads_dir,
        }
    }

    #[cfg(test)]
    pub(crate) fn without_downloads_dir(uploads_dir: PathBuf) -> Self {
        Self {
            downloads_dir: None,
            uploads_dir,
        }
    }

    pub fn downloads_dir(&self) -> Result<PathBuf, StoreError> {
        self.downloads_dir
            .clone()
            .ok_or(StoreError::HomeUnset(home_var(cfg!(windows))))
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    /// Where `record` lands when downloaded: `<downloads>/<name>.jpg`.
    pub fn download_path(&self, record: &WallpaperRecord) -> Result<PathBuf, StoreError> {
        Ok(self.downloads_dir()?.join(format!("{}.jpg", record.name)))
    }

    /// True when a previous download of `record` exists on disk.
    pub fn is_on_disk(&self, record: &WallpaperRecord) -> bool {
        self.download_path(record)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Write downloaded bytes to `path`, a result of [`Self::download_path`].
    pub fn save_download(&self, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        write_file(path, bytes)
    }

    /// Save uploaded bytes under `filename`. An existing file is overwritten.
    pub fn save_upload(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        let is_plain_name = !filename.is_empty()
            && Path::new(filename).file_name().and_then(|n| n.to_str()) == Some(filename);
        if !is_plain_name {
            return Err(StoreError::InvalidFileName(filename.to_string()));
        }

        create_dir(&self.uploads_dir)?;
        let path = self.uploads_dir.join(filename);
        if path.exists() {
            tracing::info!(path = %path.display(), "overwriting existing upload");
        }
        write_file(&path, bytes)?;
        tracing::info!(path = %path.display(), "upload saved");
        Ok(path)
    }
}

fn create_dir(path: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(path).map_err(|source| StoreError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    fs::write(path, bytes).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}
