use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::app::Config;
use crate::catalog::Catalog;
use crate::controller::{Action, Controller, Outcome};
use crate::fetch::ImageFetcher;
use crate::session::SessionState;
use crate::store::LocalStore;
use crate::upload::upload_file;

pub fn cmd_download(name: &str, config: &Config, downloads_dir: Option<PathBuf>) -> Result<()> {
    let catalog = Catalog::builtin();
    let Some(record) = catalog.find(name).cloned() else {
        println!("No wallpaper named '{}'", name.trim());
        println!("See available names with: wallbrowse list");
        return Ok(());
    };

    let (connect_timeout, timeout) = config.timeouts();
    let fetcher = ImageFetcher::new(connect_timeout, timeout);
    let store = config.local_store(downloads_dir);
    let controller = Controller::new(&fetcher, &store);

    // A fresh session: only the file on disk says whether it was downloaded.
    let (state, _) = controller.dispatch(SessionState::new(), Action::Select(record));
    let (_, outcome) = controller.dispatch(state, Action::Download);

    if let Outcome::DownloadFailed(_) = outcome {
        bail!(outcome.message());
    }
    println!("{}", outcome.message());
    Ok(())
}

pub fn cmd_upload(path: &Path, store: &LocalStore) -> Result<()> {
    match upload_file(path, store) {
        Ok(saved) => {
            println!("Saved to {}", saved.display());
            Ok(())
        }
        Err(e) => bail!("Error uploading image: {}", e),
    }
}
