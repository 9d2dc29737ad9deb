use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wallbrowse")]
#[command(author = "MrMattias")]
#[command(version)]
#[command(about = "Searchable wallpaper browser for the terminal")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Start the browser with this search text
    #[arg(short, long)]
    pub(crate) search: Option<String>,

    /// Save downloads here instead of the platform Downloads folder
    #[arg(long, global = true)]
    pub(crate) downloads_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List wallpapers whose name or tags contain QUERY
    List {
        /// Case-insensitive search text (all wallpapers if omitted)
        query: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show name, tags and download state of a wallpaper
    Info {
        /// Wallpaper name (case-insensitive)
        name: String,
    },
    /// Download a wallpaper into the downloads folder
    Download {
        /// Wallpaper name (case-insensitive)
        name: String,
    },
    /// Copy a local jpg/jpeg/png into the uploads folder
    Upload {
        /// Path to the image
        path: PathBuf,
    },
}
