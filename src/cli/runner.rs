use anyhow::Result;
use clap::Parser;

use super::{Cli, Commands};
use crate::cli_cmds::*;
use crate::logging::{self, LogTarget};
use crate::app;

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it logs to a file.
    logging::init(match cli.command {
        Some(_) => LogTarget::Stderr,
        None => LogTarget::File,
    });

    let config = app::Config::load()?;

    match cli.command {
        Some(Commands::List { query, json }) => {
            cmd_list(query.as_deref().unwrap_or(""), json)?;
        }
        Some(Commands::Info { name }) => {
            cmd_info(&name, &config.local_store(cli.downloads_dir))?;
        }
        Some(Commands::Download { name }) => {
            cmd_download(&name, &config, cli.downloads_dir)?;
        }
        Some(Commands::Upload { path }) => {
            cmd_upload(&path, &config.local_store(cli.downloads_dir))?;
        }
        None => {
            app::run_tui(config, cli.downloads_dir, cli.search)?;
        }
    }

    Ok(())
}
