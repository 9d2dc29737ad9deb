mod app;
mod catalog;
mod cli;
mod cli_cmds;
mod controller;
mod error;
mod fetch;
mod logging;
mod session;
mod store;
mod ui;
mod upload;
mod utils;

use anyhow::Result;

fn main() -> Result<()> {
    cli::run()
}
