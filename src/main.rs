mod catalog;
mod cli;
mod clipboard;
mod commands;
mod config;
mod error;
mod filter;
mod http;
mod output;
mod render;
mod state;
mod tui;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
