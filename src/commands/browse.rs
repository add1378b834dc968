//! molt browse コマンド
//!
//! TUI を起動してハブを閲覧する。

use crate::catalog;
use crate::config::SiteConfig;
use crate::tui;
use clap::Parser;
use std::path::Path;

#[derive(Debug, Parser)]
pub struct Args {}

pub async fn run(_args: Args, data_dir: &Path) -> Result<(), String> {
    let catalog = catalog::load(data_dir);
    let (config, _) = SiteConfig::load(data_dir);

    tui::run(catalog, config).map_err(|e| format!("TUI error: {}", e))
}
