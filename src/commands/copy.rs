//! molt copy コマンド
//!
//! スキルのインストールコマンドをクリップボードへコピーする。
//! コピー失敗は致命的ではなく、コマンドを出力して手動コピーに委ねる。

use crate::catalog;
use crate::clipboard::{copy_text, SystemClipboard};
use crate::commands::print_warnings;
use crate::error::HubError;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::Path;

#[derive(Debug, Parser)]
pub struct Args {
    /// スキル名
    pub name: String,

    /// コピーせず標準出力へ書き出す
    #[arg(long)]
    pub print: bool,
}

pub async fn run(args: Args, data_dir: &Path) -> Result<(), String> {
    let catalog = catalog::load(data_dir);
    print_warnings(&catalog.warnings);

    let skill = catalog
        .find_skill(&args.name)
        .ok_or_else(|| HubError::SkillNotFound(args.name.clone()).to_string())?;

    if args.print {
        println!("{}", skill.install_command);
        return Ok(());
    }

    let mut clipboard = SystemClipboard::new();
    if copy_text(&mut clipboard, &skill.install_command) {
        println!(
            "{} Copied install command for '{}'",
            "✓".green(),
            skill.name
        );
        println!("  {}", skill.install_command);
    } else {
        eprintln!(
            "{} Clipboard unavailable, copy manually:",
            "•".yellow()
        );
        println!("{}", skill.install_command);
    }

    Ok(())
}
