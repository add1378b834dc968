//! molt build コマンド
//!
//! データディレクトリから静的サイト（index.html + css/）を生成する。

use crate::catalog;
use crate::commands::print_warnings;
use crate::config::SiteConfig;
use crate::render::{render_page, STYLESHEETS};
use crate::state::UiState;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
pub struct Args {
    /// 出力先ディレクトリ
    #[arg(long, short = 'o', default_value = "site")]
    pub out: PathBuf,
}

pub async fn run(args: Args, data_dir: &Path) -> Result<(), String> {
    let catalog = catalog::load(data_dir);
    print_warnings(&catalog.warnings);

    let (config, config_warning) = SiteConfig::load(data_dir);
    if let Some(w) = config_warning {
        print_warnings(&[w]);
    }

    // 既定状態（ニュースタブ、両フィルタ「全部」）で描画する
    let page = render_page(&config, &catalog, &UiState::new());

    write_site(&args.out, &page).map_err(|e| format!("Failed to write site: {}", e))?;

    println!(
        "{} Generated {} ({} news cards, {} skill cards)",
        "✓".green(),
        args.out.join("index.html").display(),
        catalog.news.len(),
        catalog.skills.len()
    );

    Ok(())
}

/// index.html と外部スタイルシートを書き出す
fn write_site(out_dir: &Path, page: &str) -> std::io::Result<()> {
    let css_dir = out_dir.join("css");
    std::fs::create_dir_all(&css_dir)?;

    std::fs::write(out_dir.join("index.html"), page)?;
    for (file, content) in STYLESHEETS {
        std::fs::write(css_dir.join(file), content)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "build_test.rs"]
mod tests;
