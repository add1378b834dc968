//! molt news コマンド
//!
//! ニュース一覧を表示する。

use crate::catalog::{self, NewsItem};
use crate::commands::print_warnings;
use crate::filter::{filter_by_category, ALL_KEY};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::Path;

#[derive(Debug, Parser)]
pub struct Args {
    /// Filter by category key (e.g. 新闻, 教程)
    #[arg(long)]
    pub category: Option<String>,

    /// Maximum number of items to show
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only titles
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub async fn run(args: Args, data_dir: &Path) -> Result<(), String> {
    let catalog = catalog::load(data_dir);
    print_warnings(&catalog.warnings);

    let total_count = catalog.news.len();
    let key = args.category.as_deref().unwrap_or(ALL_KEY);

    let mut filtered = filter_by_category(&catalog.news, key);
    if let Some(limit) = args.limit {
        filtered.truncate(limit);
    }

    if args.json {
        print_json(&filtered)?;
    } else if args.simple {
        print_simple(&filtered, total_count);
    } else {
        print_table(&filtered, total_count);
    }

    Ok(())
}

fn print_table(items: &[&NewsItem], total_count: usize) {
    if items.is_empty() {
        if total_count == 0 {
            println!("No news items loaded");
        } else {
            println!("No news items matched");
        }
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Title", "Category", "Source", "Published"]);

    for item in items {
        table.add_row(vec![
            truncate(&item.title, 48),
            item.category.clone(),
            item.source.clone(),
            item.published_at.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    println!("{table}");
    println!("{} item(s)", items.len());
}

fn print_json(items: &[&NewsItem]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(items)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize news items: {}", e))
}

fn print_simple(items: &[&NewsItem], total_count: usize) {
    if items.is_empty() {
        if total_count == 0 {
            println!("No news items loaded");
        } else {
            println!("No news items matched");
        }
        return;
    }
    for item in items {
        println!("{}", item.title);
    }
}

/// 長いタイトルの省略表示
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}…", truncated)
}

#[cfg(test)]
#[path = "news_test.rs"]
mod tests;
